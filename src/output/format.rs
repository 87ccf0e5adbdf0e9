use std::fs;
use std::io::Cursor;
use std::path::Path;

use anyhow::Result;
use image::{DynamicImage, ImageFormat};
use log::debug;

use crate::cli::CompressionLevel;
use crate::error::SpriteCutError;

/// Pick the output encoder from the destination's file extension
pub fn output_format(path: &Path) -> Result<ImageFormat> {
    ImageFormat::from_path(path)
        .ok()
        .filter(|format| format.writing_enabled())
        .ok_or_else(|| SpriteCutError::UnsupportedFormat(path.to_path_buf()).into())
}

/// Create every missing directory above `path`
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| SpriteCutError::CreateDir {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    Ok(())
}

/// Save an image in the format implied by its extension.
///
/// The image is encoded in memory first so an encoder failure never leaves a
/// truncated file behind. PNG output is optionally run through oxipng.
pub fn save_image(
    image: &DynamicImage,
    path: &Path,
    compress: Option<CompressionLevel>,
) -> Result<()> {
    let format = output_format(path)?;

    ensure_parent_dir(path)?;

    let mut encoded = Cursor::new(Vec::new());
    encode(image, format, &mut encoded).map_err(|e| SpriteCutError::ImageSave {
        path: path.to_path_buf(),
        source: e,
    })?;

    let output_data = match compress {
        Some(level) if format == ImageFormat::Png => {
            let opts = match level {
                CompressionLevel::Level(n) => oxipng::Options::from_preset(n),
                CompressionLevel::Max => oxipng::Options::max_compression(),
            };
            let raw = encoded.into_inner();
            let optimized = oxipng::optimize_from_memory(&raw, &opts).map_err(|e| {
                SpriteCutError::PngCompress {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                }
            })?;
            debug!("oxipng: {} -> {} bytes", raw.len(), optimized.len());
            optimized
        }
        Some(_) => {
            debug!("Skipping compression for non-PNG output {}", path.display());
            encoded.into_inner()
        }
        None => encoded.into_inner(),
    };

    fs::write(path, output_data).map_err(|e| SpriteCutError::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

/// Encode, converting the colour type when the target format cannot carry it
fn encode(
    image: &DynamicImage,
    format: ImageFormat,
    out: &mut Cursor<Vec<u8>>,
) -> image::ImageResult<()> {
    match format {
        // JPEG has no alpha channel
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(image.to_rgb8()).write_to(out, format),
        _ => image.write_to(out, format),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("spritecut-output-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn sample() -> DynamicImage {
        let mut img = RgbaImage::new(6, 4);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            *pixel = Rgba([x as u8 * 40, y as u8 * 60, 128, 255]);
        }
        DynamicImage::ImageRgba8(img)
    }

    #[test]
    fn test_output_format_from_extension() {
        assert_eq!(output_format(Path::new("a/b.png")).unwrap(), ImageFormat::Png);
        assert_eq!(output_format(Path::new("a/b.JPG")).unwrap(), ImageFormat::Jpeg);
        assert!(output_format(Path::new("a/b")).is_err());
        assert!(output_format(Path::new("a/b.txt")).is_err());
    }

    #[test]
    fn test_save_creates_missing_directories() {
        let dir = scratch_dir("nested");
        let path = dir.join("deep").join("er").join("avatar.png");

        save_image(&sample(), &path, None).unwrap();

        let reloaded = image::open(&path).unwrap();
        assert_eq!((reloaded.width(), reloaded.height()), (6, 4));
        assert_eq!(reloaded.to_rgba8(), sample().to_rgba8());
    }

    #[test]
    fn test_save_into_existing_directory() {
        let dir = scratch_dir("existing");
        let path = dir.join("avatar.png");

        save_image(&sample(), &path, None).unwrap();
        save_image(&sample(), &path, None).unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn test_unsupported_extension_writes_nothing() {
        let dir = scratch_dir("unsupported");
        let path = dir.join("out").join("avatar.xyz");

        let err = save_image(&sample(), &path, None).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SpriteCutError>(),
            Some(SpriteCutError::UnsupportedFormat(_))
        ));
        assert!(!path.exists());
        assert!(!dir.join("out").exists());
    }

    #[test]
    fn test_jpeg_drops_alpha() {
        let dir = scratch_dir("jpeg");
        let path = dir.join("avatar.jpg");

        save_image(&sample(), &path, None).unwrap();
        let reloaded = image::open(&path).unwrap();
        assert_eq!((reloaded.width(), reloaded.height()), (6, 4));
    }

    #[test]
    fn test_compressed_png_is_lossless() {
        let dir = scratch_dir("compress");
        let path = dir.join("avatar.png");

        save_image(&sample(), &path, Some(CompressionLevel::Level(2))).unwrap();
        let reloaded = image::open(&path).unwrap();
        assert_eq!(reloaded.to_rgba8(), sample().to_rgba8());
    }
}
