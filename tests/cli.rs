use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use image::{Rgba, RgbaImage};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("spritecut-cli-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn spritecut(source: &Path, destination: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_spritecut"))
        .arg("-s")
        .arg(source)
        .arg("-o")
        .arg(destination)
        .output()
        .unwrap()
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_success_prints_one_line_and_exits_zero() {
    let dir = scratch_dir("success");
    let source = dir.join("sheet.png");
    RgbaImage::from_pixel(800, 400, Rgba([10, 20, 30, 255]))
        .save(&source)
        .unwrap();
    let destination = dir.join("a").join("b").join("face.png");

    let output = spritecut(&source, &destination);

    assert_eq!(output.status.code(), Some(0));
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains(&destination.display().to_string()));
    assert!(output.stderr.is_empty());

    let written = image::open(&destination).unwrap();
    assert_eq!((written.width(), written.height()), (200, 200));
}

#[test]
fn test_missing_source_prints_one_error_line_and_exits_one() {
    let dir = scratch_dir("missing");
    let source = dir.join("absent.png");
    let destination = dir.join("out").join("face.png");

    let output = spritecut(&source, &destination);

    assert_eq!(output.status.code(), Some(1));
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("Error: "));
    assert!(lines[0].contains("absent.png"));
    assert!(output.stderr.is_empty());
    assert!(!destination.exists());
}

#[test]
fn test_output_over_source_is_refused() {
    let dir = scratch_dir("overwrite");
    let source = dir.join("sheet.png");
    RgbaImage::new(80, 40).save(&source).unwrap();
    let before = std::fs::read(&source).unwrap();

    let output = spritecut(&source, &source);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_lines(&output).len(), 1);
    assert_eq!(std::fs::read(&source).unwrap(), before);
}
