/// Crop bounds in real-valued pixel coordinates.
///
/// `right` and `bottom` are exclusive. Bounds may be fractional when the sheet
/// does not divide evenly into the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl CropRect {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Snap each bound to the nearest whole pixel, ties to even.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_pixels(&self) -> PixelRect {
        let snap = |v: f64| v.max(0.0).round_ties_even() as u32;

        let left = snap(self.left);
        let top = snap(self.top);
        let right = snap(self.right);
        let bottom = snap(self.bottom);

        PixelRect::new(
            left,
            top,
            right.saturating_sub(left),
            bottom.saturating_sub(top),
        )
    }
}

/// Integer crop region handed to the imaging backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check that the rect lies entirely inside an image of the given size
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        u64::from(self.x) + u64::from(self.width) <= u64::from(width)
            && u64::from(self.y) + u64::from(self.height) <= u64::from(height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_bounds_are_unchanged() {
        let rect = CropRect::new(400.0, 0.0, 600.0, 200.0);
        assert_eq!(rect.to_pixels(), PixelRect::new(400, 0, 200, 200));
    }

    #[test]
    fn test_half_pixels_round_to_even() {
        // 2.5 -> 2, 7.5 -> 8
        let rect = CropRect::new(2.5, 0.0, 7.5, 2.5);
        assert_eq!(rect.to_pixels(), PixelRect::new(2, 0, 6, 2));
    }

    #[test]
    fn test_fractional_bounds_round_to_nearest() {
        let rect = CropRect::new(401.5, 0.0, 602.25, 100.4);
        assert_eq!(rect.to_pixels(), PixelRect::new(402, 0, 200, 100));
    }

    #[test]
    fn test_is_empty() {
        assert!(PixelRect::new(0, 0, 0, 10).is_empty());
        assert!(PixelRect::new(0, 0, 10, 0).is_empty());
        assert!(!PixelRect::new(0, 0, 1, 1).is_empty());
    }

    #[test]
    fn test_fits_within() {
        let rect = PixelRect::new(400, 0, 200, 200);
        assert!(rect.fits_within(800, 400));
        assert!(rect.fits_within(600, 200));
        assert!(!rect.fits_within(599, 200));
        assert!(!rect.fits_within(600, 199));
    }
}
