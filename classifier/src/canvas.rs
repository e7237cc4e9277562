/// The pixel area points are placed on.
///
/// Pixel coordinates grow right and down; normalized coordinates live in `[-1, 1]` and
/// grow right and up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(500, 380)
    }
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn normalize_x(&self, x: f64) -> f64 {
        x / self.width as f64 * 2. - 1.
    }

    #[inline]
    pub fn normalize_y(&self, y: f64) -> f64 {
        y / self.height as f64 * -2. + 1.
    }

    #[inline]
    pub fn denormalize_x(&self, nx: f64) -> f64 {
        (nx + 1.) / 2. * self.width as f64
    }

    #[inline]
    pub fn denormalize_y(&self, ny: f64) -> f64 {
        (1. - ny) / 2. * self.height as f64
    }

    /// Maps a pixel position into the model's feature space.
    pub fn normalize(&self, x: f64, y: f64) -> [f64; 2] {
        [self.normalize_x(x), self.normalize_y(y)]
    }
}
