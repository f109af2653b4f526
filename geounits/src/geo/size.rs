use serde::{Deserialize, Serialize};

/// Extent of a geographic area in decimal degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeographicSize {
    width: f64,
    height: f64,
}

impl GeographicSize {
    /// Size with no extent.
    pub const EMPTY: GeographicSize = GeographicSize::new(0.0, 0.0);

    /// Creates a size from the longitudinal `width` and latitudinal `height` in degrees.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Extent along the longitude.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Half of the extent along the longitude.
    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }

    /// Extent along the latitude.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Half of the extent along the latitude.
    pub fn half_height(&self) -> f64 {
        self.height / 2.0
    }

    /// True if either of the dimensions is zero.
    pub fn is_zero(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }
}
