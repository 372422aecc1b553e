//! Canvas viewport and the gooey filter profile it selects

use serde::{Deserialize, Serialize};

use crate::rigid_body::Vec2;

/// One blur + color-matrix parameter pair for the gooey filter.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilterProfile {
    /// `feGaussianBlur` stdDeviation
    pub blur_std_dev: f32,
    /// Alpha row multiplier of the `feColorMatrix`
    pub alpha_scale: f32,
    /// Alpha row offset of the `feColorMatrix`
    pub alpha_offset: f32,
}

impl FilterProfile {
    /// `values` attribute for an `feColorMatrix type="matrix"`
    pub fn color_matrix_values(&self) -> String {
        format!(
            "1 0 0 0 0  0 1 0 0 0  0 0 1 0 0  0 0 0 {} {}",
            self.alpha_scale, self.alpha_offset
        )
    }
}

/// Width threshold plus the two profiles it chooses between
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    pub threshold_width: f32,
    pub profiles: [FilterProfile; 2],
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            threshold_width: 600.0,
            profiles: [
                FilterProfile { blur_std_dev: 6.0, alpha_scale: 18.0, alpha_offset: -7.0 },
                FilterProfile { blur_std_dev: 10.0, alpha_scale: 20.0, alpha_offset: -8.0 },
            ],
        }
    }
}

impl FilterConfig {
    /// Narrow viewports (width below the threshold) get profile 0.
    pub fn select(&self, width: f32) -> usize {
        if width < self.threshold_width { 0 } else { 1 }
    }

    pub fn profile(&self, index: usize) -> &FilterProfile {
        &self.profiles[index.min(1)]
    }
}

/// Canvas size in pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        *self = Self::new(width, height);
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(0.5 * self.width, 0.5 * self.height)
    }

    /// Point at a fraction of the viewport (0.5, 0.8 = centered, low)
    pub fn relative_point(&self, fraction: Vec2) -> Vec2 {
        Vec2::new(fraction.x * self.width, fraction.y * self.height)
    }
}
