//! Row layout — perspective-scaled horizontal placement bounds per depth row.

use gallery_core::config::RowGeometry;
use gallery_core::constants::{ROW_COUNT, ROW_YS};
use gallery_core::error::ConfigError;

/// Half-width placement bound for each row, nearest row first.
/// Computed once at startup; read-only thereafter.
#[derive(Debug, Clone, PartialEq)]
pub struct RowLayout {
    half_widths: [f64; ROW_COUNT],
}

impl RowLayout {
    /// Compute per-row half-widths from bush geometry.
    ///
    /// The nearest row uses `base_scale`; each farther row multiplies the
    /// scale by `depth_scale_factor`, so a factor below one narrows the
    /// rows with depth.
    pub fn from_geometry(geometry: &RowGeometry) -> Result<Self, ConfigError> {
        if geometry.bushes_per_row == 0 {
            return Err(ConfigError::InvalidRowGeometry {
                reason: "bushes_per_row must be at least 1".into(),
            });
        }
        if geometry.bush_spacing <= 0.0 || geometry.base_scale <= 0.0 {
            return Err(ConfigError::InvalidRowGeometry {
                reason: "bush_spacing and base_scale must be positive".into(),
            });
        }
        if geometry.depth_scale_factor <= 0.0 {
            return Err(ConfigError::InvalidRowGeometry {
                reason: "depth_scale_factor must be positive".into(),
            });
        }

        let mut half_widths = [0.0; ROW_COUNT];
        let mut scale = geometry.base_scale;
        for half_width in half_widths.iter_mut() {
            *half_width = geometry.bushes_per_row as f64 * geometry.bush_spacing * scale / 2.0;
            scale *= geometry.depth_scale_factor;
        }
        Ok(Self { half_widths })
    }

    /// Resolve an optional geometry; absence is a configuration error.
    pub fn resolve(geometry: Option<&RowGeometry>) -> Result<Self, ConfigError> {
        geometry.map_or(Err(ConfigError::MissingRowGeometry), Self::from_geometry)
    }

    /// Zero-width layout used when configuration is unavailable.
    /// Admits no placements, so the scheduler idles instead of crashing.
    pub fn disabled() -> Self {
        Self {
            half_widths: [0.0; ROW_COUNT],
        }
    }

    pub fn half_width(&self, row: usize) -> f64 {
        self.half_widths[row]
    }

    pub fn half_widths(&self) -> &[f64; ROW_COUNT] {
        &self.half_widths
    }

    /// Fixed Y anchor of a row, nearest row first.
    pub fn row_y(row: usize) -> f64 {
        ROW_YS[row]
    }
}
