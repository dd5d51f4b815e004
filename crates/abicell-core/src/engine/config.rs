use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Pairs of atoms closer than this (in coordinate units) are reported as collisions.
pub const DEFAULT_COLLISION_THRESHOLD: f64 = 0.001;

/// Extra lattice translations tiled beyond `floor(|V|)` before building a chiral cell.
///
/// Two cells cover the fractional offset of the atoms inside a cell plus the rounding of
/// `|V|` down; the builder raises the tiling further when the rotated cell's corners need it.
pub const DEFAULT_OVERSHOOT_MARGIN: u32 = 2;

/// Tolerance of the half-open unit-cell test applied after rotation.
pub const DEFAULT_BOUNDARY_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue { name: &'static str, reason: String },
}

/// Tunable constants shared by the transforms.
///
/// Every key is optional in the TOML form; missing keys take the `DEFAULT_*` values.
///
/// ```toml
/// collision-threshold = 0.001
/// overshoot-margin = 2
/// boundary-tolerance = 1e-9
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct TransformConfig {
    pub collision_threshold: f64,
    pub overshoot_margin: u32,
    pub boundary_tolerance: f64,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            collision_threshold: DEFAULT_COLLISION_THRESHOLD,
            overshoot_margin: DEFAULT_OVERSHOOT_MARGIN,
            boundary_tolerance: DEFAULT_BOUNDARY_TOLERANCE,
        }
    }
}

impl TransformConfig {
    /// Reads and validates a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        config.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if !(self.collision_threshold.is_finite() && self.collision_threshold > 0.0) {
            return Err(ConfigError::InvalidValue {
                name: "collision_threshold",
                reason: format!("must be a positive number, got {}", self.collision_threshold),
            });
        }
        if !(self.boundary_tolerance.is_finite()
            && (0.0..0.5).contains(&self.boundary_tolerance))
        {
            return Err(ConfigError::InvalidValue {
                name: "boundary_tolerance",
                reason: format!("must lie in [0, 0.5), got {}", self.boundary_tolerance),
            });
        }
        Ok(self)
    }
}

#[derive(Default)]
pub struct TransformConfigBuilder {
    collision_threshold: Option<f64>,
    overshoot_margin: Option<u32>,
    boundary_tolerance: Option<f64>,
}

impl TransformConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collision_threshold(mut self, threshold: f64) -> Self {
        self.collision_threshold = Some(threshold);
        self
    }
    pub fn overshoot_margin(mut self, margin: u32) -> Self {
        self.overshoot_margin = Some(margin);
        self
    }
    pub fn boundary_tolerance(mut self, tolerance: f64) -> Self {
        self.boundary_tolerance = Some(tolerance);
        self
    }

    pub fn build(self) -> Result<TransformConfig, ConfigError> {
        TransformConfig {
            collision_threshold: self
                .collision_threshold
                .unwrap_or(DEFAULT_COLLISION_THRESHOLD),
            overshoot_margin: self.overshoot_margin.unwrap_or(DEFAULT_OVERSHOOT_MARGIN),
            boundary_tolerance: self
                .boundary_tolerance
                .unwrap_or(DEFAULT_BOUNDARY_TOLERANCE),
        }
        .validate()
    }
}
