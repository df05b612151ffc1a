//! System configuration
//!
//! JSON-backed settings for the pipeline: ellipsoid parameters, inverse
//! solver bounds, SVP correction settings and output precision. Loaded
//! values are validated before use; defaults reproduce WGS84 and the
//! standard survey conventions.

use crate::api::formatting::FormatPrecision;
use crate::geodesy::ecef::SolverOptions;
use crate::geodesy::ellipsoid::Ellipsoid;
use crate::positioning::PositionPipeline;
use crate::processing::svp::SvpSettings;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// SVP correction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvpConfig {
    /// Correction settings applied to raw depths
    pub settings: SvpSettings,
    /// Default profile file used when the caller supplies none
    pub profile_path: Option<String>,
}

impl Default for SvpConfig {
    fn default() -> Self {
        Self {
            settings: SvpSettings::default(),
            profile_path: None,
        }
    }
}

/// System-wide configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemConfig {
    /// Reference ellipsoid parameters (WGS84)
    pub ellipsoid: Ellipsoid,
    /// ECEF->geodetic solver bounds
    pub solver: SolverOptions,
    /// SVP correction configuration
    pub svp: SvpConfig,
    /// Output precision for formatters
    pub output: FormatPrecision,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            ellipsoid: Ellipsoid::default(),
            solver: SolverOptions::default(),
            svp: SvpConfig::default(),
            output: FormatPrecision::default(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Configuration file I/O error
    Io { path: String, message: String },
    /// JSON serialization/deserialization error
    Serialization { message: String },
    /// Invalid parameter value
    InvalidParameter {
        parameter: String,
        value: String,
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, message } => {
                write!(f, "Config I/O error for '{}': {}", path, message)
            }
            ConfigError::Serialization { message } => {
                write!(f, "Config serialization error: {}", message)
            }
            ConfigError::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{}' = '{}': {}", parameter, value, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl SystemConfig {
    /// Load and validate a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();
        let content = fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            path: path_str.clone(),
            message: e.to_string(),
        })?;

        let config: SystemConfig =
            serde_json::from_str(&content).map_err(|e| ConfigError::Serialization {
                message: format!("Failed to parse '{}': {}", path_str, e),
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Save the configuration to a JSON file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();
        let content =
            serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialization {
                message: e.to_string(),
            })?;
        fs::write(&path, content).map_err(|e| ConfigError::Io {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Validate parameter ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.ellipsoid.semi_major_axis_m > 0.0) {
            return Err(ConfigError::InvalidParameter {
                parameter: "ellipsoid.semi_major_axis_m".to_string(),
                value: self.ellipsoid.semi_major_axis_m.to_string(),
                reason: "Semi-major axis must be positive".to_string(),
            });
        }

        if !(self.ellipsoid.flattening > 0.0 && self.ellipsoid.flattening < 1.0) {
            return Err(ConfigError::InvalidParameter {
                parameter: "ellipsoid.flattening".to_string(),
                value: self.ellipsoid.flattening.to_string(),
                reason: "Flattening must lie in (0, 1)".to_string(),
            });
        }

        if !(self.solver.convergence_tolerance_rad > 0.0) {
            return Err(ConfigError::InvalidParameter {
                parameter: "solver.convergence_tolerance_rad".to_string(),
                value: self.solver.convergence_tolerance_rad.to_string(),
                reason: "Convergence tolerance must be positive".to_string(),
            });
        }

        if self.solver.max_iterations == 0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "solver.max_iterations".to_string(),
                value: self.solver.max_iterations.to_string(),
                reason: "At least one iteration is required".to_string(),
            });
        }

        if !(self.svp.settings.reference_velocity_ms >= 1400.0
            && self.svp.settings.reference_velocity_ms <= 1600.0)
        {
            return Err(ConfigError::InvalidParameter {
                parameter: "svp.settings.reference_velocity_ms".to_string(),
                value: self.svp.settings.reference_velocity_ms.to_string(),
                reason: "Reference sound velocity must be between 1400-1600 m/s for seawater"
                    .to_string(),
            });
        }

        Ok(())
    }

    /// Build the transform pipeline described by this configuration.
    pub fn pipeline(&self) -> PositionPipeline {
        PositionPipeline::new(self.ellipsoid, self.solver)
    }
}
