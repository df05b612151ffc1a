//! Subsea Vehicle Absolute Positioning
//!
//! Converts an ROV position, expressed as a local East-North-Up
//! displacement from a surface vessel, into an absolute geodetic position
//! on the WGS84 ellipsoid, with optional sound-velocity-profile depth
//! correction.

pub mod api;
pub mod core;
pub mod geodesy;
pub mod positioning;
pub mod processing;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use api::{
    compute_fix, compute_fix_with_svp, ApiError, ApiResult, CsvFormatter, FormatPrecision,
    JsonFormatter, PositionFix, PositioningApi, TextFormatter,
};
pub use crate::core::types::{EcefPosition, EnuDisplacement, GeodeticPosition};
pub use geodesy::{DomainError, Ellipsoid, SolverOptions, WGS84};
pub use positioning::{compute_absolute_position, PositionPipeline};
pub use processing::svp::{DepthCorrection, SvpError, SvpProfile, SvpSettings};
pub use utils::config::{ConfigError, SystemConfig};
pub use validation::ValidationError;
