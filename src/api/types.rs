//! Common API types

use crate::core::types::{EcefPosition, GeodeticPosition};
use crate::geodesy::DomainError;
use crate::processing::svp::{DepthCorrection, SvpError};
use crate::validation::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced by the external operation.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Input rejected before the core ran
    Validation { error: ValidationError },
    /// Core transform failure
    Domain { error: DomainError },
    /// Sound velocity profile failure
    Svp { error: SvpError },
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        ApiError::Validation { error }
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        ApiError::Domain { error }
    }
}

impl From<SvpError> for ApiError {
    fn from(error: SvpError) -> Self {
        ApiError::Svp { error }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation { error } => write!(f, "Invalid input: {}", error),
            ApiError::Domain { error } => write!(f, "Transform failed: {}", error),
            ApiError::Svp { error } => write!(f, "SVP error: {}", error),
        }
    }
}

impl std::error::Error for ApiError {}

/// Computed position fix for the vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionFix {
    /// Vessel reference position the fix was computed from
    pub vessel: GeodeticPosition,
    /// Absolute geodetic position of the vehicle
    pub vehicle: GeodeticPosition,
    /// Intermediate ECEF position of the vehicle
    pub vehicle_ecef: EcefPosition,
    /// Depth below the ellipsoid surface (= -altitude) when submerged
    pub subsea_depth_m: Option<f64>,
    /// SVP diagnostics when a profile correction was applied
    pub depth_correction: Option<DepthCorrection>,
}
