//! Geodetic transforms on the WGS84 ellipsoid
//!
//! Three pure building blocks: the ellipsoid model, the bidirectional
//! geodetic<->ECEF converter, and the local-tangent-plane (ENU) rotation.
//! No shared state; every function takes its inputs by value or reference
//! and is safe to call concurrently.

pub mod ecef;
pub mod ellipsoid;
pub mod enu;

pub use ecef::{ecef_to_geodetic, ecef_to_geodetic_with, geodetic_to_ecef, SolverOptions};
pub use ellipsoid::{Ellipsoid, WGS84};
pub use enu::{ecef_to_enu_delta, enu_to_ecef_delta, enu_to_ecef_rotation};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Failures of the ECEF->geodetic inverse transform.
///
/// The inverse is ill-defined near the Earth's center and undefined for
/// non-finite input; the transform fails fast with one of these rather
/// than returning a misleading position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DomainError {
    /// A NaN or infinite component reached the transform
    NonFiniteInput { x_m: f64, y_m: f64, z_m: f64 },
    /// Point too close to the geocenter for a stable inversion
    NearGeocenter { radius_m: f64 },
    /// Latitude iteration did not settle within the iteration cap
    ConvergenceFailure { iterations: u32, residual_rad: f64 },
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::NonFiniteInput { x_m, y_m, z_m } => {
                write!(f, "Non-finite ECEF input: ({}, {}, {})", x_m, y_m, z_m)
            }
            DomainError::NearGeocenter { radius_m } => {
                write!(
                    f,
                    "ECEF point {:.3} m from the geocenter: inverse transform is undefined",
                    radius_m
                )
            }
            DomainError::ConvergenceFailure {
                iterations,
                residual_rad,
            } => {
                write!(
                    f,
                    "Latitude iteration failed to converge after {} iterations (residual {:.3e} rad)",
                    iterations, residual_rad
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
