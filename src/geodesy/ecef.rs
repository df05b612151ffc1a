//! Geodetic <-> ECEF conversion
//!
//! The forward direction is closed-form. The inverse recovers latitude and
//! altitude with a bounded fixed-point iteration, since altitude appears
//! inside the prime vertical radius N(lat) which itself depends on
//! latitude; longitude needs no iteration.

use crate::core::types::{EcefPosition, GeodeticPosition};
use crate::geodesy::ellipsoid::{Ellipsoid, WGS84};
use crate::geodesy::DomainError;
use serde::{Deserialize, Serialize};

/// Points with a geocentric radius below this are rejected outright;
/// the inversion divides by quantities that degenerate at the center.
const MIN_GEOCENTRIC_RADIUS_M: f64 = 1.0;

/// Distance from the polar axis below which the polar branch is taken
/// instead of iterating (p/cos(lat) degenerates there).
const POLAR_AXIS_THRESHOLD_M: f64 = 1e-3;

/// Convergence parameters for the ECEF->geodetic latitude iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverOptions {
    /// Stop once the latitude update falls below this (radians)
    pub convergence_tolerance_rad: f64,
    /// Fail with a DomainError after this many iterations
    pub max_iterations: u32,
}

impl Default for SolverOptions {
    fn default() -> Self {
        // 1e-11 rad is ~6e-5 m of arc at the surface; terrestrial and
        // subsea inputs converge in at most 5 iterations.
        Self {
            convergence_tolerance_rad: 1e-11,
            max_iterations: 10,
        }
    }
}

/// Convert a geodetic position to ECEF coordinates on WGS84.
pub fn geodetic_to_ecef(position: &GeodeticPosition) -> EcefPosition {
    geodetic_to_ecef_with(position, &WGS84)
}

/// Convert a geodetic position to ECEF coordinates on a given ellipsoid.
///
/// Exact under double precision; no failure modes for finite input.
pub fn geodetic_to_ecef_with(position: &GeodeticPosition, ellipsoid: &Ellipsoid) -> EcefPosition {
    let lat = position.lat.to_radians();
    let lon = position.lon.to_radians();
    let (sin_lat, cos_lat) = lat.sin_cos();
    let (sin_lon, cos_lon) = lon.sin_cos();

    let n = ellipsoid.prime_vertical_radius(lat);
    let e2 = ellipsoid.eccentricity_squared;

    EcefPosition {
        x: (n + position.alt) * cos_lat * cos_lon,
        y: (n + position.alt) * cos_lat * sin_lon,
        z: (n * (1.0 - e2) + position.alt) * sin_lat,
    }
}

/// Convert an ECEF position back to geodetic coordinates on WGS84.
pub fn ecef_to_geodetic(position: &EcefPosition) -> Result<GeodeticPosition, DomainError> {
    ecef_to_geodetic_with(position, &WGS84, &SolverOptions::default())
}

/// Convert an ECEF position back to geodetic coordinates.
///
/// Longitude comes directly from `atan2(Y, X)`. Latitude and altitude are
/// solved by fixed-point iteration seeded from the geocentric latitude,
/// bounded by `options`. Points on the polar axis are handled without
/// iterating.
pub fn ecef_to_geodetic_with(
    position: &EcefPosition,
    ellipsoid: &Ellipsoid,
    options: &SolverOptions,
) -> Result<GeodeticPosition, DomainError> {
    let EcefPosition { x, y, z } = *position;

    if !(x.is_finite() && y.is_finite() && z.is_finite()) {
        return Err(DomainError::NonFiniteInput {
            x_m: x,
            y_m: y,
            z_m: z,
        });
    }

    let radius = position.geocentric_radius();
    if radius < MIN_GEOCENTRIC_RADIUS_M {
        return Err(DomainError::NearGeocenter { radius_m: radius });
    }

    let lon = y.atan2(x);
    let p = (x * x + y * y).sqrt();
    let e2 = ellipsoid.eccentricity_squared;

    // On the polar axis the latitude is fixed and altitude is measured
    // along the spin axis from the semi-minor axis.
    if p < POLAR_AXIS_THRESHOLD_M {
        let lat = if z >= 0.0 {
            std::f64::consts::FRAC_PI_2
        } else {
            -std::f64::consts::FRAC_PI_2
        };
        return Ok(GeodeticPosition {
            lat: lat.to_degrees(),
            lon: lon.to_degrees(),
            alt: z.abs() - ellipsoid.semi_minor_axis_m(),
        });
    }

    // Seed from the surface approximation (alt = 0).
    let mut lat = z.atan2(p * (1.0 - e2));
    let mut residual = f64::MAX;

    for _ in 0..options.max_iterations {
        let n = ellipsoid.prime_vertical_radius(lat);
        let alt = p / lat.cos() - n;
        let next = z.atan2(p * (1.0 - e2 * n / (n + alt)));
        residual = (next - lat).abs();
        lat = next;

        if residual < options.convergence_tolerance_rad {
            let n = ellipsoid.prime_vertical_radius(lat);
            let alt = p / lat.cos() - n;
            return Ok(GeodeticPosition {
                lat: lat.to_degrees(),
                lon: lon.to_degrees(),
                alt,
            });
        }
    }

    Err(DomainError::ConvergenceFailure {
        iterations: options.max_iterations,
        residual_rad: residual,
    })
}
