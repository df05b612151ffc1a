//! Reference ellipsoid model

use serde::{Deserialize, Serialize};

/// Parameters of a rotational reference ellipsoid.
///
/// Only WGS84 is supported by this system; the parameters are carried as
/// data so that the transforms stay free of hidden globals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipsoid {
    /// Semi-major axis (meters)
    pub semi_major_axis_m: f64,
    /// Flattening factor
    pub flattening: f64,
    /// First eccentricity squared, e² = 2f − f²
    pub eccentricity_squared: f64,
}

/// WGS84 reference ellipsoid.
pub const WGS84: Ellipsoid = Ellipsoid {
    semi_major_axis_m: 6378137.0,
    flattening: 1.0 / 298.257223563,
    eccentricity_squared: 2.0 * (1.0 / 298.257223563)
        - (1.0 / 298.257223563) * (1.0 / 298.257223563),
};

impl Ellipsoid {
    /// Prime vertical radius of curvature N(lat) in meters.
    ///
    /// The east-west radius of curvature of the ellipsoid surface at the
    /// given geodetic latitude (radians); used by both conversion
    /// directions of the geodetic<->ECEF transform.
    pub fn prime_vertical_radius(&self, lat_rad: f64) -> f64 {
        let sin_lat = lat_rad.sin();
        self.semi_major_axis_m / (1.0 - self.eccentricity_squared * sin_lat * sin_lat).sqrt()
    }

    /// Semi-minor (polar) axis b = a(1 − f) in meters.
    pub fn semi_minor_axis_m(&self) -> f64 {
        self.semi_major_axis_m * (1.0 - self.flattening)
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        WGS84
    }
}
