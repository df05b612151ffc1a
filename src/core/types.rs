//! Core data types for the positioning pipeline

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Geodetic position on the WGS84 ellipsoid.
///
/// Altitude is ellipsoidal height in meters, positive up; a subsea point
/// has a negative altitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeodeticPosition {
    /// Latitude in decimal degrees, [-90, 90]
    pub lat: f64,
    /// Longitude in decimal degrees, [-180, 180]
    pub lon: f64,
    /// Ellipsoidal altitude in meters (positive up)
    pub alt: f64,
}

impl GeodeticPosition {
    pub fn new(lat: f64, lon: f64, alt: f64) -> Self {
        Self { lat, lon, alt }
    }
}

/// Earth-Centered-Earth-Fixed Cartesian position in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EcefPosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl EcefPosition {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn from_vector(v: Vector3<f64>) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }

    pub fn to_vector(self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Distance from the Earth's center in meters.
    pub fn geocentric_radius(&self) -> f64 {
        self.to_vector().norm()
    }
}

/// Local East-North-Up displacement in meters, anchored at a reference
/// geodetic position. Has no meaning without that reference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnuDisplacement {
    /// East component (meters)
    pub east_m: f64,
    /// North component (meters)
    pub north_m: f64,
    /// Up component (meters, positive toward the sky)
    pub up_m: f64,
}

impl EnuDisplacement {
    pub fn new(east_m: f64, north_m: f64, up_m: f64) -> Self {
        Self {
            east_m,
            north_m,
            up_m,
        }
    }

    /// Displacement for a vehicle `depth_m` below the reference surface.
    pub fn from_depth(east_m: f64, north_m: f64, depth_m: f64) -> Self {
        Self {
            east_m,
            north_m,
            up_m: -depth_m,
        }
    }

    pub fn to_vector(self) -> Vector3<f64> {
        Vector3::new(self.east_m, self.north_m, self.up_m)
    }
}
