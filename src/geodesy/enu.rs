//! Local tangent-plane (East-North-Up) rotation
//!
//! Maps a local ENU displacement anchored at a reference geodetic position
//! into an ECEF delta vector, and back. Pure functions over a 3x3 rotation
//! matrix value; no state is carried between calls.

use crate::core::types::{EnuDisplacement, GeodeticPosition};
use nalgebra::{Matrix3, Vector3};

/// Build the ENU->ECEF rotation matrix at a reference position.
///
/// Columns are the ENU basis vectors expressed in ECEF:
///   East  = (-sin lon,          cos lon,         0      )
///   North = (-sin lat cos lon, -sin lat sin lon, cos lat)
///   Up    = ( cos lat cos lon,  cos lat sin lon, sin lat)
///
/// This is the transpose of the standard ECEF->ENU rotation. Exact for
/// finite references; no failure modes.
pub fn enu_to_ecef_rotation(reference: &GeodeticPosition) -> Matrix3<f64> {
    let lat = reference.lat.to_radians();
    let lon = reference.lon.to_radians();
    let (sin_lat, cos_lat) = lat.sin_cos();
    let (sin_lon, cos_lon) = lon.sin_cos();

    Matrix3::new(
        -sin_lon,
        -sin_lat * cos_lon,
        cos_lat * cos_lon,
        cos_lon,
        -sin_lat * sin_lon,
        cos_lat * sin_lon,
        0.0,
        cos_lat,
        sin_lat,
    )
}

/// Rotate an ENU displacement into an ECEF delta vector (meters).
pub fn enu_to_ecef_delta(
    displacement: &EnuDisplacement,
    reference: &GeodeticPosition,
) -> Vector3<f64> {
    enu_to_ecef_rotation(reference) * displacement.to_vector()
}

/// Rotate an ECEF delta vector back into the ENU frame at the reference.
pub fn ecef_to_enu_delta(delta: &Vector3<f64>, reference: &GeodeticPosition) -> EnuDisplacement {
    let local = enu_to_ecef_rotation(reference).transpose() * delta;
    EnuDisplacement {
        east_m: local.x,
        north_m: local.y,
        up_m: local.z,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_rotation_at_equator_prime_meridian() {
        let r = enu_to_ecef_rotation(&GeodeticPosition::new(0.0, 0.0, 0.0));

        // East -> +Y
        assert!(r[(0, 0)].abs() < EPSILON);
        assert!((r[(1, 0)] - 1.0).abs() < EPSILON);
        assert!(r[(2, 0)].abs() < EPSILON);

        // North -> +Z
        assert!(r[(0, 1)].abs() < EPSILON);
        assert!(r[(1, 1)].abs() < EPSILON);
        assert!((r[(2, 1)] - 1.0).abs() < EPSILON);

        // Up -> +X
        assert!((r[(0, 2)] - 1.0).abs() < EPSILON);
        assert!(r[(1, 2)].abs() < EPSILON);
        assert!(r[(2, 2)].abs() < EPSILON);
    }

    #[test]
    fn test_rotation_at_north_pole() {
        // At the pole, Up points along +Z
        let r = enu_to_ecef_rotation(&GeodeticPosition::new(90.0, 0.0, 0.0));
        assert!(r[(0, 2)].abs() < EPSILON);
        assert!(r[(1, 2)].abs() < EPSILON);
        assert!((r[(2, 2)] - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_rotation_is_orthonormal() {
        let r = enu_to_ecef_rotation(&GeodeticPosition::new(-37.2, 144.9, 0.0));
        let identity = r * r.transpose();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((identity[(i, j)] - expected).abs() < EPSILON);
            }
        }
        assert!((r.determinant() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_delta_preserves_length() {
        let reference = GeodeticPosition::new(12.5, -68.0, 0.0);
        let displacement = EnuDisplacement::new(300.0, -400.0, -120.0);
        let delta = enu_to_ecef_delta(&displacement, &reference);
        assert!((delta.norm() - displacement.to_vector().norm()).abs() < 1e-9);
    }

    #[test]
    fn test_enu_roundtrip() {
        let reference = GeodeticPosition::new(59.3, 18.1, 0.0);
        let displacement = EnuDisplacement::new(-72.5, 141.0, -86.0);
        let delta = enu_to_ecef_delta(&displacement, &reference);
        let back = ecef_to_enu_delta(&delta, &reference);
        assert!((back.east_m - displacement.east_m).abs() < 1e-9);
        assert!((back.north_m - displacement.north_m).abs() < 1e-9);
        assert!((back.up_m - displacement.up_m).abs() < 1e-9);
    }

    #[test]
    fn test_up_points_along_normal() {
        // A pure Up displacement at the equator moves radially outward
        let reference = GeodeticPosition::new(0.0, 90.0, 0.0);
        let delta = enu_to_ecef_delta(&EnuDisplacement::new(0.0, 0.0, 100.0), &reference);
        assert!(delta.x.abs() < 1e-9);
        assert!((delta.y - 100.0).abs() < 1e-9);
        assert!(delta.z.abs() < 1e-9);
    }
}
