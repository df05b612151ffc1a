//! The external positioning operation
//!
//! The single entry point the boundary shell calls: validated scalar
//! inputs in, a structured `PositionFix` out. A variant applies a sound
//! velocity profile correction to a raw depth before composing.

use crate::api::types::{ApiResult, PositionFix};
use crate::core::types::{EnuDisplacement, GeodeticPosition};
use crate::positioning::PositionPipeline;
use crate::processing::svp::{DepthCorrection, SvpProfile, SvpSettings};
use crate::utils::config::SystemConfig;
use crate::validation::{validate_displacement, validate_vessel};

/// Facade over validation, the transform pipeline and depth correction.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositioningApi {
    pipeline: PositionPipeline,
    svp_settings: SvpSettings,
}

impl PositioningApi {
    pub fn new(pipeline: PositionPipeline, svp_settings: SvpSettings) -> Self {
        Self {
            pipeline,
            svp_settings,
        }
    }

    pub fn from_config(config: &SystemConfig) -> Self {
        Self {
            pipeline: config.pipeline(),
            svp_settings: config.svp.settings,
        }
    }

    /// Compute the vehicle's absolute position from raw scalar inputs.
    ///
    /// Validates ranges and finiteness, runs the pipeline once and derives
    /// the display depth (`-altitude` when the vehicle sits below the
    /// ellipsoid surface).
    pub fn compute_fix(
        &self,
        vessel_lat_deg: f64,
        vessel_lon_deg: f64,
        vessel_alt_m: f64,
        east_m: f64,
        north_m: f64,
        up_m: f64,
    ) -> ApiResult<PositionFix> {
        let vessel = validate_vessel(vessel_lat_deg, vessel_lon_deg, vessel_alt_m)?;
        let displacement = validate_displacement(east_m, north_m, up_m)?;
        self.compose(vessel, displacement, None)
    }

    /// Compute a fix from a raw depth measurement corrected by a sound
    /// velocity profile.
    ///
    /// The corrected depth becomes the downward displacement
    /// (`up = -corrected_depth`); the applied correction is returned in
    /// the fix for display.
    pub fn compute_fix_with_svp(
        &self,
        vessel_lat_deg: f64,
        vessel_lon_deg: f64,
        vessel_alt_m: f64,
        east_m: f64,
        north_m: f64,
        raw_depth_m: f64,
        profile: &SvpProfile,
    ) -> ApiResult<PositionFix> {
        let vessel = validate_vessel(vessel_lat_deg, vessel_lon_deg, vessel_alt_m)?;
        // Validate the raw measurement before deriving the displacement
        validate_displacement(east_m, north_m, raw_depth_m)?;

        let correction = profile.correct_depth(raw_depth_m, &self.svp_settings);
        let displacement =
            EnuDisplacement::from_depth(east_m, north_m, correction.corrected_depth_m);
        self.compose(vessel, displacement, Some(correction))
    }

    fn compose(
        &self,
        vessel: GeodeticPosition,
        displacement: EnuDisplacement,
        depth_correction: Option<DepthCorrection>,
    ) -> ApiResult<PositionFix> {
        let vehicle_ecef = self.pipeline.vehicle_ecef(&vessel, &displacement);
        let vehicle = self.pipeline.absolute_position(&vessel, &displacement)?;

        let subsea_depth_m = if vehicle.alt < 0.0 {
            Some(-vehicle.alt)
        } else {
            None
        };

        Ok(PositionFix {
            vessel,
            vehicle,
            vehicle_ecef,
            subsea_depth_m,
            depth_correction,
        })
    }
}

/// Compute a fix with the default WGS84 pipeline and SVP settings.
/// See [`PositioningApi::compute_fix`].
pub fn compute_fix(
    vessel_lat_deg: f64,
    vessel_lon_deg: f64,
    vessel_alt_m: f64,
    east_m: f64,
    north_m: f64,
    up_m: f64,
) -> ApiResult<PositionFix> {
    PositioningApi::default().compute_fix(
        vessel_lat_deg,
        vessel_lon_deg,
        vessel_alt_m,
        east_m,
        north_m,
        up_m,
    )
}

/// Compute an SVP-corrected fix with the default pipeline and settings.
/// See [`PositioningApi::compute_fix_with_svp`].
pub fn compute_fix_with_svp(
    vessel_lat_deg: f64,
    vessel_lon_deg: f64,
    vessel_alt_m: f64,
    east_m: f64,
    north_m: f64,
    raw_depth_m: f64,
    profile: &SvpProfile,
) -> ApiResult<PositionFix> {
    PositioningApi::default().compute_fix_with_svp(
        vessel_lat_deg,
        vessel_lon_deg,
        vessel_alt_m,
        east_m,
        north_m,
        raw_depth_m,
        profile,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::ApiError;
    use crate::processing::svp::SvpSample;

    #[test]
    fn test_compute_fix_matches_pipeline() {
        let fix = compute_fix(0.0, 0.0, 0.0, 0.0, 0.0, -100.0).unwrap();
        assert!(fix.vehicle.lat.abs() < 1e-9);
        assert!(fix.vehicle.lon.abs() < 1e-9);
        assert!((fix.vehicle.alt - (-100.0)).abs() < 1e-6);
        assert!((fix.vehicle_ecef.x - 6378037.0).abs() < 1e-6);
        assert!((fix.subsea_depth_m.unwrap() - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_compute_fix_above_surface_has_no_depth() {
        let fix = compute_fix(12.0, 34.0, 5.0, 10.0, 10.0, 20.0).unwrap();
        assert!(fix.vehicle.alt > 0.0);
        assert!(fix.subsea_depth_m.is_none());
        assert!(fix.depth_correction.is_none());
    }

    #[test]
    fn test_compute_fix_rejects_bad_latitude() {
        let result = compute_fix(91.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        assert!(matches!(result, Err(ApiError::Validation { .. })));
    }

    #[test]
    fn test_compute_fix_rejects_nan_displacement() {
        let result = compute_fix(0.0, 0.0, 0.0, f64::NAN, 0.0, 0.0);
        assert!(matches!(result, Err(ApiError::Validation { .. })));
    }

    #[test]
    fn test_compute_fix_with_svp_applies_correction() {
        // Constant 1520 m/s profile: +0.20 m of depth at any measurement
        let profile = SvpProfile::new(vec![SvpSample {
            depth_m: 0.0,
            velocity_ms: 1520.0,
        }])
        .unwrap();

        let fix = compute_fix_with_svp(0.0, 0.0, 0.0, 0.0, 0.0, 100.0, &profile).unwrap();

        let correction = fix.depth_correction.unwrap();
        assert!((correction.corrected_depth_m - 100.20).abs() < 1e-9);
        assert!((fix.vehicle.alt - (-100.20)).abs() < 1e-6);
        assert!((fix.subsea_depth_m.unwrap() - 100.20).abs() < 1e-6);
    }

    #[test]
    fn test_compute_fix_with_svp_validates_first() {
        let profile = SvpProfile::new(vec![SvpSample {
            depth_m: 0.0,
            velocity_ms: 1500.0,
        }])
        .unwrap();
        let result = compute_fix_with_svp(0.0, 200.0, 0.0, 0.0, 0.0, 50.0, &profile);
        assert!(matches!(result, Err(ApiError::Validation { .. })));
    }

    #[test]
    fn test_api_from_config_uses_configured_svp_settings() {
        let mut config = SystemConfig::default();
        config.svp.settings.correction_factor_m_per_ms = 0.02;
        let api = PositioningApi::from_config(&config);

        let profile = SvpProfile::new(vec![SvpSample {
            depth_m: 0.0,
            velocity_ms: 1510.0,
        }])
        .unwrap();
        let fix = api
            .compute_fix_with_svp(0.0, 0.0, 0.0, 0.0, 0.0, 50.0, &profile)
            .unwrap();
        assert!((fix.depth_correction.unwrap().adjustment_m - 0.20).abs() < 1e-9);
    }
}
