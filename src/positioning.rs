//! Position composer
//!
//! Chains the geodetic transforms into the single pipeline this system
//! exists for: vessel geodetic -> ECEF, ENU displacement -> ECEF delta,
//! vector addition, ECEF -> geodetic inversion.

use crate::core::types::{EcefPosition, EnuDisplacement, GeodeticPosition};
use crate::geodesy::ecef::{ecef_to_geodetic_with, geodetic_to_ecef_with, SolverOptions};
use crate::geodesy::ellipsoid::Ellipsoid;
use crate::geodesy::enu::enu_to_ecef_delta;
use crate::geodesy::DomainError;

/// The coordinate-transform pipeline with its fixed parameters.
///
/// Holds only immutable configuration (ellipsoid, inverse-solver bounds);
/// every call is pure and deterministic, so a single pipeline value can be
/// shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionPipeline {
    ellipsoid: Ellipsoid,
    solver: SolverOptions,
}

impl PositionPipeline {
    pub fn new(ellipsoid: Ellipsoid, solver: SolverOptions) -> Self {
        Self { ellipsoid, solver }
    }

    /// The vehicle's ECEF position: vessel ECEF plus the rotated
    /// displacement. Steps 1-3 of the pipeline; exact, no failure modes.
    pub fn vehicle_ecef(
        &self,
        vessel: &GeodeticPosition,
        displacement: &EnuDisplacement,
    ) -> EcefPosition {
        let vessel_ecef = geodetic_to_ecef_with(vessel, &self.ellipsoid);
        let delta = enu_to_ecef_delta(displacement, vessel);
        EcefPosition::from_vector(vessel_ecef.to_vector() + delta)
    }

    /// The vehicle's absolute geodetic position.
    ///
    /// A positive `up_m` raises the resulting altitude; a negative value
    /// is subsea depth. Fails only if the composed ECEF point is
    /// degenerate for the inverse transform (unreachable for realistic
    /// displacements, but surfaced rather than crashed on).
    pub fn absolute_position(
        &self,
        vessel: &GeodeticPosition,
        displacement: &EnuDisplacement,
    ) -> Result<GeodeticPosition, DomainError> {
        let vehicle = self.vehicle_ecef(vessel, displacement);
        ecef_to_geodetic_with(&vehicle, &self.ellipsoid, &self.solver)
    }
}

/// Compute the vehicle's absolute position with the default WGS84
/// pipeline. See [`PositionPipeline::absolute_position`].
pub fn compute_absolute_position(
    vessel: &GeodeticPosition,
    displacement: &EnuDisplacement,
) -> Result<GeodeticPosition, DomainError> {
    PositionPipeline::default().absolute_position(vessel, displacement)
}
