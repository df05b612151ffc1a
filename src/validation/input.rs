//! Boundary-layer input validation
//!
//! Free-text parsing and range checks performed before the core runs. The
//! core assumes well-formed numeric inputs; anything rejected here never
//! reaches it.

use crate::core::types::{EnuDisplacement, GeodeticPosition};
use std::fmt;

/// Errors raised while validating user-supplied inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A free-text field did not parse as a number
    MalformedNumber { field: String, value: String },
    /// Latitude outside [-90, 90] degrees
    LatitudeOutOfRange { value_deg: f64 },
    /// Longitude outside [-180, 180] degrees
    LongitudeOutOfRange { value_deg: f64 },
    /// A field held a NaN or infinite value
    NonFiniteValue { field: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MalformedNumber { field, value } => {
                write!(f, "Field '{}' is not a number: '{}'", field, value)
            }
            ValidationError::LatitudeOutOfRange { value_deg } => {
                write!(
                    f,
                    "Latitude {} out of range: must be between -90 and 90 degrees",
                    value_deg
                )
            }
            ValidationError::LongitudeOutOfRange { value_deg } => {
                write!(
                    f,
                    "Longitude {} out of range: must be between -180 and 180 degrees",
                    value_deg
                )
            }
            ValidationError::NonFiniteValue { field } => {
                write!(f, "Field '{}' must be a finite number", field)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Parse a free-text numeric field.
pub fn parse_field(field: &str, text: &str) -> Result<f64, ValidationError> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| ValidationError::MalformedNumber {
            field: field.to_string(),
            value: text.to_string(),
        })
}

fn require_finite(field: &str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NonFiniteValue {
            field: field.to_string(),
        })
    }
}

/// Validate vessel coordinates and build the reference position.
pub fn validate_vessel(
    lat_deg: f64,
    lon_deg: f64,
    alt_m: f64,
) -> Result<GeodeticPosition, ValidationError> {
    let lat_deg = require_finite("latitude", lat_deg)?;
    let lon_deg = require_finite("longitude", lon_deg)?;
    let alt_m = require_finite("altitude", alt_m)?;

    if !(-90.0..=90.0).contains(&lat_deg) {
        return Err(ValidationError::LatitudeOutOfRange { value_deg: lat_deg });
    }
    if !(-180.0..=180.0).contains(&lon_deg) {
        return Err(ValidationError::LongitudeOutOfRange { value_deg: lon_deg });
    }

    Ok(GeodeticPosition::new(lat_deg, lon_deg, alt_m))
}

/// Validate displacement components and build the ENU vector.
pub fn validate_displacement(
    east_m: f64,
    north_m: f64,
    up_m: f64,
) -> Result<EnuDisplacement, ValidationError> {
    let east_m = require_finite("east", east_m)?;
    let north_m = require_finite("north", north_m)?;
    let up_m = require_finite("up", up_m)?;
    Ok(EnuDisplacement::new(east_m, north_m, up_m))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_valid() {
        assert_eq!(parse_field("latitude", "42.5").unwrap(), 42.5);
        assert_eq!(parse_field("east", " -17.25 ").unwrap(), -17.25);
    }

    #[test]
    fn test_parse_field_malformed() {
        let err = parse_field("latitude", "42,5").unwrap_err();
        assert!(matches!(err, ValidationError::MalformedNumber { .. }));
        assert!(err.to_string().contains("latitude"));
    }

    #[test]
    fn test_vessel_boundary_values_accepted() {
        assert!(validate_vessel(90.0, 180.0, 0.0).is_ok());
        assert!(validate_vessel(-90.0, -180.0, 0.0).is_ok());
        assert!(validate_vessel(0.0, 0.0, -11000.0).is_ok());
    }

    #[test]
    fn test_vessel_latitude_out_of_range() {
        assert!(matches!(
            validate_vessel(90.1, 0.0, 0.0),
            Err(ValidationError::LatitudeOutOfRange { .. })
        ));
        assert!(matches!(
            validate_vessel(-91.0, 0.0, 0.0),
            Err(ValidationError::LatitudeOutOfRange { .. })
        ));
    }

    #[test]
    fn test_vessel_longitude_out_of_range() {
        assert!(matches!(
            validate_vessel(0.0, 180.5, 0.0),
            Err(ValidationError::LongitudeOutOfRange { .. })
        ));
        assert!(matches!(
            validate_vessel(0.0, -181.0, 0.0),
            Err(ValidationError::LongitudeOutOfRange { .. })
        ));
    }

    #[test]
    fn test_vessel_non_finite_rejected() {
        assert!(matches!(
            validate_vessel(f64::NAN, 0.0, 0.0),
            Err(ValidationError::NonFiniteValue { .. })
        ));
        assert!(matches!(
            validate_vessel(0.0, 0.0, f64::INFINITY),
            Err(ValidationError::NonFiniteValue { .. })
        ));
    }

    #[test]
    fn test_displacement_non_finite_rejected() {
        assert!(validate_displacement(1.0, 2.0, -3.0).is_ok());
        assert!(matches!(
            validate_displacement(1.0, f64::NAN, 0.0),
            Err(ValidationError::NonFiniteValue { .. })
        ));
    }
}
