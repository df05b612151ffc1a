//! Input validation for the boundary layer

pub mod input;

pub use input::{parse_field, validate_displacement, validate_vessel, ValidationError};
