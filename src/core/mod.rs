//! Core data types and constants

pub mod constants;
pub mod types;

pub use constants::{REFERENCE_SOUND_VELOCITY_MS, SVP_CORRECTION_FACTOR_M_PER_MS};
pub use types::{EcefPosition, EnuDisplacement, GeodeticPosition};
