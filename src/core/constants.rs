//! Physical constants and system parameters

/// Reference speed of sound in seawater under standard conditions (m/s)
pub const REFERENCE_SOUND_VELOCITY_MS: f64 = 1500.0;

/// Depth adjustment per m/s of sound-velocity deviation from reference (m)
pub const SVP_CORRECTION_FACTOR_M_PER_MS: f64 = 0.01;
