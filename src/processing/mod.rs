//! Measurement processing applied before the coordinate pipeline

pub mod svp;

pub use svp::{DepthCorrection, SvpError, SvpProfile, SvpSample, SvpSettings};
