//! Sound Velocity Profile handling
//!
//! A measured ROV depth is biased by the local speed of sound; the profile
//! maps depth to sound velocity so the raw depth can be adjusted before it
//! enters the coordinate pipeline. Profiles are loaded from a two-column
//! `Depth,Velocity` CSV file.

use crate::core::constants::{REFERENCE_SOUND_VELOCITY_MS, SVP_CORRECTION_FACTOR_M_PER_MS};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// One depth/velocity sample of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SvpSample {
    /// Sample depth (meters, positive down)
    pub depth_m: f64,
    /// Sound velocity at that depth (m/s)
    pub velocity_ms: f64,
}

/// Errors raised while loading or applying a sound velocity profile.
#[derive(Debug, Clone, PartialEq)]
pub enum SvpError {
    /// Profile file could not be read
    Io { path: String, message: String },
    /// A data line did not parse as two comma-separated numbers
    MalformedLine { line_number: usize, content: String },
    /// A parsed sample contained a NaN or infinite value
    NonFiniteSample { line_number: usize },
    /// No usable samples after parsing
    EmptyProfile,
}

impl fmt::Display for SvpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SvpError::Io { path, message } => {
                write!(f, "Failed to read SVP file '{}': {}", path, message)
            }
            SvpError::MalformedLine {
                line_number,
                content,
            } => {
                write!(f, "Malformed SVP line {}: '{}'", line_number, content)
            }
            SvpError::NonFiniteSample { line_number } => {
                write!(f, "Non-finite SVP sample on line {}", line_number)
            }
            SvpError::EmptyProfile => write!(f, "SVP profile contains no samples"),
        }
    }
}

impl std::error::Error for SvpError {}

/// Settings for the depth correction derived from a profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SvpSettings {
    /// Reference sound velocity the depth sensor assumes (m/s)
    pub reference_velocity_ms: f64,
    /// Depth adjustment per m/s of deviation from the reference (m)
    pub correction_factor_m_per_ms: f64,
}

impl Default for SvpSettings {
    fn default() -> Self {
        Self {
            reference_velocity_ms: REFERENCE_SOUND_VELOCITY_MS,
            correction_factor_m_per_ms: SVP_CORRECTION_FACTOR_M_PER_MS,
        }
    }
}

/// Result of applying a profile to a raw depth measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepthCorrection {
    /// Depth as reported by the sensor (meters)
    pub raw_depth_m: f64,
    /// Interpolated sound velocity at the raw depth (m/s)
    pub velocity_ms: f64,
    /// Applied adjustment (meters, signed)
    pub adjustment_m: f64,
    /// Depth after correction (meters)
    pub corrected_depth_m: f64,
}

/// A sound velocity profile: depth/velocity samples sorted by depth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvpProfile {
    samples: Vec<SvpSample>,
}

impl SvpProfile {
    /// Build a profile from samples, sorting by depth and dropping
    /// duplicate depths (first sample at a depth wins).
    pub fn new(mut samples: Vec<SvpSample>) -> Result<Self, SvpError> {
        if samples.is_empty() {
            return Err(SvpError::EmptyProfile);
        }
        samples.sort_by(|a, b| a.depth_m.total_cmp(&b.depth_m));
        samples.dedup_by(|b, a| b.depth_m == a.depth_m);
        Ok(Self { samples })
    }

    /// Parse a profile from CSV text with a `Depth,Velocity` header.
    ///
    /// Blank lines are skipped; the header line is recognized by failing
    /// to parse as numbers. Any other unparsable line is an error.
    pub fn from_csv_str(text: &str) -> Result<Self, SvpError> {
        let mut samples = Vec::new();

        for (index, raw_line) in text.lines().enumerate() {
            let line_number = index + 1;
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }

            let mut fields = line.split(',');
            let depth = fields.next().map(str::trim).and_then(|s| s.parse::<f64>().ok());
            let velocity = fields.next().map(str::trim).and_then(|s| s.parse::<f64>().ok());

            match (depth, velocity) {
                (Some(depth_m), Some(velocity_ms)) => {
                    if fields.next().is_some() {
                        return Err(SvpError::MalformedLine {
                            line_number,
                            content: raw_line.to_string(),
                        });
                    }
                    if !(depth_m.is_finite() && velocity_ms.is_finite()) {
                        return Err(SvpError::NonFiniteSample { line_number });
                    }
                    samples.push(SvpSample {
                        depth_m,
                        velocity_ms,
                    });
                }
                _ if line_number == 1 => {
                    // Header line
                    continue;
                }
                _ => {
                    return Err(SvpError::MalformedLine {
                        line_number,
                        content: raw_line.to_string(),
                    });
                }
            }
        }

        Self::new(samples)
    }

    /// Load a profile from a CSV file.
    pub fn from_csv_file<P: AsRef<Path>>(path: P) -> Result<Self, SvpError> {
        let content = fs::read_to_string(&path).map_err(|e| SvpError::Io {
            path: path.as_ref().to_string_lossy().to_string(),
            message: e.to_string(),
        })?;
        Self::from_csv_str(&content)
    }

    pub fn samples(&self) -> &[SvpSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Interpolated sound velocity at `depth_m`.
    ///
    /// Linear between samples, clamped to the endpoint values outside the
    /// sampled depth range.
    pub fn velocity_at(&self, depth_m: f64) -> f64 {
        let first = self.samples[0];
        let last = self.samples[self.samples.len() - 1];

        if depth_m <= first.depth_m {
            return first.velocity_ms;
        }
        if depth_m >= last.depth_m {
            return last.velocity_ms;
        }

        for pair in self.samples.windows(2) {
            let (lower, upper) = (pair[0], pair[1]);
            if lower.depth_m <= depth_m && depth_m <= upper.depth_m {
                let fraction = (depth_m - lower.depth_m) / (upper.depth_m - lower.depth_m);
                return lower.velocity_ms + (upper.velocity_ms - lower.velocity_ms) * fraction;
            }
        }

        // Unreachable: depth_m is strictly inside the sampled range
        last.velocity_ms
    }

    /// Adjust a raw depth measurement for the sound velocity at that depth.
    pub fn correct_depth(&self, raw_depth_m: f64, settings: &SvpSettings) -> DepthCorrection {
        let velocity_ms = self.velocity_at(raw_depth_m);
        let adjustment_m =
            (velocity_ms - settings.reference_velocity_ms) * settings.correction_factor_m_per_ms;
        DepthCorrection {
            raw_depth_m,
            velocity_ms,
            adjustment_m,
            corrected_depth_m: raw_depth_m + adjustment_m,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_profile() -> SvpProfile {
        SvpProfile::new(vec![
            SvpSample {
                depth_m: 0.0,
                velocity_ms: 1510.0,
            },
            SvpSample {
                depth_m: 100.0,
                velocity_ms: 1500.0,
            },
            SvpSample {
                depth_m: 300.0,
                velocity_ms: 1490.0,
            },
        ])
        .unwrap()
    }

    #[test]
    fn test_velocity_at_sample_depths() {
        let profile = test_profile();
        assert_eq!(profile.velocity_at(0.0), 1510.0);
        assert_eq!(profile.velocity_at(100.0), 1500.0);
        assert_eq!(profile.velocity_at(300.0), 1490.0);
    }

    #[test]
    fn test_velocity_linear_between_samples() {
        let profile = test_profile();
        assert!((profile.velocity_at(50.0) - 1505.0).abs() < 1e-9);
        assert!((profile.velocity_at(200.0) - 1495.0).abs() < 1e-9);
    }

    #[test]
    fn test_velocity_clamped_outside_range() {
        let profile = test_profile();
        assert_eq!(profile.velocity_at(-10.0), 1510.0);
        assert_eq!(profile.velocity_at(5000.0), 1490.0);
    }

    #[test]
    fn test_correct_depth_arithmetic() {
        // Velocity 1520 at reference 1500 with factor 0.01 adds 0.20 m
        let profile = SvpProfile::new(vec![SvpSample {
            depth_m: 0.0,
            velocity_ms: 1520.0,
        }])
        .unwrap();
        let correction = profile.correct_depth(80.0, &SvpSettings::default());
        assert!((correction.velocity_ms - 1520.0).abs() < 1e-9);
        assert!((correction.adjustment_m - 0.20).abs() < 1e-9);
        assert!((correction.corrected_depth_m - 80.20).abs() < 1e-9);
    }

    #[test]
    fn test_correct_depth_negative_deviation() {
        let profile = SvpProfile::new(vec![SvpSample {
            depth_m: 0.0,
            velocity_ms: 1480.0,
        }])
        .unwrap();
        let correction = profile.correct_depth(50.0, &SvpSettings::default());
        assert!((correction.adjustment_m - (-0.20)).abs() < 1e-9);
        assert!((correction.corrected_depth_m - 49.80).abs() < 1e-9);
    }

    #[test]
    fn test_from_csv_with_header() {
        let profile = SvpProfile::from_csv_str("Depth,Velocity\n0,1510\n100,1500\n300,1490\n")
            .unwrap();
        assert_eq!(profile.len(), 3);
        assert!((profile.velocity_at(50.0) - 1505.0).abs() < 1e-9);
    }

    #[test]
    fn test_from_csv_unsorted_input_is_sorted() {
        let profile =
            SvpProfile::from_csv_str("Depth,Velocity\n300,1490\n0,1510\n100,1500\n").unwrap();
        let depths: Vec<f64> = profile.samples().iter().map(|s| s.depth_m).collect();
        assert_eq!(depths, vec![0.0, 100.0, 300.0]);
    }

    #[test]
    fn test_from_csv_rejects_malformed_line() {
        let result = SvpProfile::from_csv_str("Depth,Velocity\n0,1510\nten,1500\n");
        assert!(matches!(
            result,
            Err(SvpError::MalformedLine { line_number: 3, .. })
        ));
    }

    #[test]
    fn test_from_csv_rejects_extra_fields() {
        let result = SvpProfile::from_csv_str("Depth,Velocity\n0,1510,extra\n");
        assert!(matches!(result, Err(SvpError::MalformedLine { .. })));
    }

    #[test]
    fn test_from_csv_rejects_empty() {
        assert!(matches!(
            SvpProfile::from_csv_str(""),
            Err(SvpError::EmptyProfile)
        ));
        assert!(matches!(
            SvpProfile::from_csv_str("Depth,Velocity\n"),
            Err(SvpError::EmptyProfile)
        ));
    }

    #[test]
    fn test_from_csv_file_missing() {
        let result = SvpProfile::from_csv_file("/nonexistent/svp_profile.csv");
        assert!(matches!(result, Err(SvpError::Io { .. })));
    }

    #[test]
    fn test_from_csv_file_roundtrip() {
        let path = std::env::temp_dir().join("svp_profile_test.csv");
        fs::write(&path, "Depth,Velocity\n0,1512.5\n50,1508.0\n").unwrap();

        let profile = SvpProfile::from_csv_file(&path).unwrap();
        assert_eq!(profile.len(), 2);
        assert!((profile.velocity_at(25.0) - 1510.25).abs() < 1e-9);

        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_duplicate_depths_deduplicated() {
        let profile = SvpProfile::new(vec![
            SvpSample {
                depth_m: 10.0,
                velocity_ms: 1500.0,
            },
            SvpSample {
                depth_m: 10.0,
                velocity_ms: 1600.0,
            },
            SvpSample {
                depth_m: 20.0,
                velocity_ms: 1490.0,
            },
        ])
        .unwrap();
        assert_eq!(profile.len(), 2);
        // Interpolation stays finite across the former duplicate
        assert!(profile.velocity_at(15.0).is_finite());
    }
}
