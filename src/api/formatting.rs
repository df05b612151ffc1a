//! Position fix output formatting
//!
//! Renders a `PositionFix` for the boundary shell: a labeled text block,
//! a JSON document, or a single CSV record. Angles are printed to seven
//! decimal places and meters to two by default, matching the display
//! precision the survey operators expect.

use crate::api::types::PositionFix;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Output precision for formatted values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FormatPrecision {
    /// Decimal places for latitude/longitude (degrees)
    pub angle_decimals: usize,
    /// Decimal places for meter quantities
    pub meter_decimals: usize,
}

impl Default for FormatPrecision {
    fn default() -> Self {
        Self {
            angle_decimals: 7,
            meter_decimals: 2,
        }
    }
}

/// Human-readable multi-line text output.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter {
    pub precision: FormatPrecision,
}

impl TextFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_precision(mut self, precision: FormatPrecision) -> Self {
        self.precision = precision;
        self
    }

    pub fn format(&self, fix: &PositionFix) -> String {
        let a = self.precision.angle_decimals;
        let m = self.precision.meter_decimals;
        let mut output = String::new();

        output.push_str("Absolute position of the vehicle:\n");
        output.push_str(&format!("  Latitude:  {:.*}°\n", a, fix.vehicle.lat));
        output.push_str(&format!("  Longitude: {:.*}°\n", a, fix.vehicle.lon));
        output.push_str(&format!("  Altitude:  {:.*} m\n", m, fix.vehicle.alt));

        if let Some(depth) = fix.subsea_depth_m {
            output.push_str(&format!("  Depth:     {:.*} m\n", m, depth));
        }

        if let Some(correction) = &fix.depth_correction {
            output.push_str(&format!(
                "  Raw depth:              {:.*} m\n",
                m, correction.raw_depth_m
            ));
            output.push_str(&format!(
                "  Sound velocity at depth: {:.1} m/s\n",
                correction.velocity_ms
            ));
            output.push_str(&format!(
                "  SVP correction:         {:+.*} m\n",
                m, correction.adjustment_m
            ));
            output.push_str(&format!(
                "  Corrected depth:        {:.*} m\n",
                m, correction.corrected_depth_m
            ));
        }

        output
    }
}

/// JSON document output via serde_json.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter {
    /// Pretty-print with indentation
    pub pretty: bool,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    pub fn format(&self, fix: &PositionFix) -> serde_json::Result<String> {
        let document = json!({
            "vessel": fix.vessel,
            "vehicle": fix.vehicle,
            "vehicle_ecef": fix.vehicle_ecef,
            "subsea_depth_m": fix.subsea_depth_m,
            "depth_correction": fix.depth_correction,
        });
        if self.pretty {
            serde_json::to_string_pretty(&document)
        } else {
            serde_json::to_string(&document)
        }
    }
}

/// Single-record CSV output: header plus one data line.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvFormatter {
    pub precision: FormatPrecision,
}

impl CsvFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(&self) -> &'static str {
        "lat_deg,lon_deg,alt_m,subsea_depth_m"
    }

    pub fn format(&self, fix: &PositionFix) -> String {
        let a = self.precision.angle_decimals;
        let m = self.precision.meter_decimals;
        let depth = fix
            .subsea_depth_m
            .map(|d| format!("{:.*}", m, d))
            .unwrap_or_default();
        format!(
            "{}\n{:.*},{:.*},{:.*},{}",
            self.header(),
            a,
            fix.vehicle.lat,
            a,
            fix.vehicle.lon,
            m,
            fix.vehicle.alt,
            depth
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fix::compute_fix;

    fn sample_fix() -> PositionFix {
        compute_fix(32.1234567, 45.7654321, 0.0, 10.0, -20.0, -75.0).unwrap()
    }

    #[test]
    fn test_text_format_fields() {
        let text = TextFormatter::new().format(&sample_fix());
        assert!(text.contains("Latitude:"));
        assert!(text.contains("Longitude:"));
        assert!(text.contains("Altitude:"));
        assert!(text.contains("Depth:"));
        // Seven decimal places on angles
        assert!(text.contains("32.1234"));
    }

    #[test]
    fn test_text_format_svp_block_only_when_corrected() {
        let text = TextFormatter::new().format(&sample_fix());
        assert!(!text.contains("SVP correction"));
    }

    #[test]
    fn test_json_format_roundtrips() {
        let fix = sample_fix();
        let text = JsonFormatter::new().format(&fix).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert!((value["vehicle"]["lat"].as_f64().unwrap() - fix.vehicle.lat).abs() < 1e-12);
        assert!(value["depth_correction"].is_null());
        assert!(value["subsea_depth_m"].as_f64().is_some());
    }

    #[test]
    fn test_csv_format_shape() {
        let output = CsvFormatter::new().format(&sample_fix());
        let mut lines = output.lines();
        assert_eq!(lines.next().unwrap(), "lat_deg,lon_deg,alt_m,subsea_depth_m");
        let record = lines.next().unwrap();
        assert_eq!(record.split(',').count(), 4);
    }

    #[test]
    fn test_csv_empty_depth_field_above_surface() {
        let fix = compute_fix(0.0, 0.0, 0.0, 0.0, 0.0, 50.0).unwrap();
        let output = CsvFormatter::new().format(&fix);
        assert!(output.ends_with(','));
    }
}
