//! External interface of the positioning core
//!
//! One operation (`compute_fix`, plus the SVP-corrected variant), a
//! structured response, and formatters for the boundary shell.

pub mod fix;
pub mod formatting;
pub mod types;

pub use fix::{compute_fix, compute_fix_with_svp, PositioningApi};
pub use formatting::{CsvFormatter, FormatPrecision, JsonFormatter, TextFormatter};
pub use types::{ApiError, ApiResult, PositionFix};
