/*!
 * Export Module
 * Text trace, JSON report, and display colors
 */

pub mod json;
pub mod palette;
pub mod trace;

// Re-export for convenience
pub use json::{ProcessReport, RunReport};
pub use palette::color_for;
pub use trace::TraceExport;
