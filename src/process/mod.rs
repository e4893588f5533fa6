/*!
 * Process Module
 * Process model and input validation
 */

pub mod types;
mod validation;

// Re-export for convenience
pub use types::{Process, ProcessState};
