/*!
 * History Module
 * Snapshot records and frame playback
 */

pub mod playback;
pub mod snapshot;

// Re-export for convenience
pub use playback::Playback;
pub use snapshot::{HistorySnapshot, ProcessSnapshot};
