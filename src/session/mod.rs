pub mod messages;
pub mod snapshot_mode;
pub mod tui_mode;

pub use snapshot_mode::{SnapshotOptions, run_snapshot_mode};
pub use tui_mode::run_tui_mode;
