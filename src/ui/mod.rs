// Module declarations
pub mod animation;
mod app;
pub mod card;
pub mod context;
pub mod dashboard;
pub mod ring;
pub mod theme;
// Re-exports for external use
pub use app::{App, run};
