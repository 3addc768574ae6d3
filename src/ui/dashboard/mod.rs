//! Dashboard page
//!
//! Split into state, static content, grid rules and per-panel components

pub mod components;
pub mod content;
pub mod grid;
pub mod renderer;
pub mod state;
pub mod utils;

// Re-export main types and functions for external use
pub use renderer::{grid_row_count, render_dashboard, toggle_hit_area};
pub use state::DashboardState;
