//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod actions;
pub mod footer;
pub mod header;
pub mod health;
pub mod impact;
pub mod risk;
pub mod score;
pub mod threats;
