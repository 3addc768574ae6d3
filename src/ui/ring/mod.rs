//! Circular progress indicator.
//!
//! `geometry` is renderer-independent; `widget` draws it on a braille canvas.

pub mod geometry;
pub mod widget;

pub use widget::ProgressRing;
