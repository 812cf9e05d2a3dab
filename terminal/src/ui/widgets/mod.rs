//! # Reusable UI Widgets
//!
//! Common widgets used across screens.

pub mod feedback;
pub mod nav_bar;
pub mod tables;
