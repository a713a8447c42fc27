//! UI widgets
//!
//! This module contains reusable components for rendering listings
//! inside a terminal UI.

pub mod list_widget;
