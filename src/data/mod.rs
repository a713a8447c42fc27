//! Data layer for key/value listings
//!
//! This module provides the data abstraction layer that separates
//! listing storage from presentation.

pub mod entry;
pub mod exporter;
pub mod list;
pub mod loaders;
pub mod value;
