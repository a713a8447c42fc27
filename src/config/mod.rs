//! Configuration module
//!
//! This module contains all configuration-related functionality
//! including display and loader behavior settings.

pub mod config;
