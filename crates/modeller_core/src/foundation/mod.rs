//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the core:
//! - Math types and the camera-space/world-space transform
//! - Logging utilities

pub mod math;
pub mod logging;
