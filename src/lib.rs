//! Fincart Analytics Service Library
//!
//! This library provides the analytics reporting endpoints for the Fincart
//! e-commerce platform.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::analytics;
