//! Application-level utilities for the Shelf CLI.
//!
//! This module provides:
//! - Path resolution for config and library files
//! - The per-invocation application context

mod context;
mod resolver;

pub use context::AppContext;
pub use resolver::resolve_config_path;
