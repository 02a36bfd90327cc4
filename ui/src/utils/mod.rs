//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: WASM-compatible logging macros for browser console output
//! - **format**: display formatting for migration timestamps

pub mod console_macros;
pub mod format;

pub use format::*;
