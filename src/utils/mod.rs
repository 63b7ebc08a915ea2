//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Diagnostics collection and reporting
//! - File resolution for `\include`
//! - Error types and result types

pub mod diagnostics;
pub mod error;
pub mod files;

// Re-export commonly used items
pub use diagnostics::{format_diagnostics, Diagnostic, DiagnosticLevel, Diagnostics};
pub use error::{ConversionError, ConversionOutput, ConversionResult};
pub use files::{FileResolveError, FileResolver, MemoryFileResolver, StdFileResolver};
