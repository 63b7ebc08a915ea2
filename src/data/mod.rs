//! Data layer - Static command tables
//!
//! This module contains the static data used for LaTeX → Texinfo conversion:
//! - Section levels
//! - Inline wrappers and fixed markers
//! - Ignored declarations
//! - Environments

pub mod commands;

// Re-export commonly used items
pub use commands::{
    lookup_environment, EnvironmentKind, EnvironmentSpec, ENVIRONMENTS, FIXED_MARKERS,
    IGNORED_COMMANDS, INLINE_WRAPPERS, SECTION_LEVELS,
};
