//! Core conversion modules
//!
//! - `latex2texi`: LaTeX dialect to Texinfo converter

pub mod latex2texi;

// Re-export main types and functions from latex2texi
pub use latex2texi::{
    latex_to_texinfo, latex_to_texinfo_with_diagnostics, latex_to_texinfo_with_options,
    ConversionState, TexiConverter, TexiOptions,
};
