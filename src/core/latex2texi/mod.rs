//! LaTeX dialect to Texinfo conversion module
//!
//! # Module Structure
//!
//! - `token`: Token types
//! - `lexer`: Modal tokenizer with the balanced-argument scanner
//! - `context`: Converter, options and per-pass state (`TexiConverter`, `TexiOptions`)
//! - `markup`: Directive handling (`\rSec0`, `\pnum`, `\tcode`, `\include`, ...)
//! - `environment`: `\begin`/`\end` handling
//!
//! # Example
//!
//! ```rust
//! use texinfo_conv::core::latex2texi::{TexiConverter, TexiOptions};
//!
//! let mut converter = TexiConverter::with_options(TexiOptions::with_include_dir("source"));
//! let texi = converter.convert(r"\rSec0[intro]{Scope}", "std.tex").unwrap();
//! assert!(texi.contains("@chapter Scope"));
//! ```

// Submodules
pub mod context;
pub mod environment;
pub mod lexer;
pub mod markup;
pub mod token;

// Re-export main types for convenience
pub use context::{ConversionState, TexiConverter, TexiOptions};
pub use lexer::{tokenize, LexMode, Tokenizer};
pub use token::{Token, TokenKind};

use crate::utils::error::{ConversionOutput, ConversionResult};

// =============================================================================
// Public API Functions
// =============================================================================

/// Convert a LaTeX dialect string to Texinfo with default options
///
/// Includes are resolved against the current directory.
///
/// # Example
///
/// ```rust
/// use texinfo_conv::core::latex2texi::latex_to_texinfo;
///
/// let texi = latex_to_texinfo(r"\pnum Use \tcode{std::move}.").unwrap();
/// assert_eq!(texi, "1. Use @code{std::move}.");
/// ```
pub fn latex_to_texinfo(input: &str) -> ConversionResult<String> {
    TexiConverter::new().convert(input, "")
}

/// Convert with custom options
pub fn latex_to_texinfo_with_options(
    input: &str,
    options: TexiOptions,
) -> ConversionResult<String> {
    TexiConverter::with_options(options).convert(input, "")
}

/// Convert and return the diagnostics alongside the output
pub fn latex_to_texinfo_with_diagnostics(
    input: &str,
    options: TexiOptions,
) -> ConversionResult<ConversionOutput> {
    TexiConverter::with_options(options).convert_with_diagnostics(input, "")
}

// =============================================================================
// Tests
// =============================================================================
