//! # texinfo-conv
//!
//! Translator from the LaTeX dialect of the C++ standard draft sources
//! (`\rSec0`, `\pnum`, `\tcode`, `codeblock`, ...) to Texinfo.
//!
//! ## Features
//!
//! - **Modal tokenizer**: directives with nested, balanced `[...]`, `{...}`
//!   and `|...|` arguments; `codeblock` and table environments change how
//!   `~` and `&` are read
//! - **Recursive conversion**: section titles and footnotes are converted
//!   in place; `\include` inlines the converted file
//! - **Deduplicated diagnostics**: each unknown command is reported once
//!   per run, across all included files
//!
//! ## Usage Examples
//!
//! ```rust
//! use texinfo_conv::latex_to_texinfo;
//!
//! let texi = latex_to_texinfo(r"\footnote{See \tcode{x}.}").unwrap();
//! assert_eq!(texi, "@footnote{See @code{x}.}");
//! ```
//!
//! ### Several files in one run
//!
//! ```rust
//! use texinfo_conv::{MemoryFileResolver, TexiConverter, TexiOptions};
//!
//! let resolver = MemoryFileResolver::new().with_file("src/intro.tex", r"\pnum Hi");
//! let mut converter =
//!     TexiConverter::with_resolver(TexiOptions::with_include_dir("src"), resolver);
//!
//! let texi = converter.convert(r"\include{intro}", "std.tex").unwrap();
//! assert_eq!(texi, "1. Hi");
//! assert!(converter.diagnostics().is_empty());
//! ```

/// Core conversion modules
pub mod core;

/// Data layer - static command tables
pub mod data;

/// Utility modules
pub mod utils;

// Re-export core conversion functions
pub use crate::core::latex2texi::{
    latex_to_texinfo, latex_to_texinfo_with_diagnostics, latex_to_texinfo_with_options,
    tokenize, ConversionState, LexMode, TexiConverter, TexiOptions, Token, TokenKind, Tokenizer,
};

// Re-export utilities
pub use utils::diagnostics;
pub use utils::error::{ConversionError, ConversionOutput, ConversionResult};
pub use utils::files;
pub use utils::files::{FileResolveError, FileResolver, MemoryFileResolver, StdFileResolver};
