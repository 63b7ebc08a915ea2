//! Core state and structures for LaTeX to Texinfo conversion
//!
//! This module contains the main converter struct and conversion state.

use std::io::Write;
use std::path::{Path, PathBuf};

use super::lexer::Tokenizer;
use super::markup::convert_directive;
use super::token::{Token, TokenKind};
use crate::utils::diagnostics::Diagnostics;
use crate::utils::error::{ConversionOutput, ConversionResult};
use crate::utils::files::{FileResolver, StdFileResolver};

// =============================================================================
// Conversion Options
// =============================================================================

/// Options for LaTeX to Texinfo conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TexiOptions {
    /// Directory `\include{name}` is resolved against
    /// Default: `.`
    pub include_dir: PathBuf,

    /// Extension appended to include names
    /// Default: `.tex`
    pub include_extension: String,

    /// `\include` argument reserved for the cross-reference list, which
    /// is never inlined
    /// Default: `xrefs`
    pub xref_include: String,
}

impl Default for TexiOptions {
    fn default() -> Self {
        Self {
            include_dir: PathBuf::from("."),
            include_extension: ".tex".to_string(),
            xref_include: "xrefs".to_string(),
        }
    }
}

impl TexiOptions {
    /// Create new options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve includes against `dir`
    pub fn with_include_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            include_dir: dir.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// Path of the file `\include{name}` refers to
    pub fn include_path(&self, name: &str) -> String {
        self.include_dir
            .join(format!("{}{}", name, self.include_extension))
            .to_string_lossy()
            .into_owned()
    }
}

// =============================================================================
// Conversion State
// =============================================================================

/// State local to one conversion pass over one piece of source.
///
/// Every nested pass (a re-converted argument, an included file) starts
/// from a fresh state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionState {
    /// Next paragraph number
    pub pnum: usize,
}

impl Default for ConversionState {
    fn default() -> Self {
        Self { pnum: 1 }
    }
}

impl ConversionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the current paragraph number and advance
    pub fn next_pnum(&mut self) -> usize {
        let n = self.pnum;
        self.pnum += 1;
        n
    }

    pub fn reset_pnum(&mut self) {
        self.pnum = 1;
    }
}

// =============================================================================
// Converter
// =============================================================================

/// LaTeX dialect to Texinfo converter
///
/// One converter serves a whole run: the options, the file resolver and the
/// diagnostics registry are shared by every file converted with it and by
/// every nested conversion.
pub struct TexiConverter {
    pub(crate) options: TexiOptions,
    pub(crate) resolver: Box<dyn FileResolver>,
    pub(crate) diagnostics: Diagnostics,
}

impl Default for TexiConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl TexiConverter {
    /// Converter with default options reading includes from disk
    pub fn new() -> Self {
        Self::with_options(TexiOptions::default())
    }

    pub fn with_options(options: TexiOptions) -> Self {
        Self::with_resolver(options, StdFileResolver::new())
    }

    /// Converter reading includes through `resolver`
    pub fn with_resolver(options: TexiOptions, resolver: impl FileResolver + 'static) -> Self {
        Self {
            options,
            resolver: Box::new(resolver),
            diagnostics: Diagnostics::new(),
        }
    }

    pub fn options(&self) -> &TexiOptions {
        &self.options
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn diagnostics_mut(&mut self) -> &mut Diagnostics {
        &mut self.diagnostics
    }

    /// Convert `source` to Texinfo. `path` is used in diagnostics only.
    ///
    /// Nothing is returned on error; use [`convert_to`](Self::convert_to)
    /// to keep the output produced before a malformed argument.
    pub fn convert(&mut self, source: &str, path: &str) -> ConversionResult<String> {
        let mut output = String::new();
        self.convert_into(source, path, 1, &mut output)?;
        Ok(output)
    }

    /// Convert `source`, writing each token's output to `out` as soon as
    /// it is produced.
    pub fn convert_to<W: Write>(
        &mut self,
        source: &str,
        path: &str,
        out: &mut W,
    ) -> ConversionResult<()> {
        self.run_pass(source, path, 1, |chunk| {
            out.write_all(chunk.as_bytes())?;
            Ok(())
        })
    }

    /// Convert and hand back the diagnostics recorded while doing so.
    ///
    /// Commands already reported by earlier conversions on this converter
    /// are not reported again.
    pub fn convert_with_diagnostics(
        &mut self,
        source: &str,
        path: &str,
    ) -> ConversionResult<ConversionOutput> {
        let content = self.convert(source, path)?;
        Ok(ConversionOutput::with_warnings(
            content,
            self.diagnostics.drain(),
        ))
    }

    /// Convert the file at `path`, read through the resolver, into `out`.
    ///
    /// Returns `Ok(false)` when the file could not be read; the failure is
    /// reported and nothing is written.
    pub fn convert_file<W: Write>(&mut self, path: &str, out: &mut W) -> ConversionResult<bool> {
        match self.read_input(path) {
            Some(source) => self.convert_to(&source, path, out).map(|()| true),
            None => Ok(false),
        }
    }

    /// Read a top-level input through the resolver, reporting failure
    pub fn read_input(&mut self, path: &str) -> Option<String> {
        match self.resolver.read_file(path) {
            Ok(source) => Some(source),
            Err(err) => {
                self.diagnostics
                    .report_io(path, None, format!("cannot open input: {}", err));
                None
            }
        }
    }

    /// Run one conversion pass, appending to `output`.
    ///
    /// This is the recursion point: arguments that carry markup and
    /// included files come back here with a fresh tokenizer and a fresh
    /// [`ConversionState`].
    pub(crate) fn convert_into(
        &mut self,
        source: &str,
        path: &str,
        start_line: usize,
        output: &mut String,
    ) -> ConversionResult<()> {
        self.run_pass(source, path, start_line, |chunk| {
            output.push_str(chunk);
            Ok(())
        })
    }

    /// Tokenize `source` and hand the output of each token to `emit`
    fn run_pass(
        &mut self,
        source: &str,
        path: &str,
        start_line: usize,
        mut emit: impl FnMut(&str) -> ConversionResult<()>,
    ) -> ConversionResult<()> {
        let mut lexer = Tokenizer::with_start_line(source, start_line);
        let mut state = ConversionState::new();
        let mut chunk = String::new();

        loop {
            let token = lexer.next_token().map_err(|e| e.in_file(path))?;
            if token.is_eof() {
                return Ok(());
            }
            chunk.clear();
            self.convert_token(&token, &mut state, path, &mut chunk)?;
            emit(&chunk)?;
        }
    }

    fn convert_token(
        &mut self,
        token: &Token,
        state: &mut ConversionState,
        path: &str,
        output: &mut String,
    ) -> ConversionResult<()> {
        match token.kind {
            TokenKind::Text | TokenKind::Equation => output.push_str(&token.text),
            TokenKind::Literal => {
                output.push('@');
                output.push_str(&token.text);
            }
            TokenKind::UnbreakableSpace => {
                if token.text == "&" {
                    output.push_str("\n@tab ");
                } else {
                    output.push_str("@tie{}");
                }
            }
            TokenKind::Comment => output.push('\n'),
            TokenKind::Directive => convert_directive(self, state, token, path, output)?,
            TokenKind::EndOfInput => {}
        }
        Ok(())
    }

    /// Convert an argument string on its own and return the result
    pub(crate) fn convert_fragment(
        &mut self,
        fragment: &str,
        path: &str,
        line: usize,
    ) -> ConversionResult<String> {
        let mut nested = String::new();
        self.convert_into(fragment, path, line, &mut nested)?;
        Ok(nested)
    }
}
