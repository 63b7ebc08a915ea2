//! Conversion diagnostics
//!
//! The converter never prints. Everything worth telling the user is
//! recorded in a [`Diagnostics`] value that lives for a whole run and is
//! shared, by mutable borrow, with every nested conversion (argument
//! re-conversion and included files).
//!
//! Unrecognized commands are deduplicated: a given command (or
//! `\begin`/`\end` with a given environment name) is reported once per run,
//! no matter how many files it shows up in. I/O problems are reported every
//! time they happen.
//!
//! ## Example
//!
//! ```rust
//! use texinfo_conv::diagnostics::Diagnostics;
//!
//! let mut diags = Diagnostics::new();
//! diags.report_unrecognized("a.tex", 3, "frobnicate", None);
//! diags.report_unrecognized("b.tex", 9, "frobnicate", None);
//! assert_eq!(diags.len(), 1);
//! ```

use fxhash::FxHashSet;
use std::fmt;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagnosticLevel {
    /// Warning - something was skipped
    Warning,
    /// Error - a unit of work (an include, a file) could not be processed
    Error,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLevel::Warning => write!(f, "warning"),
            DiagnosticLevel::Error => write!(f, "error"),
        }
    }
}

/// A single diagnostic message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity level
    pub level: DiagnosticLevel,
    /// Human-readable message
    pub message: String,
    /// Source file the diagnostic refers to
    pub path: Option<String>,
    /// Line number (1-indexed)
    pub line: Option<usize>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: DiagnosticLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            path: None,
            line: None,
        }
    }

    /// Add location information
    pub fn with_location(self, path: impl Into<String>, line: usize) -> Self {
        let mut diag = self.with_path(path);
        diag.line = Some(line);
        diag
    }

    /// Add the source path only
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        let path = path.into();
        if !path.is_empty() {
            self.path = Some(path);
        }
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: path:line: level: message
        match (&self.path, self.line) {
            (Some(path), Some(line)) => write!(f, "{}:{}: ", path, line)?,
            (Some(path), None) => write!(f, "{}: ", path)?,
            (None, Some(line)) => write!(f, "line {}: ", line)?,
            (None, None) => {}
        }
        write!(f, "{}: {}", self.level, self.message)
    }
}

/// Run-wide diagnostics registry
#[derive(Debug, Default)]
pub struct Diagnostics {
    /// Keys (`name` + argument) of unrecognized commands already reported
    seen: FxHashSet<String>,
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report a command the converter has no rule for.
    ///
    /// `argument` distinguishes `\begin{foo}` from `\begin{bar}`. Returns
    /// `true` when a new diagnostic was recorded.
    pub fn report_unrecognized(
        &mut self,
        path: &str,
        line: usize,
        name: &str,
        argument: Option<&str>,
    ) -> bool {
        let key = format!("{}{}", name, argument.unwrap_or(""));
        if self.seen.contains(&key) {
            return false;
        }

        let command = match argument {
            Some(arg) => format!("\\{}{{{}}}", name, arg),
            None => format!("\\{}", name),
        };
        self.entries.push(
            Diagnostic::new(
                DiagnosticLevel::Warning,
                format!("unrecognized command '{}'", command),
            )
            .with_location(path, line),
        );
        self.seen.insert(key);
        true
    }

    /// Report a file that could not be read. Never deduplicated.
    ///
    /// `line` is the line of the `\include` that asked for the file, if any.
    pub fn report_io(&mut self, path: &str, line: Option<usize>, message: impl Into<String>) {
        let diag = Diagnostic::new(DiagnosticLevel::Error, message);
        self.entries.push(match line {
            Some(line) => diag.with_location(path, line),
            None => diag.with_path(path),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    /// Take the diagnostics recorded so far, keeping the deduplication set.
    ///
    /// Used by callers that print diagnostics file by file while the run
    /// continues.
    pub fn drain(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.entries)
    }

    /// Number of error-level diagnostics
    pub fn errors(&self) -> usize {
        self.entries
            .iter()
            .filter(|d| d.level == DiagnosticLevel::Error)
            .count()
    }
}

/// Format diagnostics for terminal output, one per line
pub fn format_diagnostics(diagnostics: &[Diagnostic], use_color: bool) -> String {
    let mut output = String::new();

    for diag in diagnostics {
        if use_color {
            let color = match diag.level {
                DiagnosticLevel::Error => "\x1b[31m",   // Red
                DiagnosticLevel::Warning => "\x1b[33m", // Yellow
            };
            output.push_str(color);
            output.push_str(&diag.to_string());
            output.push_str("\x1b[0m\n");
        } else {
            output.push_str(&format!("{}\n", diag));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_is_deduplicated() {
        let mut diags = Diagnostics::new();
        assert!(diags.report_unrecognized("a.tex", 1, "foo", None));
        assert!(!diags.report_unrecognized("b.tex", 20, "foo", None));
        assert_eq!(diags.len(), 1);

        let diag = diags.iter().next().unwrap();
        assert_eq!(diag.path.as_deref(), Some("a.tex"));
        assert_eq!(diag.line, Some(1));
        assert_eq!(diag.to_string(), "a.tex:1: warning: unrecognized command '\\foo'");
    }

    #[test]
    fn test_argument_distinguishes_keys() {
        let mut diags = Diagnostics::new();
        diags.report_unrecognized("x.tex", 1, "begin", Some("foo"));
        diags.report_unrecognized("x.tex", 2, "begin", Some("bar"));
        diags.report_unrecognized("x.tex", 3, "begin", Some("foo"));
        assert_eq!(diags.len(), 2);
        assert!(diags
            .iter()
            .any(|d| d.message.contains("'\\begin{bar}'")));
    }

    #[test]
    fn test_key_is_plain_concatenation() {
        // "be" + "ginfoo" and "begin" + "foo" share a key
        let mut diags = Diagnostics::new();
        diags.report_unrecognized("x.tex", 1, "begin", Some("foo"));
        assert!(!diags.report_unrecognized("x.tex", 1, "beginfoo", None));
    }

    #[test]
    fn test_io_reports_are_not_deduplicated() {
        let mut diags = Diagnostics::new();
        diags.report_io("main.tex", Some(4), "cannot read 'missing.tex'");
        diags.report_io("main.tex", Some(4), "cannot read 'missing.tex'");
        diags.report_io("other.tex", None, "cannot open input");
        assert_eq!(diags.len(), 3);
        assert_eq!(diags.errors(), 3);

        let rendered: Vec<String> = diags.iter().map(|d| d.to_string()).collect();
        assert_eq!(rendered[0], "main.tex:4: error: cannot read 'missing.tex'");
        assert_eq!(rendered[2], "other.tex: error: cannot open input");
    }

    #[test]
    fn test_drain_keeps_seen_set() {
        let mut diags = Diagnostics::new();
        diags.report_unrecognized("a.tex", 1, "foo", None);
        assert_eq!(diags.drain().len(), 1);
        assert!(diags.is_empty());
        assert!(!diags.report_unrecognized("b.tex", 1, "foo", None));
    }

    #[test]
    fn test_format_without_color() {
        let diags = vec![
            Diagnostic::new(DiagnosticLevel::Warning, "hello"),
            Diagnostic::new(DiagnosticLevel::Error, "bye").with_path("z.tex"),
        ];
        assert_eq!(
            format_diagnostics(&diags, false),
            "warning: hello\nz.tex: error: bye\n"
        );
        let colored = format_diagnostics(&diags, true);
        assert!(colored.starts_with("\x1b[33m"));
        assert!(colored.contains("\x1b[31mz.tex"));
    }
}
