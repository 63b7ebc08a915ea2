//! Command tables for the LaTeX dialect → Texinfo translation
//!
//! Each table answers "what does this command turn into" for one family of
//! commands. Commands with behaviour beyond a fixed string (sections,
//! `\pnum`, `\include`, recursive arguments) are handled in
//! `core::latex2texi::markup`.

use phf::{phf_map, phf_set};

/// Sectioning commands and the Texinfo heading they become, outermost first
pub static SECTION_LEVELS: phf::Map<&'static str, &'static str> = phf_map! {
    "rSec0" => "chapter",
    "rSec1" => "section",
    "rSec2" => "subsection",
    "rSec3" => "subsubsection",
    "rSec4" => "subsubheading",
};

/// Inline commands wrapped as `@cmd{arg}`.
/// The argument is copied byte for byte, never re-converted.
pub static INLINE_WRAPPERS: phf::Map<&'static str, &'static str> = phf_map! {
    "emph" => "emph",
    "textit" => "i",
    "textbf" => "b",
    "tcode" => "code",
    "grammarterm" => "code",
    "term" => "samp",
    "defn" => "dfn",
    "ref" => "ref",
};

/// Commands that produce a fixed string regardless of their arguments
pub static FIXED_MARKERS: phf::Map<&'static str, &'static str> = phf_map! {
    "documentclass" => "\\input texinfo  @c -*-texinfo-*-",
    "enterexample" => "[@emph{Example:}",
    "exitexample" => "---@emph{end example}]",
    "enternote" => "[@emph{Note:}",
    "exitnote" => "---@emph{end note}]",
    "item" => "@item",
    "br" => "@*",
    "opt" => "[opt]",

    // Escaped punctuation: \# \$ \% \& \_ and control space
    "#" => "#",
    "$" => "$",
    "%" => "%",
    "&" => "&",
    "_" => "_",
    " " => " ",
};

/// Declarations that are recognized and deliberately produce nothing
pub static IGNORED_COMMANDS: phf::Set<&'static str> = phf_set! {
    "usepackage",
    "input",
    "makeindex",
    "chapterstyle",
    "pagestyle",
    "frontmatter",
    "hyphenation",
};

/// How the tokenizer treats the body of an environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvironmentKind {
    /// Ordinary markup
    Plain,
    /// `~` is literal text
    Literal,
    /// `&` separates table columns
    Table,
}

/// A recognized environment: its lexing behaviour and its Texinfo brackets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvironmentSpec {
    pub kind: EnvironmentKind,
    /// Emitted for `\begin{name}`; empty for none
    pub open: &'static str,
    /// Emitted for `\end{name}`; empty for none
    pub close: &'static str,
}

const fn env(kind: EnvironmentKind, open: &'static str, close: &'static str) -> EnvironmentSpec {
    EnvironmentSpec { kind, open, close }
}

const TABLE_OPEN: &str = "@multitable @columnfractions .25 .25 .25 .25\n@item ";

/// Recognized environment names
pub static ENVIRONMENTS: phf::Map<&'static str, EnvironmentSpec> = phf_map! {
    "document" => env(EnvironmentKind::Plain, "", ""),
    "itemize" => env(EnvironmentKind::Plain, "@itemize @bullet", "@end itemize"),
    "enumerate" => env(EnvironmentKind::Plain, "@enumerate", "@end enumerate"),
    "codeblock" => env(EnvironmentKind::Literal, "@example", "@end example"),
    "ncsimplebnf" => env(EnvironmentKind::Plain, "@smallexample", "@end smallexample"),
    "ncbnftab" => env(EnvironmentKind::Plain, "@smallexample", "@end smallexample"),
    "tokentable" => env(EnvironmentKind::Table, TABLE_OPEN, "@end multitable"),
    "floattable" => env(EnvironmentKind::Table, TABLE_OPEN, "@end multitable"),
};

/// Look up an environment by name
pub fn lookup_environment(name: &str) -> Option<&'static EnvironmentSpec> {
    ENVIRONMENTS.get(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_levels() {
        assert_eq!(SECTION_LEVELS.get("rSec0"), Some(&"chapter"));
        assert_eq!(SECTION_LEVELS.get("rSec4"), Some(&"subsubheading"));
        assert_eq!(SECTION_LEVELS.len(), 5);
    }

    #[test]
    fn test_tables_do_not_overlap() {
        for name in INLINE_WRAPPERS.keys() {
            assert!(!FIXED_MARKERS.contains_key(*name), "{}", name);
            assert!(!IGNORED_COMMANDS.contains(*name), "{}", name);
            assert!(!SECTION_LEVELS.contains_key(*name), "{}", name);
        }
        for name in FIXED_MARKERS.keys() {
            assert!(!IGNORED_COMMANDS.contains(*name), "{}", name);
        }
    }

    #[test]
    fn test_environment_kinds() {
        assert_eq!(
            lookup_environment("codeblock").map(|e| e.kind),
            Some(EnvironmentKind::Literal)
        );
        assert_eq!(
            lookup_environment("tokentable").map(|e| e.kind),
            Some(EnvironmentKind::Table)
        );
        assert_eq!(
            lookup_environment("floattable").map(|e| e.kind),
            Some(EnvironmentKind::Table)
        );
        assert!(lookup_environment("tabular").is_none());
    }
}
