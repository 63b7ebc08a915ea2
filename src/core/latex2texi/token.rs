//! Token types produced by the [`Tokenizer`](super::lexer::Tokenizer)

use std::fmt;
use std::ops::Range;

/// What a token is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `\name[bracket]{brace}...`
    Directive,
    /// `$...$`, single line
    Equation,
    /// `%` through end of line
    Comment,
    /// Free text, or the newline produced by `\\`
    Text,
    /// A character Texinfo needs escaped: `{`, `}`, `@`
    Literal,
    /// `~` (tie) or `&` inside a table
    UnbreakableSpace,
    EndOfInput,
}

/// A lexed token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Directive name, literal character, or raw payload
    pub text: String,
    /// The `[...]` argument of a directive
    pub bracket_arg: Option<String>,
    /// The `{...}` (and `|...|`) arguments of a directive, in source order
    pub brace_args: Vec<String>,
    /// Line on which each entry of `brace_args` opens
    pub arg_lines: Vec<usize>,
    /// Line on which the token finished lexing (1-indexed)
    pub line: usize,
    /// Byte range of the input consumed by this token
    pub span: Range<usize>,
}

impl Token {
    pub(crate) fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            bracket_arg: None,
            brace_args: Vec::new(),
            arg_lines: Vec::new(),
            line: 1,
            span: 0..0,
        }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    /// Whether this is the directive `\name`
    pub fn is_directive(&self, name: &str) -> bool {
        self.kind == TokenKind::Directive && self.text == name
    }

    /// First brace argument, the one most directives care about
    pub fn first_arg(&self) -> Option<&str> {
        self.brace_args.first().map(String::as_str)
    }

    /// Line where the first argument opens, for re-tokenizing it.
    /// Falls back to the token's own line.
    pub fn first_arg_line(&self) -> usize {
        self.arg_lines.first().copied().unwrap_or(self.line)
    }
}

/// Debug rendering used by `texi --tokens`
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Directive => {
                write!(f, "DIRECTIVE {}", self.text)?;
                if let Some(ref bracket) = self.bracket_arg {
                    write!(f, "[{}]", bracket)?;
                }
                for arg in &self.brace_args {
                    write!(f, "{{{}}}", arg)?;
                }
                Ok(())
            }
            TokenKind::Equation => write!(f, "EQUATION {}", self.text),
            TokenKind::Comment => write!(f, "COMMENT {{{}}}", self.text),
            TokenKind::Text => write!(f, "TEXT ({})", self.text),
            TokenKind::Literal => write!(f, "LITERAL {}", self.text),
            TokenKind::UnbreakableSpace => write!(f, "UNBREAKABLE_SPACE"),
            TokenKind::EndOfInput => write!(f, "EOF"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_display() {
        let mut tok = Token::new(TokenKind::Directive, "rSec0");
        tok.bracket_arg = Some("intro".to_string());
        tok.brace_args = vec!["Scope".to_string(), "x".to_string()];
        assert_eq!(tok.to_string(), "DIRECTIVE rSec0[intro]{Scope}{x}");
        assert!(tok.is_directive("rSec0"));
        assert_eq!(tok.first_arg(), Some("Scope"));
    }

    #[test]
    fn test_other_display() {
        assert_eq!(Token::new(TokenKind::Text, "abc").to_string(), "TEXT (abc)");
        assert_eq!(Token::new(TokenKind::Equation, "$x$").to_string(), "EQUATION $x$");
        assert_eq!(Token::new(TokenKind::Literal, "@").to_string(), "LITERAL @");
        assert_eq!(Token::new(TokenKind::EndOfInput, "").to_string(), "EOF");
        assert!(Token::new(TokenKind::EndOfInput, "").is_eof());
    }
}
