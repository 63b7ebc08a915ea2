//! Modal tokenizer for the LaTeX dialect
//!
//! Turns source text into [`Token`]s one at a time. Directive arguments are
//! captured whole by a balanced-delimiter scanner, so a token for
//! `\footnote{see \tcode{x}}` carries the raw string `see \tcode{x}`; the
//! converter decides whether to re-tokenize it.
//!
//! The tokenizer has a mode that changes when it lexes `\begin`/`\end` of a
//! few environments:
//!
//! - `codeblock`: [`LexMode::Literal`], `~` is ordinary text
//! - `tokentable`, `floattable`: [`LexMode::Table`], `&` is a column break
//!
//! The mode is a single value, not a stack: the last transition wins.

use super::token::{Token, TokenKind};
use crate::data::commands::{lookup_environment, EnvironmentKind};
use crate::utils::error::{ConversionError, ConversionResult};

/// Characters that end a run of plain text
const SPECIAL_CHARS: &[char] = &['$', '%', '&', '@', '\\', '{', '}', '~'];

/// Lexing context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexMode {
    #[default]
    Normal,
    Literal,
    Table,
}

/// A saved cursor position
#[derive(Debug, Clone, Copy)]
struct Mark {
    pos: usize,
    line: usize,
}

/// Character cursor with explicit save/restore
struct Cursor<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str, line: usize) -> Self {
        Cursor {
            input,
            pos: 0,
            line,
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn eat_if(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn mark(&self) -> Mark {
        Mark {
            pos: self.pos,
            line: self.line,
        }
    }

    fn reset(&mut self, mark: Mark) {
        self.pos = mark.pos;
        self.line = mark.line;
    }
}

/// The tokenizer
pub struct Tokenizer<'a> {
    cursor: Cursor<'a>,
    mode: LexMode,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer over `input`, counting lines from 1
    pub fn new(input: &'a str) -> Self {
        Self::with_start_line(input, 1)
    }

    /// Create a tokenizer whose first line is numbered `line`.
    ///
    /// Used when re-tokenizing an argument so diagnostics point near the
    /// enclosing directive.
    pub fn with_start_line(input: &'a str, line: usize) -> Self {
        Tokenizer {
            cursor: Cursor::new(input, line.max(1)),
            mode: LexMode::Normal,
        }
    }

    /// Current lexing mode
    pub fn mode(&self) -> LexMode {
        self.mode
    }

    /// Lex the next token.
    ///
    /// Returns an `EndOfInput` token once the input is exhausted, and keeps
    /// returning it. Fails only on an argument whose delimiters never close.
    pub fn next_token(&mut self) -> ConversionResult<Token> {
        let start = self.cursor.pos;

        let mut token = match self.cursor.bump() {
            None => Token::new(TokenKind::EndOfInput, ""),
            Some(c @ ('{' | '}' | '@')) => Token::new(TokenKind::Literal, c),
            Some('\\') => self.lex_escape()?,
            Some('$') => self.lex_equation(),
            Some('%') => self.lex_comment(),
            Some('&') if self.mode == LexMode::Table => {
                Token::new(TokenKind::UnbreakableSpace, "&")
            }
            Some('~') if self.mode != LexMode::Literal => {
                Token::new(TokenKind::UnbreakableSpace, "~")
            }
            Some(c) => self.lex_text(c),
        };

        token.line = self.cursor.line;
        token.span = start..self.cursor.pos;

        if token.kind == TokenKind::Directive {
            self.update_mode(&token);
        }

        Ok(token)
    }

    /// After a backslash
    fn lex_escape(&mut self) -> ConversionResult<Token> {
        match self.cursor.bump() {
            // A lone backslash at end of input stays text
            None => Ok(Token::new(TokenKind::Text, "\\")),
            Some('\\') => Ok(Token::new(TokenKind::Text, "\n")),
            Some(c @ ('{' | '}')) => Ok(Token::new(TokenKind::Literal, c)),
            Some(first) => self.lex_directive(first),
        }
    }

    fn lex_directive(&mut self, first: char) -> ConversionResult<Token> {
        let mut name = String::from(first);
        let is_word = is_name_char(first);
        if is_word {
            while let Some(c) = self.cursor.peek().filter(|c| is_name_char(*c)) {
                name.push(c);
                self.cursor.bump();
            }
        }

        let mut token = Token::new(TokenKind::Directive, name);

        // Symbol commands (\%, \&, ...) take no arguments
        if !is_word {
            return Ok(token);
        }

        if self.cursor.eat_if('[') {
            token.bracket_arg = Some(self.scan_balanced('[', ']')?);
        }
        if self.cursor.eat_if('|') {
            let line = self.cursor.line;
            let arg = self.scan_balanced('|', '|')?;
            token.brace_args.push(arg);
            token.arg_lines.push(line);
        }

        // \pnum has no arguments, and the space after it belongs to the text
        if token.text != "pnum" {
            self.scan_brace_args(&mut token)?;
        }

        Ok(token)
    }

    /// Collect `{...}` arguments, allowing whitespace between them.
    ///
    /// Whitespace after the last argument is left in the input.
    fn scan_brace_args(&mut self, token: &mut Token) -> ConversionResult<()> {
        let mut mark = self.cursor.mark();
        self.cursor.skip_whitespace();

        while self.cursor.eat_if('{') {
            let line = self.cursor.line;
            let arg = self.scan_balanced('{', '}')?;
            token.brace_args.push(arg);
            token.arg_lines.push(line);

            mark = self.cursor.mark();
            self.cursor.skip_whitespace();
        }

        self.cursor.reset(mark);
        Ok(())
    }

    /// Scan up to the delimiter closing an already consumed `open`.
    ///
    /// Escaped characters are copied with their backslash and never count
    /// towards nesting. `close` is checked before `open`, so for `|...|`
    /// the next `|` closes.
    fn scan_balanced(&mut self, open: char, close: char) -> ConversionResult<String> {
        let start_line = self.cursor.line;
        let mut depth = 1usize;
        let mut arg = String::new();

        loop {
            let c = self
                .cursor
                .bump()
                .ok_or_else(|| ConversionError::malformed(open, close, start_line))?;

            if c == '\\' {
                arg.push(c);
                let escaped = self
                    .cursor
                    .bump()
                    .ok_or_else(|| ConversionError::malformed(open, close, start_line))?;
                arg.push(escaped);
                continue;
            }

            if c == close {
                depth -= 1;
                if depth == 0 {
                    return Ok(arg);
                }
            } else if c == open {
                depth += 1;
            }
            arg.push(c);
        }
    }

    /// `$...$`, cut short at end of line
    fn lex_equation(&mut self) -> Token {
        let mut text = String::from('$');
        while let Some(c) = self.cursor.peek() {
            if c == '\n' {
                break;
            }
            self.cursor.bump();
            text.push(c);
            if c == '$' {
                break;
            }
        }
        Token::new(TokenKind::Equation, text)
    }

    /// `%` through the newline, inclusive
    fn lex_comment(&mut self) -> Token {
        let mut text = String::from('%');
        while let Some(c) = self.cursor.bump() {
            text.push(c);
            if c == '\n' {
                break;
            }
        }
        Token::new(TokenKind::Comment, text)
    }

    /// The first character is taken unconditionally, so a stray `&` or `~`
    /// that no other rule claims still makes progress.
    fn lex_text(&mut self, first: char) -> Token {
        let mut text = String::from(first);
        while let Some(c) = self.cursor.peek() {
            if SPECIAL_CHARS.contains(&c) {
                break;
            }
            text.push(c);
            self.cursor.bump();
        }
        Token::new(TokenKind::Text, text)
    }

    fn update_mode(&mut self, token: &Token) {
        let entering = match token.text.as_str() {
            "begin" => true,
            "end" => false,
            _ => return,
        };
        let Some(env) = token.first_arg().and_then(lookup_environment) else {
            return;
        };

        let mode = match env.kind {
            EnvironmentKind::Plain => return,
            EnvironmentKind::Literal => LexMode::Literal,
            EnvironmentKind::Table => LexMode::Table,
        };
        self.mode = if entering { mode } else { LexMode::Normal };
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = ConversionResult<Token>;

    /// Yields tokens up to, not including, `EndOfInput`
    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(token) if token.is_eof() => None,
            other => Some(other),
        }
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Tokenize a whole string, without the trailing `EndOfInput`
pub fn tokenize(input: &str) -> ConversionResult<Vec<Token>> {
    Tokenizer::new(input).collect()
}
