//! Tokenizer for Structured Text declarations.
//!
//! Lexing happens in two layers:
//!
//! - [`RawLexer`] is a thin wrapper around the `logos` generated lexer that
//!   yields every token, trivia included, together with its line and column.
//! - [`Tokens`] drops trivia and binds comments to the significant tokens
//!   around them (see [`comments`]), producing the stream the parser consumes.

mod comments;
mod tokens;

pub use comments::{Comment, CommentStyle};
pub use tokens::TokenKind;

use logos::Logos;
use smol_str::SmolStr;
use text_size::{TextRange, TextSize};
use thiserror::Error;

use comments::CommentBinder;

/// A significant token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The exact source text of the token.
    pub text: SmolStr,
    /// The byte range of the token in the source text.
    pub range: TextRange,
    /// 1-based line number.
    pub line: u32,
    /// 1-based column number, counted in characters.
    pub column: u32,
    /// Comments bound to this token, in source order.
    pub comments: Vec<Comment>,
}

impl Token {
    /// Returns the comment that documents this token, if any.
    ///
    /// This is the most recent comment bound to it: the trailing line comment
    /// when there is one, otherwise the last leading comment.
    #[must_use]
    pub fn doc_comment(&self) -> Option<&Comment> {
        self.comments.last()
    }
}

/// An unexpected character in the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unexpected character {character} at line {line}, column {column}")]
pub struct LexError {
    /// The offending character, escaped when not printable.
    pub character: String,
    /// 1-based line number.
    pub line: u32,
    /// 1-based column number.
    pub column: u32,
}

/// A token as produced by `logos`, before trivia is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawToken {
    /// The kind of token.
    pub kind: TokenKind,
    /// The byte range of the token in the source text.
    pub range: TextRange,
    /// 1-based line number of the first character.
    pub line: u32,
    /// 1-based column number of the first character.
    pub column: u32,
}

/// Maps byte offsets to line/column pairs.
#[derive(Debug, Clone)]
struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            source
                .bytes()
                .enumerate()
                .filter(|(_, byte)| *byte == b'\n')
                .map(|(offset, _)| offset + 1),
        );
        Self { line_starts }
    }

    fn position(&self, source: &str, offset: usize) -> (u32, u32) {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        let start = self.line_starts[line];
        let column = source[start..offset].chars().count() + 1;
        (to_u32(line + 1), to_u32(column))
    }
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

fn text_range(span: std::ops::Range<usize>) -> TextRange {
    TextRange::new(
        TextSize::from(to_u32(span.start)),
        TextSize::from(to_u32(span.end)),
    )
}

/// Lexer yielding every token of the source, trivia included.
///
/// Unrecognized input is returned as `TokenKind::Error`; [`Tokens`] turns
/// those into a [`LexError`].
pub struct RawLexer<'src> {
    inner: logos::Lexer<'src, TokenKind>,
    source: &'src str,
    lines: LineIndex,
}

impl<'src> RawLexer<'src> {
    /// Creates a new lexer for the given source text.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            inner: TokenKind::lexer(source),
            source,
            lines: LineIndex::new(source),
        }
    }

    /// Returns the source text being lexed.
    #[must_use]
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Returns the text covered by a token of this source.
    #[must_use]
    pub fn text(&self, token: &RawToken) -> &'src str {
        &self.source[usize::from(token.range.start())..usize::from(token.range.end())]
    }

    /// Returns the line/column of the end of the input.
    fn end_position(&self) -> (u32, u32) {
        self.lines.position(self.source, self.source.len())
    }
}

impl Iterator for RawLexer<'_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<Self::Item> {
        let kind = self.inner.next()?.unwrap_or(TokenKind::Error);
        let span = self.inner.span();
        let (line, column) = self.lines.position(self.source, span.start);
        Some(RawToken {
            kind,
            range: text_range(span),
            line,
            column,
        })
    }
}

/// Lazy stream of significant tokens with comments bound to them.
///
/// The stream always ends with a `TokenKind::Eof` token. After the first
/// error it yields nothing more.
pub struct Tokens<'src> {
    raw: RawLexer<'src>,
    binder: CommentBinder,
    done: bool,
}

impl<'src> Tokens<'src> {
    /// Creates a token stream for the given source text.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            raw: RawLexer::new(source),
            binder: CommentBinder::default(),
            done: false,
        }
    }

    fn lex_error(&self, raw: &RawToken) -> LexError {
        let text = self.raw.text(raw);
        let character = match text.chars().next() {
            Some(c) if text.starts_with("(*") || text.starts_with("/*") => {
                format!("{c} (unterminated comment)")
            }
            Some(c) if !c.is_control() => c.to_string(),
            Some(c) => c.escape_debug().to_string(),
            None => String::new(),
        };
        LexError {
            character,
            line: raw.line,
            column: raw.column,
        }
    }
}

impl Iterator for Tokens<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        while let Some(raw) = self.raw.next() {
            if raw.kind == TokenKind::Error {
                self.done = true;
                return Some(Err(self.lex_error(&raw)));
            }
            let text = self.raw.text(&raw);
            if let Some(token) = self.binder.feed(raw, text) {
                return Some(Ok(token));
            }
        }

        if let Some(token) = self.binder.flush() {
            return Some(Ok(token));
        }

        self.done = true;
        let (line, column) = self.raw.end_position();
        let end = TextSize::from(to_u32(self.raw.source().len()));
        Some(Ok(Token {
            kind: TokenKind::Eof,
            text: SmolStr::default(),
            range: TextRange::empty(end),
            line,
            column,
            comments: self.binder.take_pending(),
        }))
    }
}

/// Tokenize the entire source.
///
/// # Errors
///
/// Returns the first [`LexError`] in the source.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Tokens::new(source).collect()
}

/// Lex source and return raw tokens paired with their text.
///
/// Useful for debugging and testing.
#[must_use]
pub fn lex_with_text(source: &str) -> Vec<(RawToken, &str)> {
    RawLexer::new(source)
        .map(|token| {
            let text = &source[usize::from(token.range.start())..usize::from(token.range.end())];
            (token, text)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .expect("source should tokenize")
            .into_iter()
            .map(|token| token.kind)
            .collect()
    }

    #[test]
    fn test_tokenize_basic() {
        assert_eq!(
            kinds("x : BOOL;"),
            vec![
                TokenKind::Ident,
                TokenKind::Colon,
                TokenKind::Ident,
                TokenKind::Semicolon,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_positions() {
        let tokens = tokenize("VAR\n    x : INT;\nEND_VAR").unwrap();
        assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
        assert_eq!(tokens[1].text, "x");
        assert_eq!((tokens[1].line, tokens[1].column), (2, 5));
        assert_eq!((tokens[5].line, tokens[5].column), (3, 1));
    }

    #[test]
    fn test_pragmas_are_dropped() {
        assert_eq!(
            kinds("{attribute 'hide'} x"),
            vec![TokenKind::Ident, TokenKind::Eof]
        );
    }

    #[test]
    fn test_unexpected_character() {
        let err = tokenize("VAR\n  x ? INT;").unwrap_err();
        assert_eq!(err.character, "?");
        assert_eq!((err.line, err.column), (2, 5));
    }

    #[test]
    fn test_control_character_is_escaped() {
        let err = tokenize("x \u{1} y").unwrap_err();
        assert_eq!(err.character, "\\u{1}");
    }

    #[test]
    fn test_restartable() {
        let source = "(* doc *) FUNCTION F : INT";
        assert_eq!(tokenize(source), tokenize(source));
    }

    #[test]
    fn test_lex_with_text_keeps_trivia() {
        let tokens = lex_with_text("x // c");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[2].0.kind, TokenKind::LineComment);
        assert_eq!(tokens[2].1, "// c");
    }
}
