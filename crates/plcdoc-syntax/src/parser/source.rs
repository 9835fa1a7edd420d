//! Token source for the parser.
//!
//! This module provides the `Source` struct that wraps a token stream
//! and provides lookahead and consumption operations.

use text_size::{TextRange, TextSize};

use crate::lexer::{Token, TokenKind};

/// A token source that provides tokens to the parser.
///
/// The token list always ends with an `Eof` token; reading past it keeps
/// returning that token.
pub(crate) struct Source {
    tokens: Vec<Token>,
    cursor: usize,
}

impl Source {
    /// Creates a new source from a tokenized input.
    pub(crate) fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::Eof) {
            let end = tokens
                .last()
                .map_or_else(|| TextSize::from(0), |token| token.range.end());
            let (line, column) = tokens
                .last()
                .map_or((1, 1), |token| (token.line, token.column));
            tokens.push(Token {
                kind: TokenKind::Eof,
                text: "".into(),
                range: TextRange::empty(end),
                line,
                column,
                comments: Vec::new(),
            });
        }
        Self { tokens, cursor: 0 }
    }

    /// Returns the current token kind.
    pub(crate) fn current(&self) -> TokenKind {
        self.peek_kind_n(0)
    }

    /// Returns the current token.
    pub(crate) fn current_token(&self) -> &Token {
        self.peek_token_n(0)
    }

    /// Peeks at the nth token ahead (0 = current).
    pub(crate) fn peek_kind_n(&self, n: usize) -> TokenKind {
        self.peek_token_n(n).kind
    }

    /// Peeks at the nth token ahead and returns the token.
    pub(crate) fn peek_token_n(&self, n: usize) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.cursor + n).min(last)]
    }

    /// Advances past the current token and returns it.
    pub(crate) fn bump(&mut self) -> Token {
        let token = self.current_token().clone();
        if self.cursor + 1 < self.tokens.len() {
            self.cursor += 1;
        }
        token
    }

    /// Returns `true` if at end of input.
    pub(crate) fn at_end(&self) -> bool {
        self.current() == TokenKind::Eof
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    #[test]
    fn test_peek_and_bump() {
        let mut source = Source::new(tokenize("a : INT").unwrap());
        assert_eq!(source.current(), TokenKind::Ident);
        assert_eq!(source.peek_kind_n(2), TokenKind::IntType);
        assert_eq!(source.peek_kind_n(10), TokenKind::Eof);
        assert_eq!(source.bump().text, "a");
        assert_eq!(source.current(), TokenKind::Colon);
    }

    #[test]
    fn test_bump_stops_at_eof() {
        let mut source = Source::new(Vec::new());
        assert!(source.at_end());
        assert_eq!(source.bump().kind, TokenKind::Eof);
        assert!(source.at_end());
    }
}
