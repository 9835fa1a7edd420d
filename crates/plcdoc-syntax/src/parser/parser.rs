//! Main parser implementation.

use crate::ast::Declaration;
use crate::lexer::{tokenize, Token, TokenKind};
use crate::parser::source::Source;
use crate::parser::{ParseError, MAX_NESTING_DEPTH};

/// Parses source text and returns its first declaration.
///
/// The whole input must still be well formed; trailing declarations are
/// parsed and then dropped.
///
/// # Errors
///
/// Returns the first lexical or syntax error in the input.
pub fn parse(source: &str) -> Result<Declaration, ParseError> {
    let mut declarations = parse_all(source)?;
    // `parse_all` never succeeds with an empty list.
    Ok(declarations.swap_remove(0))
}

/// Parses source text into all of its declarations, in source order.
///
/// # Errors
///
/// Returns the first lexical or syntax error in the input.
pub fn parse_all(source: &str) -> Result<Vec<Declaration>, ParseError> {
    let tokens = tokenize(source)?;
    Parser::new(tokens).parse()
}

/// The parser state.
pub(crate) struct Parser {
    source: Source,
    depth: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self {
            source: Source::new(tokens),
            depth: 0,
        }
    }

    /// `declaration+ EOF`
    fn parse(mut self) -> Result<Vec<Declaration>, ParseError> {
        let mut declarations = vec![self.parse_declaration()?];
        while !self.at_end() {
            declarations.push(self.parse_declaration()?);
        }
        Ok(declarations)
    }

    // =========================================================================
    // Helper Methods
    // =========================================================================

    pub(crate) fn current(&self) -> TokenKind {
        self.source.current()
    }

    pub(crate) fn at(&self, kind: TokenKind) -> bool {
        self.source.current() == kind
    }

    pub(crate) fn at_end(&self) -> bool {
        self.source.at_end()
    }

    pub(crate) fn current_text(&self) -> &str {
        &self.source.current_token().text
    }

    pub(crate) fn peek_kind_n(&self, n: usize) -> TokenKind {
        self.source.peek_kind_n(n)
    }

    pub(crate) fn bump(&mut self) -> Token {
        self.source.bump()
    }

    /// Consumes the current token if it has the given kind.
    pub(crate) fn eat(&mut self, kind: TokenKind) -> Option<Token> {
        self.at(kind).then(|| self.bump())
    }

    /// Consumes a token of the given kind or fails with `expected <what>`.
    pub(crate) fn expect(&mut self, kind: TokenKind, what: &str) -> Result<Token, ParseError> {
        if self.at(kind) {
            Ok(self.bump())
        } else {
            Err(self.error(format!("expected {what}")))
        }
    }

    /// Consumes an identifier.
    pub(crate) fn expect_ident(&mut self) -> Result<Token, ParseError> {
        self.expect(TokenKind::Ident, "identifier")
    }

    /// Builds a syntax error at the current token.
    pub(crate) fn error(&self, message: impl Into<String>) -> ParseError {
        let token = self.source.current_token();
        let found = if token.kind == TokenKind::Eof {
            token.kind.describe().to_string()
        } else {
            format!("'{}'", token.text)
        };
        ParseError::Syntax {
            message: message.into(),
            found,
            line: token.line,
            column: token.column,
        }
    }

    /// Runs a recursive production, failing once the nesting limit is hit.
    pub(crate) fn nested<T>(
        &mut self,
        production: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        self.deepen()?;
        let result = production(self);
        self.depth -= 1;
        result
    }

    /// Takes one level of the nesting budget without giving it back.
    ///
    /// Loops that fold a left-deep chain (`a + b + c`, `f(x)(y)`) call this
    /// once per link and restore `depth` themselves when the chain ends.
    pub(crate) fn deepen(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.error(format!(
                "nesting deeper than {MAX_NESTING_DEPTH} levels"
            )));
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn depth(&self) -> usize {
        self.depth
    }

    pub(crate) fn restore_depth(&mut self, depth: usize) {
        self.depth = depth;
    }
}
