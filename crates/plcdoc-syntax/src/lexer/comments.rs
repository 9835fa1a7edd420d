//! Binding of comments to significant tokens.
//!
//! Structured Text has no dedicated doc-comment syntax, so documentation is
//! recovered from ordinary comments with a positional rule:
//!
//! - a comment that follows a significant token on the same line, with
//!   nothing but whitespace in between, is a *trailing* comment of that token
//!   (`x : BOOL; // doc for x`); only line comments qualify;
//! - every other comment, block or line, belongs to the next significant
//!   token (`(* doc for x *) x : BOOL;`).
//!
//! Attribute pragmas are skipped without breaking either rule. The whole
//! policy lives in [`CommentBinder::feed`].

use smol_str::SmolStr;

use super::{RawToken, Token, TokenKind};

/// The syntactic form of a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentStyle {
    /// `(* ... *)` or `/* ... */`
    Block,
    /// `// ...`
    Line,
}

/// A comment bound to a token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Comment {
    /// The syntactic form of the comment.
    pub style: CommentStyle,
    /// Block comments keep their delimiters; line comments are stored without
    /// the leading `//` and trimmed.
    pub text: SmolStr,
}

impl Comment {
    /// Creates a block comment from its full source text.
    #[must_use]
    pub fn block(text: &str) -> Self {
        Self {
            style: CommentStyle::Block,
            text: SmolStr::new(text),
        }
    }

    /// Creates a line comment from its full source text (including `//`).
    #[must_use]
    pub fn line(text: &str) -> Self {
        let body = text.strip_prefix("//").unwrap_or(text);
        Self {
            style: CommentStyle::Line,
            text: SmolStr::new(body.trim()),
        }
    }

    /// Returns true for `(* ... *)` style comments.
    #[must_use]
    pub fn is_block(&self) -> bool {
        self.style == CommentStyle::Block
    }
}

/// Buffers one significant token so that a trailing line comment can still
/// be bound to it.
#[derive(Debug, Default)]
pub(super) struct CommentBinder {
    held: Option<Token>,
    pending: Vec<Comment>,
    same_line: bool,
}

impl CommentBinder {
    /// Feeds one raw token; returns a finished significant token, if any.
    pub(super) fn feed(&mut self, raw: RawToken, text: &str) -> Option<Token> {
        match raw.kind {
            TokenKind::Whitespace => {
                if text.contains('\n') {
                    self.same_line = false;
                }
                None
            }
            TokenKind::Pragma => None,
            TokenKind::LineComment => {
                let comment = Comment::line(text);
                match self.held.as_mut() {
                    Some(held) if self.same_line => held.comments.push(comment),
                    _ => self.pending.push(comment),
                }
                None
            }
            TokenKind::BlockComment => {
                self.pending.push(Comment::block(text));
                self.same_line = false;
                None
            }
            _ => {
                let token = Token {
                    kind: raw.kind,
                    text: SmolStr::new(text),
                    range: raw.range,
                    line: raw.line,
                    column: raw.column,
                    comments: std::mem::take(&mut self.pending),
                };
                self.same_line = true;
                self.held.replace(token)
            }
        }
    }

    /// Releases the buffered token at the end of input.
    pub(super) fn flush(&mut self) -> Option<Token> {
        self.held.take()
    }

    /// Takes the comments that were not followed by any token.
    pub(super) fn take_pending(&mut self) -> Vec<Comment> {
        std::mem::take(&mut self.pending)
    }
}
