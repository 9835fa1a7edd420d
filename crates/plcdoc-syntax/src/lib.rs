//! `plcdoc-syntax` - Tokenizer, parser, and AST for Structured Text declarations.
//!
//! This crate turns the declaration part of TwinCAT / IEC 61131-3 source
//! (POU headers, variable lists, type definitions) into a typed tree:
//!
//! - **Lexer**: Tokenizes source text and binds comments to tokens
//! - **Parser**: Recursive descent over the token stream
//! - **AST**: Owned, typed declaration nodes with `Display` renderings
//!
//! # Design Principles
//!
//! - **Documentation first**: comments survive tokenization, attached to the
//!   token they document
//! - **Declarations only**: statement bodies are outside the grammar
//! - **Fail fast**: the first error aborts parsing with a position
//!
//! # Example
//!
//! ```
//! use plcdoc_syntax::ast::{Declaration, VarKind};
//! use plcdoc_syntax::parse;
//!
//! let source = "FUNCTION_BLOCK FB_Motor\nVAR_INPUT\n    enable : BOOL; // Run the motor\nEND_VAR";
//! let Declaration::Function(fb) = parse(source).unwrap() else {
//!     panic!("expected a function block");
//! };
//!
//! assert_eq!(fb.name, "FB_Motor");
//! let inputs = &fb.variable_lists[0];
//! assert_eq!(inputs.kind, VarKind::Input);
//! assert_eq!(inputs.variables[0].comments[0].text, "Run the motor");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod ast;
pub mod lexer;
pub mod parser;

pub use lexer::{tokenize, Comment, CommentStyle, LexError, Token, TokenKind};
pub use parser::{parse, parse_all, ParseError};
