//! Grammar rules for Structured Text declarations.
//!
//! This module contains the grammar rules organized by category:
//!
//! - `pou.rs` - POU headers (PROGRAM, FUNCTION, FUNCTION_BLOCK, METHOD,
//!   INTERFACE, PROPERTY)
//! - `declarations.rs` - Variable lists and type definitions
//! - `types.rs` - Type references
//! - `expressions.rs` - Constant expressions

mod declarations;
mod expressions;
mod pou;
mod types;

use crate::ast::{Declaration, QualifiedName};
use crate::lexer::TokenKind;
use crate::parser::ParseError;

use super::Parser;

impl Parser {
    /// Parse one top-level declaration.
    pub(crate) fn parse_declaration(&mut self) -> Result<Declaration, ParseError> {
        match self.current() {
            TokenKind::KwProgram
            | TokenKind::KwFunctionBlock
            | TokenKind::KwFunction
            | TokenKind::KwMethod
            | TokenKind::KwInterface => self.parse_function().map(Declaration::Function),
            TokenKind::KwProperty => self.parse_property().map(Declaration::Property),
            TokenKind::KwType => self.parse_type_def().map(Declaration::TypeDef),
            TokenKind::KwVar => self.parse_variable_list().map(Declaration::VariableList),
            _ => Err(self.error("expected declaration")),
        }
    }

    /// `NAME ('.' NAME)*`
    pub(crate) fn parse_qualified_name(&mut self) -> Result<QualifiedName, ParseError> {
        let first = self.expect_ident()?;
        let mut name = QualifiedName::new(first.text);
        while self.eat(TokenKind::Dot).is_some() {
            name.push(self.expect_ident()?.text);
        }
        Ok(name)
    }
}
