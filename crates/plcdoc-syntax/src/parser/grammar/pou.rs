//! POU header parsing.
//!
//! Handles:
//! - PROGRAM, FUNCTION_BLOCK, FUNCTION, METHOD and INTERFACE headers with
//!   modifiers, return type, EXTENDS and IMPLEMENTS
//! - PROPERTY headers
//!
//! Only the declaration part is parsed. The closing `END_*` keyword is
//! optional because TwinCAT stores declarations without it.

use crate::ast::{Function, FunctionKind, Modifier, Property, QualifiedName};
use crate::lexer::TokenKind;
use crate::parser::ParseError;

use super::super::Parser;

impl Parser {
    /// Parse a function-like declaration.
    pub(crate) fn parse_function(&mut self) -> Result<Function, ParseError> {
        let keyword = self.bump();
        let (kind, end) = match keyword.kind {
            TokenKind::KwProgram => (FunctionKind::Program, TokenKind::KwEndProgram),
            TokenKind::KwFunctionBlock => {
                (FunctionKind::FunctionBlock, TokenKind::KwEndFunctionBlock)
            }
            TokenKind::KwFunction => (FunctionKind::Function, TokenKind::KwEndFunction),
            TokenKind::KwMethod => (FunctionKind::Method, TokenKind::KwEndMethod),
            TokenKind::KwInterface => (FunctionKind::Interface, TokenKind::KwEndInterface),
            _ => return Err(self.error("expected POU keyword")),
        };

        let modifiers = self.parse_modifiers();
        let name = self.expect_ident()?.text;

        let return_type = if self.eat(TokenKind::Colon).is_some() {
            Some(self.parse_type()?)
        } else {
            None
        };

        let extends = if self.eat(TokenKind::KwExtends).is_some() {
            Some(self.parse_qualified_name()?)
        } else {
            None
        };

        let implements = if self.eat(TokenKind::KwImplements).is_some() {
            self.parse_name_list()?
        } else {
            Vec::new()
        };

        self.eat(TokenKind::Semicolon);
        let variable_lists = self.parse_variable_lists()?;
        self.eat(end);

        Ok(Function {
            kind,
            name,
            comments: keyword.comments,
            modifiers,
            return_type,
            extends,
            implements,
            variable_lists,
        })
    }

    /// Parse a PROPERTY declaration.
    pub(crate) fn parse_property(&mut self) -> Result<Property, ParseError> {
        let keyword = self.expect(TokenKind::KwProperty, "PROPERTY")?;
        let modifiers = self.parse_modifiers();
        let name = self.expect_ident()?.text;
        self.expect(TokenKind::Colon, "':' after property name")?;
        let ty = self.parse_type()?;
        let variable_lists = self.parse_variable_lists()?;
        self.eat(TokenKind::KwEndProperty);

        Ok(Property {
            name,
            comments: keyword.comments,
            modifiers,
            ty,
            variable_lists,
        })
    }

    /// `(ABSTRACT | FINAL | PUBLIC | PRIVATE | PROTECTED | INTERNAL)*`
    fn parse_modifiers(&mut self) -> Vec<Modifier> {
        let mut modifiers = Vec::new();
        while self.current().is_modifier() {
            let token = self.bump();
            if let Some(modifier) = Modifier::from_keyword(&token.text) {
                modifiers.push(modifier);
            }
        }
        modifiers
    }

    /// `qname (',' qname)*`
    fn parse_name_list(&mut self) -> Result<Vec<QualifiedName>, ParseError> {
        let mut names = vec![self.parse_qualified_name()?];
        while self.eat(TokenKind::Comma).is_some() {
            names.push(self.parse_qualified_name()?);
        }
        Ok(names)
    }
}
