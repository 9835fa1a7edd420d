//! Declaration parsing for Structured Text.
//!
//! Handles:
//! - Variable lists (VAR, VAR_INPUT, VAR_OUTPUT, etc.) and their flags
//! - Variable declarations with optional AT binding, initializer or
//!   constructor arguments
//! - Type definitions (TYPE...END_TYPE): struct, union, enum and alias

use crate::ast::{
    Arguments, EnumOption, TypeBody, TypeDef, VarFlag, VarKind, Variable, VariableList,
};
use crate::lexer::TokenKind;
use crate::parser::ParseError;

use super::super::Parser;

impl Parser {
    /// Parse zero or more variable lists.
    pub(crate) fn parse_variable_lists(&mut self) -> Result<Vec<VariableList>, ParseError> {
        let mut lists = Vec::new();
        while self.at(TokenKind::KwVar) {
            lists.push(self.parse_variable_list()?);
        }
        Ok(lists)
    }

    /// `VAR (CONSTANT | PERSISTENT | RETAIN)* variable* END_VAR`
    pub(crate) fn parse_variable_list(&mut self) -> Result<VariableList, ParseError> {
        if !self.at(TokenKind::KwVar) {
            return Err(self.error("expected VAR keyword"));
        }
        let kind = VarKind::from_keyword(self.current_text())
            .ok_or_else(|| self.error("expected VAR keyword"))?;
        let keyword = self.bump();

        let mut flags = Vec::new();
        loop {
            let flag = match self.current() {
                TokenKind::KwConstant => VarFlag::Constant,
                TokenKind::KwPersistent => VarFlag::Persistent,
                TokenKind::KwRetain => VarFlag::Retain,
                _ => break,
            };
            self.bump();
            flags.push(flag);
        }

        let variables = self.parse_variables(TokenKind::KwEndVar, "END_VAR")?;

        Ok(VariableList {
            kind,
            flags,
            variables,
            comments: keyword.comments,
        })
    }

    /// Parse variable declarations up to and including `end`.
    fn parse_variables(&mut self, end: TokenKind, what: &str) -> Result<Vec<Variable>, ParseError> {
        let mut variables = Vec::new();
        while self.at(TokenKind::Ident) {
            variables.extend(self.parse_variable()?);
        }
        self.expect(end, what)?;
        Ok(variables)
    }

    /// `NAME (',' NAME)* (AT address)? ':' type init? ';'`
    ///
    /// Declarations with several names expand to one variable per name.
    fn parse_variable(&mut self) -> Result<Vec<Variable>, ParseError> {
        let mut names = vec![self.expect_ident()?];
        while self.eat(TokenKind::Comma).is_some() {
            names.push(self.expect_ident()?);
        }

        let address = if self.eat(TokenKind::KwAt).is_some() {
            Some(self.expect(TokenKind::DirectAddress, "address")?.text)
        } else {
            None
        };

        self.expect(TokenKind::Colon, "':' after variable name")?;
        let ty = self.parse_type()?;

        let (init, arguments) = if self.eat(TokenKind::Assign).is_some() {
            (Some(self.parse_expression()?), None)
        } else if self.at(TokenKind::LParen) {
            (None, Some(self.parse_arguments()?))
        } else {
            (None, None)
        };

        let semicolon = self.expect(TokenKind::Semicolon, "';' after variable declaration")?;

        Ok(names
            .into_iter()
            .map(|name| {
                let mut comments = name.comments;
                comments.extend(semicolon.comments.iter().cloned());
                Variable {
                    name: name.text,
                    address: address.clone(),
                    ty: ty.clone(),
                    init: init.clone(),
                    arguments: arguments.clone(),
                    comments,
                }
            })
            .collect())
    }

    /// `'(' (labeled_args | exprs)? ')'`
    fn parse_arguments(&mut self) -> Result<Arguments, ParseError> {
        self.expect(TokenKind::LParen, "'('")?;
        let arguments = if self.at(TokenKind::RParen) {
            Arguments::Positional(Vec::new())
        } else if self.at_labeled_argument() {
            Arguments::Labeled(self.parse_labeled_arguments()?)
        } else {
            Arguments::Positional(self.parse_expressions()?)
        };
        self.expect(TokenKind::RParen, "')'")?;
        Ok(arguments)
    }

    /// `TYPE NAME (EXTENDS qname)? ':' body END_TYPE`
    pub(crate) fn parse_type_def(&mut self) -> Result<TypeDef, ParseError> {
        let keyword = self.expect(TokenKind::KwType, "TYPE")?;
        let name = self.expect_ident()?.text;
        let extends = if self.eat(TokenKind::KwExtends).is_some() {
            Some(self.parse_qualified_name()?)
        } else {
            None
        };
        self.expect(TokenKind::Colon, "':' after type name")?;

        let body = match self.current() {
            TokenKind::KwStruct => {
                self.bump();
                let fields = self.parse_variables(TokenKind::KwEndStruct, "END_STRUCT")?;
                self.eat(TokenKind::Semicolon);
                TypeBody::Struct { fields }
            }
            TokenKind::KwUnion => {
                self.bump();
                let fields = self.parse_variables(TokenKind::KwEndUnion, "END_UNION")?;
                self.eat(TokenKind::Semicolon);
                TypeBody::Union { fields }
            }
            TokenKind::LParen => self.parse_enum_body()?,
            _ => {
                let ty = self.parse_type()?;
                self.expect(TokenKind::Semicolon, "';' after type")?;
                TypeBody::Alias(ty)
            }
        };

        self.expect(TokenKind::KwEndType, "END_TYPE")?;

        Ok(TypeDef {
            name,
            comments: keyword.comments,
            extends,
            body,
        })
    }

    /// `'(' enum_value (',' enum_value)* ')' int_type? ';'`
    fn parse_enum_body(&mut self) -> Result<TypeBody, ParseError> {
        self.expect(TokenKind::LParen, "'('")?;
        let mut options = vec![self.parse_enum_option()?];
        while self.eat(TokenKind::Comma).is_some() {
            options.push(self.parse_enum_option()?);
        }
        self.expect(TokenKind::RParen, "')' after enum values")?;

        let base = if self.at(TokenKind::IntType) {
            Some(self.parse_type()?)
        } else {
            None
        };
        self.expect(TokenKind::Semicolon, "';' after enum")?;

        Ok(TypeBody::Enum { options, base })
    }

    /// `NAME (':=' expr)?`
    fn parse_enum_option(&mut self) -> Result<EnumOption, ParseError> {
        let name = self.expect_ident()?.text;
        let init = if self.eat(TokenKind::Assign).is_some() {
            Some(self.parse_expression()?)
        } else {
            None
        };
        Ok(EnumOption { name, init })
    }
}
