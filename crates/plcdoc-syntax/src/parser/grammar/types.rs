//! Type reference parsing.

use crate::ast::{Range, Subrange, Type};
use crate::lexer::TokenKind;
use crate::parser::ParseError;

use super::super::Parser;

impl Parser {
    /// Parse a type reference.
    pub(crate) fn parse_type(&mut self) -> Result<Type, ParseError> {
        self.nested(Self::parse_type_inner)
    }

    fn parse_type_inner(&mut self) -> Result<Type, ParseError> {
        match self.current() {
            TokenKind::Ident => Ok(Type::Name(self.parse_qualified_name()?)),
            TokenKind::IntType => {
                let name = self.bump().text;
                let range = if self.eat(TokenKind::LParen).is_some() {
                    let range = self.parse_bounds()?;
                    self.expect(TokenKind::RParen, "')' after subrange")?;
                    Some(range)
                } else {
                    None
                };
                Ok(Type::Integer { name, range })
            }
            TokenKind::KwString | TokenKind::KwWString => {
                let wide = self.bump().kind == TokenKind::KwWString;
                let size = if self.eat(TokenKind::LParen).is_some() {
                    let size = self.parse_expression()?;
                    self.expect(TokenKind::RParen, "')' after string length")?;
                    Some(Box::new(size))
                } else if self.eat(TokenKind::LBracket).is_some() {
                    let size = self.parse_expression()?;
                    self.expect(TokenKind::RBracket, "']' after string length")?;
                    Some(Box::new(size))
                } else {
                    None
                };
                Ok(Type::String { wide, size })
            }
            TokenKind::KwArray => self.parse_array_type(),
            TokenKind::KwPointer => {
                self.bump();
                self.expect(TokenKind::KwTo, "TO after POINTER")?;
                Ok(Type::Pointer(Box::new(self.parse_type()?)))
            }
            TokenKind::KwReference => {
                self.bump();
                self.expect(TokenKind::KwTo, "TO after REFERENCE")?;
                Ok(Type::Reference(Box::new(self.parse_type()?)))
            }
            TokenKind::KwRefTo => {
                self.bump();
                Ok(Type::Reference(Box::new(self.parse_type()?)))
            }
            _ => Err(self.error("expected type")),
        }
    }

    /// `ARRAY '[' subrange (',' subrange)* ']' OF type`
    fn parse_array_type(&mut self) -> Result<Type, ParseError> {
        self.expect(TokenKind::KwArray, "ARRAY")?;
        self.expect(TokenKind::LBracket, "'[' after ARRAY")?;
        let mut ranges = vec![self.parse_subrange()?];
        while self.eat(TokenKind::Comma).is_some() {
            ranges.push(self.parse_subrange()?);
        }
        self.expect(TokenKind::RBracket, "']' after array bounds")?;
        self.expect(TokenKind::KwOf, "OF")?;
        let element = Box::new(self.parse_type()?);
        Ok(Type::Array { ranges, element })
    }

    /// `'*' | expr '..' expr`
    fn parse_subrange(&mut self) -> Result<Subrange, ParseError> {
        if self.eat(TokenKind::Star).is_some() {
            Ok(Subrange::Dynamic)
        } else {
            self.parse_bounds().map(Subrange::Bounded)
        }
    }

    /// `expr '..' expr`
    fn parse_bounds(&mut self) -> Result<Range, ParseError> {
        let lower = self.parse_expression()?;
        self.expect(TokenKind::DotDot, "'..'")?;
        let upper = self.parse_expression()?;
        Ok(Range::new(lower, upper))
    }
}
