//! Constant expression parsing.
//!
//! Operator precedence (low to high):
//! - `+`, `-` (left associative)
//! - `*`, `/` (left associative)
//! - unary `-`
//! - calls `f(...)`

use crate::ast::{BinaryOp, Expr, LabeledArgument, NumberKind, NumberLiteral, Range, UnaryOp};
use crate::lexer::TokenKind;
use crate::parser::ParseError;

use super::super::Parser;

impl Parser {
    /// Parse an expression.
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.nested(Self::parse_sum)
    }

    /// `expr (',' expr)*`
    pub(crate) fn parse_expressions(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut exprs = vec![self.parse_expression()?];
        while self.eat(TokenKind::Comma).is_some() {
            exprs.push(self.parse_expression()?);
        }
        Ok(exprs)
    }

    /// Returns true at `NAME :=`.
    pub(crate) fn at_labeled_argument(&self) -> bool {
        self.at(TokenKind::Ident) && self.peek_kind_n(1) == TokenKind::Assign
    }

    /// `NAME ':=' expr (',' NAME ':=' expr)*`
    pub(crate) fn parse_labeled_arguments(&mut self) -> Result<Vec<LabeledArgument>, ParseError> {
        let mut arguments = vec![self.parse_labeled_argument()?];
        while self.eat(TokenKind::Comma).is_some() {
            arguments.push(self.parse_labeled_argument()?);
        }
        Ok(arguments)
    }

    fn parse_labeled_argument(&mut self) -> Result<LabeledArgument, ParseError> {
        let name = self.expect_ident()?.text;
        self.expect(TokenKind::Assign, "':='")?;
        let value = self.parse_expression()?;
        Ok(LabeledArgument { name, value })
    }

    /// `term (('+' | '-') term)*`
    fn parse_sum(&mut self) -> Result<Expr, ParseError> {
        self.parse_chain(Self::parse_term, |kind| match kind {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            _ => None,
        })
    }

    /// `factor (('*' | '/') factor)*`
    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        self.parse_chain(Self::parse_factor, |kind| match kind {
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            _ => None,
        })
    }

    /// Folds a left-associative chain; every operator costs one nesting level.
    fn parse_chain(
        &mut self,
        operand: fn(&mut Self) -> Result<Expr, ParseError>,
        operator: fn(TokenKind) -> Option<BinaryOp>,
    ) -> Result<Expr, ParseError> {
        let depth = self.depth();
        let result = self.fold_chain(operand, operator);
        self.restore_depth(depth);
        result
    }

    fn fold_chain(
        &mut self,
        operand: fn(&mut Self) -> Result<Expr, ParseError>,
        operator: fn(TokenKind) -> Option<BinaryOp>,
    ) -> Result<Expr, ParseError> {
        let mut lhs = operand(self)?;
        while let Some(op) = operator(self.current()) {
            self.deepen()?;
            self.bump();
            let rhs = operand(self)?;
            lhs = binary(lhs, op, rhs);
        }
        Ok(lhs)
    }

    /// `'-' factor | atom`
    fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        if self.eat(TokenKind::Minus).is_some() {
            let operand = self.nested(Self::parse_factor)?;
            return Ok(Expr::Unary {
                op: UnaryOp::Neg,
                operand: Box::new(operand),
            });
        }
        self.parse_atom()
    }

    /// `primary ('(' exprs? ')')*`
    fn parse_atom(&mut self) -> Result<Expr, ParseError> {
        let depth = self.depth();
        let result = self.parse_calls();
        self.restore_depth(depth);
        result
    }

    fn parse_calls(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_primary()?;
        while self.at(TokenKind::LParen) {
            self.deepen()?;
            self.bump();
            let args = if self.at(TokenKind::RParen) {
                Vec::new()
            } else {
                self.parse_expressions()?
            };
            self.expect(TokenKind::RParen, "')' after arguments")?;
            expr = Expr::Call {
                callee: Box::new(expr),
                args,
            };
        }
        Ok(expr)
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let number = match self.current() {
            TokenKind::IntLiteral => Some(NumberKind::Integer),
            TokenKind::RealLiteral => Some(NumberKind::Real),
            TokenKind::TimeLiteral => Some(NumberKind::Time),
            TokenKind::TypedLiteral => Some(NumberKind::Typed),
            _ => None,
        };
        if let Some(kind) = number {
            let text = self.bump().text;
            return Ok(Expr::Number(NumberLiteral { kind, text }));
        }

        match self.current() {
            TokenKind::StringLiteral | TokenKind::WideStringLiteral => {
                Ok(Expr::String(self.bump().text))
            }
            TokenKind::Ident => Ok(Expr::Name(self.parse_qualified_name()?)),
            TokenKind::LParen => self.parse_parenthesized(),
            _ => Err(self.error("expected expression")),
        }
    }

    /// Struct literal, range literal or parenthesised expression.
    fn parse_parenthesized(&mut self) -> Result<Expr, ParseError> {
        self.expect(TokenKind::LParen, "'('")?;

        if self.at_labeled_argument() {
            let fields = self.parse_labeled_arguments()?;
            self.expect(TokenKind::RParen, "')' after struct literal")?;
            return Ok(Expr::Struct(fields));
        }

        let expr = self.parse_expression()?;
        if self.eat(TokenKind::DotDot).is_some() {
            let upper = self.parse_expression()?;
            self.expect(TokenKind::RParen, "')' after range")?;
            return Ok(Expr::Range(Range::new(expr, upper)));
        }
        self.expect(TokenKind::RParen, "')'")?;
        Ok(expr)
    }
}

fn binary(lhs: Expr, op: BinaryOp, rhs: Expr) -> Expr {
    Expr::Binary {
        lhs: Box::new(lhs),
        op,
        rhs: Box::new(rhs),
    }
}
