//! Constant expressions that appear in initializers, bounds and arguments.

use std::fmt;

use smol_str::SmolStr;

/// A dotted name such as `E_Error.NoError`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    /// Name parts in source order. Never empty.
    pub parts: Vec<SmolStr>,
}

impl QualifiedName {
    /// Creates a name with a single part.
    #[must_use]
    pub fn new(first: impl Into<SmolStr>) -> Self {
        Self {
            parts: vec![first.into()],
        }
    }

    /// Appends `.part` to this name.
    pub fn push(&mut self, part: impl Into<SmolStr>) {
        self.parts.push(part.into());
    }

    /// Returns the last part, i.e. the unqualified name.
    #[must_use]
    pub fn last(&self) -> &str {
        self.parts.last().map_or("", SmolStr::as_str)
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(part)?;
        }
        Ok(())
    }
}

/// The lexical class of a numeric literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberKind {
    /// `42`, `16#FF`
    Integer,
    /// `1.5`, `1E3`
    Real,
    /// `T#2S`
    Time,
    /// `UDINT#16#1`
    Typed,
}

/// A numeric literal, with its source text kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NumberLiteral {
    /// The lexical class of the literal.
    pub kind: NumberKind,
    /// The literal exactly as written.
    pub text: SmolStr,
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// `-`
    Neg,
}

impl UnaryOp {
    /// Returns the operator symbol.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Neg => "-",
        }
    }
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOp {
    /// Returns the operator symbol.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }
}

/// `lower..upper`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Range {
    /// Lower bound.
    pub lower: Box<Expr>,
    /// Upper bound.
    pub upper: Box<Expr>,
}

impl Range {
    /// Creates a range from its bounds.
    #[must_use]
    pub fn new(lower: Expr, upper: Expr) -> Self {
        Self {
            lower: Box::new(lower),
            upper: Box::new(upper),
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.lower, self.upper)
    }
}

/// `name := value`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LabeledArgument {
    /// The label.
    pub name: SmolStr,
    /// The assigned value.
    pub value: Expr,
}

impl fmt::Display for LabeledArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} := {}", self.name, self.value)
    }
}

/// A constant expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// Integer, real, time or typed literal.
    Number(NumberLiteral),
    /// String literal, quotes included.
    String(SmolStr),
    /// Reference to a constant, enum value or other named entity.
    Name(QualifiedName),
    /// `-operand`
    Unary {
        /// The operator.
        op: UnaryOp,
        /// The operand.
        operand: Box<Expr>,
    },
    /// `lhs op rhs`
    Binary {
        /// Left operand.
        lhs: Box<Expr>,
        /// The operator.
        op: BinaryOp,
        /// Right operand.
        rhs: Box<Expr>,
    },
    /// `callee(args)`
    Call {
        /// The called expression.
        callee: Box<Expr>,
        /// Positional arguments.
        args: Vec<Expr>,
    },
    /// `(a := 1, b := 2)`
    Struct(Vec<LabeledArgument>),
    /// `(lower..upper)`
    Range(Range),
}

impl Expr {
    /// Returns true for operator nodes, which are parenthesised when nested.
    fn is_operation(&self) -> bool {
        matches!(self, Self::Unary { .. } | Self::Binary { .. })
    }

    fn fmt_nested(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_operation() {
            write!(f, "({self})")
        } else {
            write!(f, "{self}")
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => f.write_str(&number.text),
            Self::String(text) => f.write_str(text),
            Self::Name(name) => write!(f, "{name}"),
            Self::Unary { op, operand } => {
                f.write_str(op.as_str())?;
                operand.fmt_nested(f)
            }
            Self::Binary { lhs, op, rhs } => {
                lhs.fmt_nested(f)?;
                write!(f, " {} ", op.as_str())?;
                rhs.fmt_nested(f)
            }
            Self::Call { callee, args } => {
                callee.fmt_nested(f)?;
                f.write_str("(")?;
                write_list(f, args)?;
                f.write_str(")")
            }
            Self::Struct(fields) => {
                f.write_str("(")?;
                write_list(f, fields)?;
                f.write_str(")")
            }
            Self::Range(range) => write!(f, "({range})"),
        }
    }
}

pub(crate) fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}
