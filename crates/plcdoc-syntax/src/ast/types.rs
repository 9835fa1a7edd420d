//! Type references used in variable declarations and type definitions.

use std::fmt;

use smol_str::SmolStr;

use super::expr::{write_list, Expr, QualifiedName, Range};

/// One dimension of an array type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Subrange {
    /// `*`, a dimension whose size is only known at run time.
    Dynamic,
    /// `lower..upper`
    Bounded(Range),
}

impl fmt::Display for Subrange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dynamic => f.write_str("*"),
            Self::Bounded(range) => write!(f, "{range}"),
        }
    }
}

/// A type as written in a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// A named type: `BOOL`, `REAL`, `FB_Motor`, `Lib.T_Data`.
    Name(QualifiedName),
    /// A built-in integer type, optionally restricted to a subrange.
    Integer {
        /// The type keyword as written (`INT`, `UDINT`, ...).
        name: SmolStr,
        /// `INT(0..100)`
        range: Option<Range>,
    },
    /// `STRING`, `WSTRING(80)`
    String {
        /// True for `WSTRING`.
        wide: bool,
        /// The declared length.
        size: Option<Box<Expr>>,
    },
    /// `ARRAY [0..4, *] OF T`
    Array {
        /// Dimensions in source order.
        ranges: Vec<Subrange>,
        /// Element type.
        element: Box<Type>,
    },
    /// `POINTER TO T`
    Pointer(Box<Type>),
    /// `REFERENCE TO T` or `REF_TO T`
    Reference(Box<Type>),
}

impl Type {
    /// Creates an integer type without a subrange.
    #[must_use]
    pub fn integer(name: &str) -> Self {
        Self::Integer {
            name: SmolStr::new(name),
            range: None,
        }
    }

    /// Creates a type reference from a single name.
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self::Name(QualifiedName::new(name))
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(f, "{name}"),
            Self::Integer { name, range } => {
                f.write_str(name)?;
                if let Some(range) = range {
                    write!(f, "({range})")?;
                }
                Ok(())
            }
            Self::String { wide, size } => {
                f.write_str(if *wide { "WSTRING" } else { "STRING" })?;
                if let Some(size) = size {
                    write!(f, "({size})")?;
                }
                Ok(())
            }
            Self::Array { ranges, element } => {
                f.write_str("ARRAY [")?;
                write_list(f, ranges)?;
                write!(f, "] OF {element}")
            }
            Self::Pointer(target) => write!(f, "POINTER TO {target}"),
            Self::Reference(target) => write!(f, "REFERENCE TO {target}"),
        }
    }
}
