//! Documentable object kinds.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The kind of a documentable object.
///
/// The canonical text form (`functionblock`, `variable_list`, ...) is what
/// configuration files and queries use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum ObjectKind {
    Program,
    FunctionBlock,
    Function,
    Method,
    Interface,
    Property,
    Struct,
    Union,
    Enum,
    VariableList,
}

impl ObjectKind {
    /// All kinds, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::Program,
        Self::FunctionBlock,
        Self::Function,
        Self::Method,
        Self::Interface,
        Self::Property,
        Self::Struct,
        Self::Union,
        Self::Enum,
        Self::VariableList,
    ];

    /// Returns the canonical text of this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Program => "program",
            Self::FunctionBlock => "functionblock",
            Self::Function => "function",
            Self::Method => "method",
            Self::Interface => "interface",
            Self::Property => "property",
            Self::Struct => "struct",
            Self::Union => "union",
            Self::Enum => "enum",
            Self::VariableList => "variable_list",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text that does not name an [`ObjectKind`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown object kind '{0}'")]
pub struct UnknownObjectKind(pub String);

impl FromStr for ObjectKind {
    type Err = UnknownObjectKind;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(text))
            .ok_or_else(|| UnknownObjectKind(text.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_text() {
        for kind in ObjectKind::ALL {
            assert_eq!(kind.as_str().parse::<ObjectKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_unknown_kind() {
        let err = "function_block".parse::<ObjectKind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown object kind 'function_block'");
    }
}
