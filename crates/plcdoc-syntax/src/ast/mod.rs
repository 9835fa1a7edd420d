//! Typed abstract syntax tree for Structured Text declarations.
//!
//! The parser builds these nodes directly. Every node owns its data, so a
//! parsed [`Declaration`] can outlive the source text it came from.

mod expr;
mod kind;
mod types;

pub use expr::{
    BinaryOp, Expr, LabeledArgument, NumberKind, NumberLiteral, QualifiedName, Range, UnaryOp,
};
pub use kind::{ObjectKind, UnknownObjectKind};
pub use types::{Subrange, Type};

use smol_str::SmolStr;

use crate::lexer::Comment;

/// One top-level declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    /// PROGRAM, FUNCTION_BLOCK, FUNCTION, METHOD or INTERFACE.
    Function(Function),
    /// PROPERTY.
    Property(Property),
    /// TYPE ... END_TYPE.
    TypeDef(TypeDef),
    /// A variable list outside any POU, as in a global variable list.
    VariableList(VariableList),
}

impl Declaration {
    /// Returns the object kind, or `None` for declarations that are not
    /// documentable objects (type aliases).
    #[must_use]
    pub fn object_kind(&self) -> Option<ObjectKind> {
        match self {
            Self::Function(function) => Some(function.kind.object_kind()),
            Self::Property(_) => Some(ObjectKind::Property),
            Self::TypeDef(def) => match def.body {
                TypeBody::Struct { .. } => Some(ObjectKind::Struct),
                TypeBody::Union { .. } => Some(ObjectKind::Union),
                TypeBody::Enum { .. } => Some(ObjectKind::Enum),
                TypeBody::Alias(_) => None,
            },
            Self::VariableList(_) => Some(ObjectKind::VariableList),
        }
    }

    /// Returns the declared name; variable lists have none.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Function(function) => Some(&function.name),
            Self::Property(property) => Some(&property.name),
            Self::TypeDef(def) => Some(&def.name),
            Self::VariableList(_) => None,
        }
    }
}

/// The header keyword of a function-like declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionKind {
    /// `PROGRAM`
    Program,
    /// `FUNCTION_BLOCK`
    FunctionBlock,
    /// `FUNCTION`
    Function,
    /// `METHOD`
    Method,
    /// `INTERFACE`
    Interface,
}

impl FunctionKind {
    /// Returns the keyword in lower case without underscores
    /// (`functionblock`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.object_kind().as_str()
    }

    /// Maps the header keyword onto its object kind.
    #[must_use]
    pub fn object_kind(self) -> ObjectKind {
        match self {
            Self::Program => ObjectKind::Program,
            Self::FunctionBlock => ObjectKind::FunctionBlock,
            Self::Function => ObjectKind::Function,
            Self::Method => ObjectKind::Method,
            Self::Interface => ObjectKind::Interface,
        }
    }
}

/// Access specifiers and inheritance modifiers of a header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Modifier {
    Public,
    Private,
    Protected,
    Internal,
    Abstract,
    Final,
}

impl Modifier {
    /// Parses a modifier keyword, ignoring ASCII case.
    #[must_use]
    pub fn from_keyword(text: &str) -> Option<Self> {
        match text.to_ascii_uppercase().as_str() {
            "PUBLIC" => Some(Self::Public),
            "PRIVATE" => Some(Self::Private),
            "PROTECTED" => Some(Self::Protected),
            "INTERNAL" => Some(Self::Internal),
            "ABSTRACT" => Some(Self::Abstract),
            "FINAL" => Some(Self::Final),
            _ => None,
        }
    }

    /// Returns the keyword.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Public => "PUBLIC",
            Self::Private => "PRIVATE",
            Self::Protected => "PROTECTED",
            Self::Internal => "INTERNAL",
            Self::Abstract => "ABSTRACT",
            Self::Final => "FINAL",
        }
    }
}

/// `PROGRAM`, `FUNCTION_BLOCK`, `FUNCTION`, `METHOD` or `INTERFACE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    /// The header keyword.
    pub kind: FunctionKind,
    /// The declared name.
    pub name: SmolStr,
    /// Comments bound to the header keyword.
    pub comments: Vec<Comment>,
    /// Modifiers in source order.
    pub modifiers: Vec<Modifier>,
    /// `: type` after the name.
    pub return_type: Option<Type>,
    /// `EXTENDS base`
    pub extends: Option<QualifiedName>,
    /// `IMPLEMENTS a, b`
    pub implements: Vec<QualifiedName>,
    /// Variable lists in source order.
    pub variable_lists: Vec<VariableList>,
}

/// `PROPERTY name : type`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// The declared name.
    pub name: SmolStr,
    /// Comments bound to the `PROPERTY` keyword.
    pub comments: Vec<Comment>,
    /// Modifiers in source order.
    pub modifiers: Vec<Modifier>,
    /// The property type.
    pub ty: Type,
    /// Variable lists of the accessor, if any.
    pub variable_lists: Vec<VariableList>,
}

/// `TYPE name : ... END_TYPE`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDef {
    /// The declared name.
    pub name: SmolStr,
    /// Comments bound to the `TYPE` keyword.
    pub comments: Vec<Comment>,
    /// `EXTENDS base`
    pub extends: Option<QualifiedName>,
    /// What the type is.
    pub body: TypeBody,
}

/// The right-hand side of a type definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeBody {
    /// `STRUCT ... END_STRUCT`
    Struct {
        /// Fields in source order.
        fields: Vec<Variable>,
    },
    /// `UNION ... END_UNION`
    Union {
        /// Fields in source order.
        fields: Vec<Variable>,
    },
    /// `(A, B := 2) INT;`
    Enum {
        /// Values in source order.
        options: Vec<EnumOption>,
        /// The trailing integer type: `(A, B) INT;`
        base: Option<Type>,
    },
    /// `TYPE T_Speed : REAL; END_TYPE`
    Alias(Type),
}

/// One value of an enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumOption {
    /// The value name.
    pub name: SmolStr,
    /// `:= value`
    pub init: Option<Expr>,
}

/// Which `VAR` keyword opened a variable list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum VarKind {
    Var,
    Input,
    Output,
    InOut,
    Temp,
    Stat,
    Inst,
    Global,
    External,
}

impl VarKind {
    /// Classifies the text of a `VAR` family keyword, ignoring ASCII case.
    #[must_use]
    pub fn from_keyword(text: &str) -> Option<Self> {
        match text.to_ascii_uppercase().as_str() {
            "VAR" => Some(Self::Var),
            "VAR_INPUT" => Some(Self::Input),
            "VAR_OUTPUT" => Some(Self::Output),
            "VAR_IN_OUT" => Some(Self::InOut),
            "VAR_TEMP" => Some(Self::Temp),
            "VAR_STAT" => Some(Self::Stat),
            "VAR_INST" => Some(Self::Inst),
            "VAR_GLOBAL" => Some(Self::Global),
            "VAR_EXTERNAL" => Some(Self::External),
            _ => None,
        }
    }

    /// Returns the keyword in lower case (`var_input`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Var => "var",
            Self::Input => "var_input",
            Self::Output => "var_output",
            Self::InOut => "var_in_out",
            Self::Temp => "var_temp",
            Self::Stat => "var_stat",
            Self::Inst => "var_inst",
            Self::Global => "var_global",
            Self::External => "var_external",
        }
    }

    /// Returns true for the parameter-passing kinds.
    #[must_use]
    pub fn is_argument(self) -> bool {
        matches!(self, Self::Input | Self::Output | Self::InOut)
    }
}

/// Qualifiers after the `VAR` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum VarFlag {
    Constant,
    Persistent,
    Retain,
}

/// `VAR_xxx ... END_VAR`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableList {
    /// The opening keyword.
    pub kind: VarKind,
    /// Qualifiers in source order.
    pub flags: Vec<VarFlag>,
    /// Variables in source order.
    pub variables: Vec<Variable>,
    /// Comments bound to the `VAR` keyword.
    pub comments: Vec<Comment>,
}

/// Arguments passed to a function block instance in its declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arguments {
    /// `fb : FB_X(a := 1, b := 2);`
    Labeled(Vec<LabeledArgument>),
    /// `fb : FB_X(1, 2);`, or `FB_X()` with an empty list.
    Positional(Vec<Expr>),
}

/// A single declared variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    /// The variable name.
    pub name: SmolStr,
    /// `AT %I*`
    pub address: Option<SmolStr>,
    /// The declared type.
    pub ty: Type,
    /// `:= value`
    pub init: Option<Expr>,
    /// Constructor arguments after the type.
    pub arguments: Option<Arguments>,
    /// Comments bound to the name, followed by those trailing the `;`.
    pub comments: Vec<Comment>,
}
