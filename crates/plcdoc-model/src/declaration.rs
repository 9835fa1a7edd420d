//! The documentation model built from parsed declarations.
//!
//! A [`PlcDeclaration`] is the flattened, rendered view of one AST
//! declaration: types and initializers become display text, comments are
//! reduced to one documentation string, and nested objects (methods,
//! properties) hang off their parent as children.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use indexmap::IndexMap;
use plcdoc_syntax::ast::{
    Arguments, Declaration, Function, ObjectKind, Property, TypeBody, TypeDef, VarFlag, VarKind,
    Variable, VariableList,
};
use smol_str::SmolStr;

use crate::comment::doc_comment;
use crate::error::{Error, Result};

/// Where a [`PlcVariable`] was declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableKind {
    /// Inside a `VAR_xxx ... END_VAR` list.
    Var(VarKind),
    /// A struct or union field.
    Member,
    /// An enumeration value.
    EnumValue,
}

impl VariableKind {
    /// Returns the lower-case tag (`var_input`, `member`, `enum_value`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Var(kind) => kind.as_str(),
            Self::Member => "member",
            Self::EnumValue => "enum_value",
        }
    }

    /// Returns true for `VAR_INPUT`, `VAR_OUTPUT` and `VAR_IN_OUT`.
    #[must_use]
    pub fn is_argument(self) -> bool {
        matches!(self, Self::Var(kind) if kind.is_argument())
    }
}

impl fmt::Display for VariableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One documented variable, field or enumeration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlcVariable {
    /// Where the variable was declared.
    pub kind: VariableKind,
    /// The variable name.
    pub name: SmolStr,
    /// The rendered type.
    pub ty: String,
    /// The rendered initializer.
    pub initial_value: Option<String>,
    /// Rendered constructor arguments, without the parentheses.
    pub arguments: Option<String>,
    /// `AT %I*`
    pub address: Option<SmolStr>,
    /// Whether the enclosing list is `CONSTANT`.
    pub constant: bool,
    /// The documentation comment.
    pub comment: Option<String>,
}

impl PlcVariable {
    fn from_variable(variable: &Variable, kind: VariableKind, constant: bool) -> Self {
        let arguments = variable.arguments.as_ref().map(|arguments| match arguments {
            Arguments::Labeled(fields) => join(fields),
            Arguments::Positional(values) => join(values),
        });
        Self {
            kind,
            name: variable.name.clone(),
            ty: variable.ty.to_string(),
            initial_value: variable.init.as_ref().map(ToString::to_string),
            arguments,
            address: variable.address.clone(),
            constant,
            comment: doc_comment(&variable.comments),
        }
    }
}

fn join<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Which variables [`PlcDeclaration::args_with`] returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArgFilter {
    /// Only `VAR_INPUT`, `VAR_OUTPUT` and `VAR_IN_OUT`.
    #[default]
    Arguments,
    /// Every variable of every list.
    All,
}

/// A documentable object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlcDeclaration {
    kind: ObjectKind,
    name: SmolStr,
    comment: Option<String>,
    variables: Vec<PlcVariable>,
    members: Vec<PlcVariable>,
    file: Option<PathBuf>,
    return_type: Option<String>,
    extends: Option<String>,
    implements: Vec<String>,
    base_type: Option<String>,
    children: IndexMap<SmolStr, Arc<PlcDeclaration>>,
}

impl PlcDeclaration {
    /// Builds the model of one parsed declaration.
    ///
    /// `file` is the source file the declaration came from. Global variable
    /// lists are named after its stem and fail with
    /// [`Error::MissingFileContext`] without one. Type aliases are not
    /// documentable and fail with [`Error::UnrecognizedDeclaration`].
    pub fn build(declaration: &Declaration, file: Option<&Path>) -> Result<Self> {
        match declaration {
            Declaration::Function(function) => Ok(Self::from_function(function, file)),
            Declaration::Property(property) => Ok(Self::from_property(property, file)),
            Declaration::TypeDef(def) => Self::from_type_def(def, file),
            Declaration::VariableList(list) => {
                Self::from_variable_lists(std::slice::from_ref(list), file)
            }
        }
    }

    /// Builds every declaration of a source text.
    ///
    /// Consecutive top-level variable lists are merged into one global
    /// variable list; other declarations are built one by one, in order.
    pub fn build_all(declarations: &[Declaration], file: Option<&Path>) -> Result<Vec<Self>> {
        let mut built = Vec::new();
        let mut lists: Vec<VariableList> = Vec::new();
        for declaration in declarations {
            if let Declaration::VariableList(list) = declaration {
                lists.push(list.clone());
                continue;
            }
            if !lists.is_empty() {
                built.push(Self::from_variable_lists(&lists, file)?);
                lists.clear();
            }
            built.push(Self::build(declaration, file)?);
        }
        if !lists.is_empty() {
            built.push(Self::from_variable_lists(&lists, file)?);
        }
        Ok(built)
    }

    fn empty(kind: ObjectKind, name: SmolStr, file: Option<&Path>) -> Self {
        Self {
            kind,
            name,
            comment: None,
            variables: Vec::new(),
            members: Vec::new(),
            file: file.map(Path::to_path_buf),
            return_type: None,
            extends: None,
            implements: Vec::new(),
            base_type: None,
            children: IndexMap::new(),
        }
    }

    fn from_function(function: &Function, file: Option<&Path>) -> Self {
        let mut model = Self::empty(function.kind.object_kind(), function.name.clone(), file);
        model.comment = doc_comment(&function.comments);
        model.return_type = function.return_type.as_ref().map(ToString::to_string);
        model.extends = function.extends.as_ref().map(ToString::to_string);
        model.implements = function.implements.iter().map(ToString::to_string).collect();
        model.variables = flatten_lists(&function.variable_lists);
        model
    }

    fn from_property(property: &Property, file: Option<&Path>) -> Self {
        let mut model = Self::empty(ObjectKind::Property, property.name.clone(), file);
        model.comment = doc_comment(&property.comments);
        model.return_type = Some(property.ty.to_string());
        model.variables = flatten_lists(&property.variable_lists);
        model
    }

    fn from_type_def(def: &TypeDef, file: Option<&Path>) -> Result<Self> {
        let kind = match &def.body {
            TypeBody::Struct { .. } => ObjectKind::Struct,
            TypeBody::Union { .. } => ObjectKind::Union,
            TypeBody::Enum { .. } => ObjectKind::Enum,
            TypeBody::Alias(ty) => {
                return Err(Error::UnrecognizedDeclaration {
                    name: def.name.clone(),
                    detail: format!("type alias of {ty}"),
                });
            }
        };
        let mut model = Self::empty(kind, def.name.clone(), file);
        model.comment = doc_comment(&def.comments);
        model.extends = def.extends.as_ref().map(ToString::to_string);
        match &def.body {
            TypeBody::Struct { fields } | TypeBody::Union { fields } => {
                model.members = fields
                    .iter()
                    .map(|field| PlcVariable::from_variable(field, VariableKind::Member, false))
                    .collect();
            }
            TypeBody::Enum { options, base } => {
                model.base_type = base.as_ref().map(ToString::to_string);
                let ty = model.base_type.clone().unwrap_or_else(|| def.name.to_string());
                model.members = options
                    .iter()
                    .map(|option| PlcVariable {
                        kind: VariableKind::EnumValue,
                        name: option.name.clone(),
                        ty: ty.clone(),
                        initial_value: option.init.as_ref().map(ToString::to_string),
                        arguments: None,
                        address: None,
                        constant: true,
                        comment: None,
                    })
                    .collect();
            }
            TypeBody::Alias(_) => {}
        }
        Ok(model)
    }

    fn from_variable_lists(lists: &[VariableList], file: Option<&Path>) -> Result<Self> {
        let name = file
            .and_then(Path::file_stem)
            .and_then(|stem| stem.to_str())
            .ok_or(Error::MissingFileContext)?;
        let mut model = Self::empty(ObjectKind::VariableList, SmolStr::new(name), file);
        model.comment = lists.first().and_then(|list| doc_comment(&list.comments));
        model.members = flatten_lists(lists);
        Ok(model)
    }

    /// The object kind as declared (before any equivalence folding).
    #[must_use]
    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    /// The unqualified name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The documentation comment of the declaration itself.
    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Input, output and in-out variables in source order.
    #[must_use]
    pub fn args(&self) -> Vec<&PlcVariable> {
        self.args_with(ArgFilter::Arguments)
    }

    /// Variables of every list, narrowed by `filter`.
    #[must_use]
    pub fn args_with(&self, filter: ArgFilter) -> Vec<&PlcVariable> {
        self.variables
            .iter()
            .filter(|variable| filter == ArgFilter::All || variable.kind.is_argument())
            .collect()
    }

    /// Every variable of every list, in source order. Global variable lists
    /// keep theirs in [`members`](Self::members) instead.
    #[must_use]
    pub fn variables(&self) -> &[PlcVariable] {
        &self.variables
    }

    /// Struct and union fields, enumeration values or global variables.
    #[must_use]
    pub fn members(&self) -> &[PlcVariable] {
        &self.members
    }

    /// The file the declaration was read from.
    #[must_use]
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// `: type` of a function, method or property.
    #[must_use]
    pub fn return_type(&self) -> Option<&str> {
        self.return_type.as_deref()
    }

    /// The `EXTENDS` base.
    #[must_use]
    pub fn extends(&self) -> Option<&str> {
        self.extends.as_deref()
    }

    /// The `IMPLEMENTS` list.
    #[must_use]
    pub fn implements(&self) -> &[String] {
        &self.implements
    }

    /// The integer type of an enumeration.
    #[must_use]
    pub fn base_type(&self) -> Option<&str> {
        self.base_type.as_deref()
    }

    /// Nested declarations by unqualified name, in insertion order.
    #[must_use]
    pub fn children(&self) -> &IndexMap<SmolStr, Arc<PlcDeclaration>> {
        &self.children
    }

    /// Looks up a nested declaration.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Arc<PlcDeclaration>> {
        self.children.get(name)
    }

    /// Attaches a nested declaration, replacing one with the same name.
    pub fn add_child(&mut self, child: impl Into<Arc<PlcDeclaration>>) {
        let child = child.into();
        self.children.insert(child.name.clone(), child);
    }
}

fn flatten_lists(lists: &[VariableList]) -> Vec<PlcVariable> {
    lists
        .iter()
        .flat_map(|list| {
            let constant = list.flags.contains(&VarFlag::Constant);
            list.variables.iter().map(move |variable| {
                PlcVariable::from_variable(variable, VariableKind::Var(list.kind), constant)
            })
        })
        .collect()
}
