//! Shared helpers for parser outline tests.
#![allow(dead_code)]

use std::fmt::Write;

use plcdoc_syntax::ast::{Arguments, Declaration, TypeBody, Variable, VariableList};
pub use plcdoc_syntax::{parse, parse_all};

/// Parses `source`, panicking with the error message on failure.
pub fn parse_ok(source: &str) -> Declaration {
    parse(source).unwrap_or_else(|err| panic!("failed to parse: {err}\n{source}"))
}

/// Renders a compact outline of every declaration in `source`, for
/// expect-test comparisons.
pub fn outline(source: &str) -> String {
    let declarations =
        parse_all(source).unwrap_or_else(|err| panic!("failed to parse: {err}\n{source}"));
    let mut out = String::new();
    for declaration in &declarations {
        format_declaration(declaration, &mut out);
    }
    out
}

fn format_declaration(declaration: &Declaration, out: &mut String) {
    match declaration {
        Declaration::Function(function) => {
            let _ = write!(out, "{} {}", function.kind.as_str(), function.name);
            if let Some(ty) = &function.return_type {
                let _ = write!(out, " : {ty}");
            }
            if let Some(base) = &function.extends {
                let _ = write!(out, " extends {base}");
            }
            for interface in &function.implements {
                let _ = write!(out, " implements {interface}");
            }
            out.push('\n');
            for list in &function.variable_lists {
                format_list(list, out, 1);
            }
        }
        Declaration::Property(property) => {
            let _ = writeln!(out, "property {} : {}", property.name, property.ty);
            for list in &property.variable_lists {
                format_list(list, out, 1);
            }
        }
        Declaration::TypeDef(def) => match &def.body {
            TypeBody::Struct { fields } | TypeBody::Union { fields } => {
                let kind = if matches!(def.body, TypeBody::Struct { .. }) {
                    "struct"
                } else {
                    "union"
                };
                let _ = writeln!(out, "{kind} {}", def.name);
                for field in fields {
                    format_variable(field, out, 1);
                }
            }
            TypeBody::Enum { options, base } => {
                let _ = write!(out, "enum {}", def.name);
                if let Some(base) = base {
                    let _ = write!(out, " : {base}");
                }
                out.push('\n');
                for option in options {
                    let _ = write!(out, "  {}", option.name);
                    if let Some(init) = &option.init {
                        let _ = write!(out, " := {init}");
                    }
                    out.push('\n');
                }
            }
            TypeBody::Alias(ty) => {
                let _ = writeln!(out, "alias {} : {ty}", def.name);
            }
        },
        Declaration::VariableList(list) => format_list(list, out, 0),
    }
}

fn format_list(list: &VariableList, out: &mut String, depth: usize) {
    let _ = write!(out, "{}{}", "  ".repeat(depth), list.kind.as_str());
    for flag in &list.flags {
        let _ = write!(out, " {flag:?}");
    }
    out.push('\n');
    for variable in &list.variables {
        format_variable(variable, out, depth + 1);
    }
}

fn format_variable(variable: &Variable, out: &mut String, depth: usize) {
    let _ = write!(out, "{}{}", "  ".repeat(depth), variable.name);
    if let Some(address) = &variable.address {
        let _ = write!(out, " AT {address}");
    }
    let _ = write!(out, " : {}", variable.ty);
    match &variable.arguments {
        Some(Arguments::Positional(values)) => {
            let values: Vec<_> = values.iter().map(ToString::to_string).collect();
            let _ = write!(out, "({})", values.join(", "));
        }
        Some(Arguments::Labeled(fields)) => {
            let fields: Vec<_> = fields.iter().map(ToString::to_string).collect();
            let _ = write!(out, "({})", fields.join(", "));
        }
        None => {}
    }
    if let Some(init) = &variable.init {
        let _ = write!(out, " := {init}");
    }
    out.push('\n');
}
