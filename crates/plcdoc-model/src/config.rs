//! Interpreter configuration loaded from `plcdoc.toml`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use plcdoc_syntax::ast::ObjectKind;
use serde::Deserialize;
use tracing::warn;

pub(crate) const CONFIG_FILES: &[&str] = &["plcdoc.toml", ".plcdoc.toml"];

/// Settings of an [`InterpreterBuilder`](crate::InterpreterBuilder).
///
/// ```toml
/// project_root = "src"
///
/// [equivalent_kinds]
/// function = ["function", "method"]
/// functionblock = ["functionblock", "interface"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpreterConfig {
    /// Folder keys are computed relative to this directory.
    pub project_root: Option<PathBuf>,
    /// Canonical kind → kinds folded into it.
    pub equivalent_kinds: BTreeMap<ObjectKind, Vec<ObjectKind>>,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            project_root: None,
            equivalent_kinds: default_equivalent_kinds(),
        }
    }
}

impl InterpreterConfig {
    /// Default settings rooted at `root`.
    #[must_use]
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: Some(root.into()),
            ..Self::default()
        }
    }

    /// Loads `plcdoc.toml` (or `.plcdoc.toml`) from `root`, falling back to
    /// the defaults when there is none or it cannot be read.
    #[must_use]
    pub fn load(root: &Path) -> Self {
        let Some(path) = find_config_file(root) else {
            return Self::with_root(root);
        };
        let Ok(contents) = std::fs::read_to_string(&path) else {
            warn!("Failed to read plcdoc config at {}", path.display());
            return Self::with_root(root);
        };
        Self::from_contents(root, &contents)
    }

    /// Parses configuration text; relative paths resolve against `root`.
    #[must_use]
    pub fn from_contents(root: &Path, contents: &str) -> Self {
        let mut config = Self::with_root(root);
        let parsed: ConfigFile = match toml::from_str(contents) {
            Ok(parsed) => parsed,
            Err(err) => {
                warn!("Failed to parse plcdoc config: {err}");
                return config;
            }
        };

        if let Some(project_root) = parsed.project_root {
            config.project_root = Some(resolve_path(root, &project_root));
        }
        if let Some(classes) = parsed.equivalent_kinds {
            config.equivalent_kinds = classes
                .into_iter()
                .filter_map(|(canonical, members)| {
                    let canonical = parse_kind(&canonical)?;
                    let members = members.iter().filter_map(|kind| parse_kind(kind)).collect();
                    Some((canonical, members))
                })
                .collect();
        }
        config
    }

    /// Folds `kind` onto the canonical kind of its equivalence class.
    ///
    /// Kinds that no class lists are their own canonical kind.
    #[must_use]
    pub fn reduce_kind(&self, kind: ObjectKind) -> ObjectKind {
        self.equivalent_kinds
            .iter()
            .find(|(_, members)| members.contains(&kind))
            .map_or(kind, |(canonical, _)| *canonical)
    }
}

fn default_equivalent_kinds() -> BTreeMap<ObjectKind, Vec<ObjectKind>> {
    BTreeMap::from([
        (
            ObjectKind::Function,
            vec![ObjectKind::Function, ObjectKind::Method],
        ),
        (
            ObjectKind::FunctionBlock,
            vec![ObjectKind::FunctionBlock, ObjectKind::Interface],
        ),
    ])
}

fn parse_kind(text: &str) -> Option<ObjectKind> {
    match text.parse() {
        Ok(kind) => Some(kind),
        Err(err) => {
            warn!("Ignoring plcdoc config entry: {err}");
            None
        }
    }
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    project_root: Option<String>,
    #[serde(default)]
    equivalent_kinds: Option<BTreeMap<String, Vec<String>>>,
}

pub(crate) fn find_config_file(root: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| root.join(name))
        .find(|path| path.is_file())
}

fn resolve_path(root: &Path, entry: &str) -> PathBuf {
    let path = PathBuf::from(entry);
    if path.is_absolute() {
        path
    } else {
        root.join(path)
    }
}
