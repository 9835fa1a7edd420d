//! Source items handed to the interpreter.

use std::path::PathBuf;

/// One declaration text with the nested declarations that belong to it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceItem {
    /// The name the container gives the item, used in log messages.
    pub name: Option<String>,
    /// Structured Text declaration source.
    pub declaration: String,
    /// Methods, properties and other nested objects.
    pub children: Vec<SourceItem>,
}

impl SourceItem {
    /// An unnamed item without children.
    #[must_use]
    pub fn new(declaration: impl Into<String>) -> Self {
        Self {
            name: None,
            declaration: declaration.into(),
            children: Vec::new(),
        }
    }

    /// Sets the container name.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Appends a nested item.
    #[must_use]
    pub fn with_child(mut self, child: SourceItem) -> Self {
        self.children.push(child);
        self
    }

    pub(crate) fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("<declaration>")
    }
}

/// The items of one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path of the file; names global variable lists and keys the folder
    /// index.
    pub path: PathBuf,
    /// Top-level items in file order.
    pub items: Vec<SourceItem>,
}

impl SourceFile {
    /// A file without items.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            items: Vec::new(),
        }
    }

    /// Appends a top-level item.
    #[must_use]
    pub fn with_item(mut self, item: SourceItem) -> Self {
        self.items.push(item);
        self
    }
}
