//! Symbol table over every ingested declaration.
//!
//! [`InterpreterBuilder`] accumulates source files; [`InterpreterBuilder::finish`]
//! freezes the result into an [`Interpreter`] that only answers queries.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use indexmap::IndexMap;
use plcdoc_syntax::ast::ObjectKind;
use plcdoc_syntax::parse_all;
use smol_str::SmolStr;
use tracing::{debug, warn};

use crate::config::InterpreterConfig;
use crate::declaration::PlcDeclaration;
use crate::error::{Error, Result};
use crate::source::{SourceFile, SourceItem};
use crate::twincat;

type Models = IndexMap<ObjectKind, IndexMap<SmolStr, Arc<PlcDeclaration>>>;

/// An item that could not be ingested.
#[derive(Debug)]
pub struct IngestFailure {
    /// The file the item came from.
    pub file: PathBuf,
    /// The item name, when the container provided one.
    pub item: Option<String>,
    /// What went wrong.
    pub error: Error,
}

/// Accumulates declarations from source files.
#[derive(Debug)]
pub struct InterpreterBuilder {
    config: InterpreterConfig,
    models: Models,
    folders: IndexMap<String, Vec<Arc<PlcDeclaration>>>,
    failures: Vec<IngestFailure>,
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new(InterpreterConfig::default())
    }
}

impl InterpreterBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new(config: InterpreterConfig) -> Self {
        Self {
            config,
            models: IndexMap::new(),
            folders: IndexMap::new(),
            failures: Vec::new(),
        }
    }

    /// Reads a TwinCAT source file from disk and ingests it.
    ///
    /// Returns false when the file or one of its items failed.
    pub fn ingest_path(&mut self, path: &Path) -> bool {
        match twincat::read_tc_object(path) {
            Ok(file) => self.ingest_file(&file),
            Err(error) => {
                warn!("Skipping {}: {error}", path.display());
                self.failures.push(IngestFailure {
                    file: path.to_path_buf(),
                    item: None,
                    error,
                });
                false
            }
        }
    }

    /// Ingests a bare declaration text as if it were the only item of
    /// `path`.
    pub fn ingest_source(&mut self, path: impl Into<PathBuf>, text: &str) -> bool {
        let file = SourceFile::new(path).with_item(SourceItem::new(text));
        self.ingest_file(&file)
    }

    /// Ingests every item of a source file.
    ///
    /// Items that fail to parse or build are logged, recorded in
    /// [`failures`](Self::failures) and skipped. Returns true when every
    /// item and nested item succeeded.
    pub fn ingest_file(&mut self, file: &SourceFile) -> bool {
        debug!(
            "Ingesting {} ({} item(s))",
            file.path.display(),
            file.items.len()
        );
        let failures = self.failures.len();
        for item in &file.items {
            match self.build_item(&file.path, item) {
                Ok(models) => {
                    for model in models {
                        self.add_top_level(Arc::new(model));
                    }
                }
                Err(error) => self.record_failure(&file.path, item, error),
            }
        }
        self.failures.len() == failures
    }

    /// Failures recorded so far.
    #[must_use]
    pub fn failures(&self) -> &[IngestFailure] {
        &self.failures
    }

    /// Freezes the accumulated declarations.
    #[must_use]
    pub fn finish(self) -> Interpreter {
        Interpreter {
            config: self.config,
            models: self.models,
            folders: self.folders,
            failures: self.failures,
        }
    }

    fn build_item(&mut self, path: &Path, item: &SourceItem) -> Result<Vec<PlcDeclaration>> {
        let declarations = parse_all(&item.declaration).map_err(|source| Error::Parse {
            file: Some(path.to_path_buf()),
            item: SmolStr::new(item.label()),
            source,
        })?;
        let mut models = PlcDeclaration::build_all(&declarations, Some(path))?;
        for child in &item.children {
            match self.build_item(path, child) {
                Ok(children) => {
                    if let Some(parent) = models.first_mut() {
                        for model in children {
                            parent.add_child(model);
                        }
                    }
                }
                Err(error) => self.record_failure(path, child, error),
            }
        }
        Ok(models)
    }

    fn record_failure(&mut self, path: &Path, item: &SourceItem, error: Error) {
        warn!(
            "Skipping '{}' in {}: {error}",
            item.label(),
            path.display()
        );
        self.failures.push(IngestFailure {
            file: path.to_path_buf(),
            item: item.name.clone(),
            error,
        });
    }

    fn add_top_level(&mut self, model: Arc<PlcDeclaration>) {
        let previous = self.register(&model, None);
        let Some(folder) = self.folder_key(&model) else {
            return;
        };
        if let Some(previous) = previous {
            for (key, entries) in &mut self.folders {
                if *key == folder {
                    continue;
                }
                entries.retain(|entry| !Arc::ptr_eq(entry, &previous));
            }
            self.folders.retain(|_, entries| !entries.is_empty());
            let entries = self.folders.entry(folder).or_default();
            if let Some(index) = entries.iter().position(|entry| Arc::ptr_eq(entry, &previous)) {
                entries[index] = model;
                return;
            }
            entries.push(model);
        } else {
            self.folders.entry(folder).or_default().push(model);
        }
    }

    /// Inserts `model` and its children; returns the entry it replaced.
    fn register(
        &mut self,
        model: &Arc<PlcDeclaration>,
        parent: Option<&str>,
    ) -> Option<Arc<PlcDeclaration>> {
        let kind = self.config.reduce_kind(model.kind());
        let name = match parent {
            Some(parent) => SmolStr::new(format!("{parent}.{}", model.name())),
            None => SmolStr::new(model.name()),
        };
        debug!("Registering {kind} {name}");
        let previous = self
            .models
            .entry(kind)
            .or_default()
            .insert(name.clone(), Arc::clone(model));
        if let Some(previous) = &previous {
            warn!("Duplicate {kind} '{name}', keeping the last declaration");
            self.unregister_children(previous, &name);
        }
        for child in model.children().values() {
            self.register(child, Some(&name));
        }
        previous
    }

    /// Drops the qualified entries of a replaced declaration's children.
    fn unregister_children(&mut self, replaced: &PlcDeclaration, name: &str) {
        for child in replaced.children().values() {
            let kind = self.config.reduce_kind(child.kind());
            let qualified = format!("{name}.{}", child.name());
            let Some(bucket) = self.models.get_mut(&kind) else {
                continue;
            };
            if bucket
                .get(qualified.as_str())
                .is_some_and(|entry| Arc::ptr_eq(entry, child))
            {
                bucket.shift_remove(qualified.as_str());
                debug!("Unregistering {kind} {qualified}");
            }
            self.unregister_children(child, &qualified);
        }
    }

    fn folder_key(&self, model: &PlcDeclaration) -> Option<String> {
        let root = self.config.project_root.as_deref()?;
        let directory = model.file()?.parent()?;
        let Ok(relative) = directory.strip_prefix(root) else {
            warn!(
                "{} is outside the project root {}, not indexing its folder",
                directory.display(),
                root.display()
            );
            return None;
        };
        Some(folder_key(relative))
    }
}

fn folder_key(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => part.to_str(),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Read-only symbol table.
#[derive(Debug)]
pub struct Interpreter {
    config: InterpreterConfig,
    models: Models,
    folders: IndexMap<String, Vec<Arc<PlcDeclaration>>>,
    failures: Vec<IngestFailure>,
}

impl Interpreter {
    /// Looks up an object by (qualified) name.
    ///
    /// With a kind, only that kind's canonical bucket is searched; without
    /// one, buckets are searched in the order they were first filled.
    pub fn get_object(&self, name: &str, kind: Option<&str>) -> Result<&Arc<PlcDeclaration>> {
        let not_found = || Error::NotFound {
            name: SmolStr::new(name),
            kind: kind.map(SmolStr::new),
        };
        match kind {
            Some(text) => {
                let kind = text.parse::<ObjectKind>().map_err(|_| not_found())?;
                self.models
                    .get(&self.reduce_kind(kind))
                    .and_then(|bucket| bucket.get(name))
                    .ok_or_else(not_found)
            }
            None => self
                .models
                .values()
                .find_map(|bucket| bucket.get(name))
                .ok_or_else(not_found),
        }
    }

    /// Top-level objects declared directly in `folder`, in ingestion order.
    ///
    /// `folder` is relative to the project root with `/` separators; the
    /// root itself is `""`. Subfolders are not included.
    pub fn get_objects_in_folder(&self, folder: &str) -> Result<&[Arc<PlcDeclaration>]> {
        self.folders
            .get(folder)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::FolderNotFound {
                folder: folder.to_string(),
            })
    }

    /// Objects whose canonical kind is that of `kind`, by qualified name.
    pub fn objects_of_kind(
        &self,
        kind: ObjectKind,
    ) -> impl Iterator<Item = (&str, &Arc<PlcDeclaration>)> + '_ {
        self.models
            .get(&self.reduce_kind(kind))
            .into_iter()
            .flat_map(|bucket| bucket.iter().map(|(name, model)| (name.as_str(), model)))
    }

    /// Folder keys in the order they were first seen.
    pub fn folders(&self) -> impl Iterator<Item = &str> + '_ {
        self.folders.keys().map(String::as_str)
    }

    /// Items that could not be ingested.
    #[must_use]
    pub fn failures(&self) -> &[IngestFailure] {
        &self.failures
    }

    /// Folds `kind` onto its canonical kind.
    #[must_use]
    pub fn reduce_kind(&self, kind: ObjectKind) -> ObjectKind {
        self.config.reduce_kind(kind)
    }

    /// The configuration the interpreter was built with.
    #[must_use]
    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }
}
