//! Errors of the declaration model and the interpreter.

use std::path::PathBuf;

use plcdoc_syntax::ParseError;
use smol_str::SmolStr;
use thiserror::Error;

/// Errors raised while building declarations or querying the interpreter.
#[derive(Debug, Error)]
pub enum Error {
    /// A source item could not be parsed.
    #[error("failed to parse '{item}' in {}: {source}", file_label(.file.as_ref()))]
    Parse {
        /// File the item came from.
        file: Option<PathBuf>,
        /// Name of the item, or `<declaration>` when unnamed.
        item: SmolStr,
        /// The underlying syntax error.
        #[source]
        source: ParseError,
    },

    /// The source parsed but does not describe a documentable object.
    #[error("unrecognized declaration '{name}': {detail}")]
    UnrecognizedDeclaration {
        /// Name of the declaration.
        name: SmolStr,
        /// What was found instead.
        detail: String,
    },

    /// A global variable list was built without the file it is named after.
    #[error("a variable list needs a source file to derive its name")]
    MissingFileContext,

    /// No object with that name (and kind) is known.
    #[error("no {} named '{name}'", .kind.as_deref().unwrap_or("object"))]
    NotFound {
        /// The requested name.
        name: SmolStr,
        /// The requested kind, if any.
        kind: Option<SmolStr>,
    },

    /// No top-level object was ingested from that folder.
    #[error("no objects in folder '{folder}'")]
    FolderNotFound {
        /// The requested folder key.
        folder: String,
    },

    /// A TwinCAT source file is not well-formed XML.
    #[error("invalid XML in {}: {source}", .path.display())]
    Xml {
        /// The offending file.
        path: PathBuf,
        /// The XML error.
        #[source]
        source: roxmltree::Error,
    },

    /// A TwinCAT source file has another root element.
    #[error("{} is not a TwinCAT object: expected <TcPlcObject>, found <{root}>", .path.display())]
    NotTcObject {
        /// The offending file.
        path: PathBuf,
        /// The root element found instead.
        root: String,
    },

    /// A source file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// The file that failed.
        path: PathBuf,
        /// The I/O error.
        #[source]
        source: std::io::Error,
    },
}

fn file_label(file: Option<&PathBuf>) -> String {
    file.map_or_else(|| "<memory>".to_string(), |path| path.display().to_string())
}

/// Result alias for this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
