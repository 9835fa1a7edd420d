//! `plcdoc-model` - Documentation model and symbol table for Structured Text
//! projects.
//!
//! Parsed declarations from `plcdoc-syntax` are turned into
//! [`PlcDeclaration`]s and collected by an [`InterpreterBuilder`]. The
//! finished [`Interpreter`] answers lookups by name, by kind and by folder.
//!
//! # Example
//!
//! ```
//! use plcdoc_model::{InterpreterBuilder, InterpreterConfig};
//!
//! let mut builder = InterpreterBuilder::new(InterpreterConfig::with_root("/plc"));
//! builder.ingest_source(
//!     "/plc/POUs/FB_Motor.TcPOU",
//!     "FUNCTION_BLOCK FB_Motor\nVAR_INPUT\n    enable : BOOL;\nEND_VAR",
//! );
//! let interpreter = builder.finish();
//!
//! let motor = interpreter.get_object("FB_Motor", Some("functionblock")).unwrap();
//! assert_eq!(motor.args()[0].name, "enable");
//! assert_eq!(interpreter.get_objects_in_folder("POUs").unwrap().len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod comment;
pub mod config;
pub mod declaration;
pub mod error;
pub mod interpreter;
pub mod source;
pub mod twincat;

pub use config::InterpreterConfig;
pub use declaration::{ArgFilter, PlcDeclaration, PlcVariable, VariableKind};
pub use error::{Error, Result};
pub use interpreter::{IngestFailure, Interpreter, InterpreterBuilder};
pub use source::{SourceFile, SourceItem};
