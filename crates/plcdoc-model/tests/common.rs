//! Shared sample sources and helpers for model tests.
#![allow(dead_code)]

use std::path::Path;

use plcdoc_model::{Interpreter, InterpreterBuilder, InterpreterConfig, PlcDeclaration};
use plcdoc_model::{SourceFile, SourceItem};

pub const PROJECT_ROOT: &str = "/project/PLC";

pub const FB_MY_BLOCK: &str = r#"
(* Ignored: not the last block comment *)
(* This is a very cool function block *)
{attribute 'naming' := 'omit'}
FUNCTION_BLOCK FB_MyBlock EXTENDS FB_Base IMPLEMENTS I_Runnable
VAR_INPUT
    (* Important: the first input *) someInput : BOOL; (* Ignored: belongs to END_VAR *)
END_VAR
VAR_OUTPUT
    someOutput : INT; // Important: trailing output comment
END_VAR
VAR CONSTANT
    LIM : INT := 10;
END_VAR
VAR
    buffer : ARRAY [0..LIM - 1] OF STRING(80);
    total : DINT := 1+(LIM+1)*5;
    timer : TON(PT := T#2S);
END_VAR
END_FUNCTION_BLOCK
"#;

pub const MY_METHOD: &str = r#"
(* Does the thing *)
METHOD PUBLIC MyMethod : BOOL
VAR_INPUT
    cycles : UINT;
END_VAR
"#;

pub const E_OPTIONS: &str = r#"
{attribute 'qualified_only'}
{attribute 'strict'}
TYPE E_Options :
(
    Default := 0,
    Option1,
    Option2 := 16#FF
) INT;
END_TYPE
"#;

pub const ST_DATA: &str = r#"
(* Measurement record *)
TYPE ST_Data EXTENDS ST_Base :
STRUCT
    value : LREAL := 1.5; // Measured value
    samples : ARRAY [*] OF INT;
END_STRUCT
END_TYPE
"#;

pub const GVL_MAIN: &str = r#"
VAR_GLOBAL
    counter : UDINT;
END_VAR
VAR_GLOBAL CONSTANT
    MAX_COUNT : UDINT := 1_000_000;
END_VAR
"#;

/// Builds the single declaration in `source`, panicking on failure.
pub fn build(source: &str, file: Option<&Path>) -> PlcDeclaration {
    let declaration =
        plcdoc_syntax::parse(source).unwrap_or_else(|err| panic!("failed to parse: {err}"));
    PlcDeclaration::build(&declaration, file).unwrap_or_else(|err| panic!("failed to build: {err}"))
}

/// A builder rooted at [`PROJECT_ROOT`].
pub fn builder() -> InterpreterBuilder {
    InterpreterBuilder::new(InterpreterConfig::with_root(PROJECT_ROOT))
}

/// `path` below [`PROJECT_ROOT`].
pub fn project_file(path: &str) -> String {
    format!("{PROJECT_ROOT}/{path}")
}

/// The function block with its method as a child item.
pub fn fb_file() -> SourceFile {
    SourceFile::new(project_file("POUs/FB_MyBlock.TcPOU")).with_item(
        SourceItem::new(FB_MY_BLOCK)
            .named("FB_MyBlock")
            .with_child(SourceItem::new(MY_METHOD).named("MyMethod")),
    )
}

/// An interpreter holding every sample.
pub fn sample_interpreter() -> Interpreter {
    let mut builder = builder();
    assert!(builder.ingest_file(&fb_file()));
    assert!(builder.ingest_source(project_file("DUTs/E_Options.TcDUT"), E_OPTIONS));
    assert!(builder.ingest_source(project_file("DUTs/ST_Data.TcDUT"), ST_DATA));
    assert!(builder.ingest_source(project_file("GVLs/GVL_Main.TcGVL"), GVL_MAIN));
    assert!(builder.ingest_source(project_file("MAIN.TcPOU"), "PROGRAM MAIN"));
    builder.finish()
}
