mod common;
use common::*;

use expect_test::expect;
use plcdoc_syntax::ast::{Declaration, ObjectKind, Type};
use plcdoc_syntax::ParseError;

#[test]
fn test_function_block_outline() {
    let source = r#"
(* This is a very cool function block *)
{attribute 'naming' := 'omit'}
FUNCTION_BLOCK FB_MyBlock EXTENDS FB_Base IMPLEMENTS I_Runnable
VAR_INPUT
    someInput : BOOL; // Important input
    factor : LREAL := 1.0;
END_VAR
VAR_OUTPUT
    someOutput : INT;
END_VAR
VAR CONSTANT
    LIM : INT := 10;
END_VAR
VAR
    buffer : ARRAY [0..LIM - 1] OF STRING(80);
    timer : TON(PT := T#2S);
    ptr : POINTER TO ST_Data;
    ref : REFERENCE TO FB_Base;
END_VAR
END_FUNCTION_BLOCK
"#;
    expect![[r#"
        functionblock FB_MyBlock extends FB_Base implements I_Runnable
          var_input
            someInput : BOOL
            factor : LREAL := 1.0
          var_output
            someOutput : INT
          var Constant
            LIM : INT := 10
          var
            buffer : ARRAY [0..LIM - 1] OF STRING(80)
            timer : TON(PT := T#2S)
            ptr : POINTER TO ST_Data
            ref : REFERENCE TO FB_Base
    "#]]
    .assert_eq(&outline(source));
}

#[test]
fn test_enum_outline() {
    let source = r#"
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
    expect![[r#"
        enum E_Options : INT
          Default := 0
          Option1
          Option2 := 16#FF
    "#]]
    .assert_eq(&outline(source));

    let Declaration::TypeDef(def) = parse_ok(source) else {
        panic!("expected type definition");
    };
    let plcdoc_syntax::ast::TypeBody::Enum { base, .. } = def.body else {
        panic!("expected enum");
    };
    assert_eq!(base, Some(Type::integer("INT")));
}

#[test]
fn test_struct_outline() {
    let source = r#"
TYPE MyStructureExtended EXTENDS MyStructure :
STRUCT
    anotherNumber : LREAL;
    matrix : ARRAY [1..10, 1..10] OF BOOL;
    dynamic : ARRAY [*, *] OF INT;
END_STRUCT
END_TYPE
"#;
    expect![[r#"
        struct MyStructureExtended
          anotherNumber : LREAL
          matrix : ARRAY [1..10, 1..10] OF BOOL
          dynamic : ARRAY [*, *] OF INT
    "#]]
    .assert_eq(&outline(source));
}

#[test]
fn test_function_outline() {
    let source = r#"
FUNCTION RegularFunction : REAL
VAR_INPUT
    input : REAL;
    bounds : INT(0..100) := 5;
END_VAR
"#;
    expect![[r#"
        function RegularFunction : REAL
          var_input
            input : REAL
            bounds : INT(0..100) := 5
    "#]]
    .assert_eq(&outline(source));
}

#[test]
fn test_global_variable_list_outline() {
    let source = r#"
{attribute 'qualified_only'}
VAR_GLOBAL
    counter : UDINT;
    sensor AT %IX0.0 : BOOL;
END_VAR
VAR_GLOBAL CONSTANT
    MAX_COUNT : UDINT := 1_000_000;
END_VAR
VAR_GLOBAL RETAIN
    name : WSTRING[32] := "motor";
END_VAR
"#;
    expect![[r#"
        var_global
          counter : UDINT
          sensor AT %IX0.0 : BOOL
        var_global Constant
          MAX_COUNT : UDINT := 1_000_000
        var_global Retain
          name : WSTRING(32) := "motor"
    "#]]
    .assert_eq(&outline(source));
}

#[test]
fn test_interface_method_property_outline() {
    let source = r#"
INTERFACE I_Runnable EXTENDS I_Base
METHOD Run : BOOL
VAR_INPUT
    cycles : UINT;
END_VAR
PROPERTY PUBLIC Speed : LREAL
TYPE T_Speed : LREAL; END_TYPE
"#;
    expect![[r#"
        interface I_Runnable extends I_Base
        method Run : BOOL
          var_input
            cycles : UINT
        property Speed : LREAL
        alias T_Speed : LREAL
    "#]]
    .assert_eq(&outline(source));
}

#[test]
fn test_object_kinds() {
    let cases = [
        ("PROGRAM MAIN", Some(ObjectKind::Program)),
        ("FUNCTION_BLOCK FB", Some(ObjectKind::FunctionBlock)),
        ("FUNCTION F : INT", Some(ObjectKind::Function)),
        ("METHOD M", Some(ObjectKind::Method)),
        ("INTERFACE I", Some(ObjectKind::Interface)),
        ("PROPERTY P : INT", Some(ObjectKind::Property)),
        ("TYPE S : STRUCT END_STRUCT END_TYPE", Some(ObjectKind::Struct)),
        ("TYPE U : UNION END_UNION END_TYPE", Some(ObjectKind::Union)),
        ("TYPE E : (A); END_TYPE", Some(ObjectKind::Enum)),
        ("VAR_GLOBAL END_VAR", Some(ObjectKind::VariableList)),
        ("TYPE T : INT; END_TYPE", None),
    ];
    for (source, kind) in cases {
        assert_eq!(parse_ok(source).object_kind(), kind, "{source}");
    }
}

#[test]
fn test_parse_is_deterministic() {
    let source = "FUNCTION_BLOCK FB VAR_INPUT a, b : INT := 1 + 2 * 3; END_VAR";
    assert_eq!(parse_ok(source), parse_ok(source));
}

#[test]
fn test_syntax_error_position() {
    let err = parse("TYPE ST_Data :\nSTRUCT\n    x : REAL;\nEND_STRUCT\n").unwrap_err();
    let ParseError::Syntax {
        message,
        found,
        line,
        column,
    } = err
    else {
        panic!("expected syntax error");
    };
    assert_eq!(message, "expected END_TYPE");
    assert_eq!(found, "end of input");
    assert_eq!((line, column), (5, 1));
}

#[test]
fn test_statements_are_rejected() {
    let err = parse("PROGRAM MAIN\nVAR x : INT; END_VAR\nx := 1;").unwrap_err();
    assert_eq!(
        err.to_string(),
        "expected declaration, found 'x' at line 3, column 1"
    );
}
