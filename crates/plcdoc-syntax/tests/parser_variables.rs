mod common;
use common::*;

use plcdoc_syntax::ast::{Arguments, Declaration, Expr, Subrange, Type, Variable};

const FB_VARIABLES: &str = r#"
FUNCTION_BLOCK FB_Variables
VAR
    myfloat_no_ws:REAL;
    myfloat : REAL;

    mydoubleinit1 : LREAL := 1.0;
    mydoubleinit2 : LREAL:=1.0;
    myinteger : SINT := 420;
    mystring : STRING := 'test';

    my_object : MyObject();
    my_object1 : MyObject(7);
    my_object2 : MyObject('hi', 23, FALSE);
    my_object3 : MyObject(text := 'hi', number := 23, flag := FALSE);
    my_object4 : MyObject(
        text := 'hi',
        number := 23,
        flag := FALSE
    );
    mystring_size1 : STRING(15);
    mystring_size2 : STRING[17];

    myint : INT := SomeConstant;
    myint2 : INT := E_Error.NoError;

    mylist : ARRAY[0..4] OF BOOL;
    mylist_ws : ARRAY [ 0 .. 4 ] OF BOOL;
    mylist_var_idx : ARRAY[Idx.start..Idx.end] OF BOOL;
    mylist_sum : ARRAY[0..MAX-1] OF BOOL;
    mylist_multi : ARRAY[1..10, 1..10] OF BOOL;
    mylist_multi2 : ARRAY[1..10] OF ARRAY[1..10] OF BOOL;
    mylist_dyn : ARRAY[*] OF BOOL;
    mylist_dyn_multi : ARRAY[*, *, *] OF BOOL;

    mystruct : MyStruct();
    mystruct2 : MyStruct := (number := 1.0, text := 'hi');

    specialint1 : UDINT := 2#1001_0110;
    specialint2 : UDINT := 8#67;
    specialint3 : UDINT := 16#FF_FF_FF;
    specialint4 : UDINT := UDINT#16#1;
    specialint5 : UDINT := 1_000_000;

    mypointer1 : POINTER TO UDINT;
    mypointer2 : REFERENCE TO UDINT;

    timeout1 : TIME := T#2S;
    timeout2 : TIME := T#12m13s14ms;
END_VAR
"#;

fn variables() -> Vec<Variable> {
    let Declaration::Function(fb) = parse_ok(FB_VARIABLES) else {
        panic!("expected function block");
    };
    fb.variable_lists.into_iter().next().unwrap().variables
}

fn variable(name: &str) -> Variable {
    variables()
        .into_iter()
        .find(|var| var.name == name)
        .unwrap_or_else(|| panic!("no variable {name}"))
}

fn init_text(name: &str) -> String {
    variable(name).init.expect("initializer").to_string()
}

#[test]
fn test_all_variables_are_parsed() {
    assert_eq!(variables().len(), 34);
}

#[test]
fn test_initializers() {
    assert_eq!(init_text("mydoubleinit1"), "1.0");
    assert_eq!(init_text("mydoubleinit2"), "1.0");
    assert_eq!(init_text("myinteger"), "420");
    assert_eq!(init_text("mystring"), "'test'");
    assert_eq!(init_text("myint"), "SomeConstant");
    assert_eq!(init_text("myint2"), "E_Error.NoError");
    assert!(variable("myfloat").init.is_none());
}

#[test]
fn test_numeric_literals_are_verbatim() {
    for (name, text) in [
        ("specialint1", "2#1001_0110"),
        ("specialint2", "8#67"),
        ("specialint3", "16#FF_FF_FF"),
        ("specialint4", "UDINT#16#1"),
        ("specialint5", "1_000_000"),
        ("timeout1", "T#2S"),
        ("timeout2", "T#12m13s14ms"),
    ] {
        assert_eq!(init_text(name), text);
    }
}

#[test]
fn test_constructor_arguments() {
    assert_eq!(
        variable("my_object").arguments,
        Some(Arguments::Positional(Vec::new()))
    );
    let Some(Arguments::Positional(values)) = variable("my_object2").arguments else {
        panic!("expected positional arguments");
    };
    let values: Vec<_> = values.iter().map(ToString::to_string).collect();
    assert_eq!(values, ["'hi'", "23", "FALSE"]);

    let labeled = |name: &str| match variable(name).arguments {
        Some(Arguments::Labeled(fields)) => fields
            .iter()
            .map(|field| (field.name.to_string(), field.value.to_string()))
            .collect::<Vec<_>>(),
        other => panic!("expected labeled arguments, got {other:?}"),
    };
    let expected = vec![
        ("text".to_string(), "'hi'".to_string()),
        ("number".to_string(), "23".to_string()),
        ("flag".to_string(), "FALSE".to_string()),
    ];
    assert_eq!(labeled("my_object3"), expected);
    assert_eq!(labeled("my_object4"), expected);
    assert_eq!(variable("mystruct").arguments, Some(Arguments::Positional(Vec::new())));
}

#[test]
fn test_struct_initializer() {
    let Some(Expr::Struct(fields)) = variable("mystruct2").init else {
        panic!("expected struct literal");
    };
    assert_eq!(fields[0].name, "number");
    assert_eq!(fields[1].value.to_string(), "'hi'");
}

#[test]
fn test_types() {
    let ty = |name: &str| variable(name).ty.to_string();
    assert_eq!(ty("myfloat_no_ws"), "REAL");
    assert_eq!(ty("mystring_size1"), "STRING(15)");
    assert_eq!(ty("mystring_size2"), "STRING(17)");
    assert_eq!(ty("mylist"), "ARRAY [0..4] OF BOOL");
    assert_eq!(ty("mylist_ws"), "ARRAY [0..4] OF BOOL");
    assert_eq!(ty("mylist_var_idx"), "ARRAY [Idx.start..Idx.end] OF BOOL");
    assert_eq!(ty("mylist_sum"), "ARRAY [0..MAX - 1] OF BOOL");
    assert_eq!(ty("mylist_multi"), "ARRAY [1..10, 1..10] OF BOOL");
    assert_eq!(ty("mylist_multi2"), "ARRAY [1..10] OF ARRAY [1..10] OF BOOL");
    assert_eq!(ty("mylist_dyn_multi"), "ARRAY [*, *, *] OF BOOL");
    assert_eq!(ty("mypointer1"), "POINTER TO UDINT");
    assert_eq!(ty("mypointer2"), "REFERENCE TO UDINT");
}

#[test]
fn test_dynamic_array_dimension() {
    let Type::Array { ranges, element } = variable("mylist_dyn").ty else {
        panic!("expected array");
    };
    assert_eq!(ranges, vec![Subrange::Dynamic]);
    assert_eq!(*element, Type::named("BOOL"));
}

#[test]
fn test_string_sizes_are_equivalent() {
    let Type::String { wide, size } = variable("mystring_size1").ty else {
        panic!("expected string type");
    };
    assert!(!wide);
    assert_eq!(size.unwrap().to_string(), "15");
}
