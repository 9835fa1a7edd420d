mod common;
use common::*;

use std::path::Path;

use plcdoc_model::twincat::parse_tc_object;
use plcdoc_model::{Error, InterpreterConfig};
use plcdoc_syntax::ast::ObjectKind;

const FB_MY_BLOCK_POU: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<TcPlcObject Version="1.1.0.1" ProductVersion="3.1.4024.12">
  <POU Name="FB_MyBlock" Id="{6b0ab3cb-5a2e-4a8b-9d3c-1d2c3a4b5c6d}" SpecialFunc="None">
    <Declaration><![CDATA[(* This is a very cool function block *)
FUNCTION_BLOCK FB_MyBlock
VAR_INPUT
    someInput : BOOL;
END_VAR
VAR_OUTPUT
    someOutput : INT;
END_VAR
]]></Declaration>
    <Implementation>
      <ST><![CDATA[someOutput := 1;]]></ST>
    </Implementation>
    <Method Name="MyMethod" Id="{0d1e2f3a-4b5c-6d7e-8f90-a1b2c3d4e5f6}">
      <Declaration><![CDATA[METHOD MyMethod : BOOL
VAR_INPUT
    cycles : UINT;
END_VAR
]]></Declaration>
      <Implementation>
        <ST><![CDATA[MyMethod := TRUE;]]></ST>
      </Implementation>
    </Method>
    <Property Name="Speed" Id="{aa1e2f3a-4b5c-6d7e-8f90-a1b2c3d4e5f6}">
      <Declaration><![CDATA[PROPERTY Speed : LREAL]]></Declaration>
      <Get Name="Get" Id="{bb1e2f3a-4b5c-6d7e-8f90-a1b2c3d4e5f6}">
        <Declaration><![CDATA[VAR
END_VAR
]]></Declaration>
      </Get>
    </Property>
  </POU>
</TcPlcObject>
"#;

#[test]
fn test_items_and_children_are_extracted() {
    let file = parse_tc_object(Path::new("FB_MyBlock.TcPOU"), FB_MY_BLOCK_POU).unwrap();
    assert_eq!(file.items.len(), 1);

    let item = &file.items[0];
    assert_eq!(item.name.as_deref(), Some("FB_MyBlock"));
    assert!(item.declaration.starts_with("(* This is a very cool function block *)"));
    assert!(!item.declaration.contains("someOutput := 1"));

    let children: Vec<_> = item
        .children
        .iter()
        .map(|child| child.name.as_deref().unwrap_or_default())
        .collect();
    assert_eq!(children, ["MyMethod", "Speed"]);
    assert!(item.children.iter().all(|child| child.children.is_empty()));
}

#[test]
fn test_extracted_file_ingests() {
    let file = parse_tc_object(
        Path::new(&project_file("POUs/FB_MyBlock.TcPOU")),
        FB_MY_BLOCK_POU,
    )
    .unwrap();
    let mut builder = builder();
    assert!(builder.ingest_file(&file));
    let interpreter = builder.finish();

    let block = interpreter.get_object("FB_MyBlock", Some("functionblock")).unwrap();
    assert_eq!(block.comment(), Some("This is a very cool function block"));
    let args: Vec<_> = block.args().iter().map(|var| var.name.as_str()).collect();
    assert_eq!(args, ["someInput", "someOutput"]);

    let speed = interpreter
        .get_object("FB_MyBlock.Speed", Some("property"))
        .unwrap();
    assert_eq!(speed.kind(), ObjectKind::Property);
    assert_eq!(speed.return_type(), Some("LREAL"));
    assert!(interpreter.get_object("FB_MyBlock.MyMethod", Some("method")).is_ok());
}

#[test]
fn test_global_variable_list_file() {
    let xml = r#"<?xml version="1.0" encoding="utf-8"?>
<TcPlcObject Version="1.1.0.1">
  <GVL Name="GVL_Main" Id="{11111111-2222-3333-4444-555555555555}">
    <Declaration><![CDATA[{attribute 'qualified_only'}
VAR_GLOBAL
    counter : UDINT;
END_VAR
]]></Declaration>
  </GVL>
</TcPlcObject>"#;
    let path = project_file("GVLs/GVL_Main.TcGVL");
    let file = parse_tc_object(Path::new(&path), xml).unwrap();
    let mut builder = builder();
    assert!(builder.ingest_file(&file));
    let interpreter = builder.finish();

    let gvl = interpreter.get_object("GVL_Main", None).unwrap();
    assert_eq!(gvl.kind(), ObjectKind::VariableList);
    assert_eq!(gvl.members()[0].name, "counter");
    assert_eq!(interpreter.get_objects_in_folder("GVLs").unwrap().len(), 1);
}

#[test]
fn test_other_root_is_rejected() {
    let err = parse_tc_object(Path::new("Project.plcproj"), "<Project><ItemGroup/></Project>")
        .unwrap_err();
    assert!(matches!(err, Error::NotTcObject { ref root, .. } if root == "Project"));
    assert_eq!(
        err.to_string(),
        "Project.plcproj is not a TwinCAT object: expected <TcPlcObject>, found <Project>"
    );
}

#[test]
fn test_missing_file_is_a_failure() {
    let mut builder = builder();
    assert!(!builder.ingest_path(Path::new("/nonexistent/plcdoc/FB_Missing.TcPOU")));
    assert!(matches!(builder.failures()[0].error, Error::Io { .. }));
}

#[test]
fn test_config_from_contents() {
    let config = InterpreterConfig::from_contents(
        Path::new("/project"),
        "[equivalent_kinds]\nfunctionblock = [\"functionblock\", \"program\"]\n",
    );
    assert_eq!(config.project_root.as_deref(), Some(Path::new("/project")));
    assert_eq!(config.reduce_kind(ObjectKind::Program), ObjectKind::FunctionBlock);
    assert_eq!(config.reduce_kind(ObjectKind::Interface), ObjectKind::Interface);

    let loaded = InterpreterConfig::load(Path::new("/nonexistent/plcdoc"));
    assert_eq!(loaded, InterpreterConfig::with_root("/nonexistent/plcdoc"));
}
