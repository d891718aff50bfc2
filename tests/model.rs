// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! The symbol model is plain data: a host on the other side of a process
//! boundary can serialize it as JSON and drive the generator with the
//! deserialized form.

use oracle_command_codegen::{
    CancellationToken, Generator,
    model::{TypeKind, TypeModel, TypeSymbol}
};

const MODEL_JSON: &str = r#"{
    "types": [
        {
            "name": "IOracleCommandParameters",
            "namespace": "OracleCommandGenerator",
            "kind": "Interface"
        },
        {
            "name": "PingParameters",
            "namespace": "Ops",
            "kind": "Class",
            "interfaces": [0],
            "members": [
                {
                    "name": "Host",
                    "kind": "Property",
                    "value_type": { "namespace": "System", "name": "String" },
                    "attributes": [
                        {
                            "name": "OracleInputParameterAttribute",
                            "base_types": ["OracleParameterAttributeBase"],
                            "arguments": ["OracleDbType.Varchar2", "64"]
                        }
                    ]
                }
            ]
        }
    ]
}"#;

#[test]
fn deserialized_model_drives_generation() {
    let model: TypeModel = serde_json::from_str(MODEL_JSON).expect("well-formed model");
    assert_eq!(model.len(), 2);

    let generation = Generator::new()
        .run(&model, &CancellationToken::new())
        .expect("generation succeeds");

    assert_eq!(generation.sources.len(), 1);
    let source = &generation.sources[0];
    assert_eq!(source.file_name, "Ops.PingParameters.Boilerplate.g.cs");
    assert!(source.text.contains(
        "command.Parameters.Add(nameof(Host), OracleDbType.Varchar2, 64, ParameterDirection.Input, null);"
    ));
}

#[test]
fn optional_symbol_fields_default_when_absent() {
    let symbol: TypeSymbol =
        serde_json::from_str(r#"{ "name": "Bare", "kind": "Struct" }"#).expect("minimal symbol");
    assert_eq!(symbol.kind, TypeKind::Struct);
    assert!(symbol.namespace.is_none());
    assert!(!symbol.is_record);
    assert!(symbol.base_type.is_none());
    assert!(symbol.interfaces.is_empty());
    assert!(symbol.members.is_empty());
}

#[test]
fn model_round_trips_through_json() {
    let mut model = TypeModel::new();
    let contract = model.add(
        TypeSymbol::new(TypeKind::Interface, "IOracleCommandParameters")
            .in_namespace("OracleCommandGenerator")
    );
    model.add(
        TypeSymbol::new(TypeKind::Class, "PingParameters")
            .in_namespace("Ops")
            .with_interface(contract)
    );

    let json = serde_json::to_string(&model).expect("serializable model");
    let restored: TypeModel = serde_json::from_str(&json).expect("restorable model");

    let before = Generator::new()
        .run(&model, &CancellationToken::new())
        .expect("generation succeeds");
    let after = Generator::new()
        .run(&restored, &CancellationToken::new())
        .expect("generation succeeds");
    assert_eq!(before.sources, after.sources);
}
