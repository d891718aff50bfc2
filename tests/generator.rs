// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! End-to-end generation tests.
//!
//! Mirrors the generated units byte for byte: a representative
//! five-parameter command type (two `Input` strings, one `Output`, one
//! `InputOutput`, one `ReturnValue`) exercised across every base shape,
//! declaration keyword, and namespace form.

use oracle_command_codegen::{
    CancellationToken, Generation, Generator, GeneratorError,
    error::UNKNOWN_PARAMETER_KIND,
    model::{AttributeUse, MemberSymbol, TypeId, TypeKind, TypeModel, TypeSymbol, ValueType}
};

const NAMESPACE: &str = "Billing.Commands";
const TYPE_NAME: &str = "CalculatePlanAdjustmentParameters";
const INTERFACE_HEADER: &str = "void IOracleCommandParameters.";
const OVERRIDE_HEADER: &str = "protected override void ";

fn parameter_attribute(kind: &str, type_expression: &str, size: Option<&str>) -> AttributeUse {
    let mut attribute = AttributeUse::new(kind)
        .derived_from("OracleParameterAttributeBase")
        .with_argument(type_expression);
    if let Some(size) = size {
        attribute = attribute.with_argument(size);
    }
    attribute
}

fn input_attribute(type_expression: &str, size: Option<&str>) -> AttributeUse {
    parameter_attribute("OracleInputParameterAttribute", type_expression, size)
}

fn marker_interface(model: &mut TypeModel) -> TypeId {
    model.add(
        TypeSymbol::new(TypeKind::Interface, "IOracleCommandParameters")
            .in_namespace("OracleCommandGenerator")
    )
}

/// The concrete runtime base class, reachable through the marker contract.
fn runtime_base(model: &mut TypeModel) -> TypeId {
    let contract = marker_interface(model);
    model.add(
        TypeSymbol::new(TypeKind::Class, "OracleCommandParameters")
            .in_namespace("OracleCommandGenerator")
            .with_interface(contract)
    )
}

fn oracle_type(name: &str) -> ValueType {
    ValueType::new("Oracle.ManagedDataAccess.Types", name)
}

/// One member of each direction plus a duplicate `Input`, in declared
/// order.
fn with_worked_example_members(symbol: TypeSymbol) -> TypeSymbol {
    symbol
        .with_member(
            MemberSymbol::property("CustomerSsn", ValueType::new("System", "String"))
                .with_attribute(input_attribute("OracleDbType.Varchar2", Some("100")))
        )
        .with_member(
            MemberSymbol::property("NewPricingPlan", ValueType::new("System", "String"))
                .with_attribute(input_attribute("OracleDbType.Varchar2", Some("100")))
        )
        .with_member(
            MemberSymbol::property("AdjustmentPrice", oracle_type("OracleDecimal")).with_attribute(
                parameter_attribute("OracleOutputParameterAttribute", "OracleDbType.Decimal", None)
            )
        )
        .with_member(
            MemberSymbol::property("RecordId", oracle_type("OracleString")).with_attribute(
                parameter_attribute(
                    "OracleInputOutputParameterAttribute",
                    "OracleDbType.Varchar2",
                    Some("100")
                )
            )
        )
        .with_member(
            MemberSymbol::property("Available", oracle_type("OracleDecimal")).with_attribute(
                parameter_attribute(
                    "OracleReturnValueParameterAttribute",
                    "OracleDbType.Int32",
                    None
                )
            )
        )
}

/// Expected text of the worked example, assembled line by line with CRLF
/// terminators.
fn expected_boilerplate(namespace: Option<&str>, keyword: &str, header: &str) -> String {
    let mut lines: Vec<String> = vec![
        "using OracleCommandGenerator;".into(),
        "using Oracle.ManagedDataAccess.Client;".into(),
        "using Oracle.ManagedDataAccess.Types;".into(),
        "using System;".into(),
        "using System.Data;".into(),
        String::new()
    ];

    let pad = usize::from(namespace.is_some());
    if let Some(namespace) = namespace {
        lines.push(format!("namespace {namespace}"));
        lines.push("{".into());
    }

    let i0 = "    ".repeat(pad);
    let i1 = "    ".repeat(pad + 1);
    let i2 = "    ".repeat(pad + 2);

    lines.push(format!("{i0}partial {keyword} {TYPE_NAME}"));
    lines.push(format!("{i0}{{"));

    lines.push(format!("{i1}{header}SetParameters(OracleCommand command)"));
    lines.push(format!("{i1}{{"));
    for statement in [
        "command.Parameters.Add(nameof(CustomerSsn), OracleDbType.Varchar2, 100, ParameterDirection.Input, null);",
        "command.Parameters.Add(nameof(NewPricingPlan), OracleDbType.Varchar2, 100, ParameterDirection.Input, null);",
        "command.Parameters.Add(nameof(AdjustmentPrice), OracleDbType.Decimal, ParameterDirection.Output, null);",
        "command.Parameters.Add(nameof(RecordId), OracleDbType.Varchar2, 100, ParameterDirection.InputOutput, null);",
        "command.Parameters.Add(nameof(Available), OracleDbType.Int32, ParameterDirection.ReturnValue, null);"
    ] {
        lines.push(format!("{i2}{statement}"));
    }
    lines.push(format!("{i1}}}"));
    lines.push(String::new());

    lines.push(format!("{i1}{header}SetInputParameters(OracleCommand command)"));
    lines.push(format!("{i1}{{"));
    for statement in [
        "command.Parameters[nameof(CustomerSsn)].Value = CustomerSsn;",
        "command.Parameters[nameof(NewPricingPlan)].Value = NewPricingPlan;",
        "command.Parameters[nameof(RecordId)].Value = RecordId;"
    ] {
        lines.push(format!("{i2}{statement}"));
    }
    lines.push(format!("{i1}}}"));
    lines.push(String::new());

    lines.push(format!("{i1}{header}ReadOutput(OracleCommand command)"));
    lines.push(format!("{i1}{{"));
    for statement in [
        "AdjustmentPrice = (global::Oracle.ManagedDataAccess.Types.OracleDecimal)command.Parameters[nameof(AdjustmentPrice)].Value;",
        "RecordId = (global::Oracle.ManagedDataAccess.Types.OracleString)command.Parameters[nameof(RecordId)].Value;",
        "Available = (global::Oracle.ManagedDataAccess.Types.OracleDecimal)command.Parameters[nameof(Available)].Value;"
    ] {
        lines.push(format!("{i2}{statement}"));
    }
    lines.push(format!("{i1}}}"));

    lines.push(format!("{i0}}}"));
    if namespace.is_some() {
        lines.push("}".into());
    }

    lines.iter().map(|line| format!("{line}\r\n")).collect()
}

fn run(model: &TypeModel) -> Generation {
    Generator::new()
        .run(model, &CancellationToken::new())
        .expect("generation succeeds")
}

fn source_text<'a>(generation: &'a Generation, file_name: &str) -> &'a str {
    &generation
        .sources
        .iter()
        .find(|source| source.file_name == file_name)
        .unwrap_or_else(|| panic!("no source registered as `{file_name}`"))
        .text
}

#[test]
fn class_base_emits_protected_overrides() {
    let mut model = TypeModel::new();
    let base = runtime_base(&mut model);
    model.add(with_worked_example_members(
        TypeSymbol::new(TypeKind::Class, TYPE_NAME)
            .in_namespace(NAMESPACE)
            .with_base_type(base)
    ));

    let generation = run(&model);
    let text = source_text(
        &generation,
        "Billing.Commands.CalculatePlanAdjustmentParameters.Boilerplate.g.cs"
    );

    assert_eq!(
        text,
        expected_boilerplate(Some(NAMESPACE), "class", OVERRIDE_HEADER)
    );
    assert!(generation.diagnostics.is_empty());
}

#[test]
fn record_deriving_base_class_emits_overrides() {
    let mut model = TypeModel::new();
    let base = runtime_base(&mut model);
    model.add(with_worked_example_members(
        TypeSymbol::new(TypeKind::Class, TYPE_NAME)
            .as_record()
            .in_namespace(NAMESPACE)
            .with_base_type(base)
    ));

    let generation = run(&model);
    let text = source_text(
        &generation,
        "Billing.Commands.CalculatePlanAdjustmentParameters.Boilerplate.g.cs"
    );

    assert_eq!(
        text,
        expected_boilerplate(Some(NAMESPACE), "record", OVERRIDE_HEADER)
    );
}

#[test]
fn interface_base_emits_explicit_implementations() {
    for (symbol, keyword) in [
        (TypeSymbol::new(TypeKind::Class, TYPE_NAME), "class"),
        (TypeSymbol::new(TypeKind::Class, TYPE_NAME).as_record(), "record")
    ] {
        let mut model = TypeModel::new();
        let contract = marker_interface(&mut model);
        model.add(with_worked_example_members(
            symbol.in_namespace(NAMESPACE).with_interface(contract)
        ));

        let generation = run(&model);
        let text = source_text(
            &generation,
            "Billing.Commands.CalculatePlanAdjustmentParameters.Boilerplate.g.cs"
        );

        assert_eq!(
            text,
            expected_boilerplate(Some(NAMESPACE), keyword, INTERFACE_HEADER)
        );
    }
}

#[test]
fn struct_keywords_are_echoed() {
    for (symbol, keyword) in [
        (TypeSymbol::new(TypeKind::Struct, TYPE_NAME), "struct"),
        (
            TypeSymbol::new(TypeKind::Struct, TYPE_NAME).as_record(),
            "record struct"
        )
    ] {
        let mut model = TypeModel::new();
        let contract = marker_interface(&mut model);
        model.add(with_worked_example_members(
            symbol.in_namespace(NAMESPACE).with_interface(contract)
        ));

        let generation = run(&model);
        let text = source_text(
            &generation,
            "Billing.Commands.CalculatePlanAdjustmentParameters.Boilerplate.g.cs"
        );

        assert_eq!(
            text,
            expected_boilerplate(Some(NAMESPACE), keyword, INTERFACE_HEADER)
        );
    }
}

#[test]
fn global_namespace_emits_unwrapped() {
    let mut model = TypeModel::new();
    let contract = marker_interface(&mut model);
    model.add(with_worked_example_members(
        TypeSymbol::new(TypeKind::Class, TYPE_NAME).with_interface(contract)
    ));

    let generation = run(&model);
    let text = source_text(
        &generation,
        "CalculatePlanAdjustmentParameters.Boilerplate.g.cs"
    );

    assert_eq!(text, expected_boilerplate(None, "class", INTERFACE_HEADER));
}

#[test]
fn interface_declarations_emit_nothing() {
    let mut model = TypeModel::new();
    let contract = marker_interface(&mut model);
    model.add(with_worked_example_members(
        TypeSymbol::new(TypeKind::Interface, TYPE_NAME)
            .in_namespace(NAMESPACE)
            .with_interface(contract)
            .with_member(MemberSymbol::method("Refresh", ValueType::global("void")))
            .with_member(MemberSymbol::property(
                "UnrelatedProperty",
                ValueType::new("System", "String")
            ))
    ));

    let generation = run(&model);
    assert!(generation.sources.is_empty());
    assert!(generation.diagnostics.is_empty());
}

#[test]
fn inherited_members_follow_declared_members() {
    let mut model = TypeModel::new();
    let base = runtime_base(&mut model);
    let audited = model.add(
        TypeSymbol::new(TypeKind::Class, "AuditedParameters")
            .in_namespace(NAMESPACE)
            .with_base_type(base)
            .with_member(
                MemberSymbol::property("TraceId", ValueType::new("System", "String"))
                    .with_attribute(input_attribute("OracleDbType.Varchar2", Some("32")))
            )
    );
    model.add(
        TypeSymbol::new(TypeKind::Class, "RecordUsageParameters")
            .in_namespace(NAMESPACE)
            .with_base_type(audited)
            .with_member(
                MemberSymbol::property("MeterReading", ValueType::new("System", "Decimal"))
                    .with_attribute(input_attribute("OracleDbType.Decimal", None))
            )
    );

    let generation = run(&model);
    let text = source_text(
        &generation,
        "Billing.Commands.RecordUsageParameters.Boilerplate.g.cs"
    );

    let declarations: Vec<&str> = text
        .lines()
        .filter(|line| line.contains("Parameters.Add("))
        .collect();
    assert_eq!(declarations.len(), 2);
    assert!(declarations[0].contains("MeterReading"));
    assert!(declarations[1].contains("TraceId"));
}

#[test]
fn unknown_attribute_kind_surfaces_a_diagnostic() {
    let mut model = TypeModel::new();
    let contract = marker_interface(&mut model);
    model.add(
        TypeSymbol::new(TypeKind::Class, TYPE_NAME)
            .in_namespace(NAMESPACE)
            .with_interface(contract)
            .with_member(
                MemberSymbol::property("CursorField", oracle_type("OracleRefCursor"))
                    .with_attribute(parameter_attribute(
                        "OracleCursorParameterAttribute",
                        "OracleDbType.RefCursor",
                        None
                    ))
            )
            .with_member(
                MemberSymbol::property("Kept", ValueType::new("System", "String"))
                    .with_attribute(input_attribute("OracleDbType.Varchar2", None))
            )
    );

    let generation = run(&model);
    assert_eq!(generation.diagnostics.len(), 1);

    let diagnostic = &generation.diagnostics[0];
    assert_eq!(diagnostic.id, UNKNOWN_PARAMETER_KIND);
    assert_eq!(diagnostic.member_name, "CursorField");

    // The unknown parameter vanishes from all three methods.
    let text = source_text(
        &generation,
        "Billing.Commands.CalculatePlanAdjustmentParameters.Boilerplate.g.cs"
    );
    assert!(!text.contains("CursorField"));
    assert!(text.contains("nameof(Kept)"));
}

#[test]
fn non_literal_size_argument_means_no_size() {
    let mut model = TypeModel::new();
    let contract = marker_interface(&mut model);
    model.add(
        TypeSymbol::new(TypeKind::Class, TYPE_NAME)
            .in_namespace(NAMESPACE)
            .with_interface(contract)
            .with_member(
                MemberSymbol::property("Unsized", ValueType::new("System", "String"))
                    .with_attribute(input_attribute("OracleDbType.Varchar2", Some("DefaultSize")))
            )
    );

    let generation = run(&model);
    let text = source_text(
        &generation,
        "Billing.Commands.CalculatePlanAdjustmentParameters.Boilerplate.g.cs"
    );

    assert!(text.contains(
        "command.Parameters.Add(nameof(Unsized), OracleDbType.Varchar2, ParameterDirection.Input, null);"
    ));
    assert!(!text.contains("DefaultSize"));
}

#[test]
fn directions_partition_the_method_bodies() {
    let mut model = TypeModel::new();
    let base = runtime_base(&mut model);
    model.add(with_worked_example_members(
        TypeSymbol::new(TypeKind::Class, TYPE_NAME)
            .in_namespace(NAMESPACE)
            .with_base_type(base)
    ));

    let generation = run(&model);
    let text = source_text(
        &generation,
        "Billing.Commands.CalculatePlanAdjustmentParameters.Boilerplate.g.cs"
    );

    // Five declared, three assigned, three read back.
    assert_eq!(text.matches("Parameters.Add(").count(), 5);
    assert_eq!(text.matches("].Value = ").count(), 3);
    assert_eq!(text.matches(")command.Parameters[").count(), 3);

    // ReturnValue is never assigned; Input is never read back.
    assert!(!text.contains("command.Parameters[nameof(Available)].Value = "));
    assert!(!text.contains("CustomerSsn = ("));
}

#[test]
fn output_casts_are_fully_qualified() {
    let mut model = TypeModel::new();
    let base = runtime_base(&mut model);
    model.add(with_worked_example_members(
        TypeSymbol::new(TypeKind::Class, TYPE_NAME)
            .in_namespace(NAMESPACE)
            .with_base_type(base)
    ));

    let generation = run(&model);
    let text = source_text(
        &generation,
        "Billing.Commands.CalculatePlanAdjustmentParameters.Boilerplate.g.cs"
    );

    // Casts use the resolved type, never a source-level alias.
    assert!(text.contains("(global::Oracle.ManagedDataAccess.Types.OracleDecimal)"));
    assert!(text.contains("(global::Oracle.ManagedDataAccess.Types.OracleString)"));
}

#[test]
fn generation_is_idempotent() {
    let mut model = TypeModel::new();
    let base = runtime_base(&mut model);
    model.add(with_worked_example_members(
        TypeSymbol::new(TypeKind::Class, TYPE_NAME)
            .in_namespace(NAMESPACE)
            .with_base_type(base)
    ));

    let first = run(&model);
    let second = run(&model);
    assert_eq!(first.sources, second.sources);
    assert_eq!(first.diagnostics, second.diagnostics);
}

#[test]
fn cancellation_aborts_the_run() {
    let mut model = TypeModel::new();
    let contract = marker_interface(&mut model);
    model.add(with_worked_example_members(
        TypeSymbol::new(TypeKind::Class, TYPE_NAME)
            .in_namespace(NAMESPACE)
            .with_interface(contract)
    ));

    let token = CancellationToken::new();
    token.cancel();

    let result = Generator::new().run(&model, &token);
    assert!(matches!(result, Err(GeneratorError::Cancelled)));
}

#[test]
fn unrelated_declarations_are_skipped_silently() {
    let mut model = TypeModel::new();
    model.add(
        TypeSymbol::new(TypeKind::Class, "PlainDto")
            .in_namespace(NAMESPACE)
            .with_member(MemberSymbol::property("Name", ValueType::new("System", "String")))
    );
    model.add(TypeSymbol::new(TypeKind::Enum, "PlanKind").in_namespace(NAMESPACE));

    let generation = run(&model);
    assert!(generation.sources.is_empty());
    assert!(generation.diagnostics.is_empty());
}

#[test]
fn file_extension_is_configurable() {
    let mut model = TypeModel::new();
    let contract = marker_interface(&mut model);
    model.add(with_worked_example_members(
        TypeSymbol::new(TypeKind::Class, TYPE_NAME)
            .in_namespace(NAMESPACE)
            .with_interface(contract)
    ));

    let generation = Generator::new()
        .with_file_extension("generated.cs")
        .run(&model, &CancellationToken::new())
        .expect("generation succeeds");

    assert_eq!(
        generation.sources[0].file_name,
        "Billing.Commands.CalculatePlanAdjustmentParameters.Boilerplate.g.generated.cs"
    );
}
