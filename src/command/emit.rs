// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Source text emission for a resolved candidate.
//!
//! The generated unit is a fixed using-line block, a blank line, then a
//! partial-type declaration — wrapped in a namespace block iff the
//! candidate's namespace is non-global — containing exactly three methods
//! in fixed order: `SetParameters`, `SetInputParameters`, `ReadOutput`,
//! separated by one blank line each. Four-space indentation, CRLF line
//! terminator, byte-for-byte deterministic.

use crate::{
    error::GeneratorError,
    model::TypeKind,
    names::keywords,
    text::{CodeBuilder, DEFAULT_NEWLINE}
};

use super::{
    parameters::CommandParameter,
    resolve::{BaseShape, CandidateType}
};

/// Import lines prefixed to every generated unit, in fixed order.
///
/// This is a textual prefix, not a semantic merge; nothing is deduplicated
/// against the original file's own imports.
pub const DEFAULT_USINGS: [&str; 5] = [
    "using OracleCommandGenerator;",
    "using Oracle.ManagedDataAccess.Client;",
    "using Oracle.ManagedDataAccess.Types;",
    "using System;",
    "using System.Data;"
];

const INDENT_SIZE: usize = 4;

/// One generated source unit, keyed for registration with the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedSource {
    /// Deterministic file key:
    /// `{FullyQualifiedTypeName}.Boilerplate.g.{ext}`.
    pub file_name: String,

    /// The generated text.
    pub text: String
}

/// Emit the boilerplate unit for one candidate.
pub(crate) fn emit(
    candidate: &CandidateType<'_>,
    file_extension: &str
) -> Result<GeneratedSource, GeneratorError> {
    // Resolve the keyword before building any text, so an invariant
    // violation cannot leave partially-formed output behind.
    let keyword = declaration_keyword(candidate)
        .ok_or_else(|| GeneratorError::UnsupportedTypeKind(candidate.symbol.qualified_name()))?;

    let mut builder = CodeBuilder::new(' ', INDENT_SIZE);
    match &candidate.symbol.namespace {
        Some(namespace) => {
            builder.append_line(&format!("namespace {namespace}"));
            let mut block = builder.bracket_block();
            emit_partial(&mut block, candidate, keyword);
        }
        None => emit_partial(&mut builder, candidate, keyword)
    }

    let text = with_usings(&builder.into_text());
    let file_name = format!(
        "{}.Boilerplate.g.{file_extension}",
        candidate.symbol.qualified_name()
    );

    Ok(GeneratedSource { file_name, text })
}

/// Declaration keyword echoed into the generated partial type.
///
/// Mirrors the source keyword with one legacy exception: a source
/// `record class` is echoed back as plain `record`, for C# 9.0
/// compatibility.
fn declaration_keyword(candidate: &CandidateType<'_>) -> Option<&'static str> {
    match candidate.symbol.kind {
        TypeKind::Struct if candidate.symbol.is_record => Some(keywords::RECORD_STRUCT),
        TypeKind::Struct => Some(keywords::STRUCT),
        TypeKind::Class if candidate.symbol.is_record => Some(keywords::RECORD),
        TypeKind::Class => Some(keywords::CLASS),
        _ => None
    }
}

fn emit_partial(builder: &mut CodeBuilder, candidate: &CandidateType<'_>, keyword: &str) {
    builder.append_line(&format!("partial {keyword} {}", candidate.symbol.name));
    let mut body = builder.bracket_block();
    emit_set_parameters(&mut body, candidate);
    body.newline();
    emit_set_input_parameters(&mut body, candidate);
    body.newline();
    emit_read_output(&mut body, candidate);
}

/// Method header prefix by base shape.
///
/// The shape enum is closed, so the "neither shape" case the original
/// design guarded against is unrepresentable here.
fn signature_header(base_shape: BaseShape) -> &'static str {
    match base_shape {
        BaseShape::Interface => "void IOracleCommandParameters.",
        BaseShape::Class | BaseShape::Record => "protected override void "
    }
}

fn emit_set_parameters(builder: &mut CodeBuilder, candidate: &CandidateType<'_>) {
    let header = signature_header(candidate.base_shape);
    builder.append_line(&format!("{header}SetParameters(OracleCommand command)"));
    let mut block = builder.bracket_block();
    for parameter in candidate.parameters.iter() {
        block.append_line(&declare_statement(parameter));
    }
}

fn declare_statement(parameter: &CommandParameter) -> String {
    let size_suffix = match parameter.size {
        Some(size) => format!(", {size}"),
        None => String::new()
    };

    format!(
        "command.Parameters.Add(nameof({name}), {type_expression}{size_suffix}, \
         ParameterDirection.{direction}, null);",
        name = parameter.name,
        type_expression = parameter.type_expression,
        direction = parameter.direction
    )
}

fn emit_set_input_parameters(builder: &mut CodeBuilder, candidate: &CandidateType<'_>) {
    let header = signature_header(candidate.base_shape);
    builder.append_line(&format!("{header}SetInputParameters(OracleCommand command)"));
    let mut block = builder.bracket_block();
    for parameter in candidate.parameters.outgoing() {
        block.append_line(&format!(
            "command.Parameters[nameof({name})].Value = {name};",
            name = parameter.name
        ));
    }
}

fn emit_read_output(builder: &mut CodeBuilder, candidate: &CandidateType<'_>) {
    let header = signature_header(candidate.base_shape);
    builder.append_line(&format!("{header}ReadOutput(OracleCommand command)"));
    let mut block = builder.bracket_block();
    for parameter in candidate.parameters.incoming() {
        block.append_line(&format!(
            "{name} = ({cast})command.Parameters[nameof({name})].Value;",
            name = parameter.name,
            cast = parameter.value_type.fully_qualified()
        ));
    }
}

/// Prefix the fixed using block and a separating blank line.
fn with_usings(source: &str) -> String {
    let mut text = String::new();
    for using in DEFAULT_USINGS {
        text.push_str(using);
        text.push_str(DEFAULT_NEWLINE);
    }
    text.push_str(DEFAULT_NEWLINE);
    text.push_str(source);
    text
}
