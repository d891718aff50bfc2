//! Candidate resolution against the marker contract.
//!
//! A type qualifies when `IOracleCommandParameters` appears anywhere in
//! its interface closure. Its base shape decides the generated method
//! header style: reaching the contract through the concrete
//! `OracleCommandParameters` base class gives override-style hooks, while
//! implementing the interface directly gives explicit-implementation
//! hooks.
//!
//! Member discovery walks the type's full visible member set, including
//! everything inherited through the base chain and the interface closure,
//! and keeps discovery order because it is the registration order of the
//! generated statements.

use tracing::warn;

use crate::{
    error::Diagnostic,
    model::{AttributeUse, MemberRef, TypeId, TypeModel, TypeSymbol},
    names
};

use super::parameters::{CommandParameter, Direction, ParameterCollection};

/// How a candidate reaches the marker contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BaseShape {
    /// Implements `IOracleCommandParameters` directly; hooks are emitted
    /// in explicit interface-implementation style.
    Interface,

    /// Derives from the concrete `OracleCommandParameters` base; hooks are
    /// emitted as protected overrides.
    Class,

    /// A record declaration deriving from the concrete base. Emits the
    /// same override-style hooks as [`BaseShape::Class`].
    Record
}

/// A type declaration that structurally qualifies for emission.
///
/// Built fresh per declaration, immutable once built, and discarded after
/// emission; nothing is cached across declarations.
#[derive(Debug)]
pub struct CandidateType<'a> {
    /// Id of the declaration in its model.
    pub id: TypeId,

    /// The declared symbol.
    pub symbol: &'a TypeSymbol,

    /// How the candidate reaches the marker contract.
    pub base_shape: BaseShape,

    /// Annotated members in discovery order.
    pub parameters: ParameterCollection
}

/// Resolve `id` against the marker contract.
///
/// Returns `None` when the type does not implement
/// `IOracleCommandParameters` anywhere in its interface closure — the
/// common case for every other type in a compilation unit, skipped
/// silently. Marker attributes of an unrecognized concrete kind are
/// recorded in `diagnostics` and excluded from the collection.
pub(crate) fn resolve<'a>(
    model: &'a TypeModel,
    id: TypeId,
    diagnostics: &mut Vec<Diagnostic>
) -> Option<CandidateType<'a>> {
    let symbol = model.get(id);

    let implements_contract = model
        .interface_closure(id)
        .into_iter()
        .any(|interface| model.get(interface).name == names::COMMAND_PARAMETERS_INTERFACE);
    if !implements_contract {
        return None;
    }

    let inherits_base_class = model
        .base_chain(id)
        .into_iter()
        .any(|base| model.get(base).name == names::COMMAND_PARAMETERS_CLASS);
    let base_shape = match (inherits_base_class, symbol.is_record) {
        (true, true) => BaseShape::Record,
        (true, false) => BaseShape::Class,
        (false, _) => BaseShape::Interface
    };

    let mut parameters = ParameterCollection::default();
    for member in model.members_including_inherited(id) {
        collect_member(symbol, &member, &mut parameters, diagnostics);
    }

    Some(CandidateType {
        id,
        symbol,
        base_shape,
        parameters
    })
}

/// Extract every parameter declared on one member.
///
/// A member may carry several marker attributes and contributes one
/// parameter per recognized attribute.
fn collect_member(
    candidate: &TypeSymbol,
    member: &MemberRef<'_>,
    parameters: &mut ParameterCollection,
    diagnostics: &mut Vec<Diagnostic>
) {
    if !member.member.is_field_or_property() {
        return;
    }

    for attribute in &member.member.attributes {
        if !is_parameter_attribute(attribute) {
            continue;
        }

        match Direction::from_attribute_name(&attribute.name) {
            Some(direction) => parameters.push(CommandParameter {
                name: member.member.name.clone(),
                direction,
                value_type: member.member.value_type.clone(),
                type_expression: attribute.arguments.first().cloned().unwrap_or_default(),
                size: literal_size(&attribute.arguments)
            }),
            None => {
                let diagnostic = Diagnostic::unknown_parameter_kind(
                    candidate.qualified_name(),
                    &member.member.name,
                    &attribute.name
                );
                warn!(
                    id = diagnostic.id,
                    member = %diagnostic.member_name,
                    "{}",
                    diagnostic.message
                );
                diagnostics.push(diagnostic);
            }
        }
    }
}

/// An attribute participates iff its class derives from the marker base.
fn is_parameter_attribute(attribute: &AttributeUse) -> bool {
    attribute
        .base_types
        .iter()
        .any(|base| base == names::PARAMETER_ATTRIBUTE_BASE)
}

/// Second constructor argument as a size, when it is a plain integer
/// literal. Anything else — absent, negative, or a non-literal expression
/// — means "no size", not an error.
fn literal_size(arguments: &[String]) -> Option<u32> {
    let argument = arguments.get(1)?.trim();
    if argument.is_empty() || !argument.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    argument.parse().ok()
}
