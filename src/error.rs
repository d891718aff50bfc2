//! Error taxonomy and reportable diagnostics.
//!
//! Resolution failures are local and non-fatal: a type that does not
//! qualify simply produces no output. Only cancellation and internal
//! invariant violations abort a run. Defects worth surfacing to the user
//! without aborting, such as an unrecognized parameter attribute kind, are
//! collected as [`Diagnostic`]s alongside the generated sources.

use thiserror::Error;

/// Failure of the text buffer layer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TextError {
    /// Buffers cannot be constructed without room for at least one character.
    #[error("initial capacity must be greater than zero")]
    InvalidCapacity
}

/// Failure of a generation run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    /// The cancellation token was signalled before the run finished.
    #[error("generation was cancelled")]
    Cancelled,

    /// A candidate reached emission without an emittable declaration
    /// keyword. The driver's filter makes this unreachable; it exists so
    /// that a violated invariant surfaces as an error instead of
    /// partially-formed output.
    #[error("type `{0}` has no emittable declaration keyword")]
    UnsupportedTypeKind(String)
}

/// Identifier of the unknown-parameter-kind diagnostic.
pub const UNKNOWN_PARAMETER_KIND: &str = "OCG0001";

/// A defect discovered during resolution that does not abort the run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Stable identifier, e.g. [`UNKNOWN_PARAMETER_KIND`].
    pub id: &'static str,

    /// Qualified name of the type under resolution.
    pub type_name: String,

    /// Member the defect was found on.
    pub member_name: String,

    /// Human-readable description.
    pub message: String
}

impl Diagnostic {
    /// An attribute derives from the parameter marker base but is not one
    /// of the four recognized kinds. The member vanishes from all three
    /// generated methods, which is worth telling the user about.
    pub fn unknown_parameter_kind(
        type_name: impl Into<String>,
        member_name: impl Into<String>,
        attribute_name: &str
    ) -> Self {
        Self {
            id: UNKNOWN_PARAMETER_KIND,
            type_name: type_name.into(),
            member_name: member_name.into(),
            message: format!(
                "attribute `{attribute_name}` derives from `OracleParameterAttributeBase` \
                 but is not a recognized parameter kind; the member is omitted from all \
                 generated methods"
            )
        }
    }
}
