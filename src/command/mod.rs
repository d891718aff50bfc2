//! Boilerplate generation driver.
//!
//! Each declaration runs through a small state machine with terminal
//! states skip and emit:
//!
//! 1. **Filter** — cheap shape check, before any semantic work.
//! 2. **Resolve** — qualification against the marker contract
//!    ([`resolve`]).
//! 3. **Classify** — interface declarations are excluded from emission
//!    even though resolution succeeded.
//! 4. **Emit** — the three-method partial type, registered under its
//!    deterministic file key ([`emit`]).
//!
//! Declarations are processed independently, with no shared mutable state
//! and no ordering dependency between them; the host may fan
//! [`Generator::generate_type`] out across declarations however it likes.

mod emit;
mod parameters;
mod resolve;

pub use emit::{DEFAULT_USINGS, GeneratedSource};
pub use parameters::{CommandParameter, Direction, ParameterCollection};
pub use resolve::{BaseShape, CandidateType};

use tracing::{debug, trace};

use crate::{
    cancel::CancellationToken,
    error::{Diagnostic, GeneratorError},
    model::{TypeId, TypeKind, TypeModel}
};

/// Extension of registered file keys unless overridden.
pub const DEFAULT_FILE_EXTENSION: &str = "cs";

/// Everything one run produced: registered sources plus surfaced defects.
#[derive(Clone, Debug, Default)]
pub struct Generation {
    /// Generated units in model order.
    pub sources: Vec<GeneratedSource>,

    /// Defects worth reporting that did not abort the run.
    pub diagnostics: Vec<Diagnostic>
}

/// The boilerplate generator.
///
/// Stateless across declarations; one instance may serve many runs,
/// concurrently if the host chooses.
#[derive(Clone, Debug)]
pub struct Generator {
    file_extension: String
}

impl Default for Generator {
    fn default() -> Self {
        Self {
            file_extension: DEFAULT_FILE_EXTENSION.into()
        }
    }
}

impl Generator {
    /// Create a generator with the default file extension.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the extension of registered file keys.
    pub fn with_file_extension(mut self, extension: impl Into<String>) -> Self {
        self.file_extension = extension.into();
        self
    }

    /// Process every declaration in the model.
    ///
    /// The token is checked before resolving each declaration;
    /// cancellation aborts the whole run with [`GeneratorError::Cancelled`]
    /// rather than returning partial output.
    pub fn run(
        &self,
        model: &TypeModel,
        token: &CancellationToken
    ) -> Result<Generation, GeneratorError> {
        let mut generation = Generation::default();

        for id in model.ids() {
            if token.is_cancelled() {
                return Err(GeneratorError::Cancelled);
            }

            if let Some(source) = self.generate_type(model, id, &mut generation.diagnostics)? {
                generation.sources.push(source);
            }
        }

        Ok(generation)
    }

    /// Run the per-declaration state machine for a single declaration.
    ///
    /// Returns `Ok(None)` for every skip: non-type shapes, types that do
    /// not implement the marker contract, and interface declarations.
    pub fn generate_type(
        &self,
        model: &TypeModel,
        id: TypeId,
        diagnostics: &mut Vec<Diagnostic>
    ) -> Result<Option<GeneratedSource>, GeneratorError> {
        let symbol = model.get(id);

        // Syntactic filter first; enums and delegates never reach the
        // symbol queries.
        if !matches!(
            symbol.kind,
            TypeKind::Class | TypeKind::Struct | TypeKind::Interface
        ) {
            return Ok(None);
        }

        let Some(candidate) = resolve::resolve(model, id, diagnostics) else {
            trace!(type_name = %symbol.qualified_name(), "not a command parameter type");
            return Ok(None);
        };

        // Interface declarations resolve but never emit.
        if symbol.kind == TypeKind::Interface {
            trace!(
                type_name = %symbol.qualified_name(),
                "interface declaration excluded from emission"
            );
            return Ok(None);
        }

        let source = emit::emit(&candidate, &self.file_extension)?;
        debug!(file = %source.file_name, "registered boilerplate source");
        Ok(Some(source))
    }
}
