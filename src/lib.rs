//! # oracle-command-codegen
//!
//! Source generator for Oracle command parameter boilerplate.
//!
//! Given a compiler-neutral model of type declarations whose members carry
//! directional parameter attributes, the generator synthesizes the C#
//! partial-type source that declares every parameter on the command,
//! copies property values into the input-bound parameters, and reads the
//! output-bound parameters back — one deterministic `(file key, text)`
//! pair per qualifying type.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use oracle_command_codegen::{
//!     CancellationToken, Generator,
//!     model::{AttributeUse, MemberSymbol, TypeKind, TypeModel, TypeSymbol, ValueType}
//! };
//!
//! let mut model = TypeModel::new();
//! let contract = model.add(TypeSymbol::new(TypeKind::Interface, "IOracleCommandParameters"));
//! model.add(
//!     TypeSymbol::new(TypeKind::Class, "GetCustomerParameters")
//!         .in_namespace("Billing.Commands")
//!         .with_interface(contract)
//!         .with_member(
//!             MemberSymbol::property("CustomerSsn", ValueType::new("System", "String"))
//!                 .with_attribute(
//!                     AttributeUse::new("OracleInputParameterAttribute")
//!                         .derived_from("OracleParameterAttributeBase")
//!                         .with_argument("OracleDbType.Varchar2")
//!                         .with_argument("100")
//!                 )
//!         )
//! );
//!
//! let generation = Generator::new().run(&model, &CancellationToken::new())?;
//! // generation.sources[0].file_name
//! //     == "Billing.Commands.GetCustomerParameters.Boilerplate.g.cs"
//! ```
//!
//! Processing is one-way and stateless: declarations → resolved parameter
//! model → emitted text → registered output. Each declaration is handled
//! independently, so a host may drive the generator concurrently across a
//! whole compilation unit.

pub mod cancel;
pub mod command;
pub mod error;
pub mod model;
pub mod names;
pub mod text;

pub use cancel::CancellationToken;
pub use command::{GeneratedSource, Generation, Generator};
pub use error::{Diagnostic, GeneratorError, TextError};
