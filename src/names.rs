//! Well-known names of the runtime contract.
//!
//! The generator recognizes the marker contract and the parameter attributes
//! purely by name, the way a hosting compiler reports them. The runtime
//! library that declares these types is a separate, referenced assembly and
//! never part of the processed model itself.

/// Abstract base of the four parameter attribute kinds.
pub const PARAMETER_ATTRIBUTE_BASE: &str = "OracleParameterAttributeBase";

/// Attribute kind marking an `Input` parameter.
pub const INPUT_PARAMETER_ATTRIBUTE: &str = "OracleInputParameterAttribute";

/// Attribute kind marking an `Output` parameter.
pub const OUTPUT_PARAMETER_ATTRIBUTE: &str = "OracleOutputParameterAttribute";

/// Attribute kind marking an `InputOutput` parameter.
pub const INPUT_OUTPUT_PARAMETER_ATTRIBUTE: &str = "OracleInputOutputParameterAttribute";

/// Attribute kind marking a `ReturnValue` parameter.
pub const RETURN_VALUE_PARAMETER_ATTRIBUTE: &str = "OracleReturnValueParameterAttribute";

/// Marker interface a type must reach to qualify for generation.
pub const COMMAND_PARAMETERS_INTERFACE: &str = "IOracleCommandParameters";

/// Concrete base class providing the contract's default orchestration.
pub const COMMAND_PARAMETERS_CLASS: &str = "OracleCommandParameters";

/// Declaration keywords echoed into the generated partial type.
pub mod keywords {
    pub const CLASS: &str = "class";
    pub const STRUCT: &str = "struct";
    pub const RECORD: &str = "record";
    pub const RECORD_STRUCT: &str = "record struct";
}
