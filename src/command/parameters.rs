//! Parameter descriptors and their direction-partitioned views.

use std::fmt;

use crate::{model::ValueType, names};

/// Role of a parameter relative to the command.
///
/// Discriminants mirror `System.Data.ParameterDirection`. There is no
/// `Unknown` variant: an attribute kind that cannot be mapped never enters
/// a collection and surfaces as a diagnostic instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Written to the command, never read back.
    Input = 1,

    /// Read back from the command, never written.
    Output = 2,

    /// Both written and read back.
    InputOutput = 3,

    /// Command-level result, read back only.
    ReturnValue = 6
}

impl Direction {
    /// Map a concrete attribute class name to its direction.
    ///
    /// Returns `None` for kinds that match the marker base but are not one
    /// of the four recognized attributes.
    pub fn from_attribute_name(name: &str) -> Option<Self> {
        match name {
            names::INPUT_PARAMETER_ATTRIBUTE => Some(Self::Input),
            names::OUTPUT_PARAMETER_ATTRIBUTE => Some(Self::Output),
            names::INPUT_OUTPUT_PARAMETER_ATTRIBUTE => Some(Self::InputOutput),
            names::RETURN_VALUE_PARAMETER_ATTRIBUTE => Some(Self::ReturnValue),
            _ => None
        }
    }

    /// Whether the parameter participates in input-value assignment.
    pub fn is_outgoing(self) -> bool {
        matches!(self, Self::Input | Self::InputOutput)
    }

    /// Whether the parameter participates in output-value extraction.
    pub fn is_incoming(self) -> bool {
        matches!(self, Self::Output | Self::InputOutput | Self::ReturnValue)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Input => "Input",
            Self::Output => "Output",
            Self::InputOutput => "InputOutput",
            Self::ReturnValue => "ReturnValue"
        };
        f.write_str(name)
    }
}

/// One annotated member, ready for emission.
#[derive(Clone, Debug)]
pub struct CommandParameter {
    /// Member identifier, unique within the candidate's visible members.
    pub name: String,

    /// Which of the three generated methods the parameter participates in.
    pub direction: Direction,

    /// Resolved member type, used only for the output-read cast.
    pub value_type: ValueType,

    /// First attribute argument, an opaque database-type tag passed
    /// through verbatim.
    pub type_expression: String,

    /// Optional size from the second attribute argument, present only
    /// when that argument is a literal integer.
    pub size: Option<u32>
}

/// Ordered parameter set of one candidate type.
///
/// Order is member discovery order; it becomes the parameter registration
/// sequence of the generated code and is therefore observable.
#[derive(Clone, Debug, Default)]
pub struct ParameterCollection {
    parameters: Vec<CommandParameter>
}

impl ParameterCollection {
    /// Append a parameter, preserving discovery order.
    pub fn push(&mut self, parameter: CommandParameter) {
        self.parameters.push(parameter);
    }

    /// All parameters in discovery order.
    pub fn iter(&self) -> std::slice::Iter<'_, CommandParameter> {
        self.parameters.iter()
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Whether the candidate declared no parameters.
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Parameters with direction `Input` or `InputOutput`, in discovery
    /// order.
    pub fn outgoing(&self) -> impl Iterator<Item = &CommandParameter> {
        self.parameters
            .iter()
            .filter(|parameter| parameter.direction.is_outgoing())
    }

    /// Parameters with direction `Output`, `InputOutput` or `ReturnValue`,
    /// in discovery order.
    pub fn incoming(&self) -> impl Iterator<Item = &CommandParameter> {
        self.parameters
            .iter()
            .filter(|parameter| parameter.direction.is_incoming())
    }
}

impl<'a> IntoIterator for &'a ParameterCollection {
    type Item = &'a CommandParameter;
    type IntoIter = std::slice::Iter<'a, CommandParameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.parameters.iter()
    }
}
