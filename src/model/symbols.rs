//! Symbol shapes delivered by the hosting compiler.
//!
//! These are plain data mirrors of what a semantic analysis layer knows
//! about a declaration: its kind, its base type, the interfaces it lists,
//! its members, and the attributes attached to them. The generator never
//! reads source text; everything it needs arrives through these shapes.
//!
//! All of them derive [`serde`] traits so a host can hand a model across a
//! process boundary as data.

use serde::{Deserialize, Serialize};

/// Index of a type inside its [`TypeModel`](super::TypeModel).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeId(pub(crate) usize);

/// Declaration category of a type symbol.
///
/// `record` and `record struct` declarations are represented as their base
/// kind plus [`TypeSymbol::is_record`], the way a compiler reports them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeKind {
    Class,
    Struct,
    Interface,
    Enum,
    Delegate
}

/// A declared type together with its semantic surroundings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypeSymbol {
    /// Unqualified type name.
    pub name: String,

    /// Containing namespace; `None` means the global namespace.
    #[serde(default)]
    pub namespace: Option<String>,

    /// Declaration category.
    pub kind: TypeKind,

    /// Whether the declaration used a `record` keyword form.
    #[serde(default)]
    pub is_record: bool,

    /// Direct base type, if any.
    #[serde(default)]
    pub base_type: Option<TypeId>,

    /// Interfaces listed directly on the declaration.
    #[serde(default)]
    pub interfaces: Vec<TypeId>,

    /// Members in declaration order.
    #[serde(default)]
    pub members: Vec<MemberSymbol>
}

impl TypeSymbol {
    /// Create a symbol in the global namespace with no members.
    pub fn new(kind: TypeKind, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            kind,
            is_record: false,
            base_type: None,
            interfaces: Vec::new(),
            members: Vec::new()
        }
    }

    /// Place the type in a namespace.
    pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Mark the declaration as a `record` form of its kind.
    pub fn as_record(mut self) -> Self {
        self.is_record = true;
        self
    }

    /// Set the direct base type.
    pub fn with_base_type(mut self, base: TypeId) -> Self {
        self.base_type = Some(base);
        self
    }

    /// Add a directly listed interface.
    pub fn with_interface(mut self, interface: TypeId) -> Self {
        self.interfaces.push(interface);
        self
    }

    /// Append a member.
    pub fn with_member(mut self, member: MemberSymbol) -> Self {
        self.members.push(member);
        self
    }

    /// Namespace-qualified name, or the bare name for global types.
    pub fn qualified_name(&self) -> String {
        match &self.namespace {
            Some(namespace) => format!("{namespace}.{}", self.name),
            None => self.name.clone()
        }
    }
}

/// Category of a type member.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberKind {
    Field,
    Property,
    Method
}

/// One member of a type.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MemberSymbol {
    /// Member identifier, unique within the declaring type.
    pub name: String,

    /// Member category. Only fields and properties can carry parameters.
    pub kind: MemberKind,

    /// Resolved value type of the member (return type for methods).
    pub value_type: ValueType,

    /// Attributes attached to the member.
    #[serde(default)]
    pub attributes: Vec<AttributeUse>
}

impl MemberSymbol {
    /// Create a field member.
    pub fn field(name: impl Into<String>, value_type: ValueType) -> Self {
        Self::new(MemberKind::Field, name, value_type)
    }

    /// Create a property member.
    pub fn property(name: impl Into<String>, value_type: ValueType) -> Self {
        Self::new(MemberKind::Property, name, value_type)
    }

    /// Create a method member with the given return type.
    pub fn method(name: impl Into<String>, value_type: ValueType) -> Self {
        Self::new(MemberKind::Method, name, value_type)
    }

    fn new(kind: MemberKind, name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            kind,
            value_type,
            attributes: Vec::new()
        }
    }

    /// Attach an attribute.
    pub fn with_attribute(mut self, attribute: AttributeUse) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Whether the member can carry parameter attributes.
    pub fn is_field_or_property(&self) -> bool {
        matches!(self.kind, MemberKind::Field | MemberKind::Property)
    }
}

/// Fully resolved type of a member, independent of any source-level alias.
///
/// The host's semantic layer resolves aliases before building the model,
/// so the generated output-read cast never mentions an alias.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueType {
    /// Containing namespace; `None` for global types.
    #[serde(default)]
    pub namespace: Option<String>,

    /// Unqualified type name.
    pub name: String
}

impl ValueType {
    /// A type inside a namespace.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
            name: name.into()
        }
    }

    /// A type in the global namespace.
    pub fn global(name: impl Into<String>) -> Self {
        Self {
            namespace: None,
            name: name.into()
        }
    }

    /// `global::`-prefixed display form, immune to local alias collisions.
    pub fn fully_qualified(&self) -> String {
        match &self.namespace {
            Some(namespace) => format!("global::{namespace}.{}", self.name),
            None => format!("global::{}", self.name)
        }
    }
}

/// One attribute application as reported by the host.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AttributeUse {
    /// Concrete attribute class name.
    pub name: String,

    /// Base-type names of the attribute class, nearest first.
    #[serde(default)]
    pub base_types: Vec<String>,

    /// Raw constructor argument expressions, verbatim.
    #[serde(default)]
    pub arguments: Vec<String>
}

impl AttributeUse {
    /// Create an attribute application with no arguments.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_types: Vec::new(),
            arguments: Vec::new()
        }
    }

    /// Record a base type of the attribute class.
    pub fn derived_from(mut self, base: impl Into<String>) -> Self {
        self.base_types.push(base.into());
        self
    }

    /// Append a constructor argument expression.
    pub fn with_argument(mut self, argument: impl Into<String>) -> Self {
        self.arguments.push(argument.into());
        self
    }
}
