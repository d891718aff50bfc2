//! Compiler-neutral type model consumed by the generator.
//!
//! A [`TypeModel`] is the input boundary of the crate: an arena of every
//! type declaration the host surfaces for one run, plus the semantic
//! queries the resolver needs — the full base-type chain, the interface
//! closure, and the member list including inherited members.
//!
//! The model is immutable once handed to the generator, and every query is
//! a pure function of it, so a host may process declarations concurrently
//! against a shared model.

mod symbols;

pub use symbols::{
    AttributeUse, MemberKind, MemberSymbol, TypeId, TypeKind, TypeSymbol, ValueType
};

use std::collections::{HashSet, VecDeque};

use serde::{Deserialize, Serialize};

/// Arena of the type declarations surfaced by the host for one run.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TypeModel {
    types: Vec<TypeSymbol>
}

/// Identity-carrying view of one member in the model.
///
/// The pair of declaring type and member index is the member's identity;
/// discovery deduplicates by it, never by name, so shadowed members stay
/// distinct.
#[derive(Clone, Copy, Debug)]
pub struct MemberRef<'a> {
    /// Type the member is declared on.
    pub declaring: TypeId,

    /// Index within the declaring type's member list.
    pub index: usize,

    /// The member itself.
    pub member: &'a MemberSymbol
}

impl TypeModel {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol and return its id.
    pub fn add(&mut self, symbol: TypeSymbol) -> TypeId {
        let id = TypeId(self.types.len());
        self.types.push(symbol);
        id
    }

    /// Look up a symbol.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this model.
    pub fn get(&self, id: TypeId) -> &TypeSymbol {
        &self.types[id.0]
    }

    /// Ids of every declaration, in the order they were added.
    pub fn ids(&self) -> impl Iterator<Item = TypeId> + '_ {
        (0..self.types.len()).map(TypeId)
    }

    /// Number of declarations in the model.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the model holds no declarations.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Full base-type chain of `id`, nearest base first.
    pub fn base_chain(&self, id: TypeId) -> Vec<TypeId> {
        let mut chain = Vec::new();
        let mut seen = HashSet::from([id]);
        let mut current = self.get(id).base_type;

        while let Some(base) = current {
            if !seen.insert(base) {
                // Malformed cycle; stop the walk
                break;
            }
            chain.push(base);
            current = self.get(base).base_type;
        }

        chain
    }

    /// Every interface reachable from `id`: interfaces listed on the type,
    /// on its base chain, and on those interfaces transitively.
    ///
    /// Breadth-first and deduplicated, so the order is stable for a given
    /// model.
    pub fn interface_closure(&self, id: TypeId) -> Vec<TypeId> {
        let mut pending: VecDeque<TypeId> = VecDeque::new();
        pending.extend(self.get(id).interfaces.iter().copied());
        for base in self.base_chain(id) {
            pending.extend(self.get(base).interfaces.iter().copied());
        }

        let mut closure = Vec::new();
        let mut seen = HashSet::new();
        while let Some(interface) = pending.pop_front() {
            if !seen.insert(interface) {
                continue;
            }
            closure.push(interface);
            pending.extend(self.get(interface).interfaces.iter().copied());
        }

        closure
    }

    /// Members of `id` including every inherited member.
    ///
    /// Discovery order is an observable contract of the generated
    /// parameter registration sequence: declared members first, then the
    /// base chain nearest base first, then the interface closure. Each
    /// declaring type is visited once, so members are deduplicated by
    /// identity.
    pub fn members_including_inherited(&self, id: TypeId) -> Vec<MemberRef<'_>> {
        let mut order = Vec::new();
        order.push(id);
        order.extend(self.base_chain(id));
        order.extend(self.interface_closure(id));

        let mut seen = HashSet::new();
        let mut members = Vec::new();
        for declaring in order {
            if !seen.insert(declaring) {
                continue;
            }
            for (index, member) in self.get(declaring).members.iter().enumerate() {
                members.push(MemberRef {
                    declaring,
                    index,
                    member
                });
            }
        }

        members
    }
}
