//! Type table — named types, qualifier-flagged types, and typedef layers.

use serde::{Deserialize, Serialize};

/// Index of a type within its `TypeTable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeId(pub u32);

/// const/volatile bits carried by a qualifier-flagged type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Qualifiers {
    pub is_const: bool,
    pub is_volatile: bool,
}

impl Qualifiers {
    pub fn const_only() -> Self {
        Self {
            is_const: true,
            is_volatile: false,
        }
    }

    pub fn volatile_only() -> Self {
        Self {
            is_const: false,
            is_volatile: true,
        }
    }
}

/// A node in the type table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypeNode {
    /// Plain type definition with no qualifier bits.
    Named { name: String },
    /// Qualifier-flagged type wrapping a base type.
    Qualified { qualifiers: Qualifiers, base: TypeId },
    /// A typedef layer pointing at its target.
    Alias { name: String, target: TypeId },
    /// An alias chain the host could not resolve further.
    Unresolved,
}

/// All type nodes of one translation unit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypeTable {
    nodes: Vec<TypeNode>,
}

impl TypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, node: TypeNode) -> TypeId {
        let id = TypeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    pub fn named(&mut self, name: impl Into<String>) -> TypeId {
        self.push(TypeNode::Named { name: name.into() })
    }

    pub fn qualified(&mut self, qualifiers: Qualifiers, base: TypeId) -> TypeId {
        self.push(TypeNode::Qualified { qualifiers, base })
    }

    pub fn alias(&mut self, name: impl Into<String>, target: TypeId) -> TypeId {
        self.push(TypeNode::Alias {
            name: name.into(),
            target,
        })
    }

    pub fn unresolved(&mut self) -> TypeId {
        self.push(TypeNode::Unresolved)
    }

    pub fn get(&self, id: TypeId) -> Option<&TypeNode> {
        self.nodes.get(id.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Resolve through typedef layers to the underlying definition.
    ///
    /// The walk is capped at the table size so a malformed (cyclic) alias
    /// chain still terminates; a cycle resolves to the last node visited.
    pub fn skip_typedefs(&self, id: TypeId) -> TypeId {
        let mut current = id;
        for _ in 0..self.nodes.len() {
            match self.get(current) {
                Some(TypeNode::Alias { target, .. }) => current = *target,
                _ => break,
            }
        }
        current
    }

    /// Whether the type resolves to a qualifier-flagged definition whose
    /// const bit is set.
    ///
    /// Unresolvable or unflagged types are treated as non-const; the
    /// classification is strictly two-way.
    pub fn is_const_qualified(&self, id: TypeId) -> bool {
        matches!(
            self.get(self.skip_typedefs(id)),
            Some(TypeNode::Qualified { qualifiers, .. }) if qualifiers.is_const
        )
    }
}
