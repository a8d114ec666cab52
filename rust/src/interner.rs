//! Node interning for compact graph storage.
//!
//! Maps `(section, subject)` nodes to dense integer ids so adjacency can be
//! stored in a `Vec` indexed by id.

use rustc_hash::FxHashMap;

use crate::models::Node;

/// Interned node id (u32 for compact adjacency sets and fast hashing).
pub type NodeId = u32;

/// Bidirectional map between nodes and their dense ids.
///
/// Ids are handed out in first-seen order starting at 0.
#[derive(Debug, Clone, Default)]
pub struct NodeInterner {
    to_id: FxHashMap<Node, NodeId>,
    from_id: Vec<Node>,
}

impl NodeInterner {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            to_id: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            from_id: Vec::with_capacity(capacity),
        }
    }

    /// Intern a node, returning its id. Re-interning returns the existing id.
    pub fn intern(&mut self, node: &Node) -> NodeId {
        if let Some(&id) = self.to_id.get(node) {
            return id;
        }
        let id = self.from_id.len() as NodeId;
        self.from_id.push(node.clone());
        self.to_id.insert(node.clone(), id);
        id
    }

    #[inline]
    pub fn get(&self, node: &Node) -> Option<NodeId> {
        self.to_id.get(node).copied()
    }

    #[inline]
    pub fn resolve(&self, id: NodeId) -> Option<&Node> {
        self.from_id.get(id as usize)
    }

    /// All interned nodes, indexed by id.
    pub fn nodes(&self) -> &[Node] {
        &self.from_id
    }

    pub fn len(&self) -> usize {
        self.from_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.from_id.is_empty()
    }
}
