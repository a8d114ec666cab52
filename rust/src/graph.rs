//! Conflict graph over `(section, subject)` nodes.
//!
//! Two nodes are adjacent when at least one teacher teaches both, so they can
//! never share a time slot. Each teacher contributes a clique; the global
//! graph is the union of those cliques.

use std::collections::{BTreeMap, BTreeSet};

use rustc_hash::FxHashSet;

use crate::interner::{NodeId, NodeInterner};
use crate::log_summary;
use crate::models::Node;
use crate::roster::Roster;

/// Undirected graph stored as one neighbor set per interned node.
///
/// Invariant: adjacency is symmetric and contains no self-loops.
#[derive(Debug, Clone, Default)]
pub struct ConflictGraph {
    interner: NodeInterner,
    adjacency: Vec<FxHashSet<NodeId>>,
}

impl ConflictGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the clique formed by one teacher's assignments.
    ///
    /// Every node is added even if it has no neighbors, so a teacher with a
    /// single assignment still contributes that node. Duplicate entries
    /// collapse into one node and never produce a self-loop.
    pub fn clique(assignments: &[Node]) -> Self {
        let mut graph = Self::new();
        let ids: Vec<NodeId> = assignments.iter().map(|n| graph.add_node(n)).collect();
        for &a in &ids {
            for &b in &ids {
                graph.add_edge(a, b);
            }
        }
        graph
    }

    /// Add a node if not present and return its id.
    pub fn add_node(&mut self, node: &Node) -> NodeId {
        let id = self.interner.intern(node);
        if id as usize == self.adjacency.len() {
            self.adjacency.push(FxHashSet::default());
        }
        id
    }

    /// Connect two nodes. Self-edges are ignored.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) {
        if a == b {
            return;
        }
        self.adjacency[a as usize].insert(b);
        self.adjacency[b as usize].insert(a);
    }

    /// Union another graph into this one.
    ///
    /// Neighbor sets are merged with set union, so merging the same graph
    /// twice leaves the adjacency unchanged.
    pub fn merge(&mut self, other: &ConflictGraph) {
        // Map other's ids into ours first so isolated nodes survive the merge
        let mapping: Vec<NodeId> = other.interner.nodes().iter().map(|n| self.add_node(n)).collect();

        for (other_id, neighbors) in other.adjacency.iter().enumerate() {
            let id = mapping[other_id];
            for &other_neighbor in neighbors {
                self.add_edge(id, mapping[other_neighbor as usize]);
            }
        }
    }

    /// Build the global graph: one clique per teacher, merged in ascending teacher id.
    pub fn from_roster(roster: &Roster, verbosity: u8) -> Self {
        let mut graph = Self::new();
        for (teacher, assignments) in roster.teachers() {
            let clique = Self::clique(assignments);
            log_summary!(
                verbosity,
                "[graph] teacher {}: {} nodes in clique",
                teacher,
                clique.node_count()
            );
            graph.merge(&clique);
        }
        log_summary!(
            verbosity,
            "[graph] merged {} teachers into {} nodes, {} edges",
            roster.teacher_count(),
            graph.node_count(),
            graph.edge_count()
        );
        graph
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|n| n.len()).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Node for an id, if the id exists.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.interner.resolve(id)
    }

    pub fn id_of(&self, node: &Node) -> Option<NodeId> {
        self.interner.get(node)
    }

    /// All nodes, indexed by id.
    pub fn nodes(&self) -> &[Node] {
        self.interner.nodes()
    }

    pub fn neighbors(&self, id: NodeId) -> &FxHashSet<NodeId> {
        &self.adjacency[id as usize]
    }

    pub fn degree(&self, id: NodeId) -> usize {
        self.adjacency[id as usize].len()
    }

    pub fn are_adjacent(&self, a: &Node, b: &Node) -> bool {
        match (self.id_of(a), self.id_of(b)) {
            (Some(a), Some(b)) => self.adjacency[a as usize].contains(&b),
            _ => false,
        }
    }

    /// Ordered copy of the adjacency, independent of id assignment.
    pub fn adjacency(&self) -> BTreeMap<Node, BTreeSet<Node>> {
        let nodes = self.interner.nodes();
        self.adjacency
            .iter()
            .enumerate()
            .map(|(id, neighbors)| {
                let set = neighbors
                    .iter()
                    .map(|&n| nodes[n as usize].clone())
                    .collect();
                (nodes[id].clone(), set)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(label: &str) -> Node {
        let (section, subject) = label.split_once(' ').unwrap();
        Node::new(section, subject)
    }

    fn roster(rows: &[(u32, &[&str])]) -> Roster {
        let mut roster = Roster::new();
        for (teacher, entries) in rows {
            for entry in *entries {
                roster.add_entry(*teacher, entry).unwrap();
            }
        }
        roster
    }

    #[test]
    fn test_clique_connects_every_pair() {
        let nodes = vec![node("A Math"), node("B Math"), node("C Math"), node("D Math")];
        let graph = ConflictGraph::clique(&nodes);

        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 6);
        for a in &nodes {
            for b in &nodes {
                assert_eq!(graph.are_adjacent(a, b), a != b);
            }
        }
    }

    #[test]
    fn test_single_assignment_has_node_but_no_edges() {
        let graph = ConflictGraph::clique(&[node("A English")]);
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.degree(0), 0);

        assert!(ConflictGraph::clique(&[]).is_empty());
    }

    #[test]
    fn test_duplicate_assignments_do_not_self_loop() {
        let graph = ConflictGraph::clique(&[node("A Math"), node("A Math"), node("B Math")]);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert!(!graph.are_adjacent(&node("A Math"), &node("A Math")));
    }

    #[test]
    fn test_merge_is_union_and_idempotent() {
        let first = ConflictGraph::clique(&[node("A Math"), node("B Math")]);
        let second = ConflictGraph::clique(&[node("B Math"), node("C Physics")]);

        let mut once = ConflictGraph::new();
        once.merge(&first);
        once.merge(&second);

        let mut twice = once.clone();
        twice.merge(&first);
        twice.merge(&second);

        assert_eq!(once.adjacency(), twice.adjacency());
        assert_eq!(once.node_count(), 3);
        assert_eq!(once.edge_count(), 2);
        assert_eq!(once.degree(once.id_of(&node("B Math")).unwrap()), 2);
        // A and C never share a teacher
        assert!(!once.are_adjacent(&node("A Math"), &node("C Physics")));
    }

    #[test]
    fn test_merge_order_does_not_change_adjacency() {
        let first = ConflictGraph::clique(&[node("A Math"), node("B Math"), node("A Art")]);
        let second = ConflictGraph::clique(&[node("A Art"), node("C Art")]);

        let mut forward = ConflictGraph::new();
        forward.merge(&first);
        forward.merge(&second);

        let mut backward = ConflictGraph::new();
        backward.merge(&second);
        backward.merge(&first);

        assert_eq!(forward.adjacency(), backward.adjacency());
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        let graph = ConflictGraph::from_roster(
            &roster(&[
                (1, &["A Math", "B Math", "C Math"]),
                (2, &["A English", "B Math"]),
                (3, &["C History"]),
            ]),
            0,
        );
        let adjacency = graph.adjacency();
        for (a, neighbors) in &adjacency {
            assert!(!neighbors.contains(a));
            for b in neighbors {
                assert!(adjacency[b].contains(a), "{} -> {} not mirrored", a, b);
            }
        }
    }

    #[test]
    fn test_from_roster_clique_property() {
        let rows: &[(u32, &[&str])] = &[
            (1, &["A Math", "B Math"]),
            (2, &["A English"]),
            (3, &["B English", "C English", "A History"]),
        ];
        let graph = ConflictGraph::from_roster(&roster(rows), 0);

        assert_eq!(graph.node_count(), 6);
        for (_, entries) in rows {
            for a in *entries {
                for b in *entries {
                    if a != b {
                        assert!(graph.are_adjacent(&node(a), &node(b)));
                    }
                }
            }
        }
        assert!(!graph.are_adjacent(&node("A Math"), &node("A English")));
        assert_eq!(graph.edge_count(), 1 + 3);
    }

    #[test]
    fn test_empty_roster_gives_empty_graph() {
        let graph = ConflictGraph::from_roster(&Roster::new(), 0);
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.adjacency().is_empty());
    }
}
