//! Greedy first-fit coloring of the conflict graph.
//!
//! Nodes are visited by degree descending; ties are broken by node order
//! (section, then subject). Each node takes the smallest positive color not
//! already used by a colored neighbor. The result is a proper coloring, not
//! a minimum one.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::graph::ConflictGraph;
use crate::interner::NodeId;
use crate::models::{ColorReport, Node};
use crate::{log_debug, log_decisions, log_summary};

/// Positive, 1-based color.
pub type Color = u32;

/// Color per node plus the color classes derived from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coloring {
    color_of: FxHashMap<Node, Color>,
    /// color -> nodes, each class in the order its nodes were colored
    classes: BTreeMap<Color, Vec<Node>>,
}

impl Coloring {
    fn assign(&mut self, node: &Node, color: Color) {
        self.color_of.insert(node.clone(), color);
        self.classes.entry(color).or_default().push(node.clone());
    }

    pub fn color(&self, node: &Node) -> Option<Color> {
        self.color_of.get(node).copied()
    }

    /// Color classes in ascending color.
    ///
    /// Under first-fit a color is first used only after every smaller color,
    /// so ascending order is also the order colors were first assigned.
    pub fn classes(&self) -> &BTreeMap<Color, Vec<Node>> {
        &self.classes
    }

    /// Number of distinct colors used.
    pub fn color_count(&self) -> usize {
        self.classes.len()
    }

    pub fn node_count(&self) -> usize {
        self.color_of.len()
    }

    /// Nodes per color.
    pub fn usage(&self) -> BTreeMap<Color, usize> {
        self.classes
            .iter()
            .map(|(&color, nodes)| (color, nodes.len()))
            .collect()
    }

    /// Check that every node of `graph` is colored and no edge joins equal colors.
    pub fn is_proper(&self, graph: &ConflictGraph) -> bool {
        graph.nodes().iter().enumerate().all(|(id, node)| {
            let Some(color) = self.color(node) else {
                return false;
            };
            graph.neighbors(id as NodeId).iter().all(|&n| {
                graph
                    .node(n)
                    .and_then(|neighbor| self.color(neighbor))
                    .is_some_and(|c| c != color)
            })
        })
    }

    /// Diagnostic view: nodes and usage count per color.
    pub fn report(&self) -> ColorReport {
        ColorReport {
            color_nodes: self
                .classes
                .iter()
                .map(|(&color, nodes)| (color, nodes.iter().map(Node::label).collect()))
                .collect(),
            color_usage: self.usage().into_iter().collect(),
        }
    }
}

/// Node ids sorted by degree descending, ties broken by node order.
pub fn degree_order(graph: &ConflictGraph) -> Vec<NodeId> {
    let nodes = graph.nodes();
    let mut order: Vec<NodeId> = (0..graph.node_count() as NodeId).collect();
    order.sort_by(|&a, &b| {
        Reverse(graph.degree(a))
            .cmp(&Reverse(graph.degree(b)))
            .then_with(|| nodes[a as usize].cmp(&nodes[b as usize]))
    });
    order
}

/// Color `graph` with degree-ordered greedy first-fit.
///
/// Never fails; an empty graph yields an empty coloring.
pub fn color_graph(graph: &ConflictGraph, verbosity: u8) -> Coloring {
    let nodes = graph.nodes();
    let mut coloring = Coloring::default();
    let mut colors: Vec<Option<Color>> = vec![None; graph.node_count()];
    let mut forbidden: FxHashSet<Color> = FxHashSet::default();

    for id in degree_order(graph) {
        forbidden.extend(
            graph
                .neighbors(id)
                .iter()
                .filter_map(|&n| colors[n as usize]),
        );

        let mut color: Color = 1;
        while forbidden.contains(&color) {
            color += 1;
        }

        let node = &nodes[id as usize];
        log_debug!(
            verbosity,
            "[color] {} (degree {}) forbidden={:?}",
            node,
            graph.degree(id),
            forbidden
        );
        log_decisions!(verbosity, "[color] {} -> {}", node, color);

        colors[id as usize] = Some(color);
        coloring.assign(node, color);
        forbidden.clear();
    }

    log_summary!(
        verbosity,
        "[color] {} nodes colored with {} colors",
        coloring.node_count(),
        coloring.color_count()
    );
    coloring
}
