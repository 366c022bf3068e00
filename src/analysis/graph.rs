use std::collections::HashMap;

use petgraph::{
    graph::{DiGraph, NodeIndex},
    visit::EdgeRef,
    Direction,
};
use tracing::instrument;

use crate::domain::{ElementId, InterfaceType, System};

/// Data stored on each edge of the dependency graph.
///
/// Each edge corresponds to one declared interface, pointing from its
/// source element to its target element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyEdge {
    /// Id of the interface the edge was built from.
    pub interface_id: ElementId,
    /// The interface's type label.
    pub interface_type: InterfaceType,
}

/// A directed dependency graph over element ids.
///
/// Nodes are element ids — every known element in the tree plus every
/// id an interface endpoint mentions, so dangling endpoints are
/// representable rather than impossible. Edges are interfaces.
/// Duplicate ids collapse to a single node.
///
/// Ids are resolved through a lookup table built at construction
/// time; the graph holds no references into the source tree.
#[derive(Debug, Default)]
pub struct DependencyGraph {
    graph: DiGraph<ElementId, DependencyEdge>,
    indices: HashMap<ElementId, NodeIndex>,
}

impl DependencyGraph {
    /// Builds the dependency graph for a system tree.
    #[instrument(skip(system), fields(system = %system.id))]
    #[must_use]
    pub fn build(system: &System) -> Self {
        let mut this = Self::default();

        for element in system.elements() {
            this.ensure_node(element.id());
        }

        for interface in system.all_interfaces() {
            let source = this.ensure_node(&interface.source);
            let target = this.ensure_node(&interface.target);
            this.graph.add_edge(
                source,
                target,
                DependencyEdge {
                    interface_id: interface.id.clone(),
                    interface_type: interface.interface_type,
                },
            );
        }

        this
    }

    fn ensure_node(&mut self, id: &ElementId) -> NodeIndex {
        if let Some(&index) = self.indices.get(id) {
            return index;
        }
        let index = self.graph.add_node(id.clone());
        self.indices.insert(id.clone(), index);
        index
    }

    /// Number of distinct element ids in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges (one per declared interface).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether an id appears in the graph at all.
    #[must_use]
    pub fn contains(&self, id: &ElementId) -> bool {
        self.indices.contains_key(id)
    }

    /// Iterates over every node id in the graph.
    pub fn nodes(&self) -> impl Iterator<Item = &ElementId> {
        self.graph.node_weights()
    }

    /// Edges leaving a node: dependencies this element feeds.
    ///
    /// Yields `(edge, target id)` pairs. Unknown ids yield nothing.
    pub fn outgoing(&self, id: &ElementId) -> impl Iterator<Item = (&DependencyEdge, &ElementId)> {
        self.edges(id, Direction::Outgoing)
    }

    /// Edges arriving at a node: dependencies feeding this element.
    ///
    /// Yields `(edge, source id)` pairs. Unknown ids yield nothing.
    pub fn incoming(&self, id: &ElementId) -> impl Iterator<Item = (&DependencyEdge, &ElementId)> {
        self.edges(id, Direction::Incoming)
    }

    fn edges(
        &self,
        id: &ElementId,
        direction: Direction,
    ) -> impl Iterator<Item = (&DependencyEdge, &ElementId)> {
        self.indices
            .get(id)
            .into_iter()
            .flat_map(move |&index| {
                self.graph
                    .edges_directed(index, direction)
                    .map(move |edge| {
                        let other = match direction {
                            Direction::Outgoing => edge.target(),
                            Direction::Incoming => edge.source(),
                        };
                        (edge.weight(), &self.graph[other])
                    })
            })
    }

    /// All direct (single-edge) paths from one element to another.
    ///
    /// Parallel interfaces between the same pair produce one entry
    /// each. Transitive paths are deliberately not discovered; this
    /// query answers "which interfaces connect these two elements
    /// directly", nothing more.
    #[must_use]
    pub fn direct_paths(&self, from: &ElementId, to: &ElementId) -> Vec<&DependencyEdge> {
        let (Some(&from), Some(&to)) = (self.indices.get(from), self.indices.get(to)) else {
            return Vec::new();
        };

        self.graph
            .edges_connecting(from, to)
            .map(|edge| edge.weight())
            .collect()
    }
}
