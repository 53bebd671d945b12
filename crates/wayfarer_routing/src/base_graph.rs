use crate::{
    graph::Graph,
    graph_edge::GraphEdge,
    types::{EdgeId, NodeId, Weight},
};

/// Append-only directed graph over a fixed set of nodes `0..node_count`.
///
/// Edge ids are assigned sequentially by [`BaseGraph::add_edge`]. Each node
/// keeps the ids of the edges leaving it.
#[derive(Debug, Clone, Default)]
pub struct BaseGraph {
    edges: Vec<GraphEdge>,
    adjacency_list: Vec<Vec<EdgeId>>,
}

impl BaseGraph {
    pub fn with_node_count(node_count: usize) -> Self {
        BaseGraph {
            edges: Vec::new(),
            adjacency_list: vec![Vec::new(); node_count],
        }
    }

    /// Capacity hint for edges about to be added.
    pub fn reserve(&mut self, additional_edges: usize) {
        self.edges.reserve(additional_edges);
    }

    pub fn add_edge(&mut self, start_node: NodeId, end_node: NodeId, weight: Weight) -> EdgeId {
        debug_assert!(
            weight >= 0.0 && weight.is_finite(),
            "edge {start_node} -> {end_node} has invalid weight {weight}"
        );
        debug_assert!(end_node < self.adjacency_list.len());

        let edge_id = self.edges.len();
        self.edges.push(GraphEdge::new(start_node, end_node, weight));
        self.adjacency_list[start_node].push(edge_id);

        edge_id
    }

    pub fn node_edges(&self, node: NodeId) -> &[EdgeId] {
        &self.adjacency_list[node]
    }

    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }
}

impl Graph for BaseGraph {
    type EdgeIterator<'a> = std::iter::Copied<std::slice::Iter<'a, EdgeId>>;

    fn node_count(&self) -> usize {
        self.adjacency_list.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn node_edges_iter(&self, node: NodeId) -> Self::EdgeIterator<'_> {
        self.adjacency_list[node].iter().copied()
    }

    fn edge(&self, edge: EdgeId) -> &GraphEdge {
        &self.edges[edge]
    }
}
