use crate::{
    graph::Graph,
    types::{EdgeId, NodeId, Weight},
};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShortestPath {
    edges: Vec<EdgeId>,
    weight: Weight,
}

impl ShortestPath {
    pub fn new(edges: Vec<EdgeId>, weight: Weight) -> Self {
        ShortestPath { edges, weight }
    }

    /// The path from a node to itself.
    pub fn empty() -> Self {
        ShortestPath::default()
    }

    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

pub trait ShortestPathAlgorithm {
    /// Minimum-weight path from `start` to `end`, or `None` when `end` cannot
    /// be reached. Both nodes must belong to `graph`.
    fn calc_path(&mut self, graph: &impl Graph, start: NodeId, end: NodeId) -> Option<ShortestPath>;
}
