use crate::types::{NodeId, Weight};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphEdge {
    start_node: NodeId,
    end_node: NodeId,
    weight: Weight,
}

impl GraphEdge {
    pub fn new(start_node: NodeId, end_node: NodeId, weight: Weight) -> Self {
        GraphEdge {
            start_node,
            end_node,
            weight,
        }
    }

    pub fn start_node(&self) -> NodeId {
        self.start_node
    }

    pub fn end_node(&self) -> NodeId {
        self.end_node
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }
}
