use crate::{
    graph_edge::GraphEdge,
    types::{EdgeId, NodeId},
};

pub trait Graph {
    type EdgeIterator<'a>: Iterator<Item = EdgeId>
    where
        Self: 'a;

    fn node_count(&self) -> usize;
    fn edge_count(&self) -> usize;

    /// Outgoing edges of `node`, in insertion order.
    fn node_edges_iter(&self, node: NodeId) -> Self::EdgeIterator<'_>;

    fn edge(&self, edge: EdgeId) -> &GraphEdge;
}
