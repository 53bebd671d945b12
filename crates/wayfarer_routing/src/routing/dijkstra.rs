use std::cmp::Ordering;
use std::collections::BinaryHeap;

use fxhash::FxHashMap;
use tracing::debug;

use crate::constants::{INVALID_EDGE, INVALID_NODE, MAX_WEIGHT};
use crate::graph::Graph;
use crate::routing::shortest_path_algorithm::{ShortestPath, ShortestPathAlgorithm};
use crate::types::{EdgeId, NodeId, Weight};

#[derive(Copy, Clone, Debug)]
struct HeapItem {
    node_id: NodeId,
    weight: Weight,
}

impl PartialEq for HeapItem {
    fn eq(&self, other: &HeapItem) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapItem {}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &HeapItem) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flip weight to make this a min-heap
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| self.node_id.cmp(&other.node_id))
    }
}

struct NodeData {
    weight: Weight,
    settled: bool,
    parent: NodeId,
    edge_id: EdgeId, // Edge ID from parent to current node
}

/// Single-pair Dijkstra search.
///
/// Holds the scratch state of one search, so concurrent queries over the same
/// graph each use their own instance.
pub struct Dijkstra {
    heap: BinaryHeap<HeapItem>,

    // Only touched nodes get an entry
    data: FxHashMap<NodeId, NodeData>,
}

impl Dijkstra {
    pub fn new(graph: &impl Graph) -> Self {
        let capacity = graph.node_count().min(1024);
        Dijkstra {
            heap: BinaryHeap::with_capacity(capacity),
            data: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    fn init(&mut self, start: NodeId) {
        self.heap.clear();
        self.data.clear();

        self.heap.push(HeapItem {
            node_id: start,
            weight: 0.0,
        });
        self.update_node_data(start, 0.0, INVALID_NODE, INVALID_EDGE)
    }

    fn update_node_data(&mut self, node: NodeId, weight: Weight, parent: NodeId, edge_id: EdgeId) {
        self.data.insert(
            node,
            NodeData {
                weight,
                settled: false,
                parent,
                edge_id,
            },
        );
    }

    #[inline(always)]
    fn set_settled(&mut self, node: NodeId) {
        if let Some(data) = self.data.get_mut(&node) {
            data.settled = true
        }
    }

    #[inline(always)]
    fn is_settled(&self, node: NodeId) -> bool {
        self.data.get(&node).is_some_and(|data| data.settled)
    }

    #[inline(always)]
    fn current_shortest_weight(&self, node: NodeId) -> Weight {
        self.data.get(&node).map_or(MAX_WEIGHT, |data| data.weight)
    }

    fn build_path(&self, end: NodeId) -> Vec<EdgeId> {
        let mut path: Vec<EdgeId> = Vec::with_capacity(16);

        let mut node = end;
        while let Some(node_data) = self.data.get(&node) {
            if node_data.parent == INVALID_NODE {
                break;
            }

            path.push(node_data.edge_id);
            node = node_data.parent;
        }

        path.reverse();
        path
    }
}

impl ShortestPathAlgorithm for Dijkstra {
    fn calc_path(&mut self, graph: &impl Graph, start: NodeId, end: NodeId) -> Option<ShortestPath> {
        assert!(
            start < graph.node_count(),
            "Dijkstra: start node {start} is not in the graph"
        );
        assert!(
            end < graph.node_count(),
            "Dijkstra: end node {end} is not in the graph"
        );

        if start == end {
            return Some(ShortestPath::empty());
        }

        self.init(start);

        let mut iterations = 0;
        let mut nodes_visited = 0;

        while let Some(HeapItem { node_id, weight }) = self.heap.pop() {
            // Node is already settled, skip
            if self.is_settled(node_id) {
                continue;
            }

            // Stale heap entry, a shorter weight was pushed later
            if weight > self.current_shortest_weight(node_id) {
                continue;
            }

            self.set_settled(node_id);
            iterations += 1;

            if node_id == end {
                break;
            }

            for edge_id in graph.node_edges_iter(node_id) {
                let edge = graph.edge(edge_id);
                let adj_node = edge.end_node();

                if self.is_settled(adj_node) {
                    continue;
                }

                nodes_visited += 1;

                let next_weight = weight + edge.weight();

                if next_weight < self.current_shortest_weight(adj_node) {
                    self.update_node_data(adj_node, next_weight, node_id, edge_id);
                    self.heap.push(HeapItem {
                        weight: next_weight,
                        node_id: adj_node,
                    });
                }
            }
        }

        debug!(iterations, nodes_visited, "Dijkstra search finished");

        if !self.is_settled(end) {
            return None;
        }

        Some(ShortestPath::new(
            self.build_path(end),
            self.current_shortest_weight(end),
        ))
    }
}
