pub mod base_graph;
mod constants;
pub mod error;
pub mod graph;
pub mod graph_edge;
pub mod routing;
pub mod stopwatch;
pub mod transit;
pub mod types;
