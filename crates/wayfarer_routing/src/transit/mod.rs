pub mod edge_info;
mod ride_edges;
pub mod stop_vertices;
pub mod transit_route;
pub mod transit_router;
