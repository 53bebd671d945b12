use std::collections::hash_map::Entry;

use fxhash::FxHashMap;
use tracing::{debug, info, instrument};
use wayfarer_core::{
    network::{minutes::Minutes, stop::StopIdx, transit_catalogue::TransitCatalogue},
    utils::{enumerate_idx::EnumerateIdx, tolerance::approx_eq},
};

use crate::{
    base_graph::BaseGraph,
    constants::WEIGHT_TOLERANCE,
    error::RouterError,
    routing::{dijkstra::Dijkstra, shortest_path_algorithm::ShortestPathAlgorithm},
    stopwatch::Stopwatch,
    transit::{
        edge_info::EdgeInfo,
        ride_edges::{RideCandidate, collect_ride_candidates},
        stop_vertices::StopVertices,
        transit_route::{RouteItem, TransitRoute},
    },
    types::{EdgeId, NodeId},
};

/// Fastest-itinerary search over a frozen [`TransitCatalogue`].
///
/// Every stop becomes an arrival node and a departure node joined by a wait
/// edge. Every way of riding one bus from a boarding stop to a later stop
/// becomes a ride edge from the boarding departure node to the alighting
/// arrival node, keeping only the fastest bus per pair of stops.
///
/// Queries only read the graph, so a router can be shared between threads.
#[derive(Debug)]
pub struct TransitRouter {
    graph: BaseGraph,
    stop_vertices: Vec<StopVertices>,
    edge_infos: Vec<EdgeInfo>,
}

impl TransitRouter {
    #[instrument(skip_all, level = "debug")]
    pub fn new(catalogue: &TransitCatalogue) -> Result<Self, RouterError> {
        let stopwatch = Stopwatch::new("transit_router/new");

        let mut router = TransitRouter {
            graph: BaseGraph::with_node_count(2 * catalogue.stop_count()),
            stop_vertices: Vec::with_capacity(catalogue.stop_count()),
            edge_infos: Vec::new(),
        };

        router.fill_stop_edges(catalogue);
        router.fill_bus_edges(catalogue)?;

        info!(
            stops = catalogue.stop_count(),
            buses = catalogue.bus_count(),
            edges = router.edge_infos.len(),
            "Transit router built"
        );
        stopwatch.report();

        Ok(router)
    }

    fn fill_stop_edges(&mut self, catalogue: &TransitCatalogue) {
        self.graph.reserve(catalogue.stop_count());

        for (stop_idx, stop) in catalogue.stops().iter().enumerate_idx() {
            let vertices = StopVertices::for_stop(stop_idx);
            self.stop_vertices.push(vertices);

            self.push_edge(
                vertices.arrival(),
                vertices.departure(),
                EdgeInfo::Wait {
                    stop: stop_idx,
                    time: stop.wait_time(),
                },
            );
        }
    }

    fn fill_bus_edges(&mut self, catalogue: &TransitCatalogue) -> Result<(), RouterError> {
        let mut candidates: Vec<RideCandidate> = Vec::new();

        for (bus_idx, bus) in catalogue.buses().iter().enumerate_idx() {
            collect_ride_candidates(catalogue, bus_idx, bus.stops(), &mut candidates)?;

            if !bus.is_roundtrip() {
                let return_leg: Vec<StopIdx> = bus.stops().iter().rev().copied().collect();
                collect_ride_candidates(catalogue, bus_idx, &return_leg, &mut candidates)?;
            }
        }

        let candidate_count = candidates.len();

        // Fastest candidate per (departure, arrival) pair, first one wins ties
        let mut fastest: FxHashMap<(NodeId, NodeId), RideCandidate> = FxHashMap::default();
        for candidate in candidates {
            let key = (
                self.stop_vertices[candidate.from.get()].departure(),
                self.stop_vertices[candidate.to.get()].arrival(),
            );

            match fastest.entry(key) {
                Entry::Occupied(mut entry) => {
                    if candidate.time < entry.get().time {
                        entry.insert(candidate);
                    }
                }
                Entry::Vacant(entry) => {
                    entry.insert(candidate);
                }
            }
        }

        let mut survivors: Vec<((NodeId, NodeId), RideCandidate)> = fastest.into_iter().collect();
        survivors.sort_unstable_by_key(|(key, _)| *key);

        self.graph.reserve(survivors.len());
        for ((from, to), ride) in survivors {
            self.push_edge(
                from,
                to,
                EdgeInfo::Ride {
                    bus: ride.bus,
                    from: ride.from,
                    to: ride.to,
                    span_count: ride.span_count,
                    time: ride.time,
                },
            );
        }

        debug!(
            candidates = candidate_count,
            ride_edges = self.edge_infos.len() - self.stop_vertices.len(),
            "Ride edges committed"
        );

        Ok(())
    }

    fn push_edge(&mut self, from: NodeId, to: NodeId, info: EdgeInfo) {
        let edge_id = self.graph.add_edge(from, to, info.time().value());
        debug_assert_eq!(edge_id, self.edge_infos.len());
        self.edge_infos.push(info);
    }

    /// Fastest itinerary from `from` to `to`, or `None` when no sequence of
    /// rides connects them. Both stops must belong to the catalogue the
    /// router was built from.
    pub fn route(&self, from: StopIdx, to: StopIdx) -> Option<TransitRoute> {
        if from == to {
            return Some(TransitRoute::default());
        }

        let stopwatch = Stopwatch::new("transit_router/route");

        let start = self.stop_vertices[from.get()].arrival();
        let end = self.stop_vertices[to.get()].arrival();

        let mut dijkstra = Dijkstra::new(&self.graph);
        let path = dijkstra.calc_path(&self.graph, start, end)?;

        let items: Vec<RouteItem> = path
            .edges()
            .iter()
            .map(|&edge_id| RouteItem::from(self.edge_infos[edge_id]))
            .collect();

        let total_time = Minutes::new(path.weight());
        debug_assert!(approx_eq(
            items.iter().map(RouteItem::time).sum::<Minutes>().value(),
            total_time.value(),
            WEIGHT_TOLERANCE
        ));

        stopwatch.report();

        Some(TransitRoute::new(items, total_time))
    }

    pub fn graph(&self) -> &BaseGraph {
        &self.graph
    }

    pub fn stop_vertices(&self, stop: StopIdx) -> StopVertices {
        self.stop_vertices[stop.get()]
    }

    pub fn edge_info(&self, edge_id: EdgeId) -> &EdgeInfo {
        &self.edge_infos[edge_id]
    }

    pub fn edge_infos(&self) -> &[EdgeInfo] {
        &self.edge_infos
    }
}
