use rayon::prelude::*;
use tracing::warn;
use wayfarer_core::{json::types::JsonStatRequest, network::transit_catalogue::TransitCatalogue};
use wayfarer_routing::transit::{transit_route::RouteItem, transit_router::TransitRouter};

use crate::responses::{
    JsonBusResponse, JsonRouteItem, JsonRouteResponse, JsonStatResponse, JsonStopResponse,
};

/// Answers stat requests against a catalogue and the router built from it.
pub struct RequestHandler<'a> {
    catalogue: &'a TransitCatalogue,
    router: &'a TransitRouter,
}

impl<'a> RequestHandler<'a> {
    pub fn new(catalogue: &'a TransitCatalogue, router: &'a TransitRouter) -> Self {
        RequestHandler { catalogue, router }
    }

    /// Answers every request in parallel. Responses keep the request order.
    pub fn handle_all(&self, requests: &[JsonStatRequest]) -> Vec<JsonStatResponse> {
        requests
            .par_iter()
            .map(|request| self.handle(request))
            .collect()
    }

    pub fn handle(&self, request: &JsonStatRequest) -> JsonStatResponse {
        match request {
            JsonStatRequest::Bus { id, name } => self.bus(*id, name),
            JsonStatRequest::Stop { id, name } => self.stop(*id, name),
            JsonStatRequest::Route { id, from, to } => self.route(*id, from, to),
        }
    }

    fn bus(&self, request_id: u64, name: &str) -> JsonStatResponse {
        let Some(bus) = self.catalogue.bus_by_name(name) else {
            return JsonStatResponse::not_found(request_id);
        };

        match self.catalogue.bus_stats(bus) {
            Ok(stats) => JsonStatResponse::Bus(JsonBusResponse {
                request_id,
                curvature: stats.curvature,
                route_length: stats.route_length,
                stop_count: stats.stop_count,
                unique_stop_count: stats.unique_stop_count,
            }),
            Err(error) => {
                warn!(bus = name, %error, "Cannot compute bus statistics");
                JsonStatResponse::not_found(request_id)
            }
        }
    }

    fn stop(&self, request_id: u64, name: &str) -> JsonStatResponse {
        let Some(stop) = self.catalogue.stop_by_name(name) else {
            return JsonStatResponse::not_found(request_id);
        };

        let buses = self
            .catalogue
            .stop_stats(stop)
            .buses()
            .iter()
            .map(|&bus| self.catalogue.bus(bus).name().to_owned())
            .collect();

        JsonStatResponse::Stop(JsonStopResponse { request_id, buses })
    }

    fn route(&self, request_id: u64, from: &str, to: &str) -> JsonStatResponse {
        let (Some(from), Some(to)) = (self.catalogue.stop_by_name(from), self.catalogue.stop_by_name(to)) else {
            return JsonStatResponse::not_found(request_id);
        };

        let Some(route) = self.router.route(from, to) else {
            return JsonStatResponse::not_found(request_id);
        };

        let items = route
            .items()
            .iter()
            .map(|item| match *item {
                RouteItem::Wait { stop, time } => JsonRouteItem::Wait {
                    stop_name: self.catalogue.stop(stop).name().to_owned(),
                    time,
                },
                RouteItem::Ride {
                    bus,
                    span_count,
                    time,
                } => JsonRouteItem::Ride {
                    bus: self.catalogue.bus(bus).name().to_owned(),
                    span_count,
                    time,
                },
            })
            .collect();

        JsonStatResponse::Route(JsonRouteResponse {
            request_id,
            total_time: route.total_time(),
            items,
        })
    }
}
