use tracing::debug;

use crate::{
    error::CatalogueError,
    network::{bus::BusIdx, meters::Meters, transit_catalogue::TransitCatalogue},
    utils::tolerance::is_approx_zero,
};

const GEOGRAPHIC_LENGTH_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq)]
pub struct BusStats {
    pub stop_count: usize,
    pub unique_stop_count: usize,
    pub route_length: Meters,
    /// Road length over great-circle length. 1.0 for a perfectly straight line.
    pub curvature: f64,
}

impl BusStats {
    pub fn compute(catalogue: &TransitCatalogue, bus_idx: BusIdx) -> Result<Self, CatalogueError> {
        let bus = catalogue.bus(bus_idx);
        let route = bus.route_stops();

        let mut route_length = Meters::ZERO;
        let mut geographic_length = Meters::ZERO;
        for hop in route.windows(2) {
            route_length += catalogue.required_road_distance(hop[0], hop[1])?;
            geographic_length += catalogue
                .stop(hop[0])
                .geographic_distance(catalogue.stop(hop[1]));
        }

        let curvature = if is_approx_zero(geographic_length.value(), GEOGRAPHIC_LENGTH_TOLERANCE) {
            debug!(bus = bus.name(), "Bus has no geographic extent, curvature defaults to 1");
            1.0
        } else {
            route_length / geographic_length
        };

        Ok(BusStats {
            stop_count: route.len(),
            unique_stop_count: bus.unique_stop_count(),
            route_length,
            curvature,
        })
    }
}
