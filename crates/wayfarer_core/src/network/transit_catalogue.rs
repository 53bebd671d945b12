use fxhash::FxHashMap;

use crate::{
    error::CatalogueError,
    network::{
        bus::{Bus, BusIdx},
        bus_stats::BusStats,
        meters::Meters,
        stop::{Stop, StopIdx},
        stop_stats::StopStats,
    },
};

/// Read-only snapshot of a transit network.
///
/// Stops and buses live in arenas and refer to each other by index. The
/// catalogue is assembled by [`TransitCatalogueBuilder`] and never changes
/// afterwards.
///
/// [`TransitCatalogueBuilder`]: crate::network::transit_catalogue_builder::TransitCatalogueBuilder
#[derive(Debug, Default)]
pub struct TransitCatalogue {
    stops: Vec<Stop>,
    buses: Vec<Bus>,
    stops_by_name: FxHashMap<String, StopIdx>,
    buses_by_name: FxHashMap<String, BusIdx>,
    road_distances: FxHashMap<(StopIdx, StopIdx), Meters>,
    stop_buses: Vec<Vec<BusIdx>>,
}

impl TransitCatalogue {
    pub(crate) fn insert_stop(&mut self, stop: Stop) -> Result<StopIdx, CatalogueError> {
        if self.stops_by_name.contains_key(stop.name()) {
            return Err(CatalogueError::DuplicateStop(stop.name().to_owned()));
        }

        let stop_idx = StopIdx::new(self.stops.len());
        self.stops_by_name.insert(stop.name().to_owned(), stop_idx);
        self.stops.push(stop);
        self.stop_buses.push(Vec::new());

        Ok(stop_idx)
    }

    pub(crate) fn insert_road_distance(&mut self, from: StopIdx, to: StopIdx, distance: Meters) {
        self.road_distances.insert((from, to), distance);
    }

    pub(crate) fn insert_bus(&mut self, bus: Bus) -> Result<BusIdx, CatalogueError> {
        if self.buses_by_name.contains_key(bus.name()) {
            return Err(CatalogueError::DuplicateBus(bus.name().to_owned()));
        }

        let bus_idx = BusIdx::new(self.buses.len());
        for &stop in bus.stops() {
            let serving = &mut self.stop_buses[stop.get()];
            if !serving.contains(&bus_idx) {
                serving.push(bus_idx);
            }
        }

        self.buses_by_name.insert(bus.name().to_owned(), bus_idx);
        self.buses.push(bus);

        Ok(bus_idx)
    }

    /// Stops in declaration order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Buses in declaration order.
    pub fn buses(&self) -> &[Bus] {
        &self.buses
    }

    pub fn stop(&self, stop: StopIdx) -> &Stop {
        &self.stops[stop]
    }

    pub fn bus(&self, bus: BusIdx) -> &Bus {
        &self.buses[bus]
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn bus_count(&self) -> usize {
        self.buses.len()
    }

    pub fn stop_by_name(&self, name: &str) -> Option<StopIdx> {
        self.stops_by_name.get(name).copied()
    }

    pub fn bus_by_name(&self, name: &str) -> Option<BusIdx> {
        self.buses_by_name.get(name).copied()
    }

    /// Road distance from `from` to `to`. When only the opposite direction was
    /// recorded, that value is used for both.
    pub fn road_distance(&self, from: StopIdx, to: StopIdx) -> Option<Meters> {
        self.road_distances
            .get(&(from, to))
            .or_else(|| self.road_distances.get(&(to, from)))
            .copied()
    }

    pub fn required_road_distance(&self, from: StopIdx, to: StopIdx) -> Result<Meters, CatalogueError> {
        self.road_distance(from, to)
            .ok_or_else(|| CatalogueError::MissingRoadDistance {
                from: self.stop(from).name().to_owned(),
                to: self.stop(to).name().to_owned(),
            })
    }

    /// Buses stopping at `stop`, in declaration order.
    pub fn buses_at(&self, stop: StopIdx) -> &[BusIdx] {
        &self.stop_buses[stop.get()]
    }

    pub fn bus_stats(&self, bus: BusIdx) -> Result<BusStats, CatalogueError> {
        BusStats::compute(self, bus)
    }

    pub fn stop_stats(&self, stop: StopIdx) -> StopStats {
        StopStats::compute(self, stop)
    }
}
