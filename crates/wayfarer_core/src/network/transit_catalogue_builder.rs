use tracing::{debug, instrument};

use crate::{
    error::CatalogueError,
    network::{
        bus::Bus, meters::Meters, routing_settings::RoutingSettings, stop::Stop,
        transit_catalogue::TransitCatalogue,
    },
};

struct StopEntry {
    name: String,
    latitude: f64,
    longitude: f64,
}

struct RoadDistanceEntry {
    from: String,
    to: String,
    distance: Meters,
}

struct BusEntry {
    name: String,
    stops: Vec<String>,
    is_roundtrip: bool,
}

/// Collects stops, road distances and buses by name, in any order, and
/// resolves them into a [`TransitCatalogue`].
#[derive(Default)]
pub struct TransitCatalogueBuilder {
    routing_settings: Option<RoutingSettings>,
    stops: Vec<StopEntry>,
    road_distances: Vec<RoadDistanceEntry>,
    buses: Vec<BusEntry>,
}

impl TransitCatalogueBuilder {
    pub fn set_routing_settings(&mut self, routing_settings: RoutingSettings) -> &mut Self {
        self.routing_settings = Some(routing_settings);
        self
    }

    pub fn add_stop(&mut self, name: impl Into<String>, latitude: f64, longitude: f64) -> &mut Self {
        self.stops.push(StopEntry {
            name: name.into(),
            latitude,
            longitude,
        });
        self
    }

    pub fn add_road_distance(
        &mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        distance: Meters,
    ) -> &mut Self {
        self.road_distances.push(RoadDistanceEntry {
            from: from.into(),
            to: to.into(),
            distance,
        });
        self
    }

    pub fn add_bus<S: Into<String>>(
        &mut self,
        name: impl Into<String>,
        stops: impl IntoIterator<Item = S>,
        is_roundtrip: bool,
    ) -> &mut Self {
        self.buses.push(BusEntry {
            name: name.into(),
            stops: stops.into_iter().map(Into::into).collect(),
            is_roundtrip,
        });
        self
    }

    #[instrument(skip_all, level = "debug")]
    pub fn build(self) -> Result<TransitCatalogue, CatalogueError> {
        let settings = self
            .routing_settings
            .ok_or(CatalogueError::MissingRoutingSettings)?;
        settings.validate()?;

        let mut catalogue = TransitCatalogue::default();

        for stop in self.stops {
            catalogue.insert_stop(Stop::new(
                stop.name,
                stop.latitude,
                stop.longitude,
                settings.bus_wait_time,
            ))?;
        }

        for entry in self.road_distances {
            let meters = entry.distance.value();
            if !meters.is_finite() || meters < 0.0 {
                return Err(CatalogueError::InvalidRoadDistance {
                    from: entry.from,
                    to: entry.to,
                    meters,
                });
            }

            let from = catalogue
                .stop_by_name(&entry.from)
                .ok_or(CatalogueError::UnknownDistanceStop(entry.from))?;
            let to = catalogue
                .stop_by_name(&entry.to)
                .ok_or(CatalogueError::UnknownDistanceStop(entry.to))?;
            catalogue.insert_road_distance(from, to, entry.distance);
        }

        for bus in self.buses {
            let stops = bus
                .stops
                .iter()
                .map(|name| {
                    catalogue
                        .stop_by_name(name)
                        .ok_or_else(|| CatalogueError::UnknownBusStop {
                            bus: bus.name.clone(),
                            stop: name.clone(),
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;

            catalogue.insert_bus(Bus::new(
                bus.name,
                stops,
                bus.is_roundtrip,
                settings.bus_velocity,
            ))?;
        }

        debug!(
            stops = catalogue.stop_count(),
            buses = catalogue.bus_count(),
            "Transit catalogue built"
        );

        Ok(catalogue)
    }
}
