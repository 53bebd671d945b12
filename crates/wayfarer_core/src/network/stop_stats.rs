use crate::network::{bus::BusIdx, stop::StopIdx, transit_catalogue::TransitCatalogue};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopStats {
    buses: Vec<BusIdx>,
}

impl StopStats {
    pub fn compute(catalogue: &TransitCatalogue, stop: StopIdx) -> Self {
        let mut buses = catalogue.buses_at(stop).to_vec();
        buses.sort_by(|&a, &b| catalogue.bus(a).name().cmp(catalogue.bus(b).name()));

        StopStats { buses }
    }

    /// Buses serving the stop, ordered by name.
    pub fn buses(&self) -> &[BusIdx] {
        &self.buses
    }

    pub fn is_empty(&self) -> bool {
        self.buses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::network::{
        kmh::Kmh, meters::Meters, minutes::Minutes, routing_settings::RoutingSettings,
        transit_catalogue_builder::TransitCatalogueBuilder,
    };

    #[test]
    fn test_buses_sorted_by_name() {
        let mut builder = TransitCatalogueBuilder::default();
        builder
            .set_routing_settings(RoutingSettings::new(Minutes::new(6.0), Kmh::new(40.0)))
            .add_stop("A", 55.0, 37.0)
            .add_stop("B", 55.1, 37.0)
            .add_stop("Lonely", 55.2, 37.0)
            .add_road_distance("A", "B", Meters::new(100.0))
            .add_bus("828", ["A", "B", "A"], true)
            .add_bus("256", ["B", "A"], false)
            .add_bus("297", ["A", "B"], false);
        let catalogue = builder.build().unwrap();

        let stats = catalogue.stop_stats(catalogue.stop_by_name("A").unwrap());
        let names: Vec<&str> = stats
            .buses()
            .iter()
            .map(|&bus| catalogue.bus(bus).name())
            .collect();
        assert_eq!(names, vec!["256", "297", "828"]);

        let lonely = catalogue.stop_stats(catalogue.stop_by_name("Lonely").unwrap());
        assert!(lonely.is_empty());
    }
}
