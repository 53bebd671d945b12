pub mod bus;
pub mod bus_stats;
pub mod kmh;
pub mod meters;
pub mod minutes;
pub mod routing_settings;
pub mod stop;
pub mod stop_stats;
pub mod transit_catalogue;
pub mod transit_catalogue_builder;
