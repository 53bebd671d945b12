use std::{collections::BTreeMap, io::Read};

use schemars::JsonSchema;
use serde::Deserialize;

use crate::{
    error::CatalogueError,
    network::{
        kmh::Kmh, meters::Meters, minutes::Minutes, routing_settings::RoutingSettings,
        transit_catalogue::TransitCatalogue, transit_catalogue_builder::TransitCatalogueBuilder,
    },
};

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "TransitDocument")]
pub struct JsonTransitDocument {
    pub base_requests: Vec<JsonBaseRequest>,
    pub routing_settings: JsonRoutingSettings,
    #[serde(default)]
    pub stat_requests: Vec<JsonStatRequest>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(tag = "type")]
pub enum JsonBaseRequest {
    Stop(JsonStop),
    Bus(JsonBus),
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "Stop")]
pub struct JsonStop {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Road distance in meters from this stop to each named neighbour.
    #[serde(default)]
    pub road_distances: BTreeMap<String, Meters>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "Bus")]
pub struct JsonBus {
    pub name: String,
    pub stops: Vec<String>,
    pub is_roundtrip: bool,
}

#[derive(Debug, Clone, Copy, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "RoutingSettings")]
pub struct JsonRoutingSettings {
    /// Minutes spent waiting at any stop before boarding.
    pub bus_wait_time: Minutes,
    /// Velocity of every bus, in km/h.
    pub bus_velocity: Kmh,
}

impl From<JsonRoutingSettings> for RoutingSettings {
    fn from(value: JsonRoutingSettings) -> Self {
        RoutingSettings::new(value.bus_wait_time, value.bus_velocity)
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(tag = "type", deny_unknown_fields)]
pub enum JsonStatRequest {
    Bus { id: u64, name: String },
    Stop { id: u64, name: String },
    Route { id: u64, from: String, to: String },
}

impl JsonStatRequest {
    pub fn id(&self) -> u64 {
        match self {
            JsonStatRequest::Bus { id, .. }
            | JsonStatRequest::Stop { id, .. }
            | JsonStatRequest::Route { id, .. } => *id,
        }
    }
}

impl JsonTransitDocument {
    pub fn from_reader(reader: impl Read) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }

    pub fn to_catalogue(&self) -> Result<TransitCatalogue, CatalogueError> {
        let mut builder = TransitCatalogueBuilder::default();
        builder.set_routing_settings(self.routing_settings.into());

        for request in &self.base_requests {
            match request {
                JsonBaseRequest::Stop(stop) => {
                    builder.add_stop(&stop.name, stop.latitude, stop.longitude);
                    for (neighbour, distance) in &stop.road_distances {
                        builder.add_road_distance(&stop.name, neighbour, *distance);
                    }
                }
                JsonBaseRequest::Bus(bus) => {
                    builder.add_bus(&bus.name, &bus.stops, bus.is_roundtrip);
                }
            }
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r#"{
        "base_requests": [
            {"type": "Bus", "name": "14", "stops": ["Lipetskaya ulitsa 46", "Zagorye"], "is_roundtrip": false},
            {"type": "Stop", "name": "Zagorye", "latitude": 55.579909, "longitude": 37.68372,
             "road_distances": {"Lipetskaya ulitsa 46": 230}},
            {"type": "Stop", "name": "Lipetskaya ulitsa 46", "latitude": 55.581065, "longitude": 37.64839}
        ],
        "routing_settings": {"bus_wait_time": 2, "bus_velocity": 30},
        "stat_requests": [
            {"id": 1, "type": "Bus", "name": "14"},
            {"id": 2, "type": "Stop", "name": "Zagorye"},
            {"id": 3, "type": "Route", "from": "Zagorye", "to": "Lipetskaya ulitsa 46"}
        ]
    }"#;

    #[test]
    fn test_parse_document() {
        let document = JsonTransitDocument::from_reader(DOCUMENT.as_bytes()).unwrap();

        assert_eq!(document.base_requests.len(), 3);
        assert_eq!(document.stat_requests.len(), 3);
        assert_eq!(document.routing_settings.bus_wait_time, Minutes::new(2.0));
        assert!(matches!(
            &document.stat_requests[2],
            JsonStatRequest::Route { id: 3, from, to } if from == "Zagorye" && to == "Lipetskaya ulitsa 46"
        ));
        assert_eq!(
            document.stat_requests.iter().map(JsonStatRequest::id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_to_catalogue() {
        let document = JsonTransitDocument::from_reader(DOCUMENT.as_bytes()).unwrap();
        let catalogue = document.to_catalogue().unwrap();

        let zagorye = catalogue.stop_by_name("Zagorye").unwrap();
        let lipetskaya = catalogue.stop_by_name("Lipetskaya ulitsa 46").unwrap();
        assert_eq!(catalogue.road_distance(lipetskaya, zagorye), Some(Meters::new(230.0)));
        assert_eq!(catalogue.bus(catalogue.bus_by_name("14").unwrap()).velocity(), Kmh::new(30.0));
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let document = r#"{
            "base_requests": [{"type": "Bus", "name": "14", "stops": [], "is_roundtrip": false, "color": "red"}],
            "routing_settings": {"bus_wait_time": 2, "bus_velocity": 30}
        }"#;

        assert!(JsonTransitDocument::from_reader(document.as_bytes()).is_err());
    }

    #[test]
    fn test_unknown_stat_request_fields_are_rejected() {
        let document = r#"{
            "base_requests": [],
            "routing_settings": {"bus_wait_time": 2, "bus_velocity": 30},
            "stat_requests": [{"id": 1, "type": "Bus", "name": "14", "colour": "red"}]
        }"#;

        assert!(JsonTransitDocument::from_reader(document.as_bytes()).is_err());
    }

    #[test]
    fn test_stat_requests_default_to_empty() {
        let document = r#"{
            "base_requests": [],
            "routing_settings": {"bus_wait_time": 2, "bus_velocity": 30}
        }"#;

        let document = JsonTransitDocument::from_reader(document.as_bytes()).unwrap();
        assert!(document.stat_requests.is_empty());
    }
}
