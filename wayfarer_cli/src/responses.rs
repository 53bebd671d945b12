use serde::Serialize;
use wayfarer_core::network::{meters::Meters, minutes::Minutes};

pub const NOT_FOUND: &str = "not found";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JsonStatResponse {
    Bus(JsonBusResponse),
    Stop(JsonStopResponse),
    Route(JsonRouteResponse),
    NotFound(JsonNotFoundResponse),
}

impl JsonStatResponse {
    pub fn not_found(request_id: u64) -> Self {
        JsonStatResponse::NotFound(JsonNotFoundResponse {
            request_id,
            error_message: NOT_FOUND.to_owned(),
        })
    }

    pub fn request_id(&self) -> u64 {
        match self {
            JsonStatResponse::Bus(response) => response.request_id,
            JsonStatResponse::Stop(response) => response.request_id,
            JsonStatResponse::Route(response) => response.request_id,
            JsonStatResponse::NotFound(response) => response.request_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonBusResponse {
    pub request_id: u64,
    pub curvature: f64,
    pub route_length: Meters,
    pub stop_count: usize,
    pub unique_stop_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonStopResponse {
    pub request_id: u64,
    pub buses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonRouteResponse {
    pub request_id: u64,
    pub total_time: Minutes,
    pub items: Vec<JsonRouteItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum JsonRouteItem {
    Wait {
        stop_name: String,
        time: Minutes,
    },
    #[serde(rename = "Bus")]
    Ride {
        bus: String,
        span_count: usize,
        time: Minutes,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonNotFoundResponse {
    pub request_id: u64,
    pub error_message: String,
}
