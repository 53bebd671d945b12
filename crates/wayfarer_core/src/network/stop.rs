use geo::{Distance, Haversine, Point};

use crate::{
    define_index_newtype,
    network::{meters::Meters, minutes::Minutes},
};

define_index_newtype!(StopIdx, Stop);

#[derive(Debug, Clone)]
pub struct Stop {
    name: String,
    location: Point,
    wait_time: Minutes,
}

impl Stop {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64, wait_time: Minutes) -> Self {
        Stop {
            name: name.into(),
            location: Point::new(longitude, latitude),
            wait_time,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> Point {
        self.location
    }

    pub fn latitude(&self) -> f64 {
        self.location.y()
    }

    pub fn longitude(&self) -> f64 {
        self.location.x()
    }

    /// Average time a passenger waits here before boarding any bus.
    pub fn wait_time(&self) -> Minutes {
        self.wait_time
    }

    /// Great-circle distance, ignoring the road network.
    pub fn geographic_distance(&self, other: &Stop) -> Meters {
        Meters::new(Haversine.distance(self.location, other.location))
    }
}
