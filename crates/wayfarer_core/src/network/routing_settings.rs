use crate::{
    error::CatalogueError,
    network::{kmh::Kmh, minutes::Minutes},
};

/// Network-wide timing parameters: every stop shares the same wait time and
/// every bus travels at the same velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoutingSettings {
    pub bus_wait_time: Minutes,
    pub bus_velocity: Kmh,
}

impl RoutingSettings {
    pub fn new(bus_wait_time: Minutes, bus_velocity: Kmh) -> Self {
        RoutingSettings {
            bus_wait_time,
            bus_velocity,
        }
    }

    pub fn validate(&self) -> Result<(), CatalogueError> {
        let velocity = self.bus_velocity.value();
        if !velocity.is_finite() || velocity <= 0.0 {
            return Err(CatalogueError::InvalidVelocity(velocity));
        }

        let wait_time = self.bus_wait_time.value();
        if !wait_time.is_finite() || wait_time < 0.0 {
            return Err(CatalogueError::InvalidWaitTime(wait_time));
        }

        Ok(())
    }
}
