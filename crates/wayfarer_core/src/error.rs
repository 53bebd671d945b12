use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogueError {
    #[error("Stop {0:?} is declared more than once")]
    DuplicateStop(String),

    #[error("Bus {0:?} is declared more than once")]
    DuplicateBus(String),

    #[error("Bus {bus:?} references unknown stop {stop:?}")]
    UnknownBusStop { bus: String, stop: String },

    #[error("Road distance references unknown stop {0:?}")]
    UnknownDistanceStop(String),

    #[error("No road distance recorded between {from:?} and {to:?}")]
    MissingRoadDistance { from: String, to: String },

    #[error("Road distance from {from:?} to {to:?} must be a non-negative number of meters, got {meters}")]
    InvalidRoadDistance { from: String, to: String, meters: f64 },

    #[error("Routing settings are missing")]
    MissingRoutingSettings,

    #[error("Bus velocity must be positive, got {0} km/h")]
    InvalidVelocity(f64),

    #[error("Bus wait time must not be negative, got {0} min")]
    InvalidWaitTime(f64),
}
