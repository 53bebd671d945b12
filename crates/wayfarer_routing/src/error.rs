use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouterError {
    #[error("Bus {bus:?} travels from {from:?} to {to:?} but no road distance is recorded")]
    MissingRoadDistance { bus: String, from: String, to: String },
}
