use wayfarer_core::network::stop::StopIdx;

use crate::types::NodeId;

/// The two graph nodes standing for one stop: having just arrived there, and
/// being ready to board there. The wait edge links the first to the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopVertices {
    arrival: NodeId,
    departure: NodeId,
}

impl StopVertices {
    pub(crate) fn for_stop(stop: StopIdx) -> Self {
        StopVertices {
            arrival: 2 * stop.get(),
            departure: 2 * stop.get() + 1,
        }
    }

    pub fn arrival(&self) -> NodeId {
        self.arrival
    }

    pub fn departure(&self) -> NodeId {
        self.departure
    }
}
