use wayfarer_core::network::{bus::BusIdx, minutes::Minutes, stop::StopIdx};

/// What a router edge means to a passenger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EdgeInfo {
    Wait {
        stop: StopIdx,
        time: Minutes,
    },
    Ride {
        bus: BusIdx,
        from: StopIdx,
        to: StopIdx,
        span_count: usize,
        time: Minutes,
    },
}

impl EdgeInfo {
    pub fn time(&self) -> Minutes {
        match self {
            EdgeInfo::Wait { time, .. } | EdgeInfo::Ride { time, .. } => *time,
        }
    }

    pub fn span_count(&self) -> usize {
        match self {
            EdgeInfo::Wait { .. } => 0,
            EdgeInfo::Ride { span_count, .. } => *span_count,
        }
    }

    pub fn bus(&self) -> Option<BusIdx> {
        match self {
            EdgeInfo::Wait { .. } => None,
            EdgeInfo::Ride { bus, .. } => Some(*bus),
        }
    }
}
