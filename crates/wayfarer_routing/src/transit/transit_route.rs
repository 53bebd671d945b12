use wayfarer_core::network::{bus::BusIdx, minutes::Minutes, stop::StopIdx};

use crate::transit::edge_info::EdgeInfo;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RouteItem {
    Wait {
        stop: StopIdx,
        time: Minutes,
    },
    Ride {
        bus: BusIdx,
        span_count: usize,
        time: Minutes,
    },
}

impl RouteItem {
    pub fn time(&self) -> Minutes {
        match self {
            RouteItem::Wait { time, .. } | RouteItem::Ride { time, .. } => *time,
        }
    }
}

impl From<EdgeInfo> for RouteItem {
    fn from(info: EdgeInfo) -> Self {
        match info {
            EdgeInfo::Wait { stop, time } => RouteItem::Wait { stop, time },
            EdgeInfo::Ride {
                bus,
                span_count,
                time,
                ..
            } => RouteItem::Ride {
                bus,
                span_count,
                time,
            },
        }
    }
}

/// A fastest itinerary between two stops.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransitRoute {
    items: Vec<RouteItem>,
    total_time: Minutes,
}

impl TransitRoute {
    pub fn new(items: Vec<RouteItem>, total_time: Minutes) -> Self {
        TransitRoute { items, total_time }
    }

    pub fn items(&self) -> &[RouteItem] {
        &self.items
    }

    pub fn total_time(&self) -> Minutes {
        self.total_time
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
