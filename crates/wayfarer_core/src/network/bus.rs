use fxhash::FxHashSet;

use crate::{
    define_index_newtype,
    network::{kmh::Kmh, stop::StopIdx},
};

define_index_newtype!(BusIdx, Bus);

/// A bus line.
///
/// A roundtrip line lists its stops as a closed loop, first stop repeated at
/// the end. Any other line drives its stops forward and then back.
#[derive(Debug, Clone)]
pub struct Bus {
    name: String,
    stops: Vec<StopIdx>,
    is_roundtrip: bool,
    velocity: Kmh,
}

impl Bus {
    pub fn new(name: impl Into<String>, stops: Vec<StopIdx>, is_roundtrip: bool, velocity: Kmh) -> Self {
        Bus {
            name: name.into(),
            stops,
            is_roundtrip,
            velocity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stops as declared, without the return leg of an out-and-back line.
    pub fn stops(&self) -> &[StopIdx] {
        &self.stops
    }

    pub fn is_roundtrip(&self) -> bool {
        self.is_roundtrip
    }

    pub fn velocity(&self) -> Kmh {
        self.velocity
    }

    /// Every stop in the order the bus visits it. The turnaround stop of an
    /// out-and-back line is visited once.
    pub fn route_stops(&self) -> Vec<StopIdx> {
        if self.is_roundtrip {
            return self.stops.clone();
        }

        self.stops
            .iter()
            .chain(self.stops.iter().rev().skip(1))
            .copied()
            .collect()
    }

    pub fn unique_stop_count(&self) -> usize {
        self.stops.iter().collect::<FxHashSet<_>>().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stops(indices: &[usize]) -> Vec<StopIdx> {
        indices.iter().copied().map(StopIdx::new).collect()
    }

    #[test]
    fn test_route_stops_roundtrip() {
        let bus = Bus::new("297", stops(&[0, 1, 2, 0]), true, Kmh::new(30.0));

        assert_eq!(bus.route_stops(), stops(&[0, 1, 2, 0]));
        assert_eq!(bus.unique_stop_count(), 3);
    }

    #[test]
    fn test_route_stops_out_and_back() {
        let bus = Bus::new("635", stops(&[0, 1, 2]), false, Kmh::new(30.0));

        assert_eq!(bus.route_stops(), stops(&[0, 1, 2, 1, 0]));
        assert_eq!(bus.unique_stop_count(), 3);
    }

    #[test]
    fn test_route_stops_degenerate() {
        let empty = Bus::new("empty", vec![], false, Kmh::new(30.0));
        assert!(empty.route_stops().is_empty());

        let single = Bus::new("single", stops(&[4]), false, Kmh::new(30.0));
        assert_eq!(single.route_stops(), stops(&[4]));
    }
}
