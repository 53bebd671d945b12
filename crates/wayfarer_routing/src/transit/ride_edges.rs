use wayfarer_core::network::{
    bus::BusIdx, meters::Meters, minutes::Minutes, stop::StopIdx,
    transit_catalogue::TransitCatalogue,
};

use crate::error::RouterError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct RideCandidate {
    pub bus: BusIdx,
    pub from: StopIdx,
    pub to: StopIdx,
    pub span_count: usize,
    pub time: Minutes,
}

/// Pushes one candidate per (boarding, alighting) position pair along `stops`,
/// boarding strictly before alighting. Pairs naming the same stop twice are
/// skipped; their hops still count towards longer rides.
pub(crate) fn collect_ride_candidates(
    catalogue: &TransitCatalogue,
    bus_idx: BusIdx,
    stops: &[StopIdx],
    candidates: &mut Vec<RideCandidate>,
) -> Result<(), RouterError> {
    let bus = catalogue.bus(bus_idx);

    let hops = stops
        .windows(2)
        .map(|hop| {
            catalogue
                .road_distance(hop[0], hop[1])
                .ok_or_else(|| RouterError::MissingRoadDistance {
                    bus: bus.name().to_owned(),
                    from: catalogue.stop(hop[0]).name().to_owned(),
                    to: catalogue.stop(hop[1]).name().to_owned(),
                })
        })
        .collect::<Result<Vec<Meters>, _>>()?;

    for (boarding, &from) in stops.iter().enumerate() {
        let mut distance = Meters::ZERO;

        for alighting in (boarding + 1)..stops.len() {
            distance += hops[alighting - 1];

            let to = stops[alighting];
            if to == from {
                continue;
            }

            candidates.push(RideCandidate {
                bus: bus_idx,
                from,
                to,
                span_count: alighting - boarding,
                time: distance / bus.velocity(),
            });
        }
    }

    Ok(())
}
