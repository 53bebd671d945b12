use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use wayfarer_core::network::{
    kmh::Kmh, meters::Meters, minutes::Minutes, routing_settings::RoutingSettings,
    stop::StopIdx, transit_catalogue::TransitCatalogue,
    transit_catalogue_builder::TransitCatalogueBuilder,
};
use wayfarer_routing::transit::transit_router::TransitRouter;

const GRID_SIZE: usize = 20;

fn grid_stop_name(row: usize, column: usize) -> String {
    format!("{row}:{column}")
}

/// A square grid of stops with one out-and-back line per row and per column.
fn grid_network() -> TransitCatalogue {
    let mut builder = TransitCatalogueBuilder::default();
    builder.set_routing_settings(RoutingSettings::new(Minutes::new(6.0), Kmh::new(40.0)));

    for row in 0..GRID_SIZE {
        for column in 0..GRID_SIZE {
            builder.add_stop(
                grid_stop_name(row, column),
                55.5 + row as f64 * 0.005,
                37.5 + column as f64 * 0.008,
            );

            if column + 1 < GRID_SIZE {
                builder.add_road_distance(
                    grid_stop_name(row, column),
                    grid_stop_name(row, column + 1),
                    Meters::new(500.0 + ((row * 7 + column * 3) % 11) as f64 * 40.0),
                );
            }
            if row + 1 < GRID_SIZE {
                builder.add_road_distance(
                    grid_stop_name(row, column),
                    grid_stop_name(row + 1, column),
                    Meters::new(550.0 + ((row * 5 + column * 2) % 13) as f64 * 35.0),
                );
            }
        }
    }

    for line in 0..GRID_SIZE {
        builder.add_bus(
            format!("row {line}"),
            (0..GRID_SIZE).map(|column| grid_stop_name(line, column)),
            false,
        );
        builder.add_bus(
            format!("column {line}"),
            (0..GRID_SIZE).map(|row| grid_stop_name(row, line)),
            false,
        );
    }

    builder.build().expect("grid network is valid")
}

fn transit_router_benchmark(c: &mut Criterion) {
    let catalogue = grid_network();

    c.bench_function("transit router build (20x20 grid)", |b| {
        b.iter(|| TransitRouter::new(black_box(&catalogue)))
    });

    let router = TransitRouter::new(&catalogue).expect("router builds");
    let corner = StopIdx::new(0);
    let opposite = StopIdx::new(GRID_SIZE * GRID_SIZE - 1);

    c.bench_function("transit route corner to corner", |b| {
        b.iter(|| router.route(black_box(corner), black_box(opposite)))
    });
}

criterion_group!(benches, transit_router_benchmark);
criterion_main!(benches);
