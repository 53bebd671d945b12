use wayfarer_core::network::{
    kmh::Kmh, meters::Meters, minutes::Minutes, routing_settings::RoutingSettings,
    stop::StopIdx, transit_catalogue::TransitCatalogue,
    transit_catalogue_builder::TransitCatalogueBuilder,
};

fn settings() -> RoutingSettings {
    RoutingSettings::new(Minutes::new(2.0), Kmh::new(30.0))
}

/// Southern Moscow: three lines around Biryulyovo, one of them out-and-back,
/// plus a stop no bus serves.
pub fn biryulyovo_network() -> TransitCatalogue {
    let mut builder = TransitCatalogueBuilder::default();
    builder
        .set_routing_settings(settings())
        .add_bus(
            "297",
            [
                "Biryulyovo Zapadnoye",
                "Biryulyovo Tovarnaya",
                "Universam",
                "Biryusinka",
                "Apteka",
                "Biryulyovo Zapadnoye",
            ],
            true,
        )
        .add_bus(
            "635",
            [
                "Biryulyovo Tovarnaya",
                "Universam",
                "Biryusinka",
                "TETs 26",
                "Pokrovskaya",
                "Prazhskaya",
            ],
            false,
        )
        .add_bus(
            "828",
            [
                "Biryulyovo Zapadnoye",
                "TETs 26",
                "Biryusinka",
                "Universam",
                "Pokrovskaya",
                "Rossoshanskaya ulitsa",
                "Biryulyovo Zapadnoye",
            ],
            true,
        )
        .add_stop("Biryulyovo Zapadnoye", 55.574371, 37.6517)
        .add_stop("Universam", 55.587655, 37.645687)
        .add_stop("Biryulyovo Tovarnaya", 55.592028, 37.653656)
        .add_stop("Biryusinka", 55.581065, 37.64839)
        .add_stop("Apteka", 55.580023, 37.659164)
        .add_stop("TETs 26", 55.580999, 37.652296)
        .add_stop("Pokrovskaya", 55.603601, 37.635517)
        .add_stop("Rossoshanskaya ulitsa", 55.595579, 37.605757)
        .add_stop("Prazhskaya", 55.611678, 37.603831)
        .add_stop("Tolstopaltsevo", 55.611087, 37.20829)
        .add_road_distance("Biryulyovo Zapadnoye", "Biryulyovo Tovarnaya", Meters::new(2600.0))
        .add_road_distance("Biryulyovo Zapadnoye", "TETs 26", Meters::new(1100.0))
        .add_road_distance("Biryulyovo Tovarnaya", "Universam", Meters::new(890.0))
        .add_road_distance("Universam", "Biryusinka", Meters::new(760.0))
        .add_road_distance("Universam", "Biryulyovo Tovarnaya", Meters::new(1380.0))
        .add_road_distance("Universam", "Pokrovskaya", Meters::new(2460.0))
        .add_road_distance("Biryusinka", "Apteka", Meters::new(210.0))
        .add_road_distance("Biryusinka", "TETs 26", Meters::new(400.0))
        .add_road_distance("Apteka", "Biryulyovo Zapadnoye", Meters::new(1420.0))
        .add_road_distance("TETs 26", "Pokrovskaya", Meters::new(2850.0))
        .add_road_distance("Pokrovskaya", "Rossoshanskaya ulitsa", Meters::new(3140.0))
        .add_road_distance("Rossoshanskaya ulitsa", "Biryulyovo Zapadnoye", Meters::new(7500.0))
        .add_road_distance("Prazhskaya", "Pokrovskaya", Meters::new(2260.0));

    builder.build().expect("valid network")
}

/// A loop that passes Lipetskaya ulitsa 46 twice, with a long last leg.
pub fn zagorye_network() -> TransitCatalogue {
    let mut builder = TransitCatalogueBuilder::default();
    builder
        .set_routing_settings(settings())
        .add_bus(
            "289",
            [
                "Zagorye",
                "Lipetskaya ulitsa 46",
                "Lipetskaya ulitsa 40",
                "Lipetskaya ulitsa 40",
                "Lipetskaya ulitsa 46",
                "Moskvorechye",
                "Zagorye",
            ],
            true,
        )
        .add_stop("Zagorye", 55.579909, 37.68372)
        .add_stop("Lipetskaya ulitsa 46", 55.581065, 37.64839)
        .add_stop("Lipetskaya ulitsa 40", 55.587655, 37.645687)
        .add_stop("Moskvorechye", 55.638433, 37.638433)
        .add_road_distance("Zagorye", "Lipetskaya ulitsa 46", Meters::new(230.0))
        .add_road_distance("Lipetskaya ulitsa 46", "Lipetskaya ulitsa 40", Meters::new(390.0))
        .add_road_distance("Lipetskaya ulitsa 46", "Moskvorechye", Meters::new(12400.0))
        .add_road_distance("Lipetskaya ulitsa 40", "Lipetskaya ulitsa 40", Meters::new(1090.0))
        .add_road_distance("Lipetskaya ulitsa 40", "Lipetskaya ulitsa 46", Meters::new(380.0))
        .add_road_distance("Moskvorechye", "Zagorye", Meters::new(10000.0));

    builder.build().expect("valid network")
}

pub fn stop(catalogue: &TransitCatalogue, name: &str) -> StopIdx {
    catalogue
        .stop_by_name(name)
        .unwrap_or_else(|| panic!("unknown stop {name}"))
}
