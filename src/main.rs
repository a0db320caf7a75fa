//! Demo: one collection cycle over four Manhattan bins, then a three-day run.
//!
//! Usage: `waste-routing [config.json]`

use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info};

use waste_routing::config::CycleConfig;
use waste_routing::cycle::{CollectionCycle, LogReporter};
use waste_routing::estimation::{SimulatedSorting, SimulatedYield};
use waste_routing::logging;
use waste_routing::models::{Bin, Coordinate, Fleet};
use waste_routing::sensors::SimulatedSensors;

const SIMULATED_DAYS: i64 = 3;

fn main() {
    logging::init();

    let config = match std::env::args().nth(1) {
        Some(path) => match CycleConfig::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                error!(%path, "failed to load configuration: {e}");
                std::process::exit(1)
            }
        },
        None => CycleConfig::default(),
    };

    let rng = |offset: u64| match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(offset)),
        None => StdRng::from_os_rng(),
    };

    let mut now = Utc::now();
    let mut fleet = demo_fleet(now);

    info!(bins = fleet.len(), "fleet deployed");
    for line in fleet.status_report() {
        info!("{line}");
    }

    let mut sensors = SimulatedSensors::new(rng(0));
    let estimator = match SimulatedYield::with_ranges(rng(1), config.estimation.clone()) {
        Ok(estimator) => estimator,
        Err(e) => {
            error!("invalid estimation ranges: {e}");
            std::process::exit(1)
        }
    };
    let mut cycle = CollectionCycle::new(&config, estimator)
        .with_sorter(SimulatedSorting::new(rng(2)));
    let mut reporter = LogReporter;

    cycle.run(&mut fleet, &mut sensors, now, &mut reporter);

    for day in 1..=SIMULATED_DAYS {
        now += Duration::days(1);
        info!(day, "simulated day");
        cycle.run(&mut fleet, &mut sensors, now, &mut reporter);
    }

    for line in fleet.status_report() {
        info!("{line}");
    }
}

fn demo_fleet(installed_at: chrono::DateTime<Utc>) -> Fleet {
    let sites = [
        ("BIN001", "Downtown Plaza", 40.7589, -73.9851),
        ("BIN002", "Central Park", 40.7829, -73.9654),
        ("BIN003", "Times Square", 40.7580, -73.9855),
        ("BIN004", "Brooklyn Bridge", 40.7061, -73.9969),
    ];

    let mut fleet = Fleet::new();
    for (id, name, lat, lon) in sites {
        fleet.deploy(Bin::new(id, name, Coordinate::new(lat, lon), installed_at));
    }
    fleet
}
