use metro::{
    fare::{FareCalculator, FareRules, RiderType},
    network::Network,
    system::MetroSystem,
};
use std::{process::exit, time::Instant};
use tracing::{error, info};

const USAGE: &str = "Usage: metro-cli <links.csv> <from> <to> [adult|student|senior] [fare_rules.json]";

fn main() {
    tracing_subscriber::fmt().init();

    let args: Vec<_> = std::env::args().collect();
    if args.len() < 4 {
        error!("Missing arguments");
        eprintln!("{USAGE}");
        exit(1);
    }
    let (links_path, from, to) = (&args[1], &args[2], &args[3]);

    let rider_type: RiderType = match args.get(4).map(|value| value.parse()) {
        Some(Ok(value)) => value,
        Some(Err(err)) => {
            error!("{err}");
            exit(1);
        }
        None => RiderType::default(),
    };

    let rules = match args.get(5) {
        Some(path) => FareRules::from_path(path).unwrap_or_else(|err| {
            error!("Failed to load fare rules from {path}: {err}");
            exit(1);
        }),
        None => FareRules::default(),
    };

    info!("Loading network...");
    let now = Instant::now();
    let network = Network::from_csv_path(links_path).unwrap_or_else(|err| {
        error!("Failed to load network from {links_path}: {err}");
        exit(1);
    });
    info!("Loading network took {:?}", now.elapsed());

    let mut system = MetroSystem::new(network, FareCalculator::new(rules));
    let rider = system.register_rider("console", rider_type);
    let when = system.now();
    let quote = system
        .price_journey(&rider, from, to, when)
        .unwrap_or_else(|err| {
            error!("{err}");
            exit(1);
        });

    let peak = if system.fares().is_peak(&when) {
        "peak"
    } else {
        "off-peak"
    };
    println!("Route : {}", quote.journey);
    println!("Hops  : {}", quote.journey.hops);
    println!("Fare  : ₹{} ({rider_type}, {peak})", quote.fare);
}
