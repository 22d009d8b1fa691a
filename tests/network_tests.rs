use metro::network::{self, Network};

#[test]
fn add_station_is_idempotent_test() {
    let mut network = Network::new();
    network.add_station("CityCenter");
    network.add_station("CityCenter");
    assert_eq!(network.len(), 1);
    assert!(network.has_station("CityCenter"));
}

#[test]
fn connect_is_symmetric_test() {
    let mut network = Network::new();
    network.connect("AeroCity", "Terminal-1").unwrap();
    assert_eq!(network.neighbors("AeroCity"), vec!["Terminal-1"]);
    assert_eq!(network.neighbors("Terminal-1"), vec!["AeroCity"]);
}

#[test]
fn connect_twice_keeps_single_link_test() {
    let mut network = Network::new();
    network.connect("A", "B").unwrap();
    network.connect("B", "A").unwrap();
    assert_eq!(network.neighbors("A"), vec!["B"]);
    assert_eq!(network.neighbors("B"), vec!["A"]);
}

#[test]
fn self_loop_rejected_test() {
    let mut network = Network::new();
    let result = network.connect("Museum", "Museum");
    assert!(matches!(result, Err(network::Error::SelfLoop(name)) if name == "Museum"));
    assert!(network.is_empty());
}

#[test]
fn neighbors_of_unknown_station_test() {
    let network = Network::new();
    assert!(network.neighbors("Nowhere").is_empty());
}

#[test]
fn neighbors_keep_link_order_test() {
    let mut network = Network::new();
    network.connect("CityCenter", "Terminal-1").unwrap();
    network.connect("CityCenter", "Museum").unwrap();
    network.connect("CityCenter", "TechPark").unwrap();
    assert_eq!(
        network.neighbors("CityCenter"),
        vec!["Terminal-1", "Museum", "TechPark"]
    );
}

#[test]
fn all_stations_sorted_test() {
    let mut network = Network::new();
    network.connect("OldTown", "Riverside").unwrap();
    network.connect("AeroCity", "University").unwrap();
    assert_eq!(
        network.all_stations(),
        vec!["AeroCity", "OldTown", "Riverside", "University"]
    );
}

#[test]
fn load_from_csv_test() {
    let csv = "from_station,to_station\nAeroCity,Terminal-1\nTerminal-1, CityCenter\n";
    let network = Network::from_csv_reader(csv.as_bytes()).unwrap();
    assert_eq!(network.len(), 3);
    assert_eq!(
        network.neighbors("Terminal-1"),
        vec!["AeroCity", "CityCenter"]
    );
}

#[test]
fn load_from_csv_self_loop_test() {
    let csv = "from_station,to_station\nA,A\n";
    let result = Network::from_csv_reader(csv.as_bytes());
    assert!(matches!(result, Err(network::Error::SelfLoop(_))));
}

#[test]
fn load_from_csv_missing_column_test() {
    let csv = "from_station\nA\n";
    let result = Network::from_csv_reader(csv.as_bytes());
    assert!(matches!(result, Err(network::Error::Csv(_))));
}

#[test]
fn load_from_missing_file_test() {
    let result = Network::from_csv_path("/definitely/not/here/links.csv");
    assert!(matches!(result, Err(network::Error::Io(_))));
}
