use metro::network::{Journey, JourneyPlanner, Network};

fn demo_network() -> Network {
    let mut network = Network::new();
    let links = [
        ("AeroCity", "Terminal-1"),
        ("Terminal-1", "CityCenter"),
        ("CityCenter", "Museum"),
        ("Museum", "OldTown"),
        ("CityCenter", "TechPark"),
        ("TechPark", "LakeView"),
        ("LakeView", "University"),
        ("OldTown", "Riverside"),
        ("Riverside", "University"),
    ];
    for (a, b) in links {
        network.connect(a, b).unwrap();
    }
    network
}

fn ring_network(size: usize) -> Network {
    let mut network = Network::new();
    for i in 0..size {
        network
            .connect(&format!("R{i}"), &format!("R{}", (i + 1) % size))
            .unwrap();
    }
    network
}

fn names(journey: &Journey) -> Vec<&str> {
    journey.path.iter().map(|name| &**name).collect()
}

#[test]
fn demo_long_route_test() {
    let network = demo_network();
    let journey = JourneyPlanner::new(&network).shortest_path("AeroCity", "University");
    assert_eq!(journey.hops, 5);
    assert_eq!(
        names(&journey),
        vec![
            "AeroCity",
            "Terminal-1",
            "CityCenter",
            "TechPark",
            "LakeView",
            "University"
        ]
    );
}

#[test]
fn path_length_matches_hops_test() {
    let network = demo_network();
    let planner = network.planner();
    for src in network.all_stations() {
        for dst in network.all_stations() {
            let journey = planner.shortest_path(src, dst);
            assert_eq!(journey.path.len(), journey.hops + 1);
            assert_eq!(journey.origin(), Some(src));
            assert_eq!(journey.destination(), Some(dst));
        }
    }
}

#[test]
fn consecutive_stops_are_linked_test() {
    let network = demo_network();
    let journey = network.planner().shortest_path("Riverside", "AeroCity");
    for pair in journey.path.windows(2) {
        assert!(network.neighbors(&pair[0]).contains(&&*pair[1]));
    }
}

#[test]
fn same_station_test() {
    let network = demo_network();
    let journey = network.planner().shortest_path("Museum", "Museum");
    assert_eq!(names(&journey), vec!["Museum"]);
    assert_eq!(journey.hops, 0);
}

#[test]
fn unknown_station_test() {
    let network = demo_network();
    let planner = network.planner();
    for journey in [
        planner.shortest_path("Atlantis", "Museum"),
        planner.shortest_path("Museum", "Atlantis"),
        planner.shortest_path("Atlantis", "Atlantis"),
    ] {
        assert!(journey.is_empty());
        assert_eq!(journey.hops, 0);
    }
}

#[test]
fn unreachable_station_test() {
    let mut network = demo_network();
    network.connect("Island-North", "Island-South").unwrap();
    let journey = network.planner().shortest_path("AeroCity", "Island-South");
    assert!(journey.is_empty());
    assert_eq!(journey.hops, 0);
}

#[test]
fn hops_equal_ring_distance_test() {
    const SIZE: usize = 9;
    let network = ring_network(SIZE);
    let planner = network.planner();
    for k in 0..SIZE {
        let journey = planner.shortest_path("R0", &format!("R{k}"));
        assert_eq!(journey.hops, k.min(SIZE - k), "distance to R{k}");
    }
}

#[test]
fn tie_follows_link_order_test() {
    let mut network = Network::new();
    network.connect("A", "B").unwrap();
    network.connect("A", "C").unwrap();
    network.connect("C", "D").unwrap();
    network.connect("B", "D").unwrap();
    let journey = network.planner().shortest_path("A", "D");
    assert_eq!(names(&journey), vec!["A", "B", "D"]);
}

#[test]
fn journey_display_test() {
    let network = demo_network();
    let journey = network.planner().shortest_path("Museum", "Terminal-1");
    assert_eq!(
        journey.to_string(),
        "Museum  →  CityCenter  →  Terminal-1"
    );
}
