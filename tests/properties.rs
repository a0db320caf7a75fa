use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use waste_routing::constructive::nearest_neighbor_route;
use waste_routing::distance::haversine_km;
use waste_routing::estimation::FixedYield;
use waste_routing::evaluation::RouteCoster;
use waste_routing::models::{Bin, CollectionCandidate, Coordinate, SelectionReason};

fn coordinate() -> impl Strategy<Value = Coordinate> {
    (-89.0..89.0f64, -179.0..179.0f64).prop_map(|(lat, lon)| Coordinate::new(lat, lon))
}

fn candidates(max: usize) -> impl Strategy<Value = Vec<CollectionCandidate>> {
    prop::collection::vec(coordinate(), 1..max).prop_map(|points| {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 6, 0, 0).unwrap();
        points
            .into_iter()
            .enumerate()
            .map(|(i, loc)| {
                let bin = Bin::new(format!("BIN{i:03}"), "", loc, now);
                CollectionCandidate::snapshot(&bin, SelectionReason::FillLevel)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn test_distance_symmetric(a in coordinate(), b in coordinate()) {
        let ab = haversine_km(a, b);
        let ba = haversine_km(b, a);
        prop_assert!((ab - ba).abs() < 1e-9);
        prop_assert!(ab >= 0.0);
    }

    #[test]
    fn test_distance_to_self_is_zero(a in coordinate()) {
        prop_assert!(haversine_km(a, a).abs() < 1e-10);
    }

    #[test]
    fn test_route_is_permutation(c in candidates(12)) {
        let route = nearest_neighbor_route(&c, 2.5);
        prop_assert_eq!(route.len(), c.len());
        prop_assert_eq!(route.bin_ids()[0], c[0].bin_id());

        let mut routed: Vec<&str> = route.bin_ids();
        let mut input: Vec<&str> = c.iter().map(|x| x.bin_id()).collect();
        routed.sort_unstable();
        input.sort_unstable();
        prop_assert_eq!(routed, input);
    }

    #[test]
    fn test_route_deterministic(c in candidates(12)) {
        let a = nearest_neighbor_route(&c, 2.5);
        let b = nearest_neighbor_route(&c, 2.5);
        prop_assert_eq!(a.bin_ids(), b.bin_ids());
        prop_assert_eq!(a.total_distance_km(), b.total_distance_km());
    }

    #[test]
    fn test_cost_components_non_negative(
        c in candidates(10),
        weight in 0.0..200.0f64,
        rate in 0.0..1.0f64,
    ) {
        let route = nearest_neighbor_route(&c, 2.5);
        let cost = RouteCoster::default().cost(&route, &mut FixedYield::new(weight, rate));
        prop_assert!(cost.distance_km >= 2.5);
        prop_assert!(cost.fuel >= 0.0);
        prop_assert!(cost.labor >= 0.0);
        prop_assert!(cost.depreciation >= 0.0);
        prop_assert!(cost.recycling_revenue >= 0.0);
        prop_assert!(
            (cost.net_cost() - (cost.operating_cost() - cost.recycling_revenue)).abs() < 1e-9
        );
    }
}
