//! Unit tests for tc-router.
//!
//! All tests use hand-built catalogues so they run without any input file.

#[cfg(test)]
mod helpers {
    use tc_catalogue::{Catalogue, CatalogueBuilder, expand_route};
    use tc_core::{Coordinates, RoutingSettings};

    pub fn settings_6_40() -> RoutingSettings {
        RoutingSettings::new(6, 40.0)
    }

    /// Stops A, B, C and the circular bus "256": A > B > C > A.
    ///
    /// Distances: A→B 3000, B→C 4200, C→A 9900.
    pub fn circular_256() -> Catalogue {
        let mut b = CatalogueBuilder::new();
        let a = b.add_stop("A", Coordinates::new(55.611087, 37.20829)).unwrap();
        let bb = b.add_stop("B", Coordinates::new(55.595884, 37.209755)).unwrap();
        let c = b.add_stop("C", Coordinates::new(55.632761, 37.333324)).unwrap();
        b.set_distance(a, bb, 3_000).unwrap();
        b.set_distance(bb, c, 4_200).unwrap();
        b.set_distance(c, a, 9_900).unwrap();
        b.add_bus("256", vec![a, bb, c, a], true).unwrap();
        b.build()
    }

    /// Linear "750" over W-X-Y, circular "14" over Y > Z > Y, plus two
    /// stops no bus serves.
    ///
    /// At 30 km/h (500 m/min): W→Y on 750 is 1900 m = 3.8 min, Y→Z on 14 is
    /// 700 m = 1.4 min.
    pub fn transfer_network() -> Catalogue {
        let mut b = CatalogueBuilder::new();
        b.add_stop("W", Coordinates::new(55.574371, 37.6517)).unwrap();
        b.add_stop("X", Coordinates::new(55.581065, 37.64839)).unwrap();
        b.add_stop("Y", Coordinates::new(55.587655, 37.645687)).unwrap();
        b.add_stop("Z", Coordinates::new(55.592028, 37.653656)).unwrap();
        b.add_stop("Island", Coordinates::new(55.0, 37.0)).unwrap();
        b.add_stop("Rock", Coordinates::new(55.1, 37.1)).unwrap();
        b.set_distance_by_name("W", "X", 1_000).unwrap();
        b.set_distance_by_name("X", "Y", 900).unwrap();
        b.set_distance_by_name("Y", "Z", 700).unwrap();
        b.set_distance_by_name("Z", "Y", 800).unwrap();
        b.add_bus_by_names("750", &expand_route(vec!["W", "X", "Y"], false), false)
            .unwrap();
        b.add_bus_by_names("14", &["Y", "Z", "Y"], true).unwrap();
        b.build()
    }
}

// ── Graph construction ────────────────────────────────────────────────────────

#[cfg(test)]
mod graph {
    use approx::assert_relative_eq;

    use tc_catalogue::CatalogueBuilder;
    use tc_core::{Coordinates, RoutingSettings, VertexId};

    use crate::{EdgeKind, TransitGraphBuilder, build_transit_graph};

    #[test]
    fn exhausted_id_space_is_an_error() {
        use tc_core::VertexId;

        use crate::RouterError;
        use crate::graph::graph_id;

        assert_eq!(graph_id(5, "vertex", VertexId::from_index).unwrap(), VertexId(5));
        let err = graph_id(u32::MAX as usize, "vertex", VertexId::from_index).unwrap_err();
        assert!(matches!(err, RouterError::GraphTooLarge("vertex")));
    }

    #[test]
    fn empty_build() {
        let g = TransitGraphBuilder::new().build().unwrap();
        assert_eq!(g.vertex_count(), 0);
        assert_eq!(g.edge_count(), 0);
        assert!(g.is_empty());
    }

    #[test]
    fn two_vertices_per_stop_and_pairwise_rides() {
        let cat = super::helpers::circular_256();
        let g = build_transit_graph(&cat, &super::helpers::settings_6_40()).unwrap();
        assert_eq!(g.vertex_count(), 6);
        // 3 wait edges + 4-stop traversal → 3 + 2 + 1 ride edges.
        assert_eq!(g.edge_count(), 9);

        let waits = g.edge_kind.iter().filter(|k| matches!(k, EdgeKind::Wait { .. })).count();
        assert_eq!(waits, 3);
    }

    #[test]
    fn wait_edge_topology() {
        let cat = super::helpers::circular_256();
        let g = build_transit_graph(&cat, &super::helpers::settings_6_40()).unwrap();
        for (stop, _) in cat.stops() {
            let v = g.stop_vertices(stop).unwrap();
            assert_eq!(g.vertex_stop[v.arrival.index()], stop);
            assert_eq!(g.vertex_stop[v.departure.index()], stop);
            // Arrival has exactly one out-edge: the wait.
            let out: Vec<_> = g.out_edges(v.arrival).collect();
            assert_eq!(out.len(), 1);
            assert_eq!(g.edge_to[out[0].index()], v.departure);
            assert_eq!(g.edge_kind[out[0].index()], EdgeKind::Wait { stop });
            assert_eq!(g.edge_weight[out[0].index()], 6.0);
        }
    }

    #[test]
    fn ride_weights_accumulate_distance() {
        let cat = super::helpers::circular_256();
        let g = build_transit_graph(&cat, &super::helpers::settings_6_40()).unwrap();
        let a = g.stop_vertices(cat.stop_id("A").unwrap()).unwrap();
        let c = g.stop_vertices(cat.stop_id("C").unwrap()).unwrap();

        let a_to_c = g
            .out_edges(a.departure)
            .find(|e| g.edge_to[e.index()] == c.arrival)
            .unwrap();
        assert_relative_eq!(g.edge_weight[a_to_c.index()], 7_200.0 / (40_000.0 / 60.0), epsilon = 1e-9);
        match g.edge_kind[a_to_c.index()] {
            EdgeKind::Ride { bus, span_count } => {
                assert_eq!(bus, cat.bus_id("256").unwrap());
                assert_eq!(span_count, 2);
            }
            other => panic!("expected ride edge, got {other:?}"),
        }
    }

    #[test]
    fn departure_edges_only_ride() {
        let cat = super::helpers::circular_256();
        let g = build_transit_graph(&cat, &super::helpers::settings_6_40()).unwrap();
        let a = g.stop_vertices(cat.stop_id("A").unwrap()).unwrap();
        // A is boarded at index 0 only (index 3 is the last stop).
        assert_eq!(g.out_degree(a.departure), 3);
        for e in g.out_edges(a.departure) {
            assert_eq!(g.edge_from[e.index()], a.departure);
            assert!(matches!(g.edge_kind[e.index()], EdgeKind::Ride { .. }));
        }
    }

    #[test]
    fn single_stop_bus_adds_no_rides() {
        let mut b = CatalogueBuilder::new();
        let a = b.add_stop("A", Coordinates::new(0.0, 0.0)).unwrap();
        b.add_bus("stub", vec![a], true).unwrap();
        let cat = b.build();
        let g = build_transit_graph(&cat, &RoutingSettings::new(2, 20.0)).unwrap();
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn missing_distance_gives_zero_weight_ride() {
        let mut b = CatalogueBuilder::new();
        let a = b.add_stop("A", Coordinates::new(0.0, 0.0)).unwrap();
        let c = b.add_stop("C", Coordinates::new(0.0, 0.1)).unwrap();
        b.add_bus("gap", vec![a, c], true).unwrap();
        let cat = b.build();
        let g = build_transit_graph(&cat, &RoutingSettings::new(2, 20.0)).unwrap();
        let ride = g
            .out_edges(VertexId(1))
            .next()
            .unwrap();
        assert_eq!(g.edge_weight[ride.index()], 0.0);
    }

    #[test]
    fn rebuild_is_identical() {
        let cat = super::helpers::transfer_network();
        let s = RoutingSettings::new(2, 30.0);
        assert_eq!(build_transit_graph(&cat, &s).unwrap(), build_transit_graph(&cat, &s).unwrap());
    }

    #[test]
    fn csr_row_pointer_consistent() {
        let cat = super::helpers::transfer_network();
        let g = build_transit_graph(&cat, &RoutingSettings::new(2, 30.0)).unwrap();
        let total: usize = (0..g.vertex_count() as u32)
            .map(|v| g.out_degree(VertexId(v)))
            .sum();
        assert_eq!(total, g.edge_count());
    }
}

// ── Route queries ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod routing {
    use approx::assert_relative_eq;

    use tc_core::{RoutingSettings, VertexId};

    use crate::{Path, PathFinder, RouterError, Segment, TransitGraph, TransportRouter};

    #[test]
    fn wait_then_single_ride() {
        let cat = super::helpers::circular_256();
        let router = TransportRouter::new(&cat, super::helpers::settings_6_40()).unwrap();
        let it = router.route_by_name("A", "C").unwrap();

        assert_eq!(it.segments.len(), 2);
        assert_eq!(it.segments[0], Segment::Wait { stop: cat.stop_id("A").unwrap(), time: 6.0 });
        match it.segments[1] {
            Segment::Ride { bus, time, span_count } => {
                assert_eq!(bus, cat.bus_id("256").unwrap());
                assert_eq!(span_count, 2);
                assert_relative_eq!(time, 10.8, epsilon = 1e-9);
            }
            other => panic!("expected ride, got {other:?}"),
        }
        assert_relative_eq!(it.total_time, 6.0 + 7_200.0 / (40_000.0 / 60.0), epsilon = 1e-9);
    }

    #[test]
    fn total_time_is_sum_of_segments() {
        let cat = super::helpers::transfer_network();
        let router = TransportRouter::new(&cat, RoutingSettings::new(2, 30.0)).unwrap();
        let it = router.route_by_name("W", "Z").unwrap();
        let sum: f64 = it.segments.iter().map(Segment::time).sum();
        assert_relative_eq!(it.total_time, sum, epsilon = 1e-9);
    }

    #[test]
    fn transfer_itinerary() {
        let cat = super::helpers::transfer_network();
        let router = TransportRouter::new(&cat, RoutingSettings::new(2, 30.0)).unwrap();
        let it = router.route_by_name("W", "Z").unwrap();

        let y = cat.stop_id("Y").unwrap();
        assert_eq!(it.ride_count(), 2);
        assert_eq!(it.segments.len(), 4);
        assert!(matches!(it.segments[0], Segment::Wait { time, .. } if time == 2.0));
        assert!(matches!(it.segments[1], Segment::Ride { span_count: 2, .. }));
        assert_eq!(it.segments[2], Segment::Wait { stop: y, time: 2.0 });
        assert!(matches!(it.segments[3], Segment::Ride { span_count: 1, .. }));
        assert_relative_eq!(it.total_time, 2.0 + 3.8 + 2.0 + 1.4, epsilon = 1e-9);
    }

    #[test]
    fn stays_on_bus_instead_of_reboarding() {
        // W→Y on "750" passes X; re-boarding at X would cost another wait.
        let cat = super::helpers::transfer_network();
        let router = TransportRouter::new(&cat, RoutingSettings::new(10, 30.0)).unwrap();
        let it = router.route_by_name("W", "Y").unwrap();
        assert_eq!(it.ride_count(), 1);
        assert_relative_eq!(it.total_time, 10.0 + 3.8, epsilon = 1e-9);
    }

    #[test]
    fn same_stop_is_trivial() {
        let cat = super::helpers::circular_256();
        let router = TransportRouter::new(&cat, super::helpers::settings_6_40()).unwrap();
        let it = router.route_by_name("B", "B").unwrap();
        assert!(it.is_trivial());
        assert_eq!(it.total_time, 0.0);
    }

    #[test]
    fn unknown_stop_is_reported() {
        let cat = super::helpers::circular_256();
        let router = TransportRouter::new(&cat, super::helpers::settings_6_40()).unwrap();
        assert!(matches!(router.route_by_name("X", "Y"), Err(RouterError::UnknownStop(ref s)) if s == "X"));
        assert!(matches!(router.route_by_name("A", "Nowhere"), Err(RouterError::UnknownStop(_))));
    }

    #[test]
    fn disconnected_stops_are_unreachable() {
        let cat = super::helpers::transfer_network();
        let router = TransportRouter::new(&cat, RoutingSettings::new(2, 30.0)).unwrap();
        assert!(matches!(
            router.route_by_name("Island", "Rock"),
            Err(RouterError::Unreachable { .. })
        ));
        let island = cat.stop_id("Island").unwrap();
        let w = cat.stop_id("W").unwrap();
        assert!(router.find_route(island, w).is_none());
    }

    #[test]
    fn repeated_query_is_identical() {
        let cat = super::helpers::transfer_network();
        let router = TransportRouter::new(&cat, RoutingSettings::new(2, 30.0)).unwrap();
        let first = router.route_by_name("Z", "W").unwrap();
        let second = router.route_by_name("Z", "W").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn invalid_settings_rejected() {
        let cat = super::helpers::circular_256();
        let result = TransportRouter::new(&cat, RoutingSettings::new(6, 0.0));
        assert!(matches!(result, Err(RouterError::Settings(_))));
    }

    struct NeverFinds;

    impl PathFinder for NeverFinds {
        fn shortest_path(&self, _: &TransitGraph, _: VertexId, _: VertexId) -> Option<Path> {
            None
        }
    }

    #[test]
    fn custom_path_finder_is_used() {
        let cat = super::helpers::circular_256();
        let router = TransportRouter::with_path_finder(&cat, super::helpers::settings_6_40(), NeverFinds).unwrap();
        assert!(matches!(router.route_by_name("A", "C"), Err(RouterError::Unreachable { .. })));
    }
}
