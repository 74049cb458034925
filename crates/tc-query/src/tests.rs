//! End-to-end tests for tc-query: JSON and text documents in, answers out.

#[cfg(test)]
mod helpers {
    /// Three stops, circular bus "256" A > B > C > A, linear bus "14" B - D,
    /// an unserved stop, and every kind of stat request.
    pub const DOCUMENT: &str = r#"{
        "base_requests": [
            { "type": "Bus", "name": "256", "stops": ["A", "B", "C", "A"], "is_roundtrip": true },
            { "type": "Stop", "name": "A", "latitude": 55.611087, "longitude": 37.20829,
              "road_distances": { "B": 3000 } },
            { "type": "Stop", "name": "B", "latitude": 55.595884, "longitude": 37.209755,
              "road_distances": { "C": 4200, "D": 500 } },
            { "type": "Stop", "name": "C", "latitude": 55.632761, "longitude": 37.333324,
              "road_distances": { "A": 9900 } },
            { "type": "Stop", "name": "D", "latitude": 55.6, "longitude": 37.21 },
            { "type": "Stop", "name": "Lonely", "latitude": 55.0, "longitude": 37.0 },
            { "type": "Bus", "name": "14", "stops": ["B", "D"], "is_roundtrip": false }
        ],
        "routing_settings": { "bus_wait_time": 6, "bus_velocity": 40 },
        "render_settings": { "width": 1200, "height": 500 },
        "stat_requests": [
            { "id": 1, "type": "Bus", "name": "256" },
            { "id": 2, "type": "Stop", "name": "B" },
            { "id": 3, "type": "Route", "from": "A", "to": "C" },
            { "id": 4, "type": "Route", "from": "X", "to": "Y" },
            { "id": 5, "type": "Route", "from": "A", "to": "Lonely" },
            { "id": 6, "type": "Bus", "name": "999" },
            { "id": 7, "type": "Stop", "name": "Lonely" },
            { "id": 8, "type": "Stop", "name": "Atlantis" },
            { "id": 9, "type": "Map" }
        ]
    }"#;
}

// ── JSON documents ────────────────────────────────────────────────────────────

#[cfg(test)]
mod json {
    use approx::assert_relative_eq;
    use serde_json::{Value, json};

    use crate::{InputDocument, QueryError, ResponseBody, RouteItem, StatRequest, process_document, process_json};

    fn answers() -> Vec<Value> {
        let responses = process_json(super::helpers::DOCUMENT.as_bytes()).unwrap();
        responses
            .iter()
            .map(|r| serde_json::to_value(r).unwrap())
            .collect()
    }

    #[test]
    fn one_response_per_request_in_order() {
        let ids: Vec<i64> = answers()
            .iter()
            .map(|v| v["request_id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, [1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn bus_stats() {
        let v = &answers()[0];
        assert_eq!(v["stop_count"], 4);
        assert_eq!(v["unique_stop_count"], 3);
        assert_eq!(v["route_length"], 17_100);
        assert_relative_eq!(v["curvature"].as_f64().unwrap(), 0.915_330_6, max_relative = 1e-6);
    }

    #[test]
    fn stop_buses_sorted() {
        assert_eq!(answers()[1], json!({ "request_id": 2, "buses": ["14", "256"] }));
        assert_eq!(answers()[6], json!({ "request_id": 7, "buses": [] }));
    }

    #[test]
    fn route_items() {
        let v = &answers()[2];
        assert_relative_eq!(v["total_time"].as_f64().unwrap(), 16.8, epsilon = 1e-9);
        let items = v["items"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], json!({ "type": "Wait", "stop_name": "A", "time": 6.0 }));
        assert_eq!(items[1]["type"], "Bus");
        assert_eq!(items[1]["bus"], "256");
        assert_eq!(items[1]["span_count"], 2);
        assert_relative_eq!(items[1]["time"].as_f64().unwrap(), 10.8, epsilon = 1e-9);
    }

    #[test]
    fn not_found_answers() {
        let all = answers();
        for i in [3, 4, 5, 7] {
            assert_eq!(all[i]["error_message"], "not found", "request {}", i + 1);
            assert_eq!(all[i].as_object().unwrap().len(), 2);
        }
    }

    #[test]
    fn map_is_unsupported() {
        assert_eq!(answers()[8]["error_message"], "map rendering is not supported");
    }

    #[test]
    fn route_without_settings_is_not_found() {
        let mut doc: InputDocument = serde_json::from_str(super::helpers::DOCUMENT).unwrap();
        doc.routing_settings = None;
        let responses = process_document(&doc).unwrap();
        assert_eq!(responses[2].body, ResponseBody::not_found());
        // Stat queries do not need a router.
        assert!(matches!(responses[0].body, ResponseBody::Bus { .. }));
    }

    #[test]
    fn degenerate_curvature_is_null() {
        let doc = r#"{
            "base_requests": [
                { "type": "Stop", "name": "Solo", "latitude": 1.0, "longitude": 1.0 },
                { "type": "Bus", "name": "0", "stops": ["Solo"], "is_roundtrip": true }
            ],
            "stat_requests": [ { "id": 1, "type": "Bus", "name": "0" } ]
        }"#;
        let responses = process_json(doc.as_bytes()).unwrap();
        let v = serde_json::to_value(&responses[0]).unwrap();
        assert!(v["curvature"].is_null());
        assert_eq!(v["stop_count"], 1);
    }

    #[test]
    fn integrity_violation_aborts() {
        let doc = r#"{ "base_requests": [
            { "type": "Bus", "name": "1", "stops": ["Ghost"], "is_roundtrip": true }
        ] }"#;
        assert!(matches!(process_json(doc.as_bytes()), Err(QueryError::Catalogue(_))));
    }

    #[test]
    fn invalid_velocity_aborts() {
        let doc = r#"{ "routing_settings": { "bus_wait_time": 1, "bus_velocity": 0 } }"#;
        assert!(matches!(process_json(doc.as_bytes()), Err(QueryError::Router(_))));
    }

    #[test]
    fn malformed_json_is_error() {
        assert!(matches!(process_json("{ not json".as_bytes()), Err(QueryError::Json(_))));
    }

    #[test]
    fn request_ids() {
        let r = StatRequest::Route { id: 42, from: "A".into(), to: "B".into() };
        assert_eq!(r.id(), 42);
        assert_eq!(StatRequest::Map { id: 3 }.id(), 3);
    }

    #[test]
    fn route_item_serialization() {
        let item = RouteItem::Bus { bus: "14".into(), span_count: 3, time: 1.5 };
        assert_eq!(
            serde_json::to_value(item).unwrap(),
            json!({ "type": "Bus", "bus": "14", "span_count": 3, "time": 1.5 })
        );
    }
}

// ── Text documents ────────────────────────────────────────────────────────────

#[cfg(test)]
mod text {
    use std::io::Cursor;

    use crate::process_text;
    use crate::text::format_significant;

    const INPUT: &str = "\
4
Stop A: 55.611087, 37.20829, 3000m to B
Stop B: 55.595884, 37.209755, 4200m to C
Stop C: 55.632761, 37.333324, 9900m to A
Bus 256: A > B > C > A

5
Bus 256
Bus 751
Stop B
Stop Nowhere
Bus 256
";

    fn run(input: &str) -> String {
        let mut out = Vec::new();
        process_text(Cursor::new(input), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn answers_each_stat_line() {
        let out = run(INPUT);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            [
                "Bus 256: 4 stops on route, 3 unique stops, 17100 route length, 0.915331 curvature",
                "Bus 751: not found",
                "Stop B: buses 256",
                "Stop Nowhere: not found",
                "Bus 256: 4 stops on route, 3 unique stops, 17100 route length, 0.915331 curvature",
            ]
        );
    }

    #[test]
    fn unserved_stop_has_no_buses() {
        let out = run("1\nStop A: 1.0, 1.0\n1\nStop A\n");
        assert_eq!(out, "Stop A: no buses\n");
    }

    #[test]
    fn base_only_document() {
        assert_eq!(run("1\nStop A: 1.0, 1.0\n"), "");
    }

    #[test]
    fn bad_count_line_is_error() {
        let mut out = Vec::new();
        assert!(process_text(Cursor::new("Stop A: 1.0, 1.0\n"), &mut out).is_err());
    }

    #[test]
    fn significant_digits() {
        assert_eq!(format_significant(1.361239, 6), "1.36124");
        assert_eq!(format_significant(0.9153305707, 6), "0.915331");
        assert_eq!(format_significant(1.5, 6), "1.5");
        assert_eq!(format_significant(1234567.0, 6), "1234567");
    }
}
