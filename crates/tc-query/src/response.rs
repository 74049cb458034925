//! Output model, serialized as one JSON object per request:
//!
//! ```json
//! { "request_id": 1, "curvature": 1.36, "route_length": 5950, "stop_count": 6, "unique_stop_count": 5 }
//! { "request_id": 2, "buses": ["256", "828"] }
//! { "request_id": 3, "total_time": 16.8, "items": [
//!     { "type": "Wait", "stop_name": "A", "time": 6 },
//!     { "type": "Bus", "bus": "256", "span_count": 2, "time": 10.8 } ] }
//! { "request_id": 4, "error_message": "not found" }
//! ```

use serde::Serialize;

pub const NOT_FOUND: &str = "not found";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Response {
    pub request_id: i64,
    #[serde(flatten)]
    pub body:       ResponseBody,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Bus {
        /// `null` for a route with zero geographic length.
        curvature:         Option<f64>,
        route_length:      u64,
        stop_count:        usize,
        unique_stop_count: usize,
    },
    Stop {
        buses: Vec<String>,
    },
    Route {
        total_time: f64,
        items:      Vec<RouteItem>,
    },
    Error {
        error_message: String,
    },
}

impl ResponseBody {
    pub fn not_found() -> Self {
        ResponseBody::Error { error_message: NOT_FOUND.to_string() }
    }
}

/// One itinerary segment, tagged by `"type"`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum RouteItem {
    Wait { stop_name: String, time: f64 },
    Bus { bus: String, span_count: u32, time: f64 },
}
