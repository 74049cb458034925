//! Input document model.
//!
//! ```json
//! {
//!   "base_requests":    [ { "type": "Stop", … }, { "type": "Bus", … } ],
//!   "routing_settings": { "bus_wait_time": 6, "bus_velocity": 40 },
//!   "render_settings":  { … },
//!   "stat_requests":    [ { "id": 1, "type": "Route", "from": "A", "to": "C" } ]
//! }
//! ```
//!
//! Every top-level key is optional.  `render_settings` is accepted so that
//! documents written for a map renderer still load, but its content is not
//! interpreted.

use serde::Deserialize;

use tc_catalogue::BaseRequest;
use tc_core::RoutingSettings;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct InputDocument {
    #[serde(default)]
    pub base_requests:    Vec<BaseRequest>,
    #[serde(default)]
    pub stat_requests:    Vec<StatRequest>,
    #[serde(default)]
    pub routing_settings: Option<RoutingSettings>,
    #[serde(default)]
    pub render_settings:  Option<serde_json::Value>,
}

/// One query, tagged by `"type"`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum StatRequest {
    Bus { id: i64, name: String },
    Stop { id: i64, name: String },
    Route { id: i64, from: String, to: String },
    Map { id: i64 },
}

impl StatRequest {
    pub fn id(&self) -> i64 {
        match *self {
            StatRequest::Bus { id, .. }
            | StatRequest::Stop { id, .. }
            | StatRequest::Route { id, .. }
            | StatRequest::Map { id } => id,
        }
    }
}
