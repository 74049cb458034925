//! Base-request loader.
//!
//! # Record format
//!
//! One record per stop or bus, tagged by `"type"`, as in the `base_requests`
//! array of an input document:
//!
//! ```json
//! { "type": "Stop", "name": "A", "latitude": 55.611087, "longitude": 37.20829,
//!   "road_distances": { "B": 3000 } }
//! { "type": "Bus", "name": "256", "stops": ["A", "B", "C", "A"], "is_roundtrip": true }
//! ```
//!
//! Bus `stops` are written as on the timetable: a linear route lists the
//! one-way leg and is mirrored on load via [`expand_route`].
//!
//! Records are applied in three passes (stops, then distances, then buses)
//! so that any record may reference a stop declared later.  The first
//! failure aborts the load.

use std::collections::BTreeMap;

use log::debug;
use serde::Deserialize;

use tc_core::Coordinates;

use crate::{Catalogue, CatalogueBuilder, CatalogueResult, expand_route};

// ── Records ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop(StopRecord),
    Bus(BusRecord),
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct StopRecord {
    pub name:           String,
    pub latitude:       f64,
    pub longitude:      f64,
    /// Directed distances in metres from this stop to the named stops.
    #[serde(default)]
    pub road_distances: BTreeMap<String, u32>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct BusRecord {
    pub name:         String,
    pub stops:        Vec<String>,
    pub is_roundtrip: bool,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Build a frozen [`Catalogue`] from base requests.
pub fn load_base_requests(requests: &[BaseRequest]) -> CatalogueResult<Catalogue> {
    let mut builder = CatalogueBuilder::new();
    apply_base_requests(&mut builder, requests)?;
    Ok(builder.build())
}

/// Apply base requests to an existing builder (three-pass order).
pub fn apply_base_requests(builder: &mut CatalogueBuilder, requests: &[BaseRequest]) -> CatalogueResult<()> {
    let stops: Vec<&StopRecord> = requests
        .iter()
        .filter_map(|r| match r {
            BaseRequest::Stop(s) => Some(s),
            BaseRequest::Bus(_) => None,
        })
        .collect();
    let buses: Vec<&BusRecord> = requests
        .iter()
        .filter_map(|r| match r {
            BaseRequest::Bus(b) => Some(b),
            BaseRequest::Stop(_) => None,
        })
        .collect();

    for s in &stops {
        builder.add_stop(s.name.as_str(), Coordinates::new(s.latitude, s.longitude))?;
    }

    for s in &stops {
        for (to, &metres) in &s.road_distances {
            builder.set_distance_by_name(&s.name, to, metres)?;
        }
    }

    for b in &buses {
        let route = expand_route(b.stops.clone(), b.is_roundtrip);
        builder.add_bus_by_names(&b.name, &route, b.is_roundtrip)?;
    }

    debug!("applied {} stop and {} bus records", stops.len(), buses.len());
    Ok(())
}
