//! Per-bus route metrics.
//!
//! | Metric              | Definition                                        |
//! |---------------------|---------------------------------------------------|
//! | `route_stop_count`  | length of the stored traversal                    |
//! | `unique_stop_count` | number of distinct stops in the traversal         |
//! | `road_length`       | Σ road distance over consecutive pairs (metres)   |
//! | `geo_length`        | Σ great-circle distance over consecutive pairs    |
//! | `curvature`         | `road_length / geo_length`                        |
//!
//! Metrics are cheap (one pass over the route) and computed on demand.

use rustc_hash::FxHashSet;

use tc_core::BusId;

use crate::{Catalogue, CatalogueError, CatalogueResult};

/// Aggregate statistics for one bus, as reported to stat queries.
#[derive(Clone, Debug, PartialEq)]
pub struct BusStats {
    pub stop_count:        usize,
    pub unique_stop_count: usize,
    /// Road length in metres.
    pub route_length:      u64,
    /// `None` when the route has zero geographic length.
    pub curvature:         Option<f64>,
}

impl Catalogue {
    pub fn route_stop_count(&self, bus: BusId) -> usize {
        self.bus(bus).stops.len()
    }

    pub fn unique_stop_count(&self, bus: BusId) -> usize {
        self.bus(bus)
            .stops
            .iter()
            .collect::<FxHashSet<_>>()
            .len()
    }

    /// Road length in metres.
    pub fn road_length(&self, bus: BusId) -> u64 {
        self.bus(bus)
            .stops
            .windows(2)
            .map(|leg| u64::from(self.distance(leg[0], leg[1])))
            .sum()
    }

    /// Great-circle length in metres.
    pub fn geo_length(&self, bus: BusId) -> f64 {
        self.bus(bus)
            .stops
            .windows(2)
            .map(|leg| {
                self.stop(leg[0])
                    .coordinates
                    .distance_m(self.stop(leg[1]).coordinates)
            })
            .sum()
    }

    /// Ratio of road length to great-circle length.
    ///
    /// Fails with [`CatalogueError::DegenerateMetric`] when the great-circle
    /// length is zero (single-stop route, or every stop at one point).
    pub fn curvature(&self, bus: BusId) -> CatalogueResult<f64> {
        let geo = self.geo_length(bus);
        if geo <= 0.0 || !geo.is_finite() {
            return Err(CatalogueError::DegenerateMetric(self.bus(bus).name.clone()));
        }
        Ok(self.road_length(bus) as f64 / geo)
    }

    pub fn bus_stats(&self, bus: BusId) -> BusStats {
        BusStats {
            stop_count:        self.route_stop_count(bus),
            unique_stop_count: self.unique_stop_count(bus),
            route_length:      self.road_length(bus),
            curvature:         self.curvature(bus).ok(),
        }
    }

    /// Stats for the bus called `name`, or `None` if there is no such bus.
    pub fn bus_stats_by_name(&self, name: &str) -> Option<BusStats> {
        self.bus_id(name).map(|id| self.bus_stats(id))
    }
}
