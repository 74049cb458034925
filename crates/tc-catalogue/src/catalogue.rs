//! The frozen, read-only catalogue.
//!
//! A `Catalogue` can only be obtained from
//! [`CatalogueBuilder::build`](crate::CatalogueBuilder::build) and exposes
//! no mutation, so it can be shared by reference between any number of
//! readers (stat queries, the router, a renderer).

use log::{info, warn};

use tc_core::{BusId, Coordinates, StopId};

use crate::{Bus, DistanceIndex, EntityStore, Stop};

pub struct Catalogue {
    store:     EntityStore,
    distances: DistanceIndex,

    // ── Derived views, computed once in `from_parts` ─────────────────────
    /// Buses serving each stop, indexed by `StopId`, sorted by bus name.
    buses_by_stop: Vec<Vec<BusId>>,
    /// Every bus, sorted by name.
    sorted_buses:  Vec<BusId>,
}

impl Catalogue {
    pub(crate) fn from_parts(store: EntityStore, distances: DistanceIndex) -> Self {
        let mut buses_by_stop: Vec<Vec<BusId>> = vec![Vec::new(); store.stop_count()];
        for (bus_id, bus) in store.buses() {
            for stop in &bus.stops {
                buses_by_stop[stop.index()].push(bus_id);
            }
        }
        let by_name = |a: &BusId, b: &BusId| store.bus(*a).name.cmp(&store.bus(*b).name);
        for buses in &mut buses_by_stop {
            buses.sort_by(by_name);
            buses.dedup();
        }

        let mut sorted_buses: Vec<BusId> = store.buses().map(|(id, _)| id).collect();
        sorted_buses.sort_by(by_name);

        // Legs with no recorded distance count as 0 m and silently shorten
        // route length and curvature; make them visible.
        for (_, bus) in store.buses() {
            for leg in bus.stops.windows(2) {
                if distances.lookup(leg[0], leg[1]).is_none() {
                    warn!(
                        "bus {:?}: no road distance between {:?} and {:?}, using 0 m",
                        bus.name,
                        store.stop(leg[0]).name,
                        store.stop(leg[1]).name,
                    );
                }
            }
        }

        info!(
            "catalogue frozen: {} stops, {} buses, {} road distances",
            store.stop_count(),
            store.bus_count(),
            distances.len(),
        );

        Self { store, distances, buses_by_stop, sorted_buses }
    }

    // ── Entity lookup ─────────────────────────────────────────────────────

    /// # Panics
    /// Panics if `id` was not issued by this catalogue.
    #[inline]
    pub fn stop(&self, id: StopId) -> &Stop {
        self.store.stop(id)
    }

    /// # Panics
    /// Panics if `id` was not issued by this catalogue.
    #[inline]
    pub fn bus(&self, id: BusId) -> &Bus {
        self.store.bus(id)
    }

    pub fn stop_id(&self, name: &str) -> Option<StopId> {
        self.store.stop_id(name)
    }

    pub fn bus_id(&self, name: &str) -> Option<BusId> {
        self.store.bus_id(name)
    }

    pub fn stop_by_name(&self, name: &str) -> Option<&Stop> {
        self.stop_id(name).map(|id| self.stop(id))
    }

    pub fn bus_by_name(&self, name: &str) -> Option<&Bus> {
        self.bus_id(name).map(|id| self.bus(id))
    }

    /// All stops in insertion order.
    pub fn stops(&self) -> impl Iterator<Item = (StopId, &Stop)> + '_ {
        self.store.stops()
    }

    /// All buses in insertion order.
    pub fn buses(&self) -> impl Iterator<Item = (BusId, &Bus)> + '_ {
        self.store.buses()
    }

    pub fn stop_count(&self) -> usize {
        self.store.stop_count()
    }

    pub fn bus_count(&self) -> usize {
        self.store.bus_count()
    }

    // ── Derived views ─────────────────────────────────────────────────────

    /// Every bus sorted lexicographically by name.
    pub fn sorted_buses(&self) -> &[BusId] {
        &self.sorted_buses
    }

    /// Buses whose route passes through `stop`, sorted by name.
    ///
    /// # Panics
    /// Panics if `stop` was not issued by this catalogue.
    pub fn buses_for_stop(&self, stop: StopId) -> &[BusId] {
        &self.buses_by_stop[stop.index()]
    }

    /// Names of the buses serving the stop called `name`, sorted.
    ///
    /// `None` if the stop is unknown; an empty `Vec` if it exists but no bus
    /// serves it.
    pub fn bus_names_for_stop(&self, name: &str) -> Option<Vec<&str>> {
        let stop = self.stop_id(name)?;
        Some(
            self.buses_for_stop(stop)
                .iter()
                .map(|&b| self.bus(b).name.as_str())
                .collect(),
        )
    }

    /// Stops served by at least one bus, sorted by name.
    pub fn stops_on_routes(&self) -> Vec<StopId> {
        let mut served: Vec<StopId> = self
            .stops()
            .filter(|(id, _)| !self.buses_by_stop[id.index()].is_empty())
            .map(|(id, _)| id)
            .collect();
        served.sort_by(|a, b| self.stop(*a).name.cmp(&self.stop(*b).name));
        served
    }

    /// Coordinates of `bus`'s stops in traversal order.
    pub fn route_coordinates(&self, bus: BusId) -> impl Iterator<Item = Coordinates> + '_ {
        self.bus(bus)
            .stops
            .iter()
            .map(|&s| self.stop(s).coordinates)
    }

    // ── Distances ─────────────────────────────────────────────────────────

    /// Road distance in metres; see [`DistanceIndex::get`].
    #[inline]
    pub fn distance(&self, from: StopId, to: StopId) -> u32 {
        self.distances.get(from, to)
    }

    pub fn distances(&self) -> &DistanceIndex {
        &self.distances
    }
}
