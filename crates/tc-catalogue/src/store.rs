//! Entity storage: stops and buses in index arenas with name lookup.
//!
//! Records are appended to plain `Vec`s and never removed or reordered.  The
//! `StopId`/`BusId` handed out on insertion is the record's position, so an
//! ID stays valid for the lifetime of the store even when the backing `Vec`
//! reallocates.  Name maps give O(1) expected-time lookup.

use rustc_hash::FxHashMap;

use tc_core::{BusId, Coordinates, StopId};

use crate::{CatalogueError, CatalogueResult};

// ── Records ───────────────────────────────────────────────────────────────────

/// A named geographic point.
#[derive(Clone, Debug, PartialEq)]
pub struct Stop {
    pub name:        String,
    pub coordinates: Coordinates,
}

/// A named ordered traversal of stops.
///
/// `stops` is always the full traversal: a linear route `A-B-C` is stored
/// as `A,B,C,B,A` (see [`expand_route`](crate::expand_route)).
#[derive(Clone, Debug, PartialEq)]
pub struct Bus {
    pub name:         String,
    pub stops:        Vec<StopId>,
    pub is_roundtrip: bool,
}

// ── EntityStore ───────────────────────────────────────────────────────────────

/// Owner of every [`Stop`] and [`Bus`] record.
#[derive(Default, Debug)]
pub struct EntityStore {
    stops:      Vec<Stop>,
    buses:      Vec<Bus>,
    stop_index: FxHashMap<String, StopId>,
    bus_index:  FxHashMap<String, BusId>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a stop and return its ID (sequential from 0).
    ///
    /// Fails with [`CatalogueError::DuplicateStop`] if the name is taken;
    /// the store is left unchanged in that case.
    pub fn add_stop(&mut self, name: impl Into<String>, coordinates: Coordinates) -> CatalogueResult<StopId> {
        let name = name.into();
        if self.stop_index.contains_key(&name) {
            return Err(CatalogueError::DuplicateStop(name));
        }
        let id = arena_id(self.stops.len(), "stop", StopId::from_index)?;
        self.stop_index.insert(name.clone(), id);
        self.stops.push(Stop { name, coordinates });
        Ok(id)
    }

    /// Insert a bus whose `stops` is the already-normalized full traversal.
    ///
    /// Every ID in `stops` must belong to this store.
    pub fn add_bus(
        &mut self,
        name: impl Into<String>,
        stops: Vec<StopId>,
        is_roundtrip: bool,
    ) -> CatalogueResult<BusId> {
        let name = name.into();
        if self.bus_index.contains_key(&name) {
            return Err(CatalogueError::DuplicateBus(name));
        }
        if stops.is_empty() {
            return Err(CatalogueError::EmptyRoute(name));
        }
        if let Some(bad) = stops.iter().find(|s| s.index() >= self.stops.len()) {
            return Err(CatalogueError::UnknownStop {
                referenced_by: format!("bus {name:?}"),
                stop:          bad.to_string(),
            });
        }
        let id = arena_id(self.buses.len(), "bus", BusId::from_index)?;
        self.bus_index.insert(name.clone(), id);
        self.buses.push(Bus { name, stops, is_roundtrip });
        Ok(id)
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// # Panics
    /// Panics if `id` was not issued by this store.
    #[inline]
    pub fn stop(&self, id: StopId) -> &Stop {
        &self.stops[id.index()]
    }

    /// # Panics
    /// Panics if `id` was not issued by this store.
    #[inline]
    pub fn bus(&self, id: BusId) -> &Bus {
        &self.buses[id.index()]
    }

    pub fn stop_id(&self, name: &str) -> Option<StopId> {
        self.stop_index.get(name).copied()
    }

    pub fn bus_id(&self, name: &str) -> Option<BusId> {
        self.bus_index.get(name).copied()
    }

    pub fn contains_stop(&self, id: StopId) -> bool {
        id.index() < self.stops.len()
    }

    // ── Iteration (insertion order) ───────────────────────────────────────

    pub fn stops(&self) -> impl Iterator<Item = (StopId, &Stop)> + '_ {
        (0..).map(StopId).zip(&self.stops)
    }

    pub fn buses(&self) -> impl Iterator<Item = (BusId, &Bus)> + '_ {
        (0..).map(BusId).zip(&self.buses)
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn bus_count(&self) -> usize {
        self.buses.len()
    }
}

/// ID for the next slot of an arena currently holding `len` records.
pub(crate) fn arena_id<I>(len: usize, arena: &'static str, from_index: fn(usize) -> Option<I>) -> CatalogueResult<I> {
    from_index(len).ok_or(CatalogueError::CapacityExceeded(arena))
}
