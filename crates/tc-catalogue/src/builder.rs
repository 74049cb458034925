//! Load-phase construction of a [`Catalogue`].
//!
//! # Usage
//!
//! ```rust
//! use tc_core::Coordinates;
//! use tc_catalogue::{CatalogueBuilder, expand_route};
//!
//! let mut b = CatalogueBuilder::new();
//! let a = b.add_stop("A", Coordinates::new(55.611087, 37.20829)).unwrap();
//! let c = b.add_stop("C", Coordinates::new(55.632761, 37.333324)).unwrap();
//! b.set_distance(a, c, 9_900).unwrap();
//! b.add_bus("14", expand_route(vec![a, c], false), false).unwrap();
//!
//! let catalogue = b.build();
//! assert_eq!(catalogue.route_stop_count(catalogue.bus_id("14").unwrap()), 3);
//! ```

use tc_core::{BusId, Coordinates, StopId};

use crate::{Catalogue, CatalogueError, CatalogueResult, DistanceIndex, EntityStore};

/// Normalize a route as written into the full stored traversal.
///
/// Roundtrip routes are stored as given (the input already returns to the
/// first stop).  Linear routes are mirrored: `A,B,C` → `A,B,C,B,A`.
pub fn expand_route<T: Clone>(mut stops: Vec<T>, is_roundtrip: bool) -> Vec<T> {
    if !is_roundtrip && stops.len() > 1 {
        let back: Vec<T> = stops.iter().rev().skip(1).cloned().collect();
        stops.extend(back);
    }
    stops
}

/// Mutable catalogue under construction.
///
/// Insert stops first, then distances and buses that reference them, then
/// call [`build`](Self::build) to freeze the result.  Every insertion is
/// validated, so a built [`Catalogue`] never holds a dangling reference.
#[derive(Default)]
pub struct CatalogueBuilder {
    store:     EntityStore,
    distances: DistanceIndex,
}

impl CatalogueBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_stop(&mut self, name: impl Into<String>, coordinates: Coordinates) -> CatalogueResult<StopId> {
        self.store.add_stop(name, coordinates)
    }

    /// Record a directed road distance between two stops of this builder.
    pub fn set_distance(&mut self, from: StopId, to: StopId, metres: u32) -> CatalogueResult<()> {
        for id in [from, to] {
            if !self.store.contains_stop(id) {
                return Err(CatalogueError::UnknownStop {
                    referenced_by: "road distance".to_string(),
                    stop:          id.to_string(),
                });
            }
        }
        self.distances.set(from, to, metres);
        Ok(())
    }

    /// Like [`set_distance`](Self::set_distance) but resolves stop names.
    pub fn set_distance_by_name(&mut self, from: &str, to: &str, metres: u32) -> CatalogueResult<()> {
        let referenced_by = format!("road distance from {from:?}");
        let from = self.resolve(from, &referenced_by)?;
        let to = self.resolve(to, &referenced_by)?;
        self.distances.set(from, to, metres);
        Ok(())
    }

    /// Insert a bus whose `stops` is the full normalized traversal.
    pub fn add_bus(
        &mut self,
        name: impl Into<String>,
        stops: Vec<StopId>,
        is_roundtrip: bool,
    ) -> CatalogueResult<BusId> {
        self.store.add_bus(name, stops, is_roundtrip)
    }

    /// Like [`add_bus`](Self::add_bus) but resolves stop names.  `stops` must
    /// already be normalized.
    pub fn add_bus_by_names<S: AsRef<str>>(
        &mut self,
        name: &str,
        stops: &[S],
        is_roundtrip: bool,
    ) -> CatalogueResult<BusId> {
        let referenced_by = format!("bus {name:?}");
        let ids = stops
            .iter()
            .map(|s| self.resolve(s.as_ref(), &referenced_by))
            .collect::<CatalogueResult<Vec<_>>>()?;
        self.store.add_bus(name, ids, is_roundtrip)
    }

    pub fn stop_id(&self, name: &str) -> Option<StopId> {
        self.store.stop_id(name)
    }

    pub fn stop_count(&self) -> usize {
        self.store.stop_count()
    }

    pub fn bus_count(&self) -> usize {
        self.store.bus_count()
    }

    /// Freeze the builder into an immutable [`Catalogue`].
    ///
    /// Computes the stop → buses reverse index and the name-sorted bus view.
    pub fn build(self) -> Catalogue {
        Catalogue::from_parts(self.store, self.distances)
    }

    fn resolve(&self, name: &str, referenced_by: &str) -> CatalogueResult<StopId> {
        self.store
            .stop_id(name)
            .ok_or_else(|| CatalogueError::UnknownStop {
                referenced_by: referenced_by.to_string(),
                stop:          name.to_string(),
            })
    }
}
