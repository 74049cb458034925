//! `tc-router` — minimum-time itineraries over the transit catalogue.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`graph`]     | `TransitGraph` (CSR), `TransitGraphBuilder`, `build_transit_graph` |
//! | [`router`]    | `PathFinder` trait, `Dijkstra`, `TransportRouter`           |
//! | [`itinerary`] | `Itinerary`, `Segment` (wait / ride)                        |
//! | [`error`]     | `RouterError`, `RouterResult<T>`                            |
//!
//! # Graph model
//!
//! Every stop has two vertices.  Arriving at a stop lands on its *arrival*
//! vertex; boarding a bus leaves from its *departure* vertex.
//!
//! ```text
//!              wait (bus_wait_time)
//!   arrival(s) ─────────────────────▶ departure(s)
//!
//!              ride (bus b, span j−i)
//!   departure(stop[i]) ─────────────▶ arrival(stop[j])   for every i < j on b
//! ```
//!
//! A query runs from `arrival(from)` to `arrival(to)`, so every boarding is
//! preceded by exactly one wait, and a ride may skip any number of
//! intermediate stops without re-paying the wait.

pub mod error;
pub mod graph;
pub mod itinerary;
pub mod router;

#[cfg(test)]
mod tests;

pub use error::{RouterError, RouterResult};
pub use graph::{EdgeKind, StopVertices, TransitGraph, TransitGraphBuilder, build_transit_graph};
pub use itinerary::{Itinerary, Segment};
pub use router::{Dijkstra, Path, PathFinder, TransportRouter};
