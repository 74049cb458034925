//! `tc-catalogue` — the in-memory knowledge base of stops and buses.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`store`]     | `Stop`, `Bus`, `EntityStore` (index arenas + name maps)   |
//! | [`distance`]  | `DistanceIndex` (directed road distances with fallback)   |
//! | [`builder`]   | `CatalogueBuilder` (load phase), `expand_route`           |
//! | [`catalogue`] | `Catalogue` (frozen, read-only handle)                    |
//! | [`metrics`]   | `BusStats` and the per-bus metric methods on `Catalogue`  |
//! | [`loader`]    | `BaseRequest` records, `load_base_requests`               |
//! | [`text`]      | line-oriented `Stop …` / `Bus …` input format             |
//! | [`error`]     | `CatalogueError`, `CatalogueResult<T>`                    |
//!
//! # Lifecycle
//!
//! ```text
//! CatalogueBuilder ──add_stop / set_distance / add_bus──▶ build() ──▶ Catalogue
//!      (mutable, load phase)                                    (immutable, queries)
//! ```
//!
//! Stops and buses are addressed by [`StopId`](tc_core::StopId) /
//! [`BusId`](tc_core::BusId), their positions in the arenas.  Arenas only
//! grow during loading and are frozen by `build()`, so IDs never dangle.

pub mod builder;
pub mod catalogue;
pub mod distance;
pub mod error;
pub mod loader;
pub mod metrics;
pub mod store;
pub mod text;


pub use builder::{CatalogueBuilder, expand_route};
pub use catalogue::Catalogue;
pub use distance::DistanceIndex;
pub use error::{CatalogueError, CatalogueResult};
pub use loader::{BaseRequest, BusRecord, StopRecord, apply_base_requests, load_base_requests};
pub use metrics::BusStats;
pub use store::{Bus, EntityStore, Stop};
pub use text::{load_text, parse_base_line, parse_text};
