//! Transit graph representation and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing edges.
//! Given a `VertexId v`, its outgoing edges are the `EdgeId`s
//!
//! ```text
//! vertex_out_start[v] .. vertex_out_start[v+1]
//! ```
//!
//! All edge arrays (`edge_from`, `edge_to`, `edge_weight`, `edge_kind`) are
//! sorted by source vertex and indexed by `EdgeId`.  Within one source
//! vertex, edges keep their insertion order, so building from the same
//! catalogue twice yields identical arrays.
//!
//! # Size
//!
//! `2 × stops` vertices; one wait edge per stop plus `n(n−1)/2` ride edges
//! per bus with an `n`-stop traversal.

use log::info;

use tc_catalogue::Catalogue;
use tc_core::{BusId, EdgeId, RoutingSettings, StopId, VertexId};

use crate::{RouterError, RouterResult};

// ── Edge metadata ─────────────────────────────────────────────────────────────

/// What traversing an edge means to a passenger.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EdgeKind {
    /// `arrival(stop) → departure(stop)`, weighted by the wait time.
    Wait { stop: StopId },
    /// `departure(stop[i]) → arrival(stop[j])` along `bus`, `span_count = j − i`.
    Ride { bus: BusId, span_count: u32 },
}

/// The two vertices allocated for one stop.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StopVertices {
    pub arrival:   VertexId,
    pub departure: VertexId,
}

// ── TransitGraph ──────────────────────────────────────────────────────────────

/// Directed weighted graph in CSR format.  Weights are minutes.
///
/// Fields are `pub` for direct indexed access in path finders.  Do not
/// construct directly; use [`TransitGraphBuilder`] or
/// [`build_transit_graph`].
#[derive(Clone, Debug, PartialEq)]
pub struct TransitGraph {
    // ── Vertex data ───────────────────────────────────────────────────────
    /// Stop each vertex belongs to.  Indexed by `VertexId`.
    pub vertex_stop: Vec<StopId>,

    /// Vertex pair of each stop.  Indexed by `StopId`.
    pub stop_vertices: Vec<StopVertices>,

    /// CSR row pointer.  Length = `vertex_count + 1`.
    pub vertex_out_start: Vec<u32>,

    // ── Edge data (indexed by EdgeId = position in sorted order) ──────────
    pub edge_from:   Vec<VertexId>,
    pub edge_to:     Vec<VertexId>,
    /// Edge cost in minutes; never negative.
    pub edge_weight: Vec<f64>,
    pub edge_kind:   Vec<EdgeKind>,
}

impl TransitGraph {
    pub fn vertex_count(&self) -> usize {
        self.vertex_stop.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_stop.is_empty()
    }

    /// Vertex pair of `stop`, or `None` if the stop was not part of the build.
    #[inline]
    pub fn stop_vertices(&self, stop: StopId) -> Option<StopVertices> {
        self.stop_vertices.get(stop.index()).copied()
    }

    /// Iterator over the `EdgeId`s of all outgoing edges from `vertex`.
    #[inline]
    pub fn out_edges(&self, vertex: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.vertex_out_start[vertex.index()];
        let end   = self.vertex_out_start[vertex.index() + 1];
        (start..end).map(EdgeId)
    }

    #[inline]
    pub fn out_degree(&self, vertex: VertexId) -> usize {
        let start = self.vertex_out_start[vertex.index()];
        let end   = self.vertex_out_start[vertex.index() + 1];
        (end - start) as usize
    }
}

// ── TransitGraphBuilder ───────────────────────────────────────────────────────

/// Construct a [`TransitGraph`] incrementally, then call [`build`](Self::build).
///
/// Stops must be added in `StopId` order (0, 1, 2, …) so that the graph's
/// `stop_vertices` table can be indexed by `StopId`.
pub struct TransitGraphBuilder {
    vertex_stop:   Vec<StopId>,
    stop_vertices: Vec<StopVertices>,
    raw_edges:     Vec<RawEdge>,
}

struct RawEdge {
    from:   VertexId,
    to:     VertexId,
    weight: f64,
    kind:   EdgeKind,
}

impl TransitGraphBuilder {
    pub fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    pub fn with_capacity(stops: usize, edges: usize) -> Self {
        Self {
            vertex_stop:   Vec::with_capacity(stops * 2),
            stop_vertices: Vec::with_capacity(stops),
            raw_edges:     Vec::with_capacity(edges),
        }
    }

    /// Allocate the arrival and departure vertices of `stop`.
    pub fn add_stop(&mut self, stop: StopId) -> RouterResult<StopVertices> {
        debug_assert_eq!(stop.index(), self.stop_vertices.len(), "stops must be added in id order");
        let arrival = graph_id(self.vertex_stop.len(), "vertex", VertexId::from_index)?;
        let departure = graph_id(self.vertex_stop.len() + 1, "vertex", VertexId::from_index)?;
        self.vertex_stop.push(stop);
        self.vertex_stop.push(stop);
        let pair = StopVertices { arrival, departure };
        self.stop_vertices.push(pair);
        Ok(pair)
    }

    /// Add a directed edge.  `weight` must be non-negative.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: f64, kind: EdgeKind) {
        debug_assert!(weight >= 0.0, "negative edge weight {weight}");
        self.raw_edges.push(RawEdge { from, to, weight, kind });
    }

    pub fn vertex_count(&self) -> usize { self.vertex_stop.len() }
    pub fn edge_count(&self) -> usize { self.raw_edges.len() }

    /// Consume the builder and produce a [`TransitGraph`].
    ///
    /// O(E log E) for the (stable) edge sort.  Fails if the edges cannot
    /// all be addressed by an [`EdgeId`].
    pub fn build(self) -> RouterResult<TransitGraph> {
        let vertex_count = self.vertex_stop.len();
        let edge_count = self.raw_edges.len();
        graph_id(edge_count, "edge", EdgeId::from_index)?;

        let mut raw = self.raw_edges;
        raw.sort_by_key(|e| e.from.0);

        let edge_from:   Vec<VertexId> = raw.iter().map(|e| e.from).collect();
        let edge_to:     Vec<VertexId> = raw.iter().map(|e| e.to).collect();
        let edge_weight: Vec<f64>      = raw.iter().map(|e| e.weight).collect();
        let edge_kind:   Vec<EdgeKind> = raw.iter().map(|e| e.kind).collect();

        let mut vertex_out_start = vec![0u32; vertex_count + 1];
        for e in &raw {
            vertex_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=vertex_count {
            vertex_out_start[i] += vertex_out_start[i - 1];
        }
        debug_assert_eq!(vertex_out_start[vertex_count] as usize, edge_count);

        Ok(TransitGraph {
            vertex_stop: self.vertex_stop,
            stop_vertices: self.stop_vertices,
            vertex_out_start,
            edge_from,
            edge_to,
            edge_weight,
            edge_kind,
        })
    }
}

impl Default for TransitGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ── Catalogue → graph ─────────────────────────────────────────────────────────

/// Build the routing graph for a frozen catalogue.
///
/// For each bus and each boarding index `i`, the road distance is
/// accumulated while scanning `j > i`, and one ride edge is emitted per
/// `(i, j)` pair with weight `cumulative_metres / metres_per_minute`.
/// Buses with a single-stop traversal contribute no ride edges.
pub fn build_transit_graph(catalogue: &Catalogue, settings: &RoutingSettings) -> RouterResult<TransitGraph> {
    let ride_edges: usize = catalogue
        .buses()
        .map(|(_, b)| b.stops.len() * b.stops.len().saturating_sub(1) / 2)
        .sum();
    let mut b = TransitGraphBuilder::with_capacity(
        catalogue.stop_count(),
        catalogue.stop_count() + ride_edges,
    );

    let wait = settings.wait_minutes();
    for (stop, _) in catalogue.stops() {
        let v = b.add_stop(stop)?;
        b.add_edge(v.arrival, v.departure, wait, EdgeKind::Wait { stop });
    }

    for (bus, record) in catalogue.buses() {
        let stops = &record.stops;
        if stops.len() <= 1 {
            continue;
        }
        for i in 0..stops.len() - 1 {
            let board = b.stop_vertices[stops[i].index()].departure;
            let mut metres: u64 = 0;
            for j in i + 1..stops.len() {
                metres += u64::from(catalogue.distance(stops[j - 1], stops[j]));
                let alight = b.stop_vertices[stops[j].index()].arrival;
                b.add_edge(
                    board,
                    alight,
                    settings.ride_minutes(metres),
                    EdgeKind::Ride { bus, span_count: (j - i) as u32 },
                );
            }
        }
    }

    let graph = b.build()?;
    info!(
        "transit graph built: {} vertices, {} edges (wait {} min, {} km/h)",
        graph.vertex_count(),
        graph.edge_count(),
        settings.bus_wait_time,
        settings.bus_velocity,
    );
    Ok(graph)
}

/// ID for position `n`, or `GraphTooLarge` naming the exhausted ID space.
pub(crate) fn graph_id<I>(n: usize, what: &'static str, from_index: fn(usize) -> Option<I>) -> RouterResult<I> {
    from_index(n).ok_or(RouterError::GraphTooLarge(what))
}
