//! Path-finder trait, default Dijkstra implementation, and the
//! catalogue-facing [`TransportRouter`].
//!
//! # Pluggability
//!
//! `TransportRouter` reaches the graph through the [`PathFinder`] trait, so a
//! precomputing strategy (all-pairs tables, contraction hierarchies) can
//! replace per-query [`Dijkstra`] without touching itinerary reconstruction.
//!
//! # Determinism
//!
//! Heap ties are broken on `VertexId`, out-edges are scanned in CSR order,
//! and a distance is only replaced by a strictly smaller one.  The same
//! query against the same graph always yields the same edge sequence.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::debug;

use tc_catalogue::Catalogue;
use tc_core::{EdgeId, RoutingSettings, StopId, VertexId};

use crate::graph::{EdgeKind, TransitGraph, build_transit_graph};
use crate::{Itinerary, RouterError, RouterResult, Segment};

// ── Path ──────────────────────────────────────────────────────────────────────

/// Edges of a shortest path, from source to target, and their summed weight.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    pub edges:        Vec<EdgeId>,
    pub total_weight: f64,
}

// ── PathFinder trait ──────────────────────────────────────────────────────────

/// Shortest-path engine over a built [`TransitGraph`].
///
/// Implementations must return a minimum-weight path for non-negative
/// weights and must be deterministic for a fixed graph.  `Send + Sync` so a
/// router can serve read-only queries from several threads.
pub trait PathFinder: Send + Sync {
    /// `None` if `to` is unreachable from `from`.  `from == to` yields an
    /// empty path of weight 0.
    fn shortest_path(&self, graph: &TransitGraph, from: VertexId, to: VertexId) -> Option<Path>;
}

// ── Dijkstra ──────────────────────────────────────────────────────────────────

/// Per-query Dijkstra with a binary heap.
pub struct Dijkstra;

impl PathFinder for Dijkstra {
    fn shortest_path(&self, graph: &TransitGraph, from: VertexId, to: VertexId) -> Option<Path> {
        dijkstra(graph, from, to)
    }
}

/// Heap entry.  Ordered so that `BinaryHeap` (a max-heap) pops the lowest
/// cost first, then the lowest vertex id.
#[derive(Copy, Clone, Debug)]
struct State {
    cost:   f64,
    vertex: VertexId,
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}

fn dijkstra(graph: &TransitGraph, from: VertexId, to: VertexId) -> Option<Path> {
    if from == to {
        return Some(Path { edges: vec![], total_weight: 0.0 });
    }

    let n = graph.vertex_count();
    // dist[v] = best known cost (minutes) to reach v.
    let mut dist = vec![f64::INFINITY; n];
    // prev_edge[v] = EdgeId that reached v; EdgeId::INVALID for unreached vertices.
    let mut prev_edge = vec![EdgeId::INVALID; n];

    dist[from.index()] = 0.0;

    let mut heap = BinaryHeap::new();
    heap.push(State { cost: 0.0, vertex: from });

    while let Some(State { cost, vertex }) = heap.pop() {
        if vertex == to {
            return Some(reconstruct(graph, &prev_edge, to, cost));
        }

        // Skip stale heap entries.
        if cost > dist[vertex.index()] {
            continue;
        }

        for edge in graph.out_edges(vertex) {
            let next = graph.edge_to[edge.index()];
            let next_cost = cost + graph.edge_weight[edge.index()];

            if next_cost < dist[next.index()] {
                dist[next.index()] = next_cost;
                prev_edge[next.index()] = edge;
                heap.push(State { cost: next_cost, vertex: next });
            }
        }
    }

    None
}

fn reconstruct(graph: &TransitGraph, prev_edge: &[EdgeId], to: VertexId, total_weight: f64) -> Path {
    let mut edges = Vec::new();
    let mut cur = to;
    loop {
        let e = prev_edge[cur.index()];
        if !e.is_valid() {
            break;
        }
        edges.push(e);
        cur = graph.edge_from[e.index()];
    }
    edges.reverse();
    Path { edges, total_weight }
}

// ── TransportRouter ───────────────────────────────────────────────────────────

/// Routing handle over a frozen [`Catalogue`].
///
/// Construction builds the transit graph once; afterwards the router is
/// read-only and answers any number of queries.  Changing the settings means
/// constructing a new router.
pub struct TransportRouter<'a, P: PathFinder = Dijkstra> {
    catalogue: &'a Catalogue,
    settings:  RoutingSettings,
    graph:     TransitGraph,
    finder:    P,
}

impl<'a> TransportRouter<'a, Dijkstra> {
    /// Validate `settings` and build the graph for `catalogue`.
    pub fn new(catalogue: &'a Catalogue, settings: RoutingSettings) -> RouterResult<Self> {
        Self::with_path_finder(catalogue, settings, Dijkstra)
    }
}

impl<'a, P: PathFinder> TransportRouter<'a, P> {
    /// Like [`TransportRouter::new`] with a custom [`PathFinder`].
    pub fn with_path_finder(catalogue: &'a Catalogue, settings: RoutingSettings, finder: P) -> RouterResult<Self> {
        settings.validate()?;
        let graph = build_transit_graph(catalogue, &settings)?;
        Ok(Self { catalogue, settings, graph, finder })
    }

    pub fn catalogue(&self) -> &'a Catalogue {
        self.catalogue
    }

    pub fn settings(&self) -> &RoutingSettings {
        &self.settings
    }

    pub fn graph(&self) -> &TransitGraph {
        &self.graph
    }

    /// Minimum-time itinerary from `from` to `to`, or `None` if unreachable.
    ///
    /// The search starts on the arrival vertex of `from`, so the first
    /// boarding pays the wait edge like every later one.
    pub fn find_route(&self, from: StopId, to: StopId) -> Option<Itinerary> {
        let source = self.graph.stop_vertices(from)?.arrival;
        let target = self.graph.stop_vertices(to)?.arrival;
        let path = self.finder.shortest_path(&self.graph, source, target)?;

        let segments = path
            .edges
            .iter()
            .map(|&e| {
                let time = self.graph.edge_weight[e.index()];
                match self.graph.edge_kind[e.index()] {
                    EdgeKind::Wait { stop } => Segment::Wait { stop, time },
                    EdgeKind::Ride { bus, span_count } => Segment::Ride { bus, time, span_count },
                }
            })
            .collect();

        Some(Itinerary { total_time: path.total_weight, segments })
    }

    /// Like [`find_route`](Self::find_route) but resolves stop names and
    /// reports why no itinerary exists.
    pub fn route_by_name(&self, from: &str, to: &str) -> RouterResult<Itinerary> {
        let from_id = self
            .catalogue
            .stop_id(from)
            .ok_or_else(|| RouterError::UnknownStop(from.to_string()))?;
        let to_id = self
            .catalogue
            .stop_id(to)
            .ok_or_else(|| RouterError::UnknownStop(to.to_string()))?;

        let itinerary = self.find_route(from_id, to_id).ok_or_else(|| RouterError::Unreachable {
            from: from.to_string(),
            to:   to.to_string(),
        })?;
        debug!(
            "route {from:?} -> {to:?}: {:.3} min, {} segments",
            itinerary.total_time,
            itinerary.segments.len(),
        );
        Ok(itinerary)
    }
}
