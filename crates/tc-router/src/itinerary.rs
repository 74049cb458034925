//! Itineraries: what a route query hands back to the caller.

use tc_core::{BusId, StopId};

/// One step of an itinerary.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Segment {
    /// Wait at `stop` for the next bus.
    Wait { stop: StopId, time: f64 },
    /// Ride `bus` for `span_count` stop-to-stop hops without re-boarding.
    Ride { bus: BusId, time: f64, span_count: u32 },
}

impl Segment {
    /// Duration in minutes.
    #[inline]
    pub fn time(&self) -> f64 {
        match *self {
            Segment::Wait { time, .. } | Segment::Ride { time, .. } => time,
        }
    }
}

/// Minimum-time sequence of wait and ride segments between two stops.
#[derive(Clone, Debug, PartialEq)]
pub struct Itinerary {
    /// Sum of all segment times, in minutes.
    pub total_time: f64,
    pub segments:   Vec<Segment>,
}

impl Itinerary {
    /// `true` if origin and destination are the same stop.
    pub fn is_trivial(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of buses boarded.
    pub fn ride_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::Ride { .. }))
            .count()
    }
}
