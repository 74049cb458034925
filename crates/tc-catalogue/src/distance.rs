//! Directed road distances between stops.
//!
//! `(A, B)` and `(B, A)` are independent entries.  A lookup for `(B, A)`
//! falls back to `(A, B)` when only one direction was recorded, and to 0 m
//! when neither was.  The zero fallback is kept for compatibility with
//! existing input data; `Catalogue` construction logs every route leg that
//! hits it.

use rustc_hash::FxHashMap;

use tc_core::StopId;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DistanceIndex {
    entries: FxHashMap<(StopId, StopId), u32>,
}

impl DistanceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the road distance from `from` to `to`.  Last write wins.
    pub fn set(&mut self, from: StopId, to: StopId, metres: u32) {
        self.entries.insert((from, to), metres);
    }

    /// The entry recorded for exactly this direction, if any.
    #[inline]
    pub fn get_exact(&self, from: StopId, to: StopId) -> Option<u32> {
        self.entries.get(&(from, to)).copied()
    }

    /// The directed entry, else the reverse entry, else `None`.
    #[inline]
    pub fn lookup(&self, from: StopId, to: StopId) -> Option<u32> {
        self.get_exact(from, to).or_else(|| self.get_exact(to, from))
    }

    /// Road distance in metres with the symmetric and zero fallbacks applied.
    #[inline]
    pub fn get(&self, from: StopId, to: StopId) -> u32 {
        self.lookup(from, to).unwrap_or(0)
    }

    /// Number of directed entries recorded.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
