//! Strongly typed, zero-cost identifier wrappers.
//!
//! Stops and buses live in index arenas inside the catalogue; graph vertices
//! and edges live in the router's CSR arrays.  An ID is the position in the
//! owning `Vec`, so it never dangles and compares in O(1).

use std::fmt;

/// Generate an arena index type.  The string after `=>` prefixes the
/// `Display` form, e.g. `stop#3`.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty) => $label:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Marks an unset slot, e.g. "no predecessor" in a search tree.
            pub const INVALID: $name = $name(<$inner>::MAX);

            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            #[inline(always)]
            pub fn is_valid(self) -> bool {
                self != Self::INVALID
            }

            /// ID for arena position `n`, or `None` if `n` does not fit
            /// below the `INVALID` sentinel.
            #[inline]
            pub fn from_index(n: usize) -> Option<Self> {
                Self::try_from(n).ok().filter(|id| id.is_valid())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, "#{}"), self.0)
            }
        }

        /// Arena position → ID.  Fails once the arena outgrows the inner type.
        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a stop in the catalogue's stop arena.
    pub struct StopId(u32) => "stop";
}

typed_id! {
    /// Index of a bus (route) in the catalogue's bus arena.
    pub struct BusId(u32) => "bus";
}

typed_id! {
    /// Index of a vertex in the transit graph.
    pub struct VertexId(u32) => "vertex";
}

typed_id! {
    /// Index of a directed edge in the transit graph.
    pub struct EdgeId(u32) => "edge";
}
