//! Routing configuration.
//!
//! Both values are fixed when the transit graph is built.  Changing either
//! one means building a new router, not patching the existing graph.

use crate::{CoreError, CoreResult};

/// Metres per kilometre.
const M_PER_KM: f64 = 1_000.0;
/// Minutes per hour.
const MIN_PER_HOUR: f64 = 60.0;

/// Settings read from the `routing_settings` block of an input document.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutingSettings {
    /// Minutes spent waiting at a stop before every boarding.
    pub bus_wait_time: u32,
    /// Average bus speed in km/h.
    pub bus_velocity: f64,
}

impl RoutingSettings {
    pub fn new(bus_wait_time: u32, bus_velocity: f64) -> Self {
        Self { bus_wait_time, bus_velocity }
    }

    /// Reject settings that would produce negative, infinite or NaN weights.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.bus_velocity.is_finite() || self.bus_velocity <= 0.0 {
            return Err(CoreError::Config(format!(
                "bus_velocity must be a positive finite number, got {}",
                self.bus_velocity
            )));
        }
        Ok(())
    }

    /// Wait-edge weight in minutes.
    #[inline]
    pub fn wait_minutes(&self) -> f64 {
        f64::from(self.bus_wait_time)
    }

    /// Bus speed in metres per minute.
    #[inline]
    pub fn metres_per_minute(&self) -> f64 {
        self.bus_velocity * M_PER_KM / MIN_PER_HOUR
    }

    /// Minutes needed to ride `metres` of road.
    #[inline]
    pub fn ride_minutes(&self, metres: u64) -> f64 {
        metres as f64 / self.metres_per_minute()
    }
}
