//! Observer abstraction for threshold notifications.
//!
//! Anything implementing [`SpeedObserver`] can be registered on a
//! [`SpeedThresholdEmitter`](crate::SpeedThresholdEmitter). Closures taking
//! `(&SpeedState, &SpeedEvent)` implement it automatically, so the common
//! case is an inline closure:
//!
//! ```rust
//! use rs_overspeed::{SpeedEvent, SpeedState, SpeedThresholdEmitter};
//!
//! let mut car = SpeedThresholdEmitter::new("SlugBug", 100, 130, 190);
//! car.register_warn_observer(|source: &SpeedState, event: &SpeedEvent| {
//!     assert!(source.current_speed >= 130);
//!     assert_eq!(event.speed, source.current_speed);
//! });
//! car.accelerate(40);
//! ```
//!
//! Parameter types must be written out on the closure; the registration
//! bound is the trait, not an `Fn` signature, so they are not inferred.
//! Named types are useful when the observer carries state that outlives the
//! registration, see [`crate::recorders`].

use crate::emitter::SpeedState;
use crate::events::SpeedEvent;

/// Receives threshold notifications from an emitter.
///
/// Notifications are delivered synchronously from inside
/// [`accelerate`](crate::SpeedThresholdEmitter::accelerate). A panic raised
/// here is not caught and unwinds into the caller of `accelerate`.
pub trait SpeedObserver {
    /// Called once per notification.
    ///
    /// # Arguments
    ///
    /// * `source` - Snapshot of the emitter after the acceleration
    /// * `event` - The notification being delivered
    fn notify(&mut self, source: &SpeedState, event: &SpeedEvent);
}

impl<F> SpeedObserver for F
where
    F: FnMut(&SpeedState, &SpeedEvent),
{
    fn notify(&mut self, source: &SpeedState, event: &SpeedEvent) {
        self(source, event)
    }
}
