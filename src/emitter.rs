//! The speed threshold emitter.
//!
//! This module provides [`SpeedThresholdEmitter`], a simulated vehicle that
//! accelerates and notifies registered observers when its speed is at or
//! above a warning threshold and a fatal threshold.
//!
//! # Overview
//!
//! The emitter:
//! - Holds a name, a current speed and two thresholds
//! - Keeps two ordered observer lists (warning and fatal)
//! - Changes speed only through [`accelerate`](SpeedThresholdEmitter::accelerate)
//!
//! Notifications are level-triggered: every call to `accelerate` that leaves
//! the speed at or above a threshold notifies that threshold's observers,
//! not just the call that crosses it.
//!
//! # Example
//!
//! ```rust
//! use rs_overspeed::{SpeedEvent, SpeedState, SpeedThresholdEmitter};
//!
//! let mut car = SpeedThresholdEmitter::new("SlugBug", 100, 130, 190);
//! car.register_warn_observer(|_: &SpeedState, event: &SpeedEvent| {
//!     println!("Message from Car: {}", event.message("SlugBug"));
//! });
//!
//! let report = car.accelerate(20); // 120, quiet
//! assert!(!report.warned);
//!
//! let report = car.accelerate(20); // 140, warns
//! assert!(report.warned);
//! assert_eq!(report.warn_notified, 1);
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::config::{short_string, EmitterConfig, ShortString};
use crate::events::{SpeedEvent, ThresholdKind};
use crate::traits::SpeedObserver;

type BoxedObserver = Box<dyn SpeedObserver>;

/// Simulated vehicle that fires warning and fatal notifications.
///
/// The emitter is single-threaded: observers are called synchronously, in
/// registration order, from inside [`accelerate`](Self::accelerate).
/// Observer lists only grow; there is no unregistration.
pub struct SpeedThresholdEmitter {
    state: SpeedState,
    warn_observers: Vec<BoxedObserver>,
    fatal_observers: Vec<BoxedObserver>,
}

impl SpeedThresholdEmitter {
    /// Create a new emitter.
    ///
    /// Any integers are accepted; `fatal_threshold > warn_threshold` is
    /// expected but not checked.
    pub fn new(name: &str, initial_speed: i64, warn_threshold: i64, fatal_threshold: i64) -> Self {
        Self {
            state: SpeedState::new(name, initial_speed, warn_threshold, fatal_threshold),
            warn_observers: Vec::new(),
            fatal_observers: Vec::new(),
        }
    }

    /// Create an emitter from configuration
    pub fn from_config(config: &EmitterConfig) -> Self {
        Self {
            state: SpeedState {
                name: config.name.clone(),
                current_speed: config.initial_speed,
                warn_threshold: config.warn_threshold,
                fatal_threshold: config.fatal_threshold,
            },
            warn_observers: Vec::new(),
            fatal_observers: Vec::new(),
        }
    }

    /// Append an observer to the warning channel.
    pub fn register_warn_observer<O>(&mut self, observer: O)
    where
        O: SpeedObserver + 'static,
    {
        self.warn_observers.push(Box::new(observer));
        log::trace!(
            "{}: warn observer #{} registered",
            self.state.name,
            self.warn_observers.len()
        );
    }

    /// Append an observer to the fatal channel.
    pub fn register_fatal_observer<O>(&mut self, observer: O)
    where
        O: SpeedObserver + 'static,
    {
        self.fatal_observers.push(Box::new(observer));
        log::trace!(
            "{}: fatal observer #{} registered",
            self.state.name,
            self.fatal_observers.len()
        );
    }

    /// Change the speed by `delta` and notify observers.
    ///
    /// 1. The speed moves by `delta` (saturating at the `i64` bounds).
    /// 2. If the new speed is at or above the warning threshold, every warn
    ///    observer runs, in registration order.
    /// 3. If the new speed is at or above the fatal threshold, every fatal
    ///    observer runs, in registration order.
    ///
    /// Both checks are independent, so one call can notify both channels.
    /// A panicking observer unwinds out of this call; observers after it on
    /// the same notification do not run.
    pub fn accelerate(&mut self, delta: i64) -> AccelerationReport {
        self.state.current_speed = self.state.current_speed.saturating_add(delta);
        let speed = self.state.current_speed;
        log::debug!("{}: accelerated by {} to {}", self.state.name, delta, speed);

        let mut report = AccelerationReport {
            speed,
            ..AccelerationReport::default()
        };

        if self.state.warned() {
            log::info!(
                "{}: speed {} at or above warning threshold {}",
                self.state.name,
                speed,
                self.state.warn_threshold
            );
            let event = SpeedEvent::new(ThresholdKind::Warning, speed, self.state.warn_threshold);
            report.warned = true;
            report.warn_notified = notify_all(&mut self.warn_observers, &self.state, &event);
        }

        if self.state.exploded() {
            log::info!(
                "{}: speed {} at or above fatal threshold {}",
                self.state.name,
                speed,
                self.state.fatal_threshold
            );
            let event = SpeedEvent::new(ThresholdKind::Fatal, speed, self.state.fatal_threshold);
            report.exploded = true;
            report.fatal_notified = notify_all(&mut self.fatal_observers, &self.state, &event);
        }

        report
    }

    /// Get the name
    pub fn name(&self) -> &str {
        self.state.name.as_str()
    }

    /// Get the current speed
    pub fn current_speed(&self) -> i64 {
        self.state.current_speed
    }

    /// Get the warning threshold
    pub fn warn_threshold(&self) -> i64 {
        self.state.warn_threshold
    }

    /// Get the fatal threshold
    pub fn fatal_threshold(&self) -> i64 {
        self.state.fatal_threshold
    }

    /// Get a snapshot of the current state
    pub fn state(&self) -> SpeedState {
        self.state.clone()
    }

    /// Check if speed is at or above the warning threshold
    pub fn is_warned(&self) -> bool {
        self.state.warned()
    }

    /// Check if speed is at or above the fatal threshold
    pub fn is_exploded(&self) -> bool {
        self.state.exploded()
    }

    /// Number of observers on the warning channel
    pub fn warn_observer_count(&self) -> usize {
        self.warn_observers.len()
    }

    /// Number of observers on the fatal channel
    pub fn fatal_observer_count(&self) -> usize {
        self.fatal_observers.len()
    }
}

impl fmt::Debug for SpeedThresholdEmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpeedThresholdEmitter")
            .field("state", &self.state)
            .field("warn_observers", &self.warn_observers.len())
            .field("fatal_observers", &self.fatal_observers.len())
            .finish()
    }
}

fn notify_all(observers: &mut [BoxedObserver], source: &SpeedState, event: &SpeedEvent) -> usize {
    for observer in observers.iter_mut() {
        observer.notify(source, event);
    }
    observers.len()
}

/// Snapshot of an emitter, passed to observers as the notification source.
///
/// `warned` and `exploded` are derived from the speed rather than stored,
/// so they can never disagree with it.
///
/// # Example
///
/// ```rust
/// use rs_overspeed::SpeedState;
///
/// let state = SpeedState::new("SlugBug", 140, 130, 190);
/// assert!(state.warned());
/// assert!(!state.exploded());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeedState {
    /// Emitter name.
    pub name: ShortString,
    /// Speed after the most recent acceleration.
    pub current_speed: i64,
    /// Speed at which warning observers fire.
    pub warn_threshold: i64,
    /// Speed at which fatal observers fire.
    pub fatal_threshold: i64,
}

impl SpeedState {
    /// Create a snapshot; the name is truncated to fit a [`ShortString`].
    pub fn new(name: &str, current_speed: i64, warn_threshold: i64, fatal_threshold: i64) -> Self {
        Self {
            name: short_string(name),
            current_speed,
            warn_threshold,
            fatal_threshold,
        }
    }

    /// Speed is at or above the warning threshold.
    pub fn warned(&self) -> bool {
        self.current_speed >= self.warn_threshold
    }

    /// Speed is at or above the fatal threshold.
    pub fn exploded(&self) -> bool {
        self.current_speed >= self.fatal_threshold
    }
}

/// What a single [`SpeedThresholdEmitter::accelerate`] call did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccelerationReport {
    /// Speed after the call.
    pub speed: i64,
    /// The warning channel was notified.
    pub warned: bool,
    /// The fatal channel was notified.
    pub exploded: bool,
    /// Number of warn observers invoked.
    pub warn_notified: usize,
    /// Number of fatal observers invoked.
    pub fatal_notified: usize,
}

impl AccelerationReport {
    /// Total observer invocations across both channels.
    pub fn total_notified(&self) -> usize {
        self.warn_notified + self.fatal_notified
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use core::cell::RefCell;

    fn slugbug() -> SpeedThresholdEmitter {
        SpeedThresholdEmitter::new("SlugBug", 100, 130, 190)
    }

    // === Basic Operations ===
    #[test]
    fn new_starts_at_initial_speed() {
        let car = slugbug();
        assert_eq!(car.name(), "SlugBug");
        assert_eq!(car.current_speed(), 100);
        assert_eq!(car.warn_threshold(), 130);
        assert_eq!(car.fatal_threshold(), 190);
        assert!(!car.is_warned());
        assert!(!car.is_exploded());
        assert_eq!(car.warn_observer_count(), 0);
        assert_eq!(car.fatal_observer_count(), 0);
    }

    #[test]
    fn from_config_matches_new() {
        let config = EmitterConfig::default();
        let car = SpeedThresholdEmitter::from_config(&config);
        assert_eq!(car.state(), slugbug().state());
    }

    #[test]
    fn accelerate_without_observers_still_reports() {
        let mut car = slugbug();
        let report = car.accelerate(100);
        assert_eq!(report.speed, 200);
        assert!(report.warned);
        assert!(report.exploded);
        assert_eq!(report.total_notified(), 0);
    }

    #[test]
    fn accelerate_saturates() {
        let mut car = SpeedThresholdEmitter::new("Rocket", i64::MAX - 1, 0, 0);
        car.accelerate(10);
        assert_eq!(car.current_speed(), i64::MAX);
    }

    // === Notification ===
    #[test]
    fn warnings_run_before_fatal() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut car = slugbug();

        let o = order.clone();
        car.register_fatal_observer(move |_: &SpeedState, e: &SpeedEvent| {
            o.borrow_mut().push(e.kind);
        });
        let o = order.clone();
        car.register_warn_observer(move |_: &SpeedState, e: &SpeedEvent| {
            o.borrow_mut().push(e.kind);
        });

        car.accelerate(90);
        assert_eq!(
            *order.borrow(),
            [ThresholdKind::Warning, ThresholdKind::Fatal]
        );
    }

    #[test]
    fn observer_sees_post_call_state() {
        let seen = Rc::new(RefCell::new(None));
        let mut car = slugbug();

        let s = seen.clone();
        car.register_warn_observer(move |source: &SpeedState, _: &SpeedEvent| {
            *s.borrow_mut() = Some(source.clone());
        });

        car.accelerate(40);
        assert_eq!(
            *seen.borrow(),
            Some(SpeedState::new("SlugBug", 140, 130, 190))
        );
    }

    #[test]
    fn debug_lists_observer_counts() {
        let mut car = slugbug();
        car.register_warn_observer(|_: &SpeedState, _: &SpeedEvent| {});
        let text = alloc::format!("{:?}", car);
        assert!(text.contains("warn_observers: 1"));
        assert!(text.contains("fatal_observers: 0"));
    }
}
