//! Reusable observers that record what they were told.
//!
//! A closure registered on an emitter is moved into it, so any state the
//! caller wants to read back afterwards has to be shared. The recorders here
//! wrap that sharing (`Rc` plus `Cell`/`RefCell`): clone one, register the
//! clone, and read from the original.
//!
//! | Recorder | Purpose |
//! |----------|---------|
//! | [`InvocationCounter`] | Counts notifications |
//! | [`EventLog`] | Keeps every notification in order |
//!
//! # Example
//!
//! ```rust
//! use rs_overspeed::SpeedThresholdEmitter;
//! use rs_overspeed::recorders::{EventLog, InvocationCounter};
//!
//! let warnings = InvocationCounter::new();
//! let log = EventLog::new();
//!
//! let mut car = SpeedThresholdEmitter::new("SlugBug", 100, 130, 190);
//! car.register_warn_observer(warnings.clone());
//! car.register_warn_observer(log.clone());
//! car.register_fatal_observer(log.clone());
//!
//! for _ in 0..6 {
//!     car.accelerate(20);
//! }
//!
//! assert_eq!(warnings.count(), 5);
//! assert_eq!(log.len(), 7); // 5 warnings + 2 fatal
//! ```

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use crate::emitter::SpeedState;
use crate::events::{SpeedEvent, ThresholdKind};
use crate::traits::SpeedObserver;

// ============================================================================
// Invocation Counter
// ============================================================================

/// Observer that counts how many times it was notified.
///
/// Clones share the same count.
#[derive(Clone, Debug, Default)]
pub struct InvocationCounter {
    count: Rc<Cell<usize>>,
}

impl InvocationCounter {
    /// Creates a counter starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of notifications received by this counter and its clones.
    pub fn count(&self) -> usize {
        self.count.get()
    }

    /// Adds one to the shared count.
    ///
    /// Useful from inside a closure that does more than count.
    pub fn increment(&self) {
        self.count.set(self.count.get() + 1);
    }
}

impl SpeedObserver for InvocationCounter {
    fn notify(&mut self, _source: &SpeedState, _event: &SpeedEvent) {
        self.increment();
    }
}

// ============================================================================
// Event Log
// ============================================================================

/// One entry in an [`EventLog`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Observation {
    /// Emitter snapshot at notification time.
    pub source: SpeedState,
    /// The delivered event.
    pub event: SpeedEvent,
}

/// Observer that keeps every notification it receives, in order.
///
/// Clones share the same log, so one log can be registered on both
/// channels and still show the interleaving.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    entries: Rc<RefCell<Vec<Observation>>>,
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded notifications.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// True if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Copy of every recorded notification.
    pub fn observations(&self) -> Vec<Observation> {
        self.entries.borrow().clone()
    }

    /// Recorded events only.
    pub fn events(&self) -> Vec<SpeedEvent> {
        self.entries.borrow().iter().map(|o| o.event).collect()
    }

    /// Number of recorded events of the given kind.
    pub fn count_of(&self, kind: ThresholdKind) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|o| o.event.kind == kind)
            .count()
    }

    /// Speeds at which events of the given kind were recorded.
    pub fn speeds_of(&self, kind: ThresholdKind) -> Vec<i64> {
        self.entries
            .borrow()
            .iter()
            .filter(|o| o.event.kind == kind)
            .map(|o| o.event.speed)
            .collect()
    }
}

impl SpeedObserver for EventLog {
    fn notify(&mut self, source: &SpeedState, event: &SpeedEvent) {
        self.entries.borrow_mut().push(Observation {
            source: source.clone(),
            event: *event,
        });
    }
}

// ============================================================================
// Tests
// ============================================================================
