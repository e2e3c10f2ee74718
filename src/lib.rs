//! # rs-overspeed
//!
//! A simulated vehicle that accelerates and notifies closure-based observers
//! when its speed reaches a warning threshold and a fatal threshold.
//!
//! ## Features
//!
//! - **Inline observers**: Register closures directly; any
//!   `FnMut(&SpeedState, &SpeedEvent)` is a [`SpeedObserver`]
//! - **Two channels**: Warning and fatal observers, each invoked in
//!   registration order
//! - **Level-triggered**: Every acceleration at or above a threshold notifies,
//!   not just the crossing
//! - **Recorders**: Shared counters and event logs for reading results back
//!
//! ## Architecture
//!
//! - `traits` - The observer seam
//! - `events` - Notification payloads
//! - `emitter` - The emitter itself
//! - `recorders` - Ready-made observers with shared state
//! - `config` - Emitter and drive-loop configuration
//! - `demo` - The fixed demo scenario (requires `std`)
//!
//! ## Example
//!
//! ```rust
//! use rs_overspeed::{SpeedEvent, SpeedState, SpeedThresholdEmitter};
//! use rs_overspeed::recorders::InvocationCounter;
//!
//! let about_to_blow = InvocationCounter::new();
//! let mut car = SpeedThresholdEmitter::new("SlugBug", 100, 130, 190);
//!
//! let counter = about_to_blow.clone();
//! car.register_warn_observer(move |_: &SpeedState, _: &SpeedEvent| {
//!     counter.increment();
//! });
//! car.register_fatal_observer(|source: &SpeedState, event: &SpeedEvent| {
//!     println!("Fatal Message from Car: {}", event.message(&source.name));
//! });
//!
//! for _ in 0..6 {
//!     car.accelerate(20);
//! }
//! assert_eq!(about_to_blow.count(), 5);
//! assert!(car.is_exploded());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

/// Emitter and observer configuration.
pub mod config;
/// The speed threshold emitter and its state snapshot.
pub mod emitter;
/// Notification payloads.
pub mod events;
/// Observers that record notifications through shared handles.
pub mod recorders;
/// Observer trait.
pub mod traits;

/// Fixed demo scenario driving one emitter and printing observer output.
#[cfg(feature = "std")]
pub mod demo;

// Re-exports for convenience
pub use config::{Config, DriveConfig, EmitterConfig};
pub use emitter::{AccelerationReport, SpeedState, SpeedThresholdEmitter};
pub use events::{SpeedEvent, ThresholdKind};
pub use recorders::{EventLog, InvocationCounter, Observation};
pub use traits::SpeedObserver;
