//! Notification payloads delivered to speed observers.
//!
//! Every notification carries a [`SpeedEvent`] describing which threshold
//! channel fired ([`ThresholdKind`]), the speed that triggered it, and the
//! threshold it was compared against.
//!
//! # Example
//!
//! ```rust
//! use rs_overspeed::{SpeedEvent, ThresholdKind};
//!
//! let event = SpeedEvent::new(ThresholdKind::Warning, 140, 130);
//! assert_eq!(event.message("SlugBug"), "currentSpeed = 140");
//!
//! let event = SpeedEvent::new(ThresholdKind::Fatal, 200, 190);
//! assert_eq!(event.message("SlugBug"), "SlugBug has blown up at currentSpeed = 200");
//! ```

use alloc::format;
use alloc::string::String;
use core::fmt;

// ============================================================================
// Threshold Channels
// ============================================================================

/// Which observer channel a notification is delivered on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ThresholdKind {
    /// Speed has reached the warning threshold ("about to blow").
    Warning,
    /// Speed has reached the fatal threshold ("exploded").
    Fatal,
}

impl ThresholdKind {
    /// Short lowercase label, used in log lines.
    pub fn label(self) -> &'static str {
        match self {
            ThresholdKind::Warning => "warning",
            ThresholdKind::Fatal => "fatal",
        }
    }
}

impl fmt::Display for ThresholdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Speed Event
// ============================================================================

/// A single threshold notification.
///
/// Events are plain values; observers may clone and keep them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeedEvent {
    /// Channel the event was delivered on.
    pub kind: ThresholdKind,
    /// Speed after the acceleration that produced this event.
    pub speed: i64,
    /// Threshold the speed was compared against.
    pub threshold: i64,
}

impl SpeedEvent {
    /// Creates a new event.
    pub fn new(kind: ThresholdKind, speed: i64, threshold: i64) -> Self {
        Self {
            kind,
            speed,
            threshold,
        }
    }

    /// Returns true for events on the fatal channel.
    pub fn is_fatal(&self) -> bool {
        self.kind == ThresholdKind::Fatal
    }

    /// How far the speed is past the threshold (zero when exactly at it).
    pub fn overshoot(&self) -> i64 {
        self.speed.saturating_sub(self.threshold)
    }

    /// Renders the human-readable notification text.
    ///
    /// Warnings only describe the current speed. Fatal messages also name
    /// the source so they read differently from warnings.
    pub fn message(&self, source_name: &str) -> String {
        match self.kind {
            ThresholdKind::Warning => format!("currentSpeed = {}", self.speed),
            ThresholdKind::Fatal => format!(
                "{} has blown up at currentSpeed = {}",
                source_name, self.speed
            ),
        }
    }
}

impl fmt::Display for SpeedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at currentSpeed = {} (threshold {})",
            self.kind, self.speed, self.threshold
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_and_fatal_messages_differ() {
        let warn = SpeedEvent::new(ThresholdKind::Warning, 200, 130);
        let fatal = SpeedEvent::new(ThresholdKind::Fatal, 200, 190);

        assert_ne!(warn.message("SlugBug"), fatal.message("SlugBug"));
        assert!(fatal.message("SlugBug").contains("SlugBug"));
    }

    #[test]
    fn overshoot_is_zero_at_threshold() {
        let event = SpeedEvent::new(ThresholdKind::Warning, 130, 130);
        assert_eq!(event.overshoot(), 0);

        let event = SpeedEvent::new(ThresholdKind::Fatal, 220, 190);
        assert_eq!(event.overshoot(), 30);
    }

    #[test]
    fn overshoot_saturates() {
        let event = SpeedEvent::new(ThresholdKind::Fatal, i64::MAX, i64::MIN);
        assert_eq!(event.overshoot(), i64::MAX);
    }

    #[test]
    fn kind_ordering_puts_fatal_last() {
        assert!(ThresholdKind::Fatal > ThresholdKind::Warning);
        assert!(SpeedEvent::new(ThresholdKind::Fatal, 0, 0).is_fatal());
        assert!(!SpeedEvent::new(ThresholdKind::Warning, 0, 0).is_fatal());
    }

    #[test]
    fn display_includes_kind_and_threshold() {
        let event = SpeedEvent::new(ThresholdKind::Warning, 140, 130);
        assert_eq!(
            alloc::string::ToString::to_string(&event),
            "warning at currentSpeed = 140 (threshold 130)"
        );
    }
}
