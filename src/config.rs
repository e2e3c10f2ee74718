//! Configuration for the emitter and the demo drive loop.
//!
//! Uses `heapless::String` for `no_std` compatibility while remaining
//! ergonomic to use on desktop with `std`.
//!
//! # Example
//!
//! ```rust
//! use rs_overspeed::config::{Config, DriveConfig, EmitterConfig};
//!
//! // Use defaults ("SlugBug", 100, warn at 130, fatal at 190, 6 x +20)
//! let config = Config::default();
//! assert_eq!(config.emitter.name.as_str(), "SlugBug");
//!
//! // Or customize
//! let config = Config::default()
//!     .with_emitter(EmitterConfig::default().with_name("Zippy").with_initial_speed(0))
//!     .with_drive(DriveConfig::default().with_steps(10).with_increment(25));
//! assert_eq!(config.drive.steps, 10);
//! ```

use heapless::String as HString;

/// Maximum length for short config strings (emitter names)
pub const MAX_SHORT_STRING: usize = 64;

/// Type alias for short config strings
pub type ShortString = HString<MAX_SHORT_STRING>;

// ============================================================================
// Helper for creating heapless strings
// ============================================================================

/// Create a ShortString from a &str, truncating on a UTF-8 boundary if too long
pub fn short_string(s: &str) -> ShortString {
    let mut hs = ShortString::new();
    // Longest prefix that ends on a char boundary and still fits
    let valid_end = s
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .take_while(|end| *end <= MAX_SHORT_STRING)
        .last()
        .unwrap_or(0);
    let _ = hs.push_str(&s[..valid_end]);
    hs
}

// ============================================================================
// Main Config
// ============================================================================

/// Complete application configuration
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// Emitter construction parameters
    pub emitter: EmitterConfig,
    /// Demo drive loop parameters
    pub drive: DriveConfig,
}

impl Config {
    /// Set emitter configuration
    pub fn with_emitter(mut self, emitter: EmitterConfig) -> Self {
        self.emitter = emitter;
        self
    }

    /// Set drive configuration
    pub fn with_drive(mut self, drive: DriveConfig) -> Self {
        self.drive = drive;
        self
    }
}

// ============================================================================
// Emitter Config
// ============================================================================

/// Parameters for building a [`SpeedThresholdEmitter`](crate::SpeedThresholdEmitter)
///
/// No validation is applied; `fatal_threshold > warn_threshold` is expected
/// but any integers are accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmitterConfig {
    /// Emitter name
    pub name: ShortString,
    /// Speed before the first acceleration
    pub initial_speed: i64,
    /// Speed at which warning observers fire
    pub warn_threshold: i64,
    /// Speed at which fatal observers fire
    pub fatal_threshold: i64,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            name: short_string("SlugBug"),
            initial_speed: 100,
            warn_threshold: 130,
            fatal_threshold: 190,
        }
    }
}

impl EmitterConfig {
    /// Set the name
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = short_string(name);
        self
    }

    /// Set the initial speed
    pub fn with_initial_speed(mut self, speed: i64) -> Self {
        self.initial_speed = speed;
        self
    }

    /// Set both thresholds
    pub fn with_thresholds(mut self, warn: i64, fatal: i64) -> Self {
        self.warn_threshold = warn;
        self.fatal_threshold = fatal;
        self
    }
}

// ============================================================================
// Drive Config
// ============================================================================

/// Fixed acceleration loop used by the demo driver
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DriveConfig {
    /// Number of `accelerate` calls
    pub steps: u32,
    /// Delta passed to every call
    pub increment: i64,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            steps: 6,
            increment: 20,
        }
    }
}

impl DriveConfig {
    /// Set the number of steps
    pub fn with_steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }

    /// Set the per-step increment
    pub fn with_increment(mut self, increment: i64) -> Self {
        self.increment = increment;
        self
    }

    /// Speed reached after the whole loop, starting from `initial_speed`
    ///
    /// Saturates per step, like repeated
    /// [`accelerate`](crate::SpeedThresholdEmitter::accelerate) calls.
    pub fn final_speed(&self, initial_speed: i64) -> i64 {
        (0..self.steps).fold(initial_speed, |speed, _| {
            speed.saturating_add(self.increment)
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.emitter.name.as_str(), "SlugBug");
        assert_eq!(config.emitter.initial_speed, 100);
        assert_eq!(config.emitter.warn_threshold, 130);
        assert_eq!(config.emitter.fatal_threshold, 190);
        assert_eq!(config.drive.steps, 6);
        assert_eq!(config.drive.increment, 20);
    }

    #[test]
    fn builder_pattern() {
        let config = Config::default()
            .with_emitter(
                EmitterConfig::default()
                    .with_name("Zippy")
                    .with_initial_speed(0)
                    .with_thresholds(50, 80),
            )
            .with_drive(DriveConfig::default().with_steps(3).with_increment(30));

        assert_eq!(config.emitter.name.as_str(), "Zippy");
        assert_eq!(config.emitter.initial_speed, 0);
        assert_eq!(config.emitter.warn_threshold, 50);
        assert_eq!(config.emitter.fatal_threshold, 80);
        assert_eq!(config.drive.steps, 3);
        assert_eq!(config.drive.increment, 30);
    }

    #[test]
    fn thresholds_not_validated() {
        let emitter = EmitterConfig::default().with_thresholds(200, 10);
        assert_eq!(emitter.warn_threshold, 200);
        assert_eq!(emitter.fatal_threshold, 10);
    }

    #[test]
    fn drive_final_speed() {
        let drive = DriveConfig::default();
        assert_eq!(drive.final_speed(100), 220);

        let drive = DriveConfig::default().with_steps(0);
        assert_eq!(drive.final_speed(100), 100);

        let drive = DriveConfig::default().with_increment(i64::MAX);
        assert_eq!(drive.final_speed(1), i64::MAX);
    }

    #[test]
    fn drive_final_speed_saturates_per_step() {
        // First step clamps at i64::MAX, second step stays there
        let drive = DriveConfig::default()
            .with_steps(2)
            .with_increment(i64::MAX);
        assert_eq!(drive.final_speed(-100), i64::MAX);

        let drive = DriveConfig::default()
            .with_steps(3)
            .with_increment(i64::MIN);
        assert_eq!(drive.final_speed(100), i64::MIN);
    }

    // =========================================================================
    // String Helper Tests
    // =========================================================================

    #[test]
    fn short_string_truncation() {
        let long_input = "a".repeat(100);
        let s = short_string(&long_input);
        assert_eq!(s.len(), MAX_SHORT_STRING);
    }

    #[test]
    fn short_string_utf8_boundary() {
        // 63 ASCII bytes then a 4-byte char that would overflow the buffer
        let mut input = "x".repeat(MAX_SHORT_STRING - 1);
        input.push('\u{1F697}');
        let s = short_string(&input);
        assert_eq!(s.len(), MAX_SHORT_STRING - 1);
        assert!(core::str::from_utf8(s.as_bytes()).is_ok());
    }

    #[test]
    fn short_string_empty() {
        assert!(short_string("").is_empty());
    }
}
