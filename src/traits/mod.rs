//! Trait definitions for the observer seam.
//!
//! # Submodules
//!
//! - `observer`: The [`SpeedObserver`] trait, implemented for closures and
//!   for the recorders in [`crate::recorders`]

pub mod observer;

pub use observer::*;
