//! The interactive session shell.
//!
//! This module is the imperative counterpart to [`crate::core`]: it owns
//! the mutable session state and the RNG, and applies the pure transition
//! function one activation at a time.

mod controller;

pub use controller::{StepController, DEFAULT_SQUEEZE_RANGE};
