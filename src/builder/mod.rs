//! Builder API for configured controller construction.
//!
//! The plain constructors on [`StepController`] cover the stock stand.
//! This builder exists for hosts that tune the squeeze range, with the
//! validation needed to keep the cycle's exit rule sound.

pub mod error;

pub use error::BuildError;

use crate::core::SqueezeCount;
use crate::session::{StepController, DEFAULT_SQUEEZE_RANGE};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

/// Builder for step controllers with a fluent API.
///
/// # Example
///
/// ```rust
/// use lemonade::builder::StepControllerBuilder;
/// use lemonade::core::Step;
///
/// let mut controller = StepControllerBuilder::new()
///     .squeeze_range(3..=5)
///     .build()
///     .unwrap();
///
/// controller.on_activate();
/// assert_eq!(controller.current_step(), Step::Squeeze);
/// assert!((3..=5).contains(&controller.squeezes_remaining()));
/// ```
#[derive(Clone, Debug)]
pub struct StepControllerBuilder {
    squeeze_range: RangeInclusive<SqueezeCount>,
}

impl StepControllerBuilder {
    /// Create a new builder with the default squeeze range.
    pub fn new() -> Self {
        Self {
            squeeze_range: DEFAULT_SQUEEZE_RANGE,
        }
    }

    /// Set the inclusive range squeeze counters are drawn from.
    pub fn squeeze_range(mut self, range: RangeInclusive<SqueezeCount>) -> Self {
        self.squeeze_range = range;
        self
    }

    /// Build a controller with an OS-seeded RNG.
    /// Returns an error if the configured range is invalid.
    pub fn build(self) -> Result<StepController<StdRng>, BuildError> {
        self.build_with_rng(StdRng::from_os_rng())
    }

    /// Build a controller with an injected RNG.
    /// Returns an error if the configured range is invalid.
    pub fn build_with_rng<R: Rng>(self, rng: R) -> Result<StepController<R>, BuildError> {
        if self.squeeze_range.is_empty() {
            return Err(BuildError::EmptySqueezeRange);
        }
        if *self.squeeze_range.start() == 0 {
            return Err(BuildError::ZeroSqueezeDraw);
        }
        Ok(StepController::from_parts(self.squeeze_range, rng))
    }
}

impl Default for StepControllerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
