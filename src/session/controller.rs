//! The step controller that executes activations.

use crate::core::{activate, ActivationHistory, ActivationRecord, Step, SqueezeCount};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

/// The stock squeeze range: each arrival into `Squeeze` requires 2 to 4
/// squeezes, inclusive, each equally likely.
pub const DEFAULT_SQUEEZE_RANGE: RangeInclusive<SqueezeCount> = 2..=4;

/// Owns the session state and drives the cycle.
///
/// The controller holds the current [`Step`], the squeeze counter, the
/// RNG, and the activation history. The presentation layer may only read
/// the current step and call [`on_activate`](Self::on_activate); it never
/// writes state directly.
///
/// Calls are strictly sequential - one activation is fully applied before
/// the next is dispatched - so the controller needs no locking and no
/// interior mutability.
///
/// # Example
///
/// ```rust
/// use lemonade::session::StepController;
/// use lemonade::core::Step;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut controller = StepController::with_rng(StdRng::seed_from_u64(7));
/// assert_eq!(controller.current_step(), Step::SelectLemon);
///
/// // First tap picks a lemon and draws the squeeze counter.
/// assert_eq!(controller.on_activate(), Step::Squeeze);
/// let n = controller.squeezes_remaining();
/// assert!((2..=4).contains(&n));
///
/// // Exactly n more taps reach the drink.
/// for _ in 0..n {
///     controller.on_activate();
/// }
/// assert_eq!(controller.current_step(), Step::Drink);
/// ```
pub struct StepController<R: Rng = StdRng> {
    step: Step,
    squeezes_remaining: SqueezeCount,
    squeeze_range: RangeInclusive<SqueezeCount>,
    rng: R,
    history: ActivationHistory,
}

impl StepController<StdRng> {
    /// Create a controller with an OS-seeded RNG and the default squeeze
    /// range.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }
}

impl Default for StepController<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> StepController<R> {
    /// Create a controller with an injected RNG.
    ///
    /// Tests pass a seeded [`StdRng`] here to make every draw
    /// reproducible.
    pub fn with_rng(rng: R) -> Self {
        Self::from_parts(DEFAULT_SQUEEZE_RANGE, rng)
    }

    pub(crate) fn from_parts(squeeze_range: RangeInclusive<SqueezeCount>, rng: R) -> Self {
        Self {
            step: Step::SelectLemon,
            squeezes_remaining: 0,
            squeeze_range,
            rng,
            history: ActivationHistory::new(),
        }
    }

    /// Apply one user activation and return the step it moved to.
    ///
    /// Defined for all four steps; there is no error path. The squeeze
    /// counter is drawn fresh on each `SelectLemon -> Squeeze` edge,
    /// uniformly from the configured range, independent of prior draws.
    pub fn on_activate(&mut self) -> Step {
        let draw = if self.step.is_initial() {
            self.rng.random_range(self.squeeze_range.clone())
        } else {
            0
        };

        let outcome = activate(self.step, self.squeezes_remaining, draw);
        self.history = self.history.record(ActivationRecord {
            from: self.step,
            to: outcome.step,
            timestamp: Utc::now(),
            squeezes_remaining: outcome.squeezes_remaining,
        });
        self.step = outcome.step;
        self.squeezes_remaining = outcome.squeezes_remaining;
        self.step
    }

    /// Get the current step (pure).
    ///
    /// This is the discriminant the presentation layer keys its display
    /// triple on.
    pub fn current_step(&self) -> Step {
        self.step
    }

    /// Get the remaining squeeze count (pure).
    ///
    /// Meaningful only while the current step is `Squeeze`; 0 elsewhere.
    pub fn squeezes_remaining(&self) -> SqueezeCount {
        self.squeezes_remaining
    }

    /// The range squeeze counters are drawn from.
    pub fn squeeze_range(&self) -> &RangeInclusive<SqueezeCount> {
        &self.squeeze_range
    }

    /// Get the activation history (pure).
    pub fn history(&self) -> &ActivationHistory {
        &self.history
    }

    /// Return the session to its starting state.
    ///
    /// Equivalent to the hosting process restarting the session: back to
    /// `SelectLemon`, counter cleared, history emptied. The RNG and the
    /// configured squeeze range are kept.
    pub fn reset(&mut self) {
        self.step = Step::SelectLemon;
        self.squeezes_remaining = 0;
        self.history = ActivationHistory::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> StepController<StdRng> {
        StepController::with_rng(StdRng::seed_from_u64(seed))
    }

    #[test]
    fn session_starts_at_select_lemon() {
        let controller = seeded(0);
        assert_eq!(controller.current_step(), Step::SelectLemon);
        assert_eq!(controller.squeezes_remaining(), 0);
        assert!(controller.history().records().is_empty());
    }

    #[test]
    fn first_activation_enters_squeeze_with_drawn_counter() {
        for seed in 0..32 {
            let mut controller = seeded(seed);
            assert_eq!(controller.on_activate(), Step::Squeeze);
            assert!(DEFAULT_SQUEEZE_RANGE.contains(&controller.squeezes_remaining()));
        }
    }

    #[test]
    fn squeeze_requires_exactly_the_drawn_count() {
        let mut controller = seeded(11);
        controller.on_activate();
        let n = controller.squeezes_remaining();

        for remaining in (1..n).rev() {
            assert_eq!(controller.on_activate(), Step::Squeeze);
            assert_eq!(controller.squeezes_remaining(), remaining);
        }

        assert_eq!(controller.on_activate(), Step::Drink);
        assert_eq!(controller.squeezes_remaining(), 0);
    }

    #[test]
    fn full_cycle_returns_to_select_lemon() {
        let mut controller = seeded(3);
        assert_eq!(controller.on_activate(), Step::Squeeze);
        let n = controller.squeezes_remaining();

        for _ in 0..n {
            controller.on_activate();
        }
        assert_eq!(controller.current_step(), Step::Drink);
        assert_eq!(controller.on_activate(), Step::EmptyGlass);
        assert_eq!(controller.on_activate(), Step::SelectLemon);

        // n + 3 activations total for the whole cycle.
        assert_eq!(controller.history().records().len(), (n as usize) + 3);
    }

    #[test]
    fn counter_is_redrawn_on_each_new_cycle() {
        let mut controller = seeded(5);
        let mut draws = Vec::new();

        for _ in 0..64 {
            controller.on_activate();
            draws.push(controller.squeezes_remaining());
            while controller.current_step() != Step::SelectLemon {
                controller.on_activate();
            }
        }

        assert!(draws.iter().all(|n| DEFAULT_SQUEEZE_RANGE.contains(n)));
        // With 64 draws from {2, 3, 4} at least two distinct values show up.
        let first = draws[0];
        assert!(draws.iter().any(|n| *n != first));
    }

    #[test]
    fn history_records_the_observed_path() {
        let mut controller = seeded(9);
        let mut expected = vec![controller.current_step()];

        for _ in 0..10 {
            expected.push(controller.on_activate());
        }

        assert_eq!(controller.history().get_path(), expected);
    }

    #[test]
    fn reset_restores_the_initial_session() {
        let mut controller = seeded(2);
        controller.on_activate();
        controller.on_activate();

        controller.reset();

        assert_eq!(controller.current_step(), Step::SelectLemon);
        assert_eq!(controller.squeezes_remaining(), 0);
        assert!(controller.history().records().is_empty());
    }
}
