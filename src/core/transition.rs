//! The pure transition function for the lemonade cycle.
//!
//! The entire transition table lives in [`activate`], a total function
//! with no side effects. The random squeeze draw is injected as an
//! argument, so the core stays deterministic; only the session shell
//! touches an RNG.

use super::step::Step;

/// Number of activations still required to leave the `Squeeze` step.
///
/// Meaningful only while the current step is [`Step::Squeeze`]; held at 0
/// everywhere else.
pub type SqueezeCount = u8;

/// Result of applying one activation to the cycle.
///
/// The outcome is a plain value - the caller decides what to do with it
/// (the session controller applies it to its owned state and records it
/// in history).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Outcome {
    /// The step the cycle moves to.
    pub step: Step,
    /// The squeeze counter after the activation.
    pub squeezes_remaining: SqueezeCount,
}

/// Apply one activation to the cycle.
///
/// This is a pure function over the whole four-step table; it is defined
/// for every step and cannot fail. `draw` is the squeeze count to install
/// when entering `Squeeze`; it is ignored on every other edge.
///
/// Transition table:
/// - `SelectLemon` -> `Squeeze`, counter set to `draw`
/// - `Squeeze` -> decrement first; at zero move to `Drink`, otherwise stay
/// - `Drink` -> `EmptyGlass`
/// - `EmptyGlass` -> `SelectLemon` (closes the cycle)
///
/// The exit from `Squeeze` happens exactly when a decrement reaches zero,
/// never before and never by skipping.
///
/// # Example
///
/// ```rust
/// use lemonade::core::{activate, Step};
///
/// let out = activate(Step::SelectLemon, 0, 3);
/// assert_eq!(out.step, Step::Squeeze);
/// assert_eq!(out.squeezes_remaining, 3);
///
/// // Two squeezes left: one activation stays in Squeeze...
/// let out = activate(Step::Squeeze, 2, 0);
/// assert_eq!(out.step, Step::Squeeze);
/// assert_eq!(out.squeezes_remaining, 1);
///
/// // ...and the last one moves on.
/// let out = activate(Step::Squeeze, 1, 0);
/// assert_eq!(out.step, Step::Drink);
/// ```
pub fn activate(step: Step, squeezes_remaining: SqueezeCount, draw: SqueezeCount) -> Outcome {
    match step {
        Step::SelectLemon => Outcome {
            step: Step::Squeeze,
            squeezes_remaining: draw,
        },
        Step::Squeeze => {
            let remaining = squeezes_remaining.saturating_sub(1);
            if remaining == 0 {
                Outcome {
                    step: Step::Drink,
                    squeezes_remaining: 0,
                }
            } else {
                Outcome {
                    step: Step::Squeeze,
                    squeezes_remaining: remaining,
                }
            }
        }
        Step::Drink => Outcome {
            step: Step::EmptyGlass,
            squeezes_remaining: 0,
        },
        Step::EmptyGlass => Outcome {
            step: Step::SelectLemon,
            squeezes_remaining: 0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_lemon_enters_squeeze_with_draw() {
        for draw in 2..=4 {
            let out = activate(Step::SelectLemon, 0, draw);
            assert_eq!(out.step, Step::Squeeze);
            assert_eq!(out.squeezes_remaining, draw);
        }
    }

    #[test]
    fn squeeze_decrements_until_zero_then_drinks() {
        let mut out = activate(Step::SelectLemon, 0, 4);

        // First three activations stay in Squeeze with the counter falling.
        for expected in [3, 2, 1] {
            out = activate(out.step, out.squeezes_remaining, 0);
            assert_eq!(out.step, Step::Squeeze);
            assert_eq!(out.squeezes_remaining, expected);
        }

        // The fourth decrement reaches zero and exits.
        out = activate(out.step, out.squeezes_remaining, 0);
        assert_eq!(out.step, Step::Drink);
        assert_eq!(out.squeezes_remaining, 0);
    }

    #[test]
    fn drink_moves_to_empty_glass() {
        let out = activate(Step::Drink, 0, 0);
        assert_eq!(out.step, Step::EmptyGlass);
        assert_eq!(out.squeezes_remaining, 0);
    }

    #[test]
    fn empty_glass_closes_the_cycle() {
        let out = activate(Step::EmptyGlass, 0, 0);
        assert_eq!(out.step, Step::SelectLemon);
        assert_eq!(out.squeezes_remaining, 0);
    }

    #[test]
    fn draw_is_ignored_outside_select_lemon() {
        assert_eq!(activate(Step::Drink, 0, 4).step, Step::EmptyGlass);
        assert_eq!(activate(Step::EmptyGlass, 0, 4).step, Step::SelectLemon);
        assert_eq!(activate(Step::Squeeze, 2, 4).squeezes_remaining, 1);
    }

    #[test]
    fn activate_is_deterministic() {
        for step in Step::ALL {
            assert_eq!(activate(step, 3, 2), activate(step, 3, 2));
        }
    }
}
