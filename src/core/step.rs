//! The step discriminant for the lemonade cycle.
//!
//! `Step` identifies which of the four stages is currently displayed.
//! All methods are pure - no side effects. The value is only ever changed
//! by the transition function; the presentation layer reads it to pick
//! what to render.

use serde::{Deserialize, Serialize};

/// Which stage of the lemonade cycle is currently active.
///
/// The four variants form a cycle with no terminal state:
/// `SelectLemon -> Squeeze -> Drink -> EmptyGlass -> SelectLemon -> ...`
/// (`Squeeze` loops on itself until its counter is exhausted).
///
/// # Example
///
/// ```rust
/// use lemonade::core::Step;
///
/// let step = Step::SelectLemon;
/// assert_eq!(step.name(), "SelectLemon");
/// assert!(step.is_initial());
/// assert!(!Step::Drink.is_initial());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Step {
    /// Pick a lemon from the tree.
    SelectLemon,
    /// Squeeze the lemon; repeats until the squeeze counter reaches zero.
    Squeeze,
    /// Drink the lemonade.
    Drink,
    /// The glass is empty; the next activation starts over.
    EmptyGlass,
}

impl Step {
    /// All steps in cycle order, starting from the initial step.
    pub const ALL: [Step; 4] = [
        Step::SelectLemon,
        Step::Squeeze,
        Step::Drink,
        Step::EmptyGlass,
    ];

    /// Get the step's name for display/logging.
    ///
    /// Returns a static string reference for zero-cost naming.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectLemon => "SelectLemon",
            Self::Squeeze => "Squeeze",
            Self::Drink => "Drink",
            Self::EmptyGlass => "EmptyGlass",
        }
    }

    /// Check if this is the initial step of a session.
    ///
    /// Every session starts at `SelectLemon`, and every completed cycle
    /// returns to it. There is no final step - the cycle runs indefinitely.
    pub fn is_initial(&self) -> bool {
        matches!(self, Self::SelectLemon)
    }
}
