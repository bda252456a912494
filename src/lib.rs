//! Lemonade: a four-step interaction engine for a lemonade stand
//!
//! Lemonade models the classic stand as a circular state machine built on
//! the "pure core, imperative shell" philosophy. The transition logic is
//! a total pure function with no side effects; randomness and mutable
//! session state are isolated in the [`session::StepController`] shell.
//!
//! # Core Concepts
//!
//! - **Step**: which of the four stages is currently displayed -
//!   `SelectLemon -> Squeeze -> Drink -> EmptyGlass -> ...`
//! - **Squeeze counter**: drawn uniformly from an inclusive range
//!   (2 to 4 by default) on each arrival into `Squeeze`, decremented per
//!   activation, exiting exactly when it reaches zero
//! - **History**: immutable record of every applied activation
//! - **Presenter**: the capability seam a host implements to display the
//!   current step
//!
//! # Example
//!
//! ```rust
//! use lemonade::core::Step;
//! use lemonade::session::StepController;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut controller = StepController::with_rng(StdRng::seed_from_u64(42));
//!
//! assert_eq!(controller.on_activate(), Step::Squeeze);
//! let squeezes = controller.squeezes_remaining();
//!
//! for _ in 0..squeezes {
//!     controller.on_activate();
//! }
//! assert_eq!(controller.current_step(), Step::Drink);
//!
//! assert_eq!(controller.on_activate(), Step::EmptyGlass);
//! assert_eq!(controller.on_activate(), Step::SelectLemon);
//! ```

pub mod builder;
pub mod core;
pub mod presentation;
pub mod session;

// Re-export commonly used types
pub use builder::{BuildError, StepControllerBuilder};
pub use core::{activate, ActivationHistory, ActivationRecord, Outcome, SqueezeCount, Step};
pub use presentation::{content, Presenter, StepContent};
pub use session::{StepController, DEFAULT_SQUEEZE_RANGE};
