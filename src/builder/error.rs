//! Build errors for the step controller builder.

use thiserror::Error;

/// Errors that can occur when building a configured step controller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Squeeze range is empty. Call .squeeze_range(start..=end) with start <= end")]
    EmptySqueezeRange,

    #[error("Squeeze range contains zero. Draws must be at least 1 so the squeeze step exits by counting down to zero")]
    ZeroSqueezeDraw,
}
