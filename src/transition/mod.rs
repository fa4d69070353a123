//! Open/close transitions
//!
//! Tweens a panel's offset to its resting value. Frames are handed back to
//! the controller as deltas so they go through the same cascade clamp as
//! a manual drag.

mod animator;
pub mod easing;
mod tween;

pub use animator::{Frame, TransitionAnimator, TransitionRequest};
pub use easing::Easing;
pub use tween::{AnimationBackend, Frames, Tween};

/// Slide duration used when none is configured
pub const DEFAULT_SLIDE_DURATION_MS: u32 = 333;
