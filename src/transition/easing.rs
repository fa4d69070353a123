//! Easing functions for the interpolated backend

use serde::{Deserialize, Serialize};

/// Progress curve applied to a transition's normalized time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    /// Cosine curve: slow start, fast middle, slow end
    #[default]
    AccelerateDecelerate,
    EaseInOut,
    EaseOutCubic,
}

impl Easing {
    /// Map `t` in `[0, 1]` to progress in `[0, 1]`
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => linear(t),
            Easing::AccelerateDecelerate => accelerate_decelerate(t),
            Easing::EaseInOut => ease_in_out(t),
            Easing::EaseOutCubic => ease_out_cubic(t),
        }
    }
}

#[inline]
pub fn linear(t: f32) -> f32 {
    t
}

#[inline]
pub fn accelerate_decelerate(t: f32) -> f32 {
    ((t + 1.0) * std::f32::consts::PI).cos() / 2.0 + 0.5
}

/// Ease-in-out cubic function
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Ease-out cubic function
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}
