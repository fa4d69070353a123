//! Offset tweens
//!
//! A `Tween` turns elapsed host time into offsets between `from` and `to`.
//! Two backends share the same contract: every run ends with a frame at
//! exactly `to`, whatever granularity the host clock ticks at.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::easing::Easing;

/// Scheduling strategy for transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "backend", rename_all = "snake_case")]
pub enum AnimationBackend {
    /// Fixed ticks with linear steps, for hosts without an animation clock
    Stepped { tick_ms: u32 },
    /// One eased sample per host clock frame
    Interpolated {
        #[serde(default)]
        easing: Easing,
    },
}

impl Default for AnimationBackend {
    fn default() -> Self {
        AnimationBackend::Interpolated {
            easing: Easing::default(),
        }
    }
}

impl AnimationBackend {
    /// Clock interval a host without its own frame clock should use
    pub fn frame_interval_ms(&self) -> u32 {
        match self {
            AnimationBackend::Stepped { tick_ms } => (*tick_ms).max(1),
            AnimationBackend::Interpolated { .. } => 16,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Tween {
    from: i32,
    to: i32,
    duration_ms: u32,
    backend: AnimationBackend,
    elapsed_ms: u64,
    ticks_emitted: u64,
    finished: bool,
}

impl Tween {
    pub fn new(from: i32, to: i32, duration_ms: u32, backend: AnimationBackend) -> Self {
        Self {
            from,
            to,
            duration_ms,
            backend,
            elapsed_ms: 0,
            ticks_emitted: 0,
            finished: false,
        }
    }

    #[inline]
    pub fn from(&self) -> i32 {
        self.from
    }

    #[inline]
    pub fn to(&self) -> i32 {
        self.to
    }

    #[inline]
    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    #[inline]
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Offset at a point in time; exactly `to` once the duration has passed
    pub fn value_at(&self, elapsed_ms: u64) -> i32 {
        let duration = u64::from(self.duration_ms);
        if elapsed_ms >= duration {
            return self.to;
        }
        let total = i64::from(self.to) - i64::from(self.from);
        match self.backend {
            AnimationBackend::Stepped { .. } => {
                // Computed from elapsed time, never accumulated, so no drift
                let step = total * elapsed_ms as i64 / duration as i64;
                self.from + step as i32
            }
            AnimationBackend::Interpolated { easing } => {
                let t = elapsed_ms as f32 / duration as f32;
                self.from + (total as f32 * easing.apply(t)).round() as i32
            }
        }
    }

    /// Advance the clock by `dt_ms`, returning the frames now due in order
    ///
    /// A finished tween returns nothing.
    pub fn advance(&mut self, dt_ms: u32) -> Vec<i32> {
        let mut frames = Vec::new();
        if self.finished {
            return frames;
        }

        self.elapsed_ms += u64::from(dt_ms);
        let duration = u64::from(self.duration_ms);

        match self.backend {
            AnimationBackend::Stepped { tick_ms } => {
                let tick = u64::from(tick_ms.max(1));
                loop {
                    let at = (self.ticks_emitted + 1) * tick;
                    if at >= duration || at > self.elapsed_ms {
                        break;
                    }
                    frames.push(self.value_at(at));
                    self.ticks_emitted += 1;
                }
            }
            AnimationBackend::Interpolated { .. } => {
                if self.elapsed_ms < duration {
                    frames.push(self.value_at(self.elapsed_ms));
                }
            }
        }

        if self.elapsed_ms >= duration {
            frames.push(self.to);
            self.finished = true;
        }
        frames
    }

    /// Lazy frame sequence for a clock ticking every `clock_ms`
    pub fn frames(self, clock_ms: u32) -> Frames {
        Frames {
            tween: self,
            clock_ms: clock_ms.max(1),
            pending: VecDeque::new(),
        }
    }
}

/// Iterator over a tween's frames, driven by a fixed clock
#[derive(Debug, Clone)]
pub struct Frames {
    tween: Tween,
    clock_ms: u32,
    pending: VecDeque<i32>,
}

impl Iterator for Frames {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        loop {
            if let Some(value) = self.pending.pop_front() {
                return Some(value);
            }
            if self.tween.is_finished() {
                return None;
            }
            self.pending.extend(self.tween.advance(self.clock_ms));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEPPED_30: AnimationBackend = AnimationBackend::Stepped { tick_ms: 30 };

    #[test]
    fn test_stepped_ticks_are_linear() {
        let mut tween = Tween::new(0, 333, 333, STEPPED_30);
        assert_eq!(tween.advance(30), vec![30]);
        assert_eq!(tween.advance(60), vec![60, 90]);
        assert!(!tween.is_finished());
    }

    #[test]
    fn test_stepped_final_tick_is_exact() {
        // 300 * 30 / 333 does not divide evenly; the last frame must still be 300
        let frames: Vec<i32> = Tween::new(0, 300, 333, STEPPED_30).frames(30).collect();
        assert_eq!(frames.len(), 12);
        assert_eq!(frames.last(), Some(&300));
        assert!(frames.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_interpolated_samples_host_clock() {
        let mut tween = Tween::new(300, 0, 333, AnimationBackend::default());
        let first = tween.advance(16);
        assert_eq!(first.len(), 1);
        assert!(first[0] < 300 && first[0] > 250);
        assert_eq!(tween.advance(1000), vec![0]);
        assert!(tween.is_finished());
        assert!(tween.advance(16).is_empty());
    }

    #[test]
    fn test_zero_duration_jumps_to_target() {
        let mut tween = Tween::new(10, 200, 0, STEPPED_30);
        assert_eq!(tween.advance(0), vec![200]);
        assert!(tween.is_finished());
    }

    #[test]
    fn test_frame_interval() {
        assert_eq!(STEPPED_30.frame_interval_ms(), 30);
        assert_eq!(
            AnimationBackend::Stepped { tick_ms: 0 }.frame_interval_ms(),
            1
        );
        assert_eq!(AnimationBackend::default().frame_interval_ms(), 16);
    }
}
