//! Per-panel transition bookkeeping
//!
//! At most one transition is live per layer. Starting a new one replaces
//! whatever was running there; cancelling drops pending frames and leaves
//! the panel wherever the last applied frame put it.

use std::collections::BTreeMap;

use crate::error::{PanelError, Result};
use crate::panel::LayerNumber;

use super::tween::{AnimationBackend, Tween};

/// An in-flight animation of one panel's offset
#[derive(Debug, Clone)]
pub struct TransitionRequest {
    pub layer: LayerNumber,
    tween: Tween,
    /// Last emitted value; deltas are taken between consecutive frames
    last_value: i32,
}

impl TransitionRequest {
    pub fn new(layer: LayerNumber, tween: Tween) -> Self {
        let last_value = tween.from();
        Self {
            layer,
            tween,
            last_value,
        }
    }

    pub fn tween(&self) -> &Tween {
        &self.tween
    }
}

/// One emitted step, expressed as the change since the previous frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub layer: LayerNumber,
    pub value: i32,
    pub delta: i32,
}

#[derive(Debug, Clone)]
pub struct TransitionAnimator {
    backend: AnimationBackend,
    live: BTreeMap<LayerNumber, TransitionRequest>,
}

impl TransitionAnimator {
    pub fn new(backend: AnimationBackend) -> Self {
        Self {
            backend,
            live: BTreeMap::new(),
        }
    }

    pub fn backend(&self) -> AnimationBackend {
        self.backend
    }

    /// Start animating `layer` from `from` to `to`, replacing any live run
    ///
    /// Returns `true` if a previous transition was superseded.
    pub fn animate(
        &mut self,
        layer: LayerNumber,
        from: i32,
        to: i32,
        duration_ms: u32,
    ) -> Result<bool> {
        if duration_ms == 0 {
            return Err(PanelError::InvalidDuration(duration_ms));
        }
        let tween = Tween::new(from, to, duration_ms, self.backend);
        let replaced = self
            .live
            .insert(layer, TransitionRequest::new(layer, tween))
            .is_some();
        tracing::debug!(layer, from, to, duration_ms, replaced, "Transition started");
        Ok(replaced)
    }

    /// Drop the live transition on `layer`; returns whether one existed
    pub fn cancel(&mut self, layer: LayerNumber) -> bool {
        let cancelled = self.live.remove(&layer).is_some();
        if cancelled {
            tracing::debug!(layer, "Transition cancelled");
        }
        cancelled
    }

    /// Drop every live transition; returns how many were running
    pub fn cancel_all(&mut self) -> usize {
        let count = self.live.len();
        if count > 0 {
            tracing::debug!(count, "All transitions cancelled");
        }
        self.live.clear();
        count
    }

    pub fn is_animating(&self, layer: LayerNumber) -> bool {
        self.live.contains_key(&layer)
    }

    pub fn has_live_transitions(&self) -> bool {
        !self.live.is_empty()
    }

    pub fn transition(&self, layer: LayerNumber) -> Option<&TransitionRequest> {
        self.live.get(&layer)
    }

    /// Advance every live transition and collect the frames now due
    ///
    /// Finished transitions are retired after their final frame.
    pub fn advance(&mut self, dt_ms: u32) -> Vec<Frame> {
        let mut frames = Vec::new();
        for request in self.live.values_mut() {
            for value in request.tween.advance(dt_ms) {
                frames.push(Frame {
                    layer: request.layer,
                    value,
                    delta: value - request.last_value,
                });
                request.last_value = value;
            }
        }
        self.live.retain(|_, request| !request.tween.is_finished());
        frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stepped(tick_ms: u32) -> TransitionAnimator {
        TransitionAnimator::new(AnimationBackend::Stepped { tick_ms })
    }

    #[test]
    fn test_zero_duration_rejected() {
        let mut animator = stepped(30);
        assert_eq!(animator.backend(), AnimationBackend::Stepped { tick_ms: 30 });
        assert_eq!(
            animator.animate(1, 0, 100, 0),
            Err(PanelError::InvalidDuration(0))
        );
    }

    #[test]
    fn test_deltas_sum_to_distance() {
        let mut animator = stepped(30);
        animator.animate(1, 40, 300, 333).unwrap();
        let mut total = 0;
        while animator.has_live_transitions() {
            total += animator
                .advance(30)
                .iter()
                .map(|frame| frame.delta)
                .sum::<i32>();
        }
        assert_eq!(total, 260);
    }

    #[test]
    fn test_new_request_replaces_old() {
        let mut animator = stepped(30);
        assert!(!animator.animate(2, 0, 300, 333).unwrap());
        animator.advance(90);
        assert!(animator.animate(2, 90, 0, 333).unwrap());
        let request = animator.transition(2).unwrap();
        assert_eq!(request.tween().from(), 90);
        assert_eq!(request.tween().to(), 0);
        assert_eq!(request.tween().elapsed_ms(), 0);
    }

    #[test]
    fn test_cancel_drops_pending_frames() {
        let mut animator = stepped(30);
        animator.animate(1, 0, 300, 333).unwrap();
        animator.advance(30);
        assert!(animator.cancel(1));
        assert!(!animator.cancel(1));
        assert!(animator.advance(1000).is_empty());
    }

    #[test]
    fn test_cancel_all() {
        let mut animator = stepped(30);
        animator.animate(1, 0, 100, 333).unwrap();
        animator.animate(3, 0, 100, 333).unwrap();
        assert_eq!(animator.cancel_all(), 2);
        assert!(!animator.has_live_transitions());
        assert_eq!(animator.cancel_all(), 0);
    }

    #[test]
    fn test_finished_transitions_retired() {
        let mut animator = stepped(30);
        animator.animate(1, 0, 100, 100).unwrap();
        let frames = animator.advance(500);
        assert_eq!(frames.last().map(|f| f.value), Some(100));
        assert!(!animator.is_animating(1));
    }

    #[test]
    fn test_independent_layers() {
        let mut animator = stepped(50);
        animator.animate(1, 0, 100, 100).unwrap();
        animator.animate(2, 0, -100, 200).unwrap();
        let frames = animator.advance(100);
        assert!(frames.iter().any(|f| f.layer == 1 && f.value == 100));
        assert!(frames.iter().any(|f| f.layer == 2 && f.value == -50));
        assert!(!animator.is_animating(1));
        assert!(animator.is_animating(2));
    }
}
