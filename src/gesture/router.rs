//! Gesture routing state machine
//!
//! Tracks one pointer stream at a time and turns it into move/release
//! notifications for a `LayerDelegate`. The router knows nothing about the
//! chain: descending to the active layer is the delegate's job, which keeps
//! the router independent of chain depth.
//!
//! States: `Idle → Dragging → Idle`. Up releases through the delegate,
//! Cancel drops the stream without notifying it.

use crate::error::Result;
use crate::panel::{LayerNumber, Side};

use super::classify::DragClassifier;
use super::event::{EventResult, PointerAction, PointerEvent};

/// Largest single move delivered to a delegate
const MAX_MOVE_DELTA: f32 = 1_000_000.0;

/// Receiver of routed gestures
pub trait LayerDelegate {
    /// Whether `layer` takes every event from the down onward, classified
    /// or not (e.g. taps on the visible strip of an opened layer)
    fn should_intercept_events(&self, layer: LayerNumber) -> bool;

    /// Incremental horizontal movement, in whole screen units
    fn on_action_move(&mut self, layer: LayerNumber, delta_x: i32) -> Result<()>;

    /// Release with the total displacement since the down event
    fn on_action_up(&mut self, layer: LayerNumber, total_delta_x: f32) -> Result<()>;
}

/// Current router state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging {
        /// Panel that received the down event
        source: LayerNumber,
        initial_x: f32,
        /// Raw x already delivered as deltas
        last_x: f32,
        /// Whether events are being taken away from the content
        intercepting: bool,
    },
}

impl GestureState {
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, GestureState::Idle)
    }
}

#[derive(Debug, Clone)]
pub struct GestureRouter {
    state: GestureState,
    classifier: DragClassifier,
}

impl GestureRouter {
    pub fn new(side: Side, activation_width: i32) -> Self {
        Self {
            state: GestureState::Idle,
            classifier: DragClassifier::new(side, activation_width),
        }
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Handle one event delivered to `source`
    ///
    /// `panel_width` is the source panel's width (for the activation zone).
    pub fn handle_event<D: LayerDelegate>(
        &mut self,
        source: LayerNumber,
        panel_width: i32,
        event: &PointerEvent,
        delegate: &mut D,
    ) -> Result<EventResult> {
        let horizontal = self.classifier.observe(event, panel_width);

        match event.action {
            PointerAction::Down => {
                let intercepting = delegate.should_intercept_events(source);
                self.state = GestureState::Dragging {
                    source,
                    initial_x: event.raw_x,
                    last_x: event.raw_x,
                    intercepting,
                };
                Ok(result_for(intercepting))
            }

            PointerAction::Move => {
                let GestureState::Dragging {
                    source,
                    initial_x,
                    last_x,
                    intercepting,
                } = self.state
                else {
                    return Ok(EventResult::Bubble);
                };

                let intercepting = intercepting || horizontal;
                if !intercepting {
                    return Ok(EventResult::Bubble);
                }

                // Deliver whole units only; the fraction carries to the next move
                let delta = (event.raw_x - last_x).trunc();
                self.state = GestureState::Dragging {
                    source,
                    initial_x,
                    last_x: last_x + delta,
                    intercepting,
                };
                if delta != 0.0 {
                    let step = delta.clamp(-MAX_MOVE_DELTA, MAX_MOVE_DELTA) as i32;
                    delegate.on_action_move(source, step)?;
                }
                Ok(EventResult::Consumed)
            }

            PointerAction::Up => {
                let state = std::mem::take(&mut self.state);
                match state {
                    GestureState::Dragging {
                        source,
                        initial_x,
                        intercepting: true,
                        ..
                    } => {
                        let total = event.raw_x - initial_x;
                        tracing::debug!(source, total, "Drag released");
                        delegate.on_action_up(source, total)?;
                        Ok(EventResult::Consumed)
                    }
                    _ => Ok(EventResult::Bubble),
                }
            }

            PointerAction::Cancel => {
                let state = std::mem::take(&mut self.state);
                match state {
                    GestureState::Dragging {
                        intercepting: true,
                        ..
                    } => {
                        tracing::debug!("Drag cancelled");
                        Ok(EventResult::Consumed)
                    }
                    _ => Ok(EventResult::Bubble),
                }
            }
        }
    }
}

fn result_for(intercepting: bool) -> EventResult {
    if intercepting {
        EventResult::Consumed
    } else {
        EventResult::Bubble
    }
}
