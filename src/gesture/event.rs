//! Pointer event types consumed from the host

use serde::{Deserialize, Serialize};

/// Classified pointer action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerAction {
    Down,
    Move,
    Up,
    Cancel,
}

/// A single-pointer event as delivered to one panel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub action: PointerAction,
    /// Screen-space x, used for drag deltas
    pub raw_x: f32,
    /// Panel-local x, used for the activation zone
    pub x: f32,
    /// Panel-local y, used for axis classification
    pub y: f32,
}

impl PointerEvent {
    pub fn new(action: PointerAction, raw_x: f32, x: f32, y: f32) -> Self {
        Self { action, raw_x, x, y }
    }

    pub fn down(raw_x: f32, x: f32, y: f32) -> Self {
        Self::new(PointerAction::Down, raw_x, x, y)
    }

    pub fn moved(raw_x: f32, x: f32, y: f32) -> Self {
        Self::new(PointerAction::Move, raw_x, x, y)
    }

    pub fn up(raw_x: f32, x: f32, y: f32) -> Self {
        Self::new(PointerAction::Up, raw_x, x, y)
    }

    pub fn cancel() -> Self {
        Self::new(PointerAction::Cancel, 0.0, 0.0, 0.0)
    }
}

/// Whether the cascade took ownership of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Intercepted by the cascade; do not deliver to the panel's content
    Consumed,
    /// Not ours; let the underlying content handle it
    Bubble,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}
