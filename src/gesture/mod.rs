//! Gesture input
//!
//! Pointer events arrive per panel. The classifier decides whether a
//! stream is a horizontal drag worth intercepting; the router turns
//! intercepted streams into move/release notifications for a delegate.

mod classify;
mod event;
mod router;

pub use classify::DragClassifier;
pub use event::{EventResult, PointerAction, PointerEvent};
pub use router::{GestureRouter, GestureState, LayerDelegate};
