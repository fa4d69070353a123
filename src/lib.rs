//! carddeck - cascading slide-out panels
//!
//! A chain of stacked panels that slide horizontally to reveal one another.
//! Dragging or animating the innermost open panel drags every ancestor
//! along, each clamped so a strip of every layer stays visible.
//!
//! The engine is host-agnostic: hosts feed pointer events and clock ticks
//! into a [`PanelController`] and receive offsets through a [`RenderHook`].

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod controller;
pub mod error;
pub mod gesture;
pub mod panel;
pub mod persistence;
pub mod script;
pub mod scroll;
pub mod tracing;
pub mod transition;

// Re-export commonly used types
pub use config::{CascadeConfig, LogLevel};
pub use controller::{PanelController, RecordingHook, RenderHook};
pub use error::{PanelError, Result};
pub use gesture::{EventResult, PointerAction, PointerEvent};
pub use panel::{LayerNumber, Panel, PanelChain, Side};
pub use transition::{AnimationBackend, Easing};
