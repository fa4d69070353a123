//! Panel system - the layered slide-out cascade
//!
//! A chain of panels can be progressively revealed from one screen edge.
//! Layer 1 is the outermost surface; sliding it aside reveals layer 2,
//! sliding that aside reveals layer 3, and so on down to the terminus.
//!
//! ## Architecture
//!
//! - `Side`: which screen edge the chain opens from
//! - `Panel`: per-layer geometry (width, offset, touch mode, layout anchor)
//! - `PanelChain`: arena of panels with the parent → child links
//!
//! ## Integration
//!
//! The chain integrates with:
//! - Cascade clamping via `ScrollClamp` in `scroll.rs`
//! - Gesture routing via `GestureRouter` in `gesture/router.rs`
//! - Everything is owned and mutated by `PanelController` in `controller.rs`

mod chain;
mod geometry;

pub use chain::{ChainLink, PanelChain};
pub use geometry::{Anchor, LayerNumber, Panel, Side};
