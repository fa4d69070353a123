//! Cascade scroll clamping
//!
//! Converts a raw pointer delta into the legal offset change for one panel.
//! The computation happens in "opening space", where a positive value
//! always means the panel opens further, and is mapped back to the signed
//! offset convention of the chain's side at the end.

use crate::error::{PanelError, Result};
use crate::panel::{LayerNumber, Side};

/// Geometry of the layer currently receiving gesture deltas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveLayer {
    pub width: i32,
    /// Signed offset, already updated for the current step
    pub offset_x: i32,
}

/// Position of the clamped panel relative to the active layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerRole {
    /// The active layer itself; it may open as far as the surface it reveals
    Active { child_width: i32 },
    /// A layer above the active one, pushed along by the cascade
    Ancestor {
        layer: LayerNumber,
        width: i32,
        active: ActiveLayer,
    },
}

/// Pure clamp for the cascade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollClamp {
    side: Side,
    collapsed_width: i32,
}

impl ScrollClamp {
    pub fn new(side: Side, collapsed_width: i32) -> Result<Self> {
        PanelError::check_non_negative("collapsed_width", collapsed_width)?;
        Ok(Self {
            side,
            collapsed_width,
        })
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    #[inline]
    pub fn collapsed_width(&self) -> i32 {
        self.collapsed_width
    }

    /// Largest offset magnitude allowed for a panel in `role`
    ///
    /// Ancestors stay flush with the active layer's visible edge but always
    /// keep `layer * collapsed_width` of their own surface on screen. A
    /// panel that has not been laid out yet (width 0) gets a max of 0.
    pub fn max_offset(&self, role: &LayerRole) -> i32 {
        match *role {
            LayerRole::Active { child_width } => child_width.max(0),
            LayerRole::Ancestor {
                layer,
                width,
                active,
            } => {
                let distance_from_edge =
                    i64::from(active.width) + i64::from(self.side.magnitude(active.offset_x));
                let depth = i64::try_from(layer).unwrap_or(i64::MAX);
                let keep_visible =
                    i64::from(width) - depth.saturating_mul(i64::from(self.collapsed_width));
                to_i32(distance_from_edge.min(keep_visible).max(0))
            }
        }
    }

    /// Legal signed offset change for a panel currently at `offset_x`
    pub fn legal_delta(&self, offset_x: i32, raw_delta: i32, role: &LayerRole) -> i32 {
        let magnitude = self.side.magnitude(offset_x);
        let mut opening = self.side.opening_delta(raw_delta);

        // Ancestors only start closing once the active layer has retracted
        // beneath them
        if let LayerRole::Ancestor { active, .. } = role {
            if opening < 0 && magnitude < active.width {
                opening = 0;
            }
        }

        let max = i64::from(self.max_offset(role));
        let next = i64::from(magnitude) + i64::from(opening);
        let clamped = next.clamp(0, max);

        self.side.signed(to_i32(clamped - i64::from(magnitude)))
    }
}

/// Saturating narrowing for clamp arithmetic done in `i64`
fn to_i32(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
