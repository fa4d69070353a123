//! Per-layer geometry and sliding state
//!
//! A `Panel` is one slidable surface in the cascade. Offsets use the
//! signed scroll convention of the host view: panels opening from the
//! `Start` edge move to negative offsets, panels opening from the `End`
//! edge move to positive offsets. Zero is always the closed resting state.

use serde::{Deserialize, Serialize};

use crate::error::{PanelError, Result};

/// 1-based position of a panel in the chain (1 = outermost)
pub type LayerNumber = usize;

/// Screen edge the chain opens from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Leading edge (left in LTR layouts)
    Start,
    /// Trailing edge (right in LTR layouts)
    #[default]
    End,
}

impl Side {
    /// Layout anchor applied to child panels revealed from this side
    pub fn anchor(&self) -> Anchor {
        match self {
            Side::Start => Anchor::Leading,
            Side::End => Anchor::Trailing,
        }
    }

    /// Offset magnitude of a signed offset (grows while opening)
    #[inline]
    pub fn magnitude(&self, offset_x: i32) -> i32 {
        match self {
            Side::Start => offset_x.saturating_neg(),
            Side::End => offset_x,
        }
    }

    /// Signed offset for a magnitude
    #[inline]
    pub fn signed(&self, magnitude: i32) -> i32 {
        match self {
            Side::Start => magnitude.saturating_neg(),
            Side::End => magnitude,
        }
    }

    /// Map a raw pointer delta into opening space (positive = opening)
    ///
    /// A raw delta moves the offset by `-delta` on both sides, so only the
    /// sign of the magnitude differs.
    #[inline]
    pub fn opening_delta(&self, raw_delta: i32) -> i32 {
        self.magnitude(raw_delta.saturating_neg())
    }

    /// Whether a released drag with the given total displacement opens
    pub fn opens_with(&self, total_delta: f32) -> bool {
        match self {
            Side::Start => total_delta > 0.0,
            Side::End => total_delta < 0.0,
        }
    }

    /// Whether a touch at `local_x` lies inside the activation zone
    /// measured from this edge of a panel `panel_width` wide
    pub fn in_activation_zone(&self, local_x: f32, panel_width: i32, zone_width: i32) -> bool {
        match self {
            Side::Start => local_x < zone_width as f32,
            Side::End => (panel_width as f32 - local_x) < zone_width as f32,
        }
    }
}

/// Horizontal layout anchor of a panel inside its container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    #[default]
    Leading,
    Trailing,
}

/// One layer of the cascade
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    layer: LayerNumber,
    width: i32,
    offset_x: i32,
    touch_mode_enabled: bool,
    anchor: Anchor,
    padding_top: i32,
}

impl Panel {
    /// Create a closed panel at `layer` with the given measured width
    pub fn new(layer: LayerNumber, width: i32) -> Result<Self> {
        if layer == 0 {
            return Err(PanelError::UnknownLayer(layer));
        }
        PanelError::check_non_negative("width", width)?;
        Ok(Self {
            layer,
            width,
            offset_x: 0,
            touch_mode_enabled: true,
            anchor: Anchor::default(),
            padding_top: 0,
        })
    }

    /// Builder-style touch mode toggle
    pub fn with_touch_mode(mut self, enabled: bool) -> Self {
        self.touch_mode_enabled = enabled;
        self
    }

    #[inline]
    pub fn layer(&self) -> LayerNumber {
        self.layer
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    pub(crate) fn set_width(&mut self, width: i32) -> Result<()> {
        PanelError::check_non_negative("width", width)?;
        self.width = width;
        Ok(())
    }

    /// Current signed horizontal offset of the panel's content
    #[inline]
    pub fn offset_x(&self) -> i32 {
        self.offset_x
    }

    pub(crate) fn scroll_by(&mut self, delta: i32) {
        self.offset_x = self.offset_x.saturating_add(delta);
    }

    #[inline]
    pub fn is_touch_mode_enabled(&self) -> bool {
        self.touch_mode_enabled
    }

    pub(crate) fn set_touch_mode_enabled(&mut self, enabled: bool) {
        self.touch_mode_enabled = enabled;
    }

    #[inline]
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    #[inline]
    pub fn padding_top(&self) -> i32 {
        self.padding_top
    }

    /// Apply the layout a parent imposes on its child surface
    pub(crate) fn align_as_child(&mut self, side: Side, top_inset: i32) {
        self.anchor = side.anchor();
        self.padding_top = top_inset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_magnitude_round_trips_sign() {
        assert_eq!(Side::Start.magnitude(-120), 120);
        assert_eq!(Side::End.magnitude(120), 120);
        assert_eq!(Side::Start.signed(120), -120);
        assert_eq!(Side::End.signed(120), 120);
    }

    #[test]
    fn test_side_saturates_at_extremes() {
        assert_eq!(Side::Start.magnitude(i32::MIN), i32::MAX);
        assert_eq!(Side::Start.signed(i32::MIN), i32::MAX);
        assert_eq!(Side::End.opening_delta(i32::MIN), i32::MAX);
        assert_eq!(Side::Start.opening_delta(i32::MIN), -i32::MAX);
    }

    #[test]
    fn test_opening_delta_direction() {
        // Dragging right opens a start-side chain
        assert_eq!(Side::Start.opening_delta(10), 10);
        // Dragging left opens an end-side chain
        assert_eq!(Side::End.opening_delta(-10), 10);
        assert_eq!(Side::End.opening_delta(10), -10);
    }

    #[test]
    fn test_release_direction() {
        assert!(Side::Start.opens_with(40.0));
        assert!(!Side::Start.opens_with(-40.0));
        assert!(Side::End.opens_with(-40.0));
        assert!(!Side::End.opens_with(40.0));
        assert!(!Side::End.opens_with(0.0));
    }

    #[test]
    fn test_activation_zone() {
        assert!(Side::Start.in_activation_zone(10.0, 300, 48));
        assert!(!Side::Start.in_activation_zone(60.0, 300, 48));
        assert!(Side::End.in_activation_zone(290.0, 300, 48));
        assert!(!Side::End.in_activation_zone(100.0, 300, 48));
    }

    #[test]
    fn test_panel_rejects_bad_geometry() {
        assert_eq!(Panel::new(0, 100), Err(PanelError::UnknownLayer(0)));
        assert_eq!(
            Panel::new(1, -5),
            Err(PanelError::InvalidGeometry {
                field: "width",
                value: -5
            })
        );
    }

    #[test]
    fn test_new_panel_is_closed_and_touchable() {
        let panel = Panel::new(2, 300).unwrap();
        assert_eq!(panel.layer(), 2);
        assert_eq!(panel.offset_x(), 0);
        assert!(panel.is_touch_mode_enabled());
        assert!(!panel.with_touch_mode(false).is_touch_mode_enabled());
    }

    #[test]
    fn test_align_as_child() {
        let mut panel = Panel::new(2, 300).unwrap();
        panel.align_as_child(Side::End, 24);
        assert_eq!(panel.anchor(), Anchor::Trailing);
        assert_eq!(panel.padding_top(), 24);
    }
}
