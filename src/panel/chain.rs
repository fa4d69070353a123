//! Linear chain topology
//!
//! Panels live in an index-addressed arena (`layer - 1` is the index).
//! Each registered layer links to exactly one child, the layer it reveals
//! when it slides aside. The last panel has no link: it is the terminus,
//! the innermost surface that never slides.

use crate::error::{PanelError, Result};

use super::geometry::{LayerNumber, Panel, Side};

/// A panel together with its link to the next (child) panel
#[derive(Debug, Clone)]
pub struct ChainLink {
    pub panel: Panel,
    /// `None` only for the terminus
    pub next: Option<LayerNumber>,
}

impl ChainLink {
    #[inline]
    pub fn is_terminus(&self) -> bool {
        self.next.is_none()
    }
}

/// Ordered, strictly linear chain of panels
#[derive(Debug, Clone)]
pub struct PanelChain {
    side: Side,
    top_inset: i32,
    links: Vec<ChainLink>,
}

impl PanelChain {
    /// Create an empty chain opening from `side`
    ///
    /// `top_inset` is the status-bar-equivalent padding applied to every
    /// child surface.
    pub fn new(side: Side, top_inset: i32) -> Result<Self> {
        PanelError::check_non_negative("top_inset", top_inset)?;
        Ok(Self {
            side,
            top_inset,
            links: Vec::new(),
        })
    }

    /// Build a chain from widths, outermost first
    ///
    /// The last width belongs to the terminus, so `widths.len() - 1`
    /// slidable layers are registered. Fewer than two widths is an error.
    pub fn from_widths(side: Side, top_inset: i32, widths: &[i32]) -> Result<Self> {
        if widths.len() < 2 {
            return Err(PanelError::TooFewPanels(widths.len()));
        }
        let mut chain = Self::new(side, top_inset)?;
        for (i, pair) in widths.windows(2).enumerate() {
            let layer = i + 1;
            chain.add_layer(Panel::new(layer, pair[0])?, Panel::new(layer + 1, pair[1])?)?;
        }
        Ok(chain)
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Register `panel` and link it to `child`
    ///
    /// The chain must grow from layer 1 and each child must be the next
    /// layer number. A panel previously added as somebody's child may be
    /// registered once; registering it again fails.
    pub fn add_layer(&mut self, panel: Panel, mut child: Panel) -> Result<()> {
        let layer = panel.layer();
        if child.layer() != layer + 1 {
            return Err(PanelError::NonContiguousLayer {
                layer,
                child: child.layer(),
            });
        }

        let len = self.links.len();
        if layer <= len {
            let link = &mut self.links[layer - 1];
            if link.next.is_some() {
                return Err(PanelError::DuplicateLayer(layer));
            }
            // Keep the alignment the parent already applied
            let (anchor_side, inset) = (self.side, self.top_inset);
            link.panel = panel;
            if layer > 1 {
                link.panel.align_as_child(anchor_side, inset);
            }
            link.next = Some(child.layer());
        } else if len == 0 && layer == 1 {
            self.links.push(ChainLink {
                panel,
                next: Some(child.layer()),
            });
        } else {
            return Err(PanelError::NonContiguousLayer {
                layer,
                child: child.layer(),
            });
        }

        child.align_as_child(self.side, self.top_inset);
        tracing::debug!(
            "Registered layer {} -> child {} (anchor {:?}, padding_top {})",
            layer,
            child.layer(),
            child.anchor(),
            child.padding_top()
        );
        self.links.push(ChainLink { panel: child, next: None });
        Ok(())
    }

    /// Number of slidable (registered) layers
    pub fn layer_count(&self) -> usize {
        self.links.len().saturating_sub(1)
    }

    /// Number of panels including the terminus
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    fn link(&self, layer: LayerNumber) -> Result<&ChainLink> {
        layer
            .checked_sub(1)
            .and_then(|i| self.links.get(i))
            .ok_or(PanelError::UnknownLayer(layer))
    }

    pub fn panel(&self, layer: LayerNumber) -> Result<&Panel> {
        self.link(layer).map(|link| &link.panel)
    }

    pub fn panel_mut(&mut self, layer: LayerNumber) -> Result<&mut Panel> {
        layer
            .checked_sub(1)
            .and_then(|i| self.links.get_mut(i))
            .map(|link| &mut link.panel)
            .ok_or(PanelError::UnknownLayer(layer))
    }

    /// Child of `layer`, or `None` for the terminus
    pub fn next_layer(&self, layer: LayerNumber) -> Result<Option<LayerNumber>> {
        self.link(layer).map(|link| link.next)
    }

    pub fn is_terminus(&self, layer: LayerNumber) -> Result<bool> {
        self.link(layer).map(ChainLink::is_terminus)
    }

    /// Whether `layer` has slid away from its resting position
    ///
    /// The terminus always reports opened: it is the sentinel that stops
    /// descent at the end of the chain.
    pub fn is_opened(&self, layer: LayerNumber) -> Result<bool> {
        let link = self.link(layer)?;
        Ok(link.is_terminus() || link.panel.offset_x() != 0)
    }

    /// Width of the surface `layer` reveals when it opens
    pub fn child_width(&self, layer: LayerNumber) -> Result<i32> {
        match self.next_layer(layer)? {
            Some(child) => Ok(self.panel(child)?.width()),
            None => Err(PanelError::TerminalLayer(layer)),
        }
    }

    /// Resolve the layer that receives gestures arriving at `layer`
    ///
    /// Descends while the child is a slidable layer that is already open,
    /// so a drag bottoms out at the deepest open panel or at the first
    /// closed one. The terminus is never returned for a registered layer.
    pub fn next_opened_descendant(&self, layer: LayerNumber) -> Result<LayerNumber> {
        let mut current = layer;
        loop {
            let Some(child) = self.next_layer(current)? else {
                return Ok(current);
            };
            let child_slidable = !self.is_terminus(child)?;
            if child_slidable && self.is_opened(child)? {
                current = child;
            } else {
                return Ok(current);
            }
        }
    }

    /// Iterate panels from the outermost layer to the terminus
    pub fn iter(&self) -> impl Iterator<Item = &ChainLink> {
        self.links.iter()
    }
}
