//! Panel controller - the composition root
//!
//! Owns the chain, the gesture router and the transition animator, and
//! exposes the public contract: open/close requests, open-state queries,
//! gesture input and the host clock. Every offset change, whether from a
//! drag or an animation frame, goes through one cascade path that clamps
//! the active layer and each ancestor above it, then calls the render hook.

use crate::config::CascadeConfig;
use crate::error::Result;
use crate::gesture::{EventResult, GestureRouter, GestureState, LayerDelegate, PointerEvent};
use crate::panel::{LayerNumber, Panel, PanelChain};
use crate::persistence::SavedState;
use crate::scroll::{ActiveLayer, LayerRole, ScrollClamp};
use crate::transition::{Frame, TransitionAnimator};

/// Host callback that moves a panel's visual content
pub trait RenderHook {
    fn apply_offset(&mut self, layer: LayerNumber, offset_x: i32);
}

impl<F> RenderHook for F
where
    F: FnMut(LayerNumber, i32),
{
    fn apply_offset(&mut self, layer: LayerNumber, offset_x: i32) {
        self(layer, offset_x)
    }
}

/// Render hook that records every call in order
#[derive(Debug, Clone, Default)]
pub struct RecordingHook {
    pub calls: Vec<(LayerNumber, i32)>,
}

impl RecordingHook {
    /// Offsets applied to one layer, in call order
    pub fn offsets_for(&self, layer: LayerNumber) -> Vec<i32> {
        self.calls
            .iter()
            .filter(|(l, _)| *l == layer)
            .map(|(_, offset)| *offset)
            .collect()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl RenderHook for RecordingHook {
    fn apply_offset(&mut self, layer: LayerNumber, offset_x: i32) {
        self.calls.push((layer, offset_x));
    }
}

/// Chain state plus everything needed to move it; the router's delegate
struct Cascade<H> {
    chain: PanelChain,
    clamp: ScrollClamp,
    animator: TransitionAnimator,
    slide_duration_ms: u32,
    hook: H,
    was_ever_opened: bool,
    verbose: bool,
}

impl<H: RenderHook> Cascade<H> {
    /// Apply a raw delta to `active` and cascade it to every ancestor
    fn scroll(&mut self, active: LayerNumber, raw_delta: i32) -> Result<()> {
        let active_width = self.chain.panel(active)?.width();

        for layer in (1..=active).rev() {
            let role = if layer == active {
                LayerRole::Active {
                    child_width: self.open_limit(active)?,
                }
            } else {
                LayerRole::Ancestor {
                    layer,
                    width: self.chain.panel(layer)?.width(),
                    active: ActiveLayer {
                        width: active_width,
                        offset_x: self.chain.panel(active)?.offset_x(),
                    },
                }
            };

            let panel = self.chain.panel_mut(layer)?;
            let delta = self.clamp.legal_delta(panel.offset_x(), raw_delta, &role);
            panel.scroll_by(delta);
            let offset_x = panel.offset_x();

            if self.verbose {
                tracing::trace!(layer, active, raw_delta, delta, offset_x, "Cascade step");
            }
            if offset_x != 0 {
                self.was_ever_opened = true;
            }
            self.hook.apply_offset(layer, offset_x);
        }
        Ok(())
    }

    /// Largest opening magnitude `layer` may reach right now
    ///
    /// A layer with an open descendant is that descendant's ancestor and
    /// keeps its collapsed strip on screen.
    fn open_limit(&self, layer: LayerNumber) -> Result<i32> {
        let child_width = self.chain.child_width(layer)?.max(0);
        let deepest = self.chain.next_opened_descendant(layer)?;
        if deepest == layer {
            return Ok(child_width);
        }
        let descendant = self.chain.panel(deepest)?;
        let cap = self.clamp.max_offset(&LayerRole::Ancestor {
            layer,
            width: self.chain.panel(layer)?.width(),
            active: ActiveLayer {
                width: descendant.width(),
                offset_x: descendant.offset_x(),
            },
        });
        Ok(child_width.min(cap))
    }

    /// Start a transition of `layer` towards its open or closed resting offset
    fn switch_state(&mut self, layer: LayerNumber, next_opened: bool) -> Result<()> {
        let limit = self.open_limit(layer)?;
        let target = if next_opened {
            self.chain.side().signed(limit)
        } else {
            0
        };
        let current = self.chain.panel(layer)?.offset_x();
        tracing::debug!(layer, next_opened, current, target, "Switching layer state");

        if current == target {
            // Already resting there; stop anything still pulling it away
            self.animator.cancel(layer);
            return Ok(());
        }
        self.animator
            .animate(layer, current, target, self.slide_duration_ms)?;
        Ok(())
    }

    fn apply_frames(&mut self, frames: Vec<Frame>) -> Result<()> {
        for frame in frames {
            // A frame moving the offset by `delta` is a raw drag of `-delta`
            self.scroll(frame.layer, -frame.delta)?;
        }
        Ok(())
    }

    /// Resolve the layer a gesture on `source` drives, honouring touch mode
    fn routed_layer(&self, source: LayerNumber) -> Result<Option<LayerNumber>> {
        if !self.chain.panel(source)?.is_touch_mode_enabled() {
            return Ok(None);
        }
        let active = self.chain.next_opened_descendant(source)?;
        if self.chain.is_terminus(active)? || !self.chain.panel(active)?.is_touch_mode_enabled() {
            return Ok(None);
        }
        Ok(Some(active))
    }
}

impl<H: RenderHook> LayerDelegate for Cascade<H> {
    fn should_intercept_events(&self, layer: LayerNumber) -> bool {
        match self.chain.panel(layer) {
            Ok(panel) => panel.is_touch_mode_enabled() && panel.offset_x() != 0,
            Err(_) => false,
        }
    }

    fn on_action_move(&mut self, layer: LayerNumber, delta_x: i32) -> Result<()> {
        let Some(active) = self.routed_layer(layer)? else {
            return Ok(());
        };
        // Manual input takes over from every running animation
        self.animator.cancel_all();
        self.scroll(active, delta_x)
    }

    fn on_action_up(&mut self, layer: LayerNumber, total_delta_x: f32) -> Result<()> {
        let Some(active) = self.routed_layer(layer)? else {
            return Ok(());
        };
        let next_opened = self.chain.side().opens_with(total_delta_x);
        self.switch_state(active, next_opened)
    }
}

/// Public entry point for hosts
pub struct PanelController<H> {
    config: CascadeConfig,
    router: GestureRouter,
    cascade: Cascade<H>,
}

impl<H: RenderHook> PanelController<H> {
    /// Create a controller with an empty chain
    pub fn new(config: CascadeConfig, hook: H) -> Result<Self> {
        config.validate()?;
        let chain = PanelChain::new(config.side, config.top_inset)?;
        let clamp = ScrollClamp::new(config.side, config.collapsed_width)?;
        let animator = TransitionAnimator::new(config.animation);
        let router = GestureRouter::new(config.side, config.touch_activation_width);

        tracing::debug!(
            "init side {:?} collapsed_width {} slide_duration {}ms",
            config.side,
            config.collapsed_width,
            config.slide_duration_ms
        );

        Ok(Self {
            router,
            cascade: Cascade {
                chain,
                clamp,
                animator,
                slide_duration_ms: config.slide_duration_ms,
                hook,
                was_ever_opened: false,
                verbose: config.log_level.is_verbose(),
            },
            config,
        })
    }

    /// Create a controller whose chain has the given widths, outermost first
    ///
    /// The last width is the terminus.
    pub fn with_widths(config: CascadeConfig, widths: &[i32], hook: H) -> Result<Self> {
        let chain = PanelChain::from_widths(config.side, config.top_inset, widths)?;
        let mut controller = Self::new(config, hook)?;
        controller.cascade.chain = chain;
        Ok(controller)
    }

    /// Register `panel` and link it to the `child` it reveals
    pub fn add_layer(&mut self, panel: Panel, child: Panel) -> Result<()> {
        self.cascade.chain.add_layer(panel, child)
    }

    pub fn config(&self) -> &CascadeConfig {
        &self.config
    }

    pub fn chain(&self) -> &PanelChain {
        &self.cascade.chain
    }

    pub fn layer_count(&self) -> usize {
        self.cascade.chain.layer_count()
    }

    pub fn render_hook(&self) -> &H {
        &self.cascade.hook
    }

    pub fn render_hook_mut(&mut self) -> &mut H {
        &mut self.cascade.hook
    }

    pub fn gesture_state(&self) -> GestureState {
        self.router.state()
    }

    // ========================================================================
    // State queries and requests
    // ========================================================================

    pub fn is_opened(&self, layer: LayerNumber) -> Result<bool> {
        self.cascade.chain.is_opened(layer)
    }

    /// Whether any slidable layer is away from its resting position
    pub fn is_any_opened(&self) -> bool {
        self.cascade
            .chain
            .iter()
            .any(|link| !link.is_terminus() && link.panel.offset_x() != 0)
    }

    pub fn offset(&self, layer: LayerNumber) -> Result<i32> {
        Ok(self.cascade.chain.panel(layer)?.offset_x())
    }

    /// Layer that a gesture arriving at `source` would drive
    pub fn active_layer(&self, source: LayerNumber) -> Result<LayerNumber> {
        self.cascade.chain.next_opened_descendant(source)
    }

    /// Animate `layer` fully open
    pub fn open_layer(&mut self, layer: LayerNumber) -> Result<()> {
        self.cascade.switch_state(layer, true)
    }

    /// Animate `layer` back to closed
    pub fn close_layer(&mut self, layer: LayerNumber) -> Result<()> {
        self.cascade.switch_state(layer, false)
    }

    pub fn set_touch_mode_enabled(&mut self, layer: LayerNumber, enabled: bool) -> Result<()> {
        self.cascade
            .chain
            .panel_mut(layer)?
            .set_touch_mode_enabled(enabled);
        tracing::debug!(layer, enabled, "Touch mode changed");
        Ok(())
    }

    /// Host layout update for one panel
    pub fn set_width(&mut self, layer: LayerNumber, width: i32) -> Result<()> {
        self.cascade.chain.panel_mut(layer)?.set_width(width)
    }

    // ========================================================================
    // Gesture input
    // ========================================================================

    /// Feed one pointer event received by `source`
    ///
    /// Returns whether the cascade intercepted it; bubbled events belong to
    /// the panel's own content.
    pub fn handle_gesture_event(
        &mut self,
        source: LayerNumber,
        event: &PointerEvent,
    ) -> Result<EventResult> {
        let width = self.cascade.chain.panel(source)?.width();
        if self.cascade.chain.is_terminus(source)? {
            return Ok(EventResult::Bubble);
        }
        self.router
            .handle_event(source, width, event, &mut self.cascade)
    }

    // ========================================================================
    // Host clock
    // ========================================================================

    /// Advance running transitions by `dt_ms`
    ///
    /// Returns whether any transition is still live afterwards.
    pub fn advance(&mut self, dt_ms: u32) -> Result<bool> {
        let frames = self.cascade.animator.advance(dt_ms);
        self.cascade.apply_frames(frames)?;
        Ok(self.cascade.animator.has_live_transitions())
    }

    /// Drive transitions to their end with the backend's frame interval
    pub fn run_transitions_to_completion(&mut self) -> Result<()> {
        let interval = self.cascade.animator.backend().frame_interval_ms();
        while self.advance(interval)? {}
        Ok(())
    }

    pub fn is_animating(&self, layer: LayerNumber) -> bool {
        self.cascade.animator.is_animating(layer)
    }

    /// Stop `layer`'s transition where it is
    pub fn cancel_transition(&mut self, layer: LayerNumber) -> bool {
        self.cascade.animator.cancel(layer)
    }

    // ========================================================================
    // Persisted state
    // ========================================================================

    pub fn was_ever_opened(&self) -> bool {
        self.cascade.was_ever_opened
    }

    pub fn save_state(&self) -> SavedState {
        SavedState::new(self.cascade.was_ever_opened)
    }

    /// Restore the persisted flag; offsets are left closed
    pub fn restore_state(&mut self, state: SavedState) {
        self.cascade.was_ever_opened = state.was_ever_opened;
    }
}
