//! Gesture scripts
//!
//! A script is a YAML document describing a chain and a sequence of host
//! inputs: pointer events, open/close requests, clock ticks and layout
//! changes. Replaying one drives a real [`PanelController`] and records
//! every render hook call, which makes interaction bugs reproducible
//! without a UI.
//!
//! ```yaml
//! widths: [300, 300, 300]
//! steps:
//!   - down: { layer: 2, raw_x: 290, y: 10 }
//!   - move: { layer: 2, raw_x: 280, y: 10 }
//!   - up: { layer: 2, raw_x: 250, y: 10 }
//!   - settle
//! ```

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::config::CascadeConfig;
use crate::controller::{PanelController, RecordingHook};
use crate::gesture::{EventResult, PointerAction, PointerEvent};
use crate::panel::LayerNumber;
use crate::persistence::SavedState;

/// Pointer sample delivered to one layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerStep {
    pub layer: LayerNumber,
    pub raw_x: f32,
    /// Panel-local x; defaults to `raw_x`
    #[serde(default)]
    pub x: Option<f32>,
    #[serde(default)]
    pub y: f32,
}

impl PointerStep {
    fn event(&self, action: PointerAction) -> PointerEvent {
        PointerEvent::new(action, self.raw_x, self.x.unwrap_or(self.raw_x), self.y)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Down(PointerStep),
    Move(PointerStep),
    Up(PointerStep),
    Cancel { layer: LayerNumber },
    Open(LayerNumber),
    Close(LayerNumber),
    /// Advance the host clock by this many milliseconds
    Advance(u32),
    /// Run every live transition to its end
    Settle,
    TouchMode { layer: LayerNumber, enabled: bool },
    Resize { layer: LayerNumber, width: i32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GestureScript {
    /// Overrides the user config when present
    #[serde(default)]
    pub config: Option<CascadeConfig>,
    /// Panel widths, outermost first; the last one is the terminus
    pub widths: Vec<i32>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// What one step did
#[derive(Debug, Clone, PartialEq)]
pub struct StepReport {
    pub step: Step,
    /// Routing result for pointer steps
    pub result: Option<EventResult>,
    /// Render hook calls made while handling the step
    pub offsets: Vec<(LayerNumber, i32)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Replay {
    pub reports: Vec<StepReport>,
    /// Resting offset of every slidable layer after the last step
    pub final_offsets: Vec<(LayerNumber, i32)>,
    pub state: SavedState,
}

impl GestureScript {
    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(content).context("Failed to parse gesture script")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script at {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("In {}", path.display()))
    }

    /// The script's own config, or `fallback` when it has none
    pub fn effective_config(&self, fallback: &CascadeConfig) -> CascadeConfig {
        self.config.clone().unwrap_or_else(|| fallback.clone())
    }

    /// Replay every step against a fresh controller
    pub fn run(&self, config: CascadeConfig, state: SavedState) -> anyhow::Result<Replay> {
        let mut controller =
            PanelController::with_widths(config, &self.widths, RecordingHook::default())
                .context("Invalid chain")?;
        controller.restore_state(state);

        let mut reports = Vec::with_capacity(self.steps.len());
        for (i, step) in self.steps.iter().enumerate() {
            let result = apply_step(&mut controller, step)
                .with_context(|| format!("Step {} ({:?}) failed", i + 1, step))?;
            let offsets = std::mem::take(&mut controller.render_hook_mut().calls);
            reports.push(StepReport {
                step: step.clone(),
                result,
                offsets,
            });
        }

        let final_offsets = controller
            .chain()
            .iter()
            .filter(|link| !link.is_terminus())
            .map(|link| (link.panel.layer(), link.panel.offset_x()))
            .collect();

        tracing::info!(steps = reports.len(), "Replay finished");
        Ok(Replay {
            reports,
            final_offsets,
            state: controller.save_state(),
        })
    }
}

fn apply_step(
    controller: &mut PanelController<RecordingHook>,
    step: &Step,
) -> crate::Result<Option<EventResult>> {
    fn pointer(
        controller: &mut PanelController<RecordingHook>,
        layer: LayerNumber,
        event: PointerEvent,
    ) -> crate::Result<Option<EventResult>> {
        controller.handle_gesture_event(layer, &event).map(Some)
    }

    match step {
        Step::Down(p) => pointer(controller, p.layer, p.event(PointerAction::Down)),
        Step::Move(p) => pointer(controller, p.layer, p.event(PointerAction::Move)),
        Step::Up(p) => pointer(controller, p.layer, p.event(PointerAction::Up)),
        Step::Cancel { layer } => pointer(controller, *layer, PointerEvent::cancel()),
        Step::Open(layer) => controller.open_layer(*layer).map(|_| None),
        Step::Close(layer) => controller.close_layer(*layer).map(|_| None),
        Step::Advance(ms) => controller.advance(*ms).map(|_| None),
        Step::Settle => controller.run_transitions_to_completion().map(|_| None),
        Step::TouchMode { layer, enabled } => controller
            .set_touch_mode_enabled(*layer, *enabled)
            .map(|_| None),
        Step::Resize { layer, width } => controller.set_width(*layer, *width).map(|_| None),
    }
}
