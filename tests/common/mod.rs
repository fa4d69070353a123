//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use carddeck::config::CascadeConfig;
use carddeck::controller::{PanelController, RecordingHook};
use carddeck::gesture::{EventResult, PointerEvent};
use carddeck::panel::{LayerNumber, Side};
use carddeck::transition::AnimationBackend;

/// Config with a deterministic stepped backend
pub fn test_config(side: Side) -> CascadeConfig {
    CascadeConfig {
        side,
        collapsed_width: 40,
        touch_activation_width: 48,
        animation: AnimationBackend::Stepped { tick_ms: 30 },
        ..Default::default()
    }
}

/// Controller over `widths` (last width is the terminus)
pub fn test_controller(side: Side, widths: &[i32]) -> PanelController<RecordingHook> {
    PanelController::with_widths(test_config(side), widths, RecordingHook::default())
        .expect("valid test chain")
}

/// Two slidable panels plus a terminus, all 300 wide
pub fn two_layer_chain(side: Side) -> PanelController<RecordingHook> {
    test_controller(side, &[300, 300, 300])
}

/// Panel-local x just inside the activation zone of a 300-wide panel
pub fn zone_x(side: Side) -> f32 {
    match side {
        Side::Start => 10.0,
        Side::End => 290.0,
    }
}

/// Horizontal drag on `source`: down at `start`, one move per raw delta,
/// then up at the accumulated position
///
/// Local x tracks raw x so the stream stays horizontal.
pub fn drag(
    controller: &mut PanelController<RecordingHook>,
    source: LayerNumber,
    start: f32,
    deltas: &[f32],
) -> Vec<EventResult> {
    let mut results = Vec::new();
    let mut x = start;
    results.push(
        controller
            .handle_gesture_event(source, &PointerEvent::down(x, x, 100.0))
            .unwrap(),
    );
    for delta in deltas {
        x += delta;
        results.push(
            controller
                .handle_gesture_event(source, &PointerEvent::moved(x, x, 100.0))
                .unwrap(),
        );
    }
    results.push(
        controller
            .handle_gesture_event(source, &PointerEvent::up(x, x, 100.0))
            .unwrap(),
    );
    results
}

/// Open `layer` and let the animation finish
pub fn open_settled(controller: &mut PanelController<RecordingHook>, layer: LayerNumber) {
    controller.open_layer(layer).unwrap();
    controller.run_transitions_to_completion().unwrap();
}

pub fn offsets(controller: &PanelController<RecordingHook>) -> Vec<i32> {
    controller
        .chain()
        .iter()
        .map(|link| link.panel.offset_x())
        .collect()
}

/// Small deterministic generator for stress sequences
pub struct XorShift(u64);

impl XorShift {
    pub fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    /// Uniform-ish integer in `lo..=hi`
    pub fn range(&mut self, lo: i32, hi: i32) -> i32 {
        let span = (hi - lo + 1) as u64;
        lo + (self.next_u64() % span) as i32
    }
}
