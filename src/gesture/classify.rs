//! Horizontal drag classification
//!
//! Decides whether a pointer stream is a deliberate horizontal drag. A
//! stream qualifies once a move sample is more horizontal than vertical
//! and the stream started inside the activation zone next to the opening
//! edge. The decision then sticks until the pointer goes up or is
//! cancelled.

use crate::panel::Side;

use super::event::{PointerAction, PointerEvent};

#[derive(Debug, Clone)]
pub struct DragClassifier {
    side: Side,
    activation_width: i32,
    /// Local position of the down event
    origin: Option<(f32, f32)>,
    /// Local position of the previous sample
    last: Option<(f32, f32)>,
    horizontal: bool,
}

impl DragClassifier {
    pub fn new(side: Side, activation_width: i32) -> Self {
        Self {
            side,
            activation_width,
            origin: None,
            last: None,
            horizontal: false,
        }
    }

    #[inline]
    pub fn is_horizontal(&self) -> bool {
        self.horizontal
    }

    /// Feed one event; returns the (possibly just locked) classification
    ///
    /// `panel_width` is the width of the panel that received the stream,
    /// needed to measure the zone from the trailing edge.
    pub fn observe(&mut self, event: &PointerEvent, panel_width: i32) -> bool {
        match event.action {
            PointerAction::Down => {
                self.reset();
                self.origin = Some((event.x, event.y));
                self.last = Some((event.x, event.y));
            }
            PointerAction::Move => {
                let (Some((origin_x, _)), Some((last_x, last_y))) = (self.origin, self.last)
                else {
                    return false;
                };
                self.last = Some((event.x, event.y));
                if !self.horizontal {
                    let dx = (event.x - last_x).abs();
                    let dy = (event.y - last_y).abs();
                    let in_zone =
                        self.side
                            .in_activation_zone(origin_x, panel_width, self.activation_width);
                    if in_zone && dx > dy {
                        tracing::trace!(origin_x, dx, dy, "Classified stream as horizontal drag");
                        self.horizontal = true;
                    }
                }
            }
            PointerAction::Up | PointerAction::Cancel => {
                let was_horizontal = self.horizontal;
                self.reset();
                return was_horizontal;
            }
        }
        self.horizontal
    }

    pub fn reset(&mut self) {
        self.origin = None;
        self.last = None;
        self.horizontal = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_inside_zone_locks() {
        let mut classifier = DragClassifier::new(Side::Start, 48);
        assert!(!classifier.observe(&PointerEvent::down(10.0, 10.0, 100.0), 300));
        assert!(classifier.observe(&PointerEvent::moved(30.0, 30.0, 102.0), 300));
        // Vertical sample afterwards does not unlock
        assert!(classifier.observe(&PointerEvent::moved(31.0, 31.0, 180.0), 300));
    }

    #[test]
    fn test_outside_zone_never_horizontal() {
        let mut classifier = DragClassifier::new(Side::Start, 48);
        classifier.observe(&PointerEvent::down(100.0, 100.0, 100.0), 300);
        assert!(!classifier.observe(&PointerEvent::moved(160.0, 160.0, 100.0), 300));
    }

    #[test]
    fn test_vertical_inside_zone_not_horizontal() {
        let mut classifier = DragClassifier::new(Side::End, 48);
        classifier.observe(&PointerEvent::down(590.0, 290.0, 100.0), 300);
        assert!(!classifier.observe(&PointerEvent::moved(588.0, 288.0, 130.0), 300));
    }

    #[test]
    fn test_end_zone_measured_from_trailing_edge() {
        let mut classifier = DragClassifier::new(Side::End, 48);
        classifier.observe(&PointerEvent::down(590.0, 290.0, 100.0), 300);
        assert!(classifier.observe(&PointerEvent::moved(580.0, 280.0, 100.0), 300));
    }

    #[test]
    fn test_release_resets() {
        let mut classifier = DragClassifier::new(Side::Start, 48);
        classifier.observe(&PointerEvent::down(10.0, 10.0, 0.0), 300);
        classifier.observe(&PointerEvent::moved(40.0, 40.0, 0.0), 300);
        assert!(classifier.observe(&PointerEvent::up(40.0, 40.0, 0.0), 300));
        assert!(!classifier.is_horizontal());
    }

    #[test]
    fn test_move_without_down_ignored() {
        let mut classifier = DragClassifier::new(Side::Start, 48);
        assert!(!classifier.observe(&PointerEvent::moved(40.0, 40.0, 0.0), 300));
    }
}
