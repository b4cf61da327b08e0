//! Pointer tracker for dragging flowers around the canvas.
//!
//! Mouse and touch input are folded into one [`PointerInput`] stream, so the
//! canvas view has a single drag path regardless of the input device.

use crate::placement::{PlacementId, Position};

/// Input device that produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

/// Canvas bounding box in client (viewport) pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CanvasRect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Converts a client position to percent of the canvas size.
    ///
    /// Returns `None` for a collapsed rect, which would otherwise divide by zero.
    pub fn to_percent(self, client_x: f64, client_y: f64) -> Option<Position> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return None;
        }
        let position = Position::new(
            (client_x - self.left) * 100.0 / self.width,
            (client_y - self.top) * 100.0 / self.height,
        );
        position.is_finite().then_some(position)
    }
}

/// Pointer event as seen by the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    /// Mouse-down or touch-start on a placed flower.
    Down { id: PlacementId, kind: PointerKind },
    /// Mouse-move or touch-move over the canvas.
    Move {
        kind: PointerKind,
        client_x: f64,
        client_y: f64,
        rect: CanvasRect,
    },
    /// Mouse-up or touch-end.
    Up,
    /// Mouse left the canvas.
    Leave,
    /// Touch-cancel.
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(PlacementId),
}

/// A request to move a flower, produced while dragging.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragMove {
    pub id: PlacementId,
    pub position: Position,
}

/// What the view should do after feeding an input to the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerResponse {
    pub drag: Option<DragMove>,
    /// Whether the browser default (page scroll) must be suppressed.
    pub prevent_default: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerTracker {
    state: DragState,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn dragging(&self) -> Option<PlacementId> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging(id) => Some(id),
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging().is_some()
    }

    pub fn is_dragging_item(&self, id: PlacementId) -> bool {
        self.dragging() == Some(id)
    }

    /// Starts dragging `id`, replacing any drag already in progress.
    pub fn press(&mut self, id: PlacementId) {
        if let Some(previous) = self.dragging() {
            if previous != id {
                tracing::debug!(%previous, %id, "Replacing active drag");
            }
        }
        self.state = DragState::Dragging(id);
    }

    /// Ends the current drag, if any.
    pub fn release(&mut self) {
        if let Some(id) = self.dragging() {
            tracing::debug!(%id, "Drag ended");
        }
        self.state = DragState::Idle;
    }

    /// Maps a pointer position to a move request for the dragged flower.
    pub fn track(&self, rect: CanvasRect, client_x: f64, client_y: f64) -> Option<DragMove> {
        let id = self.dragging()?;
        let position = rect.to_percent(client_x, client_y)?;
        Some(DragMove { id, position })
    }

    /// Feeds one input through the state machine.
    pub fn handle(&mut self, input: PointerInput) -> PointerResponse {
        match input {
            PointerInput::Down { id, kind } => {
                tracing::debug!(%id, ?kind, "Drag started");
                self.press(id);
                PointerResponse::default()
            }
            PointerInput::Move {
                kind,
                client_x,
                client_y,
                rect,
            } => PointerResponse {
                drag: self.track(rect, client_x, client_y),
                prevent_default: kind == PointerKind::Touch && self.is_dragging(),
            },
            PointerInput::Up | PointerInput::Leave | PointerInput::Cancel => {
                self.release();
                PointerResponse::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::catalog::Catalog;
    use crate::config::PoseRanges;
    use crate::placement::Bouquet;

    const RECT: CanvasRect = CanvasRect::new(100.0, 50.0, 800.0, 400.0);

    fn mouse_move(client_x: f64, client_y: f64) -> PointerInput {
        PointerInput::Move {
            kind: PointerKind::Mouse,
            client_x,
            client_y,
            rect: RECT,
        }
    }

    fn two_flowers() -> Bouquet {
        let catalog = Catalog::default_garden();
        let pose = PoseRanges::default();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        Bouquet::new()
            .add(&catalog, "rose", &pose, &mut rng)
            .add(&catalog, "tulip", &pose, &mut rng)
    }

    #[test]
    fn test_to_percent() {
        let position = RECT.to_percent(500.0, 150.0).unwrap();
        assert_eq!(position, Position::new(50.0, 25.0));

        let outside = RECT.to_percent(0.0, 500.0).unwrap();
        assert_eq!(outside, Position::new(-12.5, 112.5));
    }

    #[test]
    fn test_collapsed_rect_yields_nothing() {
        let rect = CanvasRect::new(0.0, 0.0, 0.0, 300.0);
        assert_eq!(rect.to_percent(10.0, 10.0), None);
    }

    #[test]
    fn test_idle_moves_do_nothing() {
        let mut tracker = PointerTracker::new();
        let response = tracker.handle(mouse_move(500.0, 150.0));
        assert_eq!(response, PointerResponse::default());
        assert_eq!(tracker.state(), DragState::Idle);
    }

    #[test]
    fn test_drag_produces_moves() {
        let bouquet = two_flowers();
        let id = bouquet.items()[0].id;
        let mut tracker = PointerTracker::new();

        tracker.handle(PointerInput::Down {
            id,
            kind: PointerKind::Mouse,
        });
        assert_eq!(tracker.state(), DragState::Dragging(id));

        let response = tracker.handle(mouse_move(200.0, 398.0));
        let drag = response.drag.unwrap();
        assert_eq!(drag.id, id);
        assert_eq!(drag.position, Position::new(12.5, 87.0));
        assert!(!response.prevent_default);

        let moved = bouquet.move_to(drag.id, drag.position.x, drag.position.y);
        assert_eq!(moved.get(id).unwrap().position, Position::new(12.5, 87.0));
    }

    #[test]
    fn test_leave_ends_drag() {
        let bouquet = two_flowers();
        let id = bouquet.items()[0].id;
        let mut tracker = PointerTracker::new();

        tracker.handle(PointerInput::Down {
            id,
            kind: PointerKind::Mouse,
        });
        tracker.handle(PointerInput::Leave);
        assert_eq!(tracker.state(), DragState::Idle);

        assert_eq!(tracker.handle(mouse_move(300.0, 300.0)).drag, None);

        tracker.handle(PointerInput::Down {
            id,
            kind: PointerKind::Mouse,
        });
        assert!(tracker.handle(mouse_move(300.0, 300.0)).drag.is_some());
    }

    #[test]
    fn test_every_terminal_event_ends_drag() {
        let id = two_flowers().items()[1].id;
        for terminal in [PointerInput::Up, PointerInput::Leave, PointerInput::Cancel] {
            let mut tracker = PointerTracker::new();
            tracker.press(id);
            tracker.handle(terminal);
            assert!(!tracker.is_dragging(), "{terminal:?} should end the drag");
        }
    }

    #[test]
    fn test_touch_suppresses_scroll_only_while_dragging() {
        let id = two_flowers().items()[0].id;
        let touch_move = PointerInput::Move {
            kind: PointerKind::Touch,
            client_x: 150.0,
            client_y: 100.0,
            rect: RECT,
        };
        let mut tracker = PointerTracker::new();

        assert!(!tracker.handle(touch_move).prevent_default);

        tracker.handle(PointerInput::Down {
            id,
            kind: PointerKind::Touch,
        });
        let response = tracker.handle(touch_move);
        assert!(response.prevent_default);
        assert_eq!(response.drag.unwrap().position, Position::new(6.25, 12.5));

        tracker.handle(PointerInput::Up);
        assert!(!tracker.handle(touch_move).prevent_default);
    }

    #[test]
    fn test_second_press_replaces_tracked_item() {
        let bouquet = two_flowers();
        let first = bouquet.items()[0].id;
        let second = bouquet.items()[1].id;
        let mut tracker = PointerTracker::new();

        tracker.press(first);
        tracker.press(second);

        assert!(tracker.is_dragging_item(second));
        assert_eq!(tracker.handle(mouse_move(500.0, 250.0)).drag.unwrap().id, second);
    }
}
