use crate::prelude::*;

use std::collections::HashSet;

/// Which physical pointer produced a sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerId {
    /// Left mouse button
    Mouse,
    /// A finger, keyed by the platform touch id
    Touch(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    Pressed,
    Moved,
    Released,
    Cancelled,
}

/// One raw pointer sample in screen coordinates (bottom-left origin)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    pub id: PointerId,
    pub action: PointerAction,
    pub position: Point2<f32>,
}

/// Resource that queues pointer input between frames
#[derive(Resource, Default)]
pub struct InputState {
    /// Samples received since the last dispatch
    pending: Vec<PointerInput>,
    /// Pointers currently held down
    pressed: HashSet<PointerId>,
    /// Cursor position in window coordinates (top-left origin)
    cursor_position: Option<(f64, f64)>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pressed(&self, id: PointerId) -> bool {
        self.pressed.contains(&id)
    }

    pub fn press(&mut self, id: PointerId, position: Point2<f32>) {
        self.pressed.insert(id);
        self.push(id, PointerAction::Pressed, position);
    }

    /// Moves of a pointer that is not held down are dropped.
    pub fn move_to(&mut self, id: PointerId, position: Point2<f32>) {
        if self.is_pressed(id) {
            self.push(id, PointerAction::Moved, position);
        }
    }

    pub fn release(&mut self, id: PointerId, position: Point2<f32>) {
        if self.pressed.remove(&id) {
            self.push(id, PointerAction::Released, position);
        }
    }

    pub fn cancel(&mut self, id: PointerId, position: Point2<f32>) {
        if self.pressed.remove(&id) {
            self.push(id, PointerAction::Cancelled, position);
        }
    }

    /// Take every queued sample in arrival order
    pub fn drain(&mut self) -> std::vec::Drain<'_, PointerInput> {
        self.pending.drain(..)
    }

    pub fn set_cursor_position(&mut self, x: f64, y: f64) {
        self.cursor_position = Some((x, y));
    }

    pub fn cursor_position(&self) -> Option<(f64, f64)> {
        self.cursor_position
    }

    fn push(&mut self, id: PointerId, action: PointerAction, position: Point2<f32>) {
        self.pending.push(PointerInput {
            id,
            action,
            position,
        });
    }
}
