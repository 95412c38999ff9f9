use crate::prelude::*;

use std::time::Duration;

/// Elapsed time since the previous frame
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct Time(pub Duration);

#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl WindowSize {
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn as_vector(&self) -> Vector2<f32> {
        Vector2::new(self.width as f32, self.height as f32)
    }
}

/// Tunables for turning raw pointer input into drags
#[derive(Resource, Clone, Copy, Debug)]
pub struct PointerSettings {
    /// Distance in pixels a pressed pointer must travel before a drag begins
    pub drag_threshold: f32,
}

impl Default for PointerSettings {
    fn default() -> Self {
        Self {
            drag_threshold: 10.0,
        }
    }
}
