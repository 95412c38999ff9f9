use crate::prelude::*;

/// Shows the live screen position of a drag in the entity's `Text`
#[derive(Component)]
pub struct DragPositionText {
    events: DragSubscription,
}

impl DragPositionText {
    pub fn new(events: DragSubscription) -> Self {
        Self { events }
    }

    pub fn take_events(&self) -> Vec<DragEvent> {
        self.events.drain().collect()
    }
}

/// Whole-number "x, y" text for a screen position. Halves round away from zero.
pub fn format_position(position: Point2<f32>) -> String {
    format!("{:.0}, {:.0}", position.x.round(), position.y.round())
}
