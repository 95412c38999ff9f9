use crate::prelude::*;

pub fn update_drag_position_text(mut overlays: Query<(&DragPositionText, &mut Text)>) {
    for (overlay, mut text) in &mut overlays {
        for event in overlay.take_events() {
            match event {
                DragEvent::Drag(data) => text.value = format_position(data.position),
                DragEvent::End(_) => text.value.clear(),
                DragEvent::Begin(_) => {}
            }
        }
    }
}
