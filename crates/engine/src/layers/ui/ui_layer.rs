use crate::layers::ui::systems::{PointerTracker, dispatch_pointer_events};
use crate::prelude::*;
use crate::{Layer, LayerContext};

/// Turns queued pointer input into drag events on the UI's drag zones.
/// Add it before any layer whose systems consume drag subscriptions.
pub struct UiLayer {
    schedule: Schedule,
}

impl UiLayer {
    pub fn new(context: &LayerContext) -> Self {
        match context.lock_world() {
            Ok(mut world) => {
                world.init_resource::<PointerSettings>();
                world.init_resource::<PointerTracker>();
            }
            Err(e) => log::error!("Unable to initialize UI resources: {}", e),
        }

        let mut schedule = Schedule::default();
        schedule.add_systems(dispatch_pointer_events);
        Self { schedule }
    }
}

impl Layer for UiLayer {
    fn frame(&mut self, context: &LayerContext) -> Result<()> {
        let mut world = context.lock_world()?;
        self.schedule.run(&mut world);
        Ok(())
    }

    fn detach(&mut self, context: &LayerContext) {
        // Pointers held across a suspend never see their release
        if let Ok(mut world) = context.lock_world() {
            world.insert_resource(PointerTracker::default());
            world.insert_resource(InputState::new());
        }
    }
}
