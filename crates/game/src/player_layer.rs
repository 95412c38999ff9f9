use crate::prelude::*;

use touchlook_engine::{Layer, LayerContext};

/// Player systems in the order one frame needs them: drag events first so
/// movement uses this frame's intent and rotation.
pub fn build_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            handle_move_drag,
            handle_look_drag,
            update_player_movement,
            update_drag_position_text,
        )
            .chain(),
    );
    schedule
}

pub struct PlayerLayer {
    schedule: Schedule,
}

impl PlayerLayer {
    pub fn new(_context: &LayerContext) -> Self {
        Self {
            schedule: build_schedule(),
        }
    }
}

impl Layer for PlayerLayer {
    fn frame(&mut self, context: &LayerContext) -> Result<()> {
        let mut world = context.lock_world()?;
        world.insert_resource(Time(context.delta_time));

        self.schedule.run(&mut world);

        Ok(())
    }

    fn detach(&mut self, _context: &LayerContext) {}
}
