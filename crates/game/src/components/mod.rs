mod debug_drag_position;
mod player;

pub use debug_drag_position::*;
pub use player::*;
