pub use bevy_ecs::hierarchy::ChildOf;
pub use touchlook_engine::prelude::*;

pub use crate::components::*;
pub use crate::config::PlayerSettings;
pub use crate::systems::*;
