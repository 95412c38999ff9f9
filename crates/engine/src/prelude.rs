pub use bevy_ecs::prelude::*;
pub use nalgebra::{
    Isometry3, Point2, Point3, Similarity3, Translation3, Unit, UnitQuaternion, Vector2, Vector3,
};

pub use crate::Result;
pub use crate::canvas_lookup::*;
pub use crate::components::*;
pub use crate::input::*;
pub use crate::utils::*;
