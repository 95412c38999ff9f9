mod camera;
mod canvas;
mod drag;
mod label;
mod resources;
mod transform;
mod ui;

pub use camera::*;
pub use canvas::*;
pub use drag::*;
pub use label::*;
pub use resources::*;
pub use transform::*;
pub use ui::*;
