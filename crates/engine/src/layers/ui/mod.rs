pub mod systems;
mod ui_layer;

pub use ui_layer::UiLayer;
