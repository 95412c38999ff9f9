mod window_layer;

pub use window_layer::WindowLayer;
