pub mod ui;
pub mod window;

pub use ui::UiLayer;
pub use window::WindowLayer;
