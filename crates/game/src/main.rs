use touchlook_engine::{
    ApplicationBuilder, Result,
    layers::{UiLayer, WindowLayer},
};
use winit::event_loop::EventLoop;

use crate::config::PlayerSettings;
use crate::player_layer::PlayerLayer;

mod components;
mod config;
mod player_layer;
mod prelude;
mod scene;
mod systems;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_module("touchlook", log::LevelFilter::Debug)
        .init();

    let event_loop = EventLoop::new()?;

    let mut app = ApplicationBuilder::new()
        .with_target_frame_rate(config::TARGET_FRAME_RATE)
        // Pointer dispatch has to run before the player reads its drag events
        .add_layer(|context| Box::new(UiLayer::new(context)))
        .add_layer(|context| Box::new(PlayerLayer::new(context)))
        .add_layer(|context| Box::new(WindowLayer::new(context)))
        .build();

    let scene = app.setup(|world| scene::spawn_scene(world, PlayerSettings::default()))?;
    log::debug!(
        "Canvas {} with move zone {} (indicator {}) and look zone {} (indicator {})",
        scene.canvas,
        scene.move_zone,
        scene.move_indicator,
        scene.look_zone,
        scene.look_indicator
    );
    log::debug!(
        "Player {} with camera {}, drag position shown by {}",
        scene.player,
        scene.camera,
        scene.debug_text
    );

    event_loop.run_app(&mut app)?;

    Ok(())
}
