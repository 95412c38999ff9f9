pub use bevy_ecs::world::World;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use winit::event_loop::ControlFlow;
use winit::{application::ApplicationHandler, event::WindowEvent, window::Window};

use crate::input::{InputState, PointerAction, PointerId};
pub type Result<T> = anyhow::Result<T>;

pub mod canvas_lookup;
pub mod components;
pub mod input;
pub mod layers;
pub mod prelude;
pub mod utils;

pub trait Layer: 'static {
    fn frame(&mut self, context: &LayerContext) -> Result<()>;
    fn detach(&mut self, context: &LayerContext);
    fn event(&mut self, _context: &LayerContext, _event: LayerEvent) {}
}

pub trait LayerFactory: 'static {
    fn create(&self, context: &LayerContext) -> Box<dyn Layer>;
}

pub struct LayerContext {
    pub window: Arc<Window>,
    pub world: Arc<Mutex<World>>,
    pub delta_time: Duration,
}

impl LayerContext {
    /// Lock the shared world, turning a poisoned lock into an error.
    pub fn lock_world(&self) -> Result<std::sync::MutexGuard<'_, World>> {
        self.world
            .lock()
            .map_err(|_| anyhow::anyhow!("world lock poisoned"))
    }
}

pub enum LayerEvent {
    WindowEvent(Arc<WindowEvent>),
}

pub struct ApplicationBuilder {
    layer_factories: Vec<Box<dyn LayerFactory>>,
    target_frame_rate: Option<u32>,
}

impl ApplicationBuilder {
    pub fn new() -> Self {
        Self {
            layer_factories: Vec::new(),
            target_frame_rate: None,
        }
    }

    pub fn add_layer_factory(mut self, factory: impl LayerFactory) -> Self {
        self.layer_factories.push(Box::new(factory));
        self
    }

    pub fn add_layer<F>(mut self, factory_fn: F) -> Self
    where
        F: Fn(&LayerContext) -> Box<dyn Layer> + 'static,
    {
        self.layer_factories
            .push(Box::new(ClosureLayerFactory::new(factory_fn)));
        self
    }

    /// Cap redraws to the given rate. Zero means uncapped.
    pub fn with_target_frame_rate(mut self, frames_per_second: u32) -> Self {
        self.target_frame_rate = (frames_per_second > 0).then_some(frames_per_second);
        self
    }

    pub fn build(self) -> Application {
        let mut world = World::new();
        world.insert_resource(InputState::new());

        Application {
            layer_factories: self.layer_factories,
            frame_interval: self
                .target_frame_rate
                .map(|fps| Duration::from_secs_f64(1.0 / fps as f64)),
            state: None,
            world: Arc::new(Mutex::new(world)),
        }
    }
}

impl Default for ApplicationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

struct ClosureLayerFactory<F> {
    factory_fn: F,
}

impl<F> ClosureLayerFactory<F> {
    fn new(factory_fn: F) -> Self {
        Self { factory_fn }
    }
}

impl<F> LayerFactory for ClosureLayerFactory<F>
where
    F: Fn(&LayerContext) -> Box<dyn Layer> + 'static,
{
    fn create(&self, context: &LayerContext) -> Box<dyn Layer> {
        (self.factory_fn)(context)
    }
}

pub struct Application {
    layer_factories: Vec<Box<dyn LayerFactory>>,
    frame_interval: Option<Duration>,
    state: Option<ApplicationState>,
    world: Arc<Mutex<World>>,
}

pub struct ApplicationState {
    window: Arc<Window>,
    layers: Vec<Box<dyn Layer>>,
    last_frame_time: Instant,
}

impl Application {
    fn redraw(&mut self) -> Result<()> {
        let state = match &mut self.state {
            Some(state) => state,
            None => return Ok(()),
        };

        let now = Instant::now();
        let delta_time = now.duration_since(state.last_frame_time);
        state.last_frame_time = now;

        let context = LayerContext {
            window: state.window.clone(),
            world: self.world.clone(),
            delta_time,
        };

        for layer in &mut state.layers {
            layer.frame(&context)?;
        }

        context.lock_world()?.clear_trackers();

        Ok(())
    }

    /// Run scene setup against the world before the event loop starts.
    pub fn setup<T>(&mut self, setup: impl FnOnce(&mut World) -> Result<T>) -> Result<T> {
        let mut world = self
            .world
            .lock()
            .map_err(|_| anyhow::anyhow!("world lock poisoned"))?;
        setup(&mut world)
    }

    /// Push a pointer sample into the input queue. Positions arrive in window
    /// coordinates (top-left origin) and are stored bottom-left up.
    fn record_pointer(&self, id: PointerId, position: (f64, f64), action: PointerAction) {
        let Some(state) = &self.state else {
            return;
        };
        let height = state.window.inner_size().height as f32;
        let position = nalgebra::Point2::new(position.0 as f32, height - position.1 as f32);

        let Ok(mut world) = self.world.lock() else {
            log::error!("world lock poisoned, dropping pointer input");
            return;
        };
        if let Some(mut input_state) = world.get_resource_mut::<InputState>() {
            match action {
                PointerAction::Pressed => input_state.press(id, position),
                PointerAction::Moved => input_state.move_to(id, position),
                PointerAction::Released => input_state.release(id, position),
                PointerAction::Cancelled => input_state.cancel(id, position),
            }
        }
    }
}

impl ApplicationHandler for Application {
    fn resumed(&mut self, event_loop: &winit::event_loop::ActiveEventLoop) {
        let window_attributes = Window::default_attributes().with_title("touchlook");
        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Unable to create window: {}", e);
                event_loop.exit();
                return;
            }
        };
        log::info!("Window created ({:?})", window.inner_size());

        let context = LayerContext {
            window: window.clone(),
            world: self.world.clone(),
            delta_time: Duration::ZERO,
        };

        let layers: Vec<Box<dyn Layer>> = self
            .layer_factories
            .iter()
            .map(|factory| factory.create(&context))
            .collect();

        self.state = Some(ApplicationState {
            window,
            layers,
            last_frame_time: Instant::now(),
        });
    }

    fn suspended(&mut self, _event_loop: &winit::event_loop::ActiveEventLoop) {
        if let Some(state) = &mut self.state {
            let context = LayerContext {
                window: state.window.clone(),
                world: self.world.clone(),
                delta_time: Duration::ZERO,
            };

            for layer in &mut state.layers {
                layer.detach(&context);
            }
        }
        log::info!("Suspended");
        self.state = None;
    }

    fn window_event(
        &mut self,
        event_loop: &winit::event_loop::ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: winit::event::WindowEvent,
    ) {
        // Handle input events
        {
            use winit::event::{ElementState, MouseButton, TouchPhase};

            match &event {
                WindowEvent::Touch(touch) => {
                    let action = match touch.phase {
                        TouchPhase::Started => PointerAction::Pressed,
                        TouchPhase::Moved => PointerAction::Moved,
                        TouchPhase::Ended => PointerAction::Released,
                        TouchPhase::Cancelled => PointerAction::Cancelled,
                    };
                    self.record_pointer(
                        PointerId::Touch(touch.id),
                        (touch.location.x, touch.location.y),
                        action,
                    );
                }
                WindowEvent::MouseInput {
                    state,
                    button: MouseButton::Left,
                    ..
                } => {
                    let cursor = self
                        .world
                        .lock()
                        .ok()
                        .and_then(|world| world.get_resource::<InputState>()?.cursor_position());
                    if let Some(cursor) = cursor {
                        let action = match state {
                            ElementState::Pressed => PointerAction::Pressed,
                            ElementState::Released => PointerAction::Released,
                        };
                        self.record_pointer(PointerId::Mouse, cursor, action);
                    }
                }
                WindowEvent::CursorMoved { position, .. } => {
                    if let Ok(mut world) = self.world.lock() {
                        if let Some(mut input_state) = world.get_resource_mut::<InputState>() {
                            input_state.set_cursor_position(position.x, position.y);
                        }
                    }
                    self.record_pointer(PointerId::Mouse, (position.x, position.y), PointerAction::Moved);
                }
                _ => {}
            }
        }

        let event = Arc::new(event);

        match *event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.redraw() {
                    log::error!("Frame failed: {}", e);
                }
            }
            _ => {}
        }

        if let Some(state) = &mut self.state {
            let context = LayerContext {
                window: state.window.clone(),
                world: self.world.clone(),
                delta_time: Duration::ZERO,
            };

            for layer in &mut state.layers {
                layer.event(&context, LayerEvent::WindowEvent(event.clone()));
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &winit::event_loop::ActiveEventLoop) {
        let Some(state) = &self.state else {
            return;
        };

        match self.frame_interval {
            Some(interval) => {
                let next_frame = state.last_frame_time + interval;
                if Instant::now() >= next_frame {
                    state.window.request_redraw();
                    event_loop.set_control_flow(ControlFlow::Wait);
                } else {
                    event_loop.set_control_flow(ControlFlow::WaitUntil(next_frame));
                }
            }
            None => state.window.request_redraw(),
        }
    }
}
