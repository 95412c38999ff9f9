use crate::prelude::*;
use crate::{Layer, LayerContext, LayerEvent};

use winit::event::WindowEvent;

/// Tracks the window size and shows the `TitleText` entity in the title bar
pub struct WindowLayer {
    base_title: String,
    shown_text: Option<String>,
}

impl WindowLayer {
    pub fn new(context: &LayerContext) -> Self {
        let size = context.window.inner_size();
        match context.lock_world() {
            Ok(mut world) => world.insert_resource(WindowSize {
                width: size.width,
                height: size.height,
            }),
            Err(e) => log::error!("Unable to record window size: {}", e),
        }

        Self {
            base_title: context.window.title(),
            shown_text: None,
        }
    }

    fn title_for(&self, text: &str) -> String {
        if text.is_empty() {
            self.base_title.clone()
        } else {
            format!("{} | {}", self.base_title, text)
        }
    }
}

impl Layer for WindowLayer {
    fn frame(&mut self, context: &LayerContext) -> Result<()> {
        let text = {
            let mut world = context.lock_world()?;
            let mut query = world.query_filtered::<&Text, With<TitleText>>();
            query
                .iter(&world)
                .next()
                .map(|text| text.value.clone())
                .unwrap_or_default()
        };

        if self.shown_text.as_deref() != Some(text.as_str()) {
            context.window.set_title(&self.title_for(&text));
            self.shown_text = Some(text);
        }

        Ok(())
    }

    fn detach(&mut self, _context: &LayerContext) {
        self.shown_text = None;
    }

    fn event(&mut self, context: &LayerContext, event: LayerEvent) {
        let LayerEvent::WindowEvent(event) = event;
        if let WindowEvent::Resized(size) = *event {
            log::debug!("Window resized to {}x{}", size.width, size.height);
            if let Ok(mut world) = context.lock_world() {
                world.insert_resource(WindowSize {
                    width: size.width,
                    height: size.height,
                });
            }
        }
    }
}
