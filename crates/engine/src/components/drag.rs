use crate::prelude::*;

use crossbeam_channel::{Receiver, Sender};

/// Pointer state handed to drag subscribers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEventData {
    pub pointer_id: PointerId,
    /// Current screen position (bottom-left origin, pixels)
    pub position: Point2<f32>,
    /// Screen movement since the previous event for this pointer
    pub delta: Vector2<f32>,
    /// Screen position where the pointer went down
    pub press_position: Point2<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    Begin(PointerEventData),
    Drag(PointerEventData),
    End(PointerEventData),
}

impl DragEvent {
    pub fn data(&self) -> &PointerEventData {
        match self {
            DragEvent::Begin(data) | DragEvent::Drag(data) | DragEvent::End(data) => data,
        }
    }
}

/// Receiving end of a `DragRelay` subscription
pub struct DragSubscription(Receiver<DragEvent>);

impl DragSubscription {
    /// Events published since the last call, in order
    pub fn drain(&self) -> impl Iterator<Item = DragEvent> + '_ {
        self.0.try_iter()
    }
}

/// Republishes the drag events a UI zone receives to any number of subscribers,
/// and maps screen points into the zone's canvas.
#[derive(Component, Default)]
pub struct DragRelay {
    subscribers: Vec<Sender<DragEvent>>,
    belonged_canvas: Option<Entity>,
}

impl DragRelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self) -> DragSubscription {
        let (sender, receiver) = crossbeam_channel::unbounded();
        self.subscribers.push(sender);
        DragSubscription(receiver)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn begin_drag(&mut self, data: PointerEventData) {
        self.publish(DragEvent::Begin(data));
    }

    pub fn drag(&mut self, data: PointerEventData) {
        self.publish(DragEvent::Drag(data));
    }

    pub fn end_drag(&mut self, data: PointerEventData) {
        self.publish(DragEvent::End(data));
    }

    /// The canvas found by the last successful `canvas_position` lookup
    pub fn belonged_canvas(&self) -> Option<Entity> {
        self.belonged_canvas
    }

    /// Convert a screen point into the local space of the canvas this relay
    /// (the component on `entity`) belongs to.
    ///
    /// The canvas is resolved once and cached; reparenting afterwards is not
    /// picked up.
    pub fn canvas_position(
        &mut self,
        entity: Entity,
        screen: Point2<f32>,
        lookup: &CanvasLookup<'_, '_>,
    ) -> Option<Point2<f32>> {
        if self.belonged_canvas.is_none() {
            self.belonged_canvas = lookup.find_canvas(entity);
        }
        lookup.screen_to_canvas(self.belonged_canvas?, screen)
    }

    fn publish(&mut self, event: DragEvent) {
        self.subscribers
            .retain(|subscriber| subscriber.send(event).is_ok());
    }
}

/// Subscribe to the `DragRelay` on `relay`
pub fn subscribe_to(world: &mut World, relay: Entity) -> Result<DragSubscription> {
    let mut component = world
        .get_mut::<DragRelay>(relay)
        .ok_or_else(|| anyhow::anyhow!("entity {} has no DragRelay", relay))?;
    Ok(component.subscribe())
}
