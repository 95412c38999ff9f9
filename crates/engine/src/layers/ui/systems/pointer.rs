use crate::prelude::*;

use std::collections::HashMap;

struct TrackedPointer {
    press_position: Point2<f32>,
    last_position: Point2<f32>,
    /// Drag zone under the press position
    target: Option<Entity>,
    dragging: bool,
}

impl TrackedPointer {
    fn event_data(&mut self, sample: &PointerInput) -> PointerEventData {
        let delta = sample.position - self.last_position;
        self.last_position = sample.position;
        PointerEventData {
            pointer_id: sample.id,
            position: sample.position,
            delta,
            press_position: self.press_position,
        }
    }
}

/// Pointers currently held down and the drag zone each one is bound to
#[derive(Resource, Default)]
pub struct PointerTracker {
    pointers: HashMap<PointerId, TrackedPointer>,
}

impl PointerTracker {
    pub fn target(&self, id: PointerId) -> Option<Entity> {
        self.pointers.get(&id).and_then(|pointer| pointer.target)
    }

    pub fn is_dragging(&self, id: PointerId) -> bool {
        self.pointers.get(&id).is_some_and(|pointer| pointer.dragging)
    }
}

/// Route queued pointer input to drag zones as begin/drag/end events.
///
/// A press binds the pointer to the zone under it; the zone keeps receiving
/// that pointer's events until release, wherever the pointer goes.
pub fn dispatch_pointer_events(
    mut input: ResMut<InputState>,
    mut tracker: ResMut<PointerTracker>,
    settings: Res<PointerSettings>,
    lookup: CanvasLookup,
    zones: Query<Entity, With<DragRelay>>,
    mut relays: Query<&mut DragRelay>,
) {
    let samples: Vec<PointerInput> = input.drain().collect();

    for sample in samples {
        match sample.action {
            PointerAction::Pressed => {
                let target = hit_test(&lookup, &zones, sample.position);
                log::debug!("{:?} pressed at {} on {:?}", sample.id, sample.position, target);
                tracker.pointers.insert(
                    sample.id,
                    TrackedPointer {
                        press_position: sample.position,
                        last_position: sample.position,
                        target,
                        dragging: false,
                    },
                );
            }
            PointerAction::Moved => {
                let Some(pointer) = tracker.pointers.get_mut(&sample.id) else {
                    continue;
                };
                if sample.position == pointer.last_position {
                    continue;
                }
                let data = pointer.event_data(&sample);
                let Some(mut relay) = pointer.target.and_then(|target| relays.get_mut(target).ok())
                else {
                    continue;
                };

                if !pointer.dragging {
                    let travelled = (sample.position - pointer.press_position).norm();
                    if travelled < settings.drag_threshold {
                        continue;
                    }
                    pointer.dragging = true;
                    log::debug!("{:?} began dragging {:?}", sample.id, pointer.target);
                    relay.begin_drag(data);
                }
                relay.drag(data);
            }
            PointerAction::Released | PointerAction::Cancelled => {
                let Some(mut pointer) = tracker.pointers.remove(&sample.id) else {
                    continue;
                };
                if !pointer.dragging {
                    continue;
                }
                let data = pointer.event_data(&sample);
                if let Some(mut relay) = pointer.target.and_then(|target| relays.get_mut(target).ok()) {
                    log::debug!("{:?} ended dragging {:?}", sample.id, pointer.target);
                    relay.end_drag(data);
                }
            }
        }
    }
}

/// Topmost drag zone containing `screen`: highest canvas sort order, then the
/// deepest element, then the most recently spawned.
fn hit_test(
    lookup: &CanvasLookup<'_, '_>,
    zones: &Query<'_, '_, Entity, With<DragRelay>>,
    screen: Point2<f32>,
) -> Option<Entity> {
    zones
        .iter()
        .filter_map(|zone| {
            let canvas = lookup.find_canvas(zone)?;
            let local = lookup.screen_to_canvas(canvas, screen)?;
            let rect = lookup.rect_in_canvas(zone, canvas)?;
            let sort_order = lookup.canvas(canvas).map_or(0, |canvas| canvas.sort_order);
            rect.contains(local)
                .then_some((sort_order, lookup.depth(zone), zone))
        })
        .max()
        .map(|(_, _, zone)| zone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::hierarchy::ChildOf;

    struct Zones {
        left: Entity,
        right: Entity,
    }

    fn setup() -> (World, Zones) {
        let mut world = World::new();
        world.insert_resource(WindowSize {
            width: 1000,
            height: 1000,
        });
        world.insert_resource(InputState::new());
        world.init_resource::<PointerTracker>();
        world.init_resource::<PointerSettings>();

        let canvas = world.spawn(Canvas::default()).id();
        let left = world
            .spawn((
                DragRelay::new(),
                RectTransform::anchored(Vector2::new(0.0, 0.0), Vector2::new(0.5, 1.0)),
                ChildOf(canvas),
            ))
            .id();
        let right = world
            .spawn((
                DragRelay::new(),
                RectTransform::anchored(Vector2::new(0.5, 0.0), Vector2::new(1.0, 1.0)),
                ChildOf(canvas),
            ))
            .id();

        (world, Zones { left, right })
    }

    fn subscribe(world: &mut World, zone: Entity) -> DragSubscription {
        world.get_mut::<DragRelay>(zone).unwrap().subscribe()
    }

    fn run(world: &mut World) {
        let mut schedule = Schedule::default();
        schedule.add_systems(dispatch_pointer_events);
        schedule.run(world);
    }

    #[test]
    fn test_drag_begins_after_threshold() {
        let (mut world, zones) = setup();
        let left = subscribe(&mut world, zones.left);
        let finger = PointerId::Touch(1);

        {
            let mut input = world.resource_mut::<InputState>();
            input.press(finger, Point2::new(100.0, 500.0));
            input.move_to(finger, Point2::new(105.0, 500.0));
        }
        run(&mut world);
        assert_eq!(left.drain().count(), 0);
        assert_eq!(world.resource::<PointerTracker>().target(finger), Some(zones.left));
        assert!(!world.resource::<PointerTracker>().is_dragging(finger));

        world
            .resource_mut::<InputState>()
            .move_to(finger, Point2::new(100.0, 600.0));
        run(&mut world);

        let events: Vec<_> = left.drain().collect();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], DragEvent::Begin(_)));
        assert!(matches!(events[1], DragEvent::Drag(_)));
        let data = events[1].data();
        assert_eq!(data.position, Point2::new(100.0, 600.0));
        assert_eq!(data.delta, Vector2::new(-5.0, 100.0));
        assert_eq!(data.press_position, Point2::new(100.0, 500.0));

        world
            .resource_mut::<InputState>()
            .release(finger, Point2::new(100.0, 600.0));
        run(&mut world);

        let events: Vec<_> = left.drain().collect();
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], DragEvent::End(_)));
        assert_eq!(events[0].data().delta, Vector2::zeros());
        assert_eq!(world.resource::<PointerTracker>().target(finger), None);
    }

    #[test]
    fn test_tap_without_drag_sends_nothing() {
        let (mut world, zones) = setup();
        let left = subscribe(&mut world, zones.left);
        let finger = PointerId::Touch(7);

        {
            let mut input = world.resource_mut::<InputState>();
            input.press(finger, Point2::new(200.0, 200.0));
            input.move_to(finger, Point2::new(203.0, 204.0));
            input.release(finger, Point2::new(203.0, 204.0));
        }
        run(&mut world);
        assert_eq!(left.drain().count(), 0);
    }

    #[test]
    fn test_two_fingers_drive_both_zones() {
        let (mut world, zones) = setup();
        let left = subscribe(&mut world, zones.left);
        let right = subscribe(&mut world, zones.right);

        {
            let mut input = world.resource_mut::<InputState>();
            input.press(PointerId::Touch(1), Point2::new(200.0, 300.0));
            input.press(PointerId::Touch(2), Point2::new(800.0, 300.0));
            input.move_to(PointerId::Touch(1), Point2::new(200.0, 400.0));
            input.move_to(PointerId::Touch(2), Point2::new(850.0, 300.0));
        }
        run(&mut world);

        let left_events: Vec<_> = left.drain().collect();
        let right_events: Vec<_> = right.drain().collect();
        assert_eq!(left_events.len(), 2);
        assert_eq!(right_events.len(), 2);
        assert_eq!(left_events[1].data().pointer_id, PointerId::Touch(1));
        assert_eq!(right_events[1].data().position, Point2::new(850.0, 300.0));
    }

    #[test]
    fn test_drag_stays_with_pressed_zone() {
        let (mut world, zones) = setup();
        let left = subscribe(&mut world, zones.left);
        let right = subscribe(&mut world, zones.right);

        {
            let mut input = world.resource_mut::<InputState>();
            input.press(PointerId::Mouse, Point2::new(400.0, 500.0));
            input.move_to(PointerId::Mouse, Point2::new(900.0, 500.0));
            input.cancel(PointerId::Mouse, Point2::new(900.0, 500.0));
        }
        run(&mut world);

        let events: Vec<_> = left.drain().collect();
        assert_eq!(events.len(), 3);
        assert!(matches!(events[2], DragEvent::End(_)));
        assert_eq!(right.drain().count(), 0);
    }

    #[test]
    fn test_press_outside_every_zone() {
        let (mut world, zones) = setup();
        world.despawn(zones.right);
        let left = subscribe(&mut world, zones.left);

        {
            let mut input = world.resource_mut::<InputState>();
            input.press(PointerId::Touch(4), Point2::new(900.0, 500.0));
            input.move_to(PointerId::Touch(4), Point2::new(100.0, 500.0));
        }
        run(&mut world);

        assert_eq!(world.resource::<PointerTracker>().target(PointerId::Touch(4)), None);
        assert_eq!(left.drain().count(), 0);
    }
}
