use crate::config::{camera, canvas};
use crate::prelude::*;

/// Entities spawned by `spawn_scene`
#[derive(Clone, Copy, Debug)]
pub struct SceneHandles {
    pub canvas: Entity,
    pub player: Entity,
    pub camera: Entity,
    pub move_zone: Entity,
    pub look_zone: Entity,
    pub move_indicator: Entity,
    pub look_indicator: Entity,
    pub debug_text: Entity,
}

/// Spawn the touch controls scene: an overlay canvas split into a move zone
/// (left half) and a look zone (right half), one indicator per zone, the
/// player with its camera, and a text readout of the move drag position.
pub fn spawn_scene(world: &mut World, settings: PlayerSettings) -> Result<SceneHandles> {
    let ui = world
        .spawn((
            Tag::new("Canvas"),
            Canvas::overlay(CanvasScaler::ScaleWithScreenSize {
                reference_resolution: Vector2::new(canvas::REFERENCE_WIDTH, canvas::REFERENCE_HEIGHT),
                match_width_or_height: canvas::MATCH_WIDTH_OR_HEIGHT,
            }),
        ))
        .id();

    let move_zone = world
        .spawn((
            Tag::new("Move Zone"),
            DragRelay::new(),
            RectTransform::anchored(Vector2::new(0.0, 0.0), Vector2::new(0.5, 1.0)),
            ChildOf(ui),
        ))
        .id();
    let look_zone = world
        .spawn((
            Tag::new("Look Zone"),
            DragRelay::new(),
            RectTransform::anchored(Vector2::new(0.5, 0.0), Vector2::new(1.0, 1.0)),
            ChildOf(ui),
        ))
        .id();

    let indicator_size = Vector2::repeat(canvas::INDICATOR_SIZE);
    let move_indicator = world
        .spawn((
            Tag::new("Move Indicator"),
            Image::default(),
            RectTransform::centered(indicator_size),
            ChildOf(ui),
        ))
        .id();
    let look_indicator = world
        .spawn((
            Tag::new("Look Indicator"),
            Image::default(),
            RectTransform::centered(indicator_size),
            ChildOf(ui),
        ))
        .id();

    let player = world
        .spawn((Tag::new("Player"), Transform::default()))
        .id();
    let player_camera = world
        .spawn((
            Tag::new("Camera"),
            Camera::perspective(camera::FIELD_OF_VIEW.to_radians()),
            Transform::from_position(Point3::new(0.0, camera::EYE_HEIGHT, 0.0)),
            ChildOf(player),
        ))
        .id();

    let move_events = subscribe_to(world, move_zone)?;
    let look_events = subscribe_to(world, look_zone)?;
    let rig = PlayerRig {
        camera: player_camera,
        move_zone,
        move_indicator,
        look_zone,
        look_indicator,
    };
    world
        .entity_mut(player)
        .insert(PlayerController::new(settings, rig, move_events, look_events));

    let debug_events = subscribe_to(world, move_zone)?;
    let debug_text = world
        .spawn((
            Tag::new("Drag Position"),
            Text::default(),
            TitleText,
            DragPositionText::new(debug_events),
            ChildOf(ui),
        ))
        .id();

    log::info!("Scene ready");

    Ok(SceneHandles {
        canvas: ui,
        player,
        camera: player_camera,
        move_zone,
        look_zone,
        move_indicator,
        look_indicator,
        debug_text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::system::SystemState;

    #[test]
    fn test_scene_wiring() {
        let mut world = World::new();
        let handles = spawn_scene(&mut world, PlayerSettings::default()).unwrap();

        let relay_subscribers = |zone| world.get::<DragRelay>(zone).unwrap().subscriber_count();
        assert_eq!(relay_subscribers(handles.move_zone), 2);
        assert_eq!(relay_subscribers(handles.look_zone), 1);

        assert!(!world.get::<Image>(handles.move_indicator).unwrap().enabled);
        assert!(!world.get::<Image>(handles.look_indicator).unwrap().enabled);
        assert_eq!(
            world.get::<ChildOf>(handles.camera).map(|child_of| child_of.parent()),
            Some(handles.player)
        );
    }

    #[test]
    fn test_zones_split_the_screen() {
        let mut world = World::new();
        world.insert_resource(WindowSize {
            width: 1280,
            height: 720,
        });
        let handles = spawn_scene(&mut world, PlayerSettings::default()).unwrap();

        let mut state: SystemState<CanvasLookup> = SystemState::new(&mut world);
        let lookup = state.get(&world);
        let hits = |zone, screen| {
            let local = lookup.screen_to_canvas(handles.canvas, screen).unwrap();
            lookup
                .rect_in_canvas(zone, handles.canvas)
                .unwrap()
                .contains(local)
        };

        assert!(hits(handles.move_zone, Point2::new(100.0, 600.0)));
        assert!(!hits(handles.look_zone, Point2::new(100.0, 600.0)));
        assert!(hits(handles.look_zone, Point2::new(1200.0, 50.0)));
        assert!(!hits(handles.move_zone, Point2::new(1200.0, 50.0)));
    }
}
