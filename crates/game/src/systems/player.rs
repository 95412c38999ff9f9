use crate::prelude::*;

/// Touch indicators: visibility and placement on the canvas
pub type Indicators<'w, 's> = Query<'w, 's, (&'static mut Image, &'static mut RectTransform)>;

/// Turn move-zone drags into the player's movement intent and keep the move
/// indicator under the finger.
pub fn handle_move_drag(
    mut players: Query<&mut PlayerController>,
    mut relays: Query<&mut DragRelay>,
    mut scene: ParamSet<(CanvasLookup, Indicators)>,
) {
    for mut player in &mut players {
        let rig = player.rig;

        for event in player.take_move_events() {
            match event {
                DragEvent::Begin(data) => {
                    player.movement.begin(data.position);
                    show_indicator(&mut scene.p1(), rig.move_indicator, true);
                    log::debug!("Move drag began at {}", data.position);
                }
                DragEvent::Drag(data) => {
                    player.movement.drag(data.position);
                    let canvas_position = relays.get_mut(rig.move_zone).ok().and_then(|mut relay| {
                        relay.canvas_position(rig.move_zone, data.position, &scene.p0())
                    });
                    if let Some(position) = canvas_position {
                        place_indicator(&mut scene.p1(), rig.move_indicator, position);
                    }
                }
                DragEvent::End(_) => {
                    player.movement.end();
                    show_indicator(&mut scene.p1(), rig.move_indicator, false);
                    log::debug!("Move drag ended");
                }
            }
        }
    }
}

/// Turn look-zone drags into body yaw and camera pitch, measured in canvas
/// units so the feel does not depend on the screen resolution.
pub fn handle_look_drag(
    mut players: Query<(Entity, &mut PlayerController)>,
    mut relays: Query<&mut DragRelay>,
    mut scene: ParamSet<(CanvasLookup, Indicators, Query<&mut Transform>)>,
) {
    for (body, mut player) in &mut players {
        let rig = player.rig;
        let angular_per_pixel = player.settings.angular_per_pixel;

        for event in player.take_look_events() {
            match event {
                DragEvent::Begin(data) => {
                    let canvas_position = relays.get_mut(rig.look_zone).ok().and_then(|mut relay| {
                        relay.canvas_position(rig.look_zone, data.position, &scene.p0())
                    });
                    player.look.begin(canvas_position);
                    show_indicator(&mut scene.p1(), rig.look_indicator, true);
                    log::debug!("Look drag began at {:?}", canvas_position);
                }
                DragEvent::Drag(data) => {
                    let Some(current) = relays.get_mut(rig.look_zone).ok().and_then(|mut relay| {
                        relay.canvas_position(rig.look_zone, data.position, &scene.p0())
                    }) else {
                        continue;
                    };

                    if let Some(rotation) = player.look.drag(current, angular_per_pixel) {
                        apply_look(&mut scene.p2(), body, rig.camera, rotation);
                    }
                    place_indicator(&mut scene.p1(), rig.look_indicator, current);
                }
                DragEvent::End(_) => {
                    player.look.end();
                    show_indicator(&mut scene.p1(), rig.look_indicator, false);
                    log::debug!("Look drag ended");
                }
            }
        }
    }
}

/// Walk every player along its current intent. Runs every frame, so changing
/// the swipe direction mid-drag steers continuously.
pub fn update_player_movement(
    time: Res<Time>,
    mut players: Query<(&PlayerController, &mut Transform, Option<&Tag>)>,
) {
    let dt = time.0.as_secs_f32();

    for (player, mut transform, tag) in &mut players {
        let Some(step) =
            player
                .movement
                .displacement(transform.rotation, player.settings.move_per_second, dt)
        else {
            continue;
        };

        transform.position += step;
        log::trace!(
            "{} moved to {}",
            tag.map_or("player", |tag| tag.label.as_str()),
            transform.position
        );
    }
}

fn apply_look(
    transforms: &mut Query<&mut Transform>,
    body: Entity,
    camera: Entity,
    rotation: LookRotation,
) {
    if let Ok(mut transform) = transforms.get_mut(body) {
        transform.rotate_around(&Vector3::y_axis(), rotation.yaw.to_radians());
    }
    match transforms.get_mut(camera) {
        Ok(mut transform) => {
            transform.rotate_local(&Vector3::x_axis(), rotation.pitch.to_radians())
        }
        Err(_) => log::debug!("Camera {} has no transform, pitch skipped", camera),
    }
}

fn show_indicator(indicators: &mut Indicators, entity: Entity, enabled: bool) {
    match indicators.get_mut(entity) {
        Ok((mut image, _)) => image.enabled = enabled,
        Err(_) => log::debug!("Indicator {} missing", entity),
    }
}

fn place_indicator(indicators: &mut Indicators, entity: Entity, position: Point2<f32>) {
    if let Ok((_, mut rect)) = indicators.get_mut(entity) {
        rect.position = position.coords;
    }
}
