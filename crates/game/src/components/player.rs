use crate::prelude::*;

/// Entities the player controller drives besides its own body
#[derive(Clone, Copy, Debug)]
pub struct PlayerRig {
    /// Child of the player, pitched by look drags
    pub camera: Entity,
    /// Drag zone for movement and its touch indicator
    pub move_zone: Entity,
    pub move_indicator: Entity,
    /// Drag zone for looking around and its touch indicator
    pub look_zone: Entity,
    pub look_indicator: Entity,
}

/// Movement drag state. The anchor only exists while a drag is active.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MoveState {
    anchor: Option<Point2<f32>>,
    intent: Vector3<f32>,
}

impl MoveState {
    pub fn begin(&mut self, screen: Point2<f32>) {
        self.anchor = Some(screen);
    }

    /// Swipe from the anchor, laid flat on the ground plane
    pub fn drag(&mut self, screen: Point2<f32>) {
        if let Some(anchor) = self.anchor {
            let swipe = screen - anchor;
            self.intent = Vector3::new(swipe.x, 0.0, swipe.y);
        }
    }

    pub fn end(&mut self) {
        self.anchor = None;
        self.intent = Vector3::zeros();
    }

    #[cfg(test)]
    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    #[cfg(test)]
    pub fn intent(&self) -> Vector3<f32> {
        self.intent
    }

    /// One frame of movement: the intent direction turned by `rotation`, at
    /// `speed` units per second. `None` while there is no intent.
    pub fn displacement(
        &self,
        rotation: UnitQuaternion<f32>,
        speed: f32,
        delta_seconds: f32,
    ) -> Option<Vector3<f32>> {
        let direction = self.intent.try_normalize(0.0)?;
        Some(rotation * direction * speed * delta_seconds)
    }
}

/// Degrees to turn for one look drag step
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LookRotation {
    /// Around the world up axis, applied to the body
    pub yaw: f32,
    /// Around the camera's right axis; positive looks down
    pub pitch: f32,
}

/// Look drag state: the canvas position of the previous step
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LookState {
    previous: Option<Point2<f32>>,
}

impl LookState {
    pub fn begin(&mut self, canvas_position: Option<Point2<f32>>) {
        self.previous = canvas_position;
    }

    /// Rotation for moving from the previous canvas position to `current`.
    /// Without a previous position the step only re-anchors.
    pub fn drag(&mut self, current: Point2<f32>, angular_per_pixel: f32) -> Option<LookRotation> {
        let previous = self.previous.replace(current)?;
        let delta = current - previous;
        Some(LookRotation {
            yaw: delta.x * angular_per_pixel,
            pitch: -delta.y * angular_per_pixel,
        })
    }

    pub fn end(&mut self) {
        self.previous = None;
    }

    #[cfg(test)]
    pub fn is_dragging(&self) -> bool {
        self.previous.is_some()
    }
}

/// Two-zone touch controller: the move zone walks the body across the ground,
/// the look zone turns the body and tilts the camera.
#[derive(Component)]
pub struct PlayerController {
    pub settings: PlayerSettings,
    pub rig: PlayerRig,
    pub movement: MoveState,
    pub look: LookState,
    move_events: DragSubscription,
    look_events: DragSubscription,
}

impl PlayerController {
    pub fn new(
        settings: PlayerSettings,
        rig: PlayerRig,
        move_events: DragSubscription,
        look_events: DragSubscription,
    ) -> Self {
        Self {
            settings,
            rig,
            movement: MoveState::default(),
            look: LookState::default(),
            move_events,
            look_events,
        }
    }

    pub fn take_move_events(&self) -> Vec<DragEvent> {
        self.move_events.drain().collect()
    }

    pub fn take_look_events(&self) -> Vec<DragEvent> {
        self.look_events.drain().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_intent_is_swipe_from_anchor() {
        let mut movement = MoveState::default();
        movement.begin(Point2::new(200.0, 300.0));
        movement.drag(Point2::new(230.0, 280.0));
        assert_eq!(movement.intent(), Vector3::new(30.0, 0.0, -20.0));

        // Steering mid-drag replaces the intent, measured from the same anchor
        movement.drag(Point2::new(150.0, 300.0));
        assert_eq!(movement.intent(), Vector3::new(-50.0, 0.0, 0.0));
    }

    #[test]
    fn test_end_clears_intent_exactly() {
        let mut movement = MoveState::default();
        movement.begin(Point2::new(0.0, 0.0));
        movement.drag(Point2::new(1234.5, -987.25));
        movement.end();

        assert_eq!(movement.intent(), Vector3::zeros());
        assert!(!movement.is_dragging());
        assert!(
            movement
                .displacement(UnitQuaternion::identity(), 7.0, 1.0)
                .is_none()
        );
    }

    #[test]
    fn test_drag_without_begin_is_ignored() {
        let mut movement = MoveState::default();
        movement.drag(Point2::new(10.0, 10.0));
        assert_eq!(movement.intent(), Vector3::zeros());
    }

    #[test]
    fn test_displacement_ignores_swipe_length() {
        for end in [Point2::new(0.5, 0.0), Point2::new(0.0, 40.0), Point2::new(-3000.0, 4000.0)] {
            let mut movement = MoveState::default();
            movement.begin(Point2::origin());
            movement.drag(end);

            let step = movement
                .displacement(UnitQuaternion::identity(), 7.0, 0.25)
                .unwrap();
            assert_relative_eq!(step.norm(), 1.75, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_look_deltas() {
        let mut look = LookState::default();
        look.begin(Some(Point2::new(10.0, 10.0)));

        let rotation = look.drag(Point2::new(25.0, 4.0), 0.5).unwrap();
        assert_eq!(
            rotation,
            LookRotation {
                yaw: 7.5,
                pitch: 3.0
            }
        );

        let rotation = look.drag(Point2::new(20.0, 14.0), 0.5).unwrap();
        assert_eq!(
            rotation,
            LookRotation {
                yaw: -2.5,
                pitch: -5.0
            }
        );

        look.end();
        assert!(!look.is_dragging());
    }

    #[test]
    fn test_look_without_anchor_reanchors() {
        let mut look = LookState::default();
        look.begin(None);
        assert!(look.drag(Point2::new(5.0, 5.0), 1.0).is_none());
        assert!(look.drag(Point2::new(6.0, 5.0), 1.0).is_some());
    }
}
