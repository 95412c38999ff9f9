use crate::prelude::*;

use bevy_ecs::hierarchy::ChildOf;
use bevy_ecs::system::SystemParam;
use std::result::Result;

/// Read-only view of the scene needed to map screen points into canvases:
/// the parent links, canvases, rect layouts, cameras and transforms.
#[derive(SystemParam)]
pub struct CanvasLookup<'w, 's> {
    parents: Query<'w, 's, &'static ChildOf>,
    canvases: Query<'w, 's, &'static Canvas>,
    rects: Query<'w, 's, &'static RectTransform>,
    cameras: Query<'w, 's, &'static Camera>,
    transforms: Query<'w, 's, &'static Transform>,
    window: Option<Res<'w, WindowSize>>,
}

impl CanvasLookup<'_, '_> {
    pub fn parent(&self, entity: Entity) -> Option<Entity> {
        self.parents.get(entity).ok().map(|child_of| child_of.parent())
    }

    /// `entity` followed by each of its ancestors up to the root
    pub fn ancestors(&self, entity: Entity) -> impl Iterator<Item = Entity> + '_ {
        std::iter::successors(Some(entity), move |&current| self.parent(current))
    }

    /// Nearest canvas on `entity` or one of its ancestors
    pub fn find_canvas(&self, entity: Entity) -> Option<Entity> {
        self.ancestors(entity)
            .find(|&candidate| self.canvases.contains(candidate))
    }

    pub fn depth(&self, entity: Entity) -> usize {
        self.ancestors(entity).count() - 1
    }

    pub fn canvas(&self, entity: Entity) -> Option<&Canvas> {
        self.canvases.get(entity).ok()
    }

    /// Known, non-empty window size
    pub fn window_size(&self) -> Option<WindowSize> {
        self.window
            .as_deref()
            .copied()
            .filter(|window| !window.is_empty())
    }

    /// World pose composed from the transforms of `entity` and its ancestors.
    /// Ancestors without a transform contribute nothing; scale is ignored.
    pub fn world_pose(&self, entity: Entity) -> Option<Isometry3<f32>> {
        let mut pose = self.transforms.get(entity).ok()?.isometry();
        for ancestor in self.ancestors(entity).skip(1) {
            if let Ok(transform) = self.transforms.get(ancestor) {
                pose = transform.isometry() * pose;
            }
        }
        Some(pose)
    }

    /// Project a screen point (bottom-left origin) onto the canvas plane and
    /// return it in canvas-local units.
    pub fn screen_to_canvas(&self, canvas: Entity, screen: Point2<f32>) -> Option<Point2<f32>> {
        let (frame, ray) = self.canvas_frame(canvas, screen)?;
        let normal = frame.isometry.rotation * Vector3::z();
        let origin = Point3::from(frame.isometry.translation.vector);
        let hit = ray_plane_intersection(&ray, origin, normal)?;

        let local = frame.inverse() * hit;
        Some(Point2::new(local.x, local.y))
    }

    /// The canvas's own rectangle in canvas units, centred on the origin
    pub fn canvas_rect(&self, canvas: Entity) -> Option<Rect> {
        let settings = self.canvases.get(canvas).ok()?;
        let size = match settings.render_mode {
            CanvasRenderMode::WorldSpace { .. } => {
                self.rects.get(canvas).copied().unwrap_or_default().size
            }
            _ => {
                let window = self.window_size()?;
                window.as_vector() / settings.scaler.scale_factor(&window)
            }
        };
        Some(Rect::from_center_size(Point2::origin(), size))
    }

    /// Rectangle of `entity` in the units of `canvas`, resolved through every
    /// `RectTransform` between them. Elements without one fill their parent.
    pub fn rect_in_canvas(&self, entity: Entity, canvas: Entity) -> Option<Rect> {
        let mut chain = Vec::new();
        for ancestor in self.ancestors(entity) {
            if ancestor == canvas {
                let mut rect = self.canvas_rect(canvas)?;
                for element in chain.iter().rev() {
                    rect = self
                        .rects
                        .get(*element)
                        .copied()
                        .unwrap_or_default()
                        .resolve(&rect);
                }
                return Some(rect);
            }
            chain.push(ancestor);
        }
        None
    }

    fn camera_view(&self, entity: Entity) -> Option<(&Camera, Isometry3<f32>)> {
        Some((self.cameras.get(entity).ok()?, self.world_pose(entity)?))
    }

    /// Canvas plane (as a similarity from canvas units to world units) and the
    /// ray to cast for `screen`
    fn canvas_frame(&self, canvas: Entity, screen: Point2<f32>) -> Option<(Similarity3<f32>, Ray)> {
        let window = self.window_size()?;
        let settings = self.canvases.get(canvas).ok()?;
        let scale = settings.scaler.scale_factor(&window);
        if !(scale.is_finite() && scale > 0.0) {
            return None;
        }

        let overlay = || {
            let center = window.as_vector() * 0.5;
            (
                Similarity3::from_parts(
                    Translation3::new(center.x, center.y, 0.0),
                    UnitQuaternion::identity(),
                    scale,
                ),
                Ray::orthographic(screen),
            )
        };

        match settings.render_mode {
            CanvasRenderMode::ScreenSpaceOverlay => Some(overlay()),
            CanvasRenderMode::ScreenSpaceCamera {
                camera,
                plane_distance,
            } => match self.camera_view(camera) {
                Some((camera, pose)) => {
                    let plane = pose * Translation3::new(0.0, 0.0, plane_distance);
                    let world_scale =
                        camera.view_height_at(plane_distance) * scale / window.height as f32;
                    let ray = camera.screen_ray(&pose, screen, &window)?;
                    Some((Similarity3::from_isometry(plane, world_scale), ray))
                }
                None => Some(overlay()),
            },
            CanvasRenderMode::WorldSpace { camera } => {
                let pose = self.world_pose(canvas)?;
                let world_scale = self.transforms.get(canvas).ok()?.scale.x;
                let ray = match camera.and_then(|camera| self.camera_view(camera)) {
                    Some((camera, camera_pose)) => camera.screen_ray(&camera_pose, screen, &window)?,
                    None => Ray::orthographic(screen),
                };
                Some((Similarity3::from_isometry(pose, world_scale), ray))
            }
        }
    }
}
