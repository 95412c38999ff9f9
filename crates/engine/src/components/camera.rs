use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Projection {
    /// Vertical field of view in radians
    Perspective { fovy: f32 },
    /// Half of the visible height in world units
    Orthographic { half_height: f32 },
}

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub is_main: bool,
    pub projection: Projection,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn perspective(fovy: f32) -> Self {
        Self {
            is_main: true,
            projection: Projection::Perspective { fovy },
            znear: 0.01,
            zfar: 1000.0,
        }
    }

    /// Height of the view frustum at `distance` along the view axis
    pub fn view_height_at(&self, distance: f32) -> f32 {
        match self.projection {
            Projection::Perspective { fovy } => 2.0 * distance * (fovy * 0.5).tan(),
            Projection::Orthographic { half_height } => 2.0 * half_height,
        }
    }

    /// World-space ray through a screen point (bottom-left origin, pixels).
    /// `pose` is the camera's world isometry.
    pub fn screen_ray(
        &self,
        pose: &Isometry3<f32>,
        screen: Point2<f32>,
        window: &WindowSize,
    ) -> Option<Ray> {
        if window.is_empty() {
            return None;
        }

        let (width, height) = (window.width as f32, window.height as f32);
        let aspect = width / height;
        let ndc_x = 2.0 * screen.x / width - 1.0;
        let ndc_y = 2.0 * screen.y / height - 1.0;

        let (origin, direction) = match self.projection {
            Projection::Perspective { fovy } => {
                let half = (fovy * 0.5).tan();
                (
                    Point3::origin(),
                    Vector3::new(ndc_x * half * aspect, ndc_y * half, 1.0),
                )
            }
            Projection::Orthographic { half_height } => (
                Point3::new(ndc_x * half_height * aspect, ndc_y * half_height, 0.0),
                Vector3::z(),
            ),
        };

        Some(Ray::new(pose * origin, pose * direction))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::perspective(60f32.to_radians())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_center_ray_follows_camera_forward() {
        let camera = Camera::default();
        let pose = Isometry3::from_parts(
            Translation3::new(0.0, 2.0, 0.0),
            UnitQuaternion::from_axis_angle(&Vector3::y_axis(), 90f32.to_radians()),
        );
        let window = WindowSize {
            width: 800,
            height: 600,
        };

        let ray = camera
            .screen_ray(&pose, Point2::new(400.0, 300.0), &window)
            .unwrap();
        assert_relative_eq!(ray.origin, Point3::new(0.0, 2.0, 0.0), epsilon = 1e-6);
        assert_relative_eq!(ray.direction, Vector3::x(), epsilon = 1e-6);
    }

    #[test]
    fn test_screen_ray_on_empty_window() {
        let window = WindowSize {
            width: 0,
            height: 600,
        };
        assert!(
            Camera::default()
                .screen_ray(&Isometry3::identity(), Point2::origin(), &window)
                .is_none()
        );
    }
}
