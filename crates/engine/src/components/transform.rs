use crate::prelude::*;

/// Local transform relative to the parent entity (or the world for roots).
///
/// Axes are left-handed: +X right, +Y up, +Z forward.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Point3<f32>,
    pub rotation: UnitQuaternion<f32>,
    pub scale: Vector3<f32>,
}

impl Transform {
    pub fn from_position(position: Point3<f32>) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Rigid part of the transform; scale is dropped
    pub fn isometry(&self) -> Isometry3<f32> {
        Isometry3::from_parts(Translation3::from(self.position.coords), self.rotation)
    }

    pub fn forward(&self) -> Vector3<f32> {
        self.rotation * Vector3::z()
    }

    pub fn right(&self) -> Vector3<f32> {
        self.rotation * Vector3::x()
    }

    /// Rotate around a world-space axis through the transform's origin
    pub fn rotate_around(&mut self, axis: &Unit<Vector3<f32>>, angle: f32) {
        self.rotation = UnitQuaternion::from_axis_angle(axis, angle) * self.rotation;
    }

    /// Rotate around one of the transform's own axes
    pub fn rotate_local(&mut self, axis: &Unit<Vector3<f32>>, angle: f32) {
        self.rotation = self.rotation * UnitQuaternion::from_axis_angle(axis, angle);
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Point3::origin(),
            rotation: UnitQuaternion::identity(),
            scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_positive_yaw_turns_forward_to_the_right() {
        let mut transform = Transform::default();
        transform.rotate_around(&Vector3::y_axis(), 90f32.to_radians());
        assert_relative_eq!(transform.forward(), Vector3::x(), epsilon = 1e-6);
    }

    #[test]
    fn test_positive_local_pitch_looks_down() {
        let mut transform = Transform::default();
        transform.rotate_local(&Vector3::x_axis(), 30f32.to_radians());
        assert!(transform.forward().y < 0.0);
    }
}
