use crate::prelude::*;

/// Represents a ray in 3D space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point3<f32>,
    pub direction: Vector3<f32>, // Always normalized
}

impl Ray {
    /// Create a new ray with a normalized direction
    pub fn new(origin: Point3<f32>, direction: Vector3<f32>) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Ray used when a canvas has no camera: straight down +Z through the
    /// screen point, starting 100 units behind the z = 0 plane
    pub fn orthographic(screen: Point2<f32>) -> Self {
        Self::new(Point3::new(screen.x, screen.y, -100.0), Vector3::z())
    }

    /// Get a point along the ray at distance t
    pub fn point_at(&self, t: f32) -> Point3<f32> {
        self.origin + self.direction * t
    }
}

/// Intersect a ray with the plane through `plane_point` with normal
/// `plane_normal`. Returns `None` for parallel planes and planes behind the ray.
pub fn ray_plane_intersection(
    ray: &Ray,
    plane_point: Point3<f32>,
    plane_normal: Vector3<f32>,
) -> Option<Point3<f32>> {
    let denominator = ray.direction.dot(&plane_normal);
    if denominator.abs() < 1e-6 {
        return None;
    }

    let t = (plane_point - ray.origin).dot(&plane_normal) / denominator;
    if t < 0.0 {
        return None;
    }

    Some(ray.point_at(t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ray_plane_hit() {
        let ray = Ray::new(Point3::new(1.0, 2.0, -5.0), Vector3::new(0.0, 0.0, 2.0));
        let hit = ray_plane_intersection(&ray, Point3::origin(), Vector3::z());
        assert_relative_eq!(hit.unwrap(), Point3::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn test_ray_plane_parallel() {
        let ray = Ray::new(Point3::new(0.0, 0.0, -5.0), Vector3::x());
        assert!(ray_plane_intersection(&ray, Point3::origin(), Vector3::z()).is_none());
    }

    #[test]
    fn test_ray_plane_behind() {
        let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), Vector3::z());
        assert!(ray_plane_intersection(&ray, Point3::origin(), Vector3::z()).is_none());
    }
}
