use crate::Vec3;

/// A ray in 3D space with an origin and a unit direction.
///
/// Rays are transient: one is built for every primary, reflection,
/// refraction and shadow cast.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray, normalizing `direction`.
    ///
    /// A zero direction stays zero.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Build a secondary ray leaving a surface point.
    ///
    /// The origin is pushed `bias` along the surface normal, toward the side
    /// the new ray travels into, so the ray does not re-hit the surface it
    /// starts on.
    pub fn offset(point: Vec3, normal: Vec3, direction: Vec3, bias: f32) -> Self {
        let direction = direction.normalize_or_zero();
        let origin = if direction.dot(normal) < 0.0 {
            point - normal * bias
        } else {
            point + normal * bias
        };
        Self { origin, direction }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_creation_normalizes() {
        let ray = Ray::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.0, 0.0, -4.0));

        assert_eq!(ray.origin, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(ray.direction, Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_ray_zero_direction() {
        let ray = Ray::new(Vec3::ONE, Vec3::ZERO);
        assert_eq!(ray.direction, Vec3::ZERO);
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        assert_eq!(ray.at(0.0), Vec3::ZERO);
        assert_eq!(ray.at(1.0), Vec3::X);
        assert_eq!(ray.at(2.0), Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(ray.at(-1.0), Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_offset_follows_direction() {
        let point = Vec3::new(0.0, 0.0, 1.0);
        let normal = Vec3::Z;

        // Leaving the surface: pushed outward
        let out = Ray::offset(point, normal, Vec3::new(0.0, 1.0, 1.0), 1e-3);
        assert!(out.origin.z > point.z);
        assert!((out.direction.length() - 1.0).abs() < 1e-6);

        // Entering the surface: pushed inward
        let inward = Ray::offset(point, normal, Vec3::new(0.0, 0.0, -1.0), 1e-3);
        assert!(inward.origin.z < point.z);
    }

    #[test]
    fn test_offset_zero_direction_goes_outward() {
        let ray = Ray::offset(Vec3::ZERO, Vec3::Y, Vec3::ZERO, 0.5);
        assert_eq!(ray.origin, Vec3::new(0.0, 0.5, 0.0));
        assert_eq!(ray.direction, Vec3::ZERO);
    }

    #[test]
    fn test_ray_copy() {
        let ray1 = Ray::new(Vec3::ZERO, Vec3::Y);
        let ray2 = ray1; // Copy, not move

        assert_eq!(ray1.origin, ray2.origin);
        assert_eq!(ray1.at(1.0), ray2.at(1.0));
    }
}
