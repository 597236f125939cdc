// Re-export glam for convenience
pub use glam::*;

// Prism math types
mod interval;
mod ray;
pub use interval::Interval;
pub use ray::Ray;

/// Reflect `v` about the plane with unit normal `n`.
///
/// Returns `v - 2 (v·n) n`. The result has the same length as `v`.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - n * 2.0 * v.dot(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(a.dot(b), 32.0);
    }

    #[test]
    fn test_normalize_zero_convention() {
        // Zero-length vectors normalize to zero instead of NaN
        assert_eq!(Vec3::ZERO.normalize_or_zero(), Vec3::ZERO);
        assert_eq!(Vec3::new(0.0, 3.0, 4.0).length(), 5.0);
    }

    #[test]
    fn test_reflect_flips_normal_component() {
        let d = Vec3::new(1.0, -1.0, 0.5).normalize();
        let n = Vec3::new(0.0, 1.0, 0.0);
        let r = reflect(d, n);

        assert!((r.dot(n) + d.dot(n)).abs() < 1e-6);
        assert!((r.length() - d.length()).abs() < 1e-6);

        // Coplanar with d and n
        assert!(r.dot(d.cross(n)).abs() < 1e-6);
    }

    #[test]
    fn test_reflect_head_on() {
        let r = reflect(Vec3::new(0.0, 0.0, -1.0), Vec3::Z);
        assert_eq!(r, Vec3::Z);
    }
}
