//! Scene types for Prism.
//!
//! A scene is an ordered list of spheres and an ordered list of point
//! lights. Everything here is plain immutable data, built once before a
//! render and shared read-only by every pixel.

use prism_math::Vec3;
use thiserror::Error;

use crate::material::Material;

/// Errors that can occur while building or loading a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f32),

    #[error("Light intensity must be non-negative and finite, got {0}")]
    InvalidIntensity(f32),

    #[error("Specular exponent must be non-negative and finite, got {0}")]
    InvalidExponent(f32),

    #[error("Refractive index must be positive and finite, got {0}")]
    InvalidRefractiveIndex(f32),

    #[error("Albedo needs 2 or 4 weights, got {0}")]
    InvalidAlbedo(usize),

    #[error("Unknown material: {0}")]
    UnknownMaterial(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// A sphere primitive with its material.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere. The radius must be positive and finite.
    pub fn new(center: Vec3, radius: f32, material: Material) -> SceneResult<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SceneError::InvalidRadius(radius));
        }
        Ok(Self {
            center,
            radius,
            material,
        })
    }

    /// Outward unit normal at a point on the surface.
    #[inline]
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalize_or_zero()
    }
}

/// A point light. Intensity is used as-is, with no distance falloff.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub intensity: f32,
}

impl Light {
    /// Create a new light. The intensity must be non-negative and finite.
    pub fn new(position: Vec3, intensity: f32) -> SceneResult<Self> {
        if !(intensity.is_finite() && intensity >= 0.0) {
            return Err(SceneError::InvalidIntensity(intensity));
        }
        Ok(Self {
            position,
            intensity,
        })
    }
}

/// An ordered collection of spheres and lights.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub spheres: Vec<Sphere>,
    pub lights: Vec<Light>,
}

impl Scene {
    /// Create a scene from already validated parts.
    pub fn new(spheres: Vec<Sphere>, lights: Vec<Light>) -> Self {
        Self { spheres, lights }
    }

    /// Get the number of spheres.
    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }

    /// Get the number of lights.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Check if the scene has no geometry.
    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }

    /// Copy of this scene with every light's intensity replaced.
    pub fn with_light_intensity(&self, intensity: f32) -> SceneResult<Self> {
        let lights = self
            .lights
            .iter()
            .map(|l| Light::new(l.position, intensity))
            .collect::<SceneResult<Vec<_>>>()?;
        Ok(Self {
            spheres: self.spheres.clone(),
            lights,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_rejects_bad_radius() {
        let mat = Material::default();
        assert!(matches!(
            Sphere::new(Vec3::ZERO, 0.0, mat),
            Err(SceneError::InvalidRadius(_))
        ));
        assert!(Sphere::new(Vec3::ZERO, -1.0, mat).is_err());
        assert!(Sphere::new(Vec3::ZERO, f32::NAN, mat).is_err());
        assert!(Sphere::new(Vec3::ZERO, f32::INFINITY, mat).is_err());
        assert!(Sphere::new(Vec3::ZERO, 0.5, mat).is_ok());
    }

    #[test]
    fn test_light_rejects_negative_intensity() {
        assert!(matches!(
            Light::new(Vec3::ZERO, -0.1),
            Err(SceneError::InvalidIntensity(_))
        ));
        assert!(Light::new(Vec3::ZERO, 0.0).is_ok());
        assert!(Light::new(Vec3::ZERO, f32::NAN).is_err());
    }

    #[test]
    fn test_sphere_normal_is_unit() {
        let sphere = Sphere::new(Vec3::new(1.0, 2.0, 3.0), 2.0, Material::default()).unwrap();
        let n = sphere.normal_at(Vec3::new(1.0, 4.0, 3.0));
        assert_eq!(n, Vec3::Y);
        assert!((n.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_with_light_intensity_keeps_order() {
        let scene = Scene::new(
            vec![Sphere::new(Vec3::ZERO, 1.0, Material::default()).unwrap()],
            vec![
                Light::new(Vec3::X, 1.5).unwrap(),
                Light::new(Vec3::Y, 1.8).unwrap(),
            ],
        );
        let dark = scene.with_light_intensity(0.0).unwrap();

        assert_eq!(dark.light_count(), 2);
        assert_eq!(dark.lights[0].position, Vec3::X);
        assert_eq!(dark.lights[1].position, Vec3::Y);
        assert!(dark.lights.iter().all(|l| l.intensity == 0.0));
        assert_eq!(dark.spheres, scene.spheres);
    }
}
