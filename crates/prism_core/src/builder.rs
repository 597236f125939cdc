//! Scene construction from literal values.

use prism_math::Vec3;

use crate::material::Material;
use crate::scene::{Light, Scene, SceneResult, Sphere};

/// Builder that collects spheres and lights in insertion order.
///
/// Validation is deferred to [`SceneBuilder::build`], so calls can be
/// chained without handling errors at every step.
#[derive(Debug, Default)]
pub struct SceneBuilder {
    spheres: Vec<(Vec3, f32, Material)>,
    lights: Vec<(Vec3, f32)>,
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sphere.
    pub fn sphere(mut self, center: Vec3, radius: f32, material: Material) -> Self {
        self.spheres.push((center, radius, material));
        self
    }

    /// Add a point light.
    pub fn light(mut self, position: Vec3, intensity: f32) -> Self {
        self.lights.push((position, intensity));
        self
    }

    /// Validate everything and produce the scene.
    pub fn build(self) -> SceneResult<Scene> {
        let spheres = self
            .spheres
            .into_iter()
            .map(|(center, radius, material)| Sphere::new(center, radius, material))
            .collect::<SceneResult<Vec<_>>>()?;
        let lights = self
            .lights
            .into_iter()
            .map(|(position, intensity)| Light::new(position, intensity))
            .collect::<SceneResult<Vec<_>>>()?;

        if lights.is_empty() {
            log::warn!("Scene has no lights; only reflection and refraction terms will show");
        }

        let scene = Scene::new(spheres, lights);
        if scene.is_empty() {
            log::warn!("Scene has no spheres; every pixel will be background");
        }
        Ok(scene)
    }
}

/// The four-sphere, three-light scene rendered by the `prism` binary.
pub fn reference_scene() -> SceneResult<Scene> {
    SceneBuilder::new()
        .sphere(Vec3::new(-3.0, 0.0, -16.0), 2.0, Material::ivory())
        .sphere(Vec3::new(-1.0, -1.5, -12.0), 2.0, Material::glass())
        .sphere(Vec3::new(1.5, -0.5, -18.0), 3.0, Material::red_rubber())
        .sphere(Vec3::new(7.0, 5.0, -18.0), 4.0, Material::mirror())
        .light(Vec3::new(-20.0, 20.0, 20.0), 1.5)
        .light(Vec3::new(30.0, 50.0, -25.0), 1.8)
        .light(Vec3::new(30.0, 20.0, 30.0), 1.7)
        .build()
}
