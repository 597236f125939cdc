//! JSON scene descriptions.
//!
//! A description names its materials once and references them from the
//! sphere list. Names not found in the `materials` table fall back to the
//! built-in presets (`ivory`, `glass`, `red_rubber`, `mirror`).
//!
//! ```json
//! {
//!   "materials": {
//!     "chalk": { "albedo": [0.9, 0.1], "diffuse_color": [0.8, 0.8, 0.8], "specular_exponent": 5.0 }
//!   },
//!   "spheres": [
//!     { "center": [0.0, 0.0, -10.0], "radius": 2.0, "material": "chalk" },
//!     { "center": [3.0, 0.0, -12.0], "radius": 1.0, "material": "glass" }
//!   ],
//!   "lights": [
//!     { "position": [-20.0, 20.0, 20.0], "intensity": 1.5 }
//!   ]
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use prism_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::builder::SceneBuilder;
use crate::material::Material;
use crate::scene::{Scene, SceneError, SceneResult};

fn default_refractive_index() -> f32 {
    1.0
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MaterialDescription {
    /// 2 weights (diffuse, specular) or 4 (plus reflection, refraction)
    pub albedo: Vec<f32>,
    pub diffuse_color: [f32; 3],
    pub specular_exponent: f32,
    #[serde(default = "default_refractive_index")]
    pub refractive_index: f32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SphereDescription {
    pub center: [f32; 3],
    pub radius: f32,
    pub material: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LightDescription {
    pub position: [f32; 3],
    pub intensity: f32,
}

/// Serialized form of a [`Scene`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub materials: BTreeMap<String, MaterialDescription>,
    #[serde(default)]
    pub spheres: Vec<SphereDescription>,
    #[serde(default)]
    pub lights: Vec<LightDescription>,
}

impl MaterialDescription {
    fn to_material(&self) -> SceneResult<Material> {
        Material::from_weights(
            &self.albedo,
            Vec3::from(self.diffuse_color),
            self.specular_exponent,
            self.refractive_index,
        )
    }
}

impl SceneDescription {
    /// Resolve material references and validate into a [`Scene`].
    pub fn into_scene(self) -> SceneResult<Scene> {
        let materials = self
            .materials
            .iter()
            .map(|(name, desc)| desc.to_material().map(|m| (name.as_str(), m)))
            .collect::<SceneResult<BTreeMap<_, _>>>()?;

        let mut builder = SceneBuilder::new();
        for sphere in &self.spheres {
            let material = materials
                .get(sphere.material.as_str())
                .copied()
                .or_else(|| Material::preset(&sphere.material))
                .ok_or_else(|| SceneError::UnknownMaterial(sphere.material.clone()))?;
            builder = builder.sphere(Vec3::from(sphere.center), sphere.radius, material);
        }
        for light in &self.lights {
            builder = builder.light(Vec3::from(light.position), light.intensity);
        }
        builder.build()
    }
}

/// Parse a scene from a JSON string.
pub fn scene_from_str(json: &str) -> SceneResult<Scene> {
    let description: SceneDescription = serde_json::from_str(json)?;
    description.into_scene()
}

/// Load a scene from a JSON file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> SceneResult<Scene> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let scene = scene_from_str(&contents)?;

    log::info!(
        "Loaded scene {}: {} spheres, {} lights",
        path.display(),
        scene.sphere_count(),
        scene.light_count()
    );

    Ok(scene)
}
