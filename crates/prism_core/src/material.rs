//! Surface materials for the Phong + reflection/refraction shading model.

use prism_math::{Vec3, Vec4};

use crate::scene::{SceneError, SceneResult};

/// Surface response of a sphere.
///
/// `albedo` weights the four terms of the shading equation:
/// diffuse, specular, mirror reflection and refraction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Weights: diffuse, specular, reflection, refraction
    pub albedo: Vec4,

    /// Diffuse color (linear RGB)
    pub diffuse_color: Vec3,

    /// Phong shininess
    pub specular_exponent: f32,

    /// Index of refraction; only matters when the refraction weight is non-zero
    pub refractive_index: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            albedo: Vec4::new(1.0, 0.0, 0.0, 0.0),
            diffuse_color: Vec3::ZERO,
            specular_exponent: 0.0,
            refractive_index: 1.0,
        }
    }
}

impl Material {
    /// Create a material with all four albedo weights.
    pub fn new(
        albedo: Vec4,
        diffuse_color: Vec3,
        specular_exponent: f32,
        refractive_index: f32,
    ) -> Self {
        Self {
            albedo,
            diffuse_color,
            specular_exponent,
            refractive_index,
        }
    }

    /// Create a material with only diffuse and specular weights.
    ///
    /// Reflection and refraction weights are zero, so those terms drop out.
    pub fn opaque(
        diffuse_weight: f32,
        specular_weight: f32,
        diffuse_color: Vec3,
        specular_exponent: f32,
    ) -> Self {
        Self::new(
            Vec4::new(diffuse_weight, specular_weight, 0.0, 0.0),
            diffuse_color,
            specular_exponent,
            1.0,
        )
    }

    /// Create a material from a 2- or 4-element weight list.
    ///
    /// The exponent must be non-negative and the refractive index positive,
    /// both finite; anything else would feed `inf` or NaN into shading.
    pub fn from_weights(
        weights: &[f32],
        diffuse_color: Vec3,
        specular_exponent: f32,
        refractive_index: f32,
    ) -> SceneResult<Self> {
        if !(specular_exponent.is_finite() && specular_exponent >= 0.0) {
            return Err(SceneError::InvalidExponent(specular_exponent));
        }
        if !(refractive_index.is_finite() && refractive_index > 0.0) {
            return Err(SceneError::InvalidRefractiveIndex(refractive_index));
        }
        let albedo = match *weights {
            [d, s] => Vec4::new(d, s, 0.0, 0.0),
            [d, s, r, t] => Vec4::new(d, s, r, t),
            _ => return Err(SceneError::InvalidAlbedo(weights.len())),
        };
        Ok(Self::new(albedo, diffuse_color, specular_exponent, refractive_index))
    }

    pub fn ivory() -> Self {
        Self::new(
            Vec4::new(0.6, 0.3, 0.1, 0.0),
            Vec3::new(0.4, 0.4, 0.3),
            50.0,
            1.0,
        )
    }

    pub fn glass() -> Self {
        Self::new(
            Vec4::new(0.0, 0.5, 0.1, 0.8),
            Vec3::new(0.6, 0.7, 0.8),
            125.0,
            1.5,
        )
    }

    pub fn red_rubber() -> Self {
        Self::new(
            Vec4::new(0.9, 0.1, 0.0, 0.0),
            Vec3::new(0.3, 0.1, 0.1),
            10.0,
            1.0,
        )
    }

    pub fn mirror() -> Self {
        Self::new(
            Vec4::new(0.0, 10.0, 0.8, 0.0),
            Vec3::new(1.0, 1.0, 1.0),
            1425.0,
            1.0,
        )
    }

    /// Look up a built-in material by name.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "ivory" => Some(Self::ivory()),
            "glass" => Some(Self::glass()),
            "red_rubber" => Some(Self::red_rubber()),
            "mirror" => Some(Self::mirror()),
            _ => None,
        }
    }

    /// Check if mirror reflection contributes to this material's color.
    pub fn reflects(&self) -> bool {
        self.albedo.z != 0.0
    }

    /// Check if refraction contributes to this material's color.
    pub fn refracts(&self) -> bool {
        self.albedo.w != 0.0
    }
}
