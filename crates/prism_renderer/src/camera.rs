//! Fixed pinhole camera for primary ray generation.

use prism_math::{Ray, Vec3};

use crate::RenderConfig;

/// Camera at the world origin looking down -Z.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,
    /// tan(fov / 2)
    scale: f32,
    aspect_ratio: f32,
}

impl Camera {
    /// Create a camera for an image of the given size and vertical field of
    /// view in radians.
    pub fn new(image_width: u32, image_height: u32, fov: f32) -> Self {
        Self {
            image_width,
            image_height,
            scale: (fov / 2.0).tan(),
            aspect_ratio: image_width as f32 / image_height as f32,
        }
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(config.width, config.height, config.fov)
    }

    /// Unit direction through the center of pixel (i, j).
    ///
    /// Pixel (0, 0) is the top-left corner of the image.
    pub fn direction(&self, i: u32, j: u32) -> Vec3 {
        let w = self.image_width as f32;
        let h = self.image_height as f32;
        let x = (2.0 * (i as f32 + 0.5) / w - 1.0) * self.scale * self.aspect_ratio;
        let y = -(2.0 * (j as f32 + 0.5) / h - 1.0) * self.scale;
        Vec3::new(x, y, -1.0).normalize()
    }

    /// Generate the primary ray for pixel (i, j).
    pub fn get_ray(&self, i: u32, j: u32) -> Ray {
        Ray::new(Vec3::ZERO, self.direction(i, j))
    }
}
