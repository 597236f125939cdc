//! Core ray tracing driver.
//!
//! Implements single-sample Whitted-style ray tracing with:
//! - One primary ray per pixel from a fixed pinhole camera
//! - Recursive reflection and refraction up to a fixed depth
//! - Hard shadows from point lights

use std::f32::consts::FRAC_PI_2;
use std::time::Instant;

use prism_core::Scene;

use crate::{shade, Camera, Vec3};

/// Color type alias (linear RGB, unclamped)
pub type Color = Vec3;

/// Default image width in pixels.
pub const DEFAULT_WIDTH: u32 = 1024;
/// Default image height in pixels.
pub const DEFAULT_HEIGHT: u32 = 768;
/// Vertical field of view in radians.
pub const FOV: f32 = FRAC_PI_2;
/// Deepest recursion level that is still shaded.
pub const MAX_DEPTH: u32 = 4;
/// Offset applied along the normal to secondary ray origins.
pub const BIAS: f32 = 1e-3;
/// Hits at or beyond this distance are misses.
pub const FAR_CLIP: f32 = 1000.0;
/// Color returned by rays that escape the scene.
pub const BACKGROUND: Color = Vec3::new(0.2, 0.7, 0.8);

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Vertical field of view in radians
    pub fov: f32,
    /// Maximum recursion depth for reflection and refraction rays
    pub max_depth: u32,
    /// Self-intersection offset for secondary rays
    pub bias: f32,
    /// Far clipping distance
    pub far_clip: f32,
    /// Background color when ray doesn't hit anything
    pub background: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fov: FOV,
            max_depth: MAX_DEPTH,
            bias: BIAS,
            far_clip: FAR_CLIP,
            background: BACKGROUND,
        }
    }
}

impl RenderConfig {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// Dense row-major buffer of linear colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Framebuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl Framebuffer {
    /// Create a new framebuffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let i = self.index(x, y);
        self.pixels[i] = color;
    }
}

/// Render a single pixel.
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    x: u32,
    y: u32,
    config: &RenderConfig,
) -> Color {
    let ray = camera.get_ray(x, y);
    shade(&ray, scene, 0, config)
}

/// Render the entire scene to a framebuffer on the calling thread.
pub fn render(scene: &Scene, config: &RenderConfig) -> Framebuffer {
    let camera = Camera::from_config(config);
    let mut image = Framebuffer::new(config.width, config.height);

    log::info!(
        "Rendering {}x{}: {} spheres, {} lights",
        config.width,
        config.height,
        scene.sphere_count(),
        scene.light_count()
    );
    let start = Instant::now();

    for y in 0..config.height {
        for x in 0..config.width {
            let color = render_pixel(&camera, scene, x, y, config);
            image.set(x, y, color);
        }
    }

    log::info!("Rendered in {:?}", start.elapsed());
    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::{reference_scene, Material, SceneBuilder};

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!((config.width, config.height), (1024, 768));
        assert_eq!(config.max_depth, 4);
        assert_eq!(config.bias, 1e-3);
        assert_eq!(config.far_clip, 1000.0);
        assert_eq!(config.background, Vec3::new(0.2, 0.7, 0.8));
        assert!((config.fov - std::f32::consts::PI / 2.0).abs() < 1e-7);
    }

    #[test]
    fn test_framebuffer_row_major() {
        let mut fb = Framebuffer::new(4, 3);
        fb.set(1, 2, Color::ONE);

        assert_eq!(fb.pixels.len(), 12);
        assert_eq!(fb.pixels[2 * 4 + 1], Color::ONE);
        assert_eq!(fb.get(1, 2), Color::ONE);
        assert_eq!(fb.get(2, 1), Color::ZERO);
    }

    #[test]
    fn test_empty_scene_renders_background() {
        let scene = SceneBuilder::new().build().unwrap();
        let config = RenderConfig::default().with_resolution(8, 6);
        let image = render(&scene, &config);

        assert!(image.pixels.iter().all(|&c| c == BACKGROUND));
    }

    #[test]
    fn test_render_pixel_center_hits_scene() {
        let scene = reference_scene().unwrap();
        let config = RenderConfig::default();
        let camera = Camera::from_config(&config);

        let color = render_pixel(&camera, &scene, 512, 384, &config);
        assert!((color - BACKGROUND).length() > 0.05);

        // Top-left corner looks past every sphere
        let corner = render_pixel(&camera, &scene, 0, 0, &config);
        assert_eq!(corner, BACKGROUND);
    }

    #[test]
    fn test_unlit_scene_is_finite_and_non_negative() {
        let scene = reference_scene().unwrap().with_light_intensity(0.0).unwrap();
        let config = RenderConfig::default().with_resolution(64, 48);
        let image = render(&scene, &config);

        for c in &image.pixels {
            assert!(c.is_finite(), "non-finite pixel {:?}", c);
            assert!(c.min_element() >= 0.0, "negative pixel {:?}", c);
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let scene = SceneBuilder::new()
            .sphere(Vec3::new(0.0, 0.0, -6.0), 1.5, Material::glass())
            .sphere(Vec3::new(2.0, 0.5, -9.0), 1.5, Material::mirror())
            .light(Vec3::new(-10.0, 10.0, 10.0), 1.5)
            .build()
            .unwrap();
        let config = RenderConfig::default().with_resolution(40, 30);

        assert_eq!(render(&scene, &config), render(&scene, &config));
    }
}
