//! Bucket-based tile rendering.
//!
//! Divides the image into tiles (buckets) that are rendered independently
//! and in parallel using rayon, then copied into one framebuffer. Pixels
//! share no state, so the result matches [`crate::render`] exactly.

use std::time::Instant;

use prism_core::Scene;
use rayon::prelude::*;

use crate::renderer::render_pixel;
use crate::{Camera, Color, Framebuffer, RenderConfig};

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// X coordinate of bucket's top-left corner
    pub x: u32,
    /// Y coordinate of bucket's top-left corner
    pub y: u32,
    /// Width of the bucket in pixels
    pub width: u32,
    /// Height of the bucket in pixels
    pub height: u32,
    /// Index of this bucket in row-major order
    pub index: usize,
}

impl Bucket {
    /// Create a new bucket.
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self { x, y, width, height, index }
    }

    /// Get the total number of pixels in this bucket.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }
}

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// Generate buckets covering an image in row-major order.
///
/// Buckets on the right and bottom edges are clipped to the image.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let bucket_size = bucket_size.max(1);
    let mut buckets = Vec::new();
    let mut index = 0;

    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let bw = bucket_size.min(width - x);
            let bh = bucket_size.min(height - y);
            buckets.push(Bucket::new(x, y, bw, bh, index));
            index += 1;
            x += bucket_size;
        }
        y += bucket_size;
    }

    buckets
}

/// Render a single bucket to a vector of colors.
///
/// Returns pixels in row-major order within the bucket.
pub fn render_bucket(
    bucket: &Bucket,
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
) -> Vec<Color> {
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);

    for local_y in 0..bucket.height {
        for local_x in 0..bucket.width {
            let global_x = bucket.x + local_x;
            let global_y = bucket.y + local_y;
            pixels.push(render_pixel(camera, scene, global_x, global_y, config));
        }
    }

    pixels
}

/// Result of rendering a bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    /// The bucket that was rendered
    pub bucket: Bucket,
    /// Pixel colors in row-major order
    pub pixels: Vec<Color>,
}

impl BucketResult {
    /// Create a new bucket result.
    pub fn new(bucket: Bucket, pixels: Vec<Color>) -> Self {
        Self { bucket, pixels }
    }

    /// Copy this bucket's pixels into their place in the framebuffer.
    pub fn write_to(&self, image: &mut Framebuffer) {
        let width = self.bucket.width as usize;
        for (row, line) in self.pixels.chunks(width.max(1)).enumerate() {
            for (col, &color) in line.iter().enumerate() {
                image.set(self.bucket.x + col as u32, self.bucket.y + row as u32, color);
            }
        }
    }
}

/// Render the scene in parallel with the default bucket size.
pub fn render_parallel(scene: &Scene, config: &RenderConfig) -> Framebuffer {
    render_parallel_with_bucket_size(scene, config, DEFAULT_BUCKET_SIZE)
}

/// Render the scene in parallel, one rayon task per bucket.
pub fn render_parallel_with_bucket_size(
    scene: &Scene,
    config: &RenderConfig,
    bucket_size: u32,
) -> Framebuffer {
    let camera = Camera::from_config(config);
    let buckets = generate_buckets(config.width, config.height, bucket_size);

    log::info!(
        "Rendering {}x{} in {} buckets on {} threads: {} spheres, {} lights",
        config.width,
        config.height,
        buckets.len(),
        rayon::current_num_threads(),
        scene.sphere_count(),
        scene.light_count()
    );
    let start = Instant::now();

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| {
            let pixels = render_bucket(bucket, &camera, scene, config);
            log::debug!("Bucket {} done ({}x{})", bucket.index, bucket.width, bucket.height);
            BucketResult::new(*bucket, pixels)
        })
        .collect();

    let mut image = Framebuffer::new(config.width, config.height);
    for result in &results {
        result.write_to(&mut image);
    }

    log::info!("Rendered in {:?}", start.elapsed());
    image
}
