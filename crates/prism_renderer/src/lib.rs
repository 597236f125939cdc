//! Prism Renderer - CPU Ray Tracing
//!
//! A recursive Whitted-style ray tracer for scenes of spheres lit by point
//! lights: Phong diffuse and specular terms, hard shadows, mirror
//! reflection and refraction, one primary ray per pixel.

mod bucket;
mod camera;
mod hittable;
mod output;
mod renderer;
mod shading;
mod sphere;

pub use bucket::{
    generate_buckets, render_bucket, render_parallel, render_parallel_with_bucket_size, Bucket,
    BucketResult, DEFAULT_BUCKET_SIZE,
};
pub use camera::Camera;
pub use hittable::{nearest_hit, HitRecord, Hittable};
pub use output::{
    color_to_rgb, save, save_png, save_ppm, to_rgb8, write_ppm, OutputError, OutputResult,
};
pub use renderer::{
    render, render_pixel, Color, Framebuffer, RenderConfig, BACKGROUND, BIAS, DEFAULT_HEIGHT,
    DEFAULT_WIDTH, FAR_CLIP, FOV, MAX_DEPTH,
};
pub use shading::{refract, shade};

/// Re-export Vec3 and common math types from prism_math
pub use prism_math::{reflect, Ray, Vec3, Vec4};
