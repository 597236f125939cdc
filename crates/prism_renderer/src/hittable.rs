//! Hittable trait and HitRecord for ray-object intersection.

use prism_core::Material;
use prism_math::{Ray, Vec3};

/// Record of the nearest ray-object intersection.
#[derive(Clone, Copy, Debug)]
pub struct HitRecord<'a> {
    /// Point of intersection
    pub point: Vec3,
    /// Outward unit normal at the intersection
    pub normal: Vec3,
    /// Material of the object that was hit
    pub material: &'a Material,
    /// Distance along the ray
    pub distance: f32,
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Distance along the ray to the first intersection at or in front of
    /// the origin, or `None` on a miss.
    fn intersect(&self, ray: &Ray) -> Option<f32>;

    /// Build the full record for an intersection at `distance`.
    fn hit_record<'a>(&'a self, ray: &Ray, distance: f32) -> HitRecord<'a>;
}

/// Find the nearest object hit by `ray`.
///
/// Scans every object in order. A candidate replaces the current best only
/// when strictly closer, so the first object wins ties. Anything at or
/// beyond `far_clip` counts as a miss.
pub fn nearest_hit<'a, H: Hittable>(
    ray: &Ray,
    objects: &'a [H],
    far_clip: f32,
) -> Option<HitRecord<'a>> {
    let (distance, index) = objects
        .iter()
        .enumerate()
        .fold((far_clip, None), |best, (i, object)| match object.intersect(ray) {
            Some(t) if t < best.0 => (t, Some(i)),
            _ => best,
        });

    index.map(|i| objects[i].hit_record(ray, distance))
}
