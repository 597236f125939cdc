//! Ray-sphere intersection.

use prism_core::Sphere;
use prism_math::Ray;

use crate::hittable::{HitRecord, Hittable};

impl Hittable for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        // Project the origin-to-center vector onto the ray
        let l = self.center - ray.origin;
        let tca = l.dot(ray.direction);
        let d2 = l.dot(l) - tca * tca;
        let r2 = self.radius * self.radius;
        if d2 > r2 {
            return None;
        }

        let thc = (r2 - d2).sqrt();
        let t0 = tca - thc;
        let t1 = tca + thc;

        // Origin inside the sphere, or the near root is behind it
        let t = if t0 < 0.0 { t1 } else { t0 };
        (t >= 0.0).then_some(t)
    }

    fn hit_record<'a>(&'a self, ray: &Ray, distance: f32) -> HitRecord<'a> {
        let point = ray.at(distance);
        HitRecord {
            point,
            normal: self.normal_at(point),
            material: &self.material,
            distance,
        }
    }
}
