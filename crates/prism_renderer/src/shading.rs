//! Recursive shading: Phong direct lighting with hard shadows, plus
//! mirror reflection and refraction traced as secondary rays.

use prism_core::Scene;
use prism_math::{reflect, Ray, Vec3};

use crate::{nearest_hit, Color, HitRecord, RenderConfig};

/// Refract `incident` through a surface with outward unit `normal`.
///
/// The ray is treated as entering the medium when it hits the outside of
/// the surface and leaving it otherwise; the outer medium has index 1.
/// Returns the zero vector on total internal reflection.
pub fn refract(incident: Vec3, normal: Vec3, refractive_index: f32) -> Vec3 {
    let mut cosi = -incident.dot(normal).clamp(-1.0, 1.0);
    let (mut eta_i, mut eta_t) = (1.0_f32, refractive_index);
    let mut n = normal;

    if cosi < 0.0 {
        // Inside the medium, heading out
        cosi = -cosi;
        std::mem::swap(&mut eta_i, &mut eta_t);
        n = -normal;
    }

    let eta = eta_i / eta_t;
    let k = 1.0 - eta * eta * (1.0 - cosi * cosi);
    if k < 0.0 {
        Vec3::ZERO
    } else {
        incident * eta + n * (eta * cosi - k.sqrt())
    }
}

/// Compute the color seen along `ray`.
///
/// Rays past `config.max_depth` or that hit nothing return the background.
pub fn shade(ray: &Ray, scene: &Scene, depth: u32, config: &RenderConfig) -> Color {
    if depth > config.max_depth {
        return config.background;
    }
    let Some(hit) = nearest_hit(ray, &scene.spheres, config.far_clip) else {
        return config.background;
    };
    let material = hit.material;

    // Terms with a zero weight contribute nothing, skip tracing them
    let reflect_color = if material.reflects() {
        let dir = reflect(ray.direction, hit.normal);
        let reflected = Ray::offset(hit.point, hit.normal, dir, config.bias);
        shade(&reflected, scene, depth + 1, config)
    } else {
        Color::ZERO
    };

    let refract_color = if material.refracts() {
        let dir = refract(ray.direction, hit.normal, material.refractive_index);
        let refracted = Ray::offset(hit.point, hit.normal, dir, config.bias);
        shade(&refracted, scene, depth + 1, config)
    } else {
        Color::ZERO
    };

    let (diffuse, specular) = direct_lighting(ray, &hit, scene, config);

    material.diffuse_color * diffuse * material.albedo.x
        + Color::ONE * specular * material.albedo.y
        + reflect_color * material.albedo.z
        + refract_color * material.albedo.w
}

/// Sum the diffuse and specular intensity from every unoccluded light.
fn direct_lighting(ray: &Ray, hit: &HitRecord, scene: &Scene, config: &RenderConfig) -> (f32, f32) {
    let mut diffuse = 0.0;
    let mut specular = 0.0;

    for light in &scene.lights {
        let to_light = light.position - hit.point;
        let light_distance = to_light.length();
        let light_dir = to_light.normalize_or_zero();

        if in_shadow(hit, light_dir, light_distance, scene, config) {
            continue;
        }

        diffuse += light.intensity * light_dir.dot(hit.normal).max(0.0);
        specular += light.intensity
            * reflect(light_dir, hit.normal)
                .dot(ray.direction)
                .max(0.0)
                .powf(hit.material.specular_exponent);
    }

    (diffuse, specular)
}

/// Check whether any geometry sits between the hit point and a light.
fn in_shadow(
    hit: &HitRecord,
    light_dir: Vec3,
    light_distance: f32,
    scene: &Scene,
    config: &RenderConfig,
) -> bool {
    let shadow_ray = Ray::offset(hit.point, hit.normal, light_dir, config.bias);
    nearest_hit(&shadow_ray, &scene.spheres, config.far_clip)
        .is_some_and(|blocker| blocker.distance < light_distance)
}
