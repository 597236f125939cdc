//! Example: Load and inspect a JSON scene description.
//!
//! Run with: cargo run --example inspect_scene -- scenes/reference.json

use std::env;

use prism_core::load_scene;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: inspect_scene <path-to-scene-json>");
        println!("\nExample:");
        println!("  cargo run --example inspect_scene -- scenes/reference.json");
        return;
    }

    let path = &args[1];
    println!("Loading scene: {}", path);

    match load_scene(path) {
        Ok(scene) => {
            println!("\n=== Spheres: {} ===", scene.sphere_count());
            for (i, sphere) in scene.spheres.iter().enumerate() {
                println!(
                    "  [{}] center={:?} radius={} albedo={:?} ior={}",
                    i,
                    sphere.center,
                    sphere.radius,
                    sphere.material.albedo,
                    sphere.material.refractive_index
                );
            }

            println!("\n=== Lights: {} ===", scene.light_count());
            for (i, light) in scene.lights.iter().enumerate() {
                println!("  [{}] position={:?} intensity={}", i, light.position, light.intensity);
            }
        }
        Err(e) => {
            eprintln!("Failed to load scene: {}", e);
            std::process::exit(1);
        }
    }
}
