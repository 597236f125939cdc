//! Render a JSON scene description to an image.
//!
//! Run with: cargo run --release --example render_scene -- scenes/reference.json out.png

use std::env;

use anyhow::{Context, Result};
use prism_core::load_scene;
use prism_renderer::{render_parallel, save, RenderConfig};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        println!("Usage: render_scene <scene.json> <output.ppm|output.png>");
        return Ok(());
    }

    let scene = load_scene(&args[1]).with_context(|| format!("Failed to load {}", args[1]))?;
    let image = render_parallel(&scene, &RenderConfig::default());
    save(&image, &args[2]).with_context(|| format!("Failed to save {}", args[2]))?;

    println!("Saved to {}", args[2]);
    Ok(())
}
