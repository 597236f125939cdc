use anyhow::{Context, Result};
use prism_core::reference_scene;
use prism_renderer::{render_parallel, save_ppm, RenderConfig};

/// Where the rendered image is written, relative to the working directory.
const OUTPUT_PATH: &str = "./out.ppm";

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Starting Prism");

    let scene = reference_scene().context("Failed to build reference scene")?;
    let config = RenderConfig::default();

    let image = render_parallel(&scene, &config);
    save_ppm(&image, OUTPUT_PATH).with_context(|| format!("Failed to write {}", OUTPUT_PATH))?;

    log::info!("Saved to {}", OUTPUT_PATH);
    Ok(())
}
