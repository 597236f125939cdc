//! Prism Core - Scene model for the Prism ray tracer.
//!
//! This crate provides:
//!
//! - **Scene types**: `Material`, `Sphere`, `Light`, `Scene`
//! - **Scene construction**: `SceneBuilder` and the built-in `reference_scene`
//! - **Scene descriptions**: JSON scene files loaded with `load_scene`
//!
//! # Example
//!
//! ```ignore
//! use prism_core::load_scene;
//!
//! let scene = load_scene("scene.json")?;
//! println!("Loaded {} spheres, {} lights",
//!     scene.sphere_count(),
//!     scene.light_count());
//! ```

pub mod builder;
pub mod description;
pub mod material;
pub mod scene;

// Re-export commonly used types
pub use builder::{reference_scene, SceneBuilder};
pub use description::{load_scene, scene_from_str, SceneDescription};
pub use material::Material;
pub use scene::{Light, Scene, SceneError, SceneResult, Sphere};
