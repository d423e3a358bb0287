pub mod asset_loader;
pub mod camera;
pub mod error;
pub mod image;
pub mod materials;
pub mod objects;
pub mod renderer;
pub mod scene;
pub mod textures;
pub mod utils;
