mod error;
mod geometry;
mod gl;
mod mat4;
mod rng;
mod scene;
mod transform;

pub(crate) mod js;

#[cfg(feature = "js-api")]
pub mod wasm;

pub use crate::{
    error::Error,
    gl::{GlyphMesh, Renderer},
    mat4::Mat4,
    scene::{Scene, SceneBuilder},
    transform::Transform,
};
