mod context;
mod glyph;
mod program;
mod renderer;

pub use glyph::*;
pub(crate) use program::*;
pub use renderer::*;

pub(crate) type GL = web_sys::WebGl2RenderingContext;
