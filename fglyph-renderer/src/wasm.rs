use wasm_bindgen::prelude::*;

use crate::{error::Error, js, scene::Scene};

/// JavaScript wrapper for the glyph scene.
#[wasm_bindgen]
pub struct GlyphDemo {
    scene: Scene,
}

#[wasm_bindgen]
impl GlyphDemo {
    /// Creates a demo bound to the canvas matching the CSS selector.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_selector: &str) -> Result<GlyphDemo, JsValue> {
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));

        let canvas = js::get_canvas_by_selector(canvas_selector).map_err(into_js_error)?;
        let scene = Scene::builder(canvas).build().map_err(into_js_error)?;

        Ok(GlyphDemo { scene })
    }

    /// Renders one frame.
    pub fn render(&mut self) -> Result<(), JsValue> {
        self.scene.render_frame().map_err(into_js_error)
    }

    /// Resizes the canvas and the projection.
    pub fn resize(&mut self, width: i32, height: i32) {
        self.scene.resize(width, height);
    }

    /// Sets the glyph translation in canvas pixels.
    #[wasm_bindgen(js_name = "setTranslation")]
    pub fn set_translation(&mut self, x: f32, y: f32, z: f32) {
        self.scene.set_translation([x, y, z]);
    }

    /// Sets the rotation angles in radians, applied X then Y then Z.
    #[wasm_bindgen(js_name = "setRotation")]
    pub fn set_rotation(&mut self, x: f32, y: f32, z: f32) {
        self.scene.set_rotation([x, y, z]);
    }

    /// Sets the per-axis scale factors.
    #[wasm_bindgen(js_name = "setScale")]
    pub fn set_scale(&mut self, x: f32, y: f32, z: f32) {
        self.scene.set_scale([x, y, z]);
    }

    /// Sets the glyph color from `0xRRGGBB`, alpha fixed at 1.0.
    #[wasm_bindgen(js_name = "setColor")]
    pub fn set_color(&mut self, color: u32) {
        let r = ((color >> 16) & 0xFF) as f32 / 255.0;
        let g = ((color >> 8) & 0xFF) as f32 / 255.0;
        let b = (color & 0xFF) as f32 / 255.0;
        self.scene.set_color([r, g, b, 1.0]);
    }
}

fn into_js_error(error: Error) -> JsValue {
    JsValue::from_str(&error.to_string())
}
