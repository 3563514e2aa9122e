use web_sys::HtmlCanvasElement;

use crate::{
    error::Error,
    gl::{context::GlState, GL},
    js,
};

/// Rendering context that provides access to WebGL state.
pub(super) struct RenderContext<'a> {
    pub gl: &'a GL,
    pub state: &'a mut GlState,
}

/// Owns the canvas, the WebGL2 context, and the tracked GL state.
///
/// The renderer drives the frame lifecycle: viewport upkeep, clearing, and
/// dispatching drawable objects.
#[derive(Debug)]
pub struct Renderer {
    gl: GL,
    canvas: HtmlCanvasElement,
    state: GlState,
    clear_color: (f32, f32, f32, f32),
}

impl Renderer {
    /// Creates a new renderer by querying for a canvas element.
    ///
    /// # Parameters
    /// * `selector` - CSS selector for the canvas element (e.g. "canvas" or "#glyph")
    pub fn create(selector: &str) -> Result<Self, Error> {
        let canvas = js::get_canvas_by_selector(selector)?;
        Self::create_with_canvas(canvas)
    }

    /// Creates a new renderer from an existing HTML canvas element.
    pub fn create_with_canvas(canvas: HtmlCanvasElement) -> Result<Self, Error> {
        let (width, height) = (canvas.width(), canvas.height());

        // initialize WebGL context
        let gl = js::get_webgl2_context(&canvas)?;
        let state = GlState::default();

        let mut renderer = Self {
            gl,
            canvas,
            state,
            clear_color: (0.0, 0.0, 0.0, 0.0),
        };
        renderer.resize(width as _, height as _);
        Ok(renderer)
    }

    /// Sets the color used when clearing the canvas at frame start.
    ///
    /// Defaults to transparent black, which leaves the page background
    /// visible behind the glyph.
    pub fn clear_color(mut self, r: f32, g: f32, b: f32, a: f32) -> Self {
        self.clear_color = (r, g, b, a);
        self
    }

    /// Resizes the canvas backing store and updates the viewport.
    pub fn resize(&mut self, width: i32, height: i32) {
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        self.state.viewport(&self.gl, 0, 0, width, height);
    }

    /// Matches the canvas resolution to its CSS display size.
    ///
    /// Returns `true` when the backing store had to be resized.
    pub fn resize_to_display_size(&mut self) -> bool {
        let display_width = self.canvas.client_width();
        let display_height = self.canvas.client_height();

        let needs_resize = self.canvas.width() as i32 != display_width
            || self.canvas.height() as i32 != display_height;
        if needs_resize {
            self.resize(display_width, display_height);
        }

        needs_resize
    }

    /// Clears the color and depth buffers with the given color.
    pub fn clear(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.state.clear_color(&self.gl, r, g, b, a);
        self.gl.clear(GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);
    }

    /// Begins a new rendering frame.
    pub fn begin_frame(&mut self) {
        let (r, g, b, a) = self.clear_color;
        self.clear(r, g, b, a);
    }

    /// Renders a drawable object.
    ///
    /// Calls the drawable's prepare, draw, and cleanup methods in sequence,
    /// providing it with a render context.
    #[allow(private_bounds)]
    pub fn render(&mut self, drawable: &impl Drawable) {
        let mut context = RenderContext { gl: &self.gl, state: &mut self.state };

        drawable.prepare(&mut context);
        drawable.draw(&mut context);
        drawable.cleanup(&mut context);
    }

    /// Ends the current rendering frame.
    pub fn end_frame(&mut self) {}

    /// Returns a reference to the WebGL2 rendering context.
    pub fn gl(&self) -> &GL {
        &self.gl
    }

    /// Returns a reference to the canvas element.
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Returns the current canvas dimensions in pixels.
    pub fn canvas_size(&self) -> (i32, i32) {
        (self.canvas.width() as i32, self.canvas.height() as i32)
    }
}

/// Trait for objects that can be rendered by the renderer.
pub(super) trait Drawable {
    /// Binds programs, vertex state, and uniforms for the draw.
    fn prepare(&self, context: &mut RenderContext);

    /// Issues the draw call; all state is already bound by `prepare()`.
    fn draw(&self, context: &mut RenderContext);

    /// Unbinds resources bound during `prepare()`.
    fn cleanup(&self, context: &mut RenderContext);
}
