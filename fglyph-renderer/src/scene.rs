use compact_str::CompactString;

use crate::{
    error::Error,
    gl::{GlyphMesh, Renderer},
    rng::SimpleRng,
    transform::Transform,
};

/// One-shot WebGL2 scene drawing a transformed "F" glyph.
///
/// `Scene` owns the renderer and the glyph mesh; it is the single place
/// holding GPU handles and transform state.
///
/// # Examples
///
/// ```rust,no_run
/// use fglyph_renderer::Scene;
///
/// # fn demo() -> Result<(), fglyph_renderer::Error> {
/// let mut scene = Scene::builder("canvas")
///     .translation([45.0, 150.0, 0.0])
///     .rotation_degrees([40.0, 25.0, 325.0])
///     .build()?;
///
/// scene.render_frame()?;
/// # Ok(())
/// # }
/// ```
pub struct Scene {
    renderer: Renderer,
    mesh: GlyphMesh,
}

impl Scene {
    /// Creates a new scene builder with the specified canvas source.
    ///
    /// # Parameters
    /// * `canvas` - Canvas identifier (CSS selector) or `HtmlCanvasElement`
    #[allow(private_bounds)]
    pub fn builder(canvas: impl Into<CanvasSource>) -> SceneBuilder {
        SceneBuilder::new(canvas.into())
    }

    /// Renders one frame: canvas size sync, clear, draw.
    pub fn render_frame(&mut self) -> Result<(), Error> {
        if self.renderer.resize_to_display_size() {
            self.mesh.resize(self.renderer.canvas_size());
        }

        self.renderer.begin_frame();
        self.renderer.render(&self.mesh);
        self.renderer.end_frame();
        Ok(())
    }

    /// Resizes the canvas and the projection.
    pub fn resize(&mut self, width: i32, height: i32) {
        self.renderer.resize(width, height);
        self.mesh.resize((width, height));
    }

    /// Sets the glyph translation in canvas pixels.
    pub fn set_translation(&mut self, translation: [f32; 3]) {
        self.mesh.transform_mut().translation = translation;
    }

    /// Sets the rotation angles in radians (applied X, then Y, then Z).
    pub fn set_rotation(&mut self, rotation: [f32; 3]) {
        self.mesh.transform_mut().rotation = rotation;
    }

    /// Sets the per-axis scale factors.
    pub fn set_scale(&mut self, scale: [f32; 3]) {
        self.mesh.transform_mut().scale = scale;
    }

    /// Sets the glyph color.
    pub fn set_color(&mut self, color: [f32; 4]) {
        self.mesh.set_color(color);
    }

    /// Returns the current model transform.
    pub fn transform(&self) -> &Transform {
        self.mesh.transform()
    }

    /// Returns the current glyph color.
    pub fn color(&self) -> [f32; 4] {
        self.mesh.color()
    }

    /// Returns the size of the canvas in pixels.
    pub fn canvas_size(&self) -> (i32, i32) {
        self.renderer.canvas_size()
    }

    /// Returns the WebGL2 rendering context.
    pub fn gl(&self) -> &web_sys::WebGl2RenderingContext {
        self.renderer.gl()
    }

    /// Returns a reference to the HTML canvas element used for rendering.
    pub fn canvas(&self) -> &web_sys::HtmlCanvasElement {
        self.renderer.canvas()
    }
}

/// Canvas source for scene initialization.
///
/// Supports both CSS selector strings and direct `HtmlCanvasElement`
/// references.
enum CanvasSource {
    /// CSS selector string for canvas lookup (e.g. "#glyph", "canvas").
    Selector(CompactString),
    /// Direct reference to an existing canvas element.
    Element(web_sys::HtmlCanvasElement),
}

/// Builder for configuring and creating a [`Scene`].
///
/// Unset values fall back to an untransformed glyph and a color rolled once
/// from the wall-clock-seeded RNG.
pub struct SceneBuilder {
    canvas: CanvasSource,
    transform: Transform,
    color: Option<[f32; 4]>,
    clear_color: (f32, f32, f32, f32),
}

impl SceneBuilder {
    /// Creates a new scene builder with the specified canvas source.
    fn new(canvas: CanvasSource) -> Self {
        SceneBuilder {
            canvas,
            transform: Transform::default(),
            color: None,
            clear_color: (0.0, 0.0, 0.0, 0.0),
        }
    }

    /// Sets the glyph translation in canvas pixels.
    pub fn translation(mut self, translation: [f32; 3]) -> Self {
        self.transform.translation = translation;
        self
    }

    /// Sets the rotation angles in radians (applied X, then Y, then Z).
    pub fn rotation(mut self, rotation: [f32; 3]) -> Self {
        self.transform.rotation = rotation;
        self
    }

    /// Sets the rotation angles in degrees.
    pub fn rotation_degrees(self, rotation: [f32; 3]) -> Self {
        self.rotation(rotation.map(f32::to_radians))
    }

    /// Sets the per-axis scale factors.
    pub fn scale(mut self, scale: [f32; 3]) -> Self {
        self.transform.scale = scale;
        self
    }

    /// Fixes the glyph color instead of rolling a random one at build.
    pub fn color(mut self, color: [f32; 4]) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets the frame clear color (defaults to transparent black).
    pub fn clear_color(mut self, r: f32, g: f32, b: f32, a: f32) -> Self {
        self.clear_color = (r, g, b, a);
        self
    }

    /// Builds the scene with the configured options.
    pub fn build(self) -> Result<Scene, Error> {
        let renderer = match self.canvas {
            CanvasSource::Selector(selector) => Renderer::create(&selector)?,
            CanvasSource::Element(element) => Renderer::create_with_canvas(element)?,
        };
        let (r, g, b, a) = self.clear_color;
        let renderer = renderer.clear_color(r, g, b, a);

        let gl = renderer.gl();
        let mut mesh = GlyphMesh::new(gl, renderer.canvas_size())?;
        mesh.set_transform(self.transform);
        mesh.set_color(self.color.unwrap_or_else(random_color));

        Ok(Scene { renderer, mesh })
    }
}

/// Rolls the one-off glyph color: random RGB, opaque alpha.
fn random_color() -> [f32; 4] {
    let mut rng = SimpleRng::default();
    [rng.next_f32(), rng.next_f32(), rng.next_f32(), 1.0]
}

impl From<&'static str> for CanvasSource {
    fn from(selector: &'static str) -> Self {
        CanvasSource::Selector(selector.into())
    }
}

impl From<web_sys::HtmlCanvasElement> for CanvasSource {
    fn from(element: web_sys::HtmlCanvasElement) -> Self {
        CanvasSource::Element(element)
    }
}

impl<'a> From<&'a web_sys::HtmlCanvasElement> for CanvasSource {
    fn from(value: &'a web_sys::HtmlCanvasElement) -> Self {
        value.clone().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let builder = Scene::builder("canvas");

        assert_eq!(builder.transform.translation, [0.0, 0.0, 0.0]);
        assert_eq!(builder.transform.scale, [1.0, 1.0, 1.0]);
        assert!(builder.color.is_none());
        assert_eq!(builder.clear_color, (0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_rotation_degrees_converts_to_radians() {
        let builder = Scene::builder("canvas").rotation_degrees([180.0, 0.0, 90.0]);

        let [rx, ry, rz] = builder.transform.rotation;
        assert!((rx - std::f32::consts::PI).abs() < 1e-6);
        assert_eq!(ry, 0.0);
        assert!((rz - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }
}
