use web_sys::console;

use crate::{
    error::Error,
    geometry,
    gl::{Drawable, RenderContext, ShaderProgram, GL},
    mat4::Mat4,
    transform::Transform,
};

/// Depth range mapped into clip space by the projection.
const DEPTH_RANGE: f32 = 400.0;

/// GPU-side "F" glyph: one vertex buffer, one shader program, one draw.
///
/// The mesh owns its transform parameters and flat color. The combined
/// projection/model matrix is recomputed from them on every draw, so
/// transform changes take effect on the next frame without touching any
/// GPU resources.
#[derive(Debug)]
pub struct GlyphMesh {
    /// Shader program for rendering the glyph.
    shader: ShaderProgram,
    /// Vertex state for the glyph geometry.
    buffers: GlyphBuffers,
    /// Uniform location of the combined transform matrix.
    matrix_loc: web_sys::WebGlUniformLocation,
    /// Uniform location of the flat glyph color.
    color_loc: web_sys::WebGlUniformLocation,
    /// Model transform applied on top of the projection.
    transform: Transform,
    /// RGBA color, constant between draws.
    color: [f32; 4],
    /// Size of the canvas in pixels.
    canvas_size_px: (i32, i32),
}

#[derive(Debug)]
struct GlyphBuffers {
    vao: web_sys::WebGlVertexArrayObject,
    vertices: web_sys::WebGlBuffer,
}

impl GlyphMesh {
    const FRAGMENT_GLSL: &'static str = include_str!("../shaders/glyph.frag");
    const VERTEX_GLSL: &'static str = include_str!("../shaders/glyph.vert");

    pub fn new(gl: &GL, canvas_size: (i32, i32)) -> Result<Self, Error> {
        // setup shader first; the position attribute location comes from it
        let shader = ShaderProgram::create(gl, Self::VERTEX_GLSL, Self::FRAGMENT_GLSL)?;
        shader.use_program(gl);

        let position_attrib = shader.attrib_location(gl, "a_position")?;

        // create and setup the Vertex Array Object
        let vao = create_vao(gl)?;
        gl.bind_vertex_array(Some(&vao));

        let vertices = create_glyph_vertex_buffer(gl, position_attrib)?;

        // unbind VAO to prevent accidental modification
        gl.bind_vertex_array(None);

        let matrix_loc = shader.uniform_location(gl, "u_matrix")?;
        let color_loc = shader.uniform_location(gl, "u_color")?;

        console::log_1(&format!("glyph mesh: {} vertices", geometry::VERTEX_COUNT).into());

        Ok(Self {
            shader,
            buffers: GlyphBuffers { vao, vertices },
            matrix_loc,
            color_loc,
            transform: Transform::default(),
            color: [0.0, 0.0, 0.0, 1.0],
            canvas_size_px: canvas_size,
        })
    }

    /// Replaces the model transform used on the next draw.
    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    /// Replaces the flat glyph color.
    pub fn set_color(&mut self, color: [f32; 4]) {
        self.color = color;
    }

    pub fn color(&self) -> [f32; 4] {
        self.color
    }

    /// Number of vertices submitted per draw.
    pub fn vertex_count(&self) -> i32 {
        geometry::VERTEX_COUNT
    }

    /// Tracks a canvas resize; the projection picks it up on the next draw.
    pub fn resize(&mut self, canvas_size: (i32, i32)) {
        self.canvas_size_px = canvas_size;
    }

    /// Combined projection and model matrix for the current frame.
    fn matrix(&self) -> Mat4 {
        let (width, height) = self.canvas_size_px;
        let projection = Mat4::projection(width as f32, height as f32, DEPTH_RANGE);

        self.transform.apply_to(projection)
    }
}

fn create_vao(gl: &GL) -> Result<web_sys::WebGlVertexArrayObject, Error> {
    gl.create_vertex_array().ok_or(Error::vertex_array_creation_failed())
}

/// Uploads the glyph vertices once and wires the position attribute:
/// 3 floats per vertex, unnormalized, tightly packed.
fn create_glyph_vertex_buffer(
    gl: &GL,
    position_attrib: u32,
) -> Result<web_sys::WebGlBuffer, Error> {
    let buffer = gl
        .create_buffer()
        .ok_or(Error::buffer_creation_failed("glyph-vertex"))?;
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));

    unsafe {
        let view = js_sys::Float32Array::view(&geometry::GLYPH_VERTICES);
        gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &view, GL::STATIC_DRAW);
    }

    // vertex attributes \\
    gl.enable_vertex_attrib_array(position_attrib);
    gl.vertex_attrib_pointer_with_i32(
        position_attrib,
        geometry::COMPONENTS_PER_VERTEX,
        GL::FLOAT,
        false, // normalize
        0,     // stride: tightly packed
        0,     // offset
    );

    Ok(buffer)
}

impl Drawable for GlyphMesh {
    fn prepare(&self, context: &mut RenderContext) {
        let gl = context.gl;

        self.shader.use_program(gl);
        gl.bind_vertex_array(Some(&self.buffers.vao));

        gl.uniform4fv_with_f32_array(Some(&self.color_loc), &self.color);

        let matrix = self.matrix();
        gl.uniform_matrix4fv_with_f32_array(Some(&self.matrix_loc), false, matrix.as_slice());
    }

    fn draw(&self, context: &mut RenderContext) {
        context.gl.draw_arrays(GL::TRIANGLES, 0, geometry::VERTEX_COUNT);
    }

    fn cleanup(&self, context: &mut RenderContext) {
        context.gl.bind_vertex_array(None);
    }
}
