use web_sys::{console, WebGlProgram, WebGlShader, WebGlUniformLocation};

use crate::{error::Error, gl::GL};

/// Compiled and linked shader pair.
#[derive(Debug)]
pub(crate) struct ShaderProgram {
    pub(crate) program: WebGlProgram,
}

impl ShaderProgram {
    pub(super) fn create(
        gl: &GL,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Result<Self, Error> {
        let program = gl
            .create_program()
            .ok_or(Error::shader_program_creation_failed())?;

        // compile shaders
        let vertex_shader = compile_shader(gl, ShaderType::Vertex, vertex_source)?;
        let fragment_shader = compile_shader(gl, ShaderType::Fragment, fragment_source)?;

        // attach shaders and link program
        gl.attach_shader(&program, &vertex_shader);
        gl.attach_shader(&program, &fragment_shader);
        gl.link_program(&program);
        check_link_status(gl, &program)?;

        // delete shaders (no longer needed after linking)
        gl.delete_shader(Some(&vertex_shader));
        gl.delete_shader(Some(&fragment_shader));

        Ok(ShaderProgram { program })
    }

    /// Use the shader program.
    pub(crate) fn use_program(&self, gl: &GL) {
        gl.use_program(Some(&self.program));
    }

    pub(crate) fn uniform_location(
        &self,
        gl: &GL,
        name: &'static str,
    ) -> Result<WebGlUniformLocation, Error> {
        gl.get_uniform_location(&self.program, name)
            .ok_or(Error::uniform_location_failed(name))
    }

    pub(crate) fn attrib_location(&self, gl: &GL, name: &'static str) -> Result<u32, Error> {
        let location = gl.get_attrib_location(&self.program, name);
        if location < 0 {
            return Err(Error::attrib_location_failed(name));
        }

        Ok(location as u32)
    }
}

/// Compiles one shader stage. On failure the driver's info log is written
/// to the console, the shader object is deleted, and the log travels back
/// inside the error.
fn compile_shader(gl: &GL, shader_type: ShaderType, source: &str) -> Result<WebGlShader, Error> {
    let shader = gl
        .create_shader(shader_type.into())
        .ok_or(Error::shader_creation_failed(shader_type.name()))?;

    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    let status = gl.get_shader_parameter(&shader, GL::COMPILE_STATUS);
    if status.as_bool().unwrap_or(false) {
        return Ok(shader);
    }

    let log = gl
        .get_shader_info_log(&shader)
        .unwrap_or_else(|| format!("unknown {} shader compile error", shader_type.name()));
    console::error_1(&log.as_str().into());
    gl.delete_shader(Some(&shader));

    Err(Error::shader_compile_failed(log))
}

fn check_link_status(gl: &GL, program: &WebGlProgram) -> Result<(), Error> {
    let status = gl.get_program_parameter(program, GL::LINK_STATUS);
    if status.as_bool().unwrap_or(false) {
        return Ok(());
    }

    let log = gl
        .get_program_info_log(program)
        .unwrap_or_else(|| "unknown program link error".to_string());
    console::error_1(&log.as_str().into());
    gl.delete_program(Some(program));

    Err(Error::shader_link_failed(log))
}

/// Shader stage.
#[derive(Clone, Copy)]
enum ShaderType {
    Vertex,
    Fragment,
}

impl ShaderType {
    fn name(self) -> &'static str {
        match self {
            ShaderType::Vertex => "vertex",
            ShaderType::Fragment => "fragment",
        }
    }
}

impl From<ShaderType> for u32 {
    fn from(value: ShaderType) -> Self {
        match value {
            ShaderType::Vertex => GL::VERTEX_SHADER,
            ShaderType::Fragment => GL::FRAGMENT_SHADER,
        }
    }
}
