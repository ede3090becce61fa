// Helper functions for dealing with shaders, compiling and linking them into shader programs

use crate::error::{Error, Result};
use web_sys::{WebGlProgram, WebGlRenderingContext, WebGlShader, WebGlUniformLocation};

pub fn compile_shader(
    context: &WebGlRenderingContext,
    shader_type: u32,
    source: &str,
) -> Result<WebGlShader> {
    let shader = context
        .create_shader(shader_type)
        .ok_or_else(|| Error::WebGl(String::from("Unable to create shader object")))?;
    context.shader_source(&shader, source);
    context.compile_shader(&shader);

    if context
        .get_shader_parameter(&shader, WebGlRenderingContext::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(shader)
    } else {
        Err(Error::WebGl(
            context
                .get_shader_info_log(&shader)
                .unwrap_or_else(|| String::from("Unknown error creating shader")),
        ))
    }
}

pub fn link_program(
    context: &WebGlRenderingContext,
    vertex_shader: &WebGlShader,
    fragment_shader: &WebGlShader,
) -> Result<WebGlProgram> {
    let program = context
        .create_program()
        .ok_or_else(|| Error::WebGl(String::from("Unable to create program object")))?;
    context.attach_shader(&program, vertex_shader);
    context.attach_shader(&program, fragment_shader);
    context.link_program(&program);

    if context
        .get_program_parameter(&program, WebGlRenderingContext::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(program)
    } else {
        Err(Error::WebGl(
            context
                .get_program_info_log(&program)
                .unwrap_or_else(|| String::from("Unknown error creating program object")),
        ))
    }
}

// Both shader stages from source, linked into one program
pub fn build_program(
    context: &WebGlRenderingContext,
    vertex_source: &str,
    fragment_source: &str,
) -> Result<WebGlProgram> {
    let vertex_shader =
        compile_shader(context, WebGlRenderingContext::VERTEX_SHADER, vertex_source)?;
    let fragment_shader =
        compile_shader(context, WebGlRenderingContext::FRAGMENT_SHADER, fragment_source)?;
    link_program(context, &vertex_shader, &fragment_shader)
}

pub fn attrib_location(
    context: &WebGlRenderingContext,
    program: &WebGlProgram,
    name: &str,
) -> Result<u32> {
    let location = context.get_attrib_location(program, name);
    if location < 0 {
        Err(Error::WebGl(format!("attribute {} not found", name)))
    } else {
        Ok(location as u32)
    }
}

pub fn uniform_location(
    context: &WebGlRenderingContext,
    program: &WebGlProgram,
    name: &str,
) -> Result<WebGlUniformLocation> {
    context
        .get_uniform_location(program, name)
        .ok_or_else(|| Error::WebGl(format!("uniform {} not found", name)))
}
