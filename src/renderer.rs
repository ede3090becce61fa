// Renderer struct that handles WebGl calls for the hero section: one shader
// program drawing the particle dots as POINTS and the connecting edges as LINES,
// both in the same color at different opacities, over a transparent canvas.

use crate::camera::Camera;
use crate::color::Color;
use crate::config::StyleConfig;
use crate::error::{Error, Result};
use crate::field::ParticleField;
use crate::webgl_helpers;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlCanvasElement, WebGlBuffer, WebGlProgram, WebGlRenderingContext, WebGlUniformLocation};

const VERTEX_SHADER: &str = r#"
    attribute vec3 a_Position;

    uniform mat4 u_Proj;
    uniform mat4 u_ModelView;
    uniform float u_PointSize;
    uniform float u_Scale;

    void main() {
        vec4 mv_position = u_ModelView * vec4(a_Position, 1.0);
        gl_Position = u_Proj * mv_position;
        // world-space size shrinks with depth, u_Scale is half the canvas height
        gl_PointSize = u_PointSize * (u_Scale / -mv_position.z);
    }
"#;

const FRAGMENT_SHADER: &str = r#"
    precision mediump float;
    uniform vec4 u_Color;

    void main() {
        gl_FragColor = u_Color;
    }
"#;

struct Uniforms {
    proj: WebGlUniformLocation,
    model_view: WebGlUniformLocation,
    color: WebGlUniformLocation,
    point_size: WebGlUniformLocation,
    scale: WebGlUniformLocation,
}

pub struct Renderer {
    pub context: WebGlRenderingContext,
    program: WebGlProgram,
    uniforms: Uniforms,
    position_location: u32,
    point_buffer: WebGlBuffer,
    line_buffer: WebGlBuffer,
    point_vertex_array: Vec<f32>,
    line_vertex_array: Vec<f32>,
    point_color: [f32; 4],
    line_color: [f32; 4],
    point_size: f32,
    scale: f32,
}

fn context_options() -> Result<js_sys::Object> {
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &"alpha".into(), &JsValue::from_bool(true))?;
    js_sys::Reflect::set(&options, &"antialias".into(), &JsValue::from_bool(true))?;
    Ok(options)
}

impl Renderer {
    // Grabs the WebGl context from the canvas, builds the shader program and
    // the two dynamic vertex buffers
    pub fn new(canvas: &HtmlCanvasElement, style: &StyleConfig) -> Result<Self> {
        let options = context_options()?;
        let context = canvas
            .get_context_with_context_options("webgl", &options)?
            .ok_or_else(|| Error::WebGl("webgl is not available".to_owned()))?
            .dyn_into::<WebGlRenderingContext>()
            .map_err(|_| Error::WebGl("context is not a WebGlRenderingContext".to_owned()))?;

        let program = webgl_helpers::build_program(&context, VERTEX_SHADER, FRAGMENT_SHADER)?;
        let uniforms = Uniforms {
            proj: webgl_helpers::uniform_location(&context, &program, "u_Proj")?,
            model_view: webgl_helpers::uniform_location(&context, &program, "u_ModelView")?,
            color: webgl_helpers::uniform_location(&context, &program, "u_Color")?,
            point_size: webgl_helpers::uniform_location(&context, &program, "u_PointSize")?,
            scale: webgl_helpers::uniform_location(&context, &program, "u_Scale")?,
        };
        let position_location = webgl_helpers::attrib_location(&context, &program, "a_Position")?;

        let create_buffer = || {
            context
                .create_buffer()
                .ok_or_else(|| Error::WebGl("failed to create buffer".to_owned()))
        };
        let point_buffer = create_buffer()?;
        let line_buffer = create_buffer()?;

        context.enable(WebGlRenderingContext::BLEND);
        context.blend_func(
            WebGlRenderingContext::SRC_ALPHA,
            WebGlRenderingContext::ONE_MINUS_SRC_ALPHA,
        );

        let mut renderer = Renderer {
            context,
            program,
            uniforms,
            position_location,
            point_buffer,
            line_buffer,
            point_vertex_array: Vec::new(),
            line_vertex_array: Vec::new(),
            point_color: Color::from_rgb(style.color, style.point_opacity).to_gl(),
            line_color: Color::from_rgb(style.color, style.line_opacity).to_gl(),
            point_size: style.point_size,
            scale: 1.0,
        };
        renderer.resize(canvas.width(), canvas.height());
        Ok(renderer)
    }

    // Canvas dimensions are set by the caller; this only follows them
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context.viewport(0, 0, width as i32, height as i32);
        self.scale = height as f32 / 2.0;
    }

    pub fn clear_screen(&self) {
        self.context.clear_color(0.0, 0.0, 0.0, 0.0);
        self.context.clear(WebGlRenderingContext::COLOR_BUFFER_BIT);
    }

    /// Fails without drawing while the context is lost.
    pub fn render(&mut self, field: &ParticleField, camera: &Camera) -> Result<()> {
        if self.context.is_context_lost() {
            return Err(Error::WebGl("context lost".to_owned()));
        }
        self.clear_screen();
        self.context.use_program(Some(&self.program));

        let model_view = camera.model_view(field.rotation_y() as f32);
        self.context.uniform_matrix4fv_with_f32_array(
            Some(&self.uniforms.proj),
            false,
            camera.projection_mat.as_slice(),
        );
        self.context.uniform_matrix4fv_with_f32_array(
            Some(&self.uniforms.model_view),
            false,
            model_view.as_slice(),
        );
        self.context
            .uniform1f(Some(&self.uniforms.point_size), self.point_size);
        self.context.uniform1f(Some(&self.uniforms.scale), self.scale);

        field.write_point_vertices(&mut self.point_vertex_array);
        self.draw(
            &self.point_buffer,
            &self.point_vertex_array,
            self.point_color,
            WebGlRenderingContext::POINTS,
        );

        // previous frame's lines are gone with the clear; rebuilt from this frame's edges
        field.write_line_vertices(&mut self.line_vertex_array);
        self.draw(
            &self.line_buffer,
            &self.line_vertex_array,
            self.line_color,
            WebGlRenderingContext::LINES,
        );
        Ok(())
    }

    fn draw(&self, buffer: &WebGlBuffer, vertices: &[f32], color: [f32; 4], mode: u32) {
        let vertex_count = (vertices.len() / 3) as i32;
        if vertex_count == 0 {
            return;
        }

        self.context
            .bind_buffer(WebGlRenderingContext::ARRAY_BUFFER, Some(buffer));
        // view must not outlive this block: any allocation can move wasm memory
        unsafe {
            let vertex_array = js_sys::Float32Array::view(vertices);
            self.context.buffer_data_with_array_buffer_view(
                WebGlRenderingContext::ARRAY_BUFFER,
                &vertex_array,
                WebGlRenderingContext::DYNAMIC_DRAW,
            );
        }
        self.context.vertex_attrib_pointer_with_i32(
            self.position_location,
            3,
            WebGlRenderingContext::FLOAT,
            false,
            0,
            0,
        );
        self.context
            .enable_vertex_attrib_array(self.position_location);

        self.context
            .uniform4fv_with_f32_array(Some(&self.uniforms.color), &color);
        self.context.draw_arrays(mode, 0, vertex_count);
    }
}
