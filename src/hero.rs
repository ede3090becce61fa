// Hero section background. `Hero` is the single owned context for the particle
// field, its camera and its renderer; the animation loop and the resize
// listener share it through one Rc<RefCell<..>> for the lifetime of the page.

use crate::camera::Camera;
use crate::config::HeroConfig;
use crate::dom;
use crate::error::{Error, Result};
use crate::field::ParticleField;
use crate::renderer::Renderer;
use crate::Timer;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{error, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlCanvasElement, Window};

pub const CONTAINER_ID: &str = "canvas-container";

pub struct Hero {
    window: Window,
    canvas: HtmlCanvasElement,
    field: ParticleField,
    camera: Camera,
    renderer: Renderer,
    profile: bool,
    render_failed: bool,
}

fn viewport(window: &Window) -> Result<(u32, u32)> {
    let dimension = |value: std::result::Result<JsValue, JsValue>| -> Result<u32> {
        value?
            .as_f64()
            .map(|v| v.max(0.0) as u32)
            .ok_or_else(|| Error::Js("viewport size is not a number".to_owned()))
    };
    Ok((dimension(window.inner_width())?, dimension(window.inner_height())?))
}

fn size_canvas(canvas: &HtmlCanvasElement, width: u32, height: u32) {
    canvas.set_width(width);
    canvas.set_height(height);
    dom::set_style(canvas, "width", &format!("{}px", width));
    dom::set_style(canvas, "height", &format!("{}px", height));
}

impl Hero {
    // Creates a viewport-sized canvas inside `container` and seeds the field
    pub fn mount(window: &Window, container: &Element, config: &HeroConfig) -> Result<Self> {
        let document = dom::document(window)?;
        let (width, height) = viewport(window)?;
        let camera = Camera::new(config.camera.clone(), width, height)?;

        let canvas = document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| Error::WebGl("could not create a canvas".to_owned()))?;
        size_canvas(&canvas, width, height);
        container.append_child(&canvas)?;

        let renderer = Renderer::new(&canvas, &config.style)?;
        let field = ParticleField::new(config.field.clone(), &mut rand::thread_rng())?;
        info!(
            width,
            height,
            particles = field.particles().len(),
            "hero mounted"
        );

        Ok(Hero {
            window: window.clone(),
            canvas,
            field,
            camera,
            renderer,
            profile: config.profile,
            render_failed: false,
        })
    }

    pub fn frame(&mut self) {
        let _timer = if self.profile {
            Some(Timer::new("Hero::frame"))
        } else {
            None
        };
        self.field.step();
        // logged once per failure streak
        match self.renderer.render(&self.field, &self.camera) {
            Ok(()) => self.render_failed = false,
            Err(e) => {
                if !self.render_failed {
                    error!(error = %e, "render failed");
                }
                self.render_failed = true;
            }
        }
    }

    pub fn resize(&mut self) -> Result<()> {
        let (width, height) = viewport(&self.window)?;
        if width == 0 || height == 0 {
            warn!(width, height, "ignoring resize to an empty viewport");
            return Ok(());
        }
        self.camera.resize(width, height)?;
        size_canvas(&self.canvas, width, height);
        self.renderer.resize(width, height);
        Ok(())
    }
}

fn request_animation_frame(window: &Window, f: &Closure<dyn FnMut()>) -> Result<i32> {
    Ok(window.request_animation_frame(f.as_ref().unchecked_ref())?)
}

/// Starts the self-rescheduling frame loop and the resize listener. Runs until the page goes away.
pub fn start(hero: Hero) -> Result<()> {
    let window = hero.window.clone();
    let hero = Rc::new(RefCell::new(hero));

    {
        let hero = hero.clone();
        dom::listen(&window, "resize", move |_| {
            if let Err(e) = hero.borrow_mut().resize() {
                error!(error = %e, "resize failed");
            }
        })?;
    }

    let next: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let first = next.clone();
    let loop_window = window.clone();
    *first.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Some(callback) = next.borrow().as_ref() {
            if let Err(e) = request_animation_frame(&loop_window, callback) {
                error!(error = %e, "animation loop stopped");
                return;
            }
        }
        hero.borrow_mut().frame();
    }) as Box<dyn FnMut()>));

    match first.borrow().as_ref() {
        Some(callback) => request_animation_frame(&window, callback)?,
        None => return Err(Error::Js("animation callback missing".to_owned())),
    };
    info!("hero animation started");
    Ok(())
}
