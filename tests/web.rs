//! Browser tests for the page behaviors, run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use portfolio_particles::camera::Camera;
use portfolio_particles::config::{HeroConfig, MapConfig, TimingConfig};
use portfolio_particles::error::Error;
use portfolio_particles::field::ParticleField;
use portfolio_particles::particle::Particle;
use portfolio_particles::renderer::Renderer;
use portfolio_particles::{contact, cursor, dom, filter, hero, loader, map, modal, reveal};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{
    Document, Element, Event, HtmlCanvasElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    MouseEvent, MouseEventInit,
};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    dom::document(&dom::window().unwrap()).unwrap()
}

// Replaces the body with `html` so tests do not see each other's elements
fn fixture(html: &str) -> Document {
    let document = document();
    document.body().unwrap().set_inner_html(html);
    document
}

fn html(document: &Document, id: &str) -> HtmlElement {
    dom::by_id(document, id).unwrap()
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        dom::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn cards(document: &Document) -> Vec<HtmlElement> {
    dom::query_all(document, filter::CARD_SELECTOR)
        .unwrap()
        .into_iter()
        .map(|c| c.dyn_into::<HtmlElement>().unwrap())
        .collect()
}

fn submit(document: &Document) {
    let form: HtmlFormElement = dom::by_id(document, contact::FORM_ID).unwrap();
    let event = Event::new("submit").unwrap();
    form.dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
fn missing_ids_name_the_selector() {
    let document = fixture("");
    match dom::by_id::<Element>(&document, "nope") {
        Err(Error::MissingElement(what)) => assert_eq!(what, "#nope"),
        other => panic!("unexpected {:?}", other.map(|_| ())),
    }
}

#[wasm_bindgen_test]
fn modal_opens_and_closes_by_id() {
    let document = fixture(r#"<div id="about" class="modal" style="display: none"></div>"#);
    modal::open(&document, "about").unwrap();
    assert_eq!(dom::style(&html(&document, "about"), "display"), "flex");
    modal::close(&document, "about").unwrap();
    assert_eq!(dom::style(&html(&document, "about"), "display"), "none");
    assert!(matches!(
        modal::open(&document, "missing"),
        Err(Error::MissingElement(_))
    ));
}

#[wasm_bindgen_test]
fn filter_starts_card_transitions() {
    let document = fixture(
        r#"<div class="project-card" id="a" data-category="web"></div>
           <div class="project-card" id="b" data-category="ml"></div>"#,
    );
    let window = dom::window().unwrap();
    let cards = cards(&document);

    filter::apply(&window, &cards, "web", &TimingConfig::default());
    assert_eq!(dom::style(&html(&document, "a"), "display"), "block");
    assert_eq!(dom::style(&html(&document, "b"), "opacity"), "0");

    filter::apply(&window, &cards, filter::ALL, &TimingConfig::default());
    assert_eq!(dom::style(&html(&document, "b"), "display"), "block");
}

#[wasm_bindgen_test]
fn filter_click_moves_active_class() {
    let document = fixture(
        r#"<button class="filter-btn active" id="all" data-filter="all"></button>
           <button class="filter-btn" id="web" data-filter="web"></button>
           <div class="project-card" id="card" data-category="ml"></div>"#,
    );
    let window = dom::window().unwrap();
    filter::install(&window, &document, &TimingConfig::default()).unwrap();
    html(&document, "web").click();
    assert!(html(&document, "web").class_list().contains(filter::ACTIVE_CLASS));
    assert!(!html(&document, "all").class_list().contains(filter::ACTIVE_CLASS));
    assert_eq!(dom::style(&html(&document, "card"), "opacity"), "0");
}

#[wasm_bindgen_test]
fn reveal_fills_skill_bars() {
    let document = fixture(
        r#"<section id="skills">
             <div class="skill-bar-container" data-percent="85%"><div class="progress" id="rust"></div></div>
             <div class="skill-bar-container"><div class="progress" id="unset"></div></div>
           </section>"#,
    );
    let skills: Element = dom::by_id(&document, "skills").unwrap();
    reveal::reveal(&skills).unwrap();
    assert!(skills.class_list().contains(reveal::VISIBLE_CLASS));
    assert_eq!(dom::style(&html(&document, "rust"), "width"), "85%");
    assert_eq!(dom::style(&html(&document, "unset"), "width"), "");
}

#[wasm_bindgen_test]
fn incomplete_contact_form_is_ignored() {
    let document = fixture(
        r#"<form id="contactForm">
             <input id="name" value="Ada">
             <input id="email" value="">
             <button id="send">Send Message</button>
           </form>"#,
    );
    let window = dom::window().unwrap();
    contact::install(&window, &document, &TimingConfig::default()).unwrap();
    submit(&document);
    assert_eq!(html(&document, "send").text_content().unwrap(), "Send Message");
}

#[wasm_bindgen_test]
fn complete_contact_form_shows_sent() {
    let document = fixture(
        r#"<form id="contactForm">
             <input id="name">
             <input id="email">
             <button id="send">Send Message</button>
           </form>"#,
    );
    let window = dom::window().unwrap();
    contact::install(&window, &document, &TimingConfig::default()).unwrap();
    let name: HtmlInputElement = dom::by_id(&document, contact::NAME_ID).unwrap();
    let email: HtmlInputElement = dom::by_id(&document, contact::EMAIL_ID).unwrap();
    name.set_value("Ada");
    email.set_value("ada@example.com");
    submit(&document);
    assert_eq!(html(&document, "send").text_content().unwrap(), contact::SENT_LABEL);
    // leave the page before the reset fires so the delayed callback no-ops
    document.body().unwrap().set_inner_html("");
}

#[wasm_bindgen_test]
fn contact_form_requires_its_fields() {
    let document = fixture(r#"<form id="contactForm"><button></button></form>"#);
    let window = dom::window().unwrap();
    assert!(matches!(
        contact::install(&window, &document, &TimingConfig::default()),
        Err(Error::MissingElement(_))
    ));
}

#[wasm_bindgen_test]
fn loader_requires_the_hero_container() {
    let document = fixture(r#"<div id="loader"></div>"#);
    let window = dom::window().unwrap();
    let result = loader::install(&window, &document, Default::default(), 0);
    match result {
        Err(Error::MissingElement(what)) => assert_eq!(what, format!("#{}", hero::CONTAINER_ID)),
        other => panic!("unexpected {:?}", other),
    }
}

#[wasm_bindgen_test]
async fn filter_transitions_settle() {
    let document = fixture(
        r#"<div class="project-card" id="a" data-category="web"></div>
           <div class="project-card" id="b" data-category="ml"></div>"#,
    );
    let window = dom::window().unwrap();
    filter::apply(&window, &cards(&document), "web", &TimingConfig::default());
    sleep(400).await;
    let (a, b) = (html(&document, "a"), html(&document, "b"));
    assert_eq!(dom::style(&a, "display"), "block");
    assert_eq!(dom::style(&a, "opacity"), "1");
    assert_eq!(dom::style(&b, "display"), "none");
    assert_eq!(dom::style(&b, "opacity"), "0");
}

#[wasm_bindgen_test]
async fn quick_hide_after_show_stays_hidden() {
    let document = fixture(r#"<div class="project-card" id="a" data-category="web"></div>"#);
    let window = dom::window().unwrap();
    let timing = TimingConfig::default();
    filter::apply(&window, &cards(&document), "web", &timing);
    sleep(50).await;
    filter::apply(&window, &cards(&document), "ml", &timing);
    sleep(400).await;
    let a = html(&document, "a");
    assert_eq!(dom::style(&a, "display"), "none");
    assert_eq!(dom::style(&a, "opacity"), "0");
}

#[wasm_bindgen_test]
async fn show_during_hide_stays_shown() {
    let document = fixture(r#"<div class="project-card" id="a" data-category="web"></div>"#);
    let window = dom::window().unwrap();
    let timing = TimingConfig::default();
    filter::apply(&window, &cards(&document), "ml", &timing);
    sleep(220).await;
    filter::apply(&window, &cards(&document), "web", &timing);
    sleep(400).await;
    let a = html(&document, "a");
    assert_eq!(dom::style(&a, "display"), "block");
    assert_eq!(dom::style(&a, "opacity"), "1");
}

#[wasm_bindgen_test]
async fn delayed_callbacks_skip_detached_nodes() {
    let document = fixture(r#"<div id="attached"></div>"#);
    let window = dom::window().unwrap();
    let attached = html(&document, "attached");
    let detached: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
    for node in [attached.clone(), detached.clone()].iter() {
        dom::set_timeout_on(&window, 10, node.clone(), |n| dom::set_style(n, "width", "5px")).unwrap();
    }
    sleep(60).await;
    assert_eq!(dom::style(&attached, "width"), "5px");
    assert_eq!(dom::style(&detached, "width"), "");
}

#[wasm_bindgen_test]
async fn follower_trails_the_cursor() {
    let document = fixture(r#"<div class="cursor" id="dot"></div><div class="cursor-follower" id="ring"></div>"#);
    let window = dom::window().unwrap();
    cursor::install(&window, &document, 50).unwrap();

    let init = MouseEventInit::new();
    init.set_client_x(10);
    init.set_client_y(20);
    let event = MouseEvent::new_with_mouse_event_init_dict("mousemove", &init).unwrap();
    document.dispatch_event(&event).unwrap();

    let (dot, ring) = (html(&document, "dot"), html(&document, "ring"));
    assert_eq!(dom::style(&dot, "left"), "10px");
    assert_eq!(dom::style(&dot, "top"), "20px");
    assert_eq!(dom::style(&ring, "left"), "");
    sleep(120).await;
    assert_eq!(dom::style(&ring, "left"), "10px");
    assert_eq!(dom::style(&ring, "top"), "20px");
}

#[wasm_bindgen_test]
fn backdrop_click_closes_modal() {
    let document = fixture(
        r#"<div id="about" class="modal" style="display: flex">
             <div class="modal-content" id="content"></div>
           </div>"#,
    );
    let window = dom::window().unwrap();
    modal::install(&window, &document).unwrap();
    html(&document, "content").click();
    assert_eq!(dom::style(&html(&document, "about"), "display"), "flex");
    html(&document, "about").click();
    assert_eq!(dom::style(&html(&document, "about"), "display"), "none");
}

#[wasm_bindgen_test]
fn leaflet_throw_is_an_error() {
    let document = fixture(r#"<div id="map"></div>"#);
    let window = dom::window().unwrap();
    let fake = js_sys::Function::new_no_args(
        "return { map: function() { return { setView: function() { throw 'no view'; } }; } };",
    )
    .call0(&JsValue::NULL)
    .unwrap();
    js_sys::Reflect::set(&window, &JsValue::from_str("L"), &fake).unwrap();
    let result = map::install(&window, &document, &MapConfig::default());
    js_sys::Reflect::delete_property(&window, &JsValue::from_str("L")).unwrap();
    match result {
        Err(Error::Js(what)) => assert_eq!(what, "no view"),
        Err(other) => panic!("unexpected {:?}", other),
        Ok(_) => panic!("map installed with a throwing setView"),
    }
}

#[wasm_bindgen_test]
fn map_requires_leaflet() {
    let document = fixture(r#"<div id="map"></div>"#);
    let window = dom::window().unwrap();
    assert!(matches!(
        map::install(&window, &document, &MapConfig::default()),
        Err(Error::MissingGlobal("L"))
    ));
}

#[wasm_bindgen_test]
async fn loaded_page_dismisses_loader() {
    let document = fixture(r#"<div id="loader"></div><div id="canvas-container"></div>"#);
    let window = dom::window().unwrap();
    assert_eq!(document.ready_state(), "complete");
    loader::install(&window, &document, HeroConfig::default(), 10).unwrap();
    let loader_el = html(&document, loader::LOADER_ID);
    assert_eq!(dom::style(&loader_el, "opacity"), "0");
    sleep(60).await;
    assert_eq!(dom::style(&loader_el, "display"), "none");
    document.body().unwrap().set_inner_html("");
}

#[wasm_bindgen_test]
fn renderer_draws_until_context_lost() {
    let document = fixture("");
    let canvas: HtmlCanvasElement = document.create_element("canvas").unwrap().dyn_into().unwrap();
    canvas.set_width(64);
    canvas.set_height(32);
    let config = HeroConfig::default();
    let mut renderer = match Renderer::new(&canvas, &config.style) {
        Ok(renderer) => renderer,
        // headless browsers without webgl
        Err(Error::WebGl(_)) => return,
        Err(other) => panic!("unexpected {:?}", other),
    };
    let field = ParticleField::from_particles(
        config.field.clone(),
        vec![
            Particle::new([0.0, 0.0, 0.0], [0.0, 0.0]),
            Particle::new([0.5, 0.0, 0.0], [0.0, 0.0]),
        ],
    )
    .unwrap();
    let camera = Camera::new(config.camera.clone(), 64, 32).unwrap();
    assert!(renderer.render(&field, &camera).is_ok());

    if let Ok(Some(ext)) = renderer.context.get_extension("WEBGL_lose_context") {
        let lose: js_sys::Function = js_sys::Reflect::get(&ext, &JsValue::from_str("loseContext"))
            .unwrap()
            .dyn_into()
            .unwrap();
        lose.call0(&ext).unwrap();
        assert!(matches!(renderer.render(&field, &camera), Err(Error::WebGl(_))));
    }
}
