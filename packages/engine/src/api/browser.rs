//! Browser page driver (wasm32 only)
//!
//! Looks up the page elements by id, forwards mouse and resize events into
//! the scene queue and runs the scene on `requestAnimationFrame`. Bodies are
//! drawn with canvas 2D; the cup overlay and the gooey SVG filter are plain
//! DOM attribute updates.

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    CanvasRenderingContext2d, Document, Element, EventTarget, HtmlCanvasElement, HtmlElement,
    MouseEvent, Window,
};

use crate::drag::PRIMARY_BUTTON;
use crate::physics_world::PhysicsWorld;
use crate::rigid_body::{BodyView, Shape};
use crate::simulation::Simulation;

type Shared<T> = Rc<RefCell<T>>;

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

fn document(window: &Window) -> Result<Document, JsValue> {
    window.document().ok_or_else(|| JsValue::from_str("no document"))
}

fn element_by_id(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("no #{id}")))
}

fn window_size(window: &Window) -> (f32, f32) {
    let read = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
    (read(window.inner_width()), read(window.inner_height()))
}

fn request_animation_frame(f: &Closure<dyn FnMut()>) {
    let requested = window().and_then(|w| w.request_animation_frame(f.as_ref().unchecked_ref()));
    if let Err(e) = requested {
        console_error!("requestAnimationFrame failed: {:?}", e);
    }
}

fn listen_mouse(
    target: &EventTarget,
    kind: &str,
    handler: impl FnMut(MouseEvent) + 'static,
) -> Result<(), JsValue> {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    target.add_event_listener_with_callback(kind, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// DOM side of the scene
struct Page {
    window: Window,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    overlay: HtmlElement,
    blur: Element,
    matrix: Element,
    /// Filter profile last written to the SVG, if any
    applied_profile: Option<usize>,
}

impl Page {
    fn fit_canvas(&self) -> (f32, f32) {
        let (width, height) = window_size(&self.window);
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        (width, height)
    }

    fn sync_overlay(&self, sim: &Simulation) -> Result<(), JsValue> {
        if let Some(cup) = sim.cup() {
            self.overlay
                .style()
                .set_property("transform", &cup.overlay_transform().css())?;
        }
        Ok(())
    }

    fn sync_filter(&mut self, sim: &Simulation) -> Result<(), JsValue> {
        let index = sim.filter_profile();
        if self.applied_profile == Some(index) {
            return Ok(());
        }
        let profile = sim.filter();
        self.blur
            .set_attribute("stdDeviation", &profile.blur_std_dev.to_string())?;
        self.matrix
            .set_attribute("values", &profile.color_matrix_values())?;
        self.applied_profile = Some(index);
        Ok(())
    }

    fn draw(&self, sim: &Simulation) -> Result<(), JsValue> {
        let viewport = sim.viewport();
        self.ctx
            .clear_rect(0.0, 0.0, viewport.width() as f64, viewport.height() as f64);
        for body in sim.world().bodies() {
            if body.render.visible {
                self.draw_body(&body)?;
            }
        }
        Ok(())
    }

    fn draw_body(&self, body: &BodyView<'_>) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        ctx.save();
        ctx.translate(body.pos.x as f64, body.pos.y as f64)?;
        ctx.rotate(body.angle as f64)?;
        ctx.begin_path();

        match body.shape {
            Shape::Circle { radius } => ctx.arc(0.0, 0.0, radius as f64, 0.0, TAU)?,
            Shape::Rectangle { width, height, chamfer } => {
                trace_rounded_rect(ctx, width as f64, height as f64, chamfer as f64)?
            }
        }

        let style = body.render;
        if style.fill_style != "transparent" {
            ctx.set_fill_style_str(&style.fill_style);
            ctx.fill();
        }
        if style.line_width > 0.0 {
            ctx.set_stroke_style_str(&style.stroke_style);
            ctx.set_line_width(style.line_width as f64);
            ctx.stroke();
        }

        ctx.restore();
        Ok(())
    }
}

/// Rectangle centered on the origin with rounded corners
fn trace_rounded_rect(
    ctx: &CanvasRenderingContext2d,
    width: f64,
    height: f64,
    radius: f64,
) -> Result<(), JsValue> {
    let (x0, y0, x1, y1) = (-width / 2.0, -height / 2.0, width / 2.0, height / 2.0);
    ctx.move_to(x0 + radius, y0);
    ctx.arc_to(x1, y0, x1, y1, radius)?;
    ctx.arc_to(x1, y1, x0, y1, radius)?;
    ctx.arc_to(x0, y1, x0, y0, radius)?;
    ctx.arc_to(x0, y0, x1, y0, radius)?;
    ctx.close_path();
    Ok(())
}

/// Start the boba scene on the page.
///
/// `canvas_id` is the drawing surface, `overlay_id` the element that follows
/// the cup, `blur_id` and `matrix_id` the `feGaussianBlur` and
/// `feColorMatrix` nodes of the gooey filter.
#[wasm_bindgen]
pub fn run(canvas_id: &str, overlay_id: &str, blur_id: &str, matrix_id: &str) -> Result<(), JsValue> {
    let window = window()?;
    let document = document(&window)?;

    let canvas: HtmlCanvasElement = element_by_id(&document, canvas_id)?
        .dyn_into()
        .map_err(|_| JsValue::from_str(&format!("#{canvas_id} is not a canvas")))?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()
        .map_err(|_| JsValue::from_str("2d context has unexpected type"))?;
    let overlay: HtmlElement = element_by_id(&document, overlay_id)?
        .dyn_into()
        .map_err(|_| JsValue::from_str(&format!("#{overlay_id} is not an HtmlElement")))?;
    let blur = element_by_id(&document, blur_id)?;
    let matrix = element_by_id(&document, matrix_id)?;

    let page = Page {
        window: window.clone(),
        canvas,
        ctx,
        overlay,
        blur,
        matrix,
        applied_profile: None,
    };
    let (width, height) = page.fit_canvas();

    let sim: Shared<Simulation> = Rc::new(RefCell::new(Simulation::create(width, height)));
    let page: Shared<Page> = Rc::new(RefCell::new(page));

    {
        let mut s = sim.borrow_mut();
        s.start();
        let mut p = page.borrow_mut();
        p.sync_filter(&s)?;
        p.sync_overlay(&s)?;
    }

    // === INPUT ===
    let canvas_target: EventTarget = page.borrow().canvas.clone().into();

    let s = sim.clone();
    listen_mouse(&canvas_target, "mousedown", move |e| {
        s.borrow_mut()
            .pointer_down(e.offset_x() as f32, e.offset_y() as f32, e.button());
    })?;

    let s = sim.clone();
    listen_mouse(&canvas_target, "mousemove", move |e| {
        let button = (e.buttons() & 1 != 0).then_some(PRIMARY_BUTTON);
        s.borrow_mut()
            .pointer_move(e.offset_x() as f32, e.offset_y() as f32, button);
    })?;

    for kind in ["mouseup", "mouseleave"] {
        let s = sim.clone();
        listen_mouse(&canvas_target, kind, move |_| s.borrow_mut().end_drag())?;
    }

    let (s, p) = (sim.clone(), page.clone());
    let on_resize = Closure::wrap(Box::new(move || {
        let mut p = p.borrow_mut();
        let mut s = s.borrow_mut();
        let (width, height) = p.fit_canvas();
        s.resize(width, height);
        if let Err(e) = p.sync_filter(&s).and_then(|_| p.sync_overlay(&s)) {
            console_warn!("resize sync failed: {:?}", e);
        }
    }) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    on_resize.forget();

    // === ANIMATION LOOP ===
    let f: Shared<Option<Closure<dyn FnMut()>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        {
            let mut s = sim.borrow_mut();
            s.step();
            let mut p = page.borrow_mut();
            let synced = p
                .sync_filter(&s)
                .and_then(|_| p.sync_overlay(&s))
                .and_then(|_| p.draw(&s));
            if let Err(e) = synced {
                console_error!("frame failed: {:?}", e);
            }
        }

        if let Some(cb) = f.borrow().as_ref() {
            request_animation_frame(cb);
        }
    }) as Box<dyn FnMut()>));

    if let Some(cb) = g.borrow().as_ref() {
        request_animation_frame(cb);
    }

    console_log!("boba page running on #{}", canvas_id);
    Ok(())
}
