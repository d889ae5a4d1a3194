//! Pointer event wiring.
//!
//! Each tag element gets a `pointerdown` listener; move/up/cancel live
//! on the container so a fast drag that leaves the tag keeps working.
//! Coordinates are translated to container-local pixels before they
//! reach the core. Pointer capture is taken on accepted grabs and
//! released best-effort (a capture lost to the browser is harmless).
//!
//! Listener closures are leaked with `forget`; bindings live for the
//! page like the elements they are attached to.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::simulation::SimCore;

use super::wasm::Simulation;

#[wasm_bindgen]
pub struct PointerBindings {
    core: Rc<RefCell<SimCore>>,
    container: web_sys::HtmlElement,
    // Element that captured each active pointer, for release on up
    captured: Rc<RefCell<HashMap<i32, web_sys::Element>>>,
}

#[wasm_bindgen]
impl PointerBindings {
    #[wasm_bindgen(constructor)]
    pub fn new(sim: &Simulation, container: web_sys::HtmlElement) -> PointerBindings {
        PointerBindings {
            core: sim.core(),
            container,
            captured: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    /// Wire a tag element to its body id
    pub fn bind_tag(&self, element: web_sys::HtmlElement, body_id: u32) {
        let core = self.core.clone();
        let container = self.container.clone();
        let captured = self.captured.clone();
        let target: web_sys::Element = element.clone().into();

        let down = Closure::wrap(Box::new(move |e: web_sys::PointerEvent| {
            e.prevent_default();
            let (x, y) = container_coords(&container, &e);
            let accepted = core
                .borrow_mut()
                .pointer_down(body_id, e.pointer_id(), x, y, e.time_stamp());
            if accepted {
                target.set_pointer_capture(e.pointer_id()).ok();
                captured
                    .borrow_mut()
                    .insert(e.pointer_id(), target.clone());
            }
        }) as Box<dyn FnMut(web_sys::PointerEvent)>);
        element
            .add_event_listener_with_callback("pointerdown", down.as_ref().unchecked_ref())
            .ok();
        down.forget();
    }

    /// Install the container-level move/up/cancel listeners
    pub fn attach(&self) {
        let core = self.core.clone();
        let container = self.container.clone();
        let pointermove = Closure::wrap(Box::new(move |e: web_sys::PointerEvent| {
            let (x, y) = container_coords(&container, &e);
            core.borrow_mut()
                .pointer_move(e.pointer_id(), x, y, e.time_stamp());
        }) as Box<dyn FnMut(web_sys::PointerEvent)>);
        self.container
            .add_event_listener_with_callback("pointermove", pointermove.as_ref().unchecked_ref())
            .ok();
        pointermove.forget();

        for event in ["pointerup", "pointercancel"] {
            let core = self.core.clone();
            let captured = self.captured.clone();
            let release = Closure::wrap(Box::new(move |e: web_sys::PointerEvent| {
                core.borrow_mut().pointer_up(e.pointer_id());
                if let Some(el) = captured.borrow_mut().remove(&e.pointer_id()) {
                    el.release_pointer_capture(e.pointer_id()).ok();
                }
            }) as Box<dyn FnMut(web_sys::PointerEvent)>);
            self.container
                .add_event_listener_with_callback(event, release.as_ref().unchecked_ref())
                .ok();
            release.forget();
        }
    }
}

fn container_coords(container: &web_sys::HtmlElement, e: &web_sys::PointerEvent) -> (f32, f32) {
    let rect = container.get_bounding_client_rect();
    (
        e.client_x() as f32 - rect.left() as f32,
        e.client_y() as f32 - rect.top() as f32,
    )
}
