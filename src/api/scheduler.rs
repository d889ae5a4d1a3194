//! requestAnimationFrame frame loop.
//!
//! Owns the step cadence so hosts only have to render: every animation
//! frame steps the shared core, then invokes the optional render
//! callback (with the core borrow already released, so the callback may
//! call back into the simulation freely).

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::simulation::SimCore;

use super::wasm::Simulation;

#[wasm_bindgen]
pub struct Scheduler {
    core: Rc<RefCell<SimCore>>,
    render: Rc<RefCell<Option<js_sys::Function>>>,
    // Pending rAF handle; None while stopped
    raf_id: Rc<Cell<Option<i32>>>,
}

#[wasm_bindgen]
impl Scheduler {
    #[wasm_bindgen(constructor)]
    pub fn new(sim: &Simulation) -> Scheduler {
        Scheduler {
            core: sim.core(),
            render: Rc::new(RefCell::new(None)),
            raf_id: Rc::new(Cell::new(None)),
        }
    }

    /// Called after each step, with no arguments; read the transform
    /// snapshot through the `Simulation` handle to paint.
    pub fn set_render_callback(&self, callback: js_sys::Function) {
        *self.render.borrow_mut() = Some(callback);
    }

    pub fn clear_render_callback(&self) {
        *self.render.borrow_mut() = None;
    }

    pub fn is_running(&self) -> bool {
        self.raf_id.get().is_some()
    }

    /// Idempotent: a running loop is left alone
    pub fn start(&self) {
        if self.raf_id.get().is_some() {
            return;
        }

        let core = self.core.clone();
        let render = self.render.clone();
        let raf_id = self.raf_id.clone();

        let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let g = f.clone();
        *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            // stop() raced this frame; do not re-arm
            if raf_id.get().is_none() {
                return;
            }

            core.borrow_mut().step();

            // Borrow released above: the callback may touch the core
            if let Some(callback) = render.borrow().as_ref() {
                callback.call0(&JsValue::NULL).ok();
            }

            // The callback may have called stop()
            if raf_id.get().is_some() {
                raf_id.set(request_frame(f.borrow().as_ref().unwrap()));
            }
        }) as Box<dyn FnMut()>));

        self.raf_id
            .set(request_frame(g.borrow().as_ref().unwrap()));
    }

    /// Idempotent: cancels the pending frame so nothing fires after this
    pub fn stop(&self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(window) = web_sys::window() {
                window.cancel_animation_frame(id).ok();
            }
        }
    }
}

fn request_frame(f: &Closure<dyn FnMut()>) -> Option<i32> {
    web_sys::window()?
        .request_animation_frame(f.as_ref().unchecked_ref())
        .ok()
}
