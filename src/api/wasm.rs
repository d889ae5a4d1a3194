use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::body::TagTheme;
use crate::simulation::{PerfStats, SimCore, TRANSFORM_STRIDE};

/// JS-facing handle on the simulation.
///
/// The core sits behind `Rc<RefCell<..>>` so the frame scheduler and the
/// pointer bindings can share it with the host's own handle.
#[wasm_bindgen]
pub struct Simulation {
    core: Rc<RefCell<SimCore>>,
}

impl Simulation {
    pub(crate) fn core(&self) -> Rc<RefCell<SimCore>> {
        self.core.clone()
    }
}

#[wasm_bindgen]
impl Simulation {
    /// Create an empty simulation with default tuning.
    /// Call `set_container` once the host element has been measured.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: Rc::new(RefCell::new(SimCore::new())),
        }
    }

    /// Update the container bounds (initial measure and resizes)
    pub fn set_container(&self, width: f32, height: f32) {
        self.core.borrow_mut().set_container(width, height);
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 { self.core.borrow().width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 { self.core.borrow().height() }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize { self.core.borrow().body_count() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.borrow().frame() }

    /// True once the container has a real area; `step` idles until then
    pub fn is_ready(&self) -> bool {
        self.core.borrow().is_ready()
    }

    /// Replace the tuning from a JSON blob (camelCase keys, missing
    /// fields keep their defaults)
    pub fn load_config_json(&self, json: String) -> Result<(), JsValue> {
        self.core
            .borrow_mut()
            .load_config_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    pub fn config_json(&self) -> String {
        self.core.borrow().config_json()
    }

    /// Spawn a tag scattered above the container.
    /// Returns the body id, or 0 for an unknown theme constant.
    pub fn spawn_tag(&self, label: String, theme: u8, width: f32, height: f32) -> u32 {
        let Some(theme) = TagTheme::from_u8(theme) else {
            return 0;
        };
        self.core.borrow_mut().spawn_tag(&label, theme, width, height)
    }

    /// Record the measured DOM size of a tag
    pub fn set_body_size(&self, id: u32, width: f32, height: f32) -> bool {
        self.core.borrow_mut().set_body_size(id, width, height)
    }

    pub fn tag_label(&self, id: u32) -> Option<String> {
        self.core.borrow().tag_label(id).map(|s| s.to_string())
    }

    pub fn tag_theme(&self, id: u32) -> Option<u8> {
        self.core.borrow().tag_theme(id).map(|t| t.as_u8())
    }

    pub fn body_x(&self, id: u32) -> Option<f32> {
        self.core.borrow().body_position(id).map(|(x, _)| x)
    }

    pub fn body_y(&self, id: u32) -> Option<f32> {
        self.core.borrow().body_position(id).map(|(_, y)| y)
    }

    pub fn body_sleeping(&self, id: u32) -> Option<bool> {
        self.core.borrow().body_sleeping(id)
    }

    pub fn body_dragging(&self, id: u32) -> Option<bool> {
        self.core.borrow().body_dragging(id)
    }

    // === INPUT API ===
    // Coordinates are container-local pixels; timestamps are event
    // `timeStamp` milliseconds.

    pub fn pointer_down(&self, body_id: u32, pointer_id: i32, x: f32, y: f32, time_ms: f64) -> bool {
        self.core
            .borrow_mut()
            .pointer_down(body_id, pointer_id, x, y, time_ms)
    }

    pub fn pointer_move(&self, pointer_id: i32, x: f32, y: f32, time_ms: f64) -> bool {
        self.core.borrow_mut().pointer_move(pointer_id, x, y, time_ms)
    }

    /// Returns the released body id, or 0 for pointers that own no drag
    pub fn pointer_up(&self, pointer_id: i32) -> u32 {
        self.core.borrow_mut().pointer_up(pointer_id)
    }

    pub fn pointer_cancel(&self, pointer_id: i32) -> u32 {
        self.core.borrow_mut().pointer_cancel(pointer_id)
    }

    pub fn active_drag_count(&self) -> usize {
        self.core.borrow().active_drag_count()
    }

    /// Remove all bodies and drags
    pub fn clear(&self) {
        self.core.borrow_mut().clear();
    }

    /// Step the simulation forward one frame
    pub fn step(&self) {
        self.core.borrow_mut().step();
    }

    // === RENDER SNAPSHOT ===
    // One `transform_stride` block of f32s per body, in spawn order:
    // x, y, dragging flag, sleeping flag. Rebuilt after every step; JS
    // views it zero-copy through wasm memory.

    pub fn transforms_ptr(&self) -> *const f32 {
        self.core.borrow().transforms_ptr()
    }

    pub fn transforms_len(&self) -> usize {
        self.core.borrow().transforms_len()
    }

    pub fn transforms_len_bytes(&self) -> usize {
        self.core.borrow().transforms_len_bytes()
    }

    pub fn transform_stride(&self) -> usize {
        TRANSFORM_STRIDE
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&self, enabled: bool) {
        self.core.borrow_mut().enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.borrow().get_perf_stats()
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}
