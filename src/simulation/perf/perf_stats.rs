use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Clone)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) sleep_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) solve_ms: f64,
    pub(super) extract_ms: f64,

    pub(super) frame: u64,
    pub(super) bodies_total: u32,
    pub(super) bodies_awake: u32,
    pub(super) bodies_sleeping: u32,
    pub(super) bodies_dragging: u32,
    pub(super) active_drags: u32,

    pub(super) wall_contacts: u32,
    pub(super) pairs_checked: u32,
    pub(super) pairs_resolved: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

impl Default for PerfStats {
    fn default() -> Self {
        PerfStats {
            step_ms: 0.0,
            sleep_ms: 0.0,
            integrate_ms: 0.0,
            solve_ms: 0.0,
            extract_ms: 0.0,

            frame: 0,
            bodies_total: 0,
            bodies_awake: 0,
            bodies_sleeping: 0,
            bodies_dragging: 0,
            active_drags: 0,

            wall_contacts: 0,
            pairs_checked: 0,
            pairs_resolved: 0,
        }
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn sleep_ms(&self) -> f64 { self.sleep_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn solve_ms(&self) -> f64 { self.solve_ms }
    #[wasm_bindgen(getter)]
    pub fn extract_ms(&self) -> f64 { self.extract_ms }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
    #[wasm_bindgen(getter)]
    pub fn bodies_total(&self) -> u32 { self.bodies_total }
    #[wasm_bindgen(getter)]
    pub fn bodies_awake(&self) -> u32 { self.bodies_awake }
    #[wasm_bindgen(getter)]
    pub fn bodies_sleeping(&self) -> u32 { self.bodies_sleeping }
    #[wasm_bindgen(getter)]
    pub fn bodies_dragging(&self) -> u32 { self.bodies_dragging }
    #[wasm_bindgen(getter)]
    pub fn active_drags(&self) -> u32 { self.active_drags }

    #[wasm_bindgen(getter)]
    pub fn wall_contacts(&self) -> u32 { self.wall_contacts }
    #[wasm_bindgen(getter)]
    pub fn pairs_checked(&self) -> u32 { self.pairs_checked }
    #[wasm_bindgen(getter)]
    pub fn pairs_resolved(&self) -> u32 { self.pairs_resolved }
}
