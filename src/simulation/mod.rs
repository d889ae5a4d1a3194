//! SimCore - the tag simulation stepper
//!
//! Orchestration only: every pass lives in its own submodule.
//! - Sleep hysteresis in step/sleep.rs
//! - Gravity integration in step/integrate.rs
//! - Wall + pairwise constraint solving in step/solve.rs
//! - Pointer drag state machine in input/drag.rs
//! - Render snapshot extraction in render/extract.rs
//!
//! The per-frame order is sleep -> integrate -> solve -> extract. The
//! sleep check runs first so it reads the settled velocity the solver
//! left behind on the previous frame; checking after gravity would keep
//! every floor-resting body permanently above the sleep threshold.

use std::collections::HashMap;

use crate::body::{BodyStore, TagTheme};
use crate::config::SimConfig;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/random.rs"]
mod random;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "input/drag.rs"]
mod drag;
#[path = "step/integrate.rs"]
mod integrate;
#[path = "step/sleep.rs"]
mod sleep;
#[path = "step/solve.rs"]
mod solve;
#[path = "step/step.rs"]
mod step;
#[path = "render/extract.rs"]
mod extract;

pub use perf_stats::PerfStats;

use drag::DragState;
use perf_timer::PerfTimer;

/// Floats per body in the render snapshot: x, y, dragging, sleeping
pub const TRANSFORM_STRIDE: usize = 4;

/// The simulation core
pub struct SimCore {
    config: SimConfig,
    bodies: BodyStore,
    drags: HashMap<i32, DragState>,

    // Container bounds; (0, 0) until the host measures its element
    container_w: f32,
    container_h: f32,

    // Render snapshot, rebuilt after every step
    transforms: Vec<f32>,

    // State
    frame: u64,
    rng_state: u32,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SimCore {
    /// Create an empty core with default tuning and no container yet
    pub fn new() -> Self {
        init::create_sim_core(SimConfig::default())
    }

    pub fn with_config(config: SimConfig) -> Self {
        init::create_sim_core(config)
    }

    pub fn load_config_json(&mut self, json: &str) -> Result<(), String> {
        let config = SimConfig::from_json(json)?;
        self.config = config;
        Ok(())
    }

    pub fn config_json(&self) -> String {
        self.config.to_json()
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SimConfig) -> Result<(), String> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Update the container bounds (initial measure and resizes)
    pub fn set_container(&mut self, width: f32, height: f32) {
        settings::set_container(self, width, height);
    }

    pub fn width(&self) -> f32 { self.container_w }

    pub fn height(&self) -> f32 { self.container_h }

    /// False until the container has a real area; `step` no-ops while false
    pub fn is_ready(&self) -> bool {
        self.container_w > 0.0 && self.container_h > 0.0
    }

    pub fn body_count(&self) -> usize { self.bodies.len() }

    pub fn frame(&self) -> u64 { self.frame }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Spawn a tag scattered above the container. Returns the body id.
    pub fn spawn_tag(&mut self, label: &str, theme: TagTheme, w: f32, h: f32) -> u32 {
        init::spawn_tag(self, label, theme, w, h)
    }

    /// Record the measured DOM size of a tag
    pub fn set_body_size(&mut self, id: u32, w: f32, h: f32) -> bool {
        settings::set_body_size(self, id, w, h)
    }

    pub fn tag_label(&self, id: u32) -> Option<&str> {
        self.bodies.get(id).map(|b| b.label.as_str())
    }

    pub fn tag_theme(&self, id: u32) -> Option<TagTheme> {
        self.bodies.get(id).map(|b| b.theme)
    }

    pub fn body_position(&self, id: u32) -> Option<(f32, f32)> {
        self.bodies.get(id).map(|b| (b.pos.x, b.pos.y))
    }

    pub fn body_velocity(&self, id: u32) -> Option<(f32, f32)> {
        self.bodies.get(id).map(|b| (b.vel.x, b.vel.y))
    }

    pub fn body_sleeping(&self, id: u32) -> Option<bool> {
        self.bodies.get(id).map(|b| b.sleeping)
    }

    pub fn body_dragging(&self, id: u32) -> Option<bool> {
        self.bodies.get(id).map(|b| b.dragging)
    }

    // === INPUT API ===

    /// Begin dragging a body. Returns false when the grab is rejected
    /// (unknown or unmeasured body, body already grabbed, pointer busy).
    pub fn pointer_down(&mut self, body_id: u32, pointer_id: i32, x: f32, y: f32, time_ms: f64) -> bool {
        drag::pointer_down(self, body_id, pointer_id, x, y, time_ms)
    }

    /// Move an active drag. Returns false for pointers that own no drag.
    pub fn pointer_move(&mut self, pointer_id: i32, x: f32, y: f32, time_ms: f64) -> bool {
        drag::pointer_move(self, pointer_id, x, y, time_ms)
    }

    /// Release a drag and apply the fling velocity.
    /// Returns the released body id, or 0 for pointers that own no drag.
    pub fn pointer_up(&mut self, pointer_id: i32) -> u32 {
        drag::pointer_up(self, pointer_id)
    }

    /// Cancelled pointers release exactly like `pointer_up`
    pub fn pointer_cancel(&mut self, pointer_id: i32) -> u32 {
        drag::pointer_up(self, pointer_id)
    }

    pub fn active_drag_count(&self) -> usize {
        self.drags.len()
    }

    /// Remove all bodies and drags
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.drags.clear();
        self.transforms.clear();
        self.frame = 0;
    }

    /// Step the simulation forward one frame
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Get pointer to the transform snapshot (for JS rendering)
    pub fn transforms_ptr(&self) -> *const f32 {
        self.transforms.as_ptr()
    }

    /// Snapshot length in f32 elements
    pub fn transforms_len(&self) -> usize {
        self.transforms.len()
    }

    pub fn transforms_len_bytes(&self) -> usize {
        self.transforms.len() * std::mem::size_of::<f32>()
    }
}

impl Default for SimCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
