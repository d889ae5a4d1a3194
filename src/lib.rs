//! Tagfall Engine - draggable falling-tag physics in WASM
//!
//! Drives the "tag cloud" hero animation: a handful of rectangular tag
//! chips drop into a container, pile up, go to sleep, and can be grabbed
//! and flung with the pointer. The DOM owns rendering; this crate owns
//! every position.
//!
//! Architecture:
//! - math/       - Vec2 primitives
//! - config/     - tunables (serde, JSON-loadable)
//! - body/       - tag bodies and their store
//! - simulation/ - the core stepper (pure Rust, native-testable)
//! - api/        - wasm-bindgen facade + browser glue (rAF loop, pointer events)

pub mod math;
pub mod config;
pub mod body;
pub mod simulation;
pub mod api;

use wasm_bindgen::prelude::*;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🏷️ Tagfall WASM engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::wasm::Simulation;
#[cfg(target_arch = "wasm32")]
pub use api::{pointer::PointerBindings, scheduler::Scheduler};
pub use body::{demo_tags, BodyStore, TagBody, TagTheme};
pub use config::SimConfig;
pub use math::Vec2;
pub use simulation::{PerfStats, SimCore, TRANSFORM_STRIDE};

// Export theme constants for JS
#[wasm_bindgen]
pub fn theme_dark() -> u8 { body::THEME_DARK }
#[wasm_bindgen]
pub fn theme_orange() -> u8 { body::THEME_ORANGE }
#[wasm_bindgen]
pub fn theme_light() -> u8 { body::THEME_LIGHT }
