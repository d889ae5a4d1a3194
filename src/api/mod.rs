//! Public wasm-bindgen surface.
//!
//! `wasm` holds the `Simulation` facade (compiles on every target so the
//! native test suite can drive it). `scheduler` and `pointer` are
//! browser glue and only exist on wasm32.

pub mod wasm;

#[cfg(target_arch = "wasm32")]
pub mod pointer;
#[cfg(target_arch = "wasm32")]
pub mod scheduler;
