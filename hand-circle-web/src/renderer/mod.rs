//! Renderer module - WebGPU rendering for the crayon stroke and score overlay
//!
//! Re-exports only. All logic in submodules. Scene building is plain geometry
//! and runs natively in tests; GPU state and frame submission are web-only.

#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod scene;
mod shapes;

#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod state;

#[cfg(target_arch = "wasm32")]
pub use frame::render_frame;
#[cfg(target_arch = "wasm32")]
pub use state::{initialize_gpu, resize_surface, GpuStateError};
