//! Hand Circle Challenge - pinch a crayon, draw a circle, get scored
//!
//! Entry point for WASM module. Only contains:
//! - Console logging helpers
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules

use wasm_bindgen::prelude::*;

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

#[cfg(target_arch = "wasm32")]
fn warn(s: &str) {
    web_sys::console::warn_1(&s.into());
}

// Native builds (cargo test) have no console
#[cfg(not(target_arch = "wasm32"))]
fn log(_s: &str) {}

#[cfg(not(target_arch = "wasm32"))]
fn warn(_s: &str) {}

macro_rules! console_log {
    ($($t:tt)*) => ($crate::log(&format_args!($($t)*).to_string()))
}

macro_rules! console_warn {
    ($($t:tt)*) => ($crate::warn(&format_args!($($t)*).to_string()))
}

mod bridge;
mod game;
mod gesture;
mod physics;
mod renderer;
mod scoring;

// Re-export wasm_bindgen types for JS access
pub use bridge::CircleGame;
pub use game::GamePhase;

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize WebGPU on the `#draw-canvas` element - must be called before
/// render_frame
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub async fn init(width: u32, height: u32) -> Result<(), JsValue> {
    renderer::initialize_gpu(width, height).await?;
    console_log!("✅ WebGPU initialized for stroke rendering");
    Ok(())
}

/// Resize the GPU surface after the page layout changes
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn resize_surface(width: u32, height: u32) {
    renderer::resize_surface(width, height);
}

/// Render one frame of the game's current state
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn render_frame(game: &CircleGame) {
    renderer::render_frame(game.session());
}
