//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod circle_game;
mod hand_landmarks;

pub use circle_game::CircleGame;

pub use hand_landmarks::{
    parse_hand_frame,
    HandLandmark,
    LandmarkError,
    HAND_LANDMARK_COUNT,
    INDEX_TIP,
    THUMB_TIP,
};
