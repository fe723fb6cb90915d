//! Game module - session state machine, stroke storage and status texts
//!
//! Re-exports only. All logic in submodules.

mod config;
mod session;
mod status;
mod stroke;

pub use config::{GameConfig, MIN_POINT_SPACING, MIN_TRAIL_POINTS, PICKUP_RADIUS};
pub use session::{CrayonZone, GamePhase, GameSession, HandFrame, SessionError, Transition};
pub use status::{
    badge, score_message, screenshot_file_name, share_text, status_hint, Badge, BadgeMode,
    CAMERA_BLOCKED_HINT, LOST_TRAIL_MESSAGE,
};
pub use stroke::Stroke;
