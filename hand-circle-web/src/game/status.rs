//! Status badge, hint and score texts shown by the page

use super::session::GamePhase;

pub const WAITING_HINT: &str = "Pinch above to grab the crayon";
pub const DRAWING_HINT: &str = "Keep pinching and draw the cleanest circle you can";
pub const COMPLETED_HINT: &str = "Check your score and play again";
pub const CAMERA_BLOCKED_HINT: &str = "Camera blocked. Enable it to play.";
pub const LOST_TRAIL_MESSAGE: &str = "We lost the trail. Give it another shot.";

/// Badge colour scheme, matched by CSS class on the page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeMode {
    Ready,
    Active,
    Drawing,
    Complete,
    Error,
}

impl BadgeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeMode::Ready => "ready",
            BadgeMode::Active => "active",
            BadgeMode::Drawing => "drawing",
            BadgeMode::Complete => "complete",
            BadgeMode::Error => "error",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    pub mode: BadgeMode,
}

impl Badge {
    const fn new(label: &'static str, mode: BadgeMode) -> Self {
        Self { label, mode }
    }

    pub const CAMERA_ERROR: Badge = Badge::new("No Camera", BadgeMode::Error);
}

/// Badge for the current phase and pinch flag
pub fn badge(phase: GamePhase, pinching: bool) -> Badge {
    match phase {
        GamePhase::Waiting if pinching => Badge::new("Pinched", BadgeMode::Active),
        GamePhase::Waiting => Badge::new("Ready", BadgeMode::Ready),
        GamePhase::Drawing if pinching => Badge::new("Drawing", BadgeMode::Drawing),
        GamePhase::Drawing => Badge::new("Hold", BadgeMode::Drawing),
        GamePhase::Completed => Badge::new("Score", BadgeMode::Complete),
    }
}

pub fn status_hint(phase: GamePhase) -> &'static str {
    match phase {
        GamePhase::Waiting => WAITING_HINT,
        GamePhase::Drawing => DRAWING_HINT,
        GamePhase::Completed => COMPLETED_HINT,
    }
}

/// Score tier message. `None` (no fit) gets the lost-trail line.
pub fn score_message(score: Option<f64>) -> &'static str {
    match score {
        None => LOST_TRAIL_MESSAGE,
        Some(s) if s >= 95.0 => "Perfect orbit. You crushed it.",
        Some(s) if s >= 85.0 => "It's nearly flawless. Stellar work.",
        Some(s) if s >= 70.0 => "Strong circle. Keep refining that flow.",
        Some(s) if s >= 50.0 => "Decent loop. Slow and steady for more points.",
        Some(_) => "Keep practicing. Draw slower for a smoother circle.",
    }
}

pub fn share_text(display_score: u32) -> String {
    format!(
        "I scored {}% in the Hand Circle Challenge! #HandCircleChallenge",
        display_score
    )
}

pub fn screenshot_file_name(unix_ms: f64) -> String {
    format!("hand-circle-score-{}.png", unix_ms.max(0.0).floor() as u64)
}
