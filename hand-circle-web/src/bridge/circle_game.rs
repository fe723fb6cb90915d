//! `CircleGame` - the session handle held by JavaScript
//!
//! JS creates one `CircleGame`, calls `process_hands` from the MediaPipe
//! results callback and passes the same handle to `render_frame` from its
//! animation loop. All mutation goes through this object.

use wasm_bindgen::prelude::*;

use super::hand_landmarks::parse_hand_frame;
use crate::game::{
    self, Badge, GameConfig, GamePhase, GameSession, SessionError, Transition,
    CAMERA_BLOCKED_HINT,
};
use crate::physics::Point;

impl From<SessionError> for JsValue {
    fn from(err: SessionError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[wasm_bindgen]
pub struct CircleGame {
    session: GameSession,
    camera_available: bool,
}

#[wasm_bindgen]
impl CircleGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            session: GameSession::default(),
            camera_available: true,
        }
    }

    // ------------------------------------------------------------------------
    // Frame input
    // ------------------------------------------------------------------------

    /// Called from the MediaPipe results callback with a flat Float32Array
    /// (`num_hands × 21 × 3`). Returns true when the phase changed.
    pub fn process_hands(&mut self, flat_data: &[f32], num_hands: usize) -> bool {
        let hand = match parse_hand_frame(flat_data, num_hands) {
            Ok(hand) => hand,
            Err(err) => {
                console_warn!("⚠️ {}", err);
                None
            }
        };

        match self.session.process_frame(hand) {
            Some(transition) => {
                log_transition(&transition);
                true
            }
            None => false,
        }
    }

    // ------------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------------

    pub fn restart(&mut self) {
        let transition = self.session.restart();
        log_transition(&transition);
    }

    /// Camera or detector failed to start - the game stays idle
    pub fn report_camera_unavailable(&mut self) {
        self.camera_available = false;
        console_warn!("📷 Camera unavailable, waiting without input");
    }

    /// Append a point directly (debug / replay). Errors outside Drawing.
    pub fn append_point(&mut self, x: f64, y: f64) -> Result<bool, JsValue> {
        Ok(self.session.append_point(Point::new(x, y))?)
    }

    // ------------------------------------------------------------------------
    // Layout and tuning
    // ------------------------------------------------------------------------

    /// Drawing surface size in CSS pixels (on load and on resize)
    pub fn set_surface_size(&mut self, width: f64, height: f64) {
        self.session.set_surface_size(width, height);
    }

    /// Crayon centre in surface pixels
    pub fn set_crayon_anchor(&mut self, x: f64, y: f64) {
        self.session.set_crayon_anchor(Point::new(x, y));
    }

    pub fn set_pickup_radius(&mut self, radius: f64) {
        self.session.set_pickup_radius(radius);
    }

    /// Override tuning; omitted values keep their current setting
    pub fn configure(
        &mut self,
        pinch_threshold: Option<f64>,
        pickup_radius: Option<f64>,
        min_trail_points: Option<u32>,
        finalize_on_tracking_loss: Option<bool>,
    ) {
        let current = self.session.config().clone();
        let config = GameConfig {
            pinch_threshold: pinch_threshold.unwrap_or(current.pinch_threshold),
            pickup_radius: pickup_radius.unwrap_or(current.pickup_radius),
            min_trail_points: min_trail_points
                .map_or(current.min_trail_points, |n| n as usize),
            finalize_on_tracking_loss: finalize_on_tracking_loss
                .unwrap_or(current.finalize_on_tracking_loss),
            ..current
        };
        console_log!(
            "⚙️ Game tuning: pinch<{:.3} pickup<{:.0}px min_points={} finalize_on_loss={}",
            config.pinch_threshold,
            config.pickup_radius,
            config.min_trail_points,
            config.finalize_on_tracking_loss
        );
        self.session.configure(config);
    }

    // ------------------------------------------------------------------------
    // Outputs
    // ------------------------------------------------------------------------

    pub fn phase(&self) -> GamePhase {
        self.session.phase()
    }

    pub fn is_pinching(&self) -> bool {
        self.session.is_pinching()
    }

    pub fn is_holding_crayon(&self) -> bool {
        self.session.is_holding_crayon()
    }

    /// [x, y] of the smoothed cursor, or None when no hand is tracked
    pub fn cursor(&self) -> Option<Vec<f64>> {
        self.session.cursor().map(|p| vec![p.x, p.y])
    }

    /// Flat [x0, y0, x1, y1, ...] of the current stroke
    pub fn stroke_points(&self) -> Vec<f64> {
        self.session.stroke().as_flat()
    }

    /// [center_x, center_y, radius, score], or None when unscored
    pub fn score_result(&self) -> Option<Vec<f64>> {
        self.session
            .score()
            .map(|r| vec![r.center.x, r.center.y, r.radius, r.score])
    }

    pub fn latest_score(&self) -> f64 {
        self.session.latest_score()
    }

    pub fn display_score(&self) -> u32 {
        self.session.score().map_or(0, |r| r.display_score())
    }

    pub fn badge_label(&self) -> String {
        self.badge().label.to_string()
    }

    pub fn badge_mode(&self) -> String {
        self.badge().mode.as_str().to_string()
    }

    pub fn status_hint(&self) -> String {
        if !self.camera_available {
            return CAMERA_BLOCKED_HINT.to_string();
        }
        game::status_hint(self.session.phase()).to_string()
    }

    /// Result line for the final screen; None until a stroke is completed
    pub fn score_message(&self) -> Option<String> {
        if self.session.phase() != GamePhase::Completed {
            return None;
        }
        let score = self.session.score().map(|r| r.score);
        Some(game::score_message(score).to_string())
    }

    pub fn share_text(&self) -> String {
        game::share_text(self.display_score())
    }

    pub fn screenshot_file_name(&self) -> String {
        game::screenshot_file_name(js_sys::Date::now())
    }
}

impl CircleGame {
    /// Read-only view for the renderer
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub(crate) fn session(&self) -> &GameSession {
        &self.session
    }

    fn badge(&self) -> Badge {
        if !self.camera_available {
            return Badge::CAMERA_ERROR;
        }
        game::badge(self.session.phase(), self.session.is_pinching())
    }
}

impl Default for CircleGame {
    fn default() -> Self {
        Self::new()
    }
}

fn log_transition(transition: &Transition) {
    match transition {
        Transition::PickedUp => console_log!("🖍️ Crayon picked up"),
        Transition::Aborted { points } => {
            console_log!("↩️ Stroke discarded ({} points)", points)
        }
        Transition::Completed { result: Some(result) } => console_log!(
            "🎯 Circle scored {:.1} (r={:.1} at {:.0},{:.0})",
            result.score,
            result.radius,
            result.center.x,
            result.center.y
        ),
        Transition::Completed { result: None } => console_log!("❌ No circle fit"),
        Transition::Restarted => console_log!("🔄 Restarted"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_hand(cx: f32, cy: f32, gap: f32) -> Vec<f32> {
        let mut data = vec![0.5; 63];
        data[12] = cx + gap / 2.0; // thumb tip x
        data[13] = cy;
        data[24] = cx - gap / 2.0; // index tip x
        data[25] = cy;
        data
    }

    #[test]
    fn test_badge_and_hint_follow_pinch() {
        let mut game = CircleGame::new();
        game.set_surface_size(600.0, 600.0);
        assert_eq!(game.badge_label(), "Ready");

        // Pinch far from the crayon (anchor defaults to the origin)
        game.process_hands(&flat_hand(0.2, 0.8, 0.02), 1);
        assert!(game.is_pinching());
        assert_eq!(game.badge_label(), "Pinched");
        assert_eq!(game.badge_mode(), "active");
        assert_eq!(game.phase(), GamePhase::Waiting);
        assert!(game.score_message().is_none());
    }

    #[test]
    fn test_pickup_from_flat_landmarks() {
        let mut game = CircleGame::new();
        game.set_surface_size(600.0, 600.0);
        // x=0.5 mirrors to 300 px
        game.set_crayon_anchor(300.0, 300.0);

        assert!(game.process_hands(&flat_hand(0.5, 0.5, 0.02), 1));
        assert_eq!(game.phase(), GamePhase::Drawing);
        assert_eq!(game.badge_label(), "Drawing");
        assert!(game.stroke_points().is_empty());

        let cursor = game.cursor().expect("cursor visible");
        assert!((cursor[0] - 300.0).abs() < 1e-3);
    }

    #[test]
    fn test_malformed_frame_counts_as_lost_hand() {
        let mut game = CircleGame::new();
        assert!(!game.process_hands(&[0.1, 0.2], 1));
        assert!(game.cursor().is_none());
    }

    #[test]
    fn test_camera_failure_texts() {
        let mut game = CircleGame::new();
        game.report_camera_unavailable();
        assert_eq!(game.badge_label(), "No Camera");
        assert_eq!(game.badge_mode(), "error");
        assert_eq!(game.status_hint(), CAMERA_BLOCKED_HINT);
    }

    #[test]
    fn test_configure_keeps_unset_values() {
        let mut game = CircleGame::new();
        game.configure(None, Some(150.0), Some(20), None);
        let config = game.session().config();
        assert_eq!(config.pickup_radius, 150.0);
        assert_eq!(config.min_trail_points, 20);
        assert_eq!(config.pinch_threshold, GameConfig::default().pinch_threshold);
        assert!(config.finalize_on_tracking_loss);
        assert_eq!(game.session().crayon().radius, 150.0);
    }

    #[test]
    fn test_unscored_share_text() {
        let game = CircleGame::new();
        assert_eq!(game.display_score(), 0);
        assert!(game.share_text().starts_with("I scored 0%"));
        assert!(game.score_result().is_none());
    }
}
