//! Game session - the pick / draw / release state machine
//!
//! One `GameSession` owns everything a frame touches: pinch classifier,
//! cursor smoother, stroke and score. The host feeds it one call per
//! detection frame and reads the outputs back for rendering and status text.
//!
//! Phases:
//! - Waiting: pinch-start near the crayon picks it up (→ Drawing)
//! - Drawing: every pinched frame appends the cursor to the stroke;
//!   pinch-end or tracking loss scores the stroke (→ Completed) or, if it is
//!   too short, throws it away (→ Waiting)
//! - Completed: holds the result until `restart`

use thiserror::Error;
use wasm_bindgen::prelude::*;

use super::config::GameConfig;
use super::stroke::Stroke;
use crate::gesture::{PinchClassifier, PinchEdge, SurfaceGeometry};
use crate::physics::{Point, PointSmoother};
use crate::scoring::{score_stroke, ScoreResult};

/// Game phase, exported to JS for status rendering
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Waiting,
    Drawing,
    Completed,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Waiting => "waiting",
            GamePhase::Drawing => "drawing",
            GamePhase::Completed => "completed",
        }
    }
}

/// Misuse of the session API
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("cannot append to the stroke while {}", .0.as_str())]
    NotDrawing(GamePhase),
}

/// Thumb and index fingertips for one frame, normalized camera space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandFrame {
    pub thumb_tip: Point,
    pub index_tip: Point,
}

/// Phase change reported back to the caller
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transition {
    /// Crayon grabbed, stroke started
    PickedUp,
    /// Stroke released before reaching the minimum length
    Aborted { points: usize },
    /// Stroke scored. `None` when no circle could be fitted.
    Completed { result: Option<ScoreResult> },
    /// External restart
    Restarted,
}

/// Crayon pickup zone in surface pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CrayonZone {
    pub anchor: Point,
    pub radius: f64,
}

impl CrayonZone {
    pub fn contains(&self, p: Point) -> bool {
        self.anchor.distance(p) < self.radius
    }
}

pub struct GameSession {
    config: GameConfig,
    geometry: SurfaceGeometry,
    crayon: CrayonZone,

    phase: GamePhase,
    classifier: PinchClassifier,
    smoother: PointSmoother,
    stroke: Stroke,
    cursor: Option<Point>,
    holding_crayon: bool,
    score: Option<ScoreResult>,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        Self {
            geometry: SurfaceGeometry::default(),
            crayon: CrayonZone {
                anchor: Point::default(),
                radius: config.pickup_radius,
            },
            phase: GamePhase::Waiting,
            classifier: PinchClassifier::new(config.pinch_threshold),
            smoother: PointSmoother::new(config.smoothing_factor),
            stroke: Stroke::new(config.min_point_spacing),
            cursor: None,
            holding_crayon: false,
            score: None,
            config,
        }
    }

    // ------------------------------------------------------------------------
    // Frame input
    // ------------------------------------------------------------------------

    /// Process one detection frame. `None` means no hand was detected.
    pub fn process_frame(&mut self, hand: Option<HandFrame>) -> Option<Transition> {
        match hand {
            Some(hand) => self.track(hand),
            None => self.lose_tracking(),
        }
    }

    fn track(&mut self, hand: HandFrame) -> Option<Transition> {
        let reading = self.classifier.classify(hand.thumb_tip, hand.index_tip);
        let raw = self.geometry.to_surface(reading.midpoint);
        let cursor = self.smoother.smooth(raw);
        self.cursor = Some(cursor);

        let transition = self.advance(reading.edge, cursor);

        // An open hand never carries smoothing momentum into the next pinch
        if !reading.edge.is_pinching() {
            self.smoother.reset();
        }
        transition
    }

    fn lose_tracking(&mut self) -> Option<Transition> {
        self.classifier.lose_tracking();
        self.smoother.reset();
        self.cursor = None;

        if self.phase != GamePhase::Drawing {
            return None;
        }
        if self.config.finalize_on_tracking_loss {
            Some(self.finish_stroke())
        } else {
            Some(self.abort_stroke())
        }
    }

    /// Drive the state machine with an already classified edge and smoothed
    /// cursor (surface pixels)
    pub fn advance(&mut self, edge: PinchEdge, cursor: Point) -> Option<Transition> {
        match (self.phase, edge) {
            (GamePhase::Waiting, PinchEdge::Started) => {
                if self.holding_crayon || !self.crayon.contains(cursor) {
                    return None;
                }
                self.start_drawing();
                Some(Transition::PickedUp)
            }
            (GamePhase::Drawing, PinchEdge::Started | PinchEdge::Held) => {
                self.stroke.append(cursor);
                None
            }
            (GamePhase::Drawing, PinchEdge::Ended) => Some(self.finish_stroke()),
            _ => None,
        }
    }

    /// Append a point to the active stroke
    pub fn append_point(&mut self, point: Point) -> Result<bool, SessionError> {
        if self.phase != GamePhase::Drawing {
            return Err(SessionError::NotDrawing(self.phase));
        }
        Ok(self.stroke.append(point))
    }

    // ------------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------------

    fn start_drawing(&mut self) {
        self.phase = GamePhase::Drawing;
        self.holding_crayon = true;
        self.stroke.clear();
        self.score = None;
    }

    /// Release: score a long-enough stroke, otherwise discard it
    fn finish_stroke(&mut self) -> Transition {
        if self.stroke.len() < self.config.min_trail_points {
            return self.abort_stroke();
        }

        self.phase = GamePhase::Completed;
        self.holding_crayon = false;
        self.score = score_stroke(self.stroke.points());
        self.cursor = None;
        Transition::Completed { result: self.score }
    }

    fn abort_stroke(&mut self) -> Transition {
        let points = self.stroke.len();
        self.reset_to_waiting();
        Transition::Aborted { points }
    }

    fn reset_to_waiting(&mut self) {
        self.phase = GamePhase::Waiting;
        self.holding_crayon = false;
        self.stroke.clear();
        self.score = None;
        self.cursor = None;
        self.smoother.reset();
    }

    /// External restart - any phase back to Waiting
    pub fn restart(&mut self) -> Transition {
        self.reset_to_waiting();
        Transition::Restarted
    }

    // ------------------------------------------------------------------------
    // Host-supplied geometry and tuning
    // ------------------------------------------------------------------------

    pub fn set_surface_size(&mut self, width: f64, height: f64) {
        self.geometry = SurfaceGeometry::new(width, height);
    }

    pub fn set_crayon_anchor(&mut self, anchor: Point) {
        self.crayon.anchor = anchor;
    }

    pub fn set_pickup_radius(&mut self, radius: f64) {
        self.crayon.radius = radius;
        self.config.pickup_radius = radius;
    }

    /// Swap in new tuning. Takes effect from the next frame.
    pub fn configure(&mut self, config: GameConfig) {
        self.classifier.set_threshold(config.pinch_threshold);
        self.smoother.set_factor(config.smoothing_factor);
        self.stroke.set_min_spacing(config.min_point_spacing);
        self.crayon.radius = config.pickup_radius;
        self.config = config;
    }

    // ------------------------------------------------------------------------
    // Outputs
    // ------------------------------------------------------------------------

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_pinching(&self) -> bool {
        self.classifier.state().pinching
    }

    pub fn is_holding_crayon(&self) -> bool {
        self.holding_crayon
    }

    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    pub fn stroke(&self) -> &Stroke {
        &self.stroke
    }

    pub fn score(&self) -> Option<ScoreResult> {
        self.score
    }

    /// Final score, 0 when absent
    pub fn latest_score(&self) -> f64 {
        self.score.map_or(0.0, |s| s.score)
    }

    pub fn geometry(&self) -> SurfaceGeometry {
        self.geometry
    }

    pub fn crayon(&self) -> CrayonZone {
        self.crayon
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
