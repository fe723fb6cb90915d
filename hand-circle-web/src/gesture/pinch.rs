//! Pinch detection with edge tracking
//!
//! A pinch is thumb tip and index tip closer than a threshold in normalized
//! camera space. The session reacts to edges (start / end), not the raw flag.

use crate::physics::Point;

/// Default pinch threshold (normalized units, strict `<`)
pub const PINCH_THRESHOLD: f64 = 0.045;

/// Per-frame pinch transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinchEdge {
    /// Not pinching now or last frame
    Idle,
    /// Rising edge - pinch began this frame
    Started,
    /// Pinching now and last frame
    Held,
    /// Falling edge - pinch released this frame
    Ended,
}

impl PinchEdge {
    pub fn from_states(previous: bool, current: bool) -> Self {
        match (previous, current) {
            (false, false) => PinchEdge::Idle,
            (false, true) => PinchEdge::Started,
            (true, true) => PinchEdge::Held,
            (true, false) => PinchEdge::Ended,
        }
    }

    pub fn is_pinching(&self) -> bool {
        matches!(self, PinchEdge::Started | PinchEdge::Held)
    }
}

/// Current and previous pinch flags
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GestureState {
    pub pinching: bool,
    pub previous_pinching: bool,
}

impl GestureState {
    pub fn edge(&self) -> PinchEdge {
        PinchEdge::from_states(self.previous_pinching, self.pinching)
    }
}

/// Result of classifying one frame of fingertips
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchReading {
    pub edge: PinchEdge,
    /// Thumb-index distance (normalized)
    pub distance: f64,
    /// Normalized midpoint of the two tips, before mirroring and smoothing
    pub midpoint: Point,
}

/// Stateful pinch classifier - remembers the previous frame's flag
pub struct PinchClassifier {
    threshold: f64,
    state: GestureState,
}

impl PinchClassifier {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            state: GestureState::default(),
        }
    }

    pub fn set_threshold(&mut self, threshold: f64) {
        self.threshold = threshold;
    }

    /// Classify one frame. Call exactly once per detection frame.
    pub fn classify(&mut self, thumb_tip: Point, index_tip: Point) -> PinchReading {
        let distance = thumb_tip.distance(index_tip);
        self.push(distance < self.threshold);

        PinchReading {
            edge: self.state.edge(),
            distance,
            midpoint: thumb_tip.midpoint(index_tip),
        }
    }

    /// Hand left the frame - counts as not pinching
    pub fn lose_tracking(&mut self) -> PinchEdge {
        self.push(false);
        self.state.edge()
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn reset(&mut self) {
        self.state = GestureState::default();
    }

    fn push(&mut self, pinching: bool) {
        self.state.previous_pinching = self.state.pinching;
        self.state.pinching = pinching;
    }
}

impl Default for PinchClassifier {
    fn default() -> Self {
        Self::new(PINCH_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tips(distance: f64) -> (Point, Point) {
        (Point::new(0.0, 0.0), Point::new(distance, 0.0))
    }

    #[test]
    fn test_threshold_is_strict() {
        let mut classifier = PinchClassifier::default();
        let (thumb, index) = tips(0.045);
        assert_eq!(classifier.classify(thumb, index).edge, PinchEdge::Idle);

        let mut classifier = PinchClassifier::default();
        let (thumb, index) = tips(0.0449);
        assert_eq!(classifier.classify(thumb, index).edge, PinchEdge::Started);
    }

    #[test]
    fn test_edges_over_sequence() {
        let mut classifier = PinchClassifier::default();
        let (open_t, open_i) = tips(0.2);
        let (closed_t, closed_i) = tips(0.01);

        assert_eq!(classifier.classify(open_t, open_i).edge, PinchEdge::Idle);
        assert_eq!(classifier.classify(closed_t, closed_i).edge, PinchEdge::Started);
        assert_eq!(classifier.classify(closed_t, closed_i).edge, PinchEdge::Held);
        assert_eq!(classifier.classify(open_t, open_i).edge, PinchEdge::Ended);
        assert_eq!(classifier.classify(open_t, open_i).edge, PinchEdge::Idle);
    }

    #[test]
    fn test_lost_tracking_ends_pinch() {
        let mut classifier = PinchClassifier::default();
        let (t, i) = tips(0.01);
        classifier.classify(t, i);
        assert_eq!(classifier.lose_tracking(), PinchEdge::Ended);
        assert_eq!(classifier.lose_tracking(), PinchEdge::Idle);
    }

    #[test]
    fn test_midpoint_reported() {
        let mut classifier = PinchClassifier::default();
        let reading = classifier.classify(Point::new(0.40, 0.50), Point::new(0.42, 0.54));
        assert!((reading.midpoint.x - 0.41).abs() < 1e-12);
        assert!((reading.midpoint.y - 0.52).abs() < 1e-12);
        assert!(reading.edge.is_pinching());
    }
}
