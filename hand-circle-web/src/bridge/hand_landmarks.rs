//! Hand landmark parsing
//!
//! MediaPipe Hands delivers 21 landmarks per hand. JS flattens them into a
//! Float32Array of `num_hands × 21 × 3` values (x, y, z). Only the first hand
//! is used, and of that only the thumb and index fingertips.

use thiserror::Error;

use crate::game::HandFrame;
use crate::physics::Point;

// ============================================================================
// HAND LANDMARK INDICES
// ============================================================================

pub const THUMB_TIP: usize = 4;
pub const INDEX_TIP: usize = 8;

/// Landmarks per hand
pub const HAND_LANDMARK_COUNT: usize = 21;
/// Floats per landmark (x, y, z)
const STRIDE: usize = 3;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// A single hand landmark (normalized camera coordinates)
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct HandLandmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl HandLandmark {
    fn read(flat_data: &[f32], index: usize) -> Self {
        let base = index * STRIDE;
        Self {
            x: flat_data[base],
            y: flat_data[base + 1],
            z: flat_data[base + 2],
        }
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    fn to_point(self) -> Point {
        Point::new(f64::from(self.x), f64::from(self.y))
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum LandmarkError {
    #[error("invalid landmark data length: {len} (expected at least {expected})")]
    TooShort { len: usize, expected: usize },
    #[error("non-finite landmark {index}")]
    NonFinite { index: usize },
}

// ============================================================================
// PARSING
// ============================================================================

/// Extract the first hand's fingertips. `Ok(None)` when no hand is present.
pub fn parse_hand_frame(
    flat_data: &[f32],
    num_hands: usize,
) -> Result<Option<HandFrame>, LandmarkError> {
    if num_hands == 0 {
        return Ok(None);
    }

    let expected = HAND_LANDMARK_COUNT * STRIDE;
    if flat_data.len() < expected {
        return Err(LandmarkError::TooShort {
            len: flat_data.len(),
            expected,
        });
    }

    let thumb = HandLandmark::read(flat_data, THUMB_TIP);
    let index = HandLandmark::read(flat_data, INDEX_TIP);
    for (idx, lm) in [(THUMB_TIP, thumb), (INDEX_TIP, index)] {
        if !lm.is_finite() {
            return Err(LandmarkError::NonFinite { index: idx });
        }
    }

    Ok(Some(HandFrame {
        thumb_tip: thumb.to_point(),
        index_tip: index.to_point(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_hand(thumb: (f32, f32), index: (f32, f32)) -> Vec<f32> {
        let mut data = vec![0.5; HAND_LANDMARK_COUNT * STRIDE];
        data[THUMB_TIP * STRIDE] = thumb.0;
        data[THUMB_TIP * STRIDE + 1] = thumb.1;
        data[INDEX_TIP * STRIDE] = index.0;
        data[INDEX_TIP * STRIDE + 1] = index.1;
        data
    }

    #[test]
    fn test_reads_fingertips() {
        let data = flat_hand((0.25, 0.5), (0.75, 0.125));
        let frame = parse_hand_frame(&data, 1).unwrap().unwrap();
        assert_eq!(frame.thumb_tip, Point::new(0.25, 0.5));
        assert_eq!(frame.index_tip, Point::new(0.75, 0.125));
    }

    #[test]
    fn test_only_first_hand_used() {
        let mut data = flat_hand((0.25, 0.25), (0.5, 0.5));
        data.extend(flat_hand((0.9, 0.9), (0.1, 0.1)));
        let frame = parse_hand_frame(&data, 2).unwrap().unwrap();
        assert_eq!(frame.thumb_tip, Point::new(0.25, 0.25));
    }

    #[test]
    fn test_no_hands() {
        assert_eq!(parse_hand_frame(&[], 0), Ok(None));
    }

    #[test]
    fn test_short_data_rejected() {
        let err = parse_hand_frame(&[0.1; 30], 1).unwrap_err();
        assert_eq!(err, LandmarkError::TooShort { len: 30, expected: 63 });
    }

    #[test]
    fn test_nan_rejected() {
        let data = flat_hand((f32::NAN, 0.5), (0.5, 0.5));
        assert_eq!(
            parse_hand_frame(&data, 1),
            Err(LandmarkError::NonFinite { index: THUMB_TIP })
        );
    }
}
