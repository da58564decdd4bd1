//! Pinch detection from hand-landmark frames.
//!
//! Frames come from an external hand tracker as 21 normalized 2D points per
//! hand. Only the thumb tip and index fingertip are used: when they come
//! closer than the pinch threshold, the detector raises one edge and stays
//! latched until the pinch is released or the hand disappears.

use tracing::debug;

/// Points per tracked hand.
pub const LANDMARK_COUNT: usize = 21;
/// Index of the thumb tip.
pub const THUMB_TIP: usize = 4;
/// Index of the index fingertip.
pub const INDEX_FINGER_TIP: usize = 8;
/// Default pinch threshold in normalized coordinates.
pub const DEFAULT_PINCH_THRESHOLD: f32 = 0.05;

// ---------------------------------------------------------------------------
// Frames
// ---------------------------------------------------------------------------

/// A normalized landmark position (`0.0..=1.0` on both axes).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Landmark {
    /// Horizontal position.
    pub x: f32,
    /// Vertical position.
    pub y: f32,
}

impl Landmark {
    /// Create a landmark.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another landmark.
    pub fn distance(&self, other: &Landmark) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// The landmarks of one detected hand.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hand {
    /// Landmark points in tracker order.
    pub points: Vec<Landmark>,
}

impl Hand {
    /// A hand at rest in the middle of the frame, with the given tips.
    pub fn with_tips(thumb: Landmark, index: Landmark) -> Self {
        let mut points = vec![Landmark::new(0.5, 0.5); LANDMARK_COUNT];
        points[THUMB_TIP] = thumb;
        points[INDEX_FINGER_TIP] = index;
        Self { points }
    }

    /// Distance between thumb tip and index fingertip, if the hand is complete.
    pub fn pinch_distance(&self) -> Option<f32> {
        if self.points.len() < LANDMARK_COUNT {
            return None;
        }
        Some(self.points[THUMB_TIP].distance(&self.points[INDEX_FINGER_TIP]))
    }
}

/// One tracker frame: zero or more detected hands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LandmarkFrame {
    /// Detected hands; only the first one is used.
    pub hands: Vec<Hand>,
}

impl LandmarkFrame {
    /// A frame with no hand in view.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A frame with a single hand.
    pub fn single(hand: Hand) -> Self {
        Self { hands: vec![hand] }
    }
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Thresholds for gesture detection.
#[derive(Debug, Clone)]
pub struct GestureConfig {
    /// Maximum thumb–index distance (normalized) that counts as a pinch.
    pub pinch_threshold: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            pinch_threshold: DEFAULT_PINCH_THRESHOLD,
        }
    }
}

impl GestureConfig {
    /// Set the pinch threshold.
    pub fn with_pinch_threshold(mut self, threshold: f32) -> Self {
        self.pinch_threshold = threshold;
        self
    }
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Per-frame gesture readings.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GestureState {
    /// Whether a complete hand was in the frame.
    pub hand_present: bool,
    /// Thumb–index distance, when a hand was present.
    pub pinch_distance: Option<f32>,
}

impl GestureState {
    /// Derive the state from a frame.
    pub fn from_frame(frame: &LandmarkFrame) -> Self {
        let pinch_distance = frame.hands.first().and_then(Hand::pinch_distance);
        Self {
            hand_present: pinch_distance.is_some(),
            pinch_distance,
        }
    }

    /// Whether the frame shows a pinch under `threshold`.
    pub fn is_pinching(&self, threshold: f32) -> bool {
        self.pinch_distance.is_some_and(|d| d < threshold)
    }
}

/// Edge-triggered pinch detector.
#[derive(Debug, Clone, Default)]
pub struct PinchDetector {
    config: GestureConfig,
    latched: bool,
    last: GestureState,
}

impl PinchDetector {
    /// Create a detector with the given thresholds.
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            latched: false,
            last: GestureState::default(),
        }
    }

    /// Readings from the most recent frame.
    pub fn state(&self) -> GestureState {
        self.last
    }

    /// Whether a pinch is currently held.
    pub fn is_latched(&self) -> bool {
        self.latched
    }

    /// Process a frame. Returns `true` only on the frame a pinch begins.
    pub fn observe(&mut self, frame: &LandmarkFrame) -> bool {
        self.last = GestureState::from_frame(frame);
        let pinching = self.last.is_pinching(self.config.pinch_threshold);
        let edge = pinching && !self.latched;
        self.latched = pinching;
        if edge {
            debug!(distance = ?self.last.pinch_distance, "pinch started");
        }
        edge
    }

    /// Forget any held pinch.
    pub fn reset(&mut self) {
        self.latched = false;
        self.last = GestureState::default();
    }
}
