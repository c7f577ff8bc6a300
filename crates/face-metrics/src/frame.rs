//! Landmark frame types

use serde::{Deserialize, Serialize};

/// A single 2D face-mesh keypoint, in frame coordinate units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another landmark
    pub fn distance(&self, other: &Landmark) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// One inference cycle's worth of face-mesh keypoints.
///
/// Indices follow the upstream model's topology (MediaPipe FaceMesh, 468
/// points); the index sets in [`crate::mesh`] select the eye and mouth
/// points. Frames are read-only and discarded after metric extraction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LandmarkFrame {
    pub keypoints: Vec<Landmark>,
}

impl LandmarkFrame {
    pub fn new(keypoints: Vec<Landmark>) -> Self {
        Self { keypoints }
    }

    pub fn is_empty(&self) -> bool {
        self.keypoints.is_empty()
    }

    /// Keypoint at a mesh index, if present in this frame
    pub fn point(&self, index: usize) -> Option<&Landmark> {
        self.keypoints.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Landmark::new(0.0, 0.0);
        let b = Landmark::new(3.0, 4.0);
        assert!((a.distance(&b) - 5.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_empty_frame_has_no_points() {
        let frame = LandmarkFrame::default();
        assert!(frame.is_empty());
        assert!(frame.point(33).is_none());
    }
}
