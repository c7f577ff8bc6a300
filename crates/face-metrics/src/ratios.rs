//! EAR / MAR ratio computation

use crate::frame::LandmarkFrame;
use crate::mesh;

/// Eye Aspect Ratio over a 6-point index set.
///
/// `(dist(p2,p6) + dist(p3,p5)) / (2 * dist(p1,p4))` where p1/p4 are the
/// horizontal corners and p2,p3,p5,p6 the vertical lid points. Returns 0.0
/// (fully closed) for a frame missing any of the six points or with a
/// degenerate corner distance.
pub fn eye_aspect_ratio(frame: &LandmarkFrame, indices: &[usize; 6]) -> f32 {
    let points = [
        frame.point(indices[0]),
        frame.point(indices[1]),
        frame.point(indices[2]),
        frame.point(indices[3]),
        frame.point(indices[4]),
        frame.point(indices[5]),
    ];

    let [p1, p2, p3, p4, p5, p6] = match points {
        [Some(a), Some(b), Some(c), Some(d), Some(e), Some(f)] => [a, b, c, d, e, f],
        _ => return 0.0,
    };

    let numerator = p2.distance(p6) + p3.distance(p5);
    let denominator = 2.0 * p1.distance(p4);

    if denominator <= f32::EPSILON {
        return 0.0;
    }

    numerator / denominator
}

/// Two-eye EAR fed downstream: arithmetic mean of the left and right ratios
pub fn mean_eye_aspect_ratio(frame: &LandmarkFrame) -> f32 {
    let left = eye_aspect_ratio(frame, &mesh::LEFT_EYE);
    let right = eye_aspect_ratio(frame, &mesh::RIGHT_EYE);
    (left + right) / 2.0
}

/// Mouth Aspect Ratio: inner lip height over corner-to-corner width.
///
/// Returns 0.0 for a frame missing any of the four points or with a
/// degenerate width.
pub fn mouth_aspect_ratio(frame: &LandmarkFrame) -> f32 {
    let (top, bottom, left, right) = match (
        frame.point(mesh::MOUTH_TOP),
        frame.point(mesh::MOUTH_BOTTOM),
        frame.point(mesh::MOUTH_LEFT),
        frame.point(mesh::MOUTH_RIGHT),
    ) {
        (Some(t), Some(b), Some(l), Some(r)) => (t, b, l, r),
        _ => return 0.0,
    };

    let height = top.distance(bottom);
    let width = left.distance(right);

    if width <= f32::EPSILON {
        return 0.0;
    }

    height / width
}
