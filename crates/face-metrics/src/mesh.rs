//! MediaPipe FaceMesh index sets
//!
//! Fixed by the upstream model's 468-point topology; configuration
//! constants, not derived data.

/// Left eye: [outer corner, top lid 1, top lid 2, inner corner, bottom lid 2, bottom lid 1]
pub const LEFT_EYE: [usize; 6] = [33, 160, 158, 133, 153, 144];

/// Right eye, same point ordering as [`LEFT_EYE`]
pub const RIGHT_EYE: [usize; 6] = [362, 385, 387, 263, 373, 380];

/// Inner upper lip
pub const MOUTH_TOP: usize = 13;

/// Inner lower lip
pub const MOUTH_BOTTOM: usize = 14;

/// Left mouth corner
pub const MOUTH_LEFT: usize = 61;

/// Right mouth corner
pub const MOUTH_RIGHT: usize = 291;
