//! Facial Landmark Geometry
//!
//! Pure ratio computation over face-mesh landmark frames:
//! - Eye Aspect Ratio (EAR) - lower means more closed
//! - Mouth Aspect Ratio (MAR) - higher means more open (yawn indicator)
//!
//! All functions are stateless. An empty or degenerate frame yields a ratio
//! of 0.0, which downstream logic treats as fully closed.

pub mod frame;
pub mod mesh;
pub mod ratios;

pub use frame::{Landmark, LandmarkFrame};
pub use ratios::{eye_aspect_ratio, mean_eye_aspect_ratio, mouth_aspect_ratio};
