pub mod angles;
pub mod errors;

pub use angles::{normalize_angle_deg, wrap_compass_deg, FPS_PER_MPS, MPS_PER_KNOT};
pub use errors::SimError;
