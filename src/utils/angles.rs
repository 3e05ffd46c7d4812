/// Conversion factor from meters per second to feet per second.
pub const FPS_PER_MPS: f64 = 3.28084;

/// Conversion factor from knots to meters per second.
pub const MPS_PER_KNOT: f64 = 0.514444;

/// Normalizes an angle in degrees into the half-open interval (-180, 180].
///
/// An input of exactly +/-180 (or any odd multiple of 180) maps to +180.
/// Every heading-error and drift-angle computation in the crate goes
/// through this helper so the boundary convention is uniform.
pub fn normalize_angle_deg(angle_deg: f64) -> f64 {
    let wrapped = (angle_deg + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped == -180.0 {
        180.0
    } else {
        wrapped
    }
}

/// Wraps a compass direction into [0, 360).
pub fn wrap_compass_deg(direction_deg: f64) -> f64 {
    direction_deg.rem_euclid(360.0)
}
