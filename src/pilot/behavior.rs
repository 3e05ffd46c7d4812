use crate::utils::MPS_PER_KNOT;

/// Crab angle (degrees) that exactly cancels drift for the given
/// crosswind, from the arcsine of the crosswind/airspeed ratio.
/// Returns 0 when the airspeed is non-positive.
pub fn crab_angle_deg(crosswind_mps: f64, airspeed_kts: f64) -> f64 {
    let airspeed_mps = airspeed_kts * MPS_PER_KNOT;
    if airspeed_mps <= 0.0 {
        return 0.0;
    }
    let ratio = (crosswind_mps / airspeed_mps).clamp(-1.0, 1.0);
    ratio.asin().to_degrees()
}

/// Notional pilot reaction time (seconds) for a given deviation: small
/// deviations are answered slowly, large ones almost immediately.
pub fn response_delay_s(deviation_m: f64, threshold_m: f64) -> f64 {
    let magnitude = deviation_m.abs();
    if magnitude < threshold_m {
        5.0
    } else if magnitude < threshold_m * 2.0 {
        2.0
    } else {
        0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn crab_angle_matches_arcsine_formula() {
        let expected = (10.0 / (60.0 * MPS_PER_KNOT)).asin().to_degrees();
        assert_relative_eq!(crab_angle_deg(10.0, 60.0), expected, epsilon = 1e-9);
        assert_relative_eq!(crab_angle_deg(-10.0, 60.0), -expected, epsilon = 1e-9);
    }

    #[test]
    fn crab_angle_saturates_at_90_degrees() {
        assert_relative_eq!(crab_angle_deg(100.0, 60.0), 90.0, epsilon = 1e-9);
    }

    #[test]
    fn crab_angle_defaults_to_zero_without_airspeed() {
        assert_relative_eq!(crab_angle_deg(10.0, 0.0), 0.0);
        assert_relative_eq!(crab_angle_deg(10.0, -5.0), 0.0);
    }

    #[test]
    fn response_delay_tiers() {
        assert_relative_eq!(response_delay_s(10.0, 30.0), 5.0);
        assert_relative_eq!(response_delay_s(-45.0, 30.0), 2.0);
        assert_relative_eq!(response_delay_s(75.0, 30.0), 0.5);
    }
}
