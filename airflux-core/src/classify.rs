//! The two independent health bandings: an EPA-style AQI computed from
//! PM2.5, and the status band for the vendor IAQ score. Both are total
//! functions over any finite non-negative input.

use airflux_schemas::levels::{AqiLevel, IaqLevel};

/// EPA piecewise-linear AQI from a PM2.5 concentration in ug/m3.
///
/// Band boundaries are inclusive on the upper end: a concentration
/// exactly at a breakpoint belongs to the lower band. Above 250.4 the
/// index saturates at a constant 300 instead of continuing the EPA table
/// to 500, matching what the deployed device firmware reports.
pub fn classify_pm25(pm25: f64) -> (f64, AqiLevel) {
    if pm25 <= 12.0 {
        (pm25 * 50.0 / 12.0, AqiLevel::Good)
    } else if pm25 <= 35.4 {
        (50.0 + (pm25 - 12.0) * 50.0 / 23.4, AqiLevel::Moderate)
    } else if pm25 <= 55.4 {
        (100.0 + (pm25 - 35.4) * 50.0 / 20.0, AqiLevel::UnhealthySensitive)
    } else if pm25 <= 150.4 {
        (150.0 + (pm25 - 55.4) * 50.0 / 95.0, AqiLevel::Unhealthy)
    } else if pm25 <= 250.4 {
        (200.0 + (pm25 - 150.4) * 100.0 / 100.0, AqiLevel::VeryUnhealthy)
    } else {
        (300.0, AqiLevel::Hazardous)
    }
}

/// Status band for a raw vendor IAQ score (0-500 scale).
///
/// The score is rounded first, so 49.6 already reads as Good. This bands
/// the IAQ score itself and has nothing to do with [`classify_pm25`].
pub fn classify_iaq(iaq: f64) -> IaqLevel {
    let score = iaq.round();
    if score < 50.0 {
        IaqLevel::Excellent
    } else if score < 100.0 {
        IaqLevel::Good
    } else if score < 150.0 {
        IaqLevel::LightlyPolluted
    } else if score < 200.0 {
        IaqLevel::ModeratelyPolluted
    } else if score < 300.0 {
        IaqLevel::HeavilyPolluted
    } else {
        IaqLevel::SeverelyPolluted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn clean_air_is_zero_good() {
        let (aqi, level) = classify_pm25(0.0);
        assert_eq!(aqi, 0.0);
        assert_eq!(level, AqiLevel::Good);
    }

    #[test]
    fn good_band_upper_boundary_is_exactly_fifty() {
        let (aqi, level) = classify_pm25(12.0);
        assert_eq!(aqi, 50.0);
        assert_eq!(level, AqiLevel::Good);
    }

    #[test]
    fn bands_are_continuous_at_each_breakpoint() {
        // The value just above each breakpoint, computed with the next
        // band's formula, must approach the breakpoint's own index.
        for (breakpoint, index) in [(12.0, 50.0), (35.4, 100.0), (55.4, 150.0), (150.4, 200.0)] {
            let (below, _) = classify_pm25(breakpoint);
            let (above, _) = classify_pm25(breakpoint + 1e-9);
            assert_close(below, index);
            assert!((above - index).abs() < 1e-6);
        }
    }

    #[test]
    fn breakpoints_belong_to_the_lower_band() {
        assert_eq!(classify_pm25(35.4).1, AqiLevel::Moderate);
        assert_eq!(classify_pm25(55.4).1, AqiLevel::UnhealthySensitive);
        assert_eq!(classify_pm25(150.4).1, AqiLevel::Unhealthy);
        assert_eq!(classify_pm25(250.4).1, AqiLevel::VeryUnhealthy);
    }

    #[test]
    fn extreme_concentrations_saturate_at_three_hundred() {
        let (aqi, level) = classify_pm25(400.0);
        assert_eq!(aqi, 300.0);
        assert_eq!(level, AqiLevel::Hazardous);
        assert_eq!(classify_pm25(10_000.0).0, 300.0);
    }

    #[test]
    fn index_is_monotonically_non_decreasing() {
        let mut previous = 0.0;
        let mut pm25 = 0.0;
        while pm25 <= 600.0 {
            let (aqi, _) = classify_pm25(pm25);
            assert!(
                aqi + 1e-9 >= previous,
                "index decreased at pm2.5 = {pm25}: {previous} -> {aqi}"
            );
            previous = aqi;
            pm25 += 0.1;
        }
    }

    #[test]
    fn level_is_monotonically_non_decreasing() {
        let mut previous = AqiLevel::Good;
        for step in 0..6000 {
            let (_, level) = classify_pm25(step as f64 * 0.1);
            assert!(level >= previous);
            previous = level;
        }
    }

    #[test]
    fn iaq_band_edges() {
        assert_eq!(classify_iaq(0.0), IaqLevel::Excellent);
        assert_eq!(classify_iaq(49.0), IaqLevel::Excellent);
        assert_eq!(classify_iaq(50.0), IaqLevel::Good);
        assert_eq!(classify_iaq(99.0), IaqLevel::Good);
        assert_eq!(classify_iaq(100.0), IaqLevel::LightlyPolluted);
        assert_eq!(classify_iaq(150.0), IaqLevel::ModeratelyPolluted);
        assert_eq!(classify_iaq(200.0), IaqLevel::HeavilyPolluted);
        assert_eq!(classify_iaq(299.0), IaqLevel::HeavilyPolluted);
        assert_eq!(classify_iaq(300.0), IaqLevel::SeverelyPolluted);
        assert_eq!(classify_iaq(500.0), IaqLevel::SeverelyPolluted);
    }

    #[test]
    fn iaq_band_rounds_before_comparing() {
        assert_eq!(classify_iaq(49.4), IaqLevel::Excellent);
        assert_eq!(classify_iaq(49.6), IaqLevel::Good);
        assert_eq!(classify_iaq(299.6), IaqLevel::SeverelyPolluted);
    }
}
