//! Rescaling of dimension base scores against the headline total.
//!
//! Base scores describe the trait pairing in isolation. The rescale
//! pulls them toward the pair's actual compatibility so a glowing
//! sub-score never sits under a dismal headline number, with an
//! asymmetric cap above the reference point so sub-scores cannot
//! inflate past what their descriptions support.

/// Total at which a base score passes through unchanged.
pub const REFERENCE_TOTAL: f64 = 70.0;
/// No dimension ever reads below this.
pub const FLOOR: f64 = 20.0;
/// Gain per point of total above the reference.
pub const CAP_SLOPE: f64 = 0.5;

/// Rescale a dimension base score against the overall total.
pub fn rescale(base: u8, total: u8) -> u8 {
    let mut adjusted = f64::from(base) * (f64::from(total) / REFERENCE_TOTAL);
    if f64::from(total) > REFERENCE_TOTAL {
        let cap = f64::from(base) + (f64::from(total) - REFERENCE_TOTAL) * CAP_SLOPE;
        adjusted = adjusted.min(cap);
    }
    adjusted.round().clamp(FLOOR, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_total_is_identity() {
        for base in [20u8, 60, 78, 95, 100] {
            assert_eq!(rescale(base, 70), base);
        }
    }

    #[test]
    fn low_totals_scale_down_to_the_floor() {
        assert_eq!(rescale(60, 35), 30);
        assert_eq!(rescale(60, 7), 20);
        assert_eq!(rescale(100, 1), 20);
    }

    #[test]
    fn high_totals_are_capped_not_scaled() {
        // Linear scaling would give 80 * 100/70 = 114; the cap holds it
        // to base + 15.
        assert_eq!(rescale(80, 100), 95);
        assert_eq!(rescale(80, 71), 81);
        assert_eq!(rescale(95, 100), 100);
    }

    #[test]
    fn output_stays_inside_the_band() {
        for base in 0..=100u8 {
            for total in 1..=100u8 {
                let v = rescale(base, total);
                assert!((20..=100).contains(&v), "rescale({base}, {total}) = {v}");
            }
        }
    }
}
