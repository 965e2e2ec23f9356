//! Closing line, keyed by total band.

/// One-line send-off matching the headline score.
pub fn closing(total: u8) -> String {
    match total {
        90.. => format!(
            "A {total}-point match is rare air. Treasure the ease, and never let it become autopilot."
        ),
        75.. => format!(
            "At {total} points the foundations are strong; what remains is upkeep, not construction."
        ),
        60.. => format!(
            "At {total} points you have a solid base with real seams, and the seams are where the growing happens."
        ),
        45.. => format!(
            "At {total} points this pairing runs on effort more than ease, and effort compounds."
        ),
        _ => format!(
            "A score of {total} says you are genuinely different people. If you choose each other anyway, choose each other on purpose."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_band_names_the_total() {
        for total in [1u8, 44, 45, 59, 60, 74, 75, 89, 90, 100] {
            assert!(closing(total).contains(&total.to_string()));
        }
    }

    #[test]
    fn band_edges() {
        assert!(closing(90).contains("rare air"));
        assert!(closing(89).contains("upkeep"));
        assert!(closing(75).contains("upkeep"));
        assert!(closing(74).contains("seams"));
        assert!(closing(60).contains("seams"));
        assert!(closing(59).contains("effort compounds"));
        assert!(closing(45).contains("effort compounds"));
        assert!(closing(44).contains("on purpose"));
    }
}
