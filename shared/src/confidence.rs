//! Rendering rules for the parser's confidence score.

/// How many of the ten meter segments light up for a score.
/// Out-of-range scores are clamped rather than rejected.
pub fn filled_segments(confidence: f64) -> usize {
    (confidence.clamp(0.0, 1.0) * 10.0).round() as usize
}

/// Coarse quality band, used to pick the meter color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceBand {
    High,
    Medium,
    Low,
}

impl ConfidenceBand {
    pub fn of(confidence: f64) -> Self {
        if confidence >= 0.8 {
            ConfidenceBand::High
        } else if confidence >= 0.5 {
            ConfidenceBand::Medium
        } else {
            ConfidenceBand::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_scale_with_confidence() {
        assert_eq!(filled_segments(0.0), 0);
        assert_eq!(filled_segments(0.3), 3);
        assert_eq!(filled_segments(0.75), 8);
        assert_eq!(filled_segments(1.0), 10);
    }

    #[test]
    fn segments_clamp_out_of_range_scores() {
        assert_eq!(filled_segments(-0.5), 0);
        assert_eq!(filled_segments(1.7), 10);
    }

    #[test]
    fn bands_split_at_point_five_and_point_eight() {
        assert_eq!(ConfidenceBand::of(0.9), ConfidenceBand::High);
        assert_eq!(ConfidenceBand::of(0.8), ConfidenceBand::High);
        assert_eq!(ConfidenceBand::of(0.7), ConfidenceBand::Medium);
        assert_eq!(ConfidenceBand::of(0.5), ConfidenceBand::Medium);
        assert_eq!(ConfidenceBand::of(0.2), ConfidenceBand::Low);
        assert_eq!(ConfidenceBand::of(0.0), ConfidenceBand::Low);
    }
}
