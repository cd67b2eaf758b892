use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::format::format_signed_amount;
use crate::metric::Tone;

/// A named future window with its projected net change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastHorizon {
    pub label: String,
    pub projected_delta: Decimal,
    /// Confidence in percent, 0..=100.
    pub confidence: u8,
    pub tone: Tone,
}

impl ForecastHorizon {
    pub fn display_delta(&self) -> String {
        format_signed_amount(self.projected_delta)
    }

    /// Lowest confidence across a set of horizons, if any.
    pub fn lowest_confidence(horizons: &[ForecastHorizon]) -> Option<u8> {
        horizons.iter().map(|h| h.confidence).min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horizon(label: &str, confidence: u8) -> ForecastHorizon {
        ForecastHorizon {
            label: label.to_string(),
            projected_delta: Decimal::new(45230, 0),
            confidence,
            tone: Tone::Success,
        }
    }

    #[test]
    fn test_display_delta() {
        assert_eq!(horizon("Next 7 Days", 95).display_delta(), "+$45,230");
    }

    #[test]
    fn test_lowest_confidence() {
        let horizons = vec![horizon("a", 95), horizon("b", 80), horizon("c", 90)];
        assert_eq!(ForecastHorizon::lowest_confidence(&horizons), Some(80));
        assert_eq!(ForecastHorizon::lowest_confidence(&[]), None);
    }
}
