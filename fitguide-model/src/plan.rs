use std::fmt;

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

/// Diet goal, chosen independently of the current fitness status.
#[derive(Clone, Copy, Debug, Eq, FromPrimitive, Hash, PartialEq, strum::EnumIter)]
pub enum PlanType {
    WeightLoss = 1,
    WeightGain = 2,
    Healthy = 3,
}

impl PlanType {
    /// Parse a menu selector: "1", "2" or "3".
    pub fn from_selector(selector: &str) -> Option<Self> {
        selector
            .trim()
            .parse::<u8>()
            .ok()
            .and_then(FromPrimitive::from_u8)
    }

    pub fn key(&self) -> &'static str {
        match self {
            PlanType::WeightLoss => "weight_loss",
            PlanType::WeightGain => "weight_gain",
            PlanType::Healthy => "healthy",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PlanType::WeightLoss => "Weight Loss",
            PlanType::WeightGain => "Weight Gain",
            PlanType::Healthy => "Healthy Diet",
        }
    }
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn parses_menu_selectors() {
        assert_eq!(PlanType::from_selector("1"), Some(PlanType::WeightLoss));
        assert_eq!(PlanType::from_selector("2"), Some(PlanType::WeightGain));
        assert_eq!(PlanType::from_selector(" 3\n"), Some(PlanType::Healthy));
    }

    #[test]
    fn rejects_unknown_selectors() {
        for selector in ["", "0", "4", "-1", "one", "1.0", "weight_loss", "256"] {
            assert_eq!(PlanType::from_selector(selector), None, "{:?}", selector);
        }
    }

    #[test]
    fn selectors_match_discriminants() {
        for plan_type in PlanType::iter() {
            let selector = (plan_type as u8).to_string();
            assert_eq!(PlanType::from_selector(&selector), Some(plan_type));
        }
    }
}
