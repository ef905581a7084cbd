use serde::Serialize;
use std::fmt;

/// Coarse classification of a credit budget. Only used to pick weight tables.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Eco,
    Half,
    Full,
}

impl BudgetTier {
    pub fn from_budget(credits: u32) -> Self {
        match credits {
            0..=1499 => BudgetTier::Eco,
            1500..=3499 => BudgetTier::Half,
            _ => BudgetTier::Full,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BudgetTier::Eco => "eco",
            BudgetTier::Half => "half",
            BudgetTier::Full => "full",
        }
    }

    /// Chance that each ability slot is considered for purchase.
    pub fn ability_purchase_chance(self) -> f64 {
        match self {
            BudgetTier::Eco => 0.3,
            BudgetTier::Half => 0.6,
            BudgetTier::Full => 0.8,
        }
    }
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
