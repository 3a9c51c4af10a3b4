use serde::{Deserialize, Serialize};

/// How a promotion's discount value is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountType {
    Percentage,
    FixedAmount,
}

impl DiscountType {
    /// All values, in declaration order, for select inputs.
    pub fn values() -> &'static [DiscountType] {
        &[DiscountType::Percentage, DiscountType::FixedAmount]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DiscountType::Percentage => "PERCENTAGE",
            DiscountType::FixedAmount => "FIXED_AMOUNT",
        }
    }
}
