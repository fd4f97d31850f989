//! # Tier Table and Progress Arithmetic

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One cumulative-spend breakpoint and its reward rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashbackTier {
    /// Display name of the tier.
    pub name: String,
    /// Inclusive lower bound of cumulative spend for this tier.
    pub min_spend: f64,
    /// Reward rate in `[0, 1]`.
    pub percent: f64,
}

impl CashbackTier {
    /// Shorthand constructor.
    pub fn new(name: &str, min_spend: f64, percent: f64) -> Self {
        Self {
            name: name.to_string(),
            min_spend,
            percent,
        }
    }
}

/// Errors constructing a tier table.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TierTableError {
    /// A table must have at least one tier.
    #[error("tier table is empty")]
    Empty,
    /// The first tier must start at zero cumulative spend.
    #[error("first tier must have min_spend 0, got {0}")]
    FirstMinNotZero(String),
    /// Breakpoints must strictly ascend.
    #[error("tier breakpoints must strictly ascend at index {0}")]
    NotAscending(usize),
    /// Reward rates live in `[0, 1]`.
    #[error("tier percent out of [0, 1] at index {0}")]
    PercentOutOfRange(usize),
}

/// Ordered tier table, ascending by `min_spend`, first entry at 0.
///
/// Compiled into the engine; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct TierTable {
    tiers: Vec<CashbackTier>,
}

impl TierTable {
    /// Validate and adopt a custom table.
    pub fn new(tiers: Vec<CashbackTier>) -> Result<Self, TierTableError> {
        let first = tiers.first().ok_or(TierTableError::Empty)?;
        if first.min_spend != 0.0 {
            return Err(TierTableError::FirstMinNotZero(first.min_spend.to_string()));
        }
        for (i, pair) in tiers.windows(2).enumerate() {
            if pair[1].min_spend <= pair[0].min_spend {
                return Err(TierTableError::NotAscending(i + 1));
            }
        }
        for (i, tier) in tiers.iter().enumerate() {
            if !(0.0..=1.0).contains(&tier.percent) {
                return Err(TierTableError::PercentOutOfRange(i));
            }
        }
        Ok(Self { tiers })
    }

    /// The production table.
    pub fn standard() -> Self {
        Self {
            tiers: vec![
                CashbackTier::new("Rookie", 0.0, 0.03),
                CashbackTier::new("Pro", 10_000.0, 0.05),
                CashbackTier::new("Elite", 30_000.0, 0.07),
                CashbackTier::new("Legend", 60_000.0, 0.10),
            ],
        }
    }

    /// All tiers, ascending.
    pub fn tiers(&self) -> &[CashbackTier] {
        &self.tiers
    }

    /// The tier with the greatest `min_spend <= cumulative_spend`.
    ///
    /// Stepwise and right-continuous: an exact breakpoint selects that
    /// breakpoint's tier. Negative spend clamps to the first tier.
    pub fn tier_for(&self, cumulative_spend: f64) -> &CashbackTier {
        let mut current = &self.tiers[0];
        for tier in &self.tiers {
            if cumulative_spend >= tier.min_spend {
                current = tier;
            }
        }
        current
    }

    /// The tier with the smallest `min_spend > cumulative_spend`, or `None`
    /// when already at the top.
    pub fn next_tier_for(&self, cumulative_spend: f64) -> Option<&CashbackTier> {
        self.tiers.iter().find(|t| cumulative_spend < t.min_spend)
    }

    /// Position of `cumulative_spend` between its tier and the next one.
    pub fn progress(&self, cumulative_spend: f64) -> TierProgress {
        let current = self.tier_for(cumulative_spend).clone();
        let next = self.next_tier_for(cumulative_spend).cloned();

        let (ratio, remaining) = match &next {
            None => (1.0, 0.0),
            Some(next) => {
                // span is floored at 1 to avoid division by zero
                let span = (next.min_spend - current.min_spend).max(1.0);
                let done = (cumulative_spend - current.min_spend).clamp(0.0, span);
                (done / span, (next.min_spend - cumulative_spend).max(0.0))
            }
        };

        TierProgress {
            current,
            next,
            ratio,
            remaining,
        }
    }
}

impl Default for TierTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Progress metrics toward the next tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierProgress {
    /// The tier the spend currently sits in.
    pub current: CashbackTier,
    /// The next tier up, absent at the top of the table.
    pub next: Option<CashbackTier>,
    /// Fraction of the span between current and next already covered, `[0, 1]`.
    pub ratio: f64,
    /// Spend still required to reach the next tier; 0 at the top.
    pub remaining: f64,
}

/// Points earned on an order at a given tier: `floor(amount * percent)`.
pub fn cashback_points(order_amount: f64, tier: &CashbackTier) -> i64 {
    (order_amount * tier.percent).floor() as i64
}
