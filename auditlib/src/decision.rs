//! Решение по заданию: классификация риска по набору коэффициентов.
//!
//! Правила проверяются по порядку, срабатывает первое:
//! ликвидность → рентабельность → покрытие процентов.
//! Нерасчётный коэффициент ни одно правило не включает.

use crate::ratios::{RatioKind, RatioSet};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Пороговые значения; всё сравнивается строго через `<`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub min_current_ratio: Decimal,
    /// В процентах, как и сам Net Profit Margin (5 = 5%).
    pub min_net_margin: Decimal,
    pub min_interest_coverage: Decimal,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_current_ratio: Decimal::ONE,
            min_net_margin: Decimal::new(5, 0),
            min_interest_coverage: Decimal::new(15, 1),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Risk {
    Low,
    Caution,
    High,
}

impl fmt::Display for Risk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Risk::Low => "LOW_RISK",
            Risk::Caution => "CAUTION",
            Risk::High => "HIGH_RISK",
        })
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Finding {
    PoorLiquidity,
    LowProfitability,
    WeakInterestCoverage,
    Stable,
}

impl Finding {
    pub fn risk(self) -> Risk {
        match self {
            Finding::PoorLiquidity | Finding::WeakInterestCoverage => Risk::High,
            Finding::LowProfitability => Risk::Caution,
            Finding::Stable => Risk::Low,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Finding::PoorLiquidity => "Poor liquidity position detected.",
            Finding::LowProfitability => "Low profitability. Proceed with caution.",
            Finding::WeakInterestCoverage => "Earnings do not cover interest obligations.",
            Finding::Stable => "Financial position appears stable.",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Decision {
    pub risk: Risk,
    pub finding: Finding,
}

impl From<Finding> for Decision {
    fn from(finding: Finding) -> Self {
        Self { risk: finding.risk(), finding }
    }
}

fn below(ratios: &RatioSet, kind: RatioKind, floor: Decimal) -> bool {
    ratios.get(kind).value().is_some_and(|v| v < floor)
}

pub fn classify(ratios: &RatioSet, thresholds: &Thresholds) -> Decision {
    let finding = if below(ratios, RatioKind::CurrentRatio, thresholds.min_current_ratio) {
        Finding::PoorLiquidity
    } else if below(ratios, RatioKind::NetProfitMargin, thresholds.min_net_margin) {
        Finding::LowProfitability
    } else if below(ratios, RatioKind::InterestCoverage, thresholds.min_interest_coverage) {
        Finding::WeakInterestCoverage
    } else {
        Finding::Stable
    };
    Decision::from(finding)
}
