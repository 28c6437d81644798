//! Расчёт коэффициентов по найденным статьям баланса и P&L.

use crate::{
    error::{AuditError, Result},
    model::{ExtractedFields, Field},
};
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RatioKind {
    CurrentRatio,
    DebtToEquity,
    GrossProfitMargin,
    NetProfitMargin,
    ReturnOnAssets,
    InterestCoverage,
}

impl RatioKind {
    /// Порядок вывода в отчётах.
    pub const ALL: [RatioKind; 6] = [
        RatioKind::CurrentRatio,
        RatioKind::DebtToEquity,
        RatioKind::GrossProfitMargin,
        RatioKind::NetProfitMargin,
        RatioKind::ReturnOnAssets,
        RatioKind::InterestCoverage,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RatioKind::CurrentRatio => "Current Ratio",
            RatioKind::DebtToEquity => "Debt-to-Equity Ratio",
            RatioKind::GrossProfitMargin => "Gross Profit Margin",
            RatioKind::NetProfitMargin => "Net Profit Margin",
            RatioKind::ReturnOnAssets => "Return on Assets",
            RatioKind::InterestCoverage => "Interest Coverage Ratio",
        }
    }

    /// Маржи и ROA считаются в процентах.
    pub fn is_percentage(self) -> bool {
        matches!(
            self,
            RatioKind::GrossProfitMargin | RatioKind::NetProfitMargin | RatioKind::ReturnOnAssets
        )
    }
}

impl fmt::Display for RatioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatioValue {
    Value(Decimal),
    /// Нулевой знаменатель (или переполнение Decimal).
    NotComputable,
}

impl RatioValue {
    pub fn value(self) -> Option<Decimal> {
        match self {
            RatioValue::Value(v) => Some(v),
            RatioValue::NotComputable => None,
        }
    }

    pub fn is_computable(self) -> bool {
        matches!(self, RatioValue::Value(_))
    }

    /// Значение для показа: 2 знака после запятой.
    pub fn rounded(self) -> Option<Decimal> {
        self.value().map(|v| {
            let mut r = v.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            r.rescale(2);
            r
        })
    }
}

impl fmt::Display for RatioValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rounded() {
            Some(v) => write!(f, "{v}"),
            None => f.write_str("N/A"),
        }
    }
}

/// Набор из шести коэффициентов в порядке [`RatioKind::ALL`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatioSet {
    entries: Vec<(RatioKind, RatioValue)>,
}

impl RatioSet {
    pub fn get(&self, kind: RatioKind) -> RatioValue {
        self.entries
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, v)| *v)
            .unwrap_or(RatioValue::NotComputable)
    }

    pub fn iter(&self) -> impl Iterator<Item = (RatioKind, RatioValue)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn ratio(numerator: Decimal, denominator: Decimal) -> RatioValue {
    match numerator.checked_div(denominator) {
        Some(v) => RatioValue::Value(v),
        None => RatioValue::NotComputable,
    }
}

fn percent(numerator: Decimal, denominator: Decimal) -> RatioValue {
    match ratio(numerator, denominator) {
        RatioValue::Value(v) => v
            .checked_mul(Decimal::ONE_HUNDRED)
            .map_or(RatioValue::NotComputable, RatioValue::Value),
        RatioValue::NotComputable => RatioValue::NotComputable,
    }
}

/// Считает коэффициенты. Если хоть одной обязательной статьи нет,
/// возвращает [`AuditError::MissingFields`] со всеми отсутствующими.
pub fn compute_ratios(balance_sheet: &ExtractedFields, pnl: &ExtractedFields) -> Result<RatioSet> {
    let mut missing = balance_sheet.missing();
    missing.extend(pnl.missing());
    if !missing.is_empty() {
        return Err(AuditError::MissingFields(missing));
    }

    // после проверки выше все статьи на месте
    let bs = |f: Field| balance_sheet.get(f).unwrap_or(Decimal::ZERO);
    let pl = |f: Field| pnl.get(f).unwrap_or(Decimal::ZERO);

    let current_assets = bs(Field::CurrentAssets);
    let current_liabilities = bs(Field::CurrentLiabilities);
    let total_liabilities = bs(Field::TotalLiabilities);
    let total_equity = bs(Field::TotalEquity);
    let total_assets = bs(Field::TotalAssets);
    let revenue = pl(Field::Revenue);
    let gross_profit = pl(Field::GrossProfit);
    let net_profit = pl(Field::NetProfit);
    let interest_expense = pl(Field::InterestExpense);

    let entries = vec![
        (RatioKind::CurrentRatio, ratio(current_assets, current_liabilities)),
        (RatioKind::DebtToEquity, ratio(total_liabilities, total_equity)),
        (RatioKind::GrossProfitMargin, percent(gross_profit, revenue)),
        (RatioKind::NetProfitMargin, percent(net_profit, revenue)),
        (RatioKind::ReturnOnAssets, percent(net_profit, total_assets)),
        (RatioKind::InterestCoverage, ratio(net_profit, interest_expense)),
    ];

    Ok(RatioSet { entries })
}
