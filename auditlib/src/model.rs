//! Доменные модели: отчёт (баланс или P&L), его строки и канонические статьи.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum StatementKind {
    BalanceSheet,
    ProfitAndLoss,
}

impl StatementKind {
    /// Статьи, без которых расчёт коэффициентов невозможен.
    pub fn required_fields(self) -> &'static [Field] {
        match self {
            StatementKind::BalanceSheet => &[
                Field::CurrentAssets,
                Field::CurrentLiabilities,
                Field::TotalLiabilities,
                Field::TotalEquity,
                Field::TotalAssets,
            ],
            StatementKind::ProfitAndLoss => &[
                Field::Revenue,
                Field::GrossProfit,
                Field::NetProfit,
                Field::InterestExpense,
            ],
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StatementKind::BalanceSheet => "Balance Sheet",
            StatementKind::ProfitAndLoss => "Profit & Loss",
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    pub label: String,
    pub amount: Decimal,
}

impl LineItem {
    pub fn new(label: impl Into<String>, amount: Decimal) -> Self {
        Self { label: label.into(), amount }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Statement {
    pub kind: StatementKind,
    pub items: Vec<LineItem>,
}

impl Statement {
    pub fn new(kind: StatementKind, items: Vec<LineItem>) -> Self {
        Self { kind, items }
    }
}

/// Каноническая статья отчётности.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    CurrentAssets,
    CurrentLiabilities,
    TotalLiabilities,
    TotalEquity,
    ShareCapital,
    Reserves,
    TotalAssets,
    Revenue,
    GrossProfit,
    NetProfit,
    InterestExpense,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::CurrentAssets => "Current Assets",
            Field::CurrentLiabilities => "Current Liabilities",
            Field::TotalLiabilities => "Total Liabilities",
            Field::TotalEquity => "Total Equity",
            Field::ShareCapital => "Share Capital",
            Field::Reserves => "Reserves",
            Field::TotalAssets => "Total Assets",
            Field::Revenue => "Revenue",
            Field::GrossProfit => "Gross Profit",
            Field::NetProfit => "Net Profit",
            Field::InterestExpense => "Interest Expense",
        }
    }

    /// Варианты подписи строки, уже нормализованные (нижний регистр).
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Field::CurrentAssets => &["current assets"],
            Field::CurrentLiabilities => &["current liabilities"],
            Field::TotalLiabilities => &["total liabilities"],
            Field::TotalEquity => &["total equity", "equity"],
            Field::ShareCapital => &["share capital"],
            Field::Reserves => &["reserves and surplus", "reserves"],
            Field::TotalAssets => &["total assets"],
            Field::Revenue => &["revenue", "sales"],
            Field::GrossProfit => &["gross profit"],
            Field::NetProfit => &["net profit"],
            Field::InterestExpense => &["interest expense", "interest"],
        }
    }

    /// Строки с этими словами статьёй не считаются, даже если подходят по синониму.
    pub fn excluded_words(self) -> &'static [&'static str] {
        match self {
            Field::InterestExpense => &["income", "received", "earned"],
            _ => &[],
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Найденные суммы обязательных статей одного отчёта.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedFields {
    pub kind: StatementKind,
    values: Vec<(Field, Option<Decimal>)>,
}

impl ExtractedFields {
    pub fn new(kind: StatementKind) -> Self {
        let values = kind.required_fields().iter().map(|f| (*f, None)).collect();
        Self { kind, values }
    }

    pub fn set(&mut self, field: Field, amount: Option<Decimal>) {
        match self.values.iter_mut().find(|(f, _)| *f == field) {
            Some(slot) => slot.1 = amount,
            None => self.values.push((field, amount)),
        }
    }

    pub fn with(mut self, field: Field, amount: Decimal) -> Self {
        self.set(field, Some(amount));
        self
    }

    pub fn get(&self, field: Field) -> Option<Decimal> {
        self.values
            .iter()
            .find(|(f, _)| *f == field)
            .and_then(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, Option<Decimal>)> + '_ {
        self.values.iter().copied()
    }

    /// Обязательные статьи без суммы, в порядке `required_fields`.
    pub fn missing(&self) -> Vec<Field> {
        self.kind
            .required_fields()
            .iter()
            .copied()
            .filter(|f| self.get(*f).is_none())
            .collect()
    }
}
