//! Поиск статей по подписи строки.
//!
//! Подписи в выгрузках пишутся как угодно: регистр, лишние пробелы, префиксы
//! вроде "Total". Сравнение всегда идёт по нормализованной форме
//! ([`normalize_label`]), а стратегия сравнения задаётся [`MatchMode`]
//! один раз на весь прогон.

use crate::model::{ExtractedFields, Field, Statement, StatementKind};
use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// Нормализованная подпись совпадает с искомой целиком.
    Exact,
    /// Нормализованная подпись содержит искомые слова целиком:
    /// "current assets" находит "total current assets", но не "non-current assets".
    #[default]
    Contains,
}

/// Trim, нижний регистр, серии пробелов схлопываются в один.
pub fn normalize_label(label: &str) -> String {
    label
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

// '-' тоже часть слова: "non-current" не должно давать "current".
fn joins_word(c: char) -> bool {
    c.is_alphanumeric() || c == '-'
}

/// Вхождение `needle`, не приклеенное к соседним словам.
fn contains_words(label: &str, needle: &str) -> bool {
    label.match_indices(needle).any(|(at, _)| {
        let before = label[..at].chars().next_back();
        let after = label[at + needle.len()..].chars().next();
        !before.is_some_and(joins_word) && !after.is_some_and(char::is_alphanumeric)
    })
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LabelMatcher {
    pub mode: MatchMode,
}

impl LabelMatcher {
    pub fn new(mode: MatchMode) -> Self {
        Self { mode }
    }

    /// `needle` должен быть уже нормализован.
    fn matches_normalized(&self, label: &str, needle: &str) -> bool {
        if needle.is_empty() {
            return false;
        }
        match self.mode {
            MatchMode::Exact => label == needle,
            MatchMode::Contains => contains_words(label, needle),
        }
    }

    pub fn matches(&self, label: &str, query: &str) -> bool {
        self.matches_normalized(&normalize_label(label), &normalize_label(query))
    }
}

/// Сумма первой (в порядке документа) строки, подходящей под `label`.
pub fn locate(statement: &Statement, matcher: &LabelMatcher, label: &str) -> Option<Decimal> {
    let needle = normalize_label(label);
    statement
        .items
        .iter()
        .find(|it| matcher.matches_normalized(&normalize_label(&it.label), &needle))
        .map(|it| it.amount)
}

/// Первая строка, подходящая под любой из синонимов статьи
/// и не содержащая ни одного из её стоп-слов.
pub fn locate_field(statement: &Statement, matcher: &LabelMatcher, field: Field) -> Option<Decimal> {
    let aliases = field.aliases();
    let excluded = field.excluded_words();
    statement
        .items
        .iter()
        .find(|it| {
            let label = normalize_label(&it.label);
            aliases.iter().any(|a| matcher.matches_normalized(&label, a))
                && !excluded.iter().any(|w| contains_words(&label, w))
        })
        .map(|it| it.amount)
}

/// Собирает обязательные статьи отчёта. Если строки с капиталом нет,
/// капитал считается как Share Capital + Reserves.
pub fn extract(statement: &Statement, matcher: &LabelMatcher) -> ExtractedFields {
    let mut fields = ExtractedFields::new(statement.kind);

    for &field in statement.kind.required_fields() {
        let amount = locate_field(statement, matcher, field);
        match amount {
            Some(v) => tracing::debug!(statement = %statement.kind, field = %field, amount = %v, "line item located"),
            None => tracing::debug!(statement = %statement.kind, field = %field, "line item not found"),
        }
        fields.set(field, amount);
    }

    if statement.kind == StatementKind::BalanceSheet && fields.get(Field::TotalEquity).is_none() {
        let capital = locate_field(statement, matcher, Field::ShareCapital);
        let reserves = locate_field(statement, matcher, Field::Reserves);
        if let (Some(c), Some(r)) = (capital, reserves) {
            tracing::debug!(share_capital = %c, reserves = %r, "equity derived from share capital and reserves");
            fields.set(Field::TotalEquity, c.checked_add(r));
        }
    }

    fields
}
