//! Общая для CSV и Excel разметка таблицы: где подпись статьи, где сумма.
//!
//! Регистр заголовков не важен: label | particulars | description | account,
//! amount | value | balance. Остальные колонки игнорируются.

use crate::{
    error::{AuditError, Result},
    locate::normalize_label,
    model::{LineItem, StatementKind},
};
use rust_decimal::Decimal;

pub const LABEL_COLUMNS: &[&str] = &["label", "particulars", "description", "account"];
pub const AMOUNT_COLUMNS: &[&str] = &["amount", "value", "balance"];

fn find_column<S: AsRef<str>>(headers: &[S], names: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|h| names.contains(&normalize_label(h.as_ref()).as_str()))
}

/// "1,200.50" → 1200.50, "(300)" → -300.
pub fn parse_amount(raw: &str) -> Result<Decimal> {
    let s = raw.trim();
    let (negative, body) = match s.strip_prefix('(').and_then(|t| t.strip_suffix(')')) {
        Some(inner) => (true, inner),
        None => (false, s),
    };
    let cleaned: String = body.chars().filter(|c| *c != ',' && !c.is_whitespace()).collect();
    let value = cleaned
        .parse::<Decimal>()
        .map_err(|e| AuditError::Parse(format!("amount {raw:?}: {e}")))?;
    Ok(if negative { -value } else { value })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Columns {
    pub label: usize,
    pub amount: usize,
}

impl Columns {
    pub fn detect<S: AsRef<str>>(headers: &[S], kind: StatementKind) -> Result<Self> {
        let label = find_column(headers, LABEL_COLUMNS).ok_or_else(|| {
            AuditError::MalformedInput(format!("{kind}: no label column (expected one of {})", LABEL_COLUMNS.join(", ")))
        })?;
        let amount = find_column(headers, AMOUNT_COLUMNS).ok_or_else(|| {
            AuditError::MalformedInput(format!("{kind}: no amount column (expected one of {})", AMOUNT_COLUMNS.join(", ")))
        })?;
        Ok(Self { label, amount })
    }

    /// `None` для строк-заголовков разделов без суммы.
    /// `row` — номер строки в файле, только для текста ошибки.
    pub fn line_item<S: AsRef<str>>(&self, kind: StatementKind, row: usize, cells: &[S]) -> Result<Option<LineItem>> {
        let cell = |i: usize| cells.get(i).map_or("", |c| c.as_ref().trim());
        let raw = cell(self.amount);
        if raw.is_empty() {
            return Ok(None);
        }
        let amount = parse_amount(raw).map_err(|e| AuditError::Parse(format!("{kind}, row {row}: {e}")))?;
        Ok(Some(LineItem::new(cell(self.label), amount)))
    }
}
