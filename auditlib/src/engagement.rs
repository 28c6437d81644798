//! Весь прогон целиком: два отчёта на входе, коэффициенты и решение на выходе.

use crate::{
    decision::{classify, Decision, Thresholds},
    error::{AuditError, Result},
    locate::{extract, LabelMatcher},
    model::{Statement, StatementKind},
    ratios::{compute_ratios, RatioSet},
};

#[derive(Debug, Clone, Copy, Default)]
pub struct AssessOptions {
    pub matcher: LabelMatcher,
    pub thresholds: Thresholds,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    pub ratios: RatioSet,
    pub decision: Decision,
}

fn expect_kind(statement: &Statement, kind: StatementKind) -> Result<()> {
    if statement.kind != kind {
        return Err(AuditError::MalformedInput(format!(
            "expected {kind}, got {}",
            statement.kind
        )));
    }
    Ok(())
}

pub fn assess(balance_sheet: &Statement, pnl: &Statement, options: &AssessOptions) -> Result<Assessment> {
    expect_kind(balance_sheet, StatementKind::BalanceSheet)?;
    expect_kind(pnl, StatementKind::ProfitAndLoss)?;

    let bs_fields = extract(balance_sheet, &options.matcher);
    let pl_fields = extract(pnl, &options.matcher);

    let ratios = compute_ratios(&bs_fields, &pl_fields).inspect_err(|e| {
        tracing::warn!(error = %e, "ratios not computed");
    })?;
    for (kind, value) in ratios.iter() {
        tracing::debug!(ratio = %kind, value = %value, "ratio computed");
    }

    let decision = classify(&ratios, &options.thresholds);
    tracing::info!(risk = %decision.risk, finding = ?decision.finding, "engagement classified");

    Ok(Assessment { ratios, decision })
}
