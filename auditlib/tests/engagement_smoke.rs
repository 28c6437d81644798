use auditlib::{
    decision::{Finding, Risk},
    engagement::{assess, AssessOptions, Assessment},
    error::AuditError,
    formats::{csv::{CsvReport, CsvStatement}, text::TextReport, xml::XmlReport},
    model::{Field, StatementKind},
    ratios::{RatioKind, RatioValue},
    traits::{ReadStatement, WriteReport},
};
use rust_decimal::Decimal;
use std::io::Cursor;

const BALANCE_SHEET: &str = r#"Particulars,Amount
Current Assets,200
Current Liabilities,100
Total Liabilities,300
Total Equity,500
Total Assets,1000
"#;

const PNL: &str = r#"Particulars,Amount
Revenue from Operations,1000
Gross Profit,400
Interest Expense,0
Net Profit,50
"#;

fn run(bs: &str, pl: &str) -> Result<Assessment, AuditError> {
    let bs = CsvStatement::read(Cursor::new(bs), StatementKind::BalanceSheet)?;
    let pl = CsvStatement::read(Cursor::new(pl), StatementKind::ProfitAndLoss)?;
    assess(&bs, &pl, &AssessOptions::default())
}

#[test]
fn full_pipeline_from_csv() {
    let report = run(BALANCE_SHEET, PNL).expect("assess");
    assert_eq!(report.ratios.get(RatioKind::CurrentRatio), RatioValue::Value(Decimal::new(2, 0)));
    assert_eq!(report.ratios.get(RatioKind::InterestCoverage), RatioValue::NotComputable);
    assert_eq!(report.decision.risk, Risk::Low);
    assert_eq!(report.decision.finding, Finding::Stable);
}

#[test]
fn missing_net_profit_stops_the_pipeline() {
    let pl = "Particulars,Amount\nSales,1000\nGross Profit,400\nInterest,20\n";
    match run(BALANCE_SHEET, pl) {
        Err(AuditError::MissingFields(fields)) => assert_eq!(fields, vec![Field::NetProfit]),
        other => panic!("expected MissingFields, got {other:?}"),
    }
}

#[test]
fn swapped_statements_are_rejected() {
    let bs = CsvStatement::read(Cursor::new(BALANCE_SHEET), StatementKind::BalanceSheet).unwrap();
    let pl = CsvStatement::read(Cursor::new(PNL), StatementKind::ProfitAndLoss).unwrap();
    let err = assess(&pl, &bs, &AssessOptions::default()).unwrap_err();
    assert!(matches!(err, AuditError::MalformedInput(_)), "{err:?}");
}

#[test]
fn text_report_lists_ratios_and_decision() {
    let report = run(BALANCE_SHEET, PNL).expect("assess");
    let mut out = Vec::new();
    TextReport::write(&mut out, &report).expect("write text");
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("Current Ratio: 2.00\n"), "{text}");
    assert!(text.contains("Debt-to-Equity Ratio: 0.60\n"), "{text}");
    assert!(text.contains("Gross Profit Margin: 40.00%\n"), "{text}");
    assert!(text.contains("Interest Coverage Ratio: N/A\n"), "{text}");
    assert!(text.contains("Engagement Risk: LOW_RISK"), "{text}");
    assert!(text.contains("Financial position appears stable."), "{text}");
    assert_eq!(text.matches("Engagement Risk").count(), 1, "{text}");

    let current = text.find("Current Ratio").unwrap();
    let roa = text.find("Return on Assets").unwrap();
    assert!(current < roa);
}

#[test]
fn csv_report_rows() {
    let report = run(BALANCE_SHEET, PNL).expect("assess");
    let mut out = Vec::new();
    CsvReport::write(&mut out, &report).expect("write csv");
    let csv = String::from_utf8(out).unwrap();
    let lines: Vec<_> = csv.lines().collect();

    assert_eq!(lines[0], "item,value");
    assert_eq!(lines[1], "Current Ratio,2.00");
    assert_eq!(lines[6], "Interest Coverage Ratio,N/A");
    assert_eq!(lines[7], "Engagement Risk,LOW_RISK");
    assert_eq!(lines.len(), 9);
}

#[test]
fn xml_report_elements() {
    let report = run(BALANCE_SHEET, PNL).expect("assess");
    let mut out = Vec::new();
    XmlReport::write(&mut out, &report).expect("write xml");
    let xml = String::from_utf8(out).unwrap();

    assert!(xml.starts_with("<AuditReport>"), "{xml}");
    assert_eq!(xml.matches("<Ratio ").count(), 6, "{xml}");
    assert!(xml.contains(r#"name="Net Profit Margin""#), "{xml}");
    assert!(xml.contains(r#"unit="percent""#), "{xml}");
    assert!(xml.contains(">2.00</Ratio>"), "{xml}");
    assert!(xml.contains(r#"<Decision risk="LOW_RISK">"#), "{xml}");
}

#[test]
fn non_current_and_interest_income_rows_listed_first() {
    let bs = r#"Particulars,Amount
Non-Current Assets,900
Current Assets,80
Non-Current Liabilities,300
Current Liabilities,100
Total Liabilities,400
Total Equity,500
Total Assets,980
"#;
    let pl = r#"Particulars,Amount
Revenue,1000
Gross Profit,400
Interest Income,500
Interest Expense,10
Net Profit,60
"#;
    let report = run(bs, pl).expect("assess");
    assert_eq!(report.ratios.get(RatioKind::CurrentRatio), RatioValue::Value(Decimal::new(8, 1)));
    assert_eq!(report.ratios.get(RatioKind::InterestCoverage), RatioValue::Value(Decimal::new(6, 0)));
    assert_eq!(report.decision.finding, Finding::PoorLiquidity);
}
