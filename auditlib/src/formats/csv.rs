//! CSV-выгрузка отчёта (разметку колонок см. [`super::columns`]).
//!
//! Итоговый отчёт пишется как две колонки `item,value`.

use super::columns::Columns;
use crate::{
    engagement::Assessment,
    error::Result,
    model::{Statement, StatementKind},
};
use csv::{ReaderBuilder, Trim, WriterBuilder};
use std::io::{BufRead, Write};

pub struct CsvStatement;

impl crate::traits::ReadStatement for CsvStatement {
    fn read<R: BufRead>(r: R, kind: StatementKind) -> Result<Statement> {
        let mut rdr = ReaderBuilder::new().flexible(true).trim(Trim::All).from_reader(r);

        let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
        let columns = Columns::detect(headers.as_slice(), kind)?;

        let mut items = Vec::new();
        for (i, rec) in rdr.records().enumerate() {
            let rec = rec?;
            let cells: Vec<&str> = rec.iter().collect();
            // +2: заголовок и нумерация с единицы
            if let Some(item) = columns.line_item(kind, i + 2, cells.as_slice())? {
                items.push(item);
            }
        }

        tracing::debug!(statement = %kind, rows = items.len(), "statement read");
        Ok(Statement::new(kind, items))
    }
}

#[derive(serde::Serialize)]
struct CsvReportRow<'a> {
    item: &'a str,
    value: String,
}

pub struct CsvReport;

impl crate::traits::WriteReport for CsvReport {
    fn write<W: Write>(mut w: W, report: &Assessment) -> Result<()> {
        let mut wrt = WriterBuilder::new().from_writer(&mut w);

        for (kind, value) in report.ratios.iter() {
            wrt.serialize(CsvReportRow { item: kind.name(), value: value.to_string() })?;
        }
        wrt.serialize(CsvReportRow { item: "Engagement Risk", value: report.decision.risk.to_string() })?;
        wrt.serialize(CsvReportRow { item: "Audit Comment", value: report.decision.finding.message().to_string() })?;

        wrt.flush()?;
        Ok(())
    }
}
