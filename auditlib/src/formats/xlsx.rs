//! Excel-книга (.xlsx): читается первый лист, первая строка — заголовки.

use super::columns::Columns;
use crate::{
    error::{AuditError, Result},
    model::{Statement, StatementKind},
};
use calamine::{Data, Reader, Xlsx};
use std::io::{BufRead, Cursor, Read};

fn cell_text(cell: &Data) -> String {
    cell.to_string().trim().to_string()
}

pub struct XlsxStatement;

impl crate::traits::ReadStatement for XlsxStatement {
    fn read<R: BufRead>(mut r: R, kind: StatementKind) -> Result<Statement> {
        // zip-архиву нужен Seek
        let mut buf = Vec::new();
        r.read_to_end(&mut buf)?;
        let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(buf))?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| AuditError::MalformedInput(format!("{kind}: workbook has no sheets")))??;
        let first_row = range.start().map_or(0, |(row, _)| row as usize);

        let mut rows = range.rows();
        let headers: Vec<String> = rows.next().map(|h| h.iter().map(cell_text).collect()).unwrap_or_default();
        let columns = Columns::detect(headers.as_slice(), kind)?;

        let mut items = Vec::new();
        for (i, row) in rows.enumerate() {
            let cells: Vec<String> = row.iter().map(cell_text).collect();
            // +2: заголовок и нумерация строк Excel с единицы
            if let Some(item) = columns.line_item(kind, first_row + i + 2, cells.as_slice())? {
                items.push(item);
            }
        }

        tracing::debug!(statement = %kind, rows = items.len(), "workbook read");
        Ok(Statement::new(kind, items))
    }
}
