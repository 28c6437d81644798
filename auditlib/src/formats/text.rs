//! Текстовый отчёт для скачивания / вывода в терминал.

use crate::{engagement::Assessment, error::Result};
use std::io::Write;

pub struct TextReport;

impl crate::traits::WriteReport for TextReport {
    fn write<W: Write>(mut w: W, report: &Assessment) -> Result<()> {
        writeln!(w, "Calculated Audit Ratios")?;
        writeln!(w, "-----------------------")?;
        for (kind, value) in report.ratios.iter() {
            match (value.is_computable(), kind.is_percentage()) {
                (true, true) => writeln!(w, "{kind}: {value}%")?,
                _ => writeln!(w, "{kind}: {value}")?,
            }
        }
        writeln!(w)?;
        writeln!(w, "Audit Comment & Engagement Decision")?;
        writeln!(w, "-----------------------------------")?;
        writeln!(w, "Engagement Risk: {}", report.decision.risk)?;
        writeln!(w, "{}", report.decision.finding.message())?;
        w.flush()?;
        Ok(())
    }
}
