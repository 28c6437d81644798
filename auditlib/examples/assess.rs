use auditlib::{
    engagement::{assess, AssessOptions},
    formats::{csv::CsvStatement, text::TextReport},
    model::StatementKind,
    traits::{ReadStatement, WriteReport},
};
use std::{fs::File, io::BufReader};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Пример: cargo run --example assess -- balance_sheet.csv pnl.csv
    let mut args = std::env::args().skip(1);
    let (Some(bs_path), Some(pl_path)) = (args.next(), args.next()) else {
        return Err("usage: assess <balance_sheet.csv> <pnl.csv>".into());
    };

    let bs = CsvStatement::read(BufReader::new(File::open(bs_path)?), StatementKind::BalanceSheet)?;
    let pl = CsvStatement::read(BufReader::new(File::open(pl_path)?), StatementKind::ProfitAndLoss)?;
    let report = assess(&bs, &pl, &AssessOptions::default())?;
    TextReport::write(std::io::stdout(), &report)?;
    Ok(())
}
