use auditlib::{
    decision::Thresholds,
    engagement::{assess, AssessOptions},
    error::{AuditError, Result},
    formats::{csv::{CsvReport, CsvStatement}, text::TextReport, xlsx::XlsxStatement, xml::XmlReport},
    locate::{LabelMatcher, MatchMode},
    model::{Statement, StatementKind},
    traits::{ReadStatement, WriteReport},
};
use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Fmt {
    Text,
    Csv,
    Xml,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum InFmt {
    /// .xlsx / .xlsm as Excel, everything else as CSV
    Auto,
    Csv,
    Xlsx,
}

impl InFmt {
    fn resolve(self, path: &Path) -> InFmt {
        match self {
            InFmt::Auto => match path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase).as_deref() {
                Some("xlsx" | "xlsm") => InFmt::Xlsx,
                _ => InFmt::Csv,
            },
            other => other,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Matching {
    Contains,
    Exact,
}

impl From<Matching> for MatchMode {
    fn from(m: Matching) -> Self {
        match m {
            Matching::Contains => MatchMode::Contains,
            Matching::Exact => MatchMode::Exact,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "audit", version, about = "Engagement risk assessment from a balance sheet and a P&L statement")]
struct Cli {
    /// Balance sheet (CSV or .xlsx with label and amount columns)
    #[arg(long = "balance-sheet")]
    balance_sheet: String,

    /// Profit & loss statement (CSV or .xlsx with label and amount columns)
    #[arg(long = "pnl")]
    pnl: String,

    /// Input format of both statements
    #[arg(long = "input-format", value_enum, default_value = "auto")]
    input_format: InFmt,

    /// Report file (stdout by default)
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Report format
    #[arg(long = "format", value_enum, default_value = "text")]
    format: Fmt,

    /// How row labels are compared with line item names
    #[arg(long = "match", value_enum, default_value = "contains")]
    matching: Matching,

    /// Current ratio below this is high risk
    #[arg(long = "min-current-ratio")]
    min_current_ratio: Option<Decimal>,

    /// Net profit margin (percent) below this calls for caution
    #[arg(long = "min-net-margin")]
    min_net_margin: Option<Decimal>,

    /// Interest coverage below this is high risk
    #[arg(long = "min-interest-coverage")]
    min_interest_coverage: Option<Decimal>,

    /// Debug logging
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

impl Cli {
    fn options(&self) -> AssessOptions {
        let defaults = Thresholds::default();
        AssessOptions {
            matcher: LabelMatcher::new(self.matching.into()),
            thresholds: Thresholds {
                min_current_ratio: self.min_current_ratio.unwrap_or(defaults.min_current_ratio),
                min_net_margin: self.min_net_margin.unwrap_or(defaults.min_net_margin),
                min_interest_coverage: self.min_interest_coverage.unwrap_or(defaults.min_interest_coverage),
            },
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_statement(path: &str, format: InFmt, kind: StatementKind) -> Result<Statement> {
    let path = Path::new(path);
    let format = format.resolve(path);
    tracing::info!(statement = %kind, path = %path.display(), format = ?format, "reading statement");

    let reader = BufReader::new(File::open(path)?);
    match format {
        InFmt::Xlsx => XlsxStatement::read(reader, kind),
        _ => CsvStatement::read(reader, kind),
    }
}

fn run(cli: &Cli) -> Result<()> {
    let bs = read_statement(&cli.balance_sheet, cli.input_format, StatementKind::BalanceSheet)?;
    let pl = read_statement(&cli.pnl, cli.input_format, StatementKind::ProfitAndLoss)?;

    let report = assess(&bs, &pl, &cli.options())?;

    // writer
    let mut writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    match cli.format {
        Fmt::Text => TextReport::write(&mut writer, &report),
        Fmt::Csv => CsvReport::write(&mut writer, &report),
        Fmt::Xml => XmlReport::write(&mut writer, &report),
    }?;

    if let Some(path) = &cli.output {
        tracing::info!(path = %path, "report written");
    }
    writer.flush().map_err(AuditError::from)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_format_follows_extension() {
        assert!(matches!(InFmt::Auto.resolve(Path::new("bs.xlsx")), InFmt::Xlsx));
        assert!(matches!(InFmt::Auto.resolve(Path::new("BS.XLSM")), InFmt::Xlsx));
        assert!(matches!(InFmt::Auto.resolve(Path::new("bs.csv")), InFmt::Csv));
        assert!(matches!(InFmt::Auto.resolve(Path::new("bs")), InFmt::Csv));
        assert!(matches!(InFmt::Csv.resolve(Path::new("bs.xlsx")), InFmt::Csv));
    }
}
