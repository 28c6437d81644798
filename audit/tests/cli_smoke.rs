use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

const BALANCE_SHEET: &str = "Particulars,Amount
Current Assets,200
Current Liabilities,100
Total Liabilities,300
Total Equity,500
Total Assets,1000
";

fn write(dir: &TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, body).expect("write fixture");
    path
}

fn audit(bs: &Path, pl: &Path) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_audit"))
        .arg("--balance-sheet")
        .arg(bs)
        .arg("--pnl")
        .arg(pl)
        .env("RUST_LOG", "off")
        .output()
        .expect("run audit")
}

#[test]
fn missing_line_item_is_reported_readably() {
    let dir = TempDir::new().unwrap();
    let bs = write(&dir, "bs.csv", BALANCE_SHEET);
    let pl = write(&dir, "pl.csv", "Particulars,Amount\nRevenue,1000\nGross Profit,400\nInterest Expense,20\n");

    let out = audit(&bs, &pl);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("error: missing required line items: Net Profit"), "{stderr}");
    assert!(!stderr.contains("MissingFields"), "{stderr}");
}

#[test]
fn xlsx_statement_is_picked_by_extension() {
    let dir = TempDir::new().unwrap();
    let bs = write(&dir, "bs.csv", BALANCE_SHEET);
    let pl = Path::new(env!("CARGO_MANIFEST_DIR")).join("../auditlib/tests/data/pnl.xlsx");

    let out = audit(&bs, &pl);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8_lossy(&out.stdout);
    // 50 / -20
    assert!(stdout.contains("Interest Coverage Ratio: -2.50"), "{stdout}");
    assert!(stdout.contains("Engagement Risk: HIGH_RISK"), "{stdout}");
}
