//! Трэйты чтения отчётов и записи итогового отчёта на основе std::io::{BufRead, Write}.

use crate::{
    engagement::Assessment,
    error::Result,
    model::{Statement, StatementKind},
};
use std::io::{BufRead, Write};

pub trait ReadStatement {
    fn read<R: BufRead>(r: R, kind: StatementKind) -> Result<Statement>;
}

pub trait WriteReport {
    fn write<W: Write>(w: W, report: &Assessment) -> Result<()>;
}
