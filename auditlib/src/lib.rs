//! auditlib — разбор баланса и P&L, расчёт коэффициентов и оценка риска задания.

pub mod decision;
pub mod engagement;
pub mod error;
pub mod locate;
pub mod model;
pub mod ratios;
pub mod traits;

pub mod formats {
    pub mod columns;
    pub mod csv;
    pub mod text;
    pub mod xlsx;
    pub mod xml;
}
