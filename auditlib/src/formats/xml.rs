//! XML-отчёт: <AuditReport><Ratio name=".." unit="..">..</Ratio>...<Decision risk="..">..</Decision></AuditReport>

use crate::{
    engagement::Assessment,
    error::{AuditError, Result},
};
use quick_xml::se::to_string;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize, Debug)]
struct XmlRatio<'a> {
    #[serde(rename = "@name")]
    name: &'a str,
    #[serde(rename = "@unit")]
    unit: &'a str,
    #[serde(rename = "$text")]
    value: String,
}

#[derive(Serialize, Debug)]
struct XmlDecision<'a> {
    #[serde(rename = "@risk")]
    risk: String,
    #[serde(rename = "$text")]
    comment: &'a str,
}

#[derive(Serialize, Debug)]
#[serde(rename = "AuditReport")]
struct XmlAuditReport<'a> {
    #[serde(rename = "Ratio")]
    ratios: Vec<XmlRatio<'a>>,
    #[serde(rename = "Decision")]
    decision: XmlDecision<'a>,
}

pub struct XmlReport;

impl crate::traits::WriteReport for XmlReport {
    fn write<W: Write>(mut w: W, report: &Assessment) -> Result<()> {
        let ratios = report
            .ratios
            .iter()
            .map(|(kind, value)| XmlRatio {
                name: kind.name(),
                unit: if kind.is_percentage() { "percent" } else { "times" },
                value: value.to_string(),
            })
            .collect();

        let x = XmlAuditReport {
            ratios,
            decision: XmlDecision {
                risk: report.decision.risk.to_string(),
                comment: report.decision.finding.message(),
            },
        };

        let s = to_string(&x).map_err(|e| AuditError::Xml(format!("{e}")))?;
        w.write_all(s.as_bytes())?;
        Ok(())
    }
}
