use super::traits::DatasetFile;
use super::{LoadError, ParseWarning};
use crate::core::models::{CouplingContainer, CouplingRecord, residue};
use csv::StringRecord;
use serde::Deserialize;
use std::io::Read;

const REQUIRED_COLUMNS: [&str; 2] = ["i", "j"];

/// Row shape of a `coupling_scores.csv` file.
///
/// Columns: `i, A_i, j, A_j, fn, cn, segment_i, segment_j, probability,
/// dist_intra, dist_multimer, dist, precision`. The segment columns are
/// accepted but not retained. Empty numeric fields deserialize to `None`.
#[derive(Debug, Deserialize)]
struct CouplingRow {
    i: usize,
    #[serde(rename = "A_i")]
    a_i: Option<String>,
    j: usize,
    #[serde(rename = "A_j")]
    a_j: Option<String>,
    #[serde(rename = "fn")]
    fn_score: Option<f64>,
    cn: Option<f64>,
    probability: Option<f64>,
    dist_intra: Option<f64>,
    dist_multimer: Option<f64>,
    dist: Option<f64>,
    precision: Option<f64>,
}

/// Reader for the standard coupling-scores CSV format produced by
/// evolutionary-coupling pipelines.
pub struct CouplingScoresFile;

impl DatasetFile for CouplingScoresFile {
    fn read_from(reader: impl Read) -> Result<(CouplingContainer, Vec<ParseWarning>), LoadError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let headers = csv_reader.headers()?.clone();
        check_required_columns(&headers)?;

        let mut container = CouplingContainer::new();
        let mut warnings = Vec::new();

        for result in csv_reader.records() {
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    warnings.push(ParseWarning {
                        line: error_line(&e),
                        reason: e.to_string(),
                    });
                    continue;
                }
            };
            let line = record_line(&record);
            let row: CouplingRow = match record.deserialize(Some(&headers)) {
                Ok(row) => row,
                Err(e) => {
                    warnings.push(ParseWarning {
                        line,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };
            match validate_row(row) {
                Ok(coupling) => container.add_record(coupling),
                Err(reason) => warnings.push(ParseWarning { line, reason }),
            }
        }

        Ok((container, warnings))
    }
}

fn check_required_columns(headers: &StringRecord) -> Result<(), LoadError> {
    for name in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == name) {
            return Err(LoadError::MissingColumn(name));
        }
    }
    Ok(())
}

pub(super) fn record_line(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

pub(super) fn error_line(error: &csv::Error) -> u64 {
    error.position().map(|p| p.line()).unwrap_or(0)
}

pub(super) fn check_finite(name: &str, value: Option<f64>) -> Result<(), String> {
    match value {
        Some(v) if !v.is_finite() => Err(format!("non-finite value in column '{}'", name)),
        _ => Ok(()),
    }
}

fn parse_residue_code(name: &str, value: Option<String>) -> Result<Option<char>, String> {
    let Some(value) = value else {
        return Ok(None);
    };
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let mut chars = trimmed.chars();
    let code = chars.next().unwrap_or_default();
    if chars.next().is_some() || !residue::is_standard_code(code) {
        return Err(format!(
            "invalid residue code '{}' in column '{}'",
            trimmed, name
        ));
    }
    Ok(Some(code))
}

fn validate_row(row: CouplingRow) -> Result<CouplingRecord, String> {
    check_finite("fn", row.fn_score)?;
    check_finite("cn", row.cn)?;
    check_finite("probability", row.probability)?;
    check_finite("dist_intra", row.dist_intra)?;
    check_finite("dist_multimer", row.dist_multimer)?;
    check_finite("dist", row.dist)?;
    check_finite("precision", row.precision)?;

    Ok(CouplingRecord {
        i: row.i,
        j: row.j,
        residue_i: parse_residue_code("A_i", row.a_i)?,
        residue_j: parse_residue_code("A_j", row.a_j)?,
        fn_score: row.fn_score,
        cn: row.cn,
        probability: row.probability,
        dist_intra: row.dist_intra,
        dist_multimer: row.dist_multimer,
        dist: row.dist,
        precision: row.precision,
    })
}
