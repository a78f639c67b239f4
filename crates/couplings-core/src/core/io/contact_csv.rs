use super::coupling_csv::{check_finite, error_line, record_line};
use super::traits::DatasetFile;
use super::{LoadError, ParseWarning};
use crate::core::models::{CouplingContainer, CouplingRecord};
use csv::StringRecord;
use serde::Deserialize;
use std::io::Read;

const REQUIRED_COLUMNS: [&str; 3] = ["i", "j", "dist"];

#[derive(Debug, Deserialize)]
struct ContactRow {
    i: usize,
    j: usize,
    dist: f64,
}

/// Reader for `contacts_monomer.csv`: known-structure contacts as
/// `i, j, dist` rows. The resulting records carry only the distance.
pub struct MonomerContactsFile;

impl DatasetFile for MonomerContactsFile {
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
            match record.deserialize::<ContactRow>(Some(&headers)) {
                Ok(row) => match check_finite("dist", Some(row.dist)) {
                    Ok(()) => container.add_record(CouplingRecord::from_contact(
                        row.i, row.j, row.dist,
                    )),
                    Err(reason) => warnings.push(ParseWarning { line, reason }),
                },
                Err(e) => warnings.push(ParseWarning {
                    line,
                    reason: e.to_string(),
                }),
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
