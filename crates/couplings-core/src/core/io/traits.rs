use super::{LoadError, ParseWarning};
use crate::core::models::CouplingContainer;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Defines the interface for reading a coupling dataset format.
///
/// Implementors handle format-specific parsing and report per-row problems
/// as warnings rather than failing the whole parse.
pub trait DatasetFile {
    /// Reads a record store from a reader.
    ///
    /// # Return
    ///
    /// Returns the populated container together with one warning per
    /// skipped row.
    ///
    /// # Errors
    ///
    /// Returns an error only for I/O failures or an unusable header; a
    /// malformed data row is skipped and reported, never fatal.
    fn read_from(reader: impl Read) -> Result<(CouplingContainer, Vec<ParseWarning>), LoadError>;

    /// Reads a record store from a file path.
    fn read_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<(CouplingContainer, Vec<ParseWarning>), LoadError> {
        let file = File::open(path)?;
        Self::read_from(BufReader::new(file))
    }
}
