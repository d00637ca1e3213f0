use crate::core::models::StructureModel;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Interface for reading molecular structure file formats.
///
/// Implementors handle format-specific parsing; the provided path-based entry
/// point scopes the file handle so it closes on every exit path, including
/// parse failure.
pub trait StructureFile {
    /// The error type for read operations.
    type Error: Error + From<io::Error>;

    /// Reads a structure model from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if the content cannot be parsed as a structure or I/O
    /// fails.
    fn read_from(reader: &mut impl BufRead) -> Result<StructureModel, Self::Error>;

    /// Reads a structure model from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<StructureModel, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }
}
