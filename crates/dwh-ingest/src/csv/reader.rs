//! CSV file reading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};

use crate::error::{LoadError, Result};

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Returns up to the first four bytes of the file.
fn read_prefix(path: &Path) -> Result<Vec<u8>> {
    let mut file = File::open(path).map_err(|e| LoadError::from_io(path, e))?;
    let mut buffer = [0u8; 4];
    let bytes_read = file
        .read(&mut buffer)
        .map_err(|e| LoadError::from_io(path, e))?;
    Ok(buffer[..bytes_read].to_vec())
}

fn check_encoding(path: &Path, prefix: &[u8]) -> Result<()> {
    let encoding = match prefix {
        [0xFF, 0xFE, ..] => "UTF-16 LE",
        [0xFE, 0xFF, ..] => "UTF-16 BE",
        _ => return Ok(()),
    };
    Err(LoadError::UnsupportedEncoding {
        path: path.to_path_buf(),
        encoding,
    })
}

/// Rejects files with a UTF-16 byte order mark.
///
/// A UTF-8 BOM is accepted.
pub fn validate_encoding(path: &Path) -> Result<()> {
    check_encoding(path, &read_prefix(path)?)
}

/// Reads a headered CSV file into a DataFrame with every column as text.
///
/// Empty cells are read as nulls. A file with no bytes, or only a UTF-8
/// BOM, has no header row and is rejected.
pub fn read_csv_table(path: &Path) -> Result<DataFrame> {
    let prefix = read_prefix(path)?;
    check_encoding(path, &prefix)?;
    if prefix.strip_prefix(&UTF8_BOM).unwrap_or(prefix.as_slice()).is_empty() {
        return Err(LoadError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let parse_error = |e: polars::prelude::PolarsError| LoadError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    };
    // An inference window of zero rows makes every column a String column.
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(parse_error)?
        .finish()
        .map_err(parse_error)
}
