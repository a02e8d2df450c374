//! CSV output generation.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use polars::prelude::{CsvWriter, SerWriter};
use tracing::{debug, info};

use crate::error::{ExportError, Result};
use crate::types::OutputTable;

const TEMP_SUFFIX: &str = "csv.tmp";

/// Create the output directory (and parents) if it does not exist.
pub fn ensure_output_dir(output_dir: &Path) -> Result<()> {
    fs::create_dir_all(output_dir).map_err(|source| ExportError::CreateDirectory {
        path: output_dir.to_path_buf(),
        source,
    })
}

/// Target path of table `name` in `output_dir`.
pub fn table_path(output_dir: &Path, name: &str) -> PathBuf {
    output_dir.join(format!("{name}.csv"))
}

/// Write one table to `<output_dir>/<name>.csv`, replacing any existing file.
pub fn write_csv_table(output_dir: &Path, table: &mut OutputTable) -> Result<PathBuf> {
    ensure_output_dir(output_dir)?;

    let path = table_path(output_dir, &table.name);
    let temp_path = output_dir.join(format!("{}.{TEMP_SUFFIX}", table.name));

    if let Err(err) = write_temp_file(&temp_path, table) {
        // The target is untouched; only the partial temp file is discarded
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }

    fs::rename(&temp_path, &path).map_err(|source| {
        let _ = fs::remove_file(&temp_path);
        ExportError::Rename {
            from: temp_path.clone(),
            to: path.clone(),
            source,
        }
    })?;

    info!(
        table = %table.name,
        records = table.record_count(),
        path = %path.display(),
        "table written"
    );
    Ok(path)
}

fn write_temp_file(temp_path: &Path, table: &mut OutputTable) -> Result<()> {
    let write_error = |source| ExportError::Write {
        path: temp_path.to_path_buf(),
        source,
    };

    let file = File::create(temp_path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    CsvWriter::new(&mut writer)
        .include_header(true)
        .finish(&mut table.data)
        .map_err(|err| ExportError::DataFrame {
            table: table.name.clone(),
            message: err.to_string(),
        })?;
    writer.flush().map_err(write_error)?;
    writer
        .into_inner()
        .map_err(|err| write_error(err.into_error()))?
        .sync_all()
        .map_err(write_error)?;

    debug!(path = %temp_path.display(), "temporary file complete");
    Ok(())
}
