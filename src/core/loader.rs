//! Table loading utilities
//!
//! Reads the five input tables from a data directory. Each table is either
//! `<table>.csv` (comma separated, header row with field names) or
//! `<table>.tbl` (TPC-H `dbgen` output: `|` separated, no header, trailing
//! `|`). When both exist the `.csv` file wins.

use csv::{ReaderBuilder, StringRecord, Trim};
use miette::Diagnostic;
use std::fs::File;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::core::dataset::Dataset;
use crate::core::entity::Record;

#[derive(Debug, Error, Diagnostic)]
pub enum LoadError {
    #[error("data directory {0} does not exist")]
    #[diagnostic(code(partpromo::load::no_dir))]
    MissingDirectory(PathBuf),

    #[error("no data file for table '{table}' in {dir}")]
    #[diagnostic(
        code(partpromo::load::missing_table),
        help("expected {table}.csv or {table}.tbl")
    )]
    MissingTable { table: &'static str, dir: PathBuf },

    #[error("failed to read {path}")]
    #[diagnostic(code(partpromo::load::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}:{line}: {message}")]
    #[diagnostic(code(partpromo::load::parse))]
    Parse {
        path: PathBuf,
        line: u64,
        message: String,
    },
}

/// On-disk layout of a table file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    Tbl,
}

impl TableFormat {
    fn extension(self) -> &'static str {
        match self {
            TableFormat::Csv => "csv",
            TableFormat::Tbl => "tbl",
        }
    }
}

/// Load all five tables from a directory
pub fn load_dataset(dir: &Path) -> Result<Dataset, LoadError> {
    if !dir.is_dir() {
        return Err(LoadError::MissingDirectory(dir.to_path_buf()));
    }

    Ok(Dataset {
        suppliers: load_table(dir)?,
        nations: load_table(dir)?,
        parts: load_table(dir)?,
        part_supplies: load_table(dir)?,
        line_items: load_table(dir)?,
    })
}

/// Find the file holding table T
pub fn find_table_file<T: Record>(dir: &Path) -> Option<(PathBuf, TableFormat)> {
    [TableFormat::Csv, TableFormat::Tbl]
        .into_iter()
        .map(|format| (dir.join(format!("{}.{}", T::TABLE, format.extension())), format))
        .find(|(path, _)| path.is_file())
}

/// Load every row of table T from a directory
pub fn load_table<T: Record>(dir: &Path) -> Result<Vec<T>, LoadError> {
    let (path, format) = find_table_file::<T>(dir).ok_or_else(|| LoadError::MissingTable {
        table: T::TABLE,
        dir: dir.to_path_buf(),
    })?;

    let rows = match format {
        TableFormat::Csv => read_csv(&path)?,
        TableFormat::Tbl => read_tbl(&path)?,
    };

    debug!(table = T::TABLE, path = %path.display(), rows = rows.len(), "loaded table");
    Ok(rows)
}

fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_error(path: &Path, err: &csv::Error) -> LoadError {
    LoadError::Parse {
        path: path.to_path_buf(),
        line: err.position().map_or(0, |p| p.line()),
        message: err.to_string(),
    }
}

/// Read a headered CSV file; columns are matched to fields by name
fn read_csv<T: Record>(path: &Path) -> Result<Vec<T>, LoadError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::Headers)
        .from_reader(open(path)?);

    reader
        .deserialize()
        .map(|row| row.map_err(|e| parse_error(path, &e)))
        .collect()
}

/// Read a `dbgen` table; columns are picked by position
fn read_tbl<T: Record>(path: &Path) -> Result<Vec<T>, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b'|')
        .quoting(false)
        .flexible(true)
        .from_reader(open(path)?);

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| parse_error(path, &e))?;
        let line = record.position().map_or(0, |p| p.line());

        let mut projected = StringRecord::with_capacity(64, T::TBL_COLUMNS.len());
        for &column in T::TBL_COLUMNS {
            let field = record.get(column).ok_or_else(|| LoadError::Parse {
                path: path.to_path_buf(),
                line,
                message: format!(
                    "expected at least {} columns, found {}",
                    column + 1,
                    record.len()
                ),
            })?;
            projected.push_field(field);
        }

        let row = projected.deserialize(None).map_err(|e| LoadError::Parse {
            path: path.to_path_buf(),
            line,
            message: e.to_string(),
        })?;
        rows.push(row);
    }

    Ok(rows)
}
