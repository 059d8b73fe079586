//! Append-only ledger file. The store is the only component touching the
//! file; records are never updated in place, corrections go through
//! `rewrite`.

use super::codec;
use super::fs_utils::replace_file;
use crate::errors::{AppError, AppResult};
use crate::models::record::LedgerRecord;
use csv::{ReaderBuilder, StringRecord, Writer, WriterBuilder};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const DELIMITER: u8 = b';';

#[derive(Debug, Clone)]
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Create the file with just its header if it does not exist yet.
    pub fn ensure_created(&self) -> AppResult<bool> {
        if self.exists() {
            return Ok(false);
        }
        self.rewrite(&[])?;
        Ok(true)
    }

    /// Read every data row. A missing file is an empty ledger.
    /// Any malformed row aborts the read.
    pub fn read_all(&self) -> AppResult<Vec<LedgerRecord>> {
        let file = match fs::File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut rdr = ReaderBuilder::new()
            .delimiter(DELIMITER)
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut records = Vec::new();
        let mut row = StringRecord::new();
        let mut first = true;

        while rdr.read_record(&mut row)? {
            let line = row.position().map(|p| p.line() as usize).unwrap_or(0);

            if first {
                first = false;
                if !codec::is_header(&row) {
                    return Err(AppError::MalformedRecord {
                        line,
                        reason: "missing or unknown header row".into(),
                    });
                }
                continue;
            }

            records.push(codec::decode(&row, line)?);
        }

        Ok(records)
    }

    /// Append rows in a single open/flush/close. The header is written
    /// first iff the file is new or empty.
    pub fn append(&self, records: &[LedgerRecord]) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let is_empty = file.metadata()?.len() == 0;

        let mut wtr = writer(file);
        if is_empty {
            wtr.write_record(&codec::header_record())?;
        }
        for r in records {
            wtr.write_record(&codec::encode(r))?;
        }
        wtr.flush()?;

        Ok(())
    }

    /// Replace the whole ledger with header + `records`.
    pub fn rewrite(&self, records: &[LedgerRecord]) -> AppResult<()> {
        let bytes = to_bytes(records)?;
        replace_file(&self.path, &bytes)
    }
}

fn writer<W: Write>(w: W) -> Writer<W> {
    WriterBuilder::new()
        .delimiter(DELIMITER)
        .flexible(true)
        .from_writer(w)
}

/// Serialize header + records exactly as they would land on disk.
pub fn to_bytes(records: &[LedgerRecord]) -> AppResult<Vec<u8>> {
    let mut wtr = writer(Vec::new());
    wtr.write_record(&codec::header_record())?;
    for r in records {
        wtr.write_record(&codec::encode(r))?;
    }
    wtr.into_inner()
        .map_err(|e| AppError::Io(io::Error::other(e.to_string())))
}
