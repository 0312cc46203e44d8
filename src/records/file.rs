//! Flat-file persistence for records.

use super::codec;
use crate::error::{Result, TrackerError};
use crate::types::Record;
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// The on-disk record file of one session.
///
/// Every save truncates and rewrites the whole file in place. There is no
/// temp-file rename, so a crash mid-write can leave a partial file.
#[derive(Clone, Debug)]
pub struct RecordFile {
    path: PathBuf,
}

impl RecordFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all decodable lines. A missing file yields an empty list.
    pub fn load(&self) -> Result<Vec<Record>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let reader = BufReader::new(File::open(&self.path)?);
        let mut records = Vec::new();
        for (line_no, bytes) in reader.split(b'\n').enumerate() {
            let bytes = bytes?;
            let line = bytes.strip_suffix(b"\r").unwrap_or(&bytes[..]);
            let decoded = std::str::from_utf8(line)
                .map_err(|e| TrackerError::MalformedLine {
                    reason: format!("invalid UTF-8: {}", e),
                })
                .and_then(codec::decode);
            match decoded {
                Ok(record) => records.push(record),
                Err(e) => debug!(
                    path = %self.path.display(),
                    line = line_no + 1,
                    error = %e,
                    "skipping record line"
                ),
            }
        }
        Ok(records)
    }

    /// Rewrite the file with the given records, one per line.
    pub fn save(&self, records: &[Record]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;
        let mut writer = BufWriter::new(file);
        for record in records {
            writer.write_all(codec::encode(record).as_bytes())?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        Ok(())
    }
}
