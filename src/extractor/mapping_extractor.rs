use crate::error::{LocSheetError, Result};
use crate::table::{self, HEADER_ROWS};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractReport {
    pub source: PathBuf,
    pub mapping: PathBuf,
    pub rows_written: usize,
    pub rows_skipped: usize,
    pub header_records_skipped: usize,
    pub extracted_at: DateTime<Utc>,
}

/// Pulls `(key, original_text)` pairs out of a source sheet into a mapping
/// file an operator can edit by hand.
pub struct MappingExtractor {
    header_rows: usize,
}

impl MappingExtractor {
    pub fn new() -> Self {
        Self {
            header_rows: HEADER_ROWS,
        }
    }

    /// Extract the mapping table from `source` and write it to `mapping`.
    ///
    /// Data rows need at least three fields; anything shorter is dropped
    /// without erroring. An empty source produces an empty mapping file and
    /// a zero-count report.
    pub fn extract(&self, source: &Path, mapping: &Path) -> Result<ExtractReport> {
        if !source.is_file() {
            return Err(LocSheetError::SourceNotFound {
                path: source.display().to_string(),
            });
        }

        let input = BufReader::new(File::open(source)?);
        let mut reader = table::sheet_reader(input);
        let mut writer = table::quoted_writer(BufWriter::new(File::create(mapping)?));

        let mut rows_written = 0;
        let mut rows_skipped = 0;
        let mut header_records_skipped = 0;

        for result in reader.records() {
            let record = result?;

            // The header block occupies the first HEADER_ROWS physical lines.
            // Records are skipped by starting line rather than by record
            // index: the reader elides blank lines, and the conventional
            // header has one.
            let line = record.position().map_or(0, |pos| pos.line());
            if line <= self.header_rows as u64 {
                header_records_skipped += 1;
                continue;
            }

            if record.len() < 3 {
                rows_skipped += 1;
                continue;
            }

            writer.write_record([&record[0], &record[1]])?;
            rows_written += 1;
        }

        writer.flush()?;

        Ok(ExtractReport {
            source: source.to_path_buf(),
            mapping: mapping.to_path_buf(),
            rows_written,
            rows_skipped,
            header_records_skipped,
            extracted_at: Utc::now(),
        })
    }
}

impl Default for MappingExtractor {
    fn default() -> Self {
        Self::new()
    }
}
