use crate::error::{LocSheetError, Result};
use crate::merger::TranslationIndex;
use crate::table::{self, HEADER_ROWS};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeReport {
    pub source: PathBuf,
    pub mapping: PathBuf,
    pub output: PathBuf,
    pub translations_loaded: usize,
    pub rows_matched: usize,
    pub rows_emitted: usize,
    pub rows_skipped: usize,
    pub header_lines_preserved: usize,
    pub merged_at: DateTime<Utc>,
}

/// Merges an edited mapping back into a full sheet.
///
/// The source header block is copied as raw lines: it is not guaranteed to be
/// valid quoted CSV (bare labels are common), so a parse-and-requote round
/// trip would mangle it.
pub struct OutputBuilder {
    header_rows: usize,
}

impl OutputBuilder {
    pub fn new() -> Self {
        Self {
            header_rows: HEADER_ROWS,
        }
    }

    /// Build `output` from `source` and the mapping at `mapping`.
    ///
    /// Each retained source row becomes `(key, original_text, resolved)`,
    /// where `resolved` is the mapping entry for `key` when one exists and
    /// the row's own third field otherwise. Both input paths are checked
    /// before anything is read, and the output file is only created after
    /// the source has been fully read.
    pub fn merge(&self, source: &Path, mapping: &Path, output: &Path) -> Result<MergeReport> {
        if !source.is_file() {
            return Err(LocSheetError::SourceNotFound {
                path: source.display().to_string(),
            });
        }

        let index = TranslationIndex::load(mapping)?;

        let mut input = BufReader::new(File::open(source)?);
        let header_lines = table::capture_raw_header(&mut input, self.header_rows)?;

        let mut reader = table::sheet_reader(input);
        let mut rows: Vec<[String; 3]> = Vec::new();
        let mut rows_matched = 0;
        let mut rows_skipped = 0;

        for result in reader.records() {
            let record = result?;
            if record.len() < 3 {
                rows_skipped += 1;
                continue;
            }

            let resolved = match index.get(&record[0]) {
                Some(text) => {
                    rows_matched += 1;
                    text.to_string()
                }
                None => record[2].to_string(),
            };

            rows.push([record[0].to_string(), record[1].to_string(), resolved]);
        }

        let mut out = BufWriter::new(File::create(output)?);
        for line in &header_lines {
            out.write_all(line.as_bytes())?;
        }

        let mut writer = table::quoted_writer(out);
        for row in &rows {
            writer.write_record(row)?;
        }
        writer.flush()?;

        Ok(MergeReport {
            source: source.to_path_buf(),
            mapping: mapping.to_path_buf(),
            output: output.to_path_buf(),
            translations_loaded: index.len(),
            rows_matched,
            rows_emitted: rows.len(),
            rows_skipped,
            header_lines_preserved: header_lines.len(),
            merged_at: Utc::now(),
        })
    }
}

impl Default for OutputBuilder {
    fn default() -> Self {
        Self::new()
    }
}
