use crate::error::{LocSheetError, Result};
use crate::table;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Key-to-replacement-text lookup built from an edited mapping file.
///
/// Duplicate keys resolve by overwrite, so the last occurrence in file order
/// wins. The index is read-only once loaded.
#[derive(Debug, Default)]
pub struct TranslationIndex {
    entries: HashMap<String, String>,
}

impl TranslationIndex {
    /// Load the index from a 2-column mapping file.
    ///
    /// Records need at least two fields; shorter records are skipped. Fields
    /// beyond the second are ignored.
    pub fn load(mapping: &Path) -> Result<Self> {
        if !mapping.is_file() {
            return Err(LocSheetError::MappingNotFound {
                path: mapping.display().to_string(),
            });
        }

        let mut entries = HashMap::new();
        let mut reader = table::sheet_reader(BufReader::new(File::open(mapping)?));

        for result in reader.records() {
            let record = result?;
            if record.len() < 2 {
                continue;
            }
            entries.insert(record[0].to_string(), record[1].to_string());
        }

        Ok(Self { entries })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn load_from(content: &str) -> TranslationIndex {
        let dir = TempDir::new().unwrap();
        let mapping = dir.path().join("mapping.csv");
        fs::write(&mapping, content).unwrap();
        TranslationIndex::load(&mapping).unwrap()
    }

    #[test]
    fn test_loads_key_text_pairs() {
        let index = load_from("\"greet\",\"Servus\"\n\"farewell\",\"Pfiat di\"\n");

        assert_eq!(index.len(), 2);
        assert_eq!(index.get("greet"), Some("Servus"));
        assert_eq!(index.get("farewell"), Some("Pfiat di"));
        assert_eq!(index.get("unknown"), None);
    }

    #[test]
    fn test_duplicate_keys_last_wins() {
        let index = load_from("\"k\",\"first\"\n\"k\",\"second\"\n");

        assert_eq!(index.len(), 1);
        assert_eq!(index.get("k"), Some("second"));
    }

    #[test]
    fn test_short_records_are_skipped() {
        let index = load_from("\"lonely\"\n\"greet\",\"Servus\"\n");

        assert_eq!(index.len(), 1);
        assert!(!index.contains("lonely"));
        assert!(index.contains("greet"));
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let index = load_from("\"greet\",\"Servus\",\"leftover\"\n");
        assert_eq!(index.get("greet"), Some("Servus"));
    }

    #[test]
    fn test_missing_mapping_file() {
        let result = TranslationIndex::load(Path::new("no-such-mapping.csv"));
        assert!(matches!(result, Err(LocSheetError::MappingNotFound { .. })));
    }

    #[test]
    fn test_empty_mapping_is_valid() {
        let index = load_from("");
        assert!(index.is_empty());
    }
}
