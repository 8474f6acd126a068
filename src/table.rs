use crate::error::Result;
use csv::{QuoteStyle, Reader, Writer};
use std::io::{BufRead, Read, Write};

/// Number of leading records reserved as the opaque header block.
pub const HEADER_ROWS: usize = 3;

/// Structured reader for sheet data.
///
/// Sheets carry no parseable column headers and data rows may have trailing
/// extra fields, so the reader is headerless and flexible.
pub fn sheet_reader<R: Read>(input: R) -> Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input)
}

/// Writer for sheet data with every field quoted.
///
/// Translated text routinely contains commas and embedded newlines, so
/// quoting is mandatory on write rather than minimal.
pub fn quoted_writer<W: Write>(output: W) -> Writer<W> {
    csv::WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(output)
}

/// Read up to `rows` raw lines from `input`, terminators included.
///
/// The header block is not guaranteed to be valid quoted CSV, so it must not
/// round-trip through a parse-and-requote cycle. A file shorter than `rows`
/// lines yields a shorter (possibly empty) block, not an error. The caller
/// keeps the partially consumed reader and can resume structured parsing
/// exactly where raw capture stopped.
pub fn capture_raw_header<R: BufRead>(input: &mut R, rows: usize) -> Result<Vec<String>> {
    let mut lines = Vec::with_capacity(rows);
    for _ in 0..rows {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        lines.push(line);
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_capture_preserves_terminators() {
        let mut input = Cursor::new("Language\r\n\r\nNormalText\ndata,row,here\n");
        let lines = capture_raw_header(&mut input, 3).unwrap();

        assert_eq!(lines, vec!["Language\r\n", "\r\n", "NormalText\n"]);
    }

    #[test]
    fn test_capture_stops_at_eof() {
        let mut input = Cursor::new("only line\n");
        let lines = capture_raw_header(&mut input, 3).unwrap();
        assert_eq!(lines, vec!["only line\n"]);

        let mut empty = Cursor::new("");
        assert!(capture_raw_header(&mut empty, 3).unwrap().is_empty());
    }

    #[test]
    fn test_capture_keeps_unterminated_last_line() {
        let mut input = Cursor::new("a\nb");
        let lines = capture_raw_header(&mut input, 3).unwrap();
        assert_eq!(lines, vec!["a\n", "b"]);
    }

    #[test]
    fn test_structured_parsing_resumes_after_capture() {
        let mut input = Cursor::new("one\ntwo\nthree\n\"k\",\"orig\",\"trans\"\n");
        capture_raw_header(&mut input, 3).unwrap();

        let mut reader = sheet_reader(input);
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(&record[0], "k");
        assert_eq!(&record[2], "trans");
    }

    #[test]
    fn test_reader_tolerates_uneven_field_counts() {
        let input = Cursor::new("a,b\nc,d,e,f\n");
        let mut reader = sheet_reader(input);
        let lengths: Vec<usize> = reader
            .records()
            .map(|r| r.unwrap().len())
            .collect();
        assert_eq!(lengths, vec![2, 4]);
    }

    #[test]
    fn test_writer_quotes_every_field() {
        let mut writer = quoted_writer(Vec::new());
        writer.write_record(["key", "plain", "with,comma"]).unwrap();
        writer.flush().unwrap();

        let written = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert_eq!(written, "\"key\",\"plain\",\"with,comma\"\n");
    }
}
