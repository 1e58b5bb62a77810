//! Newline-delimited JSON loading.
//!
//! Each non-empty physical line is parsed as one independent JSON document and must be an
//! object. Parsing stops at the first bad line; nothing is skipped or recovered.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::error::{DataError, DataResult};
use crate::types::{record_from_json, RecordTable};

/// Load a newline-delimited JSON file into a [`RecordTable`], one row per non-empty line.
///
/// Returns [`DataError::NotFound`] if `path` does not exist, [`DataError::Json`] for the first
/// line that is not valid JSON, [`DataError::Encoding`] for a line that is not UTF-8 and
/// [`DataError::NotAnObject`] for a line holding a non-object.
pub fn read_table(path: impl AsRef<Path>) -> DataResult<RecordTable> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| DataError::from_open(path, e))?;
    debug!("reading ndjson table from {}", path.display());
    let table = read_table_from_reader(BufReader::new(file))?;
    debug!("read {} rows from {}", table.row_count(), path.display());
    Ok(table)
}

/// Load newline-delimited JSON from any buffered reader.
pub fn read_table_from_reader<R: BufRead>(reader: R) -> DataResult<RecordTable> {
    let mut table = RecordTable::new();
    for (idx0, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| match e.kind() {
            io::ErrorKind::InvalidData => DataError::Encoding {
                line: idx0 + 1,
                source: e,
            },
            _ => DataError::Io(e),
        })?;
        parse_line(&mut table, idx0 + 1, &line)?;
    }
    Ok(table)
}

/// Load newline-delimited JSON from an in-memory string.
pub fn read_table_from_str(input: &str) -> DataResult<RecordTable> {
    let mut table = RecordTable::new();
    for (idx0, line) in input.lines().enumerate() {
        parse_line(&mut table, idx0 + 1, line)?;
    }
    Ok(table)
}

fn parse_line(table: &mut RecordTable, line_num: usize, line: &str) -> DataResult<()> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(());
    }
    let v = serde_json::from_str::<serde_json::Value>(line).map_err(|source| DataError::Json {
        line: line_num,
        source,
    })?;
    match v {
        serde_json::Value::Object(map) => {
            table.push(record_from_json(map));
            Ok(())
        }
        _ => Err(DataError::NotAnObject { line: line_num }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Value;

    #[test]
    fn rows_keep_file_order() {
        let input = "{\"id\":1}\n{\"id\":2}\n{\"id\":3}\n";
        let t = read_table_from_str(input).unwrap();
        let ids: Vec<_> = t.column("id").map(|v| v.cloned()).collect();
        assert_eq!(
            ids,
            vec![Some(Value::Int64(1)), Some(Value::Int64(2)), Some(Value::Int64(3))]
        );
    }

    #[test]
    fn blank_lines_are_ignored_but_counted_for_line_numbers() {
        let input = "{\"id\":1}\n\n   \n{\"id\":\n";
        let err = read_table_from_str(input).unwrap_err();
        match err {
            DataError::Json { line, .. } => assert_eq!(line, 4),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_object_line_is_rejected() {
        let err = read_table_from_str("{\"id\":1}\n[1,2]\n").unwrap_err();
        assert!(matches!(err, DataError::NotAnObject { line: 2 }));
    }

    #[test]
    fn invalid_utf8_reports_its_line() {
        let input: &[u8] = b"{\"id\":1}\n{\"categories\":[\"\xff\"]}\n";
        let err = read_table_from_reader(input).unwrap_err();
        assert!(matches!(err, DataError::Encoding { line: 2, .. }), "{err}");
    }

    #[test]
    fn reader_and_str_agree() {
        let input = "{\"categories\":[\"Mexican\",\"Bar\"]}\r\n{\"categories\":[\"Mexican\"]}\r\n";
        let a = read_table_from_str(input).unwrap();
        let b = read_table_from_reader(input.as_bytes()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.row_count(), 2);
    }

    #[test]
    fn empty_input_is_an_empty_table() {
        let t = read_table_from_str("").unwrap();
        assert!(t.is_empty());
        assert!(t.columns().is_empty());
    }
}
