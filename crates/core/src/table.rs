use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};

use crate::error::{EvalError, Result};

/// In-memory CSV table with string cells. Every row has one cell per header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Loads a CSV file and rejects it up front if any of `required` is
    /// absent from the header row.
    pub fn load_csv(path: &Path, required: &[&str]) -> Result<Self> {
        let file = fs::File::open(path)?;
        let table = Self::from_reader(file)?;
        table.require_columns(&path.display().to_string(), required)?;
        Ok(table)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = ReaderBuilder::new().from_reader(reader);
        let headers = reader
            .headers()?
            .iter()
            .map(|cell| cell.to_string())
            .collect::<Vec<_>>();
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(
                record
                    .iter()
                    .map(|cell| cell.to_string())
                    .collect::<Vec<_>>(),
            );
        }
        Ok(Self { headers, rows })
    }

    pub fn save_csv(&self, path: &Path) -> Result<()> {
        let file = fs::File::create(path)?;
        self.to_writer(file)
    }

    pub fn to_writer<W: Write>(&self, writer: W) -> Result<()> {
        let mut writer = WriterBuilder::new().from_writer(writer);
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn require_columns(&self, origin: &str, required: &[&str]) -> Result<()> {
        for column in required {
            if self.column_index(column).is_none() {
                return Err(EvalError::MissingColumn {
                    column: column.to_string(),
                    origin: origin.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Cells of `name` in row order, or `None` if the column is absent.
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.column_index(name)?;
        Some(
            self.rows
                .iter()
                .map(|row| row.get(idx).map(String::as_str).unwrap_or(""))
                .collect(),
        )
    }

    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows.get(row)?.get(idx).map(String::as_str)
    }

    /// Appends a column, or replaces it when a column of the same name exists.
    pub fn set_column(&mut self, name: &str, values: Vec<String>) -> Result<()> {
        if values.len() != self.rows.len() {
            return Err(EvalError::ColumnLength {
                rows: self.rows.len(),
                values: values.len(),
            });
        }
        match self.column_index(name) {
            Some(idx) => {
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row[idx] = value;
                }
            }
            None => {
                self.headers.push(name.to_string());
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row.push(value);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    #[test]
    fn loads_headers_and_rows() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "id,tokens").unwrap();
        writeln!(file, "1,\"['a', 'b']\"").unwrap();
        writeln!(file, "2,c d").unwrap();
        let table = Table::load_csv(file.path(), &["tokens"]).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.cell(0, "tokens"), Some("['a', 'b']"));
        assert_eq!(table.column("id").unwrap(), vec!["1", "2"]);
    }

    #[test]
    fn missing_required_column_is_rejected_at_load() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "id,text").unwrap();
        writeln!(file, "1,foo").unwrap();
        let err = Table::load_csv(file.path(), &["tokens"]).unwrap_err();
        match err {
            EvalError::MissingColumn { column, .. } => assert_eq!(column, "tokens"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Table::load_csv(Path::new("/definitely/not/here.csv"), &[]).unwrap_err();
        assert!(matches!(err, EvalError::Io(_)));
    }

    #[test]
    fn set_column_appends_and_replaces() {
        let mut table = Table::new(
            vec!["a".into()],
            vec![vec!["1".into()], vec!["2".into()]],
        );
        table.set_column("b", vec!["x".into(), "y".into()]).unwrap();
        assert_eq!(table.headers(), ["a", "b"]);
        table.set_column("a", vec!["9".into(), "8".into()]).unwrap();
        assert_eq!(table.cell(1, "a"), Some("8"));
        let err = table.set_column("c", vec!["only one".into()]).unwrap_err();
        assert!(matches!(err, EvalError::ColumnLength { rows: 2, values: 1 }));
    }

    #[test]
    fn writer_roundtrip_preserves_quoting() {
        let table = Table::new(
            vec!["text".into()],
            vec![vec!["has, comma".into()], vec!["line\nbreak".into()]],
        );
        let mut buf = Vec::new();
        table.to_writer(&mut buf).unwrap();
        let reloaded = Table::from_reader(buf.as_slice()).unwrap();
        assert_eq!(reloaded, table);
    }
}
