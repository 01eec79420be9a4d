//! Typed output tables
//!
//! A [`Table`] is a fixed list of named, typed columns and a list of rows.
//! Rows are checked against the columns when pushed, so a table that exists is
//! always rectangular and well-typed.

use std::{fmt, io};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    #[display("text")]
    Text,
    #[display("integer")]
    Integer,
    #[display("real")]
    Real,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
}

impl Column {
    pub fn text(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ColumnKind::Text,
        }
    }

    pub fn integer(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ColumnKind::Integer,
        }
    }

    pub fn real(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ColumnKind::Real,
        }
    }
}

/// A single table value. [`Cell::Empty`] fits a column of any kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Integer(i64),
    Real(f64),
    Empty,
}

impl Cell {
    #[must_use]
    pub fn kind(&self) -> Option<ColumnKind> {
        match self {
            Cell::Text(_) => Some(ColumnKind::Text),
            Cell::Integer(_) => Some(ColumnKind::Integer),
            Cell::Real(_) => Some(ColumnKind::Real),
            Cell::Empty => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Cell::Integer(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Cell::Real(x) => Some(*x),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Integer(n) => write!(f, "{n}"),
            Cell::Real(x) => write!(f, "{x}"),
            Cell::Empty => Ok(()),
        }
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_owned())
    }
}

impl From<u32> for Cell {
    fn from(value: u32) -> Self {
        Cell::Integer(i64::from(value))
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Integer(value)
    }
}

impl From<usize> for Cell {
    fn from(value: usize) -> Self {
        i64::try_from(value).map_or(Cell::Empty, Cell::Integer)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Real(value)
    }
}

impl<T> From<Option<T>> for Cell
where
    T: Into<Cell>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Cell::Empty, Into::into)
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum TableError {
    #[display("table {table}: row has {actual} cells but there are {expected} columns")]
    RowWidth {
        table: String,
        expected: usize,
        actual: usize,
    },
    #[display("table {table}: column {column:?} holds {expected} values, got {actual}")]
    CellKind {
        table: String,
        column: String,
        expected: ColumnKind,
        actual: ColumnKind,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct Table {
    name: String,
    columns: Vec<Column>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(name: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            name: name.into(),
            columns,
            rows: vec![],
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Cell at `row` in the column named `column`.
    #[must_use]
    pub fn cell(&self, row: usize, column: &str) -> Option<&Cell> {
        let index = self.column_index(column)?;
        self.rows.get(row).map(|cells| &cells[index])
    }

    /// Appends a row after checking its width and cell kinds.
    pub fn push_row(&mut self, row: Vec<Cell>) -> Result<(), TableError> {
        if row.len() != self.columns.len() {
            return Err(TableError::RowWidth {
                table: self.name.clone(),
                expected: self.columns.len(),
                actual: row.len(),
            });
        }
        for (column, cell) in self.columns.iter().zip(&row) {
            if let Some(kind) = cell.kind()
                && kind != column.kind
            {
                return Err(TableError::CellKind {
                    table: self.name.clone(),
                    column: column.name.clone(),
                    expected: column.kind,
                    actual: kind,
                });
            }
        }
        self.rows.push(row);
        Ok(())
    }

    /// Writes a header line of column names followed by one record per row.
    pub fn write_csv<W>(&self, writer: W) -> Result<(), csv::Error>
    where
        W: io::Write,
    {
        let mut writer = csv::Writer::from_writer(writer);
        writer.write_record(self.columns.iter().map(|c| c.name.as_str()))?;
        for row in &self.rows {
            writer.write_record(row.iter().map(Cell::to_string))?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Table {
        Table::new(
            "scores",
            vec![
                Column::text("Player"),
                Column::integer("Games"),
                Column::real("Points"),
            ],
        )
    }

    #[test]
    fn test_push_row_checks_shape() {
        let mut table = table();
        table
            .push_row(vec!["A".into(), 3_u32.into(), 12.3_f64.into()])
            .unwrap();
        table
            .push_row(vec!["B".into(), Cell::Empty, None::<f64>.into()])
            .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.cell(0, "Points").and_then(Cell::as_real), Some(12.3));
        assert_eq!(table.cell(1, "Games"), Some(&Cell::Empty));
        assert_eq!(table.cell(2, "Games"), None);
        assert_eq!(table.cell(0, "Nope"), None);

        let err = table.push_row(vec!["C".into()]).unwrap_err();
        assert!(matches!(err, TableError::RowWidth { expected: 3, actual: 1, .. }));

        let err = table
            .push_row(vec!["C".into(), 1.5_f64.into(), 0.0_f64.into()])
            .unwrap_err();
        assert!(matches!(
            err,
            TableError::CellKind {
                expected: ColumnKind::Integer,
                actual: ColumnKind::Real,
                ..
            }
        ));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_write_csv() {
        let mut table = table();
        table
            .push_row(vec!["A, the first".into(), 3_u32.into(), 12.3_f64.into()])
            .unwrap();
        table
            .push_row(vec!["B".into(), 0_u32.into(), Cell::Empty])
            .unwrap();

        let mut buf = vec![];
        table.write_csv(&mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Player,Games,Points\n\"A, the first\",3,12.3\nB,0,\n"
        );
    }

    #[test]
    fn test_serialize_json() {
        let mut table = table();
        table
            .push_row(vec!["A".into(), 3_u32.into(), Cell::Empty])
            .unwrap();
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "scores",
                "columns": [
                    {"name": "Player", "kind": "text"},
                    {"name": "Games", "kind": "integer"},
                    {"name": "Points", "kind": "real"}
                ],
                "rows": [["A", 3, null]]
            })
        );
    }
}
