//! Flat-row decoding primitives.
//!
//! The read routines return one denormalized row per entity, with the
//! entity's own columns first and each ancestor's columns after it
//! (parent nearest, root furthest). Columns are positional: the decoder
//! performs no schema introspection, so the column order of the backend
//! functions is part of the wire contract. Reordering a function's output
//! misattaches values rather than failing, which is why each entity's
//! `decode` consumes a [ColumnCursor] strictly left to right.

use sqlx::postgres::PgRow;
use sqlx::Row;

/// A result row failed to match the expected column shape.
#[derive(Debug, thiserror::Error)]
#[error("column {index}: {message}")]
pub struct DecodeError {
    pub index: usize,
    pub message: String,
}

/// Positional access to one result row. Implemented for [PgRow] in
/// production and for an in-memory fixture in tests, so decoding can be
/// exercised without a database.
pub trait FlatRow {
    fn int(&self, index: usize) -> Result<i32, DecodeError>;
    fn text(&self, index: usize) -> Result<String, DecodeError>;
}

impl FlatRow for PgRow {
    fn int(&self, index: usize) -> Result<i32, DecodeError> {
        self.try_get::<i32, _>(index).map_err(|e| DecodeError {
            index,
            message: e.to_string(),
        })
    }

    fn text(&self, index: usize) -> Result<String, DecodeError> {
        self.try_get::<String, _>(index).map_err(|e| DecodeError {
            index,
            message: e.to_string(),
        })
    }
}

/// Consumes a row's columns left to right. Each entity's `decode` reads its
/// own columns and then hands the cursor to its parent's `decode`, so the
/// ancestor chain is rebuilt in one pass.
pub struct ColumnCursor<'r, R: FlatRow> {
    row: &'r R,
    next: usize,
}

impl<'r, R: FlatRow> ColumnCursor<'r, R> {
    pub fn new(row: &'r R) -> Self {
        Self { row, next: 0 }
    }

    pub fn int(&mut self) -> Result<i32, DecodeError> {
        let index = self.next;
        self.next += 1;
        self.row.int(index)
    }

    pub fn text(&mut self) -> Result<String, DecodeError> {
        let index = self.next;
        self.next += 1;
        self.row.text(index)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::{DecodeError, FlatRow};

    /// One column of an in-memory test row.
    #[derive(Debug, Clone)]
    pub enum Col {
        Int(i32),
        Text(&'static str),
        Null,
    }

    /// In-memory row for exercising decoders without a database.
    #[derive(Debug, Clone)]
    pub struct TestRow(pub Vec<Col>);

    impl TestRow {
        fn col(&self, index: usize) -> Result<&Col, DecodeError> {
            self.0.get(index).ok_or_else(|| DecodeError {
                index,
                message: "missing column".to_string(),
            })
        }
    }

    impl FlatRow for TestRow {
        fn int(&self, index: usize) -> Result<i32, DecodeError> {
            match self.col(index)? {
                Col::Int(v) => Ok(*v),
                other => Err(DecodeError {
                    index,
                    message: format!("expected integer, got {other:?}"),
                }),
            }
        }

        fn text(&self, index: usize) -> Result<String, DecodeError> {
            match self.col(index)? {
                Col::Text(v) => Ok((*v).to_string()),
                other => Err(DecodeError {
                    index,
                    message: format!("expected text, got {other:?}"),
                }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{Col, TestRow};
    use super::*;

    #[test]
    fn cursor_advances_left_to_right() {
        let row = TestRow(vec![Col::Int(1), Col::Text("Colombia"), Col::Int(2)]);
        let mut cur = ColumnCursor::new(&row);
        assert_eq!(cur.int().unwrap(), 1);
        assert_eq!(cur.text().unwrap(), "Colombia");
        assert_eq!(cur.int().unwrap(), 2);
    }

    #[test]
    fn null_column_fails_with_position() {
        let row = TestRow(vec![Col::Int(1), Col::Null]);
        let mut cur = ColumnCursor::new(&row);
        cur.int().unwrap();
        let err = cur.text().unwrap_err();
        assert_eq!(err.index, 1);
    }

    #[test]
    fn reading_past_the_row_fails() {
        let row = TestRow(vec![Col::Int(1)]);
        let mut cur = ColumnCursor::new(&row);
        cur.int().unwrap();
        let err = cur.int().unwrap_err();
        assert_eq!(err.index, 1);
        assert_eq!(err.message, "missing column");
    }
}
