use csv::StringRecord;
use time::{macros::format_description, Date};

use super::Table;

/// Cell values the source exports use for "no value".
pub const NULL_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN", "<NA>",
    "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// True when a raw cell carries no value: blank, or one of [`NULL_MARKERS`].
pub fn is_null(cell: &str) -> bool {
    let trimmed = cell.trim();
    trimmed.is_empty() || NULL_MARKERS.contains(&trimmed)
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RowErrorKind {
    #[error("missing value")]
    Missing,
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
    #[error("invalid date '{0}'")]
    InvalidDate(String),
}

/// A single source row that could not be projected.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("{table} line {line}: {kind} in column '{column}'")]
pub struct RowError {
    pub table: &'static str,
    pub line: u64,
    pub column: String,
    pub kind: RowErrorKind,
}

/// Projection of a raw table row into a typed record.
pub trait FromRow: Sized {
    /// Header columns that must exist for the projection to be possible.
    const COLUMNS: &'static [&'static str];

    fn from_row(row: &Row<'_>) -> Result<Self, RowError>;
}

/// Read-only view of one record, addressed by column name.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    table: &'a Table,
    record: &'a StringRecord,
}

impl<'a> Row<'a> {
    pub(super) fn new(table: &'a Table, record: &'a StringRecord) -> Self {
        Self { table, record }
    }

    /// Line of the source file this row starts on.
    pub fn line(&self) -> u64 {
        self.record.position().map_or(0, |p| p.line())
    }

    /// The cell's value, or `None` when the column or the cell is null.
    pub fn optional(&self, column: &str) -> Option<&'a str> {
        self.table
            .column_index(column)
            .and_then(|idx| self.record.get(idx))
            .filter(|cell| !is_null(cell))
    }

    pub fn required(&self, column: &str) -> Result<&'a str, RowError> {
        self.optional(column)
            .ok_or_else(|| self.error(column, RowErrorKind::Missing))
    }

    pub fn optional_f64(&self, column: &str) -> Result<Option<f64>, RowError> {
        self.optional(column)
            .map(|cell| self.parse_f64(column, cell))
            .transpose()
    }

    pub fn required_f64(&self, column: &str) -> Result<f64, RowError> {
        self.parse_f64(column, self.required(column)?)
    }

    /// Parses a `YYYY-MM-DD` cell.
    pub fn required_date(&self, column: &str) -> Result<Date, RowError> {
        let cell = self.required(column)?;
        Date::parse(cell.trim(), format_description!("[year]-[month]-[day]"))
            .map_err(|_| self.error(column, RowErrorKind::InvalidDate(cell.to_string())))
    }

    fn parse_f64(&self, column: &str, cell: &str) -> Result<f64, RowError> {
        match cell.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(self.error(column, RowErrorKind::InvalidNumber(cell.to_string()))),
        }
    }

    fn error(&self, column: &str, kind: RowErrorKind) -> RowError {
        RowError {
            table: self.table.name(),
            line: self.line(),
            column: column.to_string(),
            kind,
        }
    }
}
