//! In-memory source tables.
//!
//! A [`Table`] holds the raw CSV records exactly as read, plus an index from
//! `Customer_ID` to the positions of that customer's rows. Records are only
//! projected into typed values when a lookup touches them, so a defective row
//! fails the lookups that read it and nothing else.

mod row;

use std::{collections::HashMap, fs::File, io::Read, path::Path};

use csv::StringRecord;

use crate::projection::columns;

pub use row::{is_null, FromRow, Row, RowError, RowErrorKind, NULL_MARKERS};

#[derive(thiserror::Error, Debug)]
pub enum TableError {
    #[error("failed to open {table} table at '{path}': {source}")]
    Open {
        table: &'static str,
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read {table} table: {source}")]
    Csv {
        table: &'static str,
        #[source]
        source: csv::Error,
    },
    #[error("{table} table is missing required column '{column}'")]
    MissingColumn { table: &'static str, column: String },
}

#[derive(Debug, Clone)]
pub struct Table {
    name: &'static str,
    columns: HashMap<String, usize>,
    rows: Vec<StringRecord>,
    by_customer: HashMap<String, Vec<usize>>,
}

impl Table {
    pub fn from_path<P: AsRef<Path>>(name: &'static str, path: P) -> Result<Self, TableError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| TableError::Open {
            table: name,
            path: path.display().to_string(),
            source,
        })?;
        Self::from_reader(name, file)
    }

    /// Reads a headered CSV source.
    ///
    /// Short rows are accepted; their trailing cells read as null. Rows with a
    /// null `Customer_ID` are kept but never indexed.
    pub fn from_reader<R: Read>(name: &'static str, reader: R) -> Result<Self, TableError> {
        let csv_err = |source| TableError::Csv { table: name, source };

        let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
        let headers = rdr.headers().map_err(csv_err)?.clone();

        let mut columns = HashMap::with_capacity(headers.len());
        for (idx, header) in headers.iter().enumerate() {
            // First occurrence wins for duplicated header names.
            columns.entry(header.to_string()).or_insert(idx);
        }

        let key = *columns
            .get(columns::CUSTOMER_ID)
            .ok_or_else(|| TableError::MissingColumn {
                table: name,
                column: columns::CUSTOMER_ID.to_string(),
            })?;

        let mut rows = Vec::new();
        let mut by_customer: HashMap<String, Vec<usize>> = HashMap::new();
        for result in rdr.records() {
            let record = result.map_err(csv_err)?;
            if let Some(id) = record.get(key).filter(|v| !is_null(v)) {
                by_customer.entry(id.to_string()).or_default().push(rows.len());
            }
            rows.push(record);
        }

        Ok(Self {
            name,
            columns,
            rows,
            by_customer,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.contains_key(column)
    }

    /// Fails if the header row lacks any column `T` needs.
    pub fn require_columns<T: FromRow>(&self) -> Result<(), TableError> {
        match T::COLUMNS.iter().find(|c| !self.has_column(c)) {
            Some(column) => Err(TableError::MissingColumn {
                table: self.name,
                column: column.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Rows whose `Customer_ID` equals `customer_id` exactly, in source order.
    pub fn rows_for(&self, customer_id: &str) -> impl Iterator<Item = Row<'_>> + '_ {
        self.by_customer
            .get(customer_id)
            .into_iter()
            .flatten()
            .map(move |&idx| Row::new(self, &self.rows[idx]))
    }

    fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.get(column).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICKETS: &str = "\
Ticket_ID,Customer_ID,Ticket_Status
T1,C001,open
T2,C002,closed
T3,C001,closed
T4,,open
T5,NA,open
T6,c001,open
";

    fn tickets() -> Table {
        Table::from_reader("support_tickets", TICKETS.as_bytes()).unwrap()
    }

    fn ticket_ids(table: &Table, customer_id: &str) -> Vec<String> {
        table
            .rows_for(customer_id)
            .map(|row| row.required("Ticket_ID").unwrap().to_string())
            .collect()
    }

    #[test]
    fn index_preserves_source_order() {
        let table = tickets();
        assert_eq!(table.len(), 6);
        assert_eq!(ticket_ids(&table, "C001"), vec!["T1", "T3"]);
        assert_eq!(ticket_ids(&table, "C002"), vec!["T2"]);
    }

    #[test]
    fn matching_is_exact_and_case_sensitive() {
        let table = tickets();
        assert_eq!(ticket_ids(&table, "c001"), vec!["T6"]);
        assert!(ticket_ids(&table, "C001 ").is_empty());
        assert!(ticket_ids(&table, "C00").is_empty());
    }

    #[test]
    fn null_customer_ids_are_never_matched() {
        let table = tickets();
        assert!(ticket_ids(&table, "").is_empty());
        assert!(ticket_ids(&table, "NA").is_empty());
    }

    #[test]
    fn missing_key_column_is_rejected() {
        let err = Table::from_reader("customers", "Id,Name\n1,x\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            TableError::MissingColumn { table: "customers", ref column } if column == "Customer_ID"
        ));
    }

    #[test]
    fn short_rows_load_with_null_trailing_cells() {
        let table =
            Table::from_reader("support_tickets", "Customer_ID,Date_Closed\nC001\n".as_bytes()).unwrap();
        let row = table.rows_for("C001").next().unwrap();
        assert_eq!(row.optional("Date_Closed"), None);
    }

    #[test]
    fn duplicated_headers_resolve_to_first_column() {
        let table =
            Table::from_reader("customers", "Customer_ID,Email,Email\nC001,a@x.com,b@x.com\n".as_bytes())
                .unwrap();
        let row = table.rows_for("C001").next().unwrap();
        assert_eq!(row.required("Email").unwrap(), "a@x.com");
    }

    #[test]
    fn from_path_reports_unreadable_file() {
        let err = Table::from_path("customers", "/nonexistent/customers.csv").unwrap_err();
        assert!(matches!(err, TableError::Open { table: "customers", .. }));
    }
}
