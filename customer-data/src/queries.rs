use time::{macros::date, Date};

use crate::{
    domain::{Customer, EnergyUsage, SupportTicket},
    projection::columns,
    store::Tables,
    table::{FromRow, RowError},
};

/// Energy usage readings dated before this day are never reported.
pub const MIN_REPORT_DATE: Date = date!(2025 - 12 - 05);

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum LookupError {
    #[error("customer '{customer_id}' not found")]
    NotFound { customer_id: String },
    #[error("malformed source row: {0}")]
    MalformedRow(#[from] RowError),
}

/// Fetch the profile of a single customer.
///
/// When the export lists the same identifier more than once the first row wins.
pub fn customer_info(tables: &Tables, customer_id: &str) -> Result<Customer, LookupError> {
    let row = tables
        .customers
        .rows_for(customer_id)
        .next()
        .ok_or_else(|| LookupError::NotFound {
            customer_id: customer_id.to_string(),
        })?;

    Ok(Customer::from_row(&row)?)
}

/// Fetch a customer's usage readings dated on or after [`MIN_REPORT_DATE`],
/// in source order.
pub fn energy_usage(tables: &Tables, customer_id: &str) -> Result<Vec<EnergyUsage>, LookupError> {
    let mut readings = Vec::new();
    for row in tables.energy_usage.rows_for(customer_id) {
        if row.required_date(columns::DATE)? < MIN_REPORT_DATE {
            continue;
        }
        readings.push(EnergyUsage::from_row(&row)?);
    }
    Ok(readings)
}

/// Fetch every support ticket raised by a customer, in source order.
pub fn support_tickets(
    tables: &Tables,
    customer_id: &str,
) -> Result<Vec<SupportTicket>, LookupError> {
    let tickets = tables
        .support_tickets
        .rows_for(customer_id)
        .map(|row| SupportTicket::from_row(&row))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(tickets)
}
