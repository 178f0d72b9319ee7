use std::path::Path;

use customer_data::{
    store::{CUSTOMERS, ENERGY_USAGE, SUPPORT_TICKETS},
    table::{Table, TableError},
    Tables,
};

use crate::config::DataConfig;

/// Reads the three CSV exports named in `[data]` and builds the lookup context.
///
/// Expected header columns (by name, case-sensitive):
/// - customers: Customer_ID, First_Name, Last_Name, Email, Phone_Number,
///   Address, Date_Joined, Account_Status
/// - energy usage: Customer_ID, Date, Usage_kWh, Peak_Demand_kWh (optional),
///   Total_Charge, Energy_Type
/// - support tickets: Ticket_ID, Customer_ID, Issue_Type, Ticket_Status,
///   Date_Opened, Date_Closed, Resolution_Method
pub fn load_tables(cfg: &DataConfig) -> Result<Tables, TableError> {
    let customers = load_table(CUSTOMERS, &cfg.customers_csv)?;
    let energy_usage = load_table(ENERGY_USAGE, &cfg.energy_usage_csv)?;
    let support_tickets = load_table(SUPPORT_TICKETS, &cfg.support_tickets_csv)?;

    Tables::new(customers, energy_usage, support_tickets)
}

fn load_table(name: &'static str, path: &Path) -> Result<Table, TableError> {
    let table = Table::from_path(name, path)?;

    metrics::gauge!("table_rows_loaded", "table" => name).set(table.len() as f64);
    tracing::info!(table = name, path = %path.display(), rows = table.len(), "source table loaded");

    Ok(table)
}
