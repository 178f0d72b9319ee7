use std::path::Path;

use crate::{
    domain::{Customer, EnergyUsage, SupportTicket},
    table::{Table, TableError},
};

pub const CUSTOMERS: &str = "customers";
pub const ENERGY_USAGE: &str = "energy_usage";
pub const SUPPORT_TICKETS: &str = "support_tickets";

/// The three source tables, loaded once and shared read-only by every lookup.
#[derive(Debug, Clone)]
pub struct Tables {
    pub customers: Table,
    pub energy_usage: Table,
    pub support_tickets: Table,
}

impl Tables {
    /// Builds the context after checking each table carries the columns its
    /// record type is projected from.
    pub fn new(
        customers: Table,
        energy_usage: Table,
        support_tickets: Table,
    ) -> Result<Self, TableError> {
        customers.require_columns::<Customer>()?;
        energy_usage.require_columns::<EnergyUsage>()?;
        support_tickets.require_columns::<SupportTicket>()?;

        Ok(Self {
            customers,
            energy_usage,
            support_tickets,
        })
    }

    pub fn load(
        customers: impl AsRef<Path>,
        energy_usage: impl AsRef<Path>,
        support_tickets: impl AsRef<Path>,
    ) -> Result<Self, TableError> {
        Self::new(
            Table::from_path(CUSTOMERS, customers)?,
            Table::from_path(ENERGY_USAGE, energy_usage)?,
            Table::from_path(SUPPORT_TICKETS, support_tickets)?,
        )
    }
}
