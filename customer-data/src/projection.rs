//! Column mappings from the source exports to the domain records.

use crate::{
    domain::{Customer, EnergyUsage, SupportTicket},
    table::{FromRow, Row, RowError},
};

/// Header names as they appear in the source CSV exports.
pub mod columns {
    pub const CUSTOMER_ID: &str = "Customer_ID";

    pub const FIRST_NAME: &str = "First_Name";
    pub const LAST_NAME: &str = "Last_Name";
    pub const EMAIL: &str = "Email";
    pub const PHONE_NUMBER: &str = "Phone_Number";
    pub const ADDRESS: &str = "Address";
    pub const DATE_JOINED: &str = "Date_Joined";
    pub const ACCOUNT_STATUS: &str = "Account_Status";

    pub const DATE: &str = "Date";
    pub const USAGE_KWH: &str = "Usage_kWh";
    pub const PEAK_DEMAND_KWH: &str = "Peak_Demand_kWh";
    pub const TOTAL_CHARGE: &str = "Total_Charge";
    pub const ENERGY_TYPE: &str = "Energy_Type";

    pub const TICKET_ID: &str = "Ticket_ID";
    pub const ISSUE_TYPE: &str = "Issue_Type";
    pub const TICKET_STATUS: &str = "Ticket_Status";
    pub const DATE_OPENED: &str = "Date_Opened";
    pub const DATE_CLOSED: &str = "Date_Closed";
    pub const RESOLUTION_METHOD: &str = "Resolution_Method";
}

use columns::*;

impl FromRow for Customer {
    const COLUMNS: &'static [&'static str] = &[
        CUSTOMER_ID,
        FIRST_NAME,
        LAST_NAME,
        EMAIL,
        PHONE_NUMBER,
        ADDRESS,
        DATE_JOINED,
        ACCOUNT_STATUS,
    ];

    fn from_row(row: &Row<'_>) -> Result<Self, RowError> {
        Ok(Customer {
            customer_id: row.required(CUSTOMER_ID)?.to_string(),
            first_name: row.required(FIRST_NAME)?.to_string(),
            last_name: row.required(LAST_NAME)?.to_string(),
            email: row.required(EMAIL)?.to_string(),
            phone_number: row.required(PHONE_NUMBER)?.to_string(),
            address: row.required(ADDRESS)?.to_string(),
            date_joined: row.required(DATE_JOINED)?.to_string(),
            account_status: row.required(ACCOUNT_STATUS)?.to_string(),
        })
    }
}

// Peak demand is optional and older exports omit the column entirely.
impl FromRow for EnergyUsage {
    const COLUMNS: &'static [&'static str] =
        &[CUSTOMER_ID, DATE, USAGE_KWH, TOTAL_CHARGE, ENERGY_TYPE];

    fn from_row(row: &Row<'_>) -> Result<Self, RowError> {
        Ok(EnergyUsage {
            customer_id: row.required(CUSTOMER_ID)?.to_string(),
            date: row.required(DATE)?.to_string(),
            usage_kwh: row.required_f64(USAGE_KWH)?,
            peak_demand_kwh: row.optional_f64(PEAK_DEMAND_KWH)?,
            total_charge: row.required_f64(TOTAL_CHARGE)?,
            energy_type: row.required(ENERGY_TYPE)?.to_string(),
        })
    }
}

impl FromRow for SupportTicket {
    const COLUMNS: &'static [&'static str] = &[
        TICKET_ID,
        CUSTOMER_ID,
        ISSUE_TYPE,
        TICKET_STATUS,
        DATE_OPENED,
        DATE_CLOSED,
        RESOLUTION_METHOD,
    ];

    fn from_row(row: &Row<'_>) -> Result<Self, RowError> {
        Ok(SupportTicket {
            ticket_id: row.required(TICKET_ID)?.to_string(),
            customer_id: row.required(CUSTOMER_ID)?.to_string(),
            issue_type: row.required(ISSUE_TYPE)?.to_string(),
            ticket_status: row.required(TICKET_STATUS)?.to_string(),
            date_opened: row.required(DATE_OPENED)?.to_string(),
            date_closed: row.optional(DATE_CLOSED).map(str::to_string),
            resolution_method: row.optional(RESOLUTION_METHOD).map(str::to_string),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{RowErrorKind, Table};

    const CUSTOMERS: &str = "\
Customer_ID,First_Name,Last_Name,Email,Phone_Number,Address,Date_Joined,Account_Status
C001,Jane,Doe,j@x.com,555-0100,1 Main St,2024-01-01,active
C002,John,,jd@x.com,555-0101,2 Main St,2024-02-01,inactive
";

    const TICKETS: &str = "\
Ticket_ID,Customer_ID,Issue_Type,Ticket_Status,Date_Opened,Date_Closed,Resolution_Method
T1,C001,Billing,open,2025-11-01,,
T2,C001,Outage,closed,2025-10-01,2025-10-03,Technician visit
T3,C001,Billing,closed,2025-09-01,2025-09-02,
T4,C001,Meter,open,2025-12-01,NaN,null
";

    fn project<T: FromRow>(table: &Table, customer_id: &str) -> Vec<Result<T, RowError>> {
        table.rows_for(customer_id).map(|row| T::from_row(&row)).collect()
    }

    #[test]
    fn customer_projects_every_field() {
        let table = Table::from_reader("customers", CUSTOMERS.as_bytes()).unwrap();
        let customer = project::<Customer>(&table, "C001").remove(0).unwrap();
        assert_eq!(
            customer,
            Customer {
                customer_id: "C001".to_string(),
                first_name: "Jane".to_string(),
                last_name: "Doe".to_string(),
                email: "j@x.com".to_string(),
                phone_number: "555-0100".to_string(),
                address: "1 Main St".to_string(),
                date_joined: "2024-01-01".to_string(),
                account_status: "active".to_string(),
            }
        );
    }

    #[test]
    fn customer_with_missing_required_field_fails() {
        let table = Table::from_reader("customers", CUSTOMERS.as_bytes()).unwrap();
        let err = project::<Customer>(&table, "C002").remove(0).unwrap_err();
        assert_eq!(err.column, LAST_NAME);
        assert_eq!(err.kind, RowErrorKind::Missing);
    }

    #[test]
    fn ticket_optionals_are_derived_per_row() {
        let table = Table::from_reader("support_tickets", TICKETS.as_bytes()).unwrap();
        let tickets: Vec<SupportTicket> = project(&table, "C001")
            .into_iter()
            .collect::<Result<_, _>>()
            .unwrap();

        let optionals: Vec<_> = tickets
            .iter()
            .map(|t| (t.date_closed.as_deref(), t.resolution_method.as_deref()))
            .collect();
        assert_eq!(
            optionals,
            vec![
                (None, None),
                (Some("2025-10-03"), Some("Technician visit")),
                (Some("2025-09-02"), None),
                (None, None),
            ]
        );
    }

    #[test]
    fn energy_usage_tolerates_missing_peak_demand_column() {
        let table = Table::from_reader(
            "energy_usage",
            "Customer_ID,Date,Usage_kWh,Total_Charge,Energy_Type\nC001,2025-12-10,3.5,1.25,Solar\n"
                .as_bytes(),
        )
        .unwrap();
        table.require_columns::<EnergyUsage>().unwrap();

        let usage = project::<EnergyUsage>(&table, "C001").remove(0).unwrap();
        assert_eq!(usage.peak_demand_kwh, None);
        assert_eq!(usage.usage_kwh, 3.5);
        assert_eq!(usage.total_charge, 1.25);
    }

    #[test]
    fn ticket_table_requires_nullable_columns_in_header() {
        let table = Table::from_reader(
            "support_tickets",
            "Ticket_ID,Customer_ID,Issue_Type,Ticket_Status,Date_Opened\n".as_bytes(),
        )
        .unwrap();
        let err = table.require_columns::<SupportTicket>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "support_tickets table is missing required column 'Date_Closed'"
        );
    }
}
