//! Read-only access to customer, energy usage and support ticket exports.

pub mod domain;
pub mod projection;
pub mod queries;
pub mod store;
pub mod table;

pub use queries::{LookupError, MIN_REPORT_DATE};
pub use store::Tables;
