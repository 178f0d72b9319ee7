mod customer;
mod energy_usage;
mod support_ticket;

pub use customer::Customer;
pub use energy_usage::EnergyUsage;
pub use support_ticket::SupportTicket;
