#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SupportTicket {
    pub ticket_id: String,
    pub customer_id: String,
    pub issue_type: String,
    pub ticket_status: String,
    pub date_opened: String,
    /// `None` while the ticket is open.
    pub date_closed: Option<String>,
    /// `None` until the ticket is resolved.
    pub resolution_method: Option<String>,
}
