#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Customer {
    pub customer_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    /// Serialized as `data_joined`, the field name existing API clients read.
    #[cfg_attr(feature = "serde", serde(rename = "data_joined"))]
    pub date_joined: String,
    pub account_status: String,
}
