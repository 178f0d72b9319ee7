#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EnergyUsage {
    pub customer_id: String,
    pub date: String,
    pub usage_kwh: f64,
    pub peak_demand_kwh: Option<f64>,
    pub total_charge: f64,
    pub energy_type: String,
}
