use serde::Deserialize;
use std::{fs, path::PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub bind_addr: String,
}

/// Locations of the CSV exports the lookups are served from.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    pub customers_csv: PathBuf,
    pub energy_usage_csv: PathBuf,
    pub support_tickets_csv: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
    pub bind_addr: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub data: DataConfig,
    pub metrics: Option<MetricsConfig>,
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        use std::env;

        let path = env::var("LOOKUP_CONFIG").unwrap_or_else(|_| "lookup-config.toml".to_string());
        let contents = fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("failed to read config file '{path}': {e}"))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        let cfg: AppConfig = toml::from_str(contents)?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let cfg = AppConfig::from_toml(
            r#"
            [server]
            bind_addr = "0.0.0.0:8000"

            [data]
            customers_csv = "data/customer_info.csv"
            energy_usage_csv = "data/energy_usage.csv"
            support_tickets_csv = "data/support_tickets.csv"

            [metrics]
            bind_addr = "127.0.0.1:9000"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.server.bind_addr, "0.0.0.0:8000");
        assert_eq!(cfg.data.energy_usage_csv, PathBuf::from("data/energy_usage.csv"));
        assert_eq!(cfg.metrics.unwrap().bind_addr, "127.0.0.1:9000");
    }

    #[test]
    fn metrics_section_is_optional() {
        let cfg = AppConfig::from_toml(
            r#"
            [server]
            bind_addr = "127.0.0.1:8000"

            [data]
            customers_csv = "c.csv"
            energy_usage_csv = "e.csv"
            support_tickets_csv = "t.csv"
            "#,
        )
        .unwrap();

        assert!(cfg.metrics.is_none());
    }

    #[test]
    fn missing_data_section_is_rejected() {
        let res = AppConfig::from_toml("[server]\nbind_addr = \"127.0.0.1:8000\"\n");
        assert!(res.is_err());
    }
}
