use anyhow::{bail, Result};
use customer_data::queries;
use lookup_service::{config::AppConfig, observability, sources};
use std::env;

/// One-shot lookup against the configured exports, printing the JSON the
/// matching HTTP route would return.
fn main() -> Result<()> {
    observability::init_tracing();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        bail!("usage: lookup <customer|energy_usage|support_tickets> <customer_id>");
    }
    let (kind, customer_id) = (args[1].as_str(), args[2].as_str());

    // Load configuration (point LOOKUP_CONFIG at another file to query other exports).
    let cfg = AppConfig::load()?;
    let tables = sources::load_tables(&cfg.data)?;

    let json = match kind {
        "customer" => serde_json::to_string_pretty(&queries::customer_info(&tables, customer_id)?)?,
        "energy_usage" => serde_json::to_string_pretty(&queries::energy_usage(&tables, customer_id)?)?,
        "support_tickets" => {
            serde_json::to_string_pretty(&queries::support_tickets(&tables, customer_id)?)?
        }
        other => bail!("unknown record kind '{other}'"),
    };
    println!("{json}");

    Ok(())
}
