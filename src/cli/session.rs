use anyhow::{Context, Result};

use encore::config::EncoreConfig;
use encore::session::SessionSetup;

/// Print the live-session setup as JSON. The API key, if any, is omitted.
pub fn session(config: &EncoreConfig, pretty: bool) -> Result<()> {
    let setup = SessionSetup::from_config(&config.model)
        .context("failed to resolve model backend")?;

    let json = if pretty {
        serde_json::to_string_pretty(&setup)?
    } else {
        serde_json::to_string(&setup)?
    };
    println!("{json}");
    Ok(())
}
