//! Application service — configuration use-cases.

use crate::application::ports::ConfigStore;
use crate::domain::config::AzdConfig;
use anyhow::Result;

/// Load configuration.
pub fn load_config(store: &impl ConfigStore) -> Result<AzdConfig> {
    store.load()
}

/// Validate, apply and persist a single setting.
///
/// Nothing is written when validation fails.
pub fn set_value(store: &impl ConfigStore, key: &str, value: &str) -> Result<AzdConfig> {
    let mut config = store.load()?;
    config.set(key, value)?;
    store.save(&config)?;
    tracing::info!(key, value, "configuration updated");
    Ok(config)
}
