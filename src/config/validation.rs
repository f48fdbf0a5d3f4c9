use log::warn;

use crate::config::TocConfig;
use crate::utils::error::{BoxResult, TocError};

/// Validate the configuration
pub fn validate_config(config: &TocConfig) -> BoxResult<()> {
    validate_wrapper_id(config)?;

    if !config.wrap && config.wrapper_id != crate::config::defaults::default_wrapper_id() {
        warn!(
            "wrapper_id '{}' has no effect unless wrap is enabled",
            config.wrapper_id
        );
    }

    Ok(())
}

/// The wrapper identifier ends up in an `id` attribute
fn validate_wrapper_id(config: &TocConfig) -> BoxResult<()> {
    if config.wrapper_id.chars().any(char::is_whitespace) {
        return Err(TocError::Config(format!(
            "wrapper_id must not contain whitespace: '{}'",
            config.wrapper_id
        ))
        .into());
    }

    Ok(())
}
