use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::config::types::TocConfig;
use crate::config::validation;
use crate::utils::error::{BoxResult, TocError};

/// Configuration file names to look for
const CONFIG_FILES: [&str; 4] = ["_toc.yml", "_toc.yaml", "_toc.toml", "_toc.json"];

/// Values present in a single configuration file
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    title: Option<String>,
    #[serde(alias = "add_fences")]
    wrap: Option<bool>,
    #[serde(alias = "fences_id")]
    wrapper_id: Option<String>,
    #[serde(alias = "prune_toc")]
    prune_empty_top_levels: Option<bool>,
}

/// Load configuration from the given files, or from the default file names in `source_dir`.
///
/// Later files override earlier ones key by key.
pub fn load_config<P: AsRef<Path>>(
    source_dir: P,
    config_files: Option<Vec<PathBuf>>,
) -> BoxResult<TocConfig> {
    let mut config = TocConfig::default();

    let config_paths = match config_files {
        Some(paths) => paths,
        None => find_default_config_files(&source_dir),
    };

    if config_paths.is_empty() {
        debug!("No configuration files found, using defaults");
    } else {
        for path in config_paths {
            debug!("Loading configuration from {}", path.display());
            merge_config_file(&mut config, &path)?;
        }
    }

    validation::validate_config(&config)?;

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Find default configuration files
fn find_default_config_files<P: AsRef<Path>>(source_dir: P) -> Vec<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| source_dir.as_ref().join(name))
        .filter(|path| path.exists())
        .collect()
}

/// Merge a configuration file into the current configuration
fn merge_config_file(config: &mut TocConfig, config_path: &Path) -> BoxResult<()> {
    if !config_path.exists() {
        return Err(TocError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        ))
        .into());
    }

    let content = fs::read_to_string(config_path).map_err(|e| {
        TocError::Config(format!(
            "Failed to read configuration file {}: {}",
            config_path.display(),
            e
        ))
    })?;

    let extension = config_path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase());

    let file = match extension.as_deref() {
        Some("yml") | Some("yaml") | None => parse_yaml_config(&content, config_path)?,
        Some("toml") => parse_toml_config(&content, config_path)?,
        Some("json") => parse_json_config(&content, config_path)?,
        Some(other) => {
            return Err(TocError::Config(format!(
                "Unsupported configuration file format: {}",
                other
            ))
            .into());
        }
    };

    merge_configs(config, file);
    Ok(())
}

/// Parse a YAML configuration file
fn parse_yaml_config(content: &str, path: &Path) -> Result<ConfigFile, TocError> {
    // An empty YAML document is a valid, empty configuration
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    serde_yaml::from_str(content).map_err(|e| {
        TocError::Config(format!(
            "Failed to parse YAML configuration ({}): {}",
            path.display(),
            e
        ))
    })
}

/// Parse a TOML configuration file
fn parse_toml_config(content: &str, path: &Path) -> Result<ConfigFile, TocError> {
    toml::from_str(content).map_err(|e| {
        TocError::Config(format!(
            "Failed to parse TOML configuration ({}): {}",
            path.display(),
            e
        ))
    })
}

/// Parse a JSON configuration file
fn parse_json_config(content: &str, path: &Path) -> Result<ConfigFile, TocError> {
    serde_json::from_str(content).map_err(|e| {
        TocError::Config(format!(
            "Failed to parse JSON configuration ({}): {}",
            path.display(),
            e
        ))
    })
}

fn merge_configs(config: &mut TocConfig, file: ConfigFile) {
    if let Some(title) = file.title {
        config.title = title;
    }
    if let Some(wrap) = file.wrap {
        config.wrap = wrap;
    }
    if let Some(wrapper_id) = file.wrapper_id {
        config.wrapper_id = wrapper_id;
    }
    if let Some(prune) = file.prune_empty_top_levels {
        config.prune_empty_top_levels = prune;
    }
}
