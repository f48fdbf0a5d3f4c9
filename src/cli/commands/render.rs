use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use log::info;

use crate::cli::types::TocArgs;
use crate::config::{validate_config, TocConfig};
use crate::markdown::{MarkdownPipeline, TocExtension};
use crate::utils::error::BoxResult;

/// Handle the render command
pub fn handle_render_command(
    input: Option<&PathBuf>,
    output: Option<&PathBuf>,
    args: &TocArgs,
    config_files: Option<&Vec<PathBuf>>,
) -> BoxResult<()> {
    let mut config = super::load_config(config_files)?;
    apply_overrides(&mut config, args);
    validate_config(&config)?;

    let content = super::read_input(input.map(PathBuf::as_path))?;

    let mut pipeline = MarkdownPipeline::new();
    pipeline.extend(&TocExtension::new(config.to_options()));
    let html = pipeline.render(&content);

    match output {
        Some(path) => {
            fs::write(path, &html)?;
            info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

/// Command line flags take precedence over configuration files
fn apply_overrides(config: &mut TocConfig, args: &TocArgs) {
    if let Some(title) = &args.title {
        config.title = title.clone();
    }
    if args.wrap {
        config.wrap = true;
    }
    if let Some(wrapper_id) = &args.wrapper_id {
        config.wrapper_id = wrapper_id.clone();
    }
    if args.prune {
        config.prune_empty_top_levels = true;
    }
}
