use std::io::{self, Write};
use std::path::PathBuf;

use crate::markdown::toc::{inspect, InspectOptions, Toc};
use crate::markdown::tree::HeadingSource;
use crate::markdown::{create_comrak_options, parse_markdown};
use crate::utils::error::{BoxResult, TocError};

/// Handle the inspect command.
///
/// Unlike rendering, inspection errors are reported to the caller.
pub fn handle_inspect_command(
    input: Option<&PathBuf>,
    prune: bool,
    config_files: Option<&Vec<PathBuf>>,
) -> BoxResult<()> {
    let config = super::load_config(config_files)?;
    let content = super::read_input(input.map(PathBuf::as_path))?;

    let options = InspectOptions {
        prune_empty_top_levels: prune || config.prune_empty_top_levels,
    };
    let toc = inspect_markdown(&content, &options)?;

    let json = serde_json::to_string_pretty(&toc).map_err(|e| TocError::Output(e.to_string()))?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json)?;
    Ok(())
}

/// Build the table of contents of a Markdown document
pub fn inspect_markdown(content: &str, options: &InspectOptions) -> Result<Toc, TocError> {
    let document = parse_markdown(content, &create_comrak_options());
    Ok(inspect(document.heading_events(), options)?)
}
