mod inspect;
mod render;

pub use inspect::handle_inspect_command;
pub use render::handle_render_command;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::config::{self, TocConfig};
use crate::utils::error::{BoxResult, TocError};

/// Read Markdown from a file, or from stdin when no path is given
fn read_input(input: Option<&Path>) -> Result<String, TocError> {
    match input {
        Some(path) => fs::read_to_string(path).map_err(|e| {
            TocError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read {}: {}", path.display(), e),
            ))
        }),
        None => {
            let mut content = String::new();
            io::stdin().read_to_string(&mut content)?;
            Ok(content)
        }
    }
}

/// Load configuration from explicit files or the working directory
fn load_config(config_files: Option<&Vec<PathBuf>>) -> BoxResult<TocConfig> {
    config::load_config(PathBuf::from("."), config_files.cloned())
}
