pub mod commands;
pub mod logging;
pub mod types;

use clap::Parser;
use std::process;

/// Run the command-line interface
pub fn run() {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug);

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    let config_files = cli.config.as_ref();
    let result = match &cli.command {
        Some(types::Commands::Render { input, output, toc }) => {
            commands::handle_render_command(input.as_ref(), output.as_ref(), toc, config_files)
        }
        Some(types::Commands::Inspect { input, prune }) => {
            commands::handle_inspect_command(input.as_ref(), *prune, config_files)
        }
        None => {
            // Default to rendering stdin if no command is provided
            commands::handle_render_command(None, None, &types::TocArgs::default(), config_files)
        }
    };

    if let Err(e) = result {
        log::error!("{}", e);
        process::exit(1);
    }
}
