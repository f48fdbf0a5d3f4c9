use rustyll_toc::cli;

fn main() {
    // Run the CLI
    cli::run();
}
