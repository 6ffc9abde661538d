//! csaf-check binary entry point

use colored::Colorize;

#[tokio::main]
async fn main() {
    if let Err(e) = validator_cli::run().await {
        eprintln!("{} {}", "✗".red(), e);
        std::process::exit(1);
    }
}
