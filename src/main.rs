use clap::Parser;
use meal_finder::cli::{self, Cli};
use meal_finder::logging;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(&logging::target_for(
        cli.is_interactive(),
        cli.log_file.as_deref(),
    ));

    let status = cli::execute(cli, &mut std::io::stdout(), &mut std::io::stderr()).await;
    ExitCode::from(status)
}
