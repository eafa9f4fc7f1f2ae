use std::process::ExitCode;

use clap::Parser;
use countrylens::cli::{self, Cli};
use countrylens::logging::init_tracing;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let args = Cli::parse();

    match cli::run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
