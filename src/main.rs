use a2tex::generate::{self, GenerateArgs};
use a2tex::{EXIT_STATUS_FAILURE, EXIT_STATUS_OPTION_ERROR, EXIT_STATUS_SUCCESS};
use clap::Parser;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "a2tex")]
#[command(about = "Build a LaTeX author list and an arXiv author line from a CSV file")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(flatten)]
    args: GenerateArgs,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // --help and --version come through here too
            return if e.use_stderr() {
                ExitCode::from(EXIT_STATUS_OPTION_ERROR)
            } else {
                ExitCode::from(EXIT_STATUS_SUCCESS)
            };
        }
    };

    if cli.verbose {
        std::env::set_var("RUST_LOG", "debug");
    }

    match generate::run(cli.args) {
        Ok(()) => ExitCode::from(EXIT_STATUS_SUCCESS),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_STATUS_FAILURE)
        }
    }
}
