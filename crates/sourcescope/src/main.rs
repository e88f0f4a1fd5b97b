mod environment;
mod error;
mod logging;
mod output;
mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use crate::error::CliError;
use crate::report::ReportArgs;

#[derive(Parser)]
#[command(name = "sourcescope")]
#[command(version = env!("SOURCESCOPE_VERSION"))]
#[command(
    about = "List the Go packages changed since a base reference and the packages that import them",
    long_about = None
)]
struct Cli {
    /// Root directory of the Go source tree (default: current directory)
    #[arg(long = "path", short = 'C')]
    path: Option<PathBuf>,

    /// Log pipeline progress and list changed files
    #[arg(long, short = 'v')]
    verbose: bool,

    #[command(flatten)]
    report: ReportArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let start_path = match resolve_start_path(cli.path) {
        Ok(path) => path,
        Err(e) => {
            print_error(&e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = report::run(&start_path, &cli.report, cli.verbose) {
        print_error(&e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn resolve_start_path(path: Option<PathBuf>) -> Result<PathBuf, CliError> {
    match path {
        Some(p) => Ok(p),
        None => std::env::current_dir().map_err(CliError::CurrentDir),
    }
}

fn print_error(error: &CliError) {
    eprintln!("error: {error}");

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("caused by: {cause}");
        source = std::error::Error::source(cause);
    }
}
