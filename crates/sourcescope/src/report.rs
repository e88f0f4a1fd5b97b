use std::path::Path;

use clap::Args;
use sourcescope_operations::operations::{ImpactOperation, ImpactOutput};
use sourcescope_operations::providers::{
    FileSystemProjectProvider, FileSystemSourceProvider, Git2Provider, TreeSitterImportReader,
};
use sourcescope_project::{ParseErrorPolicy, ScopeOverrides};
use tracing::warn;

use crate::environment;
use crate::error::{CliError, Result};
use crate::output::{PlainTextFormatter, ReportFormatter};

#[derive(Args, Debug, Default)]
pub(crate) struct ReportArgs {
    /// Base reference to compare against (default: master)
    #[arg(long)]
    pub base: Option<String>,

    /// Import path prefix of the source tree (default: module path from go.mod)
    #[arg(long)]
    pub prefix: Option<String>,

    /// Additional top-level directory to leave out of the import scan
    #[arg(long = "exclude-dir", value_name = "DIR")]
    pub exclude_dirs: Vec<String>,

    /// Additional package to leave out of the changed packages
    #[arg(long = "exclude-package", value_name = "PACKAGE")]
    pub exclude_packages: Vec<String>,

    /// Warn about source files with unparsable imports instead of failing
    #[arg(long)]
    pub skip_unparsable: bool,

    /// Print only the dependent root folders, one per line
    #[arg(long)]
    pub root_folders_only: bool,
}

impl ReportArgs {
    /// Layers the command-line flags over the environment overrides.
    pub(crate) fn overrides(&self, env: ScopeOverrides) -> ScopeOverrides {
        ScopeOverrides {
            import_prefix: self.prefix.clone().or(env.import_prefix),
            base: self.base.clone().or(env.base),
            extra_excluded_dirs: self.exclude_dirs.clone(),
            extra_excluded_packages: self.exclude_packages.clone(),
            on_parse_error: self
                .skip_unparsable
                .then_some(ParseErrorPolicy::Skip)
                .or(env.on_parse_error),
        }
    }
}

pub(crate) fn run(start_path: &Path, args: &ReportArgs, verbose: bool) -> Result<()> {
    let overrides = args.overrides(environment::env_overrides());

    let operation = ImpactOperation::new(
        FileSystemProjectProvider::new(),
        Git2Provider::new(),
        FileSystemSourceProvider::new(),
        TreeSitterImportReader::new(),
    );
    let mut output = operation.execute(start_path, &overrides)?;

    apply_parse_error_policy(&mut output)?;

    let formatter = PlainTextFormatter::new(verbose);
    let text = if args.root_folders_only {
        formatter.format_root_folders(&output)
    } else {
        formatter.format_report(&output)
    };
    print!("{text}");

    Ok(())
}

fn apply_parse_error_policy(output: &mut ImpactOutput) -> Result<()> {
    if output.parse_failures.is_empty() {
        return Ok(());
    }

    match output.on_parse_error {
        ParseErrorPolicy::Abort => {
            let count = output.parse_failures.len();
            let first = output.parse_failures.remove(0);
            Err(CliError::ParseFailures { count, first })
        }
        ParseErrorPolicy::Skip => {
            for failure in output.parse_failures.drain(..) {
                warn!("skipping unparsable file: {failure}");
            }
            Ok(())
        }
    }
}
