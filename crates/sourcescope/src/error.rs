use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("analysis failed")]
    Operation(#[from] sourcescope_operations::OperationError),

    #[error("failed to determine current directory")]
    CurrentDir(#[source] std::io::Error),

    #[error(
        "{count} source file(s) could not be parsed; use --skip-unparsable or on-parse-error = \"skip\" to ignore them"
    )]
    ParseFailures {
        count: usize,
        #[source]
        first: sourcescope_imports::ImportParseError,
    },
}

pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::CliError;
    use sourcescope_imports::ImportParseError;
    use sourcescope_operations::OperationError;

    #[test]
    fn operation_error_converts_via_from() {
        let op_err = OperationError::Project(sourcescope_project::ProjectError::MissingImportPrefix {
            root: PathBuf::from("/repo"),
        });

        let cli_err: CliError = op_err.into();

        assert!(matches!(cli_err, CliError::Operation(_)));
    }

    #[test]
    fn operation_error_has_source_chain() {
        let op_err = OperationError::Git(ref_not_found());
        let cli_err: CliError = op_err.into();

        let source = std::error::Error::source(&cli_err);

        assert!(source.is_some_and(|s| s.to_string().contains("origin/main")));
    }

    #[test]
    fn parse_failures_mention_count_and_first_file() {
        let err = CliError::ParseFailures {
            count: 3,
            first: ImportParseError::MalformedImports {
                path: PathBuf::from("gen/broken.go"),
                line: 4,
            },
        };

        assert!(err.to_string().contains('3'));
        let source = std::error::Error::source(&err);
        assert!(source.is_some_and(|s| s.to_string().contains("gen/broken.go")));
    }

    #[test]
    fn current_dir_error_message() {
        let err = CliError::CurrentDir(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "gone",
        ));

        assert!(err.to_string().contains("current directory"));
    }

    fn ref_not_found() -> sourcescope_git::GitError {
        sourcescope_git::GitError::RefNotFound {
            refspec: "origin/main".to_string(),
        }
    }
}
