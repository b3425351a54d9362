use thiserror::Error;

/// Parse errors are returned when a line cannot be turned into a pipeline.
///
/// All parse errors abort the current line only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A redirection operator was the last word of its segment.
    #[error("missing file name after '{operator}' in command {position}")]
    MissingRedirectTarget {
        operator: &'static str,
        position: usize,
    },

    /// An input file was given to a command that reads from a pipe.
    #[error("input redirection in command {position} is not at the start of the pipeline")]
    MisplacedInputRedirect { position: usize },

    /// An output file was given to a command that writes to a pipe.
    #[error("output redirection in command {position} is not at the end of the pipeline")]
    MisplacedOutputRedirect { position: usize },
}

impl ParseError {
    /// Returns a help text associated with the error.
    pub fn help(&self) -> &str {
        match self {
            ParseError::MissingRedirectTarget { .. } => "a file name must follow the operator",
            ParseError::MisplacedInputRedirect { .. } => {
                "only the first command of a pipeline may read from a file"
            }
            ParseError::MisplacedOutputRedirect { .. } => {
                "only the last command of a pipeline may write to a file"
            }
        }
    }

    /// Returns the pipeline position of the offending command.
    pub fn position(&self) -> usize {
        match self {
            ParseError::MissingRedirectTarget { position, .. }
            | ParseError::MisplacedInputRedirect { position }
            | ParseError::MisplacedOutputRedirect { position } => *position,
        }
    }
}
