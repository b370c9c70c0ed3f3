use thiserror::Error;

#[derive(Error, Debug)]
pub enum KataError {
    #[error("Invalid grid resolution: {axis} must be at least 1, got {value}")]
    InvalidResolution { axis: &'static str, value: usize },

    #[error("Grid of {columns} x {rows} cells is too large to index")]
    GridTooLarge { columns: usize, rows: usize },

    #[error("Malformed debtor record '{input}': {reason}")]
    MalformedRecord { input: String, reason: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl KataError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            KataError::InvalidResolution { .. }
            | KataError::GridTooLarge { .. }
            | KataError::MalformedRecord { .. }
            | KataError::ValidationError { .. } => ErrorSeverity::High,
            KataError::CsvError(_) | KataError::SerializationError(_) => ErrorSeverity::Medium,
            // a closed stdout pipe is the usual culprit here
            KataError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            KataError::InvalidResolution { axis, value } => {
                format!("The grid needs at least one cell along {}, but {} was given", axis, value)
            }
            KataError::GridTooLarge { columns, rows } => {
                format!("A {} x {} grid has more cells than can be counted", columns, rows)
            }
            KataError::MalformedRecord { input, reason } => {
                format!("Could not read debtor '{}': {}", input, reason)
            }
            KataError::ValidationError { field, reason, .. } => {
                format!("Option '{}' is invalid: {}", field, reason)
            }
            KataError::IoError(e) => format!("Could not write output: {}", e),
            KataError::CsvError(e) => format!("Could not produce CSV output: {}", e),
            KataError::SerializationError(e) => format!("Could not produce JSON output: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            KataError::InvalidResolution { .. } => "Pass --columns and --rows values of 1 or more",
            KataError::GridTooLarge { .. } => "Use smaller --columns and --rows values",
            KataError::MalformedRecord { .. } => {
                "Write each debtor as NAME=AMOUNT, for example --debtor Alice=42.5"
            }
            KataError::ValidationError { .. } => "Check the command line options with --help",
            KataError::IoError(_) => "Make sure standard output is still open",
            KataError::CsvError(_) | KataError::SerializationError(_) => {
                "Try again with --format text"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, KataError>;
