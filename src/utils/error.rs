use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodegenError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Region marker '{marker}' not found in sheet")]
    MissingMarker { marker: String },

    #[error("Region marker '{first}' (row {first_row}) must precede '{second}' (row {second_row}) with a header row in between")]
    MarkersOutOfOrder {
        first: String,
        first_row: usize,
        second: String,
        second_row: usize,
    },

    #[error("Region '{region}' has no header row at row {row}")]
    MissingHeaderRow { region: String, row: usize },

    #[error("Region '{region}' header is missing columns: {}", .missing.join(", "))]
    SchemaError { region: String, missing: Vec<String> },

    #[error("Invalid record in region '{region}' at row {row}: field '{field}' {reason}")]
    InvalidRecord {
        region: String,
        row: usize,
        field: String,
        reason: String,
    },

    #[error("Duplicate name '{name}' in region '{region}'")]
    DuplicateName { region: String, name: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Schema,
    Config,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl CodegenError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CodegenError::CsvError(_)
            | CodegenError::MissingMarker { .. }
            | CodegenError::MarkersOutOfOrder { .. }
            | CodegenError::InvalidRecord { .. }
            | CodegenError::DuplicateName { .. } => ErrorCategory::Input,
            CodegenError::MissingHeaderRow { .. } | CodegenError::SchemaError { .. } => {
                ErrorCategory::Schema
            }
            CodegenError::InvalidConfigValueError { .. }
            | CodegenError::ConfigValidationError { .. } => ErrorCategory::Config,
            CodegenError::IoError(_) => ErrorCategory::Io,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Schema | ErrorCategory::Config => {
                ErrorSeverity::High
            }
            ErrorCategory::Io => match self {
                // 暫時性 IO 錯誤可重試
                CodegenError::IoError(e)
                    if matches!(
                        e.kind(),
                        std::io::ErrorKind::Interrupted | std::io::ErrorKind::WouldBlock
                    ) =>
                {
                    ErrorSeverity::Medium
                }
                _ => ErrorSeverity::Critical,
            },
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CodegenError::MissingMarker { marker } => format!(
                "Add a cell containing exactly '{}' above the corresponding table",
                marker
            ),
            CodegenError::MarkersOutOfOrder { .. } => {
                "Place the TYPES table above the DONNEES table, each followed by its header row"
                    .to_string()
            }
            CodegenError::MissingHeaderRow { .. } | CodegenError::SchemaError { .. } => {
                "Check the header row directly below the region marker".to_string()
            }
            CodegenError::InvalidRecord { .. } => {
                "Fill in the required cell or delete the incomplete row".to_string()
            }
            CodegenError::DuplicateName { .. } => {
                "Rename one of the rows so every Nom is unique".to_string()
            }
            CodegenError::CsvError(_) => {
                "Export the sheet as CSV and check the --delimiter option".to_string()
            }
            CodegenError::InvalidConfigValueError { .. }
            | CodegenError::ConfigValidationError { .. } => {
                "Review the command line flags and the TOML configuration file".to_string()
            }
            CodegenError::IoError(_) => {
                "Check that the input file exists and the output directories are writable"
                    .to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Input sheet is malformed: {}", self),
            ErrorCategory::Schema => format!("Input sheet layout is invalid: {}", self),
            ErrorCategory::Config => format!("Invalid configuration: {}", self),
            ErrorCategory::Io => format!("File system failure: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, CodegenError>;
