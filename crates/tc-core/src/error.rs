use thiserror::Error;

/// Failure while loading the slang or abusive-word lexicon.
///
/// Rows are 1-based line numbers in the source; columns are 0-based field
/// indices or header names.
#[derive(Error, Debug)]
pub enum LexiconLoadError {
    #[error("{source_name}: cannot read lexicon: {source}")]
    Io {
        source_name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{source_name}: malformed record at row {row}: {message}")]
    Malformed { source_name: String, row: u64, message: String },
    #[error("{source_name}: row {row}, column {column} is not valid {encoding}")]
    Decode { source_name: String, row: u64, column: usize, encoding: &'static str },
    #[error("{source_name}: row {row} is missing column {column}")]
    MissingColumn { source_name: String, row: u64, column: String },
    #[error("{source_name}: row {row} has an empty entry")]
    EmptyEntry { source_name: String, row: u64 },
    #[error("Unknown encoding label: {0}")]
    UnknownEncoding(String),
    #[error("Abusive-word pattern failed to compile: {0}")]
    Pattern(String),
}

/// A batch does not carry the column a caller asked to clean.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Column not found: {column}")]
pub struct InvalidColumnError {
    pub column: String,
}

impl InvalidColumnError {
    pub fn new(column: impl Into<String>) -> Self {
        Self { column: column.into() }
    }
}

#[derive(Error, Debug)]
pub enum TcError {
    #[error(transparent)]
    LexiconLoad(#[from] LexiconLoadError),
    #[error(transparent)]
    InvalidColumn(#[from] InvalidColumnError),
    #[error("Malformed batch: {0}")]
    Batch(String),
    #[error("Config error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, TcError>;
