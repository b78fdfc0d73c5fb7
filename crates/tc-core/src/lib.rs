pub mod config;
pub mod error;
pub mod types;

pub use config::{BatchConfig, CleanserConfig, LexiconConfig, LoggingConfig, ServerConfig};
pub use error::{InvalidColumnError, LexiconLoadError, Result, TcError};
pub use types::CsvBatch;
