//! Application state shared across all handlers.

use std::sync::Arc;
use std::time::Instant;
use tc_cleanser::encoding::{self, Encoding};
use tc_cleanser::Cleanser;
use tc_core::{BatchConfig, Result};

/// Shared application state. The cleanser is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub cleanser: Arc<Cleanser>,
    pub batch: Arc<BatchConfig>,
    pub batch_encoding: &'static Encoding,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(cleanser: Cleanser, batch: BatchConfig) -> Result<Self> {
        let batch_encoding = encoding::resolve(&batch.encoding)?;
        Ok(Self {
            cleanser: Arc::new(cleanser),
            batch: Arc::new(batch),
            batch_encoding,
            start_time: Instant::now(),
        })
    }
}
