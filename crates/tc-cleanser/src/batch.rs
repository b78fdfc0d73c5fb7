//! CSV batch codec — legacy-encoded upload in, UTF-8 CSV out.

use encoding_rs::Encoding;
use tc_core::{CsvBatch, Result, TcError};

use crate::encoding;

/// Parse a CSV upload with a header row.
///
/// Fields are decoded with `encoding`. Rows shorter than the header are
/// padded to its width; a row longer than the header is an error.
pub fn read_batch(bytes: &[u8], encoding: &'static Encoding) -> Result<CsvBatch> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let raw_headers = reader.byte_headers().map_err(batch_error)?.clone();
    if raw_headers.is_empty() {
        return Err(TcError::Batch("missing header row".into()));
    }
    let mut headers = Vec::with_capacity(raw_headers.len());
    for (column, raw) in raw_headers.iter().enumerate() {
        let name = encoding::decode_header(raw, encoding)
            .ok_or_else(|| decode_error(1, column, encoding))?;
        headers.push(name);
    }

    let mut batch = CsvBatch::new(headers);
    for result in reader.byte_records() {
        let record = result.map_err(batch_error)?;
        let row = record.position().map(|p| p.line()).unwrap_or(0);
        if record.len() > batch.headers.len() {
            return Err(TcError::Batch(format!(
                "row {row} has {} fields, header has {}",
                record.len(),
                batch.headers.len()
            )));
        }
        let mut fields = Vec::with_capacity(record.len());
        for (column, raw) in record.iter().enumerate() {
            let value = encoding::decode_field(raw, encoding)
                .ok_or_else(|| decode_error(row, column, encoding))?;
            fields.push(value);
        }
        batch.push_row(fields);
    }
    tracing::debug!(rows = batch.len(), columns = batch.headers.len(), "batch parsed");
    Ok(batch)
}

/// Serialize a batch as UTF-8 CSV with its header row.
pub fn write_batch(batch: &CsvBatch) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&batch.headers).map_err(batch_error)?;
    for row in &batch.rows {
        writer.write_record(row).map_err(batch_error)?;
    }
    writer.into_inner().map_err(|e| TcError::Batch(e.to_string()))
}

fn batch_error(err: csv::Error) -> TcError {
    TcError::Batch(err.to_string())
}

fn decode_error(row: u64, column: usize, encoding: &'static Encoding) -> TcError {
    TcError::Batch(format!("row {row}, column {column} is not valid {}", encoding.name()))
}
