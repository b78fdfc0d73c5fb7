use axum::{
    body::Bytes,
    extract::{Multipart, Query, State},
    http::header,
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tc_cleanser::batch;
use tc_core::{CsvBatch, TcError};

use crate::error::ApiError;
use crate::state::AppState;

/// Urlencoded body of `POST /text_cleansing`.
#[derive(Debug, Deserialize)]
pub struct TextForm {
    pub t: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct CsvQuery {
    pub column: Option<String>,
}

pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
}

pub fn cleansing_routes() -> Router<AppState> {
    Router::new()
        .route("/text_cleansing", post(text_cleansing))
        .route("/csv_cleansing", post(csv_cleansing))
        .route("/csv_cleansing/export", post(csv_export))
}

fn envelope(description: &str, data: Value) -> Json<Value> {
    Json(json!({
        "status_code": 200,
        "description": description,
        "data": data,
    }))
}

async fn home() -> Json<Value> {
    envelope("Home Page", json!("Home Page"))
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "uptime_secs": state.start_time.elapsed().as_secs(),
        "slang_entries": state.cleanser.slang().len(),
        "abusive_tokens": state.cleanser.abuse().len(),
    }))
}

async fn text_cleansing(State(state): State<AppState>, Form(form): Form<TextForm>) -> Json<Value> {
    let result = state.cleanser.clean_detailed(&form.t);
    tracing::info!(
        original_len = result.original_len,
        cleaned_len = result.cleaned_len,
        slang_replacements = result.slang_replacements,
        masked = result.masked,
        ratio = result.ratio(),
        "text cleansed"
    );
    envelope("Cleaned text", json!(result.output))
}

async fn csv_cleansing(
    State(state): State<AppState>,
    Query(query): Query<CsvQuery>,
    multipart: Multipart,
) -> Result<Json<Value>, ApiError> {
    let column = query.column.unwrap_or_else(|| state.batch.text_column.clone());
    let upload = read_upload(multipart).await?;
    let cleaned = clean_upload(&state, upload, column.clone()).await?;

    let preview: Vec<&str> = cleaned
        .column(&column)
        .map_err(TcError::from)?
        .into_iter()
        .take(state.batch.preview_rows)
        .collect();
    tracing::info!(rows = cleaned.len(), column = %column, "csv cleansed");
    Ok(envelope("Cleaned CSV", json!(preview)))
}

async fn csv_export(
    State(state): State<AppState>,
    Query(query): Query<CsvQuery>,
    multipart: Multipart,
) -> Result<Response, ApiError> {
    let column = query.column.unwrap_or_else(|| state.batch.text_column.clone());
    let upload = read_upload(multipart).await?;
    let cleaned = clean_upload(&state, upload, column).await?;
    let body = batch::write_batch(&cleaned)?;
    Ok(([(header::CONTENT_TYPE, "text/csv; charset=utf-8")], body).into_response())
}

async fn read_upload(mut multipart: Multipart) -> Result<Bytes, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("file") {
            return Ok(field.bytes().await?);
        }
    }
    Err(ApiError::bad_request("missing multipart field: file"))
}

/// Decode and clean an upload off the async runtime.
async fn clean_upload(state: &AppState, upload: Bytes, column: String) -> Result<CsvBatch, ApiError> {
    let cleanser = Arc::clone(&state.cleanser);
    let encoding = state.batch_encoding;
    let joined = tokio::task::spawn_blocking(move || -> tc_core::Result<CsvBatch> {
        let mut parsed = batch::read_batch(&upload, encoding)?;
        cleanser.clean_column_in_place(&mut parsed, &column)?;
        Ok(parsed)
    })
    .await
    .map_err(|e| ApiError::internal(e.to_string()))?;
    Ok(joined?)
}
