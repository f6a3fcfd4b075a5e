use axum::{
    extract::Query,
    http::Method,
    routing::{get, post},
    Json, Router,
};
use bytes::Bytes;
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::{
    error::AppError,
    models::{ExtractedFileInfo, FilePreviewData, OrderInfo},
    services::{
        filename::{extract_filename_info, extract_order_info_from_filename},
        preview::{preview_file, InMemoryFile},
    },
    AppState,
};

pub fn routes() -> Router<Arc<AppState>> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(3600));

    Router::new()
        .route("/files/extract", get(extract))
        .route("/files/order-info", get(order_info))
        .route("/files/preview", post(preview))
        .layer(cors)
}

#[derive(Debug, Deserialize)]
pub struct FilenameQuery {
    filename: String,
}

#[derive(Debug, Deserialize)]
pub struct OrderInfoQuery {
    filename: String,
    parser_type: Option<String>,
}

async fn extract(Query(query): Query<FilenameQuery>) -> Json<ExtractedFileInfo> {
    Json(extract_filename_info(&query.filename))
}

async fn order_info(Query(query): Query<OrderInfoQuery>) -> Json<OrderInfo> {
    Json(extract_order_info_from_filename(
        &query.filename,
        query.parser_type.as_deref(),
    ))
}

async fn preview(
    Query(query): Query<FilenameQuery>,
    body: Bytes,
) -> Result<Json<FilePreviewData>, AppError> {
    if query.filename.trim().is_empty() {
        return Err(AppError::InvalidInput("filename is required".to_string()));
    }

    tracing::info!(
        "Preview requested for {}, size: {}KB",
        query.filename,
        body.len() / 1024
    );

    let file = InMemoryFile::new(query.filename, body);
    Ok(Json(preview_file(&file).await))
}
