mod alerts;
mod export;
mod stats;

use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::api::errors::AppError;

pub(super) use self::alerts::{list_alerts, new_alerts};
pub(super) use self::export::export_alerts;
pub(super) use self::stats::stats;

pub(super) async fn not_found() -> impl IntoResponse {
  AppError::ResourceNotFound
}

pub(super) async fn healthz() -> StatusCode {
  StatusCode::OK
}
