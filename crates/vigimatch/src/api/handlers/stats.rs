use axum::{Json, extract::State, response::IntoResponse};
use libvigimatch::prelude::*;
use tracing::instrument;

use crate::api::{AppState, errors::AppError};

/// KPI counters over the current feed.
#[instrument(skip_all)]
pub async fn stats<S: AlertSource>(State(state): State<AppState<S>>) -> Result<impl IntoResponse, AppError> {
  let rows = state.vigimatch.match_current().await?;

  Ok(Json(kpi(&rows)))
}
