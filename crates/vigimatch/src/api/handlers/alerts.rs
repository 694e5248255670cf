use axum::{Json, extract::State, response::IntoResponse};
use axum_extra::extract::{Query, WithRejection};
use libvigimatch::prelude::*;
use tracing::instrument;

use crate::api::{
  AppState,
  dto::{AlertsResponse, FilterParams},
  errors::AppError,
};

/// Fetch the current feed, match it against the registry and return the
/// rows selected by the query filters.
#[instrument(skip_all)]
pub async fn list_alerts<S: AlertSource>(
  State(state): State<AppState<S>>,
  WithRejection(Query(params), _): WithRejection<Query<FilterParams>, AppError>,
) -> Result<impl IntoResponse, AppError> {
  let rows = state.vigimatch.match_current().await?;
  let results = AlertFilter::from(params).apply(&rows);

  Ok(Json(AlertsResponse { total: results.len(), results }))
}

/// Match only the alerts that were not seen on a previous run, and record
/// the current feed as seen.
#[instrument(skip_all)]
pub async fn new_alerts<S: AlertSource>(State(state): State<AppState<S>>) -> Result<impl IntoResponse, AppError> {
  let results = state.vigimatch.match_new().await?;

  Ok(Json(AlertsResponse { total: results.len(), results }))
}
