use axum::{extract::State, http::header, response::IntoResponse};
use axum_extra::extract::{Query, WithRejection};
use libvigimatch::prelude::*;
use tracing::instrument;

use crate::api::{AppState, dto::FilterParams, errors::AppError};

/// Same selection as the listing endpoint, serialized for spreadsheets.
#[instrument(skip_all)]
pub async fn export_alerts<S: AlertSource>(
  State(state): State<AppState<S>>,
  WithRejection(Query(params), _): WithRejection<Query<FilterParams>, AppError>,
) -> Result<impl IntoResponse, AppError> {
  let rows = state.vigimatch.match_current().await?;
  let results = AlertFilter::from(params).apply(&rows);

  Ok((
    [
      (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
      (header::CONTENT_DISPOSITION, "attachment; filename=\"alerts.csv\""),
    ],
    to_csv(&results),
  ))
}
