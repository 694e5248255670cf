use std::sync::Arc;
use std::time::Duration;

use axum::{Router, extract::Request, middleware, routing::get};
use libvigimatch::prelude::*;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::api::config::Config;

pub mod config;
pub mod dto;
pub mod errors;

pub mod handlers;
mod middlewares;

#[derive(Clone)]
pub struct AppState<S: AlertSource> {
  pub vigimatch: Arc<Vigimatch<S>>,
}

pub fn routes<S: AlertSource>(config: &Config, source: S) -> Router {
  let registry = load_registry_or_empty(&config.registry_path);
  let vigimatch = Vigimatch::new(source, registry, SeenAlerts::new(&config.cache_path)).with_policy(config.policy());

  let state = AppState { vigimatch: Arc::new(vigimatch) };

  Router::new()
    .route("/alerts", get(handlers::list_alerts))
    .route("/alerts/new", get(handlers::new_alerts))
    .route("/alerts/export", get(handlers::export_alerts))
    .route("/stats", get(handlers::stats))
    .fallback(handlers::not_found)
    .layer(TimeoutLayer::new(Duration::from_secs(30)))
    .layer(TraceLayer::new_for_http().make_span_with(|_: &Request| {
      let request_id = Uuid::new_v4();

      tracing::info_span!("request", %request_id)
    }))
    // The health endpoint stays out of the request tracing above
    .route("/healthz", get(handlers::healthz))
    .layer(middleware::from_fn(middlewares::logging::api_logger))
    .with_state(state)
}
