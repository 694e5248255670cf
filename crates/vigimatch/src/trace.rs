use std::io::Write;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::api::config::{Config, Env};

pub struct TraceGuard {
  _logging: WorkerGuard,
}

pub fn init_tracing(config: &Config, writer: impl Write + Send + 'static) -> TraceGuard {
  let (appender, logging_guard) = tracing_appender::non_blocking(writer);

  let formatter = match config.env {
    Env::Dev => fmt::layer().compact().with_writer(appender).with_ansi(true).boxed(),
    Env::Production => fmt::layer().json().flatten_event(true).with_writer(appender).boxed(),
  };

  let filter = EnvFilter::builder().try_from_env().or_else(|_| EnvFilter::try_new("info")).unwrap();

  tracing_subscriber::registry().with(filter.and_then(formatter)).init();

  TraceGuard { _logging: logging_guard }
}
