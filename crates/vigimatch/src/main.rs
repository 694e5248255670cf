mod api;
mod trace;

#[cfg(test)]
mod tests;

use libvigimatch::prelude::*;
use tokio::signal;

use crate::api::config::Config;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let config = Config::from_env()?;
  let source = DscFeed::new(config.feed_url.clone());

  run(config, source).await
}

async fn run<S: AlertSource>(config: Config, source: S) -> anyhow::Result<()> {
  let _guard = trace::init_tracing(&config, std::io::stdout());
  let app = api::routes(&config, source);
  let listener = tokio::net::TcpListener::bind(&config.listen_addr).await.expect("could not create listener");

  tracing::info!("listening on {}", listener.local_addr()?);

  axum::serve(listener, app).with_graceful_shutdown(shutdown()).await.expect("could not start app");

  Ok(())
}

async fn shutdown() {
  let ctrl_c = async {
    signal::ctrl_c().await.expect("failed to install ^C handler");
  };

  let terminate = async {
    signal::unix::signal(signal::unix::SignalKind::terminate())
      .expect("failed to install terminate signal handler")
      .recv()
      .await;
  };

  tokio::select! {
      () = ctrl_c => tracing::info!("received ^C, initiating shutdown"),
      () = terminate => tracing::info!("received terminate signal, initiating shutdown"),
  }
}
