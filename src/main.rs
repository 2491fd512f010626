use anyhow::Context;
use courseware::logging::{init_tracing, shutdown_tracer};
use courseware::metrics::{init_metrics, metrics_app};
use courseware::router::init_router;
use courseware::state::init_app_state;
use courseware_config::{DatabaseConfig, ServerConfig};
use dotenvy::dotenv;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    init_tracing()?;

    let database_config = DatabaseConfig::from_env()?;
    let server_config = ServerConfig::from_env();

    let state = init_app_state(&database_config)
        .await
        .context("Failed to initialize application state")?;

    let mut app = init_router(state);
    if let Some(handle) = init_metrics()? {
        app = app.merge(metrics_app(handle));
    }

    let bind_addr = server_config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;

    info!(address = %bind_addr, "🚀 Server running");
    info!("📚 Swagger UI available at http://{}/swagger-ui", bind_addr);
    info!("📖 Scalar UI available at http://{}/scalar", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    shutdown_tracer().await;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = await_signal(tokio::signal::ctrl_c(), "Ctrl+C");

    #[cfg(unix)]
    let terminate = await_signal(
        async {
            let mut signal =
                tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())?;
            signal.recv().await;
            Ok::<(), std::io::Error>(())
        },
        "SIGTERM",
    );

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

/// Resolves when `listener` fires. A listener that failed to install never resolves.
async fn await_signal<E, F>(listener: F, name: &str)
where
    E: std::fmt::Display,
    F: std::future::Future<Output = Result<(), E>>,
{
    if let Err(e) = listener.await {
        tracing::error!(error = %e, signal = name, "Failed to install signal handler");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_failed_signal_handler_does_not_trigger_shutdown() {
        let listener = async { Err::<(), _>(std::io::Error::other("unsupported")) };

        let result =
            tokio::time::timeout(Duration::from_millis(50), await_signal(listener, "test")).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_signal_triggers_shutdown() {
        let listener = async { Ok::<(), std::io::Error>(()) };

        let result =
            tokio::time::timeout(Duration::from_millis(50), await_signal(listener, "test")).await;

        assert!(result.is_ok());
    }
}
