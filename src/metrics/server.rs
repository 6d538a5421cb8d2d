//! Prometheus exposition for workbeat metrics.
//!
//! The subscriber itself writes through the `metrics` facade and works
//! against whatever recorder the embedding application installed. For
//! applications that have none, [`init`] installs a Prometheus recorder
//! with the job-duration buckets pinned and serves `/metrics` plus a
//! `/health` probe endpoint over HTTP.

use axum::{routing::get, Extension, Router};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use snafu::prelude::*;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{debug, error};

use super::JOB_DURATION_SECONDS_BUCKETS;
use crate::config::MetricsConfig;
use crate::error::{ListenAddressSnafu, MetricsError, PrometheusInitSnafu};

/// Install the Prometheus recorder and start the exposition server.
///
/// Returns without doing anything when metrics are disabled in the
/// config. Must be called within a tokio runtime; the HTTP server is
/// spawned in the background.
pub fn init(config: &MetricsConfig) -> Result<(), MetricsError> {
    if !config.enabled {
        debug!("Metrics exposition disabled by config");
        return Ok(());
    }

    let addr: SocketAddr = config.address.parse().context(ListenAddressSnafu {
        address: config.address.clone(),
    })?;

    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full("workbeat_job_runtime_seconds".to_string()),
            JOB_DURATION_SECONDS_BUCKETS,
        )
        .context(PrometheusInitSnafu)?
        .set_buckets_for_metric(
            Matcher::Full("workbeat_job_latency_seconds".to_string()),
            JOB_DURATION_SECONDS_BUCKETS,
        )
        .context(PrometheusInitSnafu)?
        .install_recorder()
        .context(PrometheusInitSnafu)?;

    tokio::spawn(run_server(addr, handle));

    Ok(())
}

async fn run_server(addr: SocketAddr, handle: PrometheusHandle) {
    let app = Router::new()
        .route("/metrics", get(metrics_handler))
        .route("/health", get(health_handler))
        .layer(Extension(handle));

    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to bind metrics server to {}: {}", addr, e);
            return;
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        error!("Metrics server error: {}", e);
    }
}

async fn metrics_handler(Extension(handle): Extension<PrometheusHandle>) -> String {
    handle.render()
}

async fn health_handler() -> &'static str {
    "ok\n"
}
