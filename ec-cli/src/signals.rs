use std::future::Future;
use std::time::Duration;

use anyhow::anyhow;
use ec_core::prelude::*;
use tokio::signal::unix::{SignalKind, signal};

// Resolves once the user asks us to stop: SIGINT (Ctrl+C), SIGTERM, or SIGHUP
// (terminal closed).
pub async fn interrupted() -> anyhow::Error {
    let mut sigterm = signal(SignalKind::terminate()).expect("failed to register SIGTERM handler");
    let mut sighup = signal(SignalKind::hangup()).expect("failed to register SIGHUP handler");

    tokio::select! {
        _ = tokio::signal::ctrl_c() => anyhow!("interrupted"),
        _ = sigterm.recv() => anyhow!("terminated"),
        _ = sighup.recv() => anyhow!("terminal closed"),
    }
}

pub async fn with_deadline(timeout: Option<Duration>, fut: impl Future<Output = EmptyResult>) -> EmptyResult {
    match timeout {
        Some(duration) => tokio::time::timeout(duration, fut)
            .await
            .map_err(|_| anyhow!("timed out after {}", humantime::format_duration(duration)))?,
        None => fut.await,
    }
}
