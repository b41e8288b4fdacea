use std::time::Duration;

use anyhow::{Context, bail};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpStream,
    time::timeout,
};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use rebound_core::{Backoff, map::to_exponential};
use rebound_model::BackoffConfig;
use rebound_observe::{LoggerConfig, init_logger};

/// Path of an optional JSON `BackoffConfig`.
const CONFIG_ENV: &str = "REBOUND_CONFIG";
const DEFAULT_TARGET: &str = "example.com:80";
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    // 1) logger
    init_logger(&LoggerConfig::from_env()?)?;

    // 2) backoff
    let cfg = load_config()?;
    let mut backoff = to_exponential(&cfg);
    info!(
        init_ms = cfg.init_interval_ms,
        max_ms = cfg.max_interval_ms,
        max_elapsed_ms = cfg.max_elapsed_ms,
        max_retry = cfg.max_retry,
        "backoff configured"
    );

    // 3) ctrl-c aborts the wait between attempts
    let cancel = CancellationToken::new();
    tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        }
    });

    // 4) probe until success or budget exhausted
    let target = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_TARGET.to_string());
    let status = retry_probe(&target, &mut backoff, &cancel).await?;
    info!(%target, status, attempts = backoff.attempts(), "probe succeeded");
    Ok(())
}

fn load_config() -> anyhow::Result<BackoffConfig> {
    let Ok(path) = std::env::var(CONFIG_ENV) else {
        // Give up after two minutes, retrying at most every 30s without jitter.
        return Ok(BackoffConfig {
            factor: 0.0,
            max_interval_ms: 30_000,
            max_elapsed_ms: 2 * 60 * 1_000,
            ..Default::default()
        });
    };
    let raw = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    BackoffConfig::from_json(&raw).with_context(|| format!("loading {path}"))
}

/// Runs [`probe`] until it succeeds, sleeping between attempts as `backoff` says.
async fn retry_probe<B: Backoff>(
    target: &str,
    backoff: &mut B,
    cancel: &CancellationToken,
) -> anyhow::Result<u16> {
    backoff.reset();
    loop {
        let err = match probe(target).await {
            Ok(status) => return Ok(status),
            Err(e) => e,
        };
        let Some(delay) = backoff.next() else {
            return Err(err.context(format!("giving up on {target}")));
        };
        warn!(%target, error = %err, delay_ms = delay.as_millis() as u64, "probe failed, retrying");

        tokio::select! {
            _ = cancel.cancelled() => bail!("cancelled while waiting to retry {target}"),
            _ = tokio::time::sleep(delay) => {}
        }
    }
}

/// Sends `HEAD /` and returns the status code; 5xx counts as a failure.
async fn probe(target: &str) -> anyhow::Result<u16> {
    let host = target.rsplit_once(':').map_or(target, |(h, _)| h);

    let mut stream = timeout(PROBE_TIMEOUT, TcpStream::connect(target))
        .await
        .context("connect timed out")?
        .with_context(|| format!("connecting to {target}"))?;

    let request = format!("HEAD / HTTP/1.0\r\nHost: {host}\r\nConnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).await?;

    let mut buf = Vec::with_capacity(512);
    timeout(PROBE_TIMEOUT, stream.read_to_end(&mut buf))
        .await
        .context("response timed out")??;

    let status = parse_status(&buf)?;
    debug!(%target, status, "probe response");
    if status >= 500 {
        bail!("server error: {status}");
    }
    Ok(status)
}

fn parse_status(response: &[u8]) -> anyhow::Result<u16> {
    let text = String::from_utf8_lossy(response);
    let line = text.lines().next().unwrap_or_default();

    let mut parts = line.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some(version), Some(code)) if version.starts_with("HTTP/") => code
            .parse()
            .with_context(|| format!("bad status code in {line:?}")),
        _ => bail!("unexpected response: {line:?}"),
    }
}
