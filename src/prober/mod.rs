//! Port prober - bounded-time TCP reachability checks.
//!
//! A probe is one TCP connect attempt against one (host, port) pair, raced
//! against a time budget. A batch runs probes sequentially against one host:
//! each port's connect-or-timeout cycle finishes before the next begins, so
//! a batch of `n` unanswered ports takes up to `n` times the budget.
//!
//! Connectivity failures are results, not errors. Only malformed input and
//! local socket failures surface as [`ProbeError`](crate::error::ProbeError).

mod batch;
mod outcome;
mod tcp;

pub use batch::BatchResult;
pub use outcome::ProbeOutcome;

use crate::error::ProbeResult;
use crate::types::{ProbeTimeout, Target, ToHost, ToPort, ToTarget};
use std::time::Instant;
use tracing::{debug, info};

/// Runs probes with a fixed time budget.
///
/// # Example
///
/// ```rust,no_run
/// use portprobe::Prober;
/// use std::time::Duration;
///
/// # async fn run() -> portprobe::error::ProbeResult<()> {
/// let prober = Prober::new(Duration::from_millis(500));
/// let ssh_open = prober.probe(("10.0.0.1", 22)).await?;
/// let results = prober.probe_many("10.0.0.1", [22, 80, 443]).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Prober {
    timeout: ProbeTimeout,
}

impl Prober {
    /// Create a prober; every probe it runs gets `timeout`.
    pub fn new(timeout: impl Into<ProbeTimeout>) -> Self {
        Self {
            timeout: timeout.into(),
        }
    }

    /// The per-probe time budget.
    pub fn timeout(&self) -> ProbeTimeout {
        self.timeout
    }

    /// Probe one target and report how the attempt ended.
    pub async fn probe_outcome<T: ToTarget>(&self, target: T) -> ProbeResult<ProbeOutcome> {
        let target = target.to_target()?;
        self.probe_target(&target).await
    }

    /// Probe one target; `true` only if the handshake completed in time.
    pub async fn probe<T: ToTarget>(&self, target: T) -> ProbeResult<bool> {
        Ok(self.probe_outcome(target).await?.is_open())
    }

    /// Probe `host` on each port in iteration order, one at a time.
    ///
    /// The host and every port are validated before the first connect, so an
    /// invalid port fails the whole batch without touching the network.
    pub async fn probe_many<H, I>(&self, host: H, ports: I) -> ProbeResult<BatchResult>
    where
        H: ToHost,
        I: IntoIterator,
        I::Item: ToPort,
    {
        let host = host.to_host()?;
        let ports = ports
            .into_iter()
            .map(ToPort::to_port)
            .collect::<ProbeResult<Vec<_>>>()?;

        info!(%host, ports = ports.len(), timeout = %self.timeout, "starting batch");
        let start = Instant::now();

        let mut results = BatchResult::with_capacity(ports.len());
        for port in ports {
            let target = Target::new(host.clone(), port);
            let outcome = self.probe_target(&target).await?;
            results.insert(port, outcome.is_open());
        }

        info!(
            %host,
            open = results.open_ports().count(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "batch complete"
        );
        Ok(results)
    }

    async fn probe_target(&self, target: &Target) -> ProbeResult<ProbeOutcome> {
        let outcome = tcp::connect(target, self.timeout).await?;
        debug!(%target, %outcome, "probe finished");
        Ok(outcome)
    }
}

/// Probe a single target within `timeout`.
///
/// `target` may be a `(host, port)` tuple, a socket address, or a
/// `"host:port"` string.
pub async fn probe_one<T: ToTarget>(target: T, timeout: impl Into<ProbeTimeout>) -> ProbeResult<bool> {
    Prober::new(timeout).probe(target).await
}

/// Probe `host` on every port in `ports`, sequentially, within `timeout` each.
pub async fn probe_many<H, I>(
    host: H,
    ports: I,
    timeout: impl Into<ProbeTimeout>,
) -> ProbeResult<BatchResult>
where
    H: ToHost,
    I: IntoIterator,
    I::Item: ToPort,
{
    Prober::new(timeout).probe_many(host, ports).await
}
