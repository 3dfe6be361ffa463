//! TCP connect primitive.
//!
//! Opens a fresh socket, connects it, and races the connect against the
//! probe's time budget. The socket is owned by the connect future, so it is
//! closed on every exit path: success, refusal, timeout or error.

use crate::error::{ProbeError, ProbeResult};
use crate::prober::outcome::ProbeOutcome;
use crate::types::{Host, ProbeTimeout, Target};
use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::{lookup_host, TcpSocket};
use tokio::time::timeout;
use tracing::trace;

/// Probe one target within `limit`.
///
/// Name resolution counts against the same budget as the connect.
pub(crate) async fn connect(target: &Target, limit: ProbeTimeout) -> ProbeResult<ProbeOutcome> {
    match limit.duration() {
        Some(limit) => timeout(limit, attempt_connect(target))
            .await
            .unwrap_or(Ok(ProbeOutcome::TimedOut)),
        None => attempt_connect(target).await,
    }
}

async fn attempt_connect(target: &Target) -> ProbeResult<ProbeOutcome> {
    let addr = match resolve(target).await {
        Ok(addr) => addr,
        Err(e) => return Ok(e.into()),
    };

    let socket = open_socket(addr)?;
    trace!(%addr, "socket opened, connecting");

    match socket.connect(addr).await {
        Ok(stream) => {
            drop(stream);
            Ok(ProbeOutcome::Open)
        }
        Err(e) => Ok(e.into()),
    }
}

/// Resolve the target to the first address it names.
async fn resolve(target: &Target) -> io::Result<SocketAddr> {
    match &target.host {
        Host::Ip(ip) => Ok(SocketAddr::new(*ip, target.port.as_u16())),
        Host::Name(name) => lookup_host((name.as_str(), target.port.as_u16()))
            .await?
            .next()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no addresses found for '{}'", name),
                )
            }),
    }
}

/// Create an unconnected, non-blocking TCP socket for `addr`'s family.
///
/// `SO_LINGER` is zero so a closed probe resets instead of sitting in
/// TIME_WAIT; long sequential batches would otherwise exhaust local ports.
fn open_socket(addr: SocketAddr) -> ProbeResult<TcpSocket> {
    let socket = Socket::new(Domain::for_address(addr), Type::STREAM, Some(Protocol::TCP))
        .map_err(ProbeError::Socket)?;
    socket.set_nonblocking(true).map_err(ProbeError::Socket)?;
    socket
        .set_linger(Some(Duration::ZERO))
        .map_err(ProbeError::Socket)?;

    Ok(TcpSocket::from_std_stream(socket.into()))
}
