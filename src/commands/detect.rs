use std::io;
use std::net::{IpAddr, ToSocketAddrs};
use tracing::debug;

#[derive(thiserror::Error, Debug)]
pub enum DetectError {
    #[error("cannot read hostname: {0}")]
    Hostname(#[source] io::Error),

    #[error("hostname is not valid UTF-8")]
    NonUtf8Hostname,

    #[error("cannot resolve {host}: {source}")]
    Resolve {
        host: String,
        #[source]
        source: io::Error,
    },

    #[error("{0} resolved to no addresses")]
    NoAddress(String),
}

/// Resolve this machine's hostname through the system resolver.
pub fn detect_local_ip() -> Result<IpAddr, DetectError> {
    let host = hostname::get()
        .map_err(DetectError::Hostname)?
        .into_string()
        .map_err(|_| DetectError::NonUtf8Hostname)?;
    resolve_host(&host)
}

/// First IPv4 address `host` resolves to, else the first address of any family.
pub fn resolve_host(host: &str) -> Result<IpAddr, DetectError> {
    let addrs: Vec<IpAddr> = (host, 0)
        .to_socket_addrs()
        .map_err(|source| DetectError::Resolve { host: host.to_string(), source })?
        .map(|sa| sa.ip())
        .collect();
    debug!("{host} resolved to {addrs:?}");

    addrs
        .iter()
        .find(|ip| ip.is_ipv4())
        .or_else(|| addrs.first())
        .copied()
        .ok_or_else(|| DetectError::NoAddress(host.to_string()))
}
