use tracing::{debug, warn};
use crate::models::{IpConfig, UpdateRequest};
use crate::util::{is_all_digits, is_valid_ip};
use super::ConfigError;

/// Fold command-line values into the stored record.
///
/// An invalid IP rejects the whole request and leaves `config` untouched.
/// Ports are only taken when they are all digits; anything else keeps the
/// stored value.
pub fn apply_update(config: &mut IpConfig, req: &UpdateRequest) -> Result<(), ConfigError> {
    let ip = req.ip.as_deref().filter(|ip| !ip.is_empty());
    if let Some(ip) = ip {
        if !is_valid_ip(ip) {
            return Err(ConfigError::InvalidIp(ip.to_string()));
        }
    }

    if let Some(ip) = ip {
        config.server_ip = ip.to_string();
    }
    if let Some(port) = parse_port("backend", req.backend_port.as_deref()) {
        config.backend_port = port;
    }
    if let Some(port) = parse_port("frontend", req.frontend_port.as_deref()) {
        config.frontend_port = port;
    }
    Ok(())
}

fn parse_port(which: &str, raw: Option<&str>) -> Option<u64> {
    let raw = raw?;
    if !is_all_digits(raw) {
        debug!("Ignoring non-numeric {which} port {raw:?}");
        return None;
    }
    match raw.parse::<u64>() {
        Ok(p) => Some(p),
        Err(e) => { warn!("Ignoring {which} port {raw}: {e}"); None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(ip: Option<&str>, be: Option<&str>, fe: Option<&str>) -> UpdateRequest {
        UpdateRequest {
            ip: ip.map(String::from),
            backend_port: be.map(String::from),
            frontend_port: fe.map(String::from),
        }
    }

    #[test]
    fn applies_ip_and_ports() {
        let mut cfg = IpConfig::default();
        apply_update(&mut cfg, &req(Some("10.0.0.5"), Some("8080"), Some("5173"))).unwrap();
        assert_eq!(cfg.server_ip, "10.0.0.5");
        assert_eq!(cfg.backend_port, 8080);
        assert_eq!(cfg.frontend_port, 5173);
    }

    #[test]
    fn non_digit_port_is_ignored() {
        let mut cfg = IpConfig { backend_port: 8000, ..Default::default() };
        apply_update(&mut cfg, &req(Some("10.0.0.5"), Some("abc"), Some("3001"))).unwrap();
        assert_eq!(cfg.backend_port, 8000);
        assert_eq!(cfg.frontend_port, 3001);
    }

    #[test]
    fn oversized_port_is_ignored() {
        let mut cfg = IpConfig::default();
        apply_update(&mut cfg, &req(None, Some("99999999999999999999999"), None)).unwrap();
        assert_eq!(cfg.backend_port, 8000);
    }

    #[test]
    fn invalid_ip_rejects_everything() {
        let mut cfg = IpConfig::default();
        let err = apply_update(&mut cfg, &req(Some("999.999.999.999"), Some("9000"), None)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidIp(ref ip) if ip == "999.999.999.999"));
        assert_eq!(cfg, IpConfig::default());
    }

    #[test]
    fn empty_ip_keeps_stored_ip() {
        let mut cfg = IpConfig { server_ip: "10.9.9.9".into(), ..Default::default() };
        apply_update(&mut cfg, &req(Some(""), None, None)).unwrap();
        assert_eq!(cfg.server_ip, "10.9.9.9");
    }
}
