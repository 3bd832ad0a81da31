use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::net::IpAddr;

pub const DEFAULT_SERVER_IP: &str = "192.168.10.2";
pub const DEFAULT_BACKEND_PORT: u64 = 8000;
pub const DEFAULT_FRONTEND_PORT: u64 = 3000;

/// The record stored in `ip_config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IpConfig {
    /// Address every generated URL is built from
    #[serde(rename = "SERVER_IP", default = "default_server_ip")]
    pub server_ip: String,
    #[serde(rename = "BACKEND_PORT", default = "default_backend_port")]
    pub backend_port: u64,
    #[serde(rename = "FRONTEND_PORT", default = "default_frontend_port")]
    pub frontend_port: u64,
    /// Keys we don't own, written back as they were read
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for IpConfig {
    fn default() -> Self {
        Self {
            server_ip: default_server_ip(),
            backend_port: DEFAULT_BACKEND_PORT,
            frontend_port: DEFAULT_FRONTEND_PORT,
            extra: Map::new(),
        }
    }
}

impl IpConfig {
    /// `http://{SERVER_IP}:{BACKEND_PORT}`
    pub fn backend_url(&self) -> String {
        http_url(&self.server_ip, self.backend_port)
    }

    /// `http://{SERVER_IP}:{FRONTEND_PORT}`
    pub fn frontend_url(&self) -> String {
        http_url(&self.server_ip, self.frontend_port)
    }
}

/// Optional new values coming from the command line. Ports stay raw strings
/// until merge time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateRequest {
    pub ip: Option<String>,
    pub backend_port: Option<String>,
    pub frontend_port: Option<String>,
}

impl UpdateRequest {
    pub fn with_ip(ip: impl Into<String>) -> Self {
        Self { ip: Some(ip.into()), ..Default::default() }
    }
}

fn default_server_ip() -> String { DEFAULT_SERVER_IP.to_string() }
fn default_backend_port() -> u64 { DEFAULT_BACKEND_PORT }
fn default_frontend_port() -> u64 { DEFAULT_FRONTEND_PORT }

/// IPv6 hosts need brackets inside a URL.
pub fn http_url(host: &str, port: u64) -> String {
    match host.parse::<IpAddr>() {
        Ok(IpAddr::V6(_)) => format!("http://[{host}]:{port}"),
        _ => format!("http://{host}:{port}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_follow_config() {
        let cfg = IpConfig { server_ip: "10.0.0.5".into(), backend_port: 8001, frontend_port: 3001, ..Default::default() };
        assert_eq!(cfg.backend_url(), "http://10.0.0.5:8001");
        assert_eq!(cfg.frontend_url(), "http://10.0.0.5:3001");
    }

    #[test]
    fn ipv6_urls_are_bracketed() {
        assert_eq!(http_url("fe80::1", 8000), "http://[fe80::1]:8000");
    }

    #[test]
    fn json_uses_upper_case_keys() {
        let json = serde_json::to_string(&IpConfig::default()).unwrap();
        assert_eq!(json, r#"{"SERVER_IP":"192.168.10.2","BACKEND_PORT":8000,"FRONTEND_PORT":3000}"#);
    }

    #[test]
    fn missing_keys_take_defaults_and_unknown_keys_survive() {
        let cfg: IpConfig = serde_json::from_str(r#"{"SERVER_IP":"10.1.1.1","NOTE":"lab"}"#).unwrap();
        assert_eq!(cfg.server_ip, "10.1.1.1");
        assert_eq!(cfg.backend_port, DEFAULT_BACKEND_PORT);
        assert_eq!(cfg.extra.get("NOTE"), Some(&Value::String("lab".into())));
    }
}
