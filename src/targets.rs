//! The fixed set of files rewritten on every run, each with its own
//! pattern/replacement table.
use regex::Regex;
use crate::config::path::{BACKEND_ENV, BACKEND_SETTINGS, FRONTEND_CONSTANTS};
use crate::models::IpConfig;
use crate::patch::{NamedPattern, Replacements};

/// Host part of a generated URL: a bracketed IPv6 literal or anything up to the port colon.
const HOST: &str = r"(?:\[[0-9A-Fa-f:.]+\]|[^:]+)";

/// A bare address in a comment. The IPv6 branch needs two or more colon
/// groups, so an IPv4 address followed by `:port` or letters only matches
/// its dotted part.
const BARE_IP: &str = r"(?:[0-9A-Fa-f]{0,4}(?::[0-9A-Fa-f]{0,4}){2,7}(?:\.[0-9]+){0,3}|[0-9.]+)";

/// Hosted backend kept first in the frontend's fallback list.
pub const PRODUCTION_BASE_URL: &str = "https://honest-perfection-production-ccc8.up.railway.app";

/// Addresses that follow the server IP in the frontend's probe list.
pub const COMMON_SERVER_IPS: [&str; 3] = ["192.168.10.2", "192.168.10.4", "10.0.2.2"];

#[derive(Debug, Clone)]
pub struct TargetTable {
    /// Relative to the workspace root
    pub path: &'static str,
    pub patterns: Vec<NamedPattern>,
    pub replacements: Replacements,
}

/// Every target in the order they are patched.
pub fn all_targets(cfg: &IpConfig) -> Result<Vec<TargetTable>, regex::Error> {
    Ok(vec![frontend_constants(cfg)?, backend_env(cfg)?, backend_settings(cfg)?])
}

fn pattern(name: &'static str, re: &str) -> Result<NamedPattern, regex::Error> {
    Ok(NamedPattern { name, regex: Regex::new(&re.replace("{HOST}", HOST).replace("{BARE_IP}", BARE_IP))? })
}

/// Flutter `app_constants.dart`.
pub fn frontend_constants(cfg: &IpConfig) -> Result<TargetTable, regex::Error> {
    let ip = &cfg.server_ip;
    let backend_url = cfg.backend_url();

    let patterns = vec![
        pattern("baseUrl", r#"static const String baseUrl = ['"]http://{HOST}:[0-9]+['"];"#)?,
        pattern("serverIp", r"// Your IP address is {BARE_IP}")?,
        pattern("fallbackUrl", r"'http://{HOST}:[0-9]+', // Current IP")?,
        pattern(
            "commonServerIps",
            concat!(
                r"static const List<String> commonServerIps = \[\r?\n",
                r"    '[^']+',\r?\n",
                r"    '[^']+',\r?\n",
                r"    '[^']+',\r?\n",
                r"    '[^']+',\r?\n",
                r"  \];",
            ),
        )?,
        pattern(
            "fallbackBaseUrls",
            concat!(
                r"static const List<String> fallbackBaseUrls = \[\r?\n",
                r#"    "[^"]+",\r?\n"#,
                r"    '[^']+',\r?\n",
                r"  \];",
            ),
        )?,
    ];

    let mut ips = format!("static const List<String> commonServerIps = [\n    '{ip}',\n");
    for other in COMMON_SERVER_IPS {
        ips.push_str(&format!("    '{other}',\n"));
    }
    ips.push_str("  ];");

    let replacements = Replacements::from([
        ("baseUrl", format!(r#"static const String baseUrl = "{backend_url}";"#)),
        ("serverIp", format!("// Your IP address is {ip}")),
        ("fallbackUrl", format!("'{backend_url}', // Current IP")),
        ("commonServerIps", ips),
        (
            "fallbackBaseUrls",
            format!("static const List<String> fallbackBaseUrls = [\n    \"{PRODUCTION_BASE_URL}\",\n    '{backend_url}',\n  ];"),
        ),
    ]);

    Ok(TargetTable { path: FRONTEND_CONSTANTS, patterns, replacements })
}

/// Backend `.env`.
pub fn backend_env(cfg: &IpConfig) -> Result<TargetTable, regex::Error> {
    let patterns = vec![
        pattern("baseUrl", r"BASE_URL=http://{HOST}:[0-9]+")?,
        pattern("frontendUrl", r"FRONTEND_URL=http://{HOST}:[0-9]+")?,
    ];
    let replacements = Replacements::from([
        ("baseUrl", format!("BASE_URL={}", cfg.backend_url())),
        ("frontendUrl", format!("FRONTEND_URL={}", cfg.frontend_url())),
    ]);
    Ok(TargetTable { path: BACKEND_ENV, patterns, replacements })
}

/// Backend settings module (`app/core/config.py`).
pub fn backend_settings(cfg: &IpConfig) -> Result<TargetTable, regex::Error> {
    let backend_url = cfg.backend_url();
    let frontend_url = cfg.frontend_url();

    let patterns = vec![
        pattern("baseUrl", r#"BASE_URL: str = os\.getenv\("BASE_URL", "http://{HOST}:[0-9]+"\)"#)?,
        pattern("frontendUrl", r#"FRONTEND_URL: str = os\.getenv\("FRONTEND_URL", "http://{HOST}:[0-9]+"\)"#)?,
        pattern("corsUrl", r#""http://{HOST}:[0-9]+",  # Frontend on same network"#)?,
    ];
    let replacements = Replacements::from([
        ("baseUrl", format!(r#"BASE_URL: str = os.getenv("BASE_URL", "{backend_url}")"#)),
        ("frontendUrl", format!(r#"FRONTEND_URL: str = os.getenv("FRONTEND_URL", "{frontend_url}")"#)),
        ("corsUrl", format!(r#""{frontend_url}",  # Frontend on same network"#)),
    ]);
    Ok(TargetTable { path: BACKEND_SETTINGS, patterns, replacements })
}
