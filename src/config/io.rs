use std::fs;
use std::io::ErrorKind;
use tracing::{debug, info, warn};
use crate::models::IpConfig;
use super::path::Workspace;
use super::ConfigError;

/// Where a loaded record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    File,
    /// No config file yet; defaults in use
    Missing,
    /// File existed but didn't parse; defaults in use
    Invalid,
}

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: IpConfig,
    pub source: ConfigSource,
}

/// Load `ip_config.json`. Never fails: a missing or unreadable file yields the
/// default record, and the fallback is reported on stderr.
pub fn load_config(ws: &Workspace) -> LoadedConfig {
    let path = ws.config_path();
    debug!("Loading config from {}", path.display());

    let content = match fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) => {
            let source = if e.kind() == ErrorKind::NotFound {
                ConfigSource::Missing
            } else {
                warn!("Cannot read {}: {e}", path.display());
                ConfigSource::Invalid
            };
            return fallback(&path, source);
        }
    };

    match serde_json::from_str::<IpConfig>(&content) {
        Ok(config) => LoadedConfig { config, source: ConfigSource::File },
        Err(e) => {
            warn!("Invalid JSON in {}: {e}", path.display());
            // Keep what the user had before the next save overwrites it
            let bak = path.with_extension("json.bak");
            if let Err(be) = fs::write(&bak, &content) {
                eprintln!("Failed to write backup {}: {be}", bak.display());
            } else {
                eprintln!("Config was invalid JSON. Backed up to {}.", bak.display());
            }
            fallback(&path, ConfigSource::Invalid)
        }
    }
}

fn fallback(path: &std::path::Path, source: ConfigSource) -> LoadedConfig {
    eprintln!("Error: {} file not found or invalid.", path.display());
    eprintln!("Creating default configuration...");
    LoadedConfig { config: IpConfig::default(), source }
}

/// Write the record with 2-space indentation, replacing the file.
pub fn save_config(ws: &Workspace, config: &IpConfig) -> Result<(), ConfigError> {
    let path = ws.config_path();
    let json = serde_json::to_string_pretty(config)?;

    // Write to a temp and then rename (best-effort cross-platform)
    let tmp = path.with_extension("json.tmp");
    if let Err(e) = fs::write(&tmp, &json) {
        warn!("Failed to write temp file {}: {e}", tmp.display());
        return fs::write(&path, &json).map_err(|source| ConfigError::Io { path, source });
    }
    if let Err(e) = fs::rename(&tmp, &path) {
        warn!("Failed to move temp file into place: {e}");
        let _ = fs::remove_file(&tmp);
        // fallback direct write
        fs::write(&path, &json).map_err(|source| ConfigError::Io { path: path.clone(), source })?;
    }
    info!("Saved config to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let ws = Workspace::new(tmp.path());
        let loaded = load_config(&ws);
        assert_eq!(loaded.source, ConfigSource::Missing);
        assert_eq!(loaded.config, IpConfig::default());
        assert!(!ws.config_path().exists());
    }

    #[test]
    fn corrupt_file_gives_defaults_and_backup() {
        let tmp = tempfile::tempdir().unwrap();
        let ws = Workspace::new(tmp.path());
        fs::write(ws.config_path(), "{ not json").unwrap();

        let loaded = load_config(&ws);
        assert_eq!(loaded.source, ConfigSource::Invalid);
        assert_eq!(loaded.config, IpConfig::default());
        let bak = fs::read_to_string(tmp.path().join("ip_config.json.bak")).unwrap();
        assert_eq!(bak, "{ not json");
    }

    #[test]
    fn reads_existing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let ws = Workspace::new(tmp.path());
        fs::write(ws.config_path(), r#"{"SERVER_IP": "10.0.0.9", "BACKEND_PORT": 9000, "FRONTEND_PORT": 4000}"#).unwrap();

        let loaded = load_config(&ws);
        assert_eq!(loaded.source, ConfigSource::File);
        assert_eq!(loaded.config.server_ip, "10.0.0.9");
        assert_eq!(loaded.config.backend_port, 9000);
        assert_eq!(loaded.config.frontend_port, 4000);
    }

    #[test]
    fn save_writes_two_space_json() {
        let tmp = tempfile::tempdir().unwrap();
        let ws = Workspace::new(tmp.path());
        let cfg = IpConfig { server_ip: "10.0.0.5".into(), ..Default::default() };
        save_config(&ws, &cfg).unwrap();

        let text = fs::read_to_string(ws.config_path()).unwrap();
        assert_eq!(text, "{\n  \"SERVER_IP\": \"10.0.0.5\",\n  \"BACKEND_PORT\": 8000,\n  \"FRONTEND_PORT\": 3000\n}");
        assert!(!tmp.path().join("ip_config.json.tmp").exists());
    }

    #[test]
    fn unknown_keys_round_trip() {
        let tmp = tempfile::tempdir().unwrap();
        let ws = Workspace::new(tmp.path());
        fs::write(ws.config_path(), r#"{"SERVER_IP": "10.0.0.9", "BACKEND_PORT": 9000, "FRONTEND_PORT": 4000, "ENV": "lab"}"#).unwrap();

        let loaded = load_config(&ws);
        save_config(&ws, &loaded.config).unwrap();
        let text = fs::read_to_string(ws.config_path()).unwrap();
        assert!(text.contains("\"ENV\": \"lab\""));
    }
}
