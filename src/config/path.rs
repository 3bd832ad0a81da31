use std::io;
use std::path::PathBuf;

pub const CONFIG_FILE: &str = "ip_config.json";

pub const FRONTEND_CONSTANTS: &str = "frontend_campuscrush/lib/core/constants/app_constants.dart";
pub const BACKEND_ENV: &str = "backend_campuscrush/.env";
pub const BACKEND_SETTINGS: &str = "backend_campuscrush/app/core/config.py";

/// Directory every fixed path is resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The invocation directory.
    pub fn current() -> io::Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    pub fn resolve(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }
}
