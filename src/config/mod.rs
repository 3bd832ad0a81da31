//! Config layer: fixed paths, JSON I/O for `ip_config.json`, and merging of
//! command-line values into the stored record.
pub mod path;
pub mod io;
pub mod merge;

pub use path::Workspace;
pub use io::{load_config, save_config, ConfigSource, LoadedConfig};
pub use merge::apply_update;

use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("'{0}' is not a valid IP address")]
    InvalidIp(String),

    #[error("cannot write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] serde_json::Error),
}
