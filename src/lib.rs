//! Library root for update-ip
pub mod models;
pub mod util;

pub mod config;
pub mod patch;
pub mod targets;
pub mod commands;

// Convenience re-exports
pub use commands::{detect, update};
pub use config::{io as cfg_io, path as cfg_path, Workspace};
