pub mod detect;
pub mod update;

pub use detect::{detect_local_ip, DetectError};
pub use update::{update_ip_configuration, UpdateError, UpdateSummary};
