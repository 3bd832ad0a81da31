use prettytable::{row, Table};
use tracing::{debug, info};
use crate::config::{self, ConfigError, ConfigSource, Workspace};
use crate::config::path::CONFIG_FILE;
use crate::models::{IpConfig, UpdateRequest};
use crate::patch::{patch_file, PatchError, PatchOutcome};
use crate::targets::all_targets;

#[derive(thiserror::Error, Debug)]
pub enum UpdateError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Patch(#[from] PatchError),

    #[error("bad target pattern: {0}")]
    Pattern(#[from] regex::Error),
}

#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: &'static str,
    pub outcome: PatchOutcome,
}

#[derive(Debug, Clone)]
pub struct UpdateSummary {
    pub config: IpConfig,
    /// Whether the record was read from disk or rebuilt from defaults
    pub config_source: ConfigSource,
    pub files: Vec<FileReport>,
}

impl UpdateSummary {
    pub fn updated_files(&self) -> usize {
        self.files.iter().filter(|f| f.outcome.changed()).count()
    }
}

/// Load, merge, save, then rewrite every target file.
///
/// Nothing is written when the requested IP is invalid. Per-file problems
/// are recorded in the summary; only an undecodable target aborts the run,
/// and files already written stay written.
pub fn update_ip_configuration(ws: &Workspace, req: &UpdateRequest) -> Result<UpdateSummary, UpdateError> {
    let loaded = config::load_config(ws);
    let config_source = loaded.source;
    let mut cfg = loaded.config;
    config::apply_update(&mut cfg, req)?;
    config::save_config(ws, &cfg)?;

    let backend_url = cfg.backend_url();
    let frontend_url = cfg.frontend_url();
    println!("\nUpdating configurations with:");
    println!("Server IP: {}", cfg.server_ip);
    println!("Backend URL: {backend_url}");
    println!("Frontend URL: {frontend_url}");
    println!("{}", "-".repeat(50));

    let mut files = Vec::new();
    for target in all_targets(&cfg)? {
        let path = ws.resolve(target.path);
        debug!("Patching {} ({} patterns)", path.display(), target.patterns.len());
        let outcome = patch_file(&path, &target.patterns, &target.replacements)?;
        files.push(FileReport { path: target.path, outcome });
    }

    let summary = UpdateSummary { config: cfg, config_source, files };
    info!("Modified {} file(s)", summary.updated_files());
    print_summary(&summary);
    Ok(summary)
}

fn print_summary(summary: &UpdateSummary) {
    let cfg = &summary.config;
    let updated = summary.updated_files();

    println!("\n{}", "=".repeat(50));
    let mut table = Table::new();
    table.add_row(row!["File", "Status", "Detail"]);
    for f in &summary.files {
        let (status, detail) = describe(&f.outcome);
        table.add_row(row![f.path, status, detail]);
    }
    table.printstd();

    println!("Update complete! Modified {updated} file(s).");
    match summary.config_source {
        ConfigSource::File => {}
        ConfigSource::Missing => println!("Created {CONFIG_FILE} with default values."),
        ConfigSource::Invalid => println!("{CONFIG_FILE} was unreadable and has been rebuilt from defaults."),
    }
    if updated > 0 {
        println!("IP configuration updated to: {}", cfg.server_ip);
        println!("Backend URL: {}", cfg.backend_url());
        println!("Frontend URL: {}", cfg.frontend_url());
    } else {
        println!("No files were modified. All configurations were already up to date.");
    }
}

fn describe(outcome: &PatchOutcome) -> (&'static str, String) {
    match outcome {
        PatchOutcome::Missing => ("missing", String::new()),
        PatchOutcome::Unchanged { .. } => ("up to date", String::new()),
        PatchOutcome::Updated { encoding, fields } => ("updated", format!("{} ({})", fields.join(","), encoding.name())),
        PatchOutcome::Failed { reason } => ("failed", reason.clone()),
    }
}
