//! In-place regex rewriting of a single text file.
pub mod encoding;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use encoding_rs::{Encoding, UTF_8};
use regex::{NoExpand, Regex};
use tracing::{debug, error};

pub use encoding::FALLBACK_CHAIN;

/// A logical field name and the regex that locates it in one file.
#[derive(Debug, Clone)]
pub struct NamedPattern {
    pub name: &'static str,
    pub regex: Regex,
}

/// Field name -> literal text that replaces every match of that field's pattern.
pub type Replacements = HashMap<&'static str, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// Target doesn't exist; nothing done
    Missing,
    /// Every pattern already produced the desired text; file not rewritten
    Unchanged { encoding: &'static Encoding },
    Updated { encoding: &'static Encoding, fields: Vec<&'static str> },
    /// Read/write failed; logged and skipped
    Failed { reason: String },
}

impl PatchOutcome {
    pub fn changed(&self) -> bool {
        matches!(self, PatchOutcome::Updated { .. })
    }
}

#[derive(thiserror::Error, Debug)]
pub enum PatchError {
    #[error("cannot decode {} (tried {})", path.display(), tried.join(", "))]
    Undecodable { path: PathBuf, tried: Vec<&'static str> },

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("new content is not representable in {0}")]
    Unencodable(&'static str),
}

/// Rewrite `path` using the default encoding chain.
pub fn patch_file(path: &Path, patterns: &[NamedPattern], replacements: &Replacements) -> Result<PatchOutcome, PatchError> {
    patch_file_with(path, patterns, replacements, FALLBACK_CHAIN)
}

/// Apply every pattern that has a non-empty replacement and write the file
/// back only if the content changed.
///
/// Only an exhausted encoding chain is returned as `Err`; any other failure
/// becomes [`PatchOutcome::Failed`].
pub fn patch_file_with(
    path: &Path,
    patterns: &[NamedPattern],
    replacements: &Replacements,
    chain: &[&'static Encoding],
) -> Result<PatchOutcome, PatchError> {
    if !path.exists() {
        println!("File not found: {}", path.display());
        return Ok(PatchOutcome::Missing);
    }

    println!("\nProcessing: {}", path.display());
    match rewrite(path, patterns, replacements, chain) {
        Ok(outcome) => {
            match &outcome {
                PatchOutcome::Updated { encoding, .. } if *encoding == UTF_8 => {
                    println!("Successfully updated {}", path.display());
                }
                PatchOutcome::Updated { encoding, .. } => {
                    println!("Successfully updated {} (using {} encoding)", path.display(), encoding.name());
                }
                _ => println!("No changes needed in {}", path.display()),
            }
            Ok(outcome)
        }
        Err(e @ PatchError::Undecodable { .. }) => Err(e),
        Err(e) => {
            error!("Error updating {}: {e}", path.display());
            println!("Error updating {}: {e}", path.display());
            Ok(PatchOutcome::Failed { reason: e.to_string() })
        }
    }
}

fn rewrite(
    path: &Path,
    patterns: &[NamedPattern],
    replacements: &Replacements,
    chain: &[&'static Encoding],
) -> Result<PatchOutcome, PatchError> {
    let bytes = fs::read(path)?;
    let decoded = encoding::decode(&bytes, chain).ok_or_else(|| PatchError::Undecodable {
        path: path.to_path_buf(),
        tried: encoding::names(chain),
    })?;
    debug!("Decoded {} as {}", path.display(), decoded.encoding.name());

    let (content, fields) = apply_patterns(&decoded.text, patterns, replacements);
    if content == decoded.text {
        return Ok(PatchOutcome::Unchanged { encoding: decoded.encoding });
    }

    let out = encoding::encode(&content, decoded.encoding)
        .ok_or(PatchError::Unencodable(decoded.encoding.name()))?;
    fs::write(path, out)?;
    Ok(PatchOutcome::Updated { encoding: decoded.encoding, fields })
}

/// Run the substitutions over `text`, returning the new text and the names of
/// the fields that actually changed it.
pub fn apply_patterns(text: &str, patterns: &[NamedPattern], replacements: &Replacements) -> (String, Vec<&'static str>) {
    let mut content = text.to_string();
    let mut fields = Vec::new();
    for p in patterns {
        let Some(replacement) = replacements.get(p.name).filter(|r| !r.is_empty()) else {
            debug!("No replacement for {}; skipped", p.name);
            continue;
        };
        let next = p.regex.replace_all(&content, NoExpand(replacement.as_str()));
        if next != content {
            println!("  - Updated {} to {}", p.name, replacement);
            content = next.into_owned();
            fields.push(p.name);
        }
    }
    (content, fields)
}
