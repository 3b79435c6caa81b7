//! SKILL.md frontmatter validation.
//!
//! This is a shallow structural check, not a YAML parse: the file must open
//! with a `---` delimited block, and that block must contain the substrings
//! `name:` and `description:` somewhere.

use std::borrow::Cow;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::error::Result;

/// Message reported when a SKILL.md passes validation.
pub const VALIDATION_PASSED: &str = "Validation passed";

/// Opening `---`, newline, shortest block, newline, closing `---`.
static FRONTMATTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\A---\n(.*?)\n---").expect("frontmatter pattern is valid"));

/// Reasons a SKILL.md frontmatter block is rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontmatterError {
    /// Content does not start with `---`.
    #[error("Missing YAML frontmatter")]
    MissingFrontmatter,

    /// No closing `---` delimiter after the opening one.
    #[error("Invalid frontmatter format")]
    InvalidFormat,

    /// The block has no `name:`.
    #[error("Missing 'name' in frontmatter")]
    MissingName,

    /// The block has no `description:`.
    #[error("Missing 'description' in frontmatter")]
    MissingDescription,
}

/// Return the text between the opening and closing `---` delimiters.
///
/// Returns `None` when the content does not start with a delimited block.
pub fn extract_frontmatter(content: &str) -> Option<&str> {
    FRONTMATTER_RE
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Check SKILL.md content for a frontmatter block carrying `name:` and
/// `description:`.
pub fn validate_frontmatter(content: &str) -> std::result::Result<(), FrontmatterError> {
    if !content.starts_with("---") {
        return Err(FrontmatterError::MissingFrontmatter);
    }

    let block = extract_frontmatter(content).ok_or(FrontmatterError::InvalidFormat)?;

    if !block.contains("name:") {
        return Err(FrontmatterError::MissingName);
    }
    if !block.contains("description:") {
        return Err(FrontmatterError::MissingDescription);
    }

    Ok(())
}

/// Read a SKILL.md file and validate its frontmatter.
///
/// `\r\n` and lone `\r` line endings are read as `\n`. Read and UTF-8
/// decoding failures surface as [`crate::Error::Io`]; a rejected frontmatter
/// surfaces as [`crate::Error::Validation`].
pub fn validate_skill_md(path: &Path) -> Result<&'static str> {
    let content = std::fs::read_to_string(path)?;
    validate_frontmatter(&normalize_line_endings(&content))?;
    Ok(VALIDATION_PASSED)
}

fn normalize_line_endings(content: &str) -> Cow<'_, str> {
    if content.contains('\r') {
        Cow::Owned(content.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(content)
    }
}
