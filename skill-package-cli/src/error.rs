//! Error types for skill packaging.
//!
//! Every failure the packager can hit ends up here so the binary can report
//! it with a single `[ERROR]` line and exit code.

use std::path::PathBuf;

use thiserror::Error;

use crate::frontmatter::FrontmatterError;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while validating or packaging a skill directory.
#[derive(Error, Debug)]
pub enum Error {
    /// The skill directory does not exist.
    #[error("Skill folder not found: {}", .0.display())]
    SkillNotFound(PathBuf),

    /// The skill directory has no SKILL.md at its root.
    #[error("SKILL.md not found in {}", .0.display())]
    SkillMdNotFound(PathBuf),

    /// SKILL.md frontmatter failed validation.
    #[error("Validation failed: {0}")]
    Validation(#[from] FrontmatterError),

    /// The archive file could not be created at its target path.
    #[error("{source}: {}", path.display())]
    ArchiveCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// File system error while reading inputs or writing the archive.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// ZIP encoder error.
    #[error("{0}")]
    Zip(#[from] zip::result::ZipError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_not_found_message() {
        let err = Error::SkillNotFound(PathBuf::from("/tmp/missing"));
        assert_eq!(err.to_string(), "Skill folder not found: /tmp/missing");
    }

    #[test]
    fn test_skill_md_not_found_message() {
        let err = Error::SkillMdNotFound(PathBuf::from("/tmp/demo"));
        assert_eq!(err.to_string(), "SKILL.md not found in /tmp/demo");
    }

    #[test]
    fn test_validation_message_wraps_reason() {
        let err: Error = FrontmatterError::MissingName.into();
        assert_eq!(
            err.to_string(),
            "Validation failed: Missing 'name' in frontmatter"
        );
    }

    #[test]
    fn test_archive_create_message_names_path() {
        let err = Error::ArchiveCreate {
            path: PathBuf::from("/tmp/out/demo.skill"),
            source: std::io::Error::new(std::io::ErrorKind::Other, "Is a directory"),
        };
        assert_eq!(err.to_string(), "Is a directory: /tmp/out/demo.skill");
    }

    #[test]
    fn test_io_message_is_underlying() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::Other, "disk full").into();
        assert_eq!(err.to_string(), "disk full");
    }
}
