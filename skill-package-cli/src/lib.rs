//! Skill Package - Validate and package skill directories into `.skill` archives.
//!
//! A skill directory holds a `SKILL.md` whose YAML frontmatter names and
//! describes the skill, plus any supporting files. Packaging checks the
//! frontmatter and zips the whole directory so it can be distributed as a
//! single file.

pub mod cli;
pub mod error;
pub mod frontmatter;
pub mod package;

pub use cli::Cli;
pub use error::{Error, Result};
pub use frontmatter::{validate_frontmatter, validate_skill_md, FrontmatterError};
pub use package::{archive_path_for, package_skill};
