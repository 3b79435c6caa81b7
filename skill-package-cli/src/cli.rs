//! CLI definition for the skill-package command-line interface.
//!
//! This module is self-contained -- it only depends on `clap` and `std`.

use std::path::PathBuf;

use clap::Parser;

/// Usage line printed when the arguments cannot be parsed.
pub const USAGE: &str = "Usage: skill-package <skill-folder> <output-dir>";

/// Skill Package - Validate a skill folder and package it as a .skill file.
///
/// The skill folder must contain a SKILL.md whose YAML frontmatter includes
/// `name:` and `description:`. The archive is written to
/// <output-dir>/<folder-name>.skill, replacing any previous archive.
#[derive(Parser, Debug)]
#[command(name = "skill-package")]
#[command(version)]
#[command(about = "Validate a skill folder and package it as a .skill file")]
#[command(
    long_about = "Validates the SKILL.md frontmatter of a skill folder and packages every \
    file in the folder into <output-dir>/<folder-name>.skill (a Deflate ZIP).\n\n\
    Exit codes:\n  \
    0  Packaging succeeded\n  \
    1  Bad arguments, missing folder or SKILL.md, validation failure, or I/O error\n\n\
    Environment variables:\n  \
    RUST_LOG  Diagnostic log filter (ignored when --debug is set)"
)]
pub struct Cli {
    /// Enable debug output to stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Path to the skill folder containing SKILL.md
    pub skill_folder: PathBuf,

    /// Directory to write the .skill archive into (created if missing)
    pub output_dir: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_positionals() {
        let cli = Cli::parse_from(["skill-package", "my-skill", "dist"]);
        assert_eq!(cli.skill_folder, PathBuf::from("my-skill"));
        assert_eq!(cli.output_dir, PathBuf::from("dist"));
        assert!(!cli.debug);
    }

    #[test]
    fn test_cli_parsing_debug() {
        let cli = Cli::parse_from(["skill-package", "--debug", "my-skill", "dist"]);
        assert!(cli.debug);
    }

    #[test]
    fn test_cli_parsing_debug_short_after_positionals() {
        let cli = Cli::parse_from(["skill-package", "my-skill", "dist", "-d"]);
        assert!(cli.debug);
    }

    #[test]
    fn test_cli_parsing_no_args_fails() {
        assert!(Cli::try_parse_from(["skill-package"]).is_err());
    }

    #[test]
    fn test_cli_parsing_one_arg_fails() {
        assert!(Cli::try_parse_from(["skill-package", "my-skill"]).is_err());
    }

    #[test]
    fn test_cli_parsing_extra_arg_fails() {
        assert!(Cli::try_parse_from(["skill-package", "a", "b", "c"]).is_err());
    }
}
