//! skill-package CLI - Validate a skill folder and package it as a `.skill` file.
//!
//! Usage: `skill-package <skill-folder> <output-dir>`
//!
//! Environment variables:
//! - RUST_LOG: Diagnostic log filter (ignored when --debug is set)
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error

use std::path::Path;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use skill_package::cli::USAGE;
use skill_package::{package_skill, Cli};

/// Package the skill and map the outcome to an exit code.
fn run_package(skill_folder: &Path, output_dir: &Path) -> i32 {
    match package_skill(skill_folder, output_dir) {
        Ok(_) => 0,
        Err(e) => {
            println!("[ERROR] {}", e);
            1
        }
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            std::process::exit(0);
        }
        Err(e) => {
            println!("{}", USAGE);
            let _ = e.print();
            std::process::exit(1);
        }
    };

    // Initialize tracing with appropriate level
    let filter = if cli.debug {
        EnvFilter::new("skill_package=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = run_package(&cli.skill_folder, &cli.output_dir);

    std::process::exit(exit_code);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_package_missing_folder_exits_1() {
        let temp = tempfile::tempdir().unwrap();
        let code = run_package(&temp.path().join("missing"), &temp.path().join("out"));
        assert_eq!(code, 1);
        assert!(!temp.path().join("out").exists());
    }

    #[test]
    fn test_run_package_valid_skill_exits_0() {
        let temp = tempfile::tempdir().unwrap();
        let skill = temp.path().join("demo");
        std::fs::create_dir_all(&skill).unwrap();
        std::fs::write(
            skill.join("SKILL.md"),
            "---\nname: demo\ndescription: test\n---\nBody text",
        )
        .unwrap();

        let code = run_package(&skill, &temp.path().join("out"));

        assert_eq!(code, 0);
        assert!(temp.path().join("out").join("demo.skill").is_file());
    }
}
