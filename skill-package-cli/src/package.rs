//! Skill Package - Validate a skill directory and write it to a `.skill` archive.
//!
//! The archive is a plain Deflate ZIP. Entry names are relative to the skill
//! directory's parent, so every entry starts with the directory name:
//!
//! ```text
//! demo/SKILL.md
//! demo/assets/logo.png
//! ```
//!
//! Directories are walked depth-first with siblings sorted by file name, which
//! keeps the entry order stable between runs.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::{Error, Result};
use crate::frontmatter;

/// Metadata file every skill directory must carry at its root.
pub const SKILL_MD: &str = "SKILL.md";

/// File extension of packaged skills.
pub const SKILL_EXTENSION: &str = "skill";

/// Validate `skill_path` and package it into `<output_dir>/<name>.skill`.
///
/// Progress lines go to stdout. The output directory is created if needed
/// and an existing archive of the same name is overwritten. On failure
/// nothing is rolled back: a partially written archive stays on disk.
pub fn package_skill(skill_path: &Path, output_dir: &Path) -> Result<PathBuf> {
    let skill_dir = resolve_skill_dir(skill_path)?;
    debug!("Resolved skill directory: {}", skill_dir.display());

    let skill_md = skill_dir.join(SKILL_MD);
    if !skill_md.exists() {
        return Err(Error::SkillMdNotFound(skill_dir));
    }

    println!("[INFO] Validating skill...");
    let message = frontmatter::validate_skill_md(&skill_md)?;
    println!("[OK] {}", message);

    std::fs::create_dir_all(output_dir)?;
    let output_dir = output_dir.canonicalize()?;
    let archive_path = archive_path_for(&skill_dir, &output_dir);
    debug!("Writing archive: {}", archive_path.display());

    let count = write_archive(&skill_dir, &archive_path)?;
    debug!("Archived {} file(s)", count);

    println!("\n[SUCCESS] Packaged to: {}", archive_path.display());
    Ok(archive_path)
}

/// Compute `<output_dir>/<skill dir name>.skill`.
pub fn archive_path_for(skill_dir: &Path, output_dir: &Path) -> PathBuf {
    let name = skill_dir
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    output_dir.join(format!("{}.{}", name, SKILL_EXTENSION))
}

/// Canonicalize the skill path, reporting a missing directory by its absolute path.
fn resolve_skill_dir(skill_path: &Path) -> Result<PathBuf> {
    match skill_path.canonicalize() {
        Ok(dir) => Ok(dir),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            let shown =
                std::path::absolute(skill_path).unwrap_or_else(|_| skill_path.to_path_buf());
            Err(Error::SkillNotFound(shown))
        }
        Err(e) => Err(e.into()),
    }
}

/// Archive name for `path`: its path relative to `base`, `/`-separated.
fn entry_name(base: &Path, path: &Path) -> Result<String> {
    let relative = path
        .strip_prefix(base)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    Ok(relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/"))
}

/// Write every regular file under `skill_dir` into a new ZIP at `archive_path`.
///
/// Returns the number of entries written. The file handle is closed on every
/// return path; `finish` only runs on success.
fn write_archive(skill_dir: &Path, archive_path: &Path) -> Result<usize> {
    let base = skill_dir.parent().unwrap_or(skill_dir);
    let file = File::create(archive_path).map_err(|source| Error::ArchiveCreate {
        path: archive_path.to_path_buf(),
        source,
    })?;
    let mut zip = ZipWriter::new(file);

    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut count = 0;

    for entry in WalkDir::new(skill_dir).sort_by_file_name() {
        let entry = entry.map_err(io::Error::from)?;
        let path = entry.path();

        // Follows symlinks, so a link to a file is archived with the target's bytes.
        if !path.is_file() || path == archive_path {
            continue;
        }

        let name = entry_name(base, path)?;
        let metadata = std::fs::metadata(path)?;
        let mut file_options = options;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file_options = file_options.unix_permissions(metadata.permissions().mode());
        }
        debug!("Adding {} ({} bytes)", name, metadata.len());

        zip.start_file(name.as_str(), file_options)?;
        let mut source = File::open(path)?;
        io::copy(&mut source, &mut zip)?;
        println!("  Added: {}", name);
        count += 1;
    }

    zip.finish()?;
    Ok(count)
}
