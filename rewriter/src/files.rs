use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{RewriteError, Warning};
use crate::formatter::Formatter;
use crate::pipeline::rewrite_content;

/// Suffix of the files picked up when walking a directory.
pub const DEFAULT_EXTENSION: &str = "hurl";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Write rewritten content back to the file.
    #[default]
    Write,
    /// Compute rewrites but leave files untouched.
    Check,
}

#[derive(Debug, Clone)]
pub struct Options {
    /// Extension (without the dot) selecting files in directory mode.
    pub extension: String,
    pub mode: Mode,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            extension: DEFAULT_EXTENSION.to_string(),
            mode: Mode::Write,
        }
    }
}

#[derive(Debug)]
pub enum FileOutcome {
    Unchanged,
    /// Content differs from the file. Written back unless in check mode.
    Changed,
    Failed(RewriteError),
}

#[derive(Debug)]
pub struct FileResult {
    pub path: PathBuf,
    /// Original content, kept for rendering diagnostics. Empty if unreadable.
    pub source: String,
    pub blocks: usize,
    pub warnings: Vec<Warning>,
    pub outcome: FileOutcome,
}

impl FileResult {
    fn failed(path: &Path, source: String, error: RewriteError) -> Self {
        FileResult {
            path: path.to_path_buf(),
            source,
            blocks: 0,
            warnings: Vec::new(),
            outcome: FileOutcome::Failed(error),
        }
    }
}

/// Counts over a whole run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub files: usize,
    pub changed: usize,
    pub failed: usize,
    pub blocks: usize,
    pub warnings: usize,
}

impl Summary {
    pub fn from_results(results: &[FileResult]) -> Self {
        let mut summary = Summary {
            files: results.len(),
            ..Summary::default()
        };
        for result in results {
            summary.blocks += result.blocks;
            summary.warnings += result.warnings.len();
            match result.outcome {
                FileOutcome::Unchanged => {}
                FileOutcome::Changed => summary.changed += 1,
                FileOutcome::Failed(_) => summary.failed += 1,
            }
        }
        summary
    }
}

/// Files under `root` whose name ends in `.{extension}`, sorted by path.
/// Symlinks to files are included; symlinked directories are not descended.
pub fn discover_files(root: &Path, extension: &str) -> Vec<PathBuf> {
    let suffix = format!(".{}", extension);
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!(error = %err, "skipping unreadable entry");
                None
            }
        })
        .filter(|entry| entry.path().is_file())
        .filter(|entry| entry.file_name().to_string_lossy().ends_with(&suffix))
        .map(|entry| entry.into_path())
        .collect()
}

/// Rewrite one file. The new content is computed in full before anything is
/// written, so a failing file is left as it was.
pub fn process_file(path: &Path, formatter: &dyn Formatter, mode: Mode) -> FileResult {
    let source = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(source) => {
            let error = RewriteError::Read {
                path: path.to_path_buf(),
                source,
            };
            return FileResult::failed(path, String::new(), error);
        }
    };

    let rewrite = match rewrite_content(&source, formatter) {
        Ok(r) => r,
        Err(err) => return FileResult::failed(path, source, err.into()),
    };
    debug!(path = %path.display(), blocks = rewrite.blocks, "rewrote file");

    let outcome = if rewrite.content == source {
        FileOutcome::Unchanged
    } else if mode == Mode::Check {
        FileOutcome::Changed
    } else {
        match write_in_place(path, &rewrite.content) {
            Ok(()) => FileOutcome::Changed,
            Err(source) => FileOutcome::Failed(RewriteError::Write {
                path: path.to_path_buf(),
                source,
            }),
        }
    };

    FileResult {
        path: path.to_path_buf(),
        source,
        blocks: rewrite.blocks,
        warnings: rewrite.warnings,
        outcome,
    }
}

/// Replace the content of `path` through a sibling temporary file renamed over
/// the target, so a crash never leaves it truncated. Symlinks are resolved and
/// the target keeps its permissions.
fn write_in_place(path: &Path, content: &str) -> io::Result<()> {
    let target = fs::canonicalize(path)?;
    let dir = target.parent().unwrap_or_else(|| Path::new("."));
    let permissions = fs::metadata(&target)?.permissions();

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(content.as_bytes())?;
    file.flush()?;
    fs::set_permissions(file.path(), permissions)?;
    file.persist(&target).map_err(|err| err.error)?;
    Ok(())
}

/// Process a directory recursively, or a single file whatever its extension.
pub fn process_path(path: &Path, formatter: &dyn Formatter, options: &Options) -> Vec<FileResult> {
    if path.is_dir() {
        discover_files(path, &options.extension)
            .iter()
            .map(|file| process_file(file, formatter, options.mode))
            .collect()
    } else {
        vec![process_file(path, formatter, options.mode)]
    }
}
