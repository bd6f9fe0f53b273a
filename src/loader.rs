use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{bail, Context, Result};
use regex::Regex;
use tracing::{debug, info};

static LEADING_DIGIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d").unwrap());

/// Which saved pages in the input directory to process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum FileFilter {
    /// Every `.html` or `.txt` file
    #[default]
    All,
    /// `.html` files whose name starts with a digit
    Number,
    /// `.html` files whose name starts with "Progress"
    Progress,
}

impl FileFilter {
    pub fn accepts(self, name: &str) -> bool {
        match self {
            Self::All => name.ends_with(".html") || name.ends_with(".txt"),
            Self::Number => name.ends_with(".html") && LEADING_DIGIT_RE.is_match(name),
            Self::Progress => name.ends_with(".html") && name.starts_with("Progress"),
        }
    }
}

/// A saved page, read into memory.
#[derive(Debug, Clone)]
pub struct Document {
    /// File name, used in diagnostics.
    pub name: String,
    pub html: String,
}

/// List input files in `dir` (not recursive), sorted by name so runs are repeatable.
pub fn discover(dir: &Path, filter: FileFilter) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        bail!("{} is not a valid directory", dir.display());
    }

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("Failed to list {}", dir.display()))? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            debug!("Skipping non-UTF-8 file name {:?}", name);
            continue;
        };
        if filter.accepts(name) {
            paths.push(entry.path());
        }
    }
    paths.sort();

    info!("Found {} input files in {}", paths.len(), dir.display());
    Ok(paths)
}

pub fn load_one(path: &Path) -> Result<Document> {
    let html = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    debug!(file = %name, bytes = html.len(), "Loaded document");
    Ok(Document { name, html })
}

pub fn load(paths: &[PathBuf]) -> Result<Vec<Document>> {
    paths.iter().map(|p| load_one(p)).collect()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters() {
        assert!(FileFilter::All.accepts("html01.txt"));
        assert!(FileFilter::All.accepts("Progress - LeetCode.html"));
        assert!(!FileFilter::All.accepts("notes.md"));

        assert!(FileFilter::Number.accepts("01 progress.html"));
        assert!(!FileFilter::Number.accepts("01 progress.txt"));
        assert!(!FileFilter::Number.accepts("page1.html"));

        assert!(FileFilter::Progress.accepts("Progress (2).html"));
        assert!(!FileFilter::Progress.accepts("progress.html"));
        assert!(!FileFilter::Progress.accepts("Progress.txt"));
    }

    #[test]
    fn discover_sorts_and_filters() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.html", "a.txt", "c.csv", "02.html", "Progress 1.html"] {
            fs::write(dir.path().join(name), "<html></html>").unwrap();
        }
        fs::create_dir(dir.path().join("sub.html")).unwrap();

        let names = |filter| -> Vec<String> {
            discover(dir.path(), filter)
                .unwrap()
                .iter()
                .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
                .collect()
        };

        assert_eq!(names(FileFilter::All), vec!["02.html", "Progress 1.html", "a.txt", "b.html"]);
        assert_eq!(names(FileFilter::Number), vec!["02.html"]);
        assert_eq!(names(FileFilter::Progress), vec!["Progress 1.html"]);
    }

    #[test]
    fn missing_dir_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = discover(&dir.path().join("nope"), FileFilter::All).unwrap_err();
        assert!(err.to_string().contains("is not a valid directory"));
    }

    #[test]
    fn empty_dir_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(discover(dir.path(), FileFilter::All).unwrap().is_empty());
    }

    #[test]
    fn load_keeps_order_and_names() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.html");
        let b = dir.path().join("b.html");
        fs::write(&a, "first").unwrap();
        fs::write(&b, "second").unwrap();

        let docs = load(&[b.clone(), a.clone()]).unwrap();
        assert_eq!(docs[0].name, "b.html");
        assert_eq!(docs[0].html, "second");
        assert_eq!(docs[1].name, "a.html");

        let err = load(&[dir.path().join("missing.html")]).unwrap_err();
        assert!(err.to_string().contains("missing.html"));
    }
}
