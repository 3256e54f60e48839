//! Per-day content loading.
//!
//! Content lives in one file per day, `day{n}.txt`, under a content root.
//! A missing file is expected and reported as `Ok(None)`; everything else
//! that stops a file from being used is an explicit [`ContentError`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

/// Why a day's content could not be used.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("invalid day number: {day} (must be between 1 and {max})")]
    InvalidDay { day: u32, max: u32 },

    #[error("{} resolves outside the content directory", .path.display())]
    OutsideRoot { path: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Where a day's content came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSource {
    /// Verbatim contents of the day's file.
    File,
    /// No file for this day; placeholder text.
    Placeholder,
    /// A file exists but could not be used; placeholder text.
    Fallback,
}

/// Lookup from day number to text.
pub trait ContentLoader: Send + Sync {
    /// Load the text for `day`. `Ok(None)` means there is no content for it.
    fn load(&self, day: u32) -> Result<Option<String>, ContentError>;
}

/// Content read from `day{n}.txt` files under a root directory.
#[derive(Debug, Clone)]
pub struct ContentDir {
    /// Canonical root, or `None` when the directory does not exist.
    root: Option<PathBuf>,
    max_day: u32,
}

impl ContentDir {
    /// Open a content root serving days `1..=max_day`.
    ///
    /// A root that cannot be resolved is not fatal: every day then reads as absent.
    pub fn open(root: impl AsRef<Path>, max_day: u32) -> Self {
        let root = root.as_ref();
        match fs::canonicalize(root) {
            Ok(canonical) => Self {
                root: Some(canonical),
                max_day,
            },
            Err(e) => {
                warn!(
                    "Content directory {} unavailable, all days use placeholder content: {}",
                    root.display(),
                    e
                );
                Self {
                    root: None,
                    max_day,
                }
            }
        }
    }

    /// Canonical content root, if it exists.
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// File name holding the content for `day`.
    pub fn file_name(day: u32) -> String {
        format!("day{}.txt", day)
    }
}

impl ContentLoader for ContentDir {
    fn load(&self, day: u32) -> Result<Option<String>, ContentError> {
        if day < 1 || day > self.max_day {
            return Err(ContentError::InvalidDay {
                day,
                max: self.max_day,
            });
        }

        let Some(root) = &self.root else {
            return Ok(None);
        };

        let path = root.join(Self::file_name(day));
        let resolved = match fs::canonicalize(&path) {
            Ok(resolved) => resolved,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(ContentError::Unreadable { path, source }),
        };

        if !resolved.starts_with(root) {
            return Err(ContentError::OutsideRoot { path: resolved });
        }

        match fs::read_to_string(&resolved) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ContentError::Unreadable {
                path: resolved,
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_existing_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("day1.txt"), "Test content for day 1").unwrap();

        let content = ContentDir::open(dir.path(), 12);

        assert_eq!(
            content.load(1).unwrap(),
            Some("Test content for day 1".to_string())
        );
    }

    #[test]
    fn test_load_preserves_contents_verbatim() {
        let dir = TempDir::new().unwrap();
        let text = "  line one\n<b>line two</b>\n\n";
        fs::write(dir.path().join("day3.txt"), text).unwrap();

        let content = ContentDir::open(dir.path(), 12);

        assert_eq!(content.load(3).unwrap().as_deref(), Some(text));
    }

    #[test]
    fn test_missing_file_is_absent() {
        let dir = TempDir::new().unwrap();
        let content = ContentDir::open(dir.path(), 12);

        assert_eq!(content.load(2).unwrap(), None);
    }

    #[test]
    fn test_missing_root_is_absent() {
        let dir = TempDir::new().unwrap();
        let content = ContentDir::open(dir.path().join("does-not-exist"), 12);

        assert!(content.root().is_none());
        assert_eq!(content.load(1).unwrap(), None);
    }

    #[test]
    fn test_rejects_out_of_range_days() {
        let dir = TempDir::new().unwrap();
        let content = ContentDir::open(dir.path(), 12);

        assert!(matches!(
            content.load(0),
            Err(ContentError::InvalidDay { day: 0, max: 12 })
        ));
        assert!(matches!(
            content.load(13),
            Err(ContentError::InvalidDay { day: 13, max: 12 })
        ));
    }

    #[test]
    fn test_invalid_utf8_is_unreadable() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("day4.txt"), [0xff, 0xfe, 0xfd]).unwrap();

        let content = ContentDir::open(dir.path(), 12);

        assert!(matches!(
            content.load(4),
            Err(ContentError::Unreadable { .. })
        ));
    }

    #[test]
    fn test_directory_in_place_of_file_is_unreadable() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("day5.txt")).unwrap();

        let content = ContentDir::open(dir.path(), 12);

        assert!(matches!(
            content.load(5),
            Err(ContentError::Unreadable { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_outside_root_is_rejected() {
        let outside = TempDir::new().unwrap();
        let secret = outside.path().join("secret.txt");
        fs::write(&secret, "do not serve").unwrap();

        let dir = TempDir::new().unwrap();
        std::os::unix::fs::symlink(&secret, dir.path().join("day6.txt")).unwrap();

        let content = ContentDir::open(dir.path(), 12);

        assert!(matches!(
            content.load(6),
            Err(ContentError::OutsideRoot { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_inside_root_is_followed() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("drafts")).unwrap();
        fs::write(dir.path().join("drafts/seven.txt"), "seventh").unwrap();
        std::os::unix::fs::symlink(
            dir.path().join("drafts/seven.txt"),
            dir.path().join("day7.txt"),
        )
        .unwrap();

        let content = ContentDir::open(dir.path(), 12);

        assert_eq!(content.load(7).unwrap().as_deref(), Some("seventh"));
    }
}
