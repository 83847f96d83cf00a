//! High-score persistence.
//!
//! The store holds one integer. Reading never fails from the caller's point of
//! view (a missing or unreadable score is 0); writing keeps the larger of the
//! stored and the candidate score.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Default score file, relative to the working directory
pub const DEFAULT_SCORES_PATH: &str = "scores.txt";

/// A single persisted best score.
pub trait HighScoreStore {
    /// Stored score, or 0 if there is none.
    fn read(&self) -> u32;

    /// Store `max(stored, candidate)`.
    fn write(&mut self, candidate: u32) -> Result<()>;
}

/// Score kept as a decimal integer in a text file.
#[derive(Debug, Clone)]
pub struct FileHighScoreStore {
    path: PathBuf,
}

impl FileHighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `TETRIS_SCORES_PATH`, or `scores.txt` in the working directory
    pub fn from_env() -> Self {
        let path = std::env::var_os("TETRIS_SCORES_PATH")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SCORES_PATH));
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored score.
    ///
    /// `Ok(None)` when the file does not exist or its first line is not a
    /// number; `Err` for any other I/O failure, including content that is
    /// not valid UTF-8.
    pub fn load(&self) -> Result<Option<u32>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("reading high score from {}", self.path.display()))
            }
        };
        Ok(text.lines().next().and_then(|line| line.trim().parse().ok()))
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn read(&self) -> u32 {
        self.load().ok().flatten().unwrap_or(0)
    }

    /// Fails without touching the file if the stored score cannot be read.
    fn write(&mut self, candidate: u32) -> Result<()> {
        let best = self.load()?.unwrap_or(0).max(candidate);
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
        fs::write(&self.path, best.to_string())
            .with_context(|| format!("writing high score to {}", self.path.display()))
    }
}

/// In-memory store for tests and headless runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryHighScoreStore {
    best: Option<u32>,
    writes: u32,
}

impl MemoryHighScoreStore {
    pub fn new(initial: Option<u32>) -> Self {
        Self {
            best: initial,
            writes: 0,
        }
    }

    /// Number of `write` calls so far
    pub fn writes(&self) -> u32 {
        self.writes
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn read(&self) -> u32 {
        self.best.unwrap_or(0)
    }

    fn write(&mut self, candidate: u32) -> Result<()> {
        self.best = Some(self.read().max(candidate));
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("retro-tetris-{}-{}", std::process::id(), name));
        p
    }

    #[test]
    fn missing_file_reads_zero() {
        let store = FileHighScoreStore::new(temp_path("missing/scores.txt"));
        assert_eq!(store.load().unwrap(), None);
        assert_eq!(store.read(), 0);
    }

    #[test]
    fn corrupt_file_reads_zero() {
        let path = temp_path("corrupt.txt");
        fs::write(&path, "not a score\n").unwrap();
        let store = FileHighScoreStore::new(&path);
        assert_eq!(store.load().unwrap(), None);
        assert_eq!(store.read(), 0);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn write_keeps_the_maximum() {
        let path = temp_path("max.txt");
        let _ = fs::remove_file(&path);
        let mut store = FileHighScoreStore::new(&path);

        store.write(40).unwrap();
        assert_eq!(store.read(), 40);
        store.write(10).unwrap();
        assert_eq!(store.read(), 40);
        store.write(90).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "90");
        let _ = fs::remove_file(path);
    }

    #[test]
    fn unreadable_file_is_not_overwritten() {
        let path = temp_path("binary.txt");
        let bytes = [0xff, 0xfe, b'9', b'9'];
        fs::write(&path, bytes).unwrap();
        let mut store = FileHighScoreStore::new(&path);

        assert!(store.load().is_err());
        assert_eq!(store.read(), 0);
        assert!(store.write(5).is_err());
        assert_eq!(fs::read(&path).unwrap(), bytes);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn memory_store_counts_writes() {
        let mut store = MemoryHighScoreStore::new(Some(30));
        store.write(20).unwrap();
        assert_eq!(store.read(), 30);
        assert_eq!(store.writes(), 1);
    }
}
