//! High-score persistence.
//!
//! A single named resource holding one integer. Absence or corruption is
//! "no prior high score", never a fatal error: callers substitute 0 and
//! keep running.

use std::fmt;
use std::fs;
use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

/// Why a stored high score could not be read.
#[derive(Debug)]
pub enum ReadError {
    Io(io::Error),
    Malformed(ParseIntError),
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Io(e) => write!(f, "high score read failed: {}", e),
            ReadError::Malformed(e) => write!(f, "high score file is not an integer: {}", e),
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReadError::Io(e) => Some(e),
            ReadError::Malformed(e) => Some(e),
        }
    }
}

/// External collaborator holding the persisted high score.
pub trait HighScoreStore {
    fn load(&self) -> Result<u32, ReadError>;
    fn save(&mut self, value: u32) -> io::Result<()>;
}

/// File-backed store: the value as decimal text in a single file.
#[derive(Debug, Clone)]
pub struct FileHighScoreStore {
    path: PathBuf,
}

impl FileHighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn load(&self) -> Result<u32, ReadError> {
        let text = fs::read_to_string(&self.path).map_err(ReadError::Io)?;
        text.trim().parse().map_err(ReadError::Malformed)
    }

    fn save(&mut self, value: u32) -> io::Result<()> {
        fs::write(&self.path, value.to_string())
    }
}

/// In-memory store for tests and headless runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryHighScoreStore {
    pub value: Option<u32>,
}

impl MemoryHighScoreStore {
    pub fn with_value(value: u32) -> Self {
        Self { value: Some(value) }
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn load(&self) -> Result<u32, ReadError> {
        self.value.ok_or_else(|| {
            ReadError::Io(io::Error::new(io::ErrorKind::NotFound, "no stored value"))
        })
    }

    fn save(&mut self, value: u32) -> io::Result<()> {
        self.value = Some(value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_round_trip() {
        let dir = std::env::temp_dir().join("tui-snake-persist-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("high_score.txt");
        let _ = fs::remove_file(&path);

        let mut store = FileHighScoreStore::new(&path);
        assert!(matches!(store.load(), Err(ReadError::Io(_))));

        store.save(120).unwrap();
        assert_eq!(store.load().unwrap(), 120);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_file_store_rejects_garbage() {
        let dir = std::env::temp_dir().join("tui-snake-persist-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("garbage.txt");
        fs::write(&path, "not a number").unwrap();

        let store = FileHighScoreStore::new(&path);
        assert!(matches!(store.load(), Err(ReadError::Malformed(_))));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_file_store_tolerates_whitespace() {
        let dir = std::env::temp_dir().join("tui-snake-persist-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("padded.txt");
        fs::write(&path, " 42\n").unwrap();

        let store = FileHighScoreStore::new(&path);
        assert_eq!(store.load().unwrap(), 42);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryHighScoreStore::default();
        assert!(store.load().is_err());
        store.save(99).unwrap();
        assert_eq!(store.load().unwrap(), 99);
    }
}
