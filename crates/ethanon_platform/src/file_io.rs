//! File reading seam
//!
//! The settings loader pulls project files through this trait so embedders
//! and tests can supply their own storage. Implementations carry no mutable
//! state and may be shared across threads.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

pub trait FileReader {
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// Reads files from the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskFileReader;

impl FileReader for DiskFileReader {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// Map-backed reader for tests and embedded assets.
#[derive(Debug, Default, Clone)]
pub struct MemoryFileReader {
    files: HashMap<PathBuf, String>,
}

impl MemoryFileReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        self.files.insert(path.into(), contents.into());
        self
    }
}

impl FileReader for MemoryFileReader {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {}", path.display()),
            )
        })
    }
}
