//! File access for `\include`
//!
//! The converter never touches the filesystem directly. Included files are
//! read through a [`FileResolver`], so tests (and embedders) can supply
//! documents from memory.
//!
//! Paths handed to a resolver are already fully resolved: include
//! directory, include name and extension joined together (see
//! [`crate::TexiOptions::include_path`]).

use std::collections::HashMap;
use std::path::PathBuf;

/// Trait for reading files
///
/// Implementations:
/// - `StdFileResolver`: Uses std::fs for real file system access (CLI inputs and includes)
/// - `MemoryFileResolver`: In-memory file storage (testing)
pub trait FileResolver: Send + Sync {
    /// Read a file's contents
    fn read_file(&self, path: &str) -> Result<String, FileResolveError>;
}

/// Error type for file resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileResolveError {
    NotFound(String),
    ReadError(String),
}

impl std::fmt::Display for FileResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileResolveError::NotFound(path) => write!(f, "File not found: {}", path),
            FileResolveError::ReadError(msg) => write!(f, "Read error: {}", msg),
        }
    }
}

impl std::error::Error for FileResolveError {}

/// Standard filesystem resolver (for CLI usage)
#[derive(Debug, Default)]
pub struct StdFileResolver;

impl StdFileResolver {
    pub fn new() -> Self {
        Self
    }
}

impl FileResolver for StdFileResolver {
    fn read_file(&self, path: &str) -> Result<String, FileResolveError> {
        let full_path = PathBuf::from(path);
        if !full_path.is_file() {
            return Err(FileResolveError::NotFound(path.to_string()));
        }
        std::fs::read_to_string(&full_path)
            .map_err(|e| FileResolveError::ReadError(format!("{}: {}", path, e)))
    }
}

/// Memory-based file resolver (for testing)
#[derive(Debug, Default)]
pub struct MemoryFileResolver {
    files: HashMap<String, String>,
}

impl MemoryFileResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file to the in-memory storage
    pub fn add_file(&mut self, path: &str, content: &str) {
        self.files.insert(normalize(path), content.to_string());
    }

    /// Builder form of [`add_file`](Self::add_file)
    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.add_file(path, content);
        self
    }
}

impl FileResolver for MemoryFileResolver {
    fn read_file(&self, path: &str) -> Result<String, FileResolveError> {
        self.files
            .get(&normalize(path))
            .cloned()
            .ok_or_else(|| FileResolveError::NotFound(path.to_string()))
    }
}

/// Drop `./` segments so `./a.tex` and `a.tex` name the same memory file.
fn normalize(path: &str) -> String {
    let mut out = path.replace('\\', "/");
    while let Some(rest) = out.strip_prefix("./") {
        out = rest.to_string();
    }
    out.replace("/./", "/")
}
