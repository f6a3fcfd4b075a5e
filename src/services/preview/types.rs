use bytes::Bytes;
use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const PREVIEW_ROW_LIMIT: usize = 5;

/// Anything with a name that can hand over its bytes once.
pub trait FileHandle {
    fn name(&self) -> &str;

    fn read_bytes(&self) -> impl Future<Output = io::Result<Bytes>> + Send;
}

/// A file already held in memory, e.g. an uploaded request body.
#[derive(Debug, Clone)]
pub struct InMemoryFile {
    name: String,
    data: Bytes,
}

impl InMemoryFile {
    pub fn new(name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }
}

impl FileHandle for InMemoryFile {
    fn name(&self) -> &str {
        &self.name
    }

    async fn read_bytes(&self) -> io::Result<Bytes> {
        Ok(self.data.clone())
    }
}

/// A file on local disk, read lazily.
#[derive(Debug, Clone)]
pub struct LocalFile {
    path: PathBuf,
    name: String,
}

impl LocalFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, name }
    }
}

impl FileHandle for LocalFile {
    fn name(&self) -> &str {
        &self.name
    }

    async fn read_bytes(&self) -> io::Result<Bytes> {
        tokio::fs::read(&self.path).await.map(Bytes::from)
    }
}

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("{0}")]
    Csv(#[from] csv::Error),
    #[error("{0}")]
    Spreadsheet(#[from] calamine::Error),
    #[error("workbook has no sheets")]
    NoSheets,
}

/// Issues found while previewing, split by whether they block the import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewIssue {
    Blocking(String),
    /// Worth telling the user, but the server-side import has the final say.
    Advisory(String),
}

impl PreviewIssue {
    pub fn message(&self) -> &str {
        match self {
            PreviewIssue::Blocking(msg) | PreviewIssue::Advisory(msg) => msg,
        }
    }

    pub fn is_blocking(&self) -> bool {
        matches!(self, PreviewIssue::Blocking(_))
    }
}

/// Header row plus every data row, cells already stringified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ParsedTable {
    pub fn from_rows(mut rows: Vec<Vec<String>>) -> Self {
        if rows.is_empty() {
            return Self::default();
        }
        let headers = rows.remove(0);
        Self { headers, rows }
    }

    pub fn total_rows(&self) -> usize {
        self.rows.len()
    }
}
