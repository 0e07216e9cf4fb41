//! Loading the data document.
//!
//! The document is read from disk on every call. There is no cache and no
//! retry: a read or parse failure is returned to the caller, and the build
//! stops before any output is written.

use crate::types::SiteData;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("cannot read data document {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid data document {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Read and parse the data document at `path`.
pub fn load(path: &Path) -> Result<SiteData, FetchError> {
    let content = fs::read_to_string(path).map_err(|source| FetchError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content).map_err(|source| FetchError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse an in-memory data document.
pub fn parse(json: &str) -> Result<SiteData, serde_json::Error> {
    serde_json::from_str(json)
}
