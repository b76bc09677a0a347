//! Artifact export: destination naming and JSON files.
//!
//! Destinations sit next to the source document, named after it with the
//! extension replaced. An existing destination is deleted before the new
//! artifact is written.

use crate::error::{ConvertError, Result};
use log::debug;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::{Path, PathBuf};

/// Kinds of artifact produced from one source document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// `<stem>.xlsx`
    Spreadsheet,
    /// `<stem>.json`, the flat testcase list
    TestcaseJson,
    /// `<stem>_testsuite.json`, the suite statistics report
    SuiteJson,
}

impl ArtifactKind {
    pub fn suffix(&self) -> &'static str {
        match self {
            ArtifactKind::Spreadsheet => ".xlsx",
            ArtifactKind::TestcaseJson => ".json",
            ArtifactKind::SuiteJson => "_testsuite.json",
        }
    }
}

/// Destination path for an artifact; pure, no filesystem access
pub fn destination_path(source: &Path, kind: ArtifactKind) -> PathBuf {
    let mut name = source.with_extension("").into_os_string();
    name.push(kind.suffix());
    PathBuf::from(name)
}

/// Refuse a destination that would delete the source document
pub fn ensure_not_source(source: &Path, destination: &Path) -> Result<()> {
    if source == destination {
        return Err(ConvertError::DestinationIsSource(destination.to_path_buf()));
    }
    Ok(())
}

/// Delete `path` if it exists
pub fn remove_existing(path: &Path) -> Result<()> {
    if path.exists() {
        debug!("Removing existing artifact {}", path.display());
        fs::remove_file(path).map_err(|source| ConvertError::Write { path: path.to_path_buf(), source })?;
    }
    Ok(())
}

/// Pretty JSON with four-space indentation and non-ASCII text kept literal
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer)?;
    Ok(buffer)
}

/// Replace `path` with the JSON rendering of `value`
pub fn write_json_file<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<()> {
    let bytes = to_pretty_json(value)?;
    remove_existing(path)?;
    fs::write(path, bytes).map_err(|source| ConvertError::Write { path: path.to_path_buf(), source })
}
