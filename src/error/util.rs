//! Utility functions for error handling
//!
//! File helpers that attach the path and the purpose of the access to any
//! I/O failure, so a missing reference table reads differently from a
//! permission problem on the records file.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{GrowthError, Result};

/// Open a file, describing why it was needed if that fails
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    fs::File::open(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => {
                "Permission denied - check file permissions".to_string()
            }
            io::ErrorKind::NotFound => format!("File not found, needed for: {purpose}"),
            _ => format!("Failed to open file for: {purpose}"),
        };
        GrowthError::io(context, e).with_path(path)
    })
}

/// Read a whole file to a string with rich error information
pub fn safe_read_to_string(path: &Path, purpose: &str) -> Result<String> {
    let mut file = safe_open_file(path, purpose)?;

    let mut content = String::new();
    match io::Read::read_to_string(&mut file, &mut content) {
        Ok(_) => Ok(content),
        Err(e) => {
            let context = match e.kind() {
                io::ErrorKind::InvalidData => {
                    "File contains invalid UTF-8 data - cannot read as text".to_string()
                }
                _ => format!("Failed to read file content for: {purpose}"),
            };
            Err(GrowthError::io(context, e).with_path(path))
        }
    }
}

/// Write a string to a file, creating missing parent directories first
pub fn safe_write(path: &Path, content: &str, purpose: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            GrowthError::io(format!("Failed to create directory for: {purpose}"), e)
                .with_path(parent)
        })?;
    }

    fs::write(path, content).map_err(|e| {
        GrowthError::io(format!("Failed to write file for: {purpose}"), e).with_path(path)
    })
}
