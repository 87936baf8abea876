use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::debug;

use crate::errors::CheckerError;

// @module: Document loading utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    /// Read a document into memory.
    ///
    /// Anything that is not a regular file (missing path, directory) is
    /// reported as `InputNotFound`; other I/O failures, including invalid
    /// UTF-8, are reported as `Unreadable`.
    pub fn read_document<P: AsRef<Path>>(path: P) -> Result<String, CheckerError> {
        let path = path.as_ref();

        if !Self::file_exists(path) {
            return Err(CheckerError::InputNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => CheckerError::InputNotFound {
                path: path.to_path_buf(),
            },
            _ => CheckerError::Unreadable {
                path: path.to_path_buf(),
                message: e.to_string(),
            },
        })?;

        debug!("Loaded {:?} ({} bytes)", path, content.len());
        Ok(content)
    }
}
