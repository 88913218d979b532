//! Whole-file read/write collaborators over [`Buf`].
//!
//! These are thin wrappers around `std::fs`, kept behind the `std` feature:
//! the buffer core never performs I/O itself, it only consumes and produces
//! byte contents. Unlike the core operations, which fail quietly through
//! sentinel returns, this edge reports through a [`Result`].

use std::{fs, io::Write as _};

use thiserror::Error;

use crate::buf::Buf;

/// Failure modes of the file collaborators.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("path is empty")]
    EmptyPath,
    #[error("path is not valid UTF-8")]
    InvalidPath,
    #[error("contents are empty")]
    EmptyContents,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Whether [`write_contents`] replaces the file or extends it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    Truncate,
    Append,
}

fn path_str(path: &Buf) -> Result<&str, FsError> {
    if path.is_empty() {
        return Err(FsError::EmptyPath);
    }
    core::str::from_utf8(path.as_bytes()).map_err(|_| FsError::InvalidPath)
}

/// Reads the whole file named by `path` into a fresh buffer, byte count
/// preserved exactly. An empty file yields an allocated-empty buffer.
///
/// # Errors
///
/// [`FsError::EmptyPath`] / [`FsError::InvalidPath`] for an unusable path,
/// [`FsError::Io`] when the file cannot be opened or read.
pub fn read_contents(path: &Buf) -> Result<Buf, FsError> {
    let bytes = fs::read(path_str(path)?)?;
    let mut buf = Buf::alloc_empty(bytes.len() + 1);
    buf.write(0, &bytes);
    Ok(buf)
}

/// Writes exactly `contents.len()` bytes to the file named by `path`,
/// truncating or appending per `mode`. The file is created when missing.
///
/// # Errors
///
/// [`FsError::EmptyContents`] when there is nothing to write, path and I/O
/// errors as for [`read_contents`].
pub fn write_contents(path: &Buf, contents: &Buf, mode: WriteMode) -> Result<(), FsError> {
    if contents.is_empty() {
        return Err(FsError::EmptyContents);
    }
    let path = path_str(path)?;
    match mode {
        WriteMode::Truncate => fs::write(path, contents.as_bytes())?,
        WriteMode::Append => {
            let mut file = fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            file.write_all(contents.as_bytes())?;
        }
    }
    Ok(())
}
