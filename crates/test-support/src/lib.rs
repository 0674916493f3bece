#![deny(unsafe_code)]
#![deny(missing_docs)]

//! Shared fixtures for the workspace's tests.
//!
//! Helpers create files inside a [`tempfile::TempDir`] that lives as long as
//! the returned guard, so tests never leave residue behind.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory together with one file written into it.
#[derive(Debug)]
pub struct TempFile {
    dir: TempDir,
    path: PathBuf,
}

impl TempFile {
    /// Path of the file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory holding the file.
    #[must_use]
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}

/// Writes `lines`, each terminated by `\n`, to a fresh file named `name`.
pub fn write_lines<I, S>(name: &str, lines: I) -> io::Result<TempFile>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let dir = tempfile::tempdir()?;
    let path = dir.path().join(name);
    let mut file = fs::File::create(&path)?;
    for line in lines {
        file.write_all(line.as_ref().as_bytes())?;
        file.write_all(b"\n")?;
    }
    file.sync_all()?;
    Ok(TempFile { dir, path })
}

/// Writes raw `contents` to a fresh file named `name`.
pub fn write_text(name: &str, contents: &str) -> io::Result<TempFile> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join(name);
    fs::write(&path, contents)?;
    Ok(TempFile { dir, path })
}

/// A path inside a fresh temporary directory that does not exist.
pub fn missing_file(name: &str) -> io::Result<TempFile> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join(name);
    Ok(TempFile { dir, path })
}
