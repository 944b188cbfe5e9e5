use std::fs::File;
use std::io;
use std::io::Write;
use std::path::{is_separator, Path, PathBuf};

use tracing::trace;

use crate::error::TestutilError;
use crate::reporter::{report, Reporter};

/// Contents of the file at `path`, or an empty vector once a failure is
/// reported.
#[track_caller]
pub fn read_file<T, P>(t: &mut T, path: P) -> Vec<u8>
    where T: Reporter + ?Sized, P: AsRef<Path> {
    t.helper();
    let path = path.as_ref();
    match std::fs::read(path) {
        Ok(bytes) => {
            trace!(path = %path.display(), bytes = bytes.len(), "read file");
            bytes
        }
        Err(source) => {
            report(t, TestutilError::ReadFile { path: path.display().to_string(), source });
            Vec::new()
        }
    }
}

/// A freshly created file, open for writing. Dropping it closes the file but
/// leaves it on disk.
#[derive(Debug)]
pub struct TempWriter {
    file: File,
    path: PathBuf,
}

impl TempWriter {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Write for TempWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

/// Creates a new file in `dir` named after `pattern`, with the last `*`
/// replaced by a random string (or the random string appended if there is
/// no `*`). An empty `dir` means the system temp directory.
///
/// Closing the file is up to the caller, and so is deleting it.
#[track_caller]
pub fn temp_writer<T>(t: &mut T, dir: &str, pattern: &str) -> Option<TempWriter>
    where T: Reporter + ?Sized {
    t.helper();
    match create_temp(dir, pattern) {
        Ok(writer) => {
            trace!(path = %writer.path.display(), "created temp file");
            Some(writer)
        }
        Err(source) => {
            report(t, TestutilError::CreateTemp { dir: dir.to_string(), pattern: pattern.to_string(), source });
            None
        }
    }
}

fn create_temp(dir: &str, pattern: &str) -> io::Result<TempWriter> {
    if pattern.chars().any(is_separator) {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "pattern contains path separator"));
    }
    let (prefix, suffix) = pattern.rsplit_once('*').unwrap_or((pattern, ""));
    let dir = if dir.is_empty() { std::env::temp_dir() } else { PathBuf::from(dir) };
    let (file, path) = tempfile::Builder::new()
        .prefix(prefix)
        .suffix(suffix)
        .tempfile_in(dir)?
        .keep()
        .map_err(|e| e.error)?;
    Ok(TempWriter { file, path })
}
