//! Rotating log writer with size-based rotation and backup retention.
//!
//! Thread-safe writer that rotates the log file when it exceeds a size
//! threshold, keeping a fixed number of timestamped backups. This keeps disk
//! usage bounded for long-running sessions.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::fmt::MakeWriter;

/// Maximum log file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating log writer.
///
/// The file handle is opened lazily on the first write. Before each write the
/// current file size is checked; past `MAX_FILE_SIZE_BYTES` the file is
/// renamed to `<name>.log.<unix_timestamp>` and a fresh file is started.
/// Backups beyond `MAX_BACKUP_FILES` are deleted, oldest first.
///
/// Implements [`MakeWriter`] so it can feed a `tracing_subscriber` fmt layer
/// directly.
pub struct LogWriter {
    /// Path to the primary log file.
    file_path: PathBuf,
    /// Lazily-initialized file handle.
    file: Mutex<Option<fs::File>>,
}

impl LogWriter {
    /// Creates a writer for the given path without opening the file.
    pub const fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            file: Mutex::new(None),
        }
    }

    fn write_bytes(&self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("log writer lock poisoned: {e}")))?;

        self.check_and_rotate(&mut guard)?;

        if guard.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *guard = Some(file);
        }

        let file = guard
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "no log file available"))?;
        file.write_all(buf)?;

        Ok(buf.len())
    }

    fn flush_file(&self) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("log writer lock poisoned: {e}")))?;

        if let Some(file) = guard.as_mut() {
            file.flush()?;
        }
        Ok(())
    }

    /// Closes the handle and rotates when the file has grown past the limit.
    fn check_and_rotate(&self, file: &mut Option<fs::File>) -> io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > MAX_FILE_SIZE_BYTES {
                *file = None;
                self.rotate_files()?;
            }
        }
        Ok(())
    }

    /// Renames the current file to a timestamped backup and prunes old ones.
    ///
    /// Backups are named `<name>.log.<unix_timestamp>`.
    fn rotate_files(&self) -> io::Result<()> {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or(std::time::Duration::from_secs(0))
            .as_secs();

        let backup_path = self.file_path.with_extension(format!("log.{timestamp}"));

        if self.file_path.exists() {
            fs::rename(&self.file_path, &backup_path)?;
        }

        self.cleanup_old_backups()?;

        Ok(())
    }

    /// Deletes backups beyond the retention limit, keeping the newest.
    ///
    /// Individual deletion failures are ignored so cleanup keeps going.
    fn cleanup_old_backups(&self) -> io::Result<()> {
        let parent_dir = self
            .file_path
            .parent()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "log path has no parent directory"))?;

        let file_stem = self
            .file_path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "invalid log file name"))?;

        let mut backups: Vec<PathBuf> = fs::read_dir(parent_dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(file_stem) && name.contains(".log."))
            })
            .collect();

        backups.sort_by(|a, b| {
            let a_time = fs::metadata(a).and_then(|m| m.modified()).ok();
            let b_time = fs::metadata(b).and_then(|m| m.modified()).ok();
            b_time.cmp(&a_time)
        });

        for old_backup in backups.iter().skip(MAX_BACKUP_FILES) {
            let _ = fs::remove_file(old_backup);
        }

        Ok(())
    }
}

impl io::Write for &LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_bytes(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_file()
    }
}

impl<'a> MakeWriter<'a> for LogWriter {
    type Writer = &'a Self;

    fn make_writer(&'a self) -> Self::Writer {
        self
    }
}

impl std::fmt::Debug for LogWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogWriter")
            .field("file_path", &self.file_path)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn writes_append_to_the_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("unisono.log");
        let writer = LogWriter::new(path.clone());

        (&writer).write_all(b"first line\n").unwrap();
        (&writer).write_all(b"second line\n").unwrap();
        (&writer).flush().unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first line\nsecond line\n");
    }

    #[test]
    fn oversized_file_rotates_into_backup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("unisono.log");
        fs::write(&path, vec![b'x'; (MAX_FILE_SIZE_BYTES + 1) as usize]).unwrap();

        let writer = LogWriter::new(path.clone());
        (&writer).write_all(b"fresh\n").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "fresh\n");

        let backups: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.file_name().to_string_lossy().contains(".log."))
            .collect();
        assert_eq!(backups.len(), 1);
    }
}
