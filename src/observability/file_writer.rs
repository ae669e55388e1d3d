//! Size-capped trace file with numbered backups.
//!
//! `stockroom-otlp.json` grows until it passes the size limit, then shifts
//! down a backup chain: `.json.1` is the newest backup, `.json.N` the oldest,
//! and whatever would become `.json.N+1` is deleted.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Size past which the file is rotated (10 MB).
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Backups kept beside the live file.
pub const MAX_BACKUP_FILES: usize = 3;

/// Line-oriented writer shared by the span exporter.
///
/// The file handle is opened lazily on the first write and guarded by a
/// `Mutex`, so construction never touches the filesystem.
pub struct FileWriter {
    file_path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    writer: Mutex<Option<File>>,
}

impl FileWriter {
    /// Writer with the default 10 MB / 3 backup limits.
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            max_bytes,
            max_backups,
            writer: Mutex::new(None),
        }
    }

    /// Appends `json` and a newline, rotating first if the file is over the
    /// limit.
    ///
    /// # Errors
    ///
    /// Returns I/O errors from rotating, opening, or writing the file, and an
    /// error if the lock was poisoned.
    pub fn write_line(&self, json: &str) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

        if self.needs_rotation() {
            *writer = None;
            self.rotate()?;
        }

        if writer.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *writer = Some(file);
        }

        let file = writer
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No file available"))?;

        writeln!(file, "{json}")?;
        file.flush()
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.file_path).is_ok_and(|metadata| metadata.len() > self.max_bytes)
    }

    fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = self.file_path.as_os_str().to_os_string();
        name.push(format!(".{index}"));
        PathBuf::from(name)
    }

    /// Shifts `.1..N` up by one, dropping the oldest, then moves the live
    /// file to `.1`. With zero backups the live file is simply removed.
    fn rotate(&self) -> io::Result<()> {
        if self.max_backups == 0 {
            return remove_if_exists(&self.file_path);
        }

        remove_if_exists(&self.backup_path(self.max_backups))?;
        for index in (1..self.max_backups).rev() {
            let from = self.backup_path(index);
            if from.exists() {
                fs::rename(&from, self.backup_path(index + 1))?;
            }
        }

        if self.file_path.exists() {
            fs::rename(&self.file_path, self.backup_path(1))?;
        }
        Ok(())
    }
}

fn remove_if_exists(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stockroom-otlp.json");
        let writer = FileWriter::new(path.clone());

        writer.write_line("{\"a\":1}").unwrap();
        writer.write_line("{\"b\":2}").unwrap();

        assert_eq!(read(&path), "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn rotates_into_numbered_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stockroom-otlp.json");
        let writer = FileWriter::with_limits(path.clone(), 4, 2);

        for line in ["first", "second", "third", "fourth"] {
            writer.write_line(line).unwrap();
        }

        assert_eq!(read(&path), "fourth\n");
        assert_eq!(read(&writer.backup_path(1)), "third\n");
        assert_eq!(read(&writer.backup_path(2)), "second\n");
        assert!(!writer.backup_path(3).exists());
    }

    #[test]
    fn zero_backups_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = FileWriter::with_limits(path.clone(), 1, 0);

        writer.write_line("old").unwrap();
        writer.write_line("new").unwrap();

        assert_eq!(read(&path), "new\n");
        assert!(!writer.backup_path(1).exists());
    }
}
