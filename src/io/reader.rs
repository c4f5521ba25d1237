//! Reading clipboard dumps and writing joined output.
//!
//! Input comes from a file or stdin, always as raw bytes: the splitter
//! is the only place that interprets them.

// Memory mapping requires unsafe but is well-documented and safe for read-only access
#![allow(unsafe_code)]

use crate::error::{IoError, Result};
use memmap2::Mmap;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

/// Threshold for using memory mapping (1MB).
const MMAP_THRESHOLD: u64 = 1024 * 1024;

/// Maximum input size (256MB). Clipboards never get near this.
const MAX_FILE_SIZE: u64 = 256 * 1024 * 1024;

/// File reader with support for memory mapping.
///
/// Small files are read directly; files of 1MB and up are mapped and
/// copied out of the mapping.
///
/// # Examples
///
/// ```no_run
/// use neoclip::io::FileReader;
///
/// let reader = FileReader::open("clipboard.bin").unwrap();
/// let bytes = reader.read_to_bytes().unwrap();
/// ```
pub struct FileReader {
    file: File,
    size: u64,
    /// File path for error messages.
    path: String,
}

impl FileReader {
    /// Opens a file for reading.
    ///
    /// # Errors
    ///
    /// Returns an error if the file doesn't exist, can't be opened, or is
    /// larger than the input cap.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let path_str = path_ref.to_string_lossy().to_string();

        if !path_ref.exists() {
            return Err(IoError::FileNotFound { path: path_str }.into());
        }

        let file = File::open(path_ref).map_err(|e| IoError::ReadFailed {
            path: path_str.clone(),
            reason: e.to_string(),
        })?;

        let size = file
            .metadata()
            .map_err(|e| IoError::ReadFailed {
                path: path_str.clone(),
                reason: e.to_string(),
            })?
            .len();

        if size > MAX_FILE_SIZE {
            return Err(IoError::ReadFailed {
                path: path_str,
                reason: format!("file too large: {size} bytes (max: {MAX_FILE_SIZE} bytes)"),
            }
            .into());
        }

        Ok(Self {
            file,
            size,
            path: path_str,
        })
    }

    /// Returns the file size in bytes.
    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    /// Reads the whole file as bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or mapping fails.
    pub fn read_to_bytes(&self) -> Result<Vec<u8>> {
        if self.size >= MMAP_THRESHOLD {
            self.read_mmap_bytes()
        } else {
            self.read_direct_bytes()
        }
    }

    fn read_mmap_bytes(&self) -> Result<Vec<u8>> {
        // Safety: read-only mapping, copied out before the map is dropped
        let mmap = unsafe {
            Mmap::map(&self.file).map_err(|e| IoError::MmapFailed {
                path: self.path.clone(),
                reason: e.to_string(),
            })?
        };

        Ok(mmap.to_vec())
    }

    #[allow(clippy::cast_possible_truncation)]
    fn read_direct_bytes(&self) -> Result<Vec<u8>> {
        let mut file = &self.file;
        let mut buffer = Vec::with_capacity(self.size as usize);
        file.read_to_end(&mut buffer)
            .map_err(|e| IoError::ReadFailed {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;
        Ok(buffer)
    }
}

/// Reads a file as bytes.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    FileReader::open(path)?.read_to_bytes()
}

/// Reads input bytes from `path`, or from stdin when `path` is `None` or `-`.
///
/// # Errors
///
/// Returns an error if the file or stdin cannot be read.
pub fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(p) if p != Path::new("-") => read_file(p),
        _ => {
            let mut buffer = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut buffer)
                .map_err(|e| IoError::ReadFailed {
                    path: "<stdin>".to_string(),
                    reason: e.to_string(),
                })?;
            Ok(buffer)
        }
    }
}

/// Writes bytes to a file, creating parent directories if needed.
///
/// # Errors
///
/// Returns an error if directory creation or file writing fails.
pub fn write_file<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path_ref = path.as_ref();
    let path_str = path_ref.to_string_lossy().to_string();

    if let Some(parent) = path_ref.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(|e| IoError::DirectoryFailed {
            path: parent.to_string_lossy().to_string(),
            reason: e.to_string(),
        })?;
    }

    std::fs::write(path_ref, content).map_err(|e| IoError::WriteFailed {
        path: path_str,
        reason: e.to_string(),
    })?;

    Ok(())
}

/// Writes bytes to `path`, or to stdout when `path` is `None`.
///
/// A closed stdout (e.g. piped into `head` or `xxd`) is not an error.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_output(path: Option<&Path>, content: &[u8]) -> Result<()> {
    match path {
        Some(p) => write_file(p, content),
        None => write_stream(&mut io::stdout().lock(), content),
    }
}

fn write_stream<W: Write>(writer: &mut W, content: &[u8]) -> Result<()> {
    match writer.write_all(content).and_then(|()| writer.flush()) {
        Err(e) if e.kind() != io::ErrorKind::BrokenPipe => Err(IoError::WriteFailed {
            path: "<stdout>".to_string(),
            reason: e.to_string(),
        }
        .into()),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_small_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("clip.bin");
        std::fs::write(&file_path, b"foo\r\nbar\0").unwrap();

        let bytes = read_file(&file_path).unwrap();
        assert_eq!(bytes, b"foo\r\nbar\0");
    }

    #[test]
    fn test_read_large_file_uses_mmap() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("big.txt");
        let content = "line\n".repeat(300_000);
        std::fs::write(&file_path, &content).unwrap();

        let reader = FileReader::open(&file_path).unwrap();
        assert!(reader.size() >= MMAP_THRESHOLD);
        assert_eq!(reader.read_to_bytes().unwrap().len(), content.len());
    }

    #[test]
    fn test_file_not_found() {
        let result = FileReader::open("/nonexistent/clip.bin");
        assert!(matches!(
            result,
            Err(crate::Error::Io(IoError::FileNotFound { .. }))
        ));
    }

    #[test]
    fn test_write_file_creates_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("nested/dir/out.bin");

        write_file(&file_path, b"a\nb").unwrap();
        assert_eq!(std::fs::read(&file_path).unwrap(), b"a\nb");
    }

    #[test]
    fn test_write_output_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("out.bin");

        write_output(Some(&file_path), b"\x01utf-8\0x").unwrap();
        assert_eq!(std::fs::read(&file_path).unwrap(), b"\x01utf-8\0x");
    }

    struct ClosedPipe(io::ErrorKind);

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(self.0))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_stream_ignores_broken_pipe() {
        let mut sink = ClosedPipe(io::ErrorKind::BrokenPipe);
        assert!(write_stream(&mut sink, b"a\nb").is_ok());
    }

    #[test]
    fn test_write_stream_reports_other_errors() {
        let mut sink = ClosedPipe(io::ErrorKind::PermissionDenied);
        assert!(matches!(
            write_stream(&mut sink, b"a\nb"),
            Err(crate::Error::Io(IoError::WriteFailed { .. }))
        ));
    }

    #[test]
    fn test_read_input_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("in.bin");
        std::fs::write(&file_path, b"payload").unwrap();

        assert_eq!(read_input(Some(&file_path)).unwrap(), b"payload");
    }
}
