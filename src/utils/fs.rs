use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read a file's contents as string
pub fn read_file_to_string(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    debug!("Reading file: {}", path.display());

    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Write string content to a file, overwriting any previous contents
///
/// Parent directories are not created; an invalid path fails here.
pub fn write_file_sync(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();
    debug!("Writing {} bytes to file: {}", content.len(), path.display());

    fs::write(path, content)
        .with_context(|| format!("Failed to write to file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_operations() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test.txt");

        write_file_sync(&file_path, "Hello, world!").unwrap();
        let content = read_file_to_string(&file_path).unwrap();
        assert_eq!(content, "Hello, world!");

        // Overwrite replaces the whole content
        write_file_sync(&file_path, "short").unwrap();
        assert_eq!(read_file_to_string(&file_path).unwrap(), "short");
    }

    #[test]
    fn test_read_missing_file_has_path_context() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.txt");

        let err = read_file_to_string(&missing).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("no-such-dir").join("test.txt");

        let err = write_file_sync(&nested, "content").unwrap_err();
        assert!(err.to_string().contains("Failed to write to file"));
    }
}
