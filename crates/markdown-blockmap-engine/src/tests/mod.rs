use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a test source file with raw content
pub fn create_test_file(dir: &TempDir, filename: &str, content: &[u8]) -> PathBuf {
    let file_path = dir.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}
