use std::io;
use std::path::Path;

/// Reads the raw bytes of one input document.
pub trait SourceReader: Send + Sync {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// Reads straight from the local filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsSource;

impl SourceReader for FsSource {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}
