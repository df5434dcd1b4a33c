pub mod documents;
pub mod site;

use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of one generation run's writes.
///
/// Each document write is independent: a failure is recorded here and the
/// run carries on, so the final report lists every failed target instead of
/// stopping at the first one. Already-written documents stay valid.
#[derive(Debug, Default)]
pub struct WriteReport {
    pub written: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, std::io::Error)>,
}

impl WriteReport {
    pub fn record(&mut self, path: PathBuf, result: std::io::Result<()>) {
        match result {
            Ok(()) => self.written.push(path),
            Err(e) => self.failed.push((path, e)),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Write `contents` to `path`, creating parent directories first.
pub(crate) fn write_file(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)
}
