use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

const PREFIX: &str = "ocr-";

/// Decoded request image parked on disk for an engine that only reads paths.
///
/// The name is random per instance. The file is removed by `close`, or on
/// drop when `close` is never reached.
#[derive(Debug)]
pub struct ScratchImage {
    file: NamedTempFile,
}

impl ScratchImage {
    pub fn create(dir: &Path, bytes: &[u8], extension: &str) -> io::Result<Self> {
        let suffix = format!(".{}", extension);
        let mut file = tempfile::Builder::new()
            .prefix(PREFIX)
            .suffix(&suffix)
            .tempfile_in(dir)?;
        file.write_all(bytes)?;
        file.as_file().sync_all()?;
        log::debug!("Wrote {} bytes to {}", bytes.len(), file.path().display());
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Removes the file, reporting a failed deletion.
    pub fn close(self) -> io::Result<()> {
        let path = self.file.path().to_path_buf();
        self.file.close()?;
        log::debug!("Removed {}", path.display());
        Ok(())
    }
}
