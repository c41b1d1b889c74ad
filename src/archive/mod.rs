use crate::error::{Result, RoomGenError};
use async_trait::async_trait;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// One successfully resolved image, ready to be archived.
#[derive(Debug, Clone)]
pub struct ArchiveEntry {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Persists a named in-memory archive as a downloadable file.
#[async_trait]
pub trait ArchiveSink: Send + Sync {
    async fn persist(&self, target_name: &str, bytes: Vec<u8>) -> Result<PathBuf>;
}

/// Build a zip archive in memory. Entries are grouped under a folder
/// named after the target, matching the delivered file layout.
pub fn build_archive(target_name: &str, entries: &[ArchiveEntry]) -> Result<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in entries {
        writer
            .start_file(format!("{}/{}", target_name, entry.name), options)
            .map_err(|e| RoomGenError::ArchiveError(e.to_string()))?;
        writer
            .write_all(&entry.bytes)
            .map_err(|e| RoomGenError::ArchiveError(e.to_string()))?;
    }

    let cursor = writer
        .finish()
        .map_err(|e| RoomGenError::ArchiveError(e.to_string()))?;
    Ok(cursor.into_inner())
}

/// Writes `{target_name}.zip` into a configured directory.
pub struct FileArchiveSink {
    output_dir: PathBuf,
}

impl FileArchiveSink {
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl ArchiveSink for FileArchiveSink {
    async fn persist(&self, target_name: &str, bytes: Vec<u8>) -> Result<PathBuf> {
        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| RoomGenError::ArchiveError(e.to_string()))?;

        let path = self.output_dir.join(format!("{}.zip", target_name));
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| RoomGenError::ArchiveError(e.to_string()))?;

        log::info!("Archive written to {}", path.display());
        Ok(path)
    }
}
