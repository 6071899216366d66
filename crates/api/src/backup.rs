//! Zip archive of the database snapshot and the uploads directory.

use std::fs::File;
use std::io::{Seek, SeekFrom, Write};
use std::path::Path;

use tokio_util::sync::CancellationToken;
use walkdir::WalkDir;
use zip::write::FileOptions;
use zip::ZipWriter;

/// File name offered to clients downloading a backup.
pub const BACKUP_FILE_NAME: &str = "homelogger-backup.zip";

#[derive(Debug, thiserror::Error)]
pub enum BackupError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("walking uploads directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("backup cancelled")]
    Cancelled,
}

/// Build the archive into an anonymous temp file, rewound and ready to be
/// streamed.
///
/// Layout: `db/<snapshot file name>` followed by every regular file below
/// `uploads_dir` as `uploads/<relative path>`. A missing uploads directory
/// contributes nothing. `cancel` is checked before each entry.
pub fn build_archive(
    snapshot: &Path,
    uploads_dir: &Path,
    cancel: &CancellationToken,
) -> Result<File, BackupError> {
    let mut file = write_archive(tempfile::tempfile()?, snapshot, uploads_dir, cancel)?;
    file.seek(SeekFrom::Start(0))?;
    Ok(file)
}

/// Write the archive to `writer` and return it once the zip is finished.
pub fn write_archive<W: Write + Seek>(
    writer: W,
    snapshot: &Path,
    uploads_dir: &Path,
    cancel: &CancellationToken,
) -> Result<W, BackupError> {
    let options = FileOptions::default().compression_method(zip::CompressionMethod::Deflated);
    let mut zip = ZipWriter::new(writer);

    let snapshot_name = snapshot
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "homelogger.db".to_string());
    if cancel.is_cancelled() {
        return Err(BackupError::Cancelled);
    }
    zip.start_file(format!("db/{snapshot_name}"), options)?;
    std::io::copy(&mut File::open(snapshot)?, &mut zip)?;

    let mut uploads = 0usize;
    if uploads_dir.is_dir() {
        for entry in WalkDir::new(uploads_dir).sort_by_file_name() {
            let entry = entry?;
            if cancel.is_cancelled() {
                return Err(BackupError::Cancelled);
            }
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(relative) = entry.path().strip_prefix(uploads_dir) else {
                continue;
            };
            zip.start_file(format!("uploads/{}", archive_path(relative)), options)?;
            std::io::copy(&mut File::open(entry.path())?, &mut zip)?;
            uploads += 1;
        }
    }

    tracing::debug!(uploads, "Backup archive written");
    Ok(zip.finish()?)
}

/// Join path components with `/` regardless of platform.
fn archive_path(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
