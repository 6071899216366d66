//! On-disk storage for uploaded file bytes.
//!
//! Each upload lives at `<uploads_dir>/<file id>`. The database row keeps
//! the full path so relocated or demo files still resolve.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use homelogger_core::types::DbId;

/// Where the bytes of file `id` are stored.
pub fn file_path(uploads_dir: &Path, id: DbId) -> PathBuf {
    uploads_dir.join(id.to_string())
}

/// Write `bytes` for file `id`, creating the uploads directory if needed.
pub async fn write(uploads_dir: &Path, id: DbId, bytes: &[u8]) -> std::io::Result<PathBuf> {
    tokio::fs::create_dir_all(uploads_dir).await?;
    let path = file_path(uploads_dir, id);
    tokio::fs::write(&path, bytes).await?;
    Ok(path)
}

/// Remove stored bytes. An empty path or an already missing file is not an
/// error.
pub async fn remove(path: &Path) -> std::io::Result<()> {
    if path.as_os_str().is_empty() {
        return Ok(());
    }
    match tokio::fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

/// `Content-Disposition` value for downloading a file under its original
/// name. Characters that cannot appear in a quoted header value become `_`.
pub fn attachment_disposition(original_name: &str) -> String {
    let name: String = original_name
        .chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c.is_ascii_graphic() || c == ' ' => c,
            _ => '_',
        })
        .collect();
    let name = if name.trim().is_empty() { "download".to_string() } else { name };
    format!("attachment; filename=\"{name}\"")
}
