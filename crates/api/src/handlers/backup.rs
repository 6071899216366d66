//! Handler for `GET /backup/download`.

use axum::body::Body;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use homelogger_db::backup::{fallback_path, snapshot, snapshot_path};
use tempfile::TempPath;
use tokio_util::io::ReaderStream;
use tokio_util::sync::CancellationToken;

use crate::backup::{build_archive, BACKUP_FILE_NAME};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /backup/download
///
/// One backup runs at a time; later requests wait for the lock. The
/// archive is assembled in an anonymous temp file and streamed from there.
///
/// The snapshot files are removed when this future ends, including when the
/// client goes away mid-backup; the archive build is cancelled with it.
pub async fn download(State(state): State<AppState>) -> AppResult<Response> {
    let _guard = state.backup_lock.lock().await;

    let dest = snapshot_path(&state.config.database_path);
    let _snapshot_files = (
        TempPath::from_path(&dest),
        TempPath::from_path(fallback_path(&dest)),
    );

    let taken = snapshot(&state.pool, &state.config.database_path, &dest).await?;
    tracing::info!(method = ?taken.method, snapshot = %taken.path.display(), "Database snapshot taken");

    let cancel = CancellationToken::new();
    let _cancel_on_drop = cancel.clone().drop_guard();

    let uploads_dir = state.config.uploads_dir.clone();
    let archive = tokio::task::spawn_blocking(move || {
        build_archive(&taken.path, &uploads_dir, &cancel)
    })
    .await
    .map_err(|e| AppError::InternalError(format!("Backup task failed: {e}")))?
    .map_err(|e| AppError::InternalError(format!("Building backup archive: {e}")))?;

    let body = Body::from_stream(ReaderStream::new(tokio::fs::File::from_std(archive)));
    Ok((
        [
            (header::CONTENT_TYPE, "application/zip".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={BACKUP_FILE_NAME}"),
            ),
        ],
        body,
    )
        .into_response())
}
