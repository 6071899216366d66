//! Consistent on-disk snapshots of the live database.

use std::path::{Path, PathBuf};
use std::time::Duration;

use sqlx::sqlite::SqliteQueryResult;
use tokio::task::{JoinError, JoinHandle};

use crate::DbPool;

/// Upper bound on how long `VACUUM INTO` may run before falling back.
pub const SNAPSHOT_TIMEOUT: Duration = Duration::from_secs(15);

/// How a snapshot was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotMethod {
    /// `VACUUM INTO`, consistent even with concurrent writers.
    Vacuum,
    /// Plain copy of the database file.
    FileCopy,
}

/// A finished snapshot file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub method: SnapshotMethod,
    /// `dest` for [`SnapshotMethod::Vacuum`], [`fallback_path`] of `dest`
    /// for [`SnapshotMethod::FileCopy`].
    pub path: PathBuf,
}

/// A fresh, unused snapshot path next to the database file.
pub fn snapshot_path(db_path: &Path) -> PathBuf {
    let nanos = chrono::Utc::now()
        .timestamp_nanos_opt()
        .unwrap_or_default();
    let dir = db_path.parent().unwrap_or_else(|| Path::new("."));
    dir.join(format!("homelogger-backup-{nanos}.db"))
}

/// Where the file-copy fallback writes for a given `dest`.
///
/// Distinct from `dest` because a timed-out `VACUUM INTO` may still be
/// writing there.
pub fn fallback_path(dest: &Path) -> PathBuf {
    dest.with_extension("copy.db")
}

/// Write a snapshot of the database.
///
/// Tries `VACUUM INTO dest` first, bounded by [`SNAPSHOT_TIMEOUT`]. If that
/// fails or times out the database file at `db_path` is copied to
/// [`fallback_path`] instead. Only a failed copy is an error.
///
/// The caller owns both paths and removes them when done. A vacuum that is
/// still running when this returns or is dropped keeps going on its
/// connection; its output is removed once it ends.
pub async fn snapshot(
    pool: &DbPool,
    db_path: &Path,
    dest: &Path,
) -> Result<Snapshot, std::io::Error> {
    let mut vacuum = PendingVacuum::start(pool, dest);

    match tokio::time::timeout(SNAPSHOT_TIMEOUT, vacuum.wait()).await {
        Ok(Some(Ok(Ok(_)))) => {
            return Ok(Snapshot {
                method: SnapshotMethod::Vacuum,
                path: dest.to_path_buf(),
            })
        }
        Ok(Some(Ok(Err(e)))) => {
            tracing::warn!(error = %e, dest = %dest.display(), "VACUUM INTO failed, copying database file");
        }
        Ok(Some(Err(e))) => {
            tracing::warn!(error = %e, "VACUUM INTO task failed, copying database file");
        }
        Ok(None) => {}
        Err(_) => {
            tracing::warn!(
                timeout_secs = SNAPSHOT_TIMEOUT.as_secs(),
                "VACUUM INTO timed out, copying database file"
            );
        }
    }
    drop(vacuum);

    let copy = fallback_path(dest);
    tokio::fs::copy(db_path, &copy).await?;
    Ok(Snapshot {
        method: SnapshotMethod::FileCopy,
        path: copy,
    })
}

type VacuumResult = Result<SqliteQueryResult, sqlx::Error>;

/// A `VACUUM INTO` running on its own task.
///
/// Dropped before the statement finished, it hands the task to a cleanup
/// task that removes `dest` once the statement ends.
struct PendingVacuum {
    task: Option<JoinHandle<VacuumResult>>,
    dest: PathBuf,
}

impl PendingVacuum {
    fn start(pool: &DbPool, dest: &Path) -> Self {
        let pool = pool.clone();
        let target = dest.to_string_lossy().into_owned();
        let task = tokio::spawn(async move {
            sqlx::query("VACUUM INTO ?1").bind(target).execute(&pool).await
        });
        Self {
            task: Some(task),
            dest: dest.to_path_buf(),
        }
    }

    /// Cancel-safe: if this future is dropped the task stays pending.
    async fn wait(&mut self) -> Option<Result<VacuumResult, JoinError>> {
        let result = self.task.as_mut()?.await;
        self.task = None;
        Some(result)
    }
}

impl Drop for PendingVacuum {
    fn drop(&mut self) {
        let Some(task) = self.task.take() else {
            return;
        };
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            return;
        };
        let dest = self.dest.clone();
        runtime.spawn(async move {
            let _ = task.await;
            match tokio::fs::remove_file(&dest).await {
                Ok(()) => tracing::debug!(path = %dest.display(), "Removed late snapshot"),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    tracing::warn!(error = %e, path = %dest.display(), "Failed to remove late snapshot")
                }
            }
        });
    }
}
