//! Demo data seeding.
//!
//! A demo data file describes appliances, todos, notes, maintenance and
//! repair records, and file attachments. Entries link to each other by
//! position: `applianceIndex: 0` refers to the first appliance in the file.
//! Out-of-range indices are ignored.

use std::path::{Path, PathBuf};

use homelogger_core::types::DbId;
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::models::appliance::ApplianceInput;
use crate::models::note::CreateNote;
use crate::models::saved_file::CreateSavedFile;
use crate::models::service_record::{CreateServiceRecord, ServiceKind};
use crate::models::todo::CreateTodo;
use crate::repositories::{
    ApplianceRepo, NoteRepo, SavedFileRepo, ServiceRecordRepo, TodoRepo,
};

/// Bundled sample data, relative to the workspace root.
pub const DEFAULT_DEMO_DATA_PATH: &str = "crates/db/demo/sample_data.json";

/// Subdirectory of the uploads dir that demo file paths point into.
pub const DEMO_UPLOADS_DIR: &str = "demo-uploads";

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("reading demo data from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("parsing demo data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Shape of the demo data file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DemoData {
    pub appliances: Vec<ApplianceInput>,
    pub todos: Vec<DemoTodo>,
    pub notes: Vec<DemoNote>,
    pub maintenances: Vec<DemoServiceRecord>,
    pub repairs: Vec<DemoServiceRecord>,
    pub files: Vec<DemoFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DemoTodo {
    pub label: String,
    pub checked: bool,
    #[serde(rename = "userID")]
    pub user_id: String,
    pub appliance_index: Option<i64>,
    pub space_type: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DemoNote {
    pub title: String,
    pub body: String,
    pub appliance_index: Option<i64>,
    pub space_type: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DemoServiceRecord {
    pub description: String,
    pub date: String,
    pub cost: f64,
    pub notes: String,
    pub reference_type: String,
    pub space_type: String,
    pub appliance_index: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DemoFile {
    pub original_name: String,
    #[serde(rename = "userID")]
    pub user_id: String,
    pub appliance_index: Option<i64>,
    pub maintenance_index: Option<i64>,
    pub repair_index: Option<i64>,
    pub space_type: String,
}

/// Counts of rows created by a seeding run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub appliances: usize,
    pub todos: usize,
    pub notes: usize,
    pub maintenances: usize,
    pub repairs: usize,
    pub files: usize,
}

/// Read and parse a demo data file.
pub async fn load(path: &Path) -> Result<DemoData, DemoError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| DemoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Load `path` and seed it, unless the database already holds appliances.
///
/// Returns `None` when seeding was skipped.
pub async fn seed_if_empty(
    pool: &SqlitePool,
    path: &Path,
    uploads_dir: &Path,
) -> Result<Option<SeedReport>, DemoError> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM appliances")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        tracing::info!(existing, "Database already populated, skipping demo seed");
        return Ok(None);
    }

    let data = load(path).await?;
    Ok(Some(seed(pool, &data, uploads_dir).await))
}

/// Insert `data`. Per-entry failures are logged and skipped.
///
/// Files get a row and a path under `<uploads_dir>/demo-uploads/<id>`; no
/// bytes are written.
pub async fn seed(pool: &SqlitePool, data: &DemoData, uploads_dir: &Path) -> SeedReport {
    let mut report = SeedReport::default();

    let mut appliance_ids: Vec<Option<DbId>> = Vec::with_capacity(data.appliances.len());
    for (i, appliance) in data.appliances.iter().enumerate() {
        match ApplianceRepo::create(pool, appliance).await {
            Ok(created) => {
                appliance_ids.push(Some(created.id));
                report.appliances += 1;
            }
            Err(e) => {
                tracing::warn!(index = i, error = %e, "demo: failed to create appliance");
                appliance_ids.push(None);
            }
        }
    }

    for (i, todo) in data.todos.iter().enumerate() {
        let input = CreateTodo {
            label: todo.label.clone(),
            checked: todo.checked,
            user_id: todo.user_id.clone(),
            appliance_id: resolve(&appliance_ids, todo.appliance_index),
            space_type: Some(todo.space_type.clone()),
        };
        match TodoRepo::create(pool, &input).await {
            Ok(_) => report.todos += 1,
            Err(e) => tracing::warn!(index = i, error = %e, "demo: failed to create todo"),
        }
    }

    for (i, note) in data.notes.iter().enumerate() {
        let input = CreateNote {
            title: note.title.clone(),
            body: note.body.clone(),
            appliance_id: resolve(&appliance_ids, note.appliance_index),
            space_type: Some(note.space_type.clone()),
        };
        match NoteRepo::create(pool, &input).await {
            Ok(_) => report.notes += 1,
            Err(e) => tracing::warn!(index = i, error = %e, "demo: failed to create note"),
        }
    }

    let maintenance_ids = seed_service_records(
        pool,
        ServiceKind::Maintenance,
        &data.maintenances,
        &appliance_ids,
        &mut report.maintenances,
    )
    .await;
    let repair_ids = seed_service_records(
        pool,
        ServiceKind::Repair,
        &data.repairs,
        &appliance_ids,
        &mut report.repairs,
    )
    .await;

    let demo_dir = uploads_dir.join(DEMO_UPLOADS_DIR);
    for (i, file) in data.files.iter().enumerate() {
        let input = CreateSavedFile {
            original_name: file.original_name.clone(),
            user_id: file.user_id.clone(),
            space_type: None,
        };
        let created = match SavedFileRepo::create(pool, &input).await {
            Ok(created) => created,
            Err(e) => {
                tracing::warn!(index = i, error = %e, "demo: failed to create file");
                continue;
            }
        };
        report.files += 1;

        let path = demo_dir.join(created.id.to_string());
        if let Err(e) = SavedFileRepo::set_path(pool, created.id, &path.to_string_lossy()).await {
            tracing::warn!(index = i, error = %e, "demo: failed to set file path");
        }

        if let Some(appliance_id) = resolve(&appliance_ids, file.appliance_index) {
            log_attach(i, SavedFileRepo::attach_to_appliance(pool, created.id, appliance_id).await);
        }
        if let Some(record_id) = resolve(&maintenance_ids, file.maintenance_index) {
            log_attach(
                i,
                SavedFileRepo::attach_to_record(pool, ServiceKind::Maintenance, created.id, record_id)
                    .await,
            );
        }
        if let Some(record_id) = resolve(&repair_ids, file.repair_index) {
            log_attach(
                i,
                SavedFileRepo::attach_to_record(pool, ServiceKind::Repair, created.id, record_id)
                    .await,
            );
        }
        if !file.space_type.is_empty() {
            log_attach(
                i,
                SavedFileRepo::attach_to_space(pool, created.id, &file.space_type).await,
            );
        }
    }

    tracing::info!(?report, "demo: seeding complete");
    report
}

async fn seed_service_records(
    pool: &SqlitePool,
    kind: ServiceKind,
    records: &[DemoServiceRecord],
    appliance_ids: &[Option<DbId>],
    created_count: &mut usize,
) -> Vec<Option<DbId>> {
    let mut ids = Vec::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        let input = CreateServiceRecord {
            description: record.description.clone(),
            date: record.date.clone(),
            cost: record.cost,
            notes: record.notes.clone(),
            space_type: record.space_type.clone(),
            reference_type: record.reference_type.clone(),
            appliance_id: resolve(appliance_ids, record.appliance_index),
            attachment_ids: Vec::new(),
        };
        match ServiceRecordRepo::create(pool, kind, &input).await {
            Ok(created) => {
                ids.push(Some(created.id));
                *created_count += 1;
            }
            Err(e) => {
                tracing::warn!(kind = kind.entity(), index = i, error = %e, "demo: failed to create record");
                ids.push(None);
            }
        }
    }
    ids
}

fn resolve(ids: &[Option<DbId>], index: Option<i64>) -> Option<DbId> {
    let index = usize::try_from(index?).ok()?;
    ids.get(index).copied().flatten()
}

fn log_attach(index: usize, result: Result<bool, sqlx::Error>) {
    if let Err(e) = result {
        tracing::warn!(index, error = %e, "demo: failed to attach file");
    }
}
