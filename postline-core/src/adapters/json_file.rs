//! JSON document store repository implementation
//!
//! Each entity kind lives in its own pretty-printed JSON array
//! (`messages.json`, `users.json`). Concurrent access is serialized with a
//! sidecar lock file (`messages.json.lock`): writers take an exclusive lock,
//! readers a shared one. Writes go to a temp file in the same directory and
//! are persisted with an atomic rename, so a reader never observes a
//! partially-written document.

use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, ErrorKind, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use fs2::FileExt;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::domain::result::StorageError;
use crate::domain::{Entity, EntityId};
use crate::ports::{Repository, StorageResult};

/// Repository persisting entities as a JSON document on local disk
pub struct JsonFileRepository<E> {
    path: PathBuf,
    _entity: PhantomData<fn() -> E>,
}

impl<E> JsonFileRepository<E>
where
    E: Entity + Serialize + DeserializeOwned,
{
    /// Open (or lazily create) the document at `path`
    ///
    /// The parent directory is created if missing; the document itself is
    /// only written on the first save.
    pub fn new(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(Self {
            path,
            _entity: PhantomData,
        })
    }

    /// Open the conventional document for this entity kind inside `dir`
    pub fn in_dir(dir: &Path) -> StorageResult<Self> {
        Self::new(dir.join(format!("{}s.json", E::KIND)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run blocking file work off the async executor
    async fn blocking<T, F>(&self, work: F) -> StorageResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&Path) -> StorageResult<T> + Send + 'static,
    {
        let path = self.path.clone();
        let result = tokio::task::spawn_blocking(move || work(&path))
            .await
            .map_err(|e| StorageError::Task(e.to_string()))?;
        if let Err(e) = &result {
            warn!(kind = E::KIND, path = %self.path.display(), error = %e, "Document store failure");
        }
        result
    }
}

fn lock_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".lock");
    path.with_file_name(name)
}

fn open_lock(path: &Path) -> StorageResult<File> {
    let lock = OpenOptions::new()
        .create(true)
        .truncate(false)
        .write(true)
        .open(lock_path(path))?;
    Ok(lock)
}

/// Read the document; a missing file is an empty store
fn read_records<E: DeserializeOwned>(path: &Path) -> StorageResult<Vec<E>> {
    match File::open(path) {
        Ok(file) => Ok(serde_json::from_reader(BufReader::new(file))?),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(e.into()),
    }
}

fn write_records<E: Serialize>(path: &Path, records: &[E]) -> StorageResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    serde_json::to_writer_pretty(&mut tmp, records)?;
    tmp.write_all(b"\n")?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| StorageError::Io(e.error))?;
    Ok(())
}

#[async_trait]
impl<E> Repository<E> for JsonFileRepository<E>
where
    E: Entity + Serialize + DeserializeOwned,
{
    async fn save(&self, entity: E) -> StorageResult<()> {
        let id = entity.id().clone();
        let replaced = self
            .blocking(move |path| {
                let lock = open_lock(path)?;
                lock.lock_exclusive()?;

                let mut records: Vec<E> = read_records(path)?;
                let replaced = match records.iter().position(|r| r.id() == entity.id()) {
                    Some(pos) => {
                        records[pos] = entity;
                        true
                    }
                    None => {
                        records.push(entity);
                        false
                    }
                };
                write_records(path, &records)?;

                lock.unlock()?;
                Ok(replaced)
            })
            .await?;
        debug!(kind = E::KIND, %id, replaced, "Saved");
        Ok(())
    }

    async fn find_by_id(&self, id: &EntityId) -> StorageResult<Option<E>> {
        let id = id.clone();
        self.blocking(move |path| {
            let lock = open_lock(path)?;
            lock.lock_shared()?;
            let records: Vec<E> = read_records(path)?;
            lock.unlock()?;
            Ok(records.into_iter().find(|r| r.id() == &id))
        })
        .await
    }

    async fn list(&self) -> StorageResult<Vec<E>> {
        self.blocking(|path| {
            let lock = open_lock(path)?;
            lock.lock_shared()?;
            let records = read_records(path)?;
            lock.unlock()?;
            Ok(records)
        })
        .await
    }
}
