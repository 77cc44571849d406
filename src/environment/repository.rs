use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{from_slice, to_string_pretty};

use super::types::StoredSession;

const SESSION_PATH: &str = "session.json";

/// Holds the persisted session credential. The in-memory cell is the
/// source of truth; the disk copy follows it best-effort.
#[derive(Clone)]
pub struct Repository {
    session: Arc<Mutex<Option<StoredSession>>>,
    persist: bool,
}

impl Repository {
    pub fn new() -> Self {
        let session = read(SESSION_PATH).ok().flatten();
        Self {
            session: Arc::new(Mutex::new(session)),
            persist: true,
        }
    }

    /// A repository that never touches the disk. Used in tests and by
    /// embedders that manage credentials themselves.
    pub fn ephemeral() -> Self {
        Self {
            session: Arc::new(Mutex::new(None)),
            persist: false,
        }
    }

    pub fn session(&self) -> Option<StoredSession> {
        self.session.lock().ok()?.clone()
    }

    pub fn store_session(&self, session: StoredSession) -> Result<(), String> {
        let mut guard = self
            .session
            .lock()
            .map_err(|e| format!("Session Data Error: {e:?}"))?;
        *guard = Some(session);
        if self.persist {
            if let Some(ref session) = *guard {
                if let Err(e) = write(SESSION_PATH, session) {
                    log::error!("Could not save session: {e:?}");
                }
            }
        }
        Ok(())
    }

    pub fn clear_session(&self) -> Result<(), String> {
        let mut guard = self
            .session
            .lock()
            .map_err(|e| format!("Session Data Error: {e:?}"))?;
        *guard = None;
        if self.persist {
            let path = data_directory().join(SESSION_PATH);
            if path.exists() {
                if let Err(e) = std::fs::remove_file(&path) {
                    log::error!("Could not remove session: {e:?}");
                }
            }
        }
        Ok(())
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new()
    }
}

fn read<T: DeserializeOwned>(name: &str) -> Result<Option<T>, String> {
    let data_path = data_directory().join(name);
    if !data_path.exists() {
        return Ok(None);
    };
    let data = std::fs::read(&data_path)
        .map_err(|e| format!("Could not read {}: {e:?}", data_path.display()))?;
    let obj: T =
        from_slice(&data).map_err(|e| format!("Could not parse {}: {e:?}", data_path.display()))?;
    Ok(Some(obj))
}

fn write<T: Serialize>(name: &str, value: &T) -> Result<(), String> {
    let data_path = data_directory().join(name);
    let data = to_string_pretty(&value).map_err(|e| format!("Could not parse value:{e:?}"))?;
    std::fs::write(&data_path, data)
        .map_err(|e| format!("Could not write to {}: {e:?}", data_path.display()))?;
    Ok(())
}

fn data_directory() -> PathBuf {
    use directories_next::ProjectDirs;
    if let Some(proj_dirs) = ProjectDirs::from("com", "atelier", "atelier") {
        let dirs = proj_dirs.config_dir().to_path_buf();
        if !dirs.exists() {
            if let Err(e) = std::fs::create_dir_all(&dirs) {
                log::error!("Could not create directory {}: {e:?}", dirs.display());
                panic!("Couldn't find a folder to save data")
            }
        }
        dirs
    } else {
        panic!("Couldn't find a folder to save data")
    }
}
