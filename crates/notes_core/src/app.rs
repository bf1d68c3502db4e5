//! Composition root.
//!
//! # Responsibility
//! - Build the one store, repository and theme preference of a process.
//! - Hand screen states their collaborators explicitly.
//!
//! # Invariants
//! - A `NotesApp` owns exactly one [`LiveNoteStore`]; all states share it.
//! - No global mutable singletons besides the logger.

use crate::config::{ConfigError, CoreConfig};
use crate::db::{open_db_in_memory, open_db_with_policy, DbError};
use crate::logging::{default_log_level, init_logging};
use crate::model::note::NoteId;
use crate::model::timestamp::{Clock, SystemClock};
use crate::repo::live_store::LiveNoteStore;
use crate::repo::note_repo::NoteRepository;
use crate::repo::note_store::RepoError;
use crate::state::detail::DetailState;
use crate::state::editor::EditorState;
use crate::state::home::HomeState;
use crate::state::theme::ThemePreference;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use tokio::runtime::Handle;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Debug)]
pub enum CoreError {
    Config(ConfigError),
    Logging(String),
    Db(DbError),
    Repo(RepoError),
    /// `NotesApp::open` was called outside a Tokio runtime.
    NoRuntime,
}

impl Display for CoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::Logging(message) => write!(f, "failed to initialize logging: {message}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::NoRuntime => write!(f, "no tokio runtime is available"),
        }
    }
}

impl Error for CoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::Logging(_) | Self::NoRuntime => None,
        }
    }
}

impl From<ConfigError> for CoreError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<DbError> for CoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<RepoError> for CoreError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// The running application's state layer.
pub struct NotesApp {
    repository: NoteRepository,
    theme: ThemePreference,
    clock: Arc<dyn Clock>,
    runtime: Handle,
}

impl NotesApp {
    /// Opens the store described by `config` using the system clock.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn open(config: &CoreConfig) -> CoreResult<Self> {
        Self::open_with_clock(config, Arc::new(SystemClock))
    }

    pub fn open_with_clock(config: &CoreConfig, clock: Arc<dyn Clock>) -> CoreResult<Self> {
        config.validate()?;
        let runtime = Handle::try_current().map_err(|_| CoreError::NoRuntime)?;

        if let Some(log_dir) = &config.log_dir {
            let level = config.log_level.as_deref().unwrap_or(default_log_level());
            init_logging(level, log_dir).map_err(CoreError::Logging)?;
        }

        let conn = match &config.database_path {
            Some(path) => open_db_with_policy(path, config.schema_policy)?,
            None => open_db_in_memory()?,
        };
        let store = LiveNoteStore::new(conn)?;
        info!(
            "event=app_open module=app status=ok storage={}",
            if config.database_path.is_some() { "file" } else { "memory" }
        );

        Ok(Self {
            repository: NoteRepository::new(store),
            theme: ThemePreference::default(),
            clock,
            runtime,
        })
    }

    pub fn repository(&self) -> &NoteRepository {
        &self.repository
    }

    pub fn theme(&self) -> &ThemePreference {
        &self.theme
    }

    pub fn home_state(&self) -> HomeState {
        HomeState::new(self.repository.clone(), self.runtime.clone())
    }

    pub fn editor_state(&self) -> EditorState {
        EditorState::new(
            self.repository.clone(),
            Arc::clone(&self.clock),
            self.runtime.clone(),
        )
    }

    pub fn detail_state(&self, note_id: NoteId) -> DetailState {
        DetailState::new(&self.repository, &self.runtime, note_id)
    }
}
