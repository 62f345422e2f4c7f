//! Postline Core - a layered message/user pipeline
//!
//! This crate implements the core logic following hexagonal architecture:
//!
//! - **domain**: Core business entities (Message, User) and their validity rules
//! - **ports**: Trait definitions for external dependencies (Repository, Clock, IdGenerator)
//! - **services**: Use cases orchestrating validation and persistence
//! - **presenters**: Display-ready projections of entities
//! - **adapters**: Concrete implementations (in-memory, JSON documents, system clock)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod logging;
pub mod ports;
pub mod presenters;
pub mod services;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use adapters::{InMemoryRepository, JsonFileRepository, SystemClock, UuidGenerator};
use config::{Config, StoreBackend};
use ports::{Clock, IdGenerator, Repository};
use presenters::TimeDisplay;
use services::*;

// Re-export commonly used types at crate root
pub use domain::result::{Error, OperationResult, StorageError};
pub use domain::{Entity, EntityId, Message, User};
pub use presenters::{MessagePresenter, MessageViewModel, UserPresenter, UserViewModel};

/// Main context for Postline operations
///
/// This is the composition root: it builds the repositories and ports once
/// and hands them to every service. Nothing is global.
pub struct PostlineContext {
    pub config: Config,
    pub messages: Arc<dyn Repository<Message>>,
    pub users: Arc<dyn Repository<User>>,
    pub send_message: SendMessageService,
    pub message_query: MessageQueryService,
    pub create_user: CreateUserService,
    pub user_query: UserQueryService,
    pub status_service: StatusService,
    pub message_presenter: MessagePresenter,
    pub user_presenter: UserPresenter,
}

impl PostlineContext {
    /// Create a context backed by the configured store in `data_dir`
    pub fn new(data_dir: &Path) -> Result<Self> {
        Self::from_config(data_dir, Config::load(data_dir)?)
    }

    /// Create a context from an already loaded config
    ///
    /// Lets the caller install logging before any store is opened.
    pub fn from_config(data_dir: &Path, config: Config) -> Result<Self> {
        debug!(dir = %data_dir.display(), store = %config.store, "Opening stores");
        let messages: Arc<dyn Repository<Message>>;
        let users: Arc<dyn Repository<User>>;
        match config.store {
            StoreBackend::File => {
                messages = Arc::new(JsonFileRepository::<Message>::in_dir(data_dir)?);
                users = Arc::new(JsonFileRepository::<User>::in_dir(data_dir)?);
            }
            StoreBackend::Memory => {
                messages = Arc::new(InMemoryRepository::<Message>::new());
                users = Arc::new(InMemoryRepository::<User>::new());
            }
        }

        Self::with_repositories(config, messages, users)
    }

    /// Create a context with empty in-memory stores and default settings
    pub fn in_memory() -> Result<Self> {
        let config = Config {
            store: StoreBackend::Memory,
            ..Config::default()
        };
        Self::with_repositories(
            config,
            Arc::new(InMemoryRepository::<Message>::new()),
            Arc::new(InMemoryRepository::<User>::new()),
        )
    }

    /// Wire services around caller-supplied repositories
    pub fn with_repositories(
        config: Config,
        messages: Arc<dyn Repository<Message>>,
        users: Arc<dyn Repository<User>>,
    ) -> Result<Self> {
        Self::with_ports(config, messages, users, Arc::new(SystemClock), Arc::new(UuidGenerator))
    }

    /// Wire services around caller-supplied repositories, clock and id source
    pub fn with_ports(
        config: Config,
        messages: Arc<dyn Repository<Message>>,
        users: Arc<dyn Repository<User>>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Result<Self> {
        let time = TimeDisplay::new(&config.time_format, config.utc_offset_minutes)?;

        let send_message =
            SendMessageService::new(Arc::clone(&messages), Arc::clone(&clock), Arc::clone(&ids));
        let message_query = MessageQueryService::new(Arc::clone(&messages));
        let create_user = CreateUserService::new(Arc::clone(&users), clock, ids);
        let user_query = UserQueryService::new(Arc::clone(&users));
        let status_service = StatusService::new(Arc::clone(&messages), Arc::clone(&users));

        Ok(Self {
            config,
            messages,
            users,
            send_message,
            message_query,
            create_user,
            user_query,
            status_service,
            message_presenter: MessagePresenter::new(time.clone()),
            user_presenter: UserPresenter::new(time),
        })
    }
}
