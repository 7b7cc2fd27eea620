//! Lazily constructed, shared Todoist client
//!
//! The server owns one [`ClientProvider`] and hands it to every handler.
//! The first successful [`ClientProvider::get_client`] builds the client
//! from the token; later calls reuse it without looking at the environment
//! again.

use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::info;

use crate::config::{TodoistConfig, TOKEN_ENV};
use crate::error::ToolError;
use crate::todoist::{TodoistApi, TodoistClient, TodoistError, TodoistResult};

type TokenSource = Box<dyn Fn() -> Option<String> + Send + Sync>;
type ClientFactory = Box<dyn Fn(&str) -> TodoistResult<Arc<dyn TodoistApi>> + Send + Sync>;

pub struct ClientProvider {
    client: OnceCell<Arc<dyn TodoistApi>>,
    token: TokenSource,
    factory: ClientFactory,
}

impl ClientProvider {
    /// Provider that reads TODOIST_TOKEN and builds a [`TodoistClient`]
    pub fn from_env(config: TodoistConfig) -> Self {
        Self::new(
            || std::env::var(TOKEN_ENV).ok(),
            move |token| {
                let client = TodoistClient::new(token, &config)?;
                Ok(Arc::new(client) as Arc<dyn TodoistApi>)
            },
        )
    }

    pub fn new<T, F>(token: T, factory: F) -> Self
    where
        T: Fn() -> Option<String> + Send + Sync + 'static,
        F: Fn(&str) -> TodoistResult<Arc<dyn TodoistApi>> + Send + Sync + 'static,
    {
        Self {
            client: OnceCell::new(),
            token: Box::new(token),
            factory: Box::new(factory),
        }
    }

    /// Provider that already holds a client
    pub fn with_client(client: Arc<dyn TodoistApi>) -> Self {
        Self {
            client: OnceCell::from(client),
            token: Box::new(|| -> Option<String> { None }),
            // Never consulted: the cell is already set.
            factory: Box::new(|_: &str| -> TodoistResult<Arc<dyn TodoistApi>> {
                Err(TodoistError::InvalidToken)
            }),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.client.initialized()
    }

    /// The shared client, building it on first use
    ///
    /// Fails with [`ToolError::Configuration`] while the token is absent or
    /// blank, and with [`ToolError::Remote`] if the client cannot be built.
    /// Concurrent first calls build a single client.
    pub async fn get_client(&self) -> Result<Arc<dyn TodoistApi>, ToolError> {
        if let Some(client) = self.client.get() {
            return Ok(client.clone());
        }

        let token = (self.token)()
            .filter(|t| !t.trim().is_empty())
            .ok_or(ToolError::Configuration(TOKEN_ENV))?;

        let client = self
            .client
            .get_or_try_init(|| async {
                info!("Initializing Todoist API client");
                (self.factory)(&token)
            })
            .await?;

        Ok(client.clone())
    }
}
