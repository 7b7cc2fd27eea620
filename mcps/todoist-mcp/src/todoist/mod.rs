//! Todoist REST API access
//!
//! Wire models, the [`TodoistApi`] trait and its reqwest implementation.

pub mod client;
pub mod error;
pub mod models;

#[cfg(test)]
pub use client::MockTodoistApi;
pub use client::{TodoistApi, TodoistClient};
pub use error::{TodoistError, TodoistResult};
pub use models::*;
