//! Todoist REST client
//!
//! [`TodoistApi`] is the set of remote operations the tools need;
//! [`TodoistClient`] implements it over HTTPS with reqwest. Handlers only
//! ever see the trait, so tests swap in a mock.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument};

#[cfg(test)]
use mockall::automock;

use super::error::{TodoistError, TodoistResult};
use super::models::{
    Comment, CommentLocator, FilterQuery, Label, NewLabel, NewProject, NewTask, Page, Project,
    Task, TaskQuery, TaskUpdate,
};
use crate::config::TodoistConfig;

/// Remote operations against a Todoist account
///
/// List methods return the first page only. Boolean results report whether
/// the service acknowledged the change.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TodoistApi: Send + Sync {
    async fn get_tasks(&self, query: &TaskQuery) -> TodoistResult<Page<Task>>;

    async fn filter_tasks(&self, query: &FilterQuery) -> TodoistResult<Page<Task>>;

    async fn get_task(&self, task_id: &str) -> TodoistResult<Task>;

    async fn add_task(&self, task: &NewTask) -> TodoistResult<Task>;

    async fn update_task(&self, task_id: &str, update: &TaskUpdate) -> TodoistResult<bool>;

    async fn complete_task(&self, task_id: &str) -> TodoistResult<bool>;

    async fn uncomplete_task(&self, task_id: &str) -> TodoistResult<bool>;

    async fn delete_task(&self, task_id: &str) -> TodoistResult<bool>;

    async fn get_projects(&self) -> TodoistResult<Page<Project>>;

    async fn get_project(&self, project_id: &str) -> TodoistResult<Project>;

    async fn add_project(&self, project: &NewProject) -> TodoistResult<Project>;

    async fn get_labels(&self) -> TodoistResult<Page<Label>>;

    async fn add_label(&self, label: &NewLabel) -> TodoistResult<Label>;

    async fn get_comments(&self, locator: &CommentLocator) -> TodoistResult<Page<Comment>>;
}

/// HTTPS client for the Todoist REST API
pub struct TodoistClient {
    http: Client,
    base_url: String,
}

impl TodoistClient {
    /// Build a client that authenticates every request with `token`
    pub fn new(token: &str, config: &TodoistConfig) -> TodoistResult<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token.trim()))
            .map_err(|_| TodoistError::InvalidToken)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let mut builder = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().map_err(TodoistError::ClientBuild)?;

        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Send a request and decode its JSON body
    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> TodoistResult<T> {
        let response = check_status(request.send().await?).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Send a request whose response carries no useful body
    async fn acknowledge(&self, request: RequestBuilder) -> TodoistResult<bool> {
        check_status(request.send().await?).await?;
        Ok(true)
    }
}

async fn check_status(response: Response) -> TodoistResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = match body.trim() {
        "" => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
        text => text.to_string(),
    };
    error!(%status, message = %message, "Todoist request failed");
    Err(TodoistError::Api { status, message })
}

#[async_trait]
impl TodoistApi for TodoistClient {
    #[instrument(skip(self))]
    async fn get_tasks(&self, query: &TaskQuery) -> TodoistResult<Page<Task>> {
        debug!("GET tasks");
        self.fetch(self.http.get(self.url("tasks")).query(&query.to_pairs()))
            .await
    }

    #[instrument(skip(self))]
    async fn filter_tasks(&self, query: &FilterQuery) -> TodoistResult<Page<Task>> {
        debug!("GET tasks/filter");
        self.fetch(
            self.http
                .get(self.url("tasks/filter"))
                .query(&query.to_pairs()),
        )
        .await
    }

    #[instrument(skip(self))]
    async fn get_task(&self, task_id: &str) -> TodoistResult<Task> {
        self.fetch(self.http.get(self.url(&format!("tasks/{}", task_id))))
            .await
    }

    #[instrument(skip(self, task), fields(content = %task.content))]
    async fn add_task(&self, task: &NewTask) -> TodoistResult<Task> {
        self.fetch(self.http.post(self.url("tasks")).json(task)).await
    }

    #[instrument(skip(self))]
    async fn update_task(&self, task_id: &str, update: &TaskUpdate) -> TodoistResult<bool> {
        self.acknowledge(
            self.http
                .post(self.url(&format!("tasks/{}", task_id)))
                .json(update),
        )
        .await
    }

    #[instrument(skip(self))]
    async fn complete_task(&self, task_id: &str) -> TodoistResult<bool> {
        self.acknowledge(self.http.post(self.url(&format!("tasks/{}/close", task_id))))
            .await
    }

    #[instrument(skip(self))]
    async fn uncomplete_task(&self, task_id: &str) -> TodoistResult<bool> {
        self.acknowledge(self.http.post(self.url(&format!("tasks/{}/reopen", task_id))))
            .await
    }

    #[instrument(skip(self))]
    async fn delete_task(&self, task_id: &str) -> TodoistResult<bool> {
        self.acknowledge(self.http.delete(self.url(&format!("tasks/{}", task_id))))
            .await
    }

    #[instrument(skip(self))]
    async fn get_projects(&self) -> TodoistResult<Page<Project>> {
        self.fetch(self.http.get(self.url("projects"))).await
    }

    #[instrument(skip(self))]
    async fn get_project(&self, project_id: &str) -> TodoistResult<Project> {
        self.fetch(self.http.get(self.url(&format!("projects/{}", project_id))))
            .await
    }

    #[instrument(skip(self))]
    async fn add_project(&self, project: &NewProject) -> TodoistResult<Project> {
        self.fetch(self.http.post(self.url("projects")).json(project))
            .await
    }

    #[instrument(skip(self))]
    async fn get_labels(&self) -> TodoistResult<Page<Label>> {
        self.fetch(self.http.get(self.url("labels"))).await
    }

    #[instrument(skip(self))]
    async fn add_label(&self, label: &NewLabel) -> TodoistResult<Label> {
        self.fetch(self.http.post(self.url("labels")).json(label)).await
    }

    #[instrument(skip(self))]
    async fn get_comments(&self, locator: &CommentLocator) -> TodoistResult<Page<Comment>> {
        self.fetch(
            self.http
                .get(self.url("comments"))
                .query(&[locator.to_pair()]),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn client_for(server: &MockServer) -> TodoistClient {
        let config = TodoistConfig {
            api_url: server.url("/api/v1/"),
            ..Default::default()
        };
        TodoistClient::new("secret-token", &config).unwrap()
    }

    #[test]
    fn test_rejects_token_with_newline() {
        let result = TodoistClient::new("abc\ndef", &TodoistConfig::default());
        assert!(matches!(result, Err(TodoistError::InvalidToken)));
    }

    #[tokio::test]
    async fn test_get_tasks_sends_filters_and_token() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/v1/tasks")
                    .header("Authorization", "Bearer secret-token")
                    .query_param("project_id", "p1")
                    .query_param("ids", "1,2");
                then.status(200).json_body(json!({
                    "results": [{"id": "1", "content": "a"}, {"id": "2", "content": "b"}],
                    "next_cursor": null
                }));
            })
            .await;

        let query = TaskQuery {
            project_id: Some("p1".to_string()),
            ids: Some(vec!["1".to_string(), "2".to_string()]),
            ..Default::default()
        };
        let page = client_for(&server).get_tasks(&query).await.unwrap();

        mock.assert_async().await;
        assert_eq!(page.results.len(), 2);
        assert!(!page.has_more());
    }

    #[tokio::test]
    async fn test_filter_tasks_uses_filter_endpoint() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/v1/tasks/filter")
                    .query_param("query", "today | overdue")
                    .query_param("lang", "en");
                then.status(200).json_body(json!({"results": []}));
            })
            .await;

        let query = FilterQuery {
            query: "today | overdue".to_string(),
            lang: Some("en".to_string()),
        };
        let page = client_for(&server).filter_tasks(&query).await.unwrap();

        mock.assert_async().await;
        assert!(page.results.is_empty());
    }

    #[tokio::test]
    async fn test_add_task_posts_only_set_fields() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/v1/tasks")
                    .json_body(json!({"content": "Buy milk", "due_string": "tomorrow"}));
                then.status(200)
                    .json_body(json!({"id": "99", "content": "Buy milk"}));
            })
            .await;

        let task = NewTask {
            content: "Buy milk".to_string(),
            due_string: Some("tomorrow".to_string()),
            ..Default::default()
        };
        let created = client_for(&server).add_task(&task).await.unwrap();

        mock.assert_async().await;
        assert_eq!(created.id, "99");
    }

    #[tokio::test]
    async fn test_close_and_delete_acknowledge_no_content() {
        let server = MockServer::start_async().await;
        let close = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/v1/tasks/t1/close");
                then.status(204);
            })
            .await;
        let delete = server
            .mock_async(|when, then| {
                when.method(DELETE).path("/api/v1/tasks/t1");
                then.status(204);
            })
            .await;

        let client = client_for(&server);
        assert!(client.complete_task("t1").await.unwrap());
        assert!(client.delete_task("t1").await.unwrap());

        close.assert_async().await;
        delete.assert_async().await;
    }

    #[tokio::test]
    async fn test_error_status_keeps_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v1/tasks/missing");
                then.status(404).body("Task not found");
            })
            .await;

        let err = client_for(&server).get_task("missing").await.unwrap_err();
        assert_eq!(err.to_string(), "404 Not Found: Task not found");
    }

    #[tokio::test]
    async fn test_error_status_without_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/v1/tasks/t1/reopen");
                then.status(403);
            })
            .await;

        let err = client_for(&server).uncomplete_task("t1").await.unwrap_err();
        assert_eq!(err.to_string(), "403 Forbidden: Forbidden");
    }

    #[tokio::test]
    async fn test_unexpected_body_is_parse_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v1/labels");
                then.status(200).json_body(json!({"labels": []}));
            })
            .await;

        let err = client_for(&server).get_labels().await.unwrap_err();
        let TodoistError::Parse(ref inner) = err else {
            panic!("expected a parse error, got {:?}", err);
        };
        assert_eq!(err.to_string(), inner.to_string());
    }

    #[tokio::test]
    async fn test_transport_error_message_is_unwrapped() {
        // Nothing listens on the discard port.
        let config = TodoistConfig {
            api_url: "http://127.0.0.1:9/api/v1".to_string(),
            ..Default::default()
        };
        let client = TodoistClient::new("secret-token", &config).unwrap();

        let err = client.get_task("1").await.unwrap_err();
        let TodoistError::Http(ref inner) = err else {
            panic!("expected a transport error, got {:?}", err);
        };
        assert_eq!(err.to_string(), inner.to_string());
        assert!(err.to_string().starts_with("error sending request"));
    }

    #[tokio::test]
    async fn test_comments_by_project() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/v1/comments")
                    .query_param("project_id", "p9");
                then.status(200).json_body(json!({
                    "results": [{"id": "c1", "project_id": "p9", "content": "hello"}]
                }));
            })
            .await;

        let page = client_for(&server)
            .get_comments(&CommentLocator::Project("p9".to_string()))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(page.results[0].content, "hello");
    }
}
