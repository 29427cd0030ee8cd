//! REST-backed task repository
//!
//! Talks to the task backend over HTTP:
//! `GET/POST /tasks`, `GET/PUT/DELETE /tasks/{id}`.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use tracing::{debug, info, warn};

use cleanslate_core::task::{MissingTaskPolicy, Task, TaskRepository};
use cleanslate_core::{Error, Result};

use crate::dto::TaskDto;
use crate::mapper::{to_domain, to_wire};

/// Task repository that forwards every call to the REST backend
#[derive(Debug, Clone)]
pub struct RemoteTaskRepository {
    client: Client,
    base_url: String,
    missing_task_policy: MissingTaskPolicy,
}

impl RemoteTaskRepository {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            missing_task_policy: MissingTaskPolicy::default(),
        }
    }

    /// Set how deletes of unknown ids are reported
    pub fn with_missing_task_policy(mut self, policy: MissingTaskPolicy) -> Self {
        self.missing_task_policy = policy;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn tasks_url(&self) -> String {
        format!("{}/tasks", self.base_url)
    }

    fn task_url(&self, id: &str) -> String {
        format!("{}/tasks/{}", self.base_url, urlencoding::encode(id))
    }
}

fn transport_error(err: reqwest::Error) -> Error {
    Error::transport(err.to_string())
}

/// Turns a non-2xx response into an error. A 404 on a single-task route
/// becomes `NotFound`.
async fn ensure_success(response: Response, id: Option<&str>) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if let (StatusCode::NOT_FOUND, Some(id)) = (status, id) {
        return Err(Error::not_found(id));
    }

    let body = response.text().await.unwrap_or_default();
    let message = if body.trim().is_empty() {
        format!("Server returned {}", status)
    } else {
        format!("Server returned {}: {}", status, body.trim())
    };
    warn!("{}", message);
    Err(Error::transport(message))
}

async fn decode_task(response: Response) -> Result<Task> {
    let dto: TaskDto = response.json().await.map_err(transport_error)?;
    Ok(to_domain(dto))
}

#[async_trait]
impl TaskRepository for RemoteTaskRepository {
    async fn list_tasks(&self) -> Result<Vec<Task>> {
        debug!("GET {}", self.tasks_url());
        let response = self
            .client
            .get(self.tasks_url())
            .send()
            .await
            .map_err(transport_error)?;
        let response = ensure_success(response, None).await?;

        let dtos: Vec<TaskDto> = response.json().await.map_err(transport_error)?;
        Ok(dtos.into_iter().map(to_domain).collect())
    }

    async fn get_task(&self, id: &str) -> Result<Task> {
        debug!("GET {}", self.task_url(id));
        let response = self
            .client
            .get(self.task_url(id))
            .send()
            .await
            .map_err(transport_error)?;
        decode_task(ensure_success(response, Some(id)).await?).await
    }

    async fn create_task(&self, draft: Task) -> Result<Task> {
        debug!("POST {}", self.tasks_url());
        let response = self
            .client
            .post(self.tasks_url())
            .json(&to_wire(draft))
            .send()
            .await
            .map_err(transport_error)?;
        let created = decode_task(ensure_success(response, None).await?).await?;
        info!("Created task {}", created.id);
        Ok(created)
    }

    async fn update_task(&self, task: Task) -> Result<Task> {
        let url = self.task_url(&task.id);
        let id = task.id.clone();
        debug!("PUT {}", url);
        let response = self
            .client
            .put(url)
            .json(&to_wire(task))
            .send()
            .await
            .map_err(transport_error)?;
        decode_task(ensure_success(response, Some(&id)).await?).await
    }

    async fn delete_task(&self, id: &str) -> Result<()> {
        debug!("DELETE {}", self.task_url(id));
        let response = self
            .client
            .delete(self.task_url(id))
            .send()
            .await
            .map_err(transport_error)?;

        match ensure_success(response, Some(id)).await {
            Ok(_) => {
                info!("Deleted task {}", id);
                Ok(())
            }
            Err(Error::NotFound(_)) if self.missing_task_policy == MissingTaskPolicy::Ignore => {
                debug!("Task {} already absent on server", id);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}
