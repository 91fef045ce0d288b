use std::sync::Arc;

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use super::{
    Gateway,
    reply::{self, MessageReply, ProjectsReply, TablesReply},
};
use crate::{config::ClientConfig, core::error::GatewayError};

#[derive(Serialize)]
struct CreateProjectBody<'a> {
    project_name: &'a str,
}

#[derive(Serialize)]
struct IngestBody<'a> {
    file_path: &'a str,
}

/// Backend gateway over HTTP+JSON.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: reqwest::Client,
    config: Arc<ClientConfig>,
}

impl HttpGateway {
    pub fn new(config: ClientConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        let request = self.client.get(self.config.endpoint(path));
        let (status, body) = send(request, path).await?;
        reply::interpret(status, &body)
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, GatewayError> {
        let request = self.client.post(self.config.endpoint(path)).json(body);
        let (status, body) = send(request, path).await?;
        reply::interpret(status, &body)
    }
}

async fn send(
    request: reqwest::RequestBuilder,
    path: &str,
) -> Result<(u16, Vec<u8>), GatewayError> {
    let response = request.send().await.map_err(|e| {
        tracing::warn!(path, error = %e, "Backend request failed");
        GatewayError::Transport(e.to_string())
    })?;
    let status = response.status().as_u16();
    let body = response
        .bytes()
        .await
        .map_err(|e| GatewayError::Transport(format!("Failed to read response body: {e}")))?;
    tracing::debug!(path, status, bytes = body.len(), "Backend replied");
    Ok((status, body.to_vec()))
}

impl Gateway for HttpGateway {
    async fn list_projects(&self) -> Result<Option<Vec<String>>, GatewayError> {
        let reply: ProjectsReply = self.get("/").await?;
        Ok(reply.projects)
    }

    async fn create_project(&self, project_name: &str) -> Result<Option<String>, GatewayError> {
        let reply: MessageReply = self
            .post("/create-new-project", &CreateProjectBody { project_name })
            .await?;
        Ok(reply.message)
    }

    async fn ingest(&self, file_path: &str) -> Result<Option<String>, GatewayError> {
        let reply: MessageReply = self.post("/ingest-data", &IngestBody { file_path }).await?;
        Ok(reply.message)
    }

    async fn select_current_project(&self, project_id: i64) -> Result<(), GatewayError> {
        let path = format!("/select-current-project/{project_id}");
        let request = self.client.post(self.config.endpoint(&path));
        let (status, body) = send(request, &path).await?;
        reply::interpret_empty(status, &body)
    }

    async fn list_tables(&self) -> Result<Vec<Value>, GatewayError> {
        let reply: TablesReply = self.get("/project/dashboard").await?;
        Ok(reply.tables.unwrap_or_default())
    }
}
