mod http;
pub mod reply;

use serde_json::Value;

use crate::core::error::GatewayError;

pub use http::HttpGateway;

/// The backend endpoints the client flows call.
///
/// Implementations are cheap to clone; a clone talks to the same backend.
pub trait Gateway: Clone + Send + Sync + 'static {
    /// `GET /`. `None` when the reply has no `projects` field.
    fn list_projects(
        &self,
    ) -> impl Future<Output = Result<Option<Vec<String>>, GatewayError>> + Send;

    /// `POST /create-new-project`. Returns the server's message, if any.
    fn create_project(
        &self,
        project_name: &str,
    ) -> impl Future<Output = Result<Option<String>, GatewayError>> + Send;

    /// `POST /ingest-data` into whichever project the backend considers current.
    fn ingest(
        &self,
        file_path: &str,
    ) -> impl Future<Output = Result<Option<String>, GatewayError>> + Send;

    /// `POST /select-current-project/{id}`
    fn select_current_project(
        &self,
        project_id: i64,
    ) -> impl Future<Output = Result<(), GatewayError>> + Send;

    /// `GET /project/dashboard`. Raw entries; an absent field is an empty list.
    fn list_tables(&self) -> impl Future<Output = Result<Vec<Value>, GatewayError>> + Send;
}
