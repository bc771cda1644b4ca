//! Project Endpoints

use crate::error::{ApiError, ApiResult};
use crate::models::{CreateProjectArgs, Project, ProjectId};
use super::{ApiClient, ApiRequest, Method, Transport};

pub const PROJECTS_PATH: &str = "/projects/";

pub fn project_path(id: ProjectId) -> String {
    format!("/projects/{}", id)
}

impl<T: Transport> ApiClient<T> {
    /// GET /projects/
    pub async fn list_projects(&self) -> ApiResult<Vec<Project>> {
        let response = self.send(ApiRequest::new(Method::Get, PROJECTS_PATH)).await?;
        response.json()
    }

    /// POST /projects/. The created project in the body is ignored; callers refresh.
    pub async fn create_project(&self, args: &CreateProjectArgs) -> ApiResult<()> {
        let body = serde_json::to_string(args).map_err(|e| ApiError::Decode(e.to_string()))?;
        let request = ApiRequest::new(Method::Post, PROJECTS_PATH).with_json(body);
        self.send(request).await?.error_for_status()?;
        Ok(())
    }

    /// DELETE /projects/{id}
    pub async fn delete_project(&self, id: ProjectId) -> ApiResult<()> {
        self.send(ApiRequest::new(Method::Delete, project_path(id)))
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::FakeTransport;
    use crate::models::CreatePlaceArgs;

    #[tokio::test]
    async fn test_list_projects() {
        let transport = FakeTransport::new();
        transport.respond(200, r#"[{"id":1,"name":"Trip","is_completed":false,"places":[]}]"#);
        let client = ApiClient::new(transport.clone());

        let projects = client.list_projects().await.unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name, "Trip");
        assert_eq!(transport.calls(), vec!["GET /projects/"]);
        assert_eq!(transport.requests.borrow()[0].body, None);
    }

    #[tokio::test]
    async fn test_list_projects_non_2xx() {
        let transport = FakeTransport::new();
        transport.respond(500, "Internal Server Error");
        let client = ApiClient::new(transport);

        let err = client.list_projects().await.unwrap_err();
        assert_eq!(err, ApiError::Status { status: 500, detail: None });
    }

    #[tokio::test]
    async fn test_create_project_body() {
        let transport = FakeTransport::new();
        transport.respond(200, r#"{"id":7,"name":"Trip","is_completed":false,"places":[]}"#);
        let client = ApiClient::new(transport.clone());

        let args = CreateProjectArgs {
            name: "Trip".into(),
            description: "".into(),
            start_date: "2026-05-01".into(),
            places: vec![CreatePlaceArgs { external_id: "27992".into(), notes: "Хочу побачити".into() }],
        };
        client.create_project(&args).await.unwrap();

        let sent = transport.requests.borrow()[0].clone();
        assert_eq!(sent.method, Method::Post);
        assert_eq!(sent.path, "/projects/");
        let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["start_date"], "2026-05-01");
        assert_eq!(body["places"][0]["external_id"], "27992");
    }

    #[tokio::test]
    async fn test_delete_project_rejected() {
        let transport = FakeTransport::new();
        transport.respond(400, r#"{"detail":"Cannot delete project with visited places"}"#);
        let client = ApiClient::new(transport.clone());

        let err = client.delete_project(4).await.unwrap_err();
        assert_eq!(err.detail(), Some("Cannot delete project with visited places"));
        assert_eq!(transport.calls(), vec!["DELETE /projects/4"]);
    }
}
