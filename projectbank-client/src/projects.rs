//! Project-related API endpoints

use crate::ProjectBankClient;
use crate::error::Result;
use projectbank_core::dto::project::{CreateProject, ProjectDto, ProjectSummary};

impl ProjectBankClient {
    // =============================================================================
    // Project Management
    // =============================================================================

    /// Create a new project posting
    ///
    /// # Arguments
    /// * `req` - The project creation request
    ///
    /// # Returns
    /// The created project
    ///
    /// # Example
    /// ```no_run
    /// # use projectbank_client::ProjectBankClient;
    /// # use projectbank_core::dto::project::CreateProject;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = ProjectBankClient::new("http://localhost:8080");
    /// let project = client.create_project(CreateProject {
    ///     name: "Thesis project".to_string(),
    ///     description: "An open thesis topic".to_string(),
    ///     author_id: 1,
    /// }).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_project(&self, req: CreateProject) -> Result<ProjectDto> {
        let url = format!("{}/projects", self.base_url);
        let response = self.client.post(&url).json(&req).send().await?;

        self.handle_response(response).await
    }

    /// List all projects
    ///
    /// # Returns
    /// Simplified summaries of every project
    pub async fn list_projects(&self) -> Result<Vec<ProjectSummary>> {
        let url = format!("{}/projects", self.base_url);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// List projects created by a given author
    ///
    /// # Arguments
    /// * `author_id` - The supervisor's user id
    pub async fn projects_by_author(&self, author_id: i32) -> Result<Vec<ProjectSummary>> {
        let url = format!("{}/projects", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("author", author_id)])
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Get a project by ID
    ///
    /// # Arguments
    /// * `project_id` - The project id
    ///
    /// # Returns
    /// The full project details
    pub async fn get_project(&self, project_id: i32) -> Result<ProjectDto> {
        let url = format!("{}/projects/{}", self.base_url, project_id);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Delete a project along with its applications and views
    ///
    /// # Arguments
    /// * `project_id` - The project id to delete
    pub async fn delete_project(&self, project_id: i32) -> Result<()> {
        tracing::debug!("Deleting project {}", project_id);

        let url = format!("{}/projects/{}", self.base_url, project_id);
        let response = self.client.delete(&url).send().await?;

        self.handle_empty_response(response).await
    }
}
