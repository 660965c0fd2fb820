//! Application-related API endpoints

use crate::ProjectBankClient;
use crate::error::Result;
use projectbank_core::dto::application::Application;
use projectbank_core::dto::project::ProjectSummary;

impl ProjectBankClient {
    // =============================================================================
    // Applications
    // =============================================================================

    /// Apply a student to a project
    ///
    /// Fails with a conflict error (check [`ClientError::is_conflict`]) when
    /// the student already applied.
    ///
    /// [`ClientError::is_conflict`]: crate::ClientError::is_conflict
    ///
    /// # Arguments
    /// * `project_id` - The project to apply to
    /// * `student_id` - The applying student
    pub async fn apply_to_project(&self, project_id: i32, student_id: i32) -> Result<()> {
        tracing::debug!("Applying student {} to project {}", student_id, project_id);

        let url = format!("{}/projects/{}/apply", self.base_url, project_id);
        let response = self
            .client
            .post(&url)
            .json(&Application { student_id })
            .send()
            .await?;

        self.handle_empty_response(response).await
    }

    /// Check whether a student has applied to a project
    pub async fn has_applied(&self, project_id: i32, student_id: i32) -> Result<bool> {
        let url = format!(
            "{}/projects/{}/applications/{}",
            self.base_url, project_id, student_id
        );
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Get the number of applications for a project
    pub async fn count_applications(&self, project_id: i32) -> Result<i64> {
        let url = format!("{}/projects/{}/applications", self.base_url, project_id);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Delete all applications for a project
    pub async fn delete_applications(&self, project_id: i32) -> Result<()> {
        let url = format!("{}/projects/{}/applications", self.base_url, project_id);
        let response = self.client.delete(&url).send().await?;

        self.handle_empty_response(response).await
    }

    /// List the projects a student has applied to
    pub async fn applied_projects(&self, student_id: i32) -> Result<Vec<ProjectSummary>> {
        let url = format!("{}/students/{}/applications", self.base_url, student_id);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }
}
