//! View-related API endpoints

use crate::ProjectBankClient;
use crate::error::Result;
use projectbank_core::dto::application::Application;

impl ProjectBankClient {
    // =============================================================================
    // View Records
    // =============================================================================

    /// Record a view of a project by a student
    ///
    /// Fails with a conflict error when the view was already recorded; repeat
    /// views are not counted twice.
    pub async fn add_view(&self, project_id: i32, student_id: i32) -> Result<()> {
        let url = format!("{}/projects/{}/views", self.base_url, project_id);
        let response = self
            .client
            .post(&url)
            .json(&Application { student_id })
            .send()
            .await?;

        self.handle_empty_response(response).await
    }

    /// Get the number of recorded views for a project
    pub async fn count_views(&self, project_id: i32) -> Result<i64> {
        let url = format!("{}/projects/{}/views", self.base_url, project_id);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Delete all views for a project
    pub async fn delete_views(&self, project_id: i32) -> Result<()> {
        let url = format!("{}/projects/{}/views", self.base_url, project_id);
        let response = self.client.delete(&url).send().await?;

        self.handle_empty_response(response).await
    }
}
