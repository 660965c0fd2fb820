//! User-related API endpoints

use crate::ProjectBankClient;
use crate::error::Result;
use projectbank_core::dto::user::UserDto;

impl ProjectBankClient {
    // =============================================================================
    // User Lookup
    // =============================================================================

    /// Look up a user by email
    ///
    /// # Arguments
    /// * `email` - The user's email address
    ///
    /// # Returns
    /// The user, or a not-found error (check [`ClientError::is_not_found`])
    ///
    /// [`ClientError::is_not_found`]: crate::ClientError::is_not_found
    pub async fn user_by_email(&self, email: &str) -> Result<UserDto> {
        let url = format!("{}/users", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("email", email)])
            .send()
            .await?;

        self.handle_response(response).await
    }
}
