//! CRUD calls for the `/startups` resource.
//!
//! These are plain pass-throughs: the server owns the records, the client
//! holds transient copies for display and editing. Fallback error messages
//! match what the views show when the server sends no `message` field.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Startup, StartupPayload};

impl ApiClient {
    /// Fetch all startups.
    pub async fn list_startups(&self) -> Result<Vec<Startup>, ApiError> {
        self.get_json("/startups", "Failed to fetch data").await
    }

    /// Fetch a single startup by id.
    pub async fn get_startup(&self, id: &str) -> Result<Startup, ApiError> {
        self.get_json(&format!("/startups/{id}"), "Failed to fetch data")
            .await
    }

    /// Create a startup, returning the created record (with its new id, so
    /// the caller can navigate straight to its details page).
    pub async fn create_startup(&self, payload: &StartupPayload) -> Result<Startup, ApiError> {
        self.post_json("/startups", payload, "Failed to create new startup")
            .await
    }

    /// Update an existing startup.
    pub async fn update_startup(&self, id: &str, payload: &StartupPayload) -> Result<(), ApiError> {
        self.put_json(&format!("/startups/{id}"), payload, "Failed to update startup")
            .await
    }

    /// Delete a startup. Callers may ignore the result: the list view simply
    /// skips its refetch when the delete did not go through.
    pub async fn delete_startup(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/startups/{id}"), "Failed to delete startup")
            .await
    }
}
