//! Role listing and per-user assignment/revocation.

use super::ApiClient;
use crate::errors::AppResult;
use crate::models::user::Role;

impl ApiClient {
    pub fn list_roles(&self) -> AppResult<Vec<Role>> {
        Ok(self.get("/roles/")?.json()?)
    }

    pub fn assign_role(&self, user_id: i64, role_id: i64) -> AppResult<()> {
        self.post_empty(&format!("/roles/users/{}/assign/{}", user_id, role_id))?;
        Ok(())
    }

    pub fn revoke_role(&self, user_id: i64, role_id: i64) -> AppResult<()> {
        self.delete(&format!("/roles/users/{}/revoke/{}", user_id, role_id))?;
        Ok(())
    }
}
