use super::ApiClient;
use crate::errors::AppResult;
use crate::models::task::{Task, TaskCreate, TaskUpdate};

impl ApiClient {
    /// Tasks owned by the current user
    pub fn list_tasks(&self) -> AppResult<Vec<Task>> {
        Ok(self.get("/tasks/")?.json()?)
    }

    /// Every task in the organisation (admin only)
    pub fn list_all_tasks(&self) -> AppResult<Vec<Task>> {
        Ok(self.get("/tasks/all")?.json()?)
    }

    pub fn get_task(&self, id: i64) -> AppResult<Task> {
        Ok(self.get(&format!("/tasks/{}", id))?.json()?)
    }

    pub fn create_task(&self, payload: &TaskCreate) -> AppResult<Task> {
        Ok(self.post_json("/tasks/", payload)?.json()?)
    }

    pub fn update_task(&self, id: i64, payload: &TaskUpdate) -> AppResult<Task> {
        Ok(self.put_json(&format!("/tasks/{}", id), payload)?.json()?)
    }

    pub fn delete_task(&self, id: i64) -> AppResult<()> {
        self.delete(&format!("/tasks/{}", id))?;
        Ok(())
    }
}
