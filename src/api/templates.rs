use super::ApiClient;
use crate::errors::AppResult;
use crate::models::template::{Template, TemplatePayload};

impl ApiClient {
    pub fn list_templates(&self) -> AppResult<Vec<Template>> {
        Ok(self.get("/templates/")?.json()?)
    }

    pub fn get_template(&self, id: i64) -> AppResult<Template> {
        Ok(self.get(&format!("/templates/{}", id))?.json()?)
    }

    pub fn create_template(&self, payload: &TemplatePayload) -> AppResult<Template> {
        Ok(self.post_json("/templates/", payload)?.json()?)
    }

    pub fn update_template(&self, id: i64, payload: &TemplatePayload) -> AppResult<Template> {
        Ok(self.put_json(&format!("/templates/{}", id), payload)?.json()?)
    }

    pub fn delete_template(&self, id: i64) -> AppResult<()> {
        self.delete(&format!("/templates/{}", id))?;
        Ok(())
    }
}
