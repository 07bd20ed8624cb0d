use super::ApiClient;
use crate::errors::AppResult;
use crate::models::asset::{Asset, AssetCreate, AssetUpdate};

impl ApiClient {
    pub fn list_assets(&self) -> AppResult<Vec<Asset>> {
        Ok(self.get("/assets/")?.json()?)
    }

    pub fn create_asset(&self, payload: &AssetCreate) -> AppResult<Asset> {
        Ok(self.post_json("/assets/", payload)?.json()?)
    }

    pub fn update_asset(&self, id: i64, payload: &AssetUpdate) -> AppResult<Asset> {
        Ok(self.put_json(&format!("/assets/{}", id), payload)?.json()?)
    }

    pub fn delete_asset(&self, id: i64) -> AppResult<()> {
        self.delete(&format!("/assets/{}", id))?;
        Ok(())
    }

    pub fn assign_asset(&self, asset_id: i64, user_id: i64) -> AppResult<Asset> {
        Ok(self
            .post_empty(&format!("/assets/{}/assign/{}", asset_id, user_id))?
            .json()?)
    }
}
