use super::{Api, ApiError};
use crate::environment::model::{
    Commission, CommissionCreate, CommissionStatus, CommissionUpdate,
};

impl Api {
    pub async fn commission_by_id(&self, id: u64) -> Result<Commission, ApiError> {
        self.get(&format!("commissions/{id}")).await
    }

    /// Commissions the logged-in user requested as a client.
    pub async fn client_commissions(&self) -> Result<Vec<Commission>, ApiError> {
        self.get("commissions/my-requests").await
    }

    /// Commissions addressed to the logged-in user as an artist.
    pub async fn artist_commissions(&self) -> Result<Vec<Commission>, ApiError> {
        self.get("commissions/my-commissions").await
    }

    pub async fn create_commission(
        &self,
        commission: &CommissionCreate,
    ) -> Result<Commission, ApiError> {
        self.post("commissions", commission).await
    }

    pub async fn update_commission(
        &self,
        id: u64,
        update: &CommissionUpdate,
    ) -> Result<Commission, ApiError> {
        self.put(&format!("commissions/{id}"), update).await
    }

    pub async fn update_commission_status(
        &self,
        id: u64,
        status: CommissionStatus,
    ) -> Result<Commission, ApiError> {
        // The status rides in the query string, the body stays empty.
        self.put(
            &format!("commissions/{id}/status?status={status}"),
            &serde_json::json!({}),
        )
        .await
    }

    pub async fn delete_commission(&self, id: u64) -> Result<(), ApiError> {
        self.delete(&format!("commissions/{id}")).await
    }
}
