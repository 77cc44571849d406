use super::{Api, ApiError};
use crate::environment::model::{Portfolio, PortfolioCreate, PortfolioUpdate};

impl Api {
    pub async fn all_portfolios(&self) -> Result<Vec<Portfolio>, ApiError> {
        self.get("portfolios").await
    }

    pub async fn portfolio_by_id(&self, id: u64) -> Result<Portfolio, ApiError> {
        self.get(&format!("portfolios/{id}")).await
    }

    pub async fn artist_portfolios(&self, artist_id: u64) -> Result<Vec<Portfolio>, ApiError> {
        self.get(&format!("portfolios/artist/{artist_id}")).await
    }

    pub async fn create_portfolio(
        &self,
        portfolio: &PortfolioCreate,
    ) -> Result<Portfolio, ApiError> {
        self.post("portfolios", portfolio).await
    }

    pub async fn update_portfolio(
        &self,
        id: u64,
        update: &PortfolioUpdate,
    ) -> Result<Portfolio, ApiError> {
        self.put(&format!("portfolios/{id}"), update).await
    }

    pub async fn delete_portfolio(&self, id: u64) -> Result<(), ApiError> {
        self.delete(&format!("portfolios/{id}")).await
    }
}
