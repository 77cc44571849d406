use super::{Api, ApiError};
use crate::environment::model::{ArtistProfile, ArtistProfileUpdate};

impl Api {
    pub async fn all_artists(&self) -> Result<Vec<ArtistProfile>, ApiError> {
        self.get("artists").await
    }

    pub async fn artist_by_id(&self, id: u64) -> Result<ArtistProfile, ApiError> {
        self.get(&format!("artists/{id}")).await
    }

    pub async fn top_artists(&self) -> Result<Vec<ArtistProfile>, ApiError> {
        self.get("artists/top").await
    }

    pub async fn search_artists(&self, keyword: &str) -> Result<Vec<ArtistProfile>, ApiError> {
        self.get(&format!(
            "artists/search?keyword={}",
            urlencoding::encode(keyword)
        ))
        .await
    }

    pub async fn update_artist(
        &self,
        id: u64,
        profile: &ArtistProfileUpdate,
    ) -> Result<ArtistProfile, ApiError> {
        self.put(&format!("artists/{id}"), profile).await
    }
}
