use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// The role marker the server attaches to artist accounts.
pub const ARTIST_ROLE: &str = "ROLE_ARTIST";

#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl User {
    pub fn is_artist(&self) -> bool {
        self.roles.iter().any(|role| role == ARTIST_ROLE)
    }
}

#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistProfile {
    pub id: u64,
    pub user_id: u64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
    /// Comma-delimited specialty tags, parsed at render time.
    pub specialties: String,
    pub years_of_experience: u32,
    pub average_rating: f32,
    pub completed_commissions: u32,
    #[serde(default)]
    pub profile_image_url: Option<String>,
}

#[derive(
    Default, Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize,
    Display, AsRefStr, EnumIter, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ArtCategory {
    Illustration,
    Animation,
    CharacterDesign,
    Portrait,
    Landscape,
    ConceptArt,
    DigitalPainting,
    Cartoon,
    MangaAnime,
    /// Also absorbs categories this client does not know about yet.
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub id: u64,
    pub artist_id: u64,
    pub artist_name: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub image_url: String,
    pub category: ArtCategory,
    pub created_at: DateTime<Utc>,
}

/// Nominal progression order. The client treats these purely as labels:
/// any status may be requested from any state, the server owns the
/// transition rules.
#[derive(
    Default, Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize,
    Display, AsRefStr, EnumIter, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CommissionStatus {
    #[default]
    Requested,
    Quoted,
    Accepted,
    InProgress,
    DraftSubmitted,
    RevisionRequested,
    Completed,
    Cancelled,
    /// A status this client version does not know. Kept so one new
    /// server-side value cannot fail a whole collection decode.
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commission {
    pub id: u64,
    pub client_id: u64,
    pub client_name: String,
    pub artist_id: u64,
    pub artist_name: String,
    pub title: String,
    pub description: String,
    pub category: ArtCategory,
    pub status: CommissionStatus,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub final_artwork_url: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

// Request bodies

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_artist: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    #[serde(rename = "type")]
    pub token_type: String,
    pub id: u64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    pub is_artist: bool,
}

#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialties: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_of_experience: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioCreate {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub image_url: String,
    pub category: ArtCategory,
}

#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ArtCategory>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionCreate {
    pub artist_id: u64,
    pub title: String,
    pub description: String,
    pub category: ArtCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
}

#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ArtCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CommissionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_artwork_url: Option<String>,
}
