use chrono::{DateTime, Utc};

use crate::environment::model::{
    ArtCategory, ArtistProfile, Commission, CommissionStatus, Portfolio,
};
use crate::helper::{enum_label, split_specialties, truncate};
use crate::loc;

const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/200";

/// Chip color classes for a commission status.
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq)]
pub enum StatusColor {
    #[default]
    Default,
    Info,
    Secondary,
    Warning,
    Success,
    Error,
}

impl CommissionStatus {
    pub fn color(&self) -> StatusColor {
        match self {
            CommissionStatus::Requested => StatusColor::Default,
            CommissionStatus::Quoted => StatusColor::Info,
            CommissionStatus::Accepted => StatusColor::Secondary,
            CommissionStatus::InProgress => StatusColor::Warning,
            CommissionStatus::DraftSubmitted => StatusColor::Info,
            CommissionStatus::RevisionRequested => StatusColor::Warning,
            CommissionStatus::Completed => StatusColor::Success,
            CommissionStatus::Cancelled => StatusColor::Error,
            CommissionStatus::Unknown => StatusColor::Default,
        }
    }

    pub fn label(&self) -> String {
        enum_label(self.as_ref())
    }
}

impl ArtCategory {
    pub fn label(&self) -> String {
        enum_label(self.as_ref())
    }
}

#[derive(Debug, Clone)]
pub struct ArtistViewModel {
    pub id: u64,
    pub display_name: String,
    pub bio_preview: String,
    pub specialties: Vec<String>,
    pub rating: f32,
    pub commissions_str: String,
    pub image: String,
}

impl ArtistViewModel {
    pub fn new(artist: &ArtistProfile) -> Self {
        let bio_preview = if artist.bio.trim().is_empty() {
            loc!("No bio available").to_string()
        } else {
            truncate(&artist.bio, 100)
        };
        Self {
            id: artist.id,
            display_name: format!("{} {}", artist.first_name, artist.last_name),
            bio_preview,
            specialties: split_specialties(&artist.specialties),
            rating: artist.average_rating,
            commissions_str: format!("({} commissions)", artist.completed_commissions),
            image: artist
                .profile_image_url
                .clone()
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
        }
    }
}

impl PartialEq for ArtistViewModel {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ArtistViewModel {}

#[derive(Debug, Clone)]
pub struct PortfolioViewModel {
    pub id: u64,
    pub title: String,
    pub artist_name: String,
    pub category_label: String,
    pub image: String,
    pub created: DateTime<Utc>,
}

impl PortfolioViewModel {
    pub fn new(portfolio: &Portfolio) -> Self {
        let image = if portfolio.image_url.is_empty() {
            PLACEHOLDER_IMAGE.to_string()
        } else {
            portfolio.image_url.clone()
        };
        Self {
            id: portfolio.id,
            title: portfolio.title.clone(),
            artist_name: portfolio.artist_name.clone(),
            category_label: portfolio.category.label(),
            image,
            created: portfolio.created_at,
        }
    }
}

impl PartialEq for PortfolioViewModel {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for PortfolioViewModel {}

#[derive(Debug, Clone)]
pub struct CommissionViewModel {
    pub id: u64,
    pub title: String,
    pub status: CommissionStatus,
    pub status_label: String,
    pub status_color: StatusColor,
    pub description_preview: String,
    pub price_str: String,
    pub created: DateTime<Utc>,
    pub created_str: String,
    pub artist_name: String,
    pub client_name: String,
}

impl CommissionViewModel {
    pub fn new(commission: &Commission) -> Self {
        let price_str = match commission.price {
            Some(price) => format!("Price: ${price}"),
            None => loc!("Price: Not quoted yet").to_string(),
        };
        Self {
            id: commission.id,
            title: commission.title.clone(),
            status: commission.status,
            status_label: commission.status.label(),
            status_color: commission.status.color(),
            description_preview: truncate(&commission.description, 150),
            price_str,
            created: commission.created_at,
            created_str: commission.created_at.format("%m/%d/%Y").to_string(),
            artist_name: commission.artist_name.clone(),
            client_name: commission.client_name.clone(),
        }
    }

    /// The name of the other party, from the viewer's perspective.
    pub fn counterpart(&self, viewer_is_client: bool) -> &str {
        if viewer_is_client {
            &self.artist_name
        } else {
            &self.client_name
        }
    }
}

impl PartialEq for CommissionViewModel {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for CommissionViewModel {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    #[case(CommissionStatus::Requested, StatusColor::Default)]
    #[case(CommissionStatus::Quoted, StatusColor::Info)]
    #[case(CommissionStatus::Accepted, StatusColor::Secondary)]
    #[case(CommissionStatus::InProgress, StatusColor::Warning)]
    #[case(CommissionStatus::DraftSubmitted, StatusColor::Info)]
    #[case(CommissionStatus::RevisionRequested, StatusColor::Warning)]
    #[case(CommissionStatus::Completed, StatusColor::Success)]
    #[case(CommissionStatus::Cancelled, StatusColor::Error)]
    #[case(CommissionStatus::Unknown, StatusColor::Default)]
    fn status_chip_colors(#[case] status: CommissionStatus, #[case] color: StatusColor) {
        assert_eq!(status.color(), color);
    }

    #[test]
    fn status_labels_are_title_cased() {
        assert_eq!(CommissionStatus::DraftSubmitted.label(), "Draft Submitted");
        assert_eq!(ArtCategory::ConceptArt.label(), "Concept Art");
    }

    fn commission() -> Commission {
        Commission {
            id: 7,
            client_id: 2,
            client_name: "amy".to_string(),
            artist_id: 5,
            artist_name: "bren".to_string(),
            title: "Portrait".to_string(),
            description: "d".repeat(200),
            category: ArtCategory::Portrait,
            status: CommissionStatus::Quoted,
            price: None,
            deadline: None,
            final_artwork_url: None,
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap(),
            completed_at: None,
        }
    }

    #[test]
    fn commission_view_model_formats_for_display() {
        let mut commission = commission();
        let vm = CommissionViewModel::new(&commission);
        assert_eq!(vm.price_str, "Price: Not quoted yet");
        assert_eq!(vm.description_preview.chars().count(), 151);
        assert_eq!(vm.created_str, "03/01/2024");
        assert_eq!(vm.counterpart(true), "bren");
        assert_eq!(vm.counterpart(false), "amy");

        commission.price = Some(120.5);
        let vm = CommissionViewModel::new(&commission);
        assert_eq!(vm.price_str, "Price: $120.5");
    }

    #[test]
    fn artist_view_model_parses_specialties_and_falls_back() {
        let artist = ArtistProfile {
            id: 5,
            first_name: "Pat".to_string(),
            last_name: "Painter".to_string(),
            bio: String::new(),
            specialties: "portrait, , landscape".to_string(),
            completed_commissions: 12,
            ..Default::default()
        };
        let vm = ArtistViewModel::new(&artist);
        assert_eq!(vm.display_name, "Pat Painter");
        assert_eq!(vm.bio_preview, "No bio available");
        assert_eq!(vm.specialties, vec!["portrait", "landscape"]);
        assert_eq!(vm.commissions_str, "(12 commissions)");
        assert_eq!(vm.image, PLACEHOLDER_IMAGE);
    }
}
