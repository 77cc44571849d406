use crate::api::ApiError;
use crate::components::{begin, complete};
use crate::effect::Effect;
use crate::environment::model::{ArtistProfile, ArtistProfileUpdate};
use crate::environment::types::Feedback;
use crate::environment::Environment;
use crate::loc;

#[derive(Default, Debug, Clone, PartialEq)]
pub struct ArtistState {
    pub artists: im::Vector<ArtistProfile>,
    pub top_artists: im::Vector<ArtistProfile>,
    pub selected_artist: Option<ArtistProfile>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum ArtistAction {
    FetchAll,
    FetchedAll(Result<Vec<ArtistProfile>, ApiError>),
    FetchTop,
    FetchedTop(Result<Vec<ArtistProfile>, ApiError>),
    FetchById(u64),
    Fetched(Result<ArtistProfile, ApiError>),
    /// Replaces the browse collection with the matches.
    Search(String),
    Searched(Result<Vec<ArtistProfile>, ApiError>),
    Update(u64, ArtistProfileUpdate),
    Updated(Result<ArtistProfile, ApiError>),
    ClearSelected,
}

pub fn reduce(
    action: ArtistAction,
    state: &mut ArtistState,
    environment: &Environment,
) -> Effect<ArtistAction> {
    log::trace!("{action:?}");
    let api = environment.api.clone();
    match action {
        ArtistAction::FetchAll => {
            begin(&mut state.loading, &mut state.error);
            Effect::future(
                async move { api.all_artists().await },
                ArtistAction::FetchedAll,
            )
        }
        ArtistAction::FetchedAll(result) => complete(
            result,
            &mut state.loading,
            &mut state.error,
            loc!("Failed to fetch artists"),
            true,
            |artists| {
                state.artists = artists.into_iter().collect();
                Effect::NONE
            },
        ),
        ArtistAction::FetchTop => {
            begin(&mut state.loading, &mut state.error);
            Effect::future(
                async move { api.top_artists().await },
                ArtistAction::FetchedTop,
            )
        }
        ArtistAction::FetchedTop(result) => complete(
            result,
            &mut state.loading,
            &mut state.error,
            loc!("Failed to fetch top artists"),
            false,
            |artists| {
                state.top_artists = artists.into_iter().collect();
                Effect::NONE
            },
        ),
        ArtistAction::FetchById(id) => {
            begin(&mut state.loading, &mut state.error);
            Effect::future(
                async move { api.artist_by_id(id).await },
                ArtistAction::Fetched,
            )
        }
        ArtistAction::Fetched(result) => complete(
            result,
            &mut state.loading,
            &mut state.error,
            loc!("Failed to fetch artist"),
            true,
            |artist| {
                state.selected_artist = Some(artist);
                Effect::NONE
            },
        ),
        ArtistAction::Search(keyword) => {
            begin(&mut state.loading, &mut state.error);
            Effect::future(
                async move { api.search_artists(&keyword).await },
                ArtistAction::Searched,
            )
        }
        ArtistAction::Searched(result) => complete(
            result,
            &mut state.loading,
            &mut state.error,
            loc!("Failed to search artists"),
            false,
            |artists| {
                state.artists = artists.into_iter().collect();
                Effect::NONE
            },
        ),
        ArtistAction::Update(id, profile) => {
            begin(&mut state.loading, &mut state.error);
            Effect::future(
                async move { api.update_artist(id, &profile).await },
                ArtistAction::Updated,
            )
        }
        ArtistAction::Updated(result) => complete(
            result,
            &mut state.loading,
            &mut state.error,
            loc!("Failed to update artist profile"),
            true,
            |updated| {
                replace_artist(&mut state.artists, &updated);
                replace_artist(&mut state.top_artists, &updated);
                if state
                    .selected_artist
                    .as_ref()
                    .map(|artist| artist.id == updated.id)
                    .unwrap_or(false)
                {
                    state.selected_artist = Some(updated);
                }
                Effect::feedback(Feedback::success(loc!("Profile updated successfully!")))
            },
        ),
        ArtistAction::ClearSelected => {
            state.selected_artist = None;
            Effect::NONE
        }
    }
}

fn replace_artist(list: &mut im::Vector<ArtistProfile>, updated: &ArtistProfile) {
    for artist in list.iter_mut() {
        if artist.id == updated.id {
            *artist = updated.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::test_environment;

    fn artist(id: u64, rating: f32) -> ArtistProfile {
        ArtistProfile {
            id,
            user_id: id + 100,
            username: format!("artist-{id}"),
            first_name: "Pat".to_string(),
            last_name: format!("Painter {id}"),
            bio: "Paints things".to_string(),
            specialties: "portrait, landscape".to_string(),
            years_of_experience: 4,
            average_rating: rating,
            completed_commissions: 12,
            profile_image_url: None,
        }
    }

    #[test]
    fn fetch_all_replaces_the_collection_wholesale() {
        let environment = test_environment();
        let mut state = ArtistState::default();
        state.artists = im::vector![artist(1, 4.0)];

        reduce(
            ArtistAction::FetchedAll(Ok(vec![artist(2, 3.5), artist(3, 5.0)])),
            &mut state,
            &environment,
        );
        assert_eq!(
            state.artists.iter().map(|a| a.id).collect::<Vec<_>>(),
            vec![2, 3]
        );

        // Fetching again with the same payload does not duplicate.
        reduce(
            ArtistAction::FetchedAll(Ok(vec![artist(2, 3.5), artist(3, 5.0)])),
            &mut state,
            &environment,
        );
        assert_eq!(state.artists.len(), 2);
    }

    #[test]
    fn failed_top_fetch_keeps_the_previous_value() {
        let environment = test_environment();
        let mut state = ArtistState::default();
        state.top_artists = im::vector![artist(1, 4.9)];

        let effect = reduce(
            ArtistAction::FetchedTop(Err(ApiError::Status {
                status: 500,
                message: None,
            })),
            &mut state,
            &environment,
        );

        assert_eq!(state.top_artists.len(), 1);
        assert_eq!(state.top_artists[0].id, 1);
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Failed to fetch top artists"));
        // Top-artist fetch failures stay quiet.
        assert!(matches!(effect, Effect::None));
    }

    #[test]
    fn search_replaces_the_browse_collection() {
        let environment = test_environment();
        let mut state = ArtistState::default();
        state.artists = im::vector![artist(1, 4.0), artist(2, 3.0)];

        reduce(
            ArtistAction::Searched(Ok(vec![artist(2, 3.0)])),
            &mut state,
            &environment,
        );
        assert_eq!(state.artists.len(), 1);
        assert_eq!(state.artists[0].id, 2);
    }

    #[test]
    fn update_replaces_everywhere_the_artist_appears() {
        let environment = test_environment();
        let mut state = ArtistState::default();
        state.artists = im::vector![artist(1, 4.0), artist(2, 3.0)];
        state.top_artists = im::vector![artist(2, 3.0)];
        state.selected_artist = Some(artist(2, 3.0));

        let mut updated = artist(2, 4.8);
        updated.bio = "New bio".to_string();
        reduce(
            ArtistAction::Updated(Ok(updated)),
            &mut state,
            &environment,
        );

        assert_eq!(state.artists[1].average_rating, 4.8);
        assert_eq!(state.top_artists[0].bio, "New bio");
        assert_eq!(state.selected_artist.as_ref().unwrap().average_rating, 4.8);
        // The untouched entry stays as it was.
        assert_eq!(state.artists[0].average_rating, 4.0);
    }

    #[test]
    fn selecting_a_new_artist_discards_the_previous_one() {
        let environment = test_environment();
        let mut state = ArtistState::default();
        state.selected_artist = Some(artist(1, 4.0));

        reduce(
            ArtistAction::Fetched(Ok(artist(2, 3.0))),
            &mut state,
            &environment,
        );
        assert_eq!(state.selected_artist.as_ref().unwrap().id, 2);

        reduce(ArtistAction::ClearSelected, &mut state, &environment);
        assert_eq!(state.selected_artist, None);
    }
}
