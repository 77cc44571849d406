use crate::api::ApiError;
use crate::components::{begin, complete};
use crate::effect::Effect;
use crate::environment::model::{Portfolio, PortfolioCreate, PortfolioUpdate};
use crate::environment::types::Feedback;
use crate::environment::Environment;
use crate::loc;

/// A portfolio item can be cached twice, once in the site-wide browse
/// list and once in the owning artist's list. Every mutation keeps the
/// two consistent.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct PortfolioState {
    pub portfolios: im::Vector<Portfolio>,
    pub artist_portfolios: im::Vector<Portfolio>,
    pub selected_portfolio: Option<Portfolio>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum PortfolioAction {
    FetchAll,
    FetchedAll(Result<Vec<Portfolio>, ApiError>),
    FetchById(u64),
    Fetched(Result<Portfolio, ApiError>),
    FetchByArtist(u64),
    FetchedByArtist(Result<Vec<Portfolio>, ApiError>),
    Create(PortfolioCreate),
    Created(Result<Portfolio, ApiError>),
    Update(u64, PortfolioUpdate),
    Updated(Result<Portfolio, ApiError>),
    Delete(u64),
    Deleted(Result<u64, ApiError>),
    ClearSelected,
}

pub fn reduce(
    action: PortfolioAction,
    state: &mut PortfolioState,
    environment: &Environment,
) -> Effect<PortfolioAction> {
    log::trace!("{action:?}");
    let api = environment.api.clone();
    match action {
        PortfolioAction::FetchAll => {
            begin(&mut state.loading, &mut state.error);
            Effect::future(
                async move { api.all_portfolios().await },
                PortfolioAction::FetchedAll,
            )
        }
        PortfolioAction::FetchedAll(result) => complete(
            result,
            &mut state.loading,
            &mut state.error,
            loc!("Failed to fetch portfolios"),
            false,
            |portfolios| {
                state.portfolios = portfolios.into_iter().collect();
                Effect::NONE
            },
        ),
        PortfolioAction::FetchById(id) => {
            begin(&mut state.loading, &mut state.error);
            Effect::future(
                async move { api.portfolio_by_id(id).await },
                PortfolioAction::Fetched,
            )
        }
        PortfolioAction::Fetched(result) => complete(
            result,
            &mut state.loading,
            &mut state.error,
            loc!("Failed to fetch portfolio"),
            false,
            |portfolio| {
                state.selected_portfolio = Some(portfolio);
                Effect::NONE
            },
        ),
        PortfolioAction::FetchByArtist(artist_id) => {
            begin(&mut state.loading, &mut state.error);
            Effect::future(
                async move { api.artist_portfolios(artist_id).await },
                PortfolioAction::FetchedByArtist,
            )
        }
        PortfolioAction::FetchedByArtist(result) => complete(
            result,
            &mut state.loading,
            &mut state.error,
            loc!("Failed to fetch artist portfolios"),
            false,
            |portfolios| {
                state.artist_portfolios = portfolios.into_iter().collect();
                Effect::NONE
            },
        ),
        PortfolioAction::Create(portfolio) => {
            begin(&mut state.loading, &mut state.error);
            Effect::future(
                async move { api.create_portfolio(&portfolio).await },
                PortfolioAction::Created,
            )
        }
        PortfolioAction::Created(result) => complete(
            result,
            &mut state.loading,
            &mut state.error,
            loc!("Failed to create portfolio"),
            true,
            |created| {
                state.portfolios.push_back(created.clone());
                state.artist_portfolios.push_back(created);
                Effect::feedback(Feedback::success(loc!(
                    "Portfolio item created successfully!"
                )))
            },
        ),
        PortfolioAction::Update(id, update) => {
            begin(&mut state.loading, &mut state.error);
            Effect::future(
                async move { api.update_portfolio(id, &update).await },
                PortfolioAction::Updated,
            )
        }
        PortfolioAction::Updated(result) => complete(
            result,
            &mut state.loading,
            &mut state.error,
            loc!("Failed to update portfolio"),
            true,
            |updated| {
                replace_portfolio(&mut state.portfolios, &updated);
                replace_portfolio(&mut state.artist_portfolios, &updated);
                if state
                    .selected_portfolio
                    .as_ref()
                    .map(|portfolio| portfolio.id == updated.id)
                    .unwrap_or(false)
                {
                    state.selected_portfolio = Some(updated);
                }
                Effect::feedback(Feedback::success(loc!(
                    "Portfolio item updated successfully!"
                )))
            },
        ),
        PortfolioAction::Delete(id) => {
            begin(&mut state.loading, &mut state.error);
            Effect::future(
                async move { api.delete_portfolio(id).await.map(|_| id) },
                PortfolioAction::Deleted,
            )
        }
        PortfolioAction::Deleted(result) => complete(
            result,
            &mut state.loading,
            &mut state.error,
            loc!("Failed to delete portfolio"),
            true,
            |deleted_id| {
                state.portfolios.retain(|p| p.id != deleted_id);
                state.artist_portfolios.retain(|p| p.id != deleted_id);
                Effect::feedback(Feedback::success(loc!(
                    "Portfolio item deleted successfully!"
                )))
            },
        ),
        PortfolioAction::ClearSelected => {
            state.selected_portfolio = None;
            Effect::NONE
        }
    }
}

fn replace_portfolio(list: &mut im::Vector<Portfolio>, updated: &Portfolio) {
    for portfolio in list.iter_mut() {
        if portfolio.id == updated.id {
            *portfolio = updated.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::model::ArtCategory;
    use crate::environment::test_environment;
    use chrono::{TimeZone, Utc};

    fn portfolio(id: u64, title: &str) -> Portfolio {
        Portfolio {
            id,
            artist_id: 5,
            artist_name: "Pat Painter".to_string(),
            title: title.to_string(),
            description: "A piece".to_string(),
            image_url: "https://example.com/art.png".to_string(),
            category: ArtCategory::Illustration,
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap(),
        }
    }

    fn ids(list: &im::Vector<Portfolio>) -> Vec<u64> {
        list.iter().map(|p| p.id).collect()
    }

    #[test]
    fn create_appends_to_both_collections() {
        let environment = test_environment();
        let mut state = PortfolioState::default();
        state.portfolios = im::vector![portfolio(1, "One")];
        state.artist_portfolios = im::vector![portfolio(1, "One")];

        reduce(
            PortfolioAction::Created(Ok(portfolio(2, "Two"))),
            &mut state,
            &environment,
        );

        assert_eq!(ids(&state.portfolios), vec![1, 2]);
        assert_eq!(ids(&state.artist_portfolios), vec![1, 2]);
    }

    #[test]
    fn delete_removes_from_both_collections_simultaneously() {
        let environment = test_environment();
        let mut state = PortfolioState::default();
        state.portfolios = im::vector![portfolio(1, "One"), portfolio(3, "Three")];
        state.artist_portfolios = im::vector![portfolio(3, "Three"), portfolio(4, "Four")];

        reduce(
            PortfolioAction::Deleted(Ok(3)),
            &mut state,
            &environment,
        );

        assert_eq!(ids(&state.portfolios), vec![1]);
        assert_eq!(ids(&state.artist_portfolios), vec![4]);
    }

    #[test]
    fn update_touches_only_the_matching_entity() {
        let environment = test_environment();
        let mut state = PortfolioState::default();
        state.portfolios = im::vector![portfolio(1, "One"), portfolio(2, "Two")];
        state.artist_portfolios = im::vector![portfolio(2, "Two")];
        state.selected_portfolio = Some(portfolio(2, "Two"));

        reduce(
            PortfolioAction::Updated(Ok(portfolio(2, "Two, repainted"))),
            &mut state,
            &environment,
        );

        assert_eq!(state.portfolios[0].title, "One");
        assert_eq!(state.portfolios[1].title, "Two, repainted");
        assert_eq!(state.artist_portfolios[0].title, "Two, repainted");
        assert_eq!(
            state.selected_portfolio.as_ref().unwrap().title,
            "Two, repainted"
        );
    }

    #[test]
    fn update_leaves_an_unrelated_selection_alone() {
        let environment = test_environment();
        let mut state = PortfolioState::default();
        state.selected_portfolio = Some(portfolio(9, "Nine"));

        reduce(
            PortfolioAction::Updated(Ok(portfolio(2, "Two"))),
            &mut state,
            &environment,
        );
        assert_eq!(state.selected_portfolio.as_ref().unwrap().id, 9);
    }

    #[test]
    fn fetch_failures_keep_the_cache_and_stay_quiet() {
        let environment = test_environment();
        let mut state = PortfolioState::default();
        state.portfolios = im::vector![portfolio(1, "One")];

        let effect = reduce(
            PortfolioAction::FetchedAll(Err(ApiError::Transport("offline".to_string()))),
            &mut state,
            &environment,
        );

        assert_eq!(state.portfolios.len(), 1);
        assert_eq!(state.error.as_deref(), Some("Failed to fetch portfolios"));
        assert!(matches!(effect, Effect::None));
    }

    #[test]
    fn delete_failure_emits_error_feedback() {
        let environment = test_environment();
        let mut state = PortfolioState::default();
        state.portfolios = im::vector![portfolio(1, "One")];

        let effect = reduce(
            PortfolioAction::Deleted(Err(ApiError::Status {
                status: 403,
                message: Some("Not your portfolio".to_string()),
            })),
            &mut state,
            &environment,
        );

        assert_eq!(state.portfolios.len(), 1);
        assert_eq!(state.error.as_deref(), Some("Not your portfolio"));
        assert!(matches!(effect, Effect::Feedback(_)));
    }
}
