use flume::{Receiver, Sender};

use crate::components::{artists, auth, commissions, portfolios};
use crate::effect::Effect;
use crate::environment::types::Feedback;
use crate::environment::Environment;

/// The whole client-side state tree. Slices never read each other's
/// state; composition is the only coupling.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct AppState {
    pub auth: auth::AuthState,
    pub artists: artists::ArtistState,
    pub portfolios: portfolios::PortfolioState,
    pub commissions: commissions::CommissionState,
}

#[derive(Debug, Clone)]
pub enum Action {
    Auth(auth::AuthAction),
    Artists(artists::ArtistAction),
    Portfolios(portfolios::PortfolioAction),
    Commissions(commissions::CommissionAction),
}

pub fn reduce(action: Action, state: &mut AppState, environment: &Environment) -> Effect<Action> {
    match action {
        Action::Auth(action) => {
            auth::reduce(action, &mut state.auth, environment).map(Action::Auth)
        }
        Action::Artists(action) => {
            artists::reduce(action, &mut state.artists, environment).map(Action::Artists)
        }
        Action::Portfolios(action) => {
            portfolios::reduce(action, &mut state.portfolios, environment).map(Action::Portfolios)
        }
        Action::Commissions(action) => {
            commissions::reduce(action, &mut state.commissions, environment)
                .map(Action::Commissions)
        }
    }
}

/// Single write entry point (dispatch) and read entry point (select) over
/// the composed state tree.
///
/// Futures returned by reducers are spawned on the ambient tokio runtime;
/// their completion actions come back through a channel and are applied
/// one at a time. Overlapping requests against the same slice therefore
/// stay last-write-wins: there is no sequencing and no cancellation of
/// superseded requests.
pub struct Store {
    state: AppState,
    environment: Environment,
    actions: (Sender<Action>, Receiver<Action>),
    feedback: (Sender<Feedback>, Receiver<Feedback>),
    in_flight: usize,
}

impl Store {
    pub fn new(environment: Environment) -> Self {
        Self {
            state: AppState::default(),
            environment,
            actions: flume::unbounded(),
            feedback: flume::unbounded(),
            in_flight: 0,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn select<T>(&self, selector: impl FnOnce(&AppState) -> T) -> T {
        selector(&self.state)
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Notifications for the embedding UI to display.
    pub fn feedback(&self) -> Receiver<Feedback> {
        self.feedback.1.clone()
    }

    /// How many async operations have been started but not yet completed.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn dispatch(&mut self, action: Action) {
        let effect = reduce(action, &mut self.state, &self.environment);
        self.apply(effect);
    }

    fn apply(&mut self, effect: Effect<Action>) {
        match effect {
            Effect::None => {}
            Effect::Action(action) => self.dispatch(action),
            Effect::Feedback(feedback) => {
                let _ = self.feedback.0.send(feedback);
            }
            Effect::Future(future) => {
                self.in_flight += 1;
                let sender = self.actions.0.clone();
                tokio::spawn(async move {
                    let _ = sender.send_async(future.await).await;
                });
            }
            Effect::Merge(effects) => {
                for effect in effects {
                    self.apply(effect);
                }
            }
        }
    }

    /// Dispatch completions until nothing is in flight anymore.
    pub async fn settle(&mut self) {
        while self.in_flight > 0 {
            let Ok(action) = self.actions.1.recv_async().await else {
                break;
            };
            self.in_flight -= 1;
            self.dispatch(action);
        }
    }

    /// Apply any completions that have already arrived, without waiting.
    pub fn pump(&mut self) {
        while let Ok(action) = self.actions.1.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            self.dispatch(action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::auth::AuthAction;
    use crate::components::commissions::CommissionAction;
    use crate::environment::model::{ArtCategory, CommissionCreate, LoginRequest};
    use crate::environment::test_environment;
    use crate::environment::types::FeedbackLevel;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn slices_compose_without_cross_talk() {
        init_logging();
        let mut store = Store::new(test_environment());

        store.dispatch(Action::Commissions(CommissionAction::ClearSelected));
        store.dispatch(Action::Auth(AuthAction::ClearError));

        assert_eq!(*store.state(), AppState::default());
    }

    #[test]
    fn feedback_is_routed_to_the_receiver() {
        init_logging();
        let mut store = Store::new(test_environment());
        let feedback = store.feedback();

        store.dispatch(Action::Auth(AuthAction::Logout));

        let event = feedback.try_recv().unwrap();
        assert_eq!(event.level, FeedbackLevel::Info);
        assert_eq!(event.message, "You have been logged out");
    }

    #[tokio::test]
    async fn a_dead_endpoint_settles_into_an_error() {
        init_logging();
        // The test environment points at a port nothing listens on, so
        // the spawned request comes back as a transport failure.
        let mut store = Store::new(test_environment());

        store.dispatch(Action::Artists(crate::artists::ArtistAction::FetchTop));
        assert!(store.select(|state| state.artists.loading));
        assert_eq!(store.in_flight(), 1);

        store.settle().await;

        let state = store.state();
        assert!(!state.artists.loading);
        assert_eq!(
            state.artists.error.as_deref(),
            Some("Failed to fetch top artists")
        );
        assert!(state.artists.top_artists.is_empty());
        assert_eq!(store.in_flight(), 0);
    }

    #[tokio::test]
    async fn login_failure_surfaces_through_the_full_loop() {
        init_logging();
        let mut store = Store::new(test_environment());
        let feedback = store.feedback();

        store.dispatch(Action::Auth(AuthAction::Login(LoginRequest {
            username: "amy".to_string(),
            password: "pw".to_string(),
        })));
        store.settle().await;

        let state = store.state();
        assert!(!state.auth.is_authenticated);
        assert_eq!(state.auth.error.as_deref(), Some("Login failed"));
        let event = feedback.try_recv().unwrap();
        assert_eq!(event.level, FeedbackLevel::Error);
    }

    #[tokio::test]
    async fn create_commission_failure_leaves_the_lists_untouched() {
        init_logging();
        let mut store = Store::new(test_environment());

        store.dispatch(Action::Commissions(CommissionAction::Create(
            CommissionCreate {
                artist_id: 5,
                title: "Portrait".to_string(),
                description: "A portrait".to_string(),
                category: ArtCategory::Portrait,
                deadline: None,
            },
        )));
        store.settle().await;

        let state = store.state();
        assert!(state.commissions.client_commissions.is_empty());
        assert!(state.commissions.error.is_some());
    }
}
