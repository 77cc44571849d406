use crate::api::ApiError;
use crate::components::{begin, complete};
use crate::effect::Effect;
use crate::environment::model::{AuthResponse, LoginRequest, SignupRequest, User};
use crate::environment::types::{Feedback, StoredSession};
use crate::environment::Environment;
use crate::loc;

#[derive(Default, Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub is_artist: bool,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum AuthAction {
    Login(LoginRequest),
    LoggedIn(Result<AuthResponse, ApiError>),
    Signup(SignupRequest),
    SignedUp(Result<(), ApiError>),
    /// Restore the session behind a persisted token.
    LoadUser,
    LoadedUser(Result<User, ApiError>),
    Logout,
    ClearError,
}

pub fn reduce(
    action: AuthAction,
    state: &mut AuthState,
    environment: &Environment,
) -> Effect<AuthAction> {
    log::trace!("{action:?}");
    let api = environment.api.clone();
    match action {
        AuthAction::Login(credentials) => {
            begin(&mut state.loading, &mut state.error);
            Effect::future(
                async move { api.login(&credentials).await },
                AuthAction::LoggedIn,
            )
        }
        AuthAction::LoggedIn(result) => complete(
            result,
            &mut state.loading,
            &mut state.error,
            loc!("Login failed"),
            true,
            |response| {
                environment.api.set_token(response.token.clone());
                if let Err(e) = environment.repository.store_session(StoredSession::new(
                    response.token.clone(),
                    response.username.clone(),
                )) {
                    log::error!("Could not persist session: {e:?}");
                }
                state.is_authenticated = true;
                let user = User {
                    id: response.id,
                    username: response.username,
                    email: response.email,
                    first_name: response.first_name,
                    last_name: response.last_name,
                    profile_image_url: response.profile_image_url,
                    roles: response.roles,
                };
                state.is_artist = user.is_artist();
                state.user = Some(user);
                Effect::feedback(Feedback::success(loc!("Login successful!")))
            },
        ),
        AuthAction::Signup(signup) => {
            begin(&mut state.loading, &mut state.error);
            Effect::future(
                async move { api.signup(&signup).await },
                AuthAction::SignedUp,
            )
        }
        AuthAction::SignedUp(result) => complete(
            result,
            &mut state.loading,
            &mut state.error,
            loc!("Signup failed"),
            true,
            |()| {
                Effect::feedback(Feedback::success(loc!(
                    "Registration successful! Please log in."
                )))
            },
        ),
        AuthAction::LoadUser => {
            // Session restore keeps any previous error visible.
            state.loading = true;
            Effect::future(
                async move { api.current_user().await },
                AuthAction::LoadedUser,
            )
        }
        AuthAction::LoadedUser(result) => {
            state.loading = false;
            match result {
                Ok(user) => {
                    state.is_authenticated = true;
                    state.is_artist = user.is_artist();
                    state.user = Some(user);
                }
                Err(_) => {
                    // The stored token is stale. Treat as logged out and
                    // drop the credential so the next start is clean.
                    state.is_authenticated = false;
                    state.is_artist = false;
                    state.user = None;
                    environment.api.clear_token();
                    if let Err(e) = environment.repository.clear_session() {
                        log::error!("Could not clear session: {e:?}");
                    }
                }
            }
            Effect::NONE
        }
        AuthAction::Logout => {
            environment.api.clear_token();
            if let Err(e) = environment.repository.clear_session() {
                log::error!("Could not clear session: {e:?}");
            }
            state.user = None;
            state.is_authenticated = false;
            state.is_artist = false;
            Effect::feedback(Feedback::info(loc!("You have been logged out")))
        }
        AuthAction::ClearError => {
            state.error = None;
            Effect::NONE
        }
    }
}
