pub mod model;
pub mod repository;
pub mod types;

pub use repository::Repository;

use url::Url;

use crate::api::Api;

/// Everything the reducers are allowed to touch beyond their own state:
/// the transport layer and the credential repository.
#[derive(Clone)]
pub struct Environment {
    pub api: Api,
    pub repository: Repository,
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment").finish()
    }
}

impl Environment {
    /// Loads the stored session once and hands its token to the transport.
    /// After this, the token slot is written only through login and logout.
    pub fn new(base_url: Url) -> Self {
        Self::with_repository(base_url, Repository::new())
    }

    pub fn with_repository(base_url: Url, repository: Repository) -> Self {
        let token = repository.session().map(|session| session.token);
        Self {
            api: Api::new(base_url, token),
            repository,
        }
    }
}

#[cfg(test)]
pub(crate) fn test_environment() -> Environment {
    // Port 9 is the discard service; nothing listens there in CI, so any
    // future that actually fires fails with a transport error.
    let url = Url::parse("http://127.0.0.1:9/api/").unwrap();
    Environment::with_repository(url, Repository::ephemeral())
}
