use super::{Api, ApiError};
use crate::environment::model::{AuthResponse, LoginRequest, SignupRequest, User};

impl Api {
    pub async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse, ApiError> {
        log::trace!("Authenticate");
        self.post("auth/signin", credentials).await
    }

    pub async fn signup(&self, signup: &SignupRequest) -> Result<(), ApiError> {
        self.post_empty("auth/signup", signup).await
    }

    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.get("users/me").await
    }
}
