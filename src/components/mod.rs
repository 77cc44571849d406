pub mod artists;
pub mod auth;
pub mod commissions;
pub mod portfolios;

use crate::api::ApiError;
use crate::effect::Effect;
use crate::environment::types::Feedback;

/// Bookkeeping for the started phase of an async operation: the slice is
/// busy and any previous error no longer applies.
pub(crate) fn begin(loading: &mut bool, error: &mut Option<String>) {
    *loading = true;
    *error = None;
}

/// Bookkeeping for both completion phases, parameterized by the success
/// mutation. On failure the message extracted from the server (or the
/// per-operation `fallback`) lands in `error`; `notify` additionally
/// emits error feedback for the operations that surface a toast.
pub(crate) fn complete<T, Action>(
    result: Result<T, ApiError>,
    loading: &mut bool,
    error: &mut Option<String>,
    fallback: &str,
    notify: bool,
    mutate: impl FnOnce(T) -> Effect<Action>,
) -> Effect<Action> {
    *loading = false;
    match result {
        Ok(value) => mutate(value),
        Err(e) => {
            let message = e.user_message(fallback);
            *error = Some(message.clone());
            if notify {
                Effect::feedback(Feedback::error(message))
            } else {
                Effect::NONE
            }
        }
    }
}
