mod api;
mod components;
mod effect;
mod environment;
mod helper;
mod store;
mod view_model;

pub use api::{Api, ApiError};
pub use components::{artists, auth, commissions, portfolios};
pub use effect::Effect;
pub use environment::{model, types, Environment, Repository};
pub use helper::{enum_label, split_specialties, truncate};
pub use store::{reduce, Action, AppState, Store};
pub use view_model::{ArtistViewModel, CommissionViewModel, PortfolioViewModel, StatusColor};

/// Handy macro for future localization
#[macro_export]
macro_rules! loc {
    ($x:expr $(,)?) => {
        $x
    };
}
