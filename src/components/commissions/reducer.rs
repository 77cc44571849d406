use crate::api::ApiError;
use crate::components::{begin, complete};
use crate::effect::Effect;
use crate::environment::model::{
    Commission, CommissionCreate, CommissionStatus, CommissionUpdate,
};
use crate::environment::types::Feedback;
use crate::environment::Environment;
use crate::loc;

/// The same commission shows up in the client-side list for its client
/// and in the artist-side list for its artist; a user acting in both
/// roles can hold it in both at once. All mutations go through
/// [`replace_commission`] so the two never drift apart.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct CommissionState {
    pub client_commissions: im::Vector<Commission>,
    pub artist_commissions: im::Vector<Commission>,
    pub selected_commission: Option<Commission>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum CommissionAction {
    FetchById(u64),
    Fetched(Result<Commission, ApiError>),
    FetchClient,
    FetchedClient(Result<Vec<Commission>, ApiError>),
    FetchArtist,
    FetchedArtist(Result<Vec<Commission>, ApiError>),
    Create(CommissionCreate),
    Created(Result<Commission, ApiError>),
    Update(u64, CommissionUpdate),
    Updated(Result<Commission, ApiError>),
    /// The status value is taken at face value; the server owns the
    /// transition rules.
    UpdateStatus(u64, CommissionStatus),
    UpdatedStatus(Result<Commission, ApiError>),
    Delete(u64),
    Deleted(Result<u64, ApiError>),
    ClearSelected,
}

pub fn reduce(
    action: CommissionAction,
    state: &mut CommissionState,
    environment: &Environment,
) -> Effect<CommissionAction> {
    log::trace!("{action:?}");
    let api = environment.api.clone();
    match action {
        CommissionAction::FetchById(id) => {
            begin(&mut state.loading, &mut state.error);
            Effect::future(
                async move { api.commission_by_id(id).await },
                CommissionAction::Fetched,
            )
        }
        CommissionAction::Fetched(result) => complete(
            result,
            &mut state.loading,
            &mut state.error,
            loc!("Failed to fetch commission"),
            false,
            |commission| {
                state.selected_commission = Some(commission);
                Effect::NONE
            },
        ),
        CommissionAction::FetchClient => {
            begin(&mut state.loading, &mut state.error);
            Effect::future(
                async move { api.client_commissions().await },
                CommissionAction::FetchedClient,
            )
        }
        CommissionAction::FetchedClient(result) => complete(
            result,
            &mut state.loading,
            &mut state.error,
            loc!("Failed to fetch client commissions"),
            false,
            |commissions| {
                state.client_commissions = commissions.into_iter().collect();
                Effect::NONE
            },
        ),
        CommissionAction::FetchArtist => {
            begin(&mut state.loading, &mut state.error);
            Effect::future(
                async move { api.artist_commissions().await },
                CommissionAction::FetchedArtist,
            )
        }
        CommissionAction::FetchedArtist(result) => complete(
            result,
            &mut state.loading,
            &mut state.error,
            loc!("Failed to fetch artist commissions"),
            false,
            |commissions| {
                state.artist_commissions = commissions.into_iter().collect();
                Effect::NONE
            },
        ),
        CommissionAction::Create(commission) => {
            begin(&mut state.loading, &mut state.error);
            Effect::future(
                async move { api.create_commission(&commission).await },
                CommissionAction::Created,
            )
        }
        CommissionAction::Created(result) => complete(
            result,
            &mut state.loading,
            &mut state.error,
            loc!("Failed to create commission"),
            true,
            |created| {
                // A new request belongs to the requesting client only.
                state.client_commissions.push_back(created);
                Effect::feedback(Feedback::success(loc!(
                    "Commission request submitted successfully!"
                )))
            },
        ),
        CommissionAction::Update(id, update) => {
            begin(&mut state.loading, &mut state.error);
            Effect::future(
                async move { api.update_commission(id, &update).await },
                CommissionAction::Updated,
            )
        }
        CommissionAction::Updated(result) => complete(
            result,
            &mut state.loading,
            &mut state.error,
            loc!("Failed to update commission"),
            true,
            |updated| {
                apply_update(
                    &mut state.client_commissions,
                    &mut state.artist_commissions,
                    &mut state.selected_commission,
                    updated,
                );
                Effect::feedback(Feedback::success(loc!(
                    "Commission updated successfully!"
                )))
            },
        ),
        CommissionAction::UpdateStatus(id, status) => {
            begin(&mut state.loading, &mut state.error);
            Effect::future(
                async move { api.update_commission_status(id, status).await },
                CommissionAction::UpdatedStatus,
            )
        }
        CommissionAction::UpdatedStatus(result) => complete(
            result,
            &mut state.loading,
            &mut state.error,
            loc!("Failed to update commission status"),
            true,
            |updated| {
                let status = updated.status;
                apply_update(
                    &mut state.client_commissions,
                    &mut state.artist_commissions,
                    &mut state.selected_commission,
                    updated,
                );
                Effect::feedback(Feedback::success(format!(
                    "Commission status updated to {status}!"
                )))
            },
        ),
        CommissionAction::Delete(id) => {
            begin(&mut state.loading, &mut state.error);
            Effect::future(
                async move { api.delete_commission(id).await.map(|_| id) },
                CommissionAction::Deleted,
            )
        }
        CommissionAction::Deleted(result) => complete(
            result,
            &mut state.loading,
            &mut state.error,
            loc!("Failed to delete commission"),
            true,
            |deleted_id| {
                state.client_commissions.retain(|c| c.id != deleted_id);
                state.artist_commissions.retain(|c| c.id != deleted_id);
                Effect::feedback(Feedback::success(loc!(
                    "Commission deleted successfully!"
                )))
            },
        ),
        CommissionAction::ClearSelected => {
            state.selected_commission = None;
            Effect::NONE
        }
    }
}

fn apply_update(
    client_commissions: &mut im::Vector<Commission>,
    artist_commissions: &mut im::Vector<Commission>,
    selected_commission: &mut Option<Commission>,
    updated: Commission,
) {
    replace_commission(client_commissions, &updated);
    replace_commission(artist_commissions, &updated);
    if selected_commission
        .as_ref()
        .map(|commission| commission.id == updated.id)
        .unwrap_or(false)
    {
        *selected_commission = Some(updated);
    }
}

fn replace_commission(list: &mut im::Vector<Commission>, updated: &Commission) {
    for commission in list.iter_mut() {
        if commission.id == updated.id {
            *commission = updated.clone();
        }
    }
}
