use dto::event::{AllergyDto, EventDateDto, LocationDto, MenuDto};
use dto::guest::CreateRsvpDto;
use dto::submit::SubmitReply;
use leptos::prelude::*;

#[server]
pub async fn get_menus(user_id: i64) -> Result<Vec<MenuDto>, ServerFnError> {
    use crate::services::api::ApiClient;

    let api: ApiClient =
        use_context().ok_or(ServerFnError::new("Failed to retrieve api client"))?;
    api.menus(user_id).await.map_err(|e| {
        log::warn!("Failed to fetch menus: {}", e);
        ServerFnError::new("Failed to fetch menus")
    })
}

#[server]
pub async fn get_allergies() -> Result<Vec<AllergyDto>, ServerFnError> {
    use crate::services::api::ApiClient;

    let api: ApiClient =
        use_context().ok_or(ServerFnError::new("Failed to retrieve api client"))?;
    api.allergies().await.map_err(|e| {
        log::warn!("Failed to fetch allergies: {}", e);
        ServerFnError::new("Failed to fetch allergies")
    })
}

#[server]
pub async fn get_locations(user_id: i64) -> Result<Vec<LocationDto>, ServerFnError> {
    use crate::services::api::ApiClient;

    let api: ApiClient =
        use_context().ok_or(ServerFnError::new("Failed to retrieve api client"))?;
    api.locations(user_id).await.map_err(|e| {
        log::warn!("Failed to fetch locations: {}", e);
        ServerFnError::new("Failed to fetch locations")
    })
}

#[server]
pub async fn get_event_date(user_id: i64) -> Result<EventDateDto, ServerFnError> {
    use crate::services::api::ApiClient;

    let api: ApiClient =
        use_context().ok_or(ServerFnError::new("Failed to retrieve api client"))?;
    api.event_date(user_id).await.map_err(|e| {
        log::warn!("Failed to fetch event date: {}", e);
        ServerFnError::new("Failed to fetch event date")
    })
}

/// Forward a confirmation to the invitations API. Rejections come back as
/// data so the form can translate them; an unreachable API is reported the
/// same way as any other unclassified failure.
#[server]
pub async fn create_guest_with_plus_one(
    payload: CreateRsvpDto,
) -> Result<SubmitReply, ServerFnError> {
    use crate::services::api::ApiClient;
    use dto::submit::ApiRejection;

    let api: ApiClient =
        use_context().ok_or(ServerFnError::new("Failed to retrieve api client"))?;
    log::info!(
        "Forwarding confirmation for user {} (plus one: {})",
        payload.guest.user_id,
        payload.plus_one.is_some()
    );
    match api.create_guest_with_plus_one(&payload).await {
        Ok(reply) => Ok(reply),
        Err(e) => {
            log::warn!("Invitations API unreachable: {}", e);
            Ok(SubmitReply::Rejected(ApiRejection::Unavailable))
        }
    }
}
