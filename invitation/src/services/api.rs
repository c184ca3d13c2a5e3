use std::env;

use dto::event::{AllergyDto, EventDateDto, LocationDto, MenuDto};
use dto::guest::CreateRsvpDto;
use dto::submit::{ApiRejection, SubmitReply, ValidationBody};
use serde::de::DeserializeOwned;

/// Shared client for the invitations API. Constructed once at startup and
/// handed to server functions through leptos context.
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn from_env() -> Self {
        let base_url = env::var("INVITATIONS_API_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());
        ApiClient::new(base_url)
    }

    pub fn new(base_url: String) -> Self {
        ApiClient {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        user_id: Option<i64>,
    ) -> Result<T, reqwest::Error> {
        let mut request = self.client.get(format!("{}{}", self.base_url, path));
        if let Some(user_id) = user_id {
            request = request.query(&[("user_id", user_id)]);
        }
        request.send().await?.error_for_status()?.json().await
    }

    pub async fn menus(&self, user_id: i64) -> Result<Vec<MenuDto>, reqwest::Error> {
        self.get_json("/menus-public", Some(user_id)).await
    }

    pub async fn allergies(&self) -> Result<Vec<AllergyDto>, reqwest::Error> {
        self.get_json("/allergies-public", None).await
    }

    pub async fn locations(&self, user_id: i64) -> Result<Vec<LocationDto>, reqwest::Error> {
        self.get_json("/locations-public", Some(user_id)).await
    }

    pub async fn event_date(&self, user_id: i64) -> Result<EventDateDto, reqwest::Error> {
        self.get_json("/user-date-public", Some(user_id)).await
    }

    /// Submit a confirmation. Rejections are data, not errors: only a failure
    /// to reach the API at all surfaces as `Err`.
    pub async fn create_guest_with_plus_one(
        &self,
        payload: &CreateRsvpDto,
    ) -> Result<SubmitReply, reqwest::Error> {
        let response = self
            .client
            .post(format!("{}/guests-with-plus-one", self.base_url))
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(SubmitReply::Created);
        }

        log::warn!("Invitations API rejected a confirmation: {}", status);
        let rejection = match status.as_u16() {
            422 => match response.json::<ValidationBody>().await {
                Ok(body) => ApiRejection::Validation { error: body.error },
                // A 422 without a readable body cannot be mapped to fields.
                Err(_) => ApiRejection::Unavailable,
            },
            404 => ApiRejection::MissingResource,
            _ => ApiRejection::Unavailable,
        };
        Ok(SubmitReply::Rejected(rejection))
    }
}
