use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct GuestDto {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub needs_transport: bool,
    #[serde(default)]
    pub needs_transport_back: bool,
    #[serde(default)]
    pub needs_hotel: bool,
    pub menu_id: Option<Uuid>,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub accommodation_plan: String,
    #[serde(default)]
    pub observations: String,
    #[serde(default)]
    pub honeypot: bool,
    #[serde(default)]
    pub validated: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PlusOneDto {
    pub first_name: String,
    pub last_name: String,
    pub menu_id: Option<Uuid>,
    #[serde(default)]
    pub allergies: Vec<String>,
}

/// The main guest as the API expects it: the form record plus the id of the
/// couple whose event is being confirmed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GuestPayload {
    #[serde(flatten)]
    pub guest: GuestDto,
    pub user_id: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CreateRsvpDto {
    pub guest: GuestPayload,
    pub plus_one: Option<PlusOneDto>,
}
