use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MenuDto {
    pub id: Uuid,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AllergyDto {
    pub id: Uuid,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LocationDto {
    pub address: String,
    #[serde(default)]
    pub time: Option<String>,
}

/// Raw event date as served by the API: "YYYY MM DD HH MM".
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct EventDateDto {
    #[serde(default)]
    pub date: Option<String>,
}
