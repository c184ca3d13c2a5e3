use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Outcome of the create-guest call, decoded on the server side of the proxy
/// so the browser never has to inspect raw HTTP failures.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum SubmitReply {
    Created,
    Rejected(ApiRejection),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum ApiRejection {
    /// 422 body: per-field (or `general`) validation failures.
    Validation { error: HashMap<String, FieldMessages> },
    /// 404: a referenced menu or allergy no longer exists.
    MissingResource,
    /// Anything else, including transport failures towards the API.
    Unavailable,
}

/// The API reports each failed field either as a bare string or as a list of
/// messages; only the first one is shown.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum FieldMessages {
    One(String),
    Many(Vec<String>),
}

impl FieldMessages {
    pub fn first(&self) -> Option<&str> {
        match self {
            FieldMessages::One(msg) => Some(msg),
            FieldMessages::Many(msgs) => msgs.first().map(String::as_str),
        }
    }
}

/// Body shape of a 422 response from the invitations API.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ValidationBody {
    #[serde(default)]
    pub error: HashMap<String, FieldMessages>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_body_decodes_string_and_array_messages() {
        let body: ValidationBody = serde_json::from_str(
            r#"{"error":{"general":"Invalid content detected in guest.first_name","phone":["validatePhone failed","second"]}}"#,
        )
        .unwrap();

        assert_eq!(
            body.error.get("general").and_then(|m| m.first()),
            Some("Invalid content detected in guest.first_name")
        );
        assert_eq!(
            body.error.get("phone").and_then(|m| m.first()),
            Some("validatePhone failed")
        );
    }

    #[test]
    fn validation_body_tolerates_missing_error_key() {
        let body: ValidationBody = serde_json::from_str("{}").unwrap();
        assert!(body.error.is_empty());
    }

    #[test]
    fn empty_message_list_has_no_first() {
        let messages = FieldMessages::Many(vec![]);
        assert_eq!(messages.first(), None);
    }
}
