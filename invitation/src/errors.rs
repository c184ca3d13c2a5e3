use std::collections::HashMap;

use dto::submit::ApiRejection;
use regex::Regex;

use crate::form::FormErrors;

pub const SUBMIT_CHECK_FIELDS: &str =
    "Por favor, revisa los campos marcados y asegúrate de no usar caracteres especiales.";
pub const SUBMIT_MISSING_RESOURCE: &str =
    "No se encontró algún recurso necesario. Por favor, actualiza la página e inténtalo de nuevo.";
pub const SUBMIT_RETRY_LATER: &str =
    "Hubo un error al enviar tu confirmación. Por favor, inténtalo de nuevo más tarde.";

const FIELD_LABELS: &[(&str, &str)] = &[
    ("guest.first_name", "nombre"),
    ("guest.last_name", "apellido"),
    ("guest.email", "correo electrónico"),
    ("guest.phone", "teléfono"),
    ("guest.menu_id", "menú"),
    ("guest.allergies", "alergeno"),
    ("guest.observations", "observaciones"),
    ("guest.accommodation_plan", "plan de alojamiento"),
    ("plus_one.first_name", "nombre del acompañante"),
    ("plus_one.last_name", "apellidos del acompañante"),
    ("plus_one.menu_id", "menú del acompañante"),
    ("plus_one.allergies", "alergeno"),
];

/// Human label for a "<section>.<field>" path. Unknown paths fall back to the
/// last dotted segment so the message still points somewhere useful.
pub fn field_label(path: &str) -> &str {
    FIELD_LABELS
        .iter()
        .find(|(key, _)| *key == path)
        .map(|(_, label)| *label)
        .unwrap_or_else(|| path.rsplit('.').next().unwrap_or(path))
}

/// The API embeds the offending field in free text, e.g.
/// "Invalid content detected in guest.first_name".
pub fn extract_field_path(message: &str) -> Option<String> {
    let pattern = Regex::new(r"(?i)in (guest\.[a-z_]+|plus_one\.[a-z_]+)").unwrap();
    pattern
        .captures(message)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_lowercase())
}

/// Turn a raw security/validation message into something a guest can act on.
/// Total: whatever the API sends back, this returns a displayable string.
pub fn translate_security_error(message: &str, field: &str) -> String {
    let actual = extract_field_path(message).unwrap_or_else(|| field.to_string());
    let label = field_label(&actual);

    if message.contains("Invalid content detected") {
        return format!("El {} contiene caracteres especiales no permitidos", label);
    }
    if message.contains("Security validation failed") {
        return format!("El {} contiene contenido que podría ser inseguro", label);
    }
    if actual.contains("email") && message.contains("validateEmail") {
        return "El formato del correo electrónico no es válido".to_string();
    }
    if actual.contains("phone") && message.contains("validatePhone") {
        return "El formato del teléfono no es válido".to_string();
    }
    format!("Por favor, revisa el contenido introducido en {}", label)
}

/// Map a rejected submission onto the error state the form displays. A
/// `general` entry wins outright and produces a single banner message;
/// otherwise each entry is treated as a field path (bare names belong to the
/// guest section) and a generic banner asks the guest to review the marked
/// fields.
pub fn errors_from_rejection(rejection: &ApiRejection) -> FormErrors {
    match rejection {
        ApiRejection::Validation { error } => {
            if let Some(general) = error.get("general").and_then(|m| m.first()) {
                let field =
                    extract_field_path(general).unwrap_or_else(|| "general".to_string());
                return FormErrors::submit_only(&translate_security_error(general, &field));
            }

            let mut fields = HashMap::new();
            for (field, messages) in error {
                if field == "general" {
                    continue;
                }
                let Some(message) = messages.first() else {
                    continue;
                };
                let path = if field.starts_with("guest.") || field.starts_with("plus_one.") {
                    field.clone()
                } else {
                    format!("guest.{}", field)
                };
                let translated = translate_security_error(message, &path);
                fields.insert(path, translated);
            }

            let submit = (!fields.is_empty()).then(|| SUBMIT_CHECK_FIELDS.to_string());
            FormErrors { fields, submit }
        }
        ApiRejection::MissingResource => FormErrors::submit_only(SUBMIT_MISSING_RESOURCE),
        ApiRejection::Unavailable => FormErrors::submit_only(SUBMIT_RETRY_LATER),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dto::submit::FieldMessages;

    fn validation(entries: &[(&str, &str)]) -> ApiRejection {
        ApiRejection::Validation {
            error: entries
                .iter()
                .map(|(k, v)| (k.to_string(), FieldMessages::One(v.to_string())))
                .collect(),
        }
    }

    #[test]
    fn extracts_field_path_from_free_text() {
        assert_eq!(
            extract_field_path("Invalid content detected in guest.first_name"),
            Some("guest.first_name".to_string())
        );
        assert_eq!(
            extract_field_path("Security validation failed in PLUS_ONE.LAST_NAME"),
            Some("plus_one.last_name".to_string())
        );
        assert_eq!(extract_field_path("nothing to see here"), None);
    }

    #[test]
    fn labels_fall_back_to_the_last_segment() {
        assert_eq!(field_label("guest.first_name"), "nombre");
        assert_eq!(field_label("guest.nickname"), "nickname");
        assert_eq!(field_label("general"), "general");
    }

    #[test]
    fn classifies_messages_in_priority_order() {
        assert_eq!(
            translate_security_error("Invalid content detected in guest.email", "guest.email"),
            "El correo electrónico contiene caracteres especiales no permitidos"
        );
        assert_eq!(
            translate_security_error("Security validation failed", "guest.observations"),
            "El observaciones contiene contenido que podría ser inseguro"
        );
        assert_eq!(
            translate_security_error("validateEmail rejected value", "guest.email"),
            "El formato del correo electrónico no es válido"
        );
        assert_eq!(
            translate_security_error("validatePhone rejected value", "guest.phone"),
            "El formato del teléfono no es válido"
        );
        assert_eq!(
            translate_security_error("something odd", "guest.last_name"),
            "Por favor, revisa el contenido introducido en apellido"
        );
    }

    #[test]
    fn general_error_becomes_a_single_banner_message() {
        let errors = errors_from_rejection(&validation(&[(
            "general",
            "Invalid content detected in guest.first_name",
        )]));

        assert!(errors.fields.is_empty());
        let banner = errors.submit.expect("banner message");
        assert!(banner.contains("nombre"), "got: {}", banner);
    }

    #[test]
    fn bare_field_names_are_scoped_to_the_guest_section() {
        let errors = errors_from_rejection(&validation(&[("phone", "validatePhone failed")]));

        assert_eq!(errors.fields.len(), 1);
        assert_eq!(
            errors.field("guest.phone").as_deref(),
            Some("El formato del teléfono no es válido")
        );
        assert_eq!(errors.submit.as_deref(), Some(SUBMIT_CHECK_FIELDS));
    }

    #[test]
    fn prefixed_field_names_are_kept_as_is() {
        let errors = errors_from_rejection(&validation(&[(
            "plus_one.first_name",
            "Invalid content detected",
        )]));

        assert!(errors.field("plus_one.first_name").is_some());
        assert!(errors.field("guest.plus_one.first_name").is_none());
    }

    #[test]
    fn resource_and_transient_failures_only_set_the_banner() {
        let missing = errors_from_rejection(&ApiRejection::MissingResource);
        assert!(missing.fields.is_empty());
        assert_eq!(missing.submit.as_deref(), Some(SUBMIT_MISSING_RESOURCE));

        let unavailable = errors_from_rejection(&ApiRejection::Unavailable);
        assert!(unavailable.fields.is_empty());
        assert_eq!(unavailable.submit.as_deref(), Some(SUBMIT_RETRY_LATER));
    }
}
