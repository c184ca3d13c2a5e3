use std::collections::HashMap;

use dto::guest::{GuestDto, PlusOneDto};

/// Answer to "¿Vienes acompañado?". Companion fields only become mandatory
/// once the answer is Yes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HasPlusOne {
    Yes,
    #[default]
    No,
}

/// Everything the confirmation form holds while the dialog is open. Field
/// edits replace a single leaf and leave the rest untouched; nothing here is
/// persisted past the dialog lifecycle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfirmationFormState {
    pub guest: GuestDto,
    pub plus_one: PlusOneDto,
    pub has_plus_one: HasPlusOne,
}

/// Field-level messages keyed "<section>.<field>", plus the banner shown next
/// to the submit button for request-level failures.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormErrors {
    pub fields: HashMap<String, String>,
    pub submit: Option<String>,
}

impl FormErrors {
    pub fn submit_only(message: &str) -> Self {
        FormErrors {
            fields: HashMap::new(),
            submit: Some(message.to_string()),
        }
    }

    pub fn from_fields(fields: HashMap<String, String>) -> Self {
        FormErrors {
            fields,
            submit: None,
        }
    }

    pub fn field(&self, key: &str) -> Option<String> {
        self.fields.get(key).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.submit.is_none()
    }
}

/// Required-field check over the current form state. An empty map means the
/// form can be submitted. Allergies, observations and the accommodation plan
/// are optional for both sections.
pub fn validate(state: &ConfirmationFormState) -> HashMap<String, String> {
    let mut errors = HashMap::new();
    let mut require = |key: &str, present: bool, message: &str| {
        if !present {
            errors.insert(key.to_string(), message.to_string());
        }
    };

    let guest = &state.guest;
    require(
        "guest.first_name",
        !guest.first_name.is_empty(),
        "El nombre es requerido",
    );
    require(
        "guest.last_name",
        !guest.last_name.is_empty(),
        "El apellido es requerido",
    );
    require(
        "guest.phone",
        !guest.phone.is_empty(),
        "El teléfono es requerido",
    );
    require(
        "guest.email",
        !guest.email.is_empty(),
        "El email es requerido",
    );
    require("guest.menu_id", guest.menu_id.is_some(), "El menú es requerido");

    if state.has_plus_one == HasPlusOne::Yes {
        let plus_one = &state.plus_one;
        require(
            "plus_one.first_name",
            !plus_one.first_name.is_empty(),
            "El nombre del acompañante es requerido",
        );
        require(
            "plus_one.last_name",
            !plus_one.last_name.is_empty(),
            "El apellido del acompañante es requerido",
        );
        require(
            "plus_one.menu_id",
            plus_one.menu_id.is_some(),
            "El menú del acompañante es requerido",
        );
    }

    errors
}
