use std::time::Duration;

use dto::event::{AllergyDto, MenuDto};
use dto::guest::CreateRsvpDto;
use leptos::either::Either;
use leptos::prelude::*;
use uuid::Uuid;

use crate::{
    components::{
        allergy_picker::AllergyPicker,
        event_provider::{AllergyResource, ConfigContext, MenuResource},
        modal::Modal,
        toast::{use_toasts, ToastContext},
    },
    form::{validate, ConfirmationFormState, FormErrors, HasPlusOne},
    services::public::create_guest_with_plus_one,
    submit::{build_payload, conclude, SubmitPhase},
};

const ACCOMMODATION_OPTIONS: &[&str] = &["Sevilla", "Madrid", "Barcelona", "Valencia", "Bilbao"];

/// Close animation length; the form is wiped once the dialog has faded out.
const RESET_DELAY: Duration = Duration::from_millis(400);

#[component]
pub fn ConfirmationModal(
    is_open: Signal<bool>,
    on_close: impl Fn() + Send + Sync + Copy + 'static,
) -> impl IntoView {
    let ConfigContext(config) = use_context().unwrap();

    // Form state lives up here, outside the dialog body, so it survives the
    // open/close animation and can be reset on our own schedule.
    let state = RwSignal::new(ConfirmationFormState::default());
    let (phase, set_phase) = signal(SubmitPhase::default());
    let (errors, set_errors) = signal(FormErrors::default());

    let is_valid = Memo::new(move |_| validate(&state.read()).is_empty());

    let submit = Action::new(move |payload: &CreateRsvpDto| {
        let payload = payload.clone();
        async move {
            let outcome = create_guest_with_plus_one(payload).await;
            // The dialog may have been closed and reset while the request was
            // in flight; a stale reply must not resurrect old state.
            if !is_open.get_untracked() {
                return;
            }
            let (next, next_errors) = conclude(outcome);
            set_phase.set(next);
            set_errors.set(next_errors);
        }
    });

    let on_submit = move |_| {
        if !is_valid.get_untracked() {
            set_errors.set(FormErrors::from_fields(validate(&state.read_untracked())));
            return;
        }
        let mut next = phase.get_untracked();
        if !next.try_begin(true) {
            return;
        }
        set_phase.set(next);
        submit.dispatch(build_payload(
            &state.read_untracked(),
            config.get_untracked().user_id,
        ));
    };

    Effect::new(move |_| {
        if !is_open.get() {
            set_timeout(
                move || {
                    if is_open.get_untracked() {
                        return;
                    }
                    state.set(ConfirmationFormState::default());
                    set_phase.set(SubmitPhase::default());
                    set_errors.set(FormErrors::default());
                },
                RESET_DELAY,
            );
        }
    });

    view! {
        <Modal is_open=move || is_open.get() on_close=on_close>
            <h2 class="modal-title">
                {move || {
                    if phase.get().is_submitted() {
                        "¡Gracias por confirmar!"
                    } else {
                        "¿Te gustaría acompañarnos?"
                    }
                }}
            </h2>
            {move || {
                if phase.get().is_submitted() {
                    Either::Left(view! { <p class="success-message">"¡Nos vemos en la boda!"</p> })
                } else {
                    Either::Right(view! { <FormBody state errors /> })
                }
            }}
            {move || {
                errors
                    .read()
                    .submit
                    .clone()
                    .map(|msg| view! { <p class="submit-error">{msg}</p> })
            }}
            <div class="modal-actions">
                {move || {
                    if phase.get().is_submitted() {
                        Either::Left(
                            view! {
                                <button class="btn" on:click=move |_| on_close()>
                                    "Cerrar"
                                </button>
                            },
                        )
                    } else {
                        Either::Right(
                            view! {
                                <button
                                    class="btn save"
                                    on:click=on_submit
                                    disabled=move || !is_valid.get() || phase.get().is_submitting()
                                >
                                    {move || {
                                        if phase().is_submitting() { "Enviando..." } else { "Confirmar" }
                                    }}
                                </button>
                            },
                        )
                    }
                }}
            </div>
        </Modal>
    }
}

/// Waits for the selectable options, then renders the form proper. Either
/// list failing to load degrades to an empty list plus a toast, as the page
/// is still useful without them.
#[component]
fn FormBody(state: RwSignal<ConfirmationFormState>, errors: ReadSignal<FormErrors>) -> impl IntoView {
    let MenuResource(menus) = use_context().unwrap();
    let AllergyResource(allergies) = use_context().unwrap();
    let toasts = use_toasts();

    view! {
        <Suspense fallback=|| view! { <div class="loading">"Cargando..."</div> }>
            {move || Suspend::new(async move {
                let menus = menus.await.unwrap_or_else(|e| {
                    toasts.error("No se pudieron cargar los menús", e);
                    vec![]
                });
                let allergies = allergies.await.unwrap_or_else(|e| {
                    toasts.error("No se pudieron cargar las alergias", e);
                    vec![]
                });
                view! { <FormFields state errors menus allergies /> }
            })}
        </Suspense>
    }
}

#[component]
fn FormFields(
    state: RwSignal<ConfirmationFormState>,
    errors: ReadSignal<FormErrors>,
    menus: Vec<MenuDto>,
    allergies: Vec<AllergyDto>,
) -> impl IntoView {
    let error_for = move |key: &'static str| Signal::derive(move || errors.read().field(key));

    let guest_menus = menus.clone();
    let plus_one_menus = menus;
    let guest_allergies = allergies.clone();
    let plus_one_allergies = allergies;

    view! {
        <div class="form-grid">
            <TextField
                id="guest-first-name"
                label="Nombre"
                value=Signal::derive(move || state.read().guest.first_name.clone())
                on_input=move |v| state.write().guest.first_name = v
                error=error_for("guest.first_name")
            />
            <TextField
                id="guest-last-name"
                label="Apellido"
                value=Signal::derive(move || state.read().guest.last_name.clone())
                on_input=move |v| state.write().guest.last_name = v
                error=error_for("guest.last_name")
            />
            <TextField
                id="guest-phone"
                label="Teléfono"
                input_type="tel"
                value=Signal::derive(move || state.read().guest.phone.clone())
                on_input=move |v| state.write().guest.phone = v
                error=error_for("guest.phone")
            />
            <TextField
                id="guest-email"
                label="Email"
                input_type="email"
                value=Signal::derive(move || state.read().guest.email.clone())
                on_input=move |v| state.write().guest.email = v
                error=error_for("guest.email")
            />
            <MenuSelect
                id="guest-menu"
                label="Seleccione el menú"
                menus=guest_menus
                value=Signal::derive(move || state.read().guest.menu_id)
                on_change=move |id| state.write().guest.menu_id = id
                error=error_for("guest.menu_id")
            />
            <div class="field">
                <label for="guest-observations">"Observaciones"</label>
                <textarea
                    id="guest-observations"
                    class="input"
                    rows="4"
                    prop:value=move || state.read().guest.observations.clone()
                    on:input:target=move |ev| state.write().guest.observations = ev.target().value()
                ></textarea>
            </div>
            <AllergyPicker
                id="guest-allergies"
                label="Seleccione o escriba las alergias"
                options=Signal::derive(move || guest_allergies.clone())
                selected=Signal::derive(move || state.read().guest.allergies.clone())
                on_add=move |name: String| {
                    let mut current = state.write();
                    if !current.guest.allergies.contains(&name) {
                        current.guest.allergies.push(name);
                    }
                }
                on_remove=move |name: String| {
                    state.write().guest.allergies.retain(|a| *a != name)
                }
            />
            <div class="field">
                <label for="guest-accommodation">"Desde donde sales"</label>
                <select
                    id="guest-accommodation"
                    class="input"
                    prop:value=move || state.read().guest.accommodation_plan.clone()
                    on:change:target=move |ev| {
                        state.write().guest.accommodation_plan = ev.target().value()
                    }
                >
                    <option value="">"Desde donde sales"</option>
                    {ACCOMMODATION_OPTIONS
                        .iter()
                        .map(|city| view! { <option value=*city>{*city}</option> })
                        .collect_view()}
                </select>
            </div>
            <CheckboxField
                id="guest-transport"
                label="¿Necesitas autobús de ida?"
                checked=Signal::derive(move || state.read().guest.needs_transport)
                on_change=move |v| state.write().guest.needs_transport = v
            />
            <CheckboxField
                id="guest-transport-back"
                label="¿Necesitas autobús de vuelta?"
                checked=Signal::derive(move || state.read().guest.needs_transport_back)
                on_change=move |v| state.write().guest.needs_transport_back = v
            />
            <CheckboxField
                id="guest-hotel"
                label="¿Necesitas alojamiento?"
                checked=Signal::derive(move || state.read().guest.needs_hotel)
                on_change=move |v| state.write().guest.needs_hotel = v
            />

            <fieldset class="field">
                <legend>"¿Vienes acompañado?"</legend>
                <label class="radio">
                    <input
                        type="radio"
                        name="has_plus_one"
                        prop:checked=move || state.read().has_plus_one == HasPlusOne::Yes
                        on:change=move |_| state.write().has_plus_one = HasPlusOne::Yes
                    />
                    "Sí"
                </label>
                <label class="radio">
                    <input
                        type="radio"
                        name="has_plus_one"
                        prop:checked=move || state.read().has_plus_one == HasPlusOne::No
                        on:change=move |_| state.write().has_plus_one = HasPlusOne::No
                    />
                    "No"
                </label>
            </fieldset>

            <Show when=move || state.read().has_plus_one == HasPlusOne::Yes>
                <TextField
                    id="plus-one-first-name"
                    label="Nombre del acompañante"
                    value=Signal::derive(move || state.read().plus_one.first_name.clone())
                    on_input=move |v| state.write().plus_one.first_name = v
                    error=error_for("plus_one.first_name")
                />
                <TextField
                    id="plus-one-last-name"
                    label="Apellido del acompañante"
                    value=Signal::derive(move || state.read().plus_one.last_name.clone())
                    on_input=move |v| state.write().plus_one.last_name = v
                    error=error_for("plus_one.last_name")
                />
                <MenuSelect
                    id="plus-one-menu"
                    label="Seleccione el menú del acompañante"
                    menus=plus_one_menus.clone()
                    value=Signal::derive(move || state.read().plus_one.menu_id)
                    on_change=move |id| state.write().plus_one.menu_id = id
                    error=error_for("plus_one.menu_id")
                />
                <AllergyPicker
                    id="plus-one-allergies"
                    label="Seleccione o escriba las alergias del acompañante"
                    options=Signal::derive({
                        let plus_one_allergies = plus_one_allergies.clone();
                        move || plus_one_allergies.clone()
                    })
                    selected=Signal::derive(move || state.read().plus_one.allergies.clone())
                    on_add=move |name: String| {
                        let mut current = state.write();
                        if !current.plus_one.allergies.contains(&name) {
                            current.plus_one.allergies.push(name);
                        }
                    }
                    on_remove=move |name: String| {
                        state.write().plus_one.allergies.retain(|a| *a != name)
                    }
                />
            </Show>

            // Hidden bot trap; a real guest never sees or ticks it.
            <div class="field" style:display="none">
                <CheckboxField
                    id="honeypot"
                    label="¿Eres humano?"
                    checked=Signal::derive(move || state.read().guest.honeypot)
                    on_change=move |v| state.write().guest.honeypot = v
                />
            </div>
        </div>
    }
}

#[component]
fn TextField(
    id: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    value: Signal<String>,
    on_input: impl Fn(String) + Send + Sync + Copy + 'static,
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="field">
            <label for=id>{label}</label>
            <input
                id=id
                class="input"
                class:invalid=move || error.read().is_some()
                type=input_type
                prop:value=move || value()
                on:input:target=move |ev| on_input(ev.target().value())
            />
            {move || error().map(|msg| view! { <p class="field-error">{msg}</p> })}
        </div>
    }
}

#[component]
fn MenuSelect(
    id: &'static str,
    label: &'static str,
    menus: Vec<MenuDto>,
    value: Signal<Option<Uuid>>,
    on_change: impl Fn(Option<Uuid>) + Send + Sync + Copy + 'static,
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="field">
            <label for=id>{label}</label>
            <select
                id=id
                class="input"
                class:invalid=move || error.read().is_some()
                prop:value=move || value().map(|id| id.to_string()).unwrap_or_default()
                on:change:target=move |ev| on_change(Uuid::parse_str(&ev.target().value()).ok())
            >
                <option value="">{label}</option>
                <For
                    each=move || menus.clone()
                    key=|menu: &MenuDto| menu.id
                    children=|menu| {
                        view! { <option value=menu.id.to_string()>{menu.name.clone()}</option> }
                    }
                />
            </select>
            {move || error().map(|msg| view! { <p class="field-error">{msg}</p> })}
        </div>
    }
}

#[component]
fn CheckboxField(
    id: &'static str,
    label: &'static str,
    checked: Signal<bool>,
    on_change: impl Fn(bool) + Send + Sync + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="field check">
            <input
                id=id
                type="checkbox"
                prop:checked=move || checked()
                on:change:target=move |ev| on_change(ev.target().checked())
            />
            <label for=id>{label}</label>
        </div>
    }
}
