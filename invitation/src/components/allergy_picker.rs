use dto::event::AllergyDto;
use leptos::either::Either;
use leptos::prelude::*;

use crate::icons::close::CloseIcon;

/// Multi-select over the known allergy list that also accepts free text:
/// picking a suggestion or pressing Enter on a typed value adds a chip.
#[component]
pub fn AllergyPicker(
    id: &'static str,
    label: &'static str,
    options: Signal<Vec<AllergyDto>>,
    selected: Signal<Vec<String>>,
    on_add: impl Fn(String) + Send + Sync + Copy + 'static,
    on_remove: impl Fn(String) + Send + Sync + Copy + 'static,
) -> impl IntoView {
    let (input_value, set_input_value) = signal(String::new());
    let (active, set_active) = signal(false);

    let available = Signal::derive(move || {
        let needle = input_value.get().to_lowercase();
        let chosen = selected.get();
        options.get()
            .into_iter()
            .filter(|option| !chosen.iter().any(|name| *name == option.name))
            .filter(|option| option.name.to_lowercase().contains(&needle))
            .collect::<Vec<_>>()
    });

    view! {
        <div
            class="picker"
            on:focusin=move |_| set_active.set(true)
            on:focusout=move |_| set_active.set(false)
        >
            <label for=id>{label}</label>
            {move || {
                if selected.get().is_empty() {
                    Either::Left(view! {})
                } else {
                    Either::Right(
                        view! {
                            <ul class="chips">
                                <For
                                    each=move || selected.get()
                                    key=|name: &String| name.clone()
                                    children=move |name| {
                                        let shown = name.clone();
                                        view! {
                                            <li class="chip">
                                                <span>{shown}</span>
                                                <button
                                                    class="chip-remove"
                                                    aria-label="quitar"
                                                    on:click=move |_| on_remove(name.clone())
                                                >
                                                    <CloseIcon />
                                                </button>
                                            </li>
                                        }
                                    }
                                />
                            </ul>
                        },
                    )
                }
            }}
            <input
                id=id
                class="input"
                autocomplete="off"
                bind:value=(input_value, set_input_value)
                on:keydown=move |e| {
                    if e.key_code() == 13 {
                        e.prevent_default();
                        let typed = input_value.get().trim().to_string();
                        if !typed.is_empty() {
                            on_add(typed);
                            set_input_value.set(String::new());
                        }
                    }
                }
            />
            <ul
                class="picker-options"
                role="listbox"
                style:display=move || if active.get() { "block" } else { "none" }
            >
                <For
                    each=move || available.get()
                    key=|a: &AllergyDto| a.id
                    children=move |allergy| {
                        let shown = allergy.name.clone();
                        view! {
                            <li
                                class="picker-option"
                                role="option"
                                on:mousedown=move |e| {
                                    e.prevent_default();
                                    on_add(allergy.name.clone());
                                    set_input_value.set(String::new());
                                }
                            >
                                {shown}
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
