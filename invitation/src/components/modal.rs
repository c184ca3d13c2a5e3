use leptos::prelude::*;

use crate::icons::close::CloseIcon;

#[component]
pub fn Modal(
    is_open: impl Fn() -> bool + Send + Sync + Copy + 'static,
    on_close: impl Fn() + Send + Sync + Copy + 'static,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <div
            class="modal-backdrop"
            class:hidden=move || !is_open()
            on:click=move |_| on_close()
        >
            <div
                class="modal-panel"
                role="dialog"
                aria-modal="true"
                on:click=|e| e.stop_propagation()
            >
                <button class="modal-close" aria-label="cerrar" on:click=move |_| on_close()>
                    <CloseIcon />
                </button>
                <Show when=is_open>{children()}</Show>
            </div>
        </div>
    }
}
