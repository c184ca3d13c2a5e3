use leptos::prelude::*;

/// Suspense + error boundary wrapper for resource-backed sections. Failures
/// show the same copy for every section; details stay in the console log.
#[component]
pub fn Loader(children: ChildrenFn) -> impl IntoView {
    view! {
        <Suspense fallback=|| view! { <div class="loading">"Cargando..."</div> }>
            <ErrorBoundary fallback=|_| {
                view! {
                    <div class="load-error">
                        "No se pudieron cargar los datos del evento. Por favor, intente nuevamente más tarde."
                    </div>
                }
            }>{children()}</ErrorBoundary>
        </Suspense>
    }
}
