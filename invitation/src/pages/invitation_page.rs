use leptos::prelude::*;

use crate::{
    components::{
        event_card::EventCard,
        event_provider::{ConfigContext, EventDateResource, LocationResource},
        loader::Loader,
        modals::confirmation_modal::ConfirmationModal,
    },
    dates::parse_event_date,
};

#[component]
pub fn InvitationPage() -> impl IntoView {
    let ConfigContext(config) = use_context().unwrap();
    let EventDateResource(event_date) = use_context().unwrap();
    let LocationResource(locations) = use_context().unwrap();

    let (modal_open, set_modal_open) = signal(false);

    view! {
        <header class="event-header">
            <p class="event-subtitle">"¡Nos casamos!"</p>
            <h1 class="event-title">"Lucía & Marco"</h1>
        </header>
        <main class="event-content">
            <Loader>
                {move || Suspend::new(async move {
                    let date = event_date.await?;
                    // The page is still worth showing without locations.
                    let locations = locations.await.unwrap_or_default();
                    let target = date.date.as_deref().and_then(parse_event_date);
                    Ok::<_, ServerFnError>(
                        view! {
                            <EventCard
                                event_date=target
                                locations
                                demo_mode=config.get_untracked().demo_mode
                                on_confirm=move || set_modal_open.set(true)
                            />
                        },
                    )
                })}
            </Loader>
        </main>
        <ConfirmationModal is_open=modal_open.into() on_close=move || set_modal_open.set(false) />
    }
}
