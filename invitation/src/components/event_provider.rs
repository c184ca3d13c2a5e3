use dto::event::{AllergyDto, EventDateDto, LocationDto, MenuDto};
use leptos::prelude::*;
use leptos_router::{components::Outlet, hooks::use_query_map};

use crate::config::PublicConfig;
use crate::services::public::{get_allergies, get_event_date, get_locations, get_menus};

#[derive(Clone, Copy, Debug)]
pub struct ConfigContext(pub Memo<PublicConfig>);

#[derive(Clone, Copy, Debug)]
pub struct MenuResource(pub Resource<Result<Vec<MenuDto>, ServerFnError>>);

#[derive(Clone, Copy, Debug)]
pub struct AllergyResource(pub Resource<Result<Vec<AllergyDto>, ServerFnError>>);

#[derive(Clone, Copy, Debug)]
pub struct LocationResource(pub Resource<Result<Vec<LocationDto>, ServerFnError>>);

#[derive(Clone, Copy, Debug)]
pub struct EventDateResource(pub Resource<Result<EventDateDto, ServerFnError>>);

/// Builds the page configuration from the URL and starts the event-data
/// fetches; everything below the route outlet reads them from context.
#[component]
pub fn EventProvider() -> impl IntoView {
    let query = use_query_map();
    let config = Memo::new(move |_| {
        let query = query.read();
        PublicConfig::resolve(
            query.get("userId").as_deref(),
            query.get("demo").as_deref(),
        )
    });

    let menus = Resource::new(
        move || config.get().user_id,
        |user_id| async move { get_menus(user_id).await },
    );
    let allergies = Resource::new(|| (), |_| async move { get_allergies().await });
    let locations = Resource::new(
        move || config.get().user_id,
        |user_id| async move { get_locations(user_id).await },
    );
    let event_date = Resource::new(
        move || config.get().user_id,
        |user_id| async move { get_event_date(user_id).await },
    );

    provide_context(ConfigContext(config));
    provide_context(MenuResource(menus));
    provide_context(AllergyResource(allergies));
    provide_context(LocationResource(locations));
    provide_context(EventDateResource(event_date));

    view! { <Outlet /> }
}
