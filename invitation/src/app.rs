use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{ParentRoute, Route, Router, Routes},
    path,
};

use crate::{
    components::{event_provider::EventProvider, toast::ToastHost},
    pages::invitation_page::InvitationPage,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/invitation.css" />

        <Title text="Lucía & Marco - ¡Nos casamos!" />

        <Router>
            <ToastHost>
                <Routes fallback=|| "Página no encontrada".into_view()>
                    <ParentRoute path=path!("/") view=EventProvider>
                        <Route path=path!("/") view=InvitationPage />
                    </ParentRoute>
                </Routes>
            </ToastHost>
        </Router>
    }
}
