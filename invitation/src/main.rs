#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use invitation::app::{shell, App};
    use invitation::services::api::ApiClient;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use simple_logger::SimpleLogger;

    SimpleLogger::new().init().expect("Failed to set up logging");

    let api = ApiClient::from_env();

    let conf = get_configuration(None).expect("Failed to read leptos configuration");
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let api = api.clone();
                move || provide_context(api.clone())
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    log::info!("listening on http://{}", &addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind site address");
    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server failed");
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main: hydration happens through the wasm entry point
}
