use leptos::prelude::*;

pub mod components;
pub mod pages;
pub mod router;
pub mod state;

use wasm_bindgen::prelude::*;

/// Current `location.pathname`, or `/` outside a browser.
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

#[component]
pub fn App() -> impl IntoView {
    state::provide_loading_state();

    let (path, set_path) = signal(current_path());
    // Back/forward navigation swaps the route and with it the loading view.
    let _ = window_event_listener(leptos::ev::popstate, move |_| set_path.set(current_path()));

    view! {
        <main class="content">
            <router::RouteOutlet path=path>
                <pages::route_page::RoutePage />
            </router::RouteOutlet>
        </main>
    }
}

#[wasm_bindgen(start)]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
