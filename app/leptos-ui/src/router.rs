use bk_core::route::{self, RouteMatch};
use leptos::prelude::*;

use crate::components::route_loading::RouteLoading;
use crate::state::use_loading_state;

/// Resolves `path` and renders `children` for it.
///
/// While anything `children` reads is still pending, the route's registered
/// loading view is shown in its place. The resolved [`RouteMatch`] is provided
/// as context so the page can read its locale and `[id]`.
#[component]
pub fn RouteOutlet(#[prop(into)] path: Signal<String>, children: ChildrenFn) -> impl IntoView {
    let state = use_loading_state();

    move || {
        let path = path.get();
        match route::resolve_path(&path, &state.locales) {
            Ok(matched) => {
                let route = matched.kind;
                provide_context(matched);
                let children = children.clone();
                view! {
                    <Suspense fallback=move || view! { <RouteLoading route=route /> }>
                        {children()}
                    </Suspense>
                }
                .into_any()
            }
            Err(e) => view! {
                <div class="route-not-found" role="alert">{e.to_string()}</div>
            }
            .into_any(),
        }
    }
}

/// The route resolved by the nearest [`RouteOutlet`].
pub fn use_route() -> Option<RouteMatch> {
    use_context::<RouteMatch>()
}
