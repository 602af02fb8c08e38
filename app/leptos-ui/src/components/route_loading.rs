use bk_core::RouteKind;
use leptos::prelude::*;

use super::layout_view::LayoutView;
use crate::state::use_loading_state;

/// The registered loading view for `route`, or nothing if it has none.
#[component]
pub fn RouteLoading(route: RouteKind) -> impl IntoView {
    let state = use_loading_state();
    match state.registry.render(route) {
        Ok(node) => view! { <LayoutView node=node /> }.into_any(),
        Err(e) => {
            web_sys::console::warn_1(&format!("[loading] {e}").into());
            ().into_any()
        }
    }
}
