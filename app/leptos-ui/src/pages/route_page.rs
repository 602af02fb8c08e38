use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::router::use_route;

/// Simulated page fetch; the real pages plug their own resources in here.
const PAGE_FETCH_DELAY_MS: u32 = 800;

/// Page body rendered once its data has arrived.
#[component]
pub fn RoutePage() -> impl IntoView {
    let route = use_route();
    let data = LocalResource::new(|| async {
        TimeoutFuture::new(PAGE_FETCH_DELAY_MS).await;
    });

    move || {
        let route = route.clone();
        data.get().map(move |_| match route {
            Some(m) => view! {
                <section class="page" data-route=m.kind.name()>
                    <h1>{m.kind.pattern()}</h1>
                    <p class="page-meta">
                        {format!("locale: {}", m.locale)}
                        {m.id.map(|id| format!(" / id: {id}"))}
                    </p>
                </section>
            }
            .into_any(),
            None => ().into_any(),
        })
    }
}
