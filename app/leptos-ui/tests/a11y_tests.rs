// =============================================================================
// a11y_tests.rs - Accessibility checks for bracket loading views
//
// A loading view must announce itself once as a busy status region and keep
// every decorative bar out of the accessibility tree.
//
// Run with:
//   cd app/leptos-ui && wasm-pack test --headless --chrome
// =============================================================================
#![cfg(target_arch = "wasm32")]

use bk_core::config::{LocaleConfig, SkeletonConfig};
use bk_core::{LoadingRegistry, RouteKind};
use bk_leptos_ui::components::layout_view::LayoutView;
use bk_leptos_ui::state::{provide_loading_state_with, LoadingState};
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

/// Mount the loading view for `kind`; dropping the returned handle unmounts it.
fn mount_route(kind: RouteKind, skeleton: SkeletonConfig) -> (web_sys::HtmlElement, impl Sized) {
    let document = web_sys::window()
        .expect("no window")
        .document()
        .expect("no document");
    let parent: web_sys::HtmlElement = document
        .create_element("div")
        .expect("create element")
        .unchecked_into();
    document.body().expect("no body").append_child(&parent).expect("append");

    let node = LoadingRegistry::builtin().render(kind).expect("registered");
    let handle = leptos::mount::mount_to(parent.clone(), move || {
        provide_loading_state_with(LoadingState {
            registry: Arc::new(LoadingRegistry::builtin()),
            locales: Arc::new(LocaleConfig::default()),
            skeleton: Arc::new(skeleton),
        });
        view! { <LayoutView node=node /> }
    });
    (parent, handle)
}

fn unmount(root: web_sys::HtmlElement, handle: impl Sized) {
    drop(handle);
    root.remove();
}

#[wasm_bindgen_test]
fn every_view_is_a_single_busy_status_region() {
    for &kind in RouteKind::all() {
        let (root, handle) = mount_route(kind, SkeletonConfig::default());
        let regions = root.query_selector_all("[role=status]").unwrap();
        assert_eq!(regions.length(), 1, "{kind} must expose exactly one status region");
        let region = root.query_selector("[role=status]").unwrap().unwrap();
        assert_eq!(region.get_attribute("aria-busy").as_deref(), Some("true"));
        unmount(root, handle);
    }
}

#[wasm_bindgen_test]
fn status_region_carries_configured_label() {
    let skeleton = SkeletonConfig {
        label: "Chargement...".into(),
        ..SkeletonConfig::default()
    };
    let (root, handle) = mount_route(RouteKind::TeamDetail, skeleton);
    let label = root.query_selector(".sr-only").unwrap().expect("sr-only label");
    assert_eq!(label.text_content().as_deref(), Some("Chargement..."));
    unmount(root, handle);
}

#[wasm_bindgen_test]
fn skeleton_bars_are_aria_hidden() {
    for &kind in RouteKind::all() {
        let (root, handle) = mount_route(kind, SkeletonConfig::default());
        let bars = root.query_selector_all(".skeleton").unwrap().length();
        let hidden = root
            .query_selector_all(".skeleton[aria-hidden=true]")
            .unwrap()
            .length();
        assert!(bars > 0, "{kind} rendered no bars");
        assert_eq!(bars, hidden, "{kind} has bars visible to screen readers");
        unmount(root, handle);
    }
}

#[wasm_bindgen_test]
fn dropping_the_handle_unmounts_the_view() {
    let (root, handle) = mount_route(RouteKind::SeriesRanking, SkeletonConfig::default());
    assert_eq!(root.query_selector_all("[role=status]").unwrap().length(), 1);
    drop(handle);
    assert_eq!(root.query_selector_all("[role=status]").unwrap().length(), 0);
    root.remove();
}
