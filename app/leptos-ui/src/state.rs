use std::sync::Arc;

use bk_core::config::{LocaleConfig, SkeletonConfig};
use bk_core::LoadingRegistry;
use leptos::prelude::*;

/// Loading-view settings shared through Leptos context.
#[derive(Clone)]
pub struct LoadingState {
    pub registry: Arc<LoadingRegistry>,
    pub locales: Arc<LocaleConfig>,
    pub skeleton: Arc<SkeletonConfig>,
}

impl Default for LoadingState {
    fn default() -> Self {
        Self {
            registry: Arc::new(LoadingRegistry::builtin()),
            locales: Arc::new(LocaleConfig::default()),
            skeleton: Arc::new(SkeletonConfig::default()),
        }
    }
}

/// Provide the builtin registry with default locale and skeleton settings.
pub fn provide_loading_state() {
    provide_context(LoadingState::default());
}

pub fn provide_loading_state_with(state: LoadingState) {
    provide_context(state);
}

pub fn use_loading_state() -> LoadingState {
    expect_context::<LoadingState>()
}

/// Skeleton settings from context, or the defaults when rendered standalone.
pub fn skeleton_settings() -> Arc<SkeletonConfig> {
    use_context::<LoadingState>()
        .map(|s| s.skeleton)
        .unwrap_or_else(|| Arc::new(SkeletonConfig::default()))
}
