use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::LocaleConfig;
use crate::layout::LayoutNode;
use crate::route::{self, RouteError, RouteKind, RouteMatch};
use crate::views;

/// A loading view: parameterless, side-effect free, deterministic.
pub type LoadingView = fn() -> LayoutNode;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("route `{0}` already has a loading view")]
    Duplicate(RouteKind),
    #[error("no loading view registered for route `{0}`")]
    Missing(RouteKind),
    #[error(transparent)]
    Route(#[from] RouteError),
}

/// Problem found by [`LoadingRegistry::verify`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "issue", content = "route", rename_all = "snake_case")]
pub enum ViewIssue {
    Missing(RouteKind),
    Empty(RouteKind),
    NonDeterministic(RouteKind),
}

impl std::fmt::Display for ViewIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewIssue::Missing(k) => write!(f, "{k}: no loading view registered"),
            ViewIssue::Empty(k) => write!(f, "{k}: loading view has no skeleton primitives"),
            ViewIssue::NonDeterministic(k) => {
                write!(f, "{k}: loading view differs between invocations")
            }
        }
    }
}

// ---------------------------------------------------------------------------
// LoadingRegistry
// ---------------------------------------------------------------------------

/// Explicit route -> loading view map handed to the rendering layer.
#[derive(Debug, Clone, Default)]
pub struct LoadingRegistry {
    views: HashMap<RouteKind, LoadingView>,
}

impl LoadingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with a loading view for every route.
    pub fn builtin() -> Self {
        let entries: [(RouteKind, LoadingView); 12] = [
            (RouteKind::ProfileEdit, views::profile_edit),
            (RouteKind::JoinedTournaments, views::joined_tournaments),
            (RouteKind::SeriesNew, views::series_new),
            (RouteKind::SeriesDetail, views::series_detail),
            (RouteKind::SeriesEdit, views::series_edit),
            (RouteKind::SeriesRanking, views::series_ranking),
            (RouteKind::TeamNew, views::team_new),
            (RouteKind::TeamDetail, views::team_detail),
            (RouteKind::TeamEdit, views::team_edit),
            (RouteKind::TournamentNew, views::tournament_new),
            (RouteKind::TournamentEdit, views::tournament_edit),
            (RouteKind::TournamentEntry, views::tournament_entry),
        ];
        Self {
            views: entries.into_iter().collect(),
        }
    }

    pub fn register(&mut self, kind: RouteKind, view: LoadingView) -> Result<(), RegistryError> {
        if self.views.contains_key(&kind) {
            warn!(route = %kind, "duplicate loading view registration");
            return Err(RegistryError::Duplicate(kind));
        }
        debug!(route = %kind, "registered loading view");
        self.views.insert(kind, view);
        Ok(())
    }

    pub fn get(&self, kind: RouteKind) -> Option<LoadingView> {
        self.views.get(&kind).copied()
    }

    pub fn contains(&self, kind: RouteKind) -> bool {
        self.views.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Registered routes in declaration order.
    pub fn routes(&self) -> Vec<RouteKind> {
        RouteKind::all()
            .iter()
            .copied()
            .filter(|k| self.contains(*k))
            .collect()
    }

    /// Routes without a loading view.
    pub fn missing(&self) -> Vec<RouteKind> {
        RouteKind::all()
            .iter()
            .copied()
            .filter(|k| !self.contains(*k))
            .collect()
    }

    /// Produce the loading view tree for `kind`.
    pub fn render(&self, kind: RouteKind) -> Result<LayoutNode, RegistryError> {
        match self.get(kind) {
            Some(view) => {
                debug!(route = %kind, "rendering loading view");
                Ok(view())
            }
            None => {
                warn!(route = %kind, "no loading view registered");
                Err(RegistryError::Missing(kind))
            }
        }
    }

    /// Resolve a URL path and produce its loading view.
    pub fn resolve_path(
        &self,
        path: &str,
        locales: &LocaleConfig,
    ) -> Result<(RouteMatch, LayoutNode), RegistryError> {
        let matched = route::resolve_path(path, locales)?;
        let tree = self.render(matched.kind)?;
        Ok((matched, tree))
    }

    /// Check every route: registered, non-empty, deterministic.
    pub fn verify(&self) -> Vec<ViewIssue> {
        let mut issues = Vec::new();
        for &kind in RouteKind::all() {
            let Some(view) = self.get(kind) else {
                issues.push(ViewIssue::Missing(kind));
                continue;
            };
            let first = view();
            if first.is_empty() {
                issues.push(ViewIssue::Empty(kind));
            }
            if view() != first {
                issues.push(ViewIssue::NonDeterministic(kind));
            }
        }
        if !issues.is_empty() {
            warn!(count = issues.len(), "loading view registry has issues");
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{ContainerStyle, SkeletonPrimitive};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn empty_view() -> LayoutNode {
        LayoutNode::container(ContainerStyle::PAGE, vec![])
    }

    #[test]
    fn builtin_covers_every_route() {
        let reg = LoadingRegistry::builtin();
        assert_eq!(reg.len(), RouteKind::all().len());
        assert!(reg.missing().is_empty());
        assert_eq!(reg.routes(), RouteKind::all().to_vec());
        assert!(reg.verify().is_empty());
    }

    #[test]
    fn register_duplicate_fails() {
        let mut reg = LoadingRegistry::new();
        reg.register(RouteKind::TeamNew, views::team_new).unwrap();
        let err = reg
            .register(RouteKind::TeamNew, views::team_edit)
            .unwrap_err();
        assert!(matches!(err, RegistryError::Duplicate(RouteKind::TeamNew)));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn render_missing_route_fails() {
        let reg = LoadingRegistry::new();
        assert!(reg.is_empty());
        let err = reg.render(RouteKind::SeriesDetail).unwrap_err();
        assert_eq!(
            err.to_string(),
            "no loading view registered for route `series_detail`"
        );
    }

    #[test]
    fn verify_reports_missing_and_empty() {
        let mut reg = LoadingRegistry::new();
        reg.register(RouteKind::ProfileEdit, empty_view).unwrap();
        let issues = reg.verify();
        assert!(issues.contains(&ViewIssue::Empty(RouteKind::ProfileEdit)));
        assert!(issues.contains(&ViewIssue::Missing(RouteKind::TeamDetail)));
        assert_eq!(issues.len(), RouteKind::all().len());
    }

    static DRIFT_CALLS: AtomicUsize = AtomicUsize::new(0);

    fn drifting_view() -> LayoutNode {
        let rows = DRIFT_CALLS.fetch_add(1, Ordering::SeqCst) + 1;
        LayoutNode::container(
            ContainerStyle::PAGE,
            vec![LayoutNode::primitive(SkeletonPrimitive::Table { rows })],
        )
    }

    #[test]
    fn verify_reports_non_deterministic_view() {
        let mut reg = LoadingRegistry::builtin();
        reg.views.insert(RouteKind::SeriesRanking, drifting_view);
        let issues = reg.verify();
        assert_eq!(
            issues,
            vec![ViewIssue::NonDeterministic(RouteKind::SeriesRanking)]
        );
    }

    #[test]
    fn resolve_path_returns_match_and_tree() {
        let reg = LoadingRegistry::builtin();
        let (m, tree) = reg
            .resolve_path("/en/profile/tournaments", &LocaleConfig::default())
            .unwrap();
        assert_eq!(m.kind, RouteKind::JoinedTournaments);
        assert!(tree
            .primitives()
            .contains(&SkeletonPrimitive::CardList { count: 6 }));
    }

    #[test]
    fn resolve_unknown_path_wraps_route_error() {
        let reg = LoadingRegistry::builtin();
        let err = reg
            .resolve_path("/en/nowhere", &LocaleConfig::default())
            .unwrap_err();
        assert!(matches!(err, RegistryError::Route(RouteError::NotFound(_))));
    }
}
