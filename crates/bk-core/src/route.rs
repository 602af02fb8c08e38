use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::LocaleConfig;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("no route matches path `{0}`")]
    NotFound(String),
    #[error("unknown route id: `{0}`")]
    UnknownRouteId(String),
}

// ---------------------------------------------------------------------------
// RouteKind
// ---------------------------------------------------------------------------

/// Every page that declares a loading view.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RouteKind {
    ProfileEdit,
    JoinedTournaments,
    SeriesNew,
    SeriesDetail,
    SeriesEdit,
    SeriesRanking,
    TeamNew,
    TeamDetail,
    TeamEdit,
    TournamentNew,
    TournamentEdit,
    TournamentEntry,
}

/// Shape shared by a group of routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteFamily {
    Form,
    List,
    Detail,
    Ranking,
}

impl fmt::Display for RouteFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RouteFamily::Form => "form",
            RouteFamily::List => "list",
            RouteFamily::Detail => "detail",
            RouteFamily::Ranking => "ranking",
        })
    }
}

const ALL_ROUTES: [RouteKind; 12] = [
    RouteKind::ProfileEdit,
    RouteKind::JoinedTournaments,
    RouteKind::SeriesNew,
    RouteKind::SeriesDetail,
    RouteKind::SeriesEdit,
    RouteKind::SeriesRanking,
    RouteKind::TeamNew,
    RouteKind::TeamDetail,
    RouteKind::TeamEdit,
    RouteKind::TournamentNew,
    RouteKind::TournamentEdit,
    RouteKind::TournamentEntry,
];

/// Segments that are route literals and therefore never valid `[id]` values.
const RESERVED_SEGMENTS: &[&str] = &["new", "edit", "ranking", "entry"];

impl RouteKind {
    pub fn all() -> &'static [RouteKind] {
        &ALL_ROUTES
    }

    /// Stable snake_case identifier.
    pub fn name(self) -> &'static str {
        match self {
            RouteKind::ProfileEdit => "profile_edit",
            RouteKind::JoinedTournaments => "joined_tournaments",
            RouteKind::SeriesNew => "series_new",
            RouteKind::SeriesDetail => "series_detail",
            RouteKind::SeriesEdit => "series_edit",
            RouteKind::SeriesRanking => "series_ranking",
            RouteKind::TeamNew => "team_new",
            RouteKind::TeamDetail => "team_detail",
            RouteKind::TeamEdit => "team_edit",
            RouteKind::TournamentNew => "tournament_new",
            RouteKind::TournamentEdit => "tournament_edit",
            RouteKind::TournamentEntry => "tournament_entry",
        }
    }

    /// URL pattern with the optional locale prefix.
    pub fn pattern(self) -> &'static str {
        match self {
            RouteKind::ProfileEdit => "/[locale]/profile/edit",
            RouteKind::JoinedTournaments => "/[locale]/profile/tournaments",
            RouteKind::SeriesNew => "/[locale]/series/new",
            RouteKind::SeriesDetail => "/[locale]/series/[id]",
            RouteKind::SeriesEdit => "/[locale]/series/[id]/edit",
            RouteKind::SeriesRanking => "/[locale]/series/[id]/ranking",
            RouteKind::TeamNew => "/[locale]/teams/new",
            RouteKind::TeamDetail => "/[locale]/teams/[id]",
            RouteKind::TeamEdit => "/[locale]/teams/[id]/edit",
            RouteKind::TournamentNew => "/[locale]/tournaments/new",
            RouteKind::TournamentEdit => "/[locale]/tournaments/[id]/edit",
            RouteKind::TournamentEntry => "/[locale]/tournaments/[id]/entry",
        }
    }

    pub fn family(self) -> RouteFamily {
        match self {
            RouteKind::JoinedTournaments => RouteFamily::List,
            RouteKind::SeriesDetail | RouteKind::TeamDetail => RouteFamily::Detail,
            RouteKind::SeriesRanking => RouteFamily::Ranking,
            RouteKind::ProfileEdit
            | RouteKind::SeriesNew
            | RouteKind::SeriesEdit
            | RouteKind::TeamNew
            | RouteKind::TeamEdit
            | RouteKind::TournamentNew
            | RouteKind::TournamentEdit
            | RouteKind::TournamentEntry => RouteFamily::Form,
        }
    }

    /// Whether the pattern carries an `[id]` segment.
    pub fn has_id(self) -> bool {
        self.pattern().contains("[id]")
    }
}

impl fmt::Display for RouteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RouteKind {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RouteKind::all()
            .iter()
            .copied()
            .find(|k| k.name() == s)
            .ok_or_else(|| RouteError::UnknownRouteId(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Path resolution
// ---------------------------------------------------------------------------

/// A URL path resolved to a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteMatch {
    pub kind: RouteKind,
    /// Effective locale: the path prefix if present, else the configured default.
    pub locale: String,
    pub id: Option<String>,
}

/// Resolve a URL path such as `/en/series/42/ranking`.
///
/// Query strings and fragments are ignored. The first segment is taken as the
/// locale only when it is one of `locales.supported`.
pub fn resolve_path(path: &str, locales: &LocaleConfig) -> Result<RouteMatch, RouteError> {
    let not_found = || RouteError::NotFound(path.to_string());

    let bare = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = bare.trim_matches('/');
    if trimmed.is_empty() {
        return Err(not_found());
    }
    let segments: Vec<&str> = trimmed.split('/').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(not_found());
    }

    let (locale, rest) = match segments.split_first() {
        Some((first, rest)) if locales.is_supported(first) => ((*first).to_string(), rest),
        _ => (locales.default.clone(), segments.as_slice()),
    };

    let (kind, id) = match rest {
        ["profile", "edit"] => (RouteKind::ProfileEdit, None),
        ["profile", "tournaments"] => (RouteKind::JoinedTournaments, None),
        ["series", "new"] => (RouteKind::SeriesNew, None),
        ["series", id] => (RouteKind::SeriesDetail, Some(*id)),
        ["series", id, "edit"] => (RouteKind::SeriesEdit, Some(*id)),
        ["series", id, "ranking"] => (RouteKind::SeriesRanking, Some(*id)),
        ["teams", "new"] => (RouteKind::TeamNew, None),
        ["teams", id] => (RouteKind::TeamDetail, Some(*id)),
        ["teams", id, "edit"] => (RouteKind::TeamEdit, Some(*id)),
        ["tournaments", "new"] => (RouteKind::TournamentNew, None),
        ["tournaments", id, "edit"] => (RouteKind::TournamentEdit, Some(*id)),
        ["tournaments", id, "entry"] => (RouteKind::TournamentEntry, Some(*id)),
        _ => return Err(not_found()),
    };

    if let Some(id) = id {
        if RESERVED_SEGMENTS.contains(&id) {
            return Err(not_found());
        }
    }

    Ok(RouteMatch {
        kind,
        locale,
        id: id.map(str::to_string),
    })
}
