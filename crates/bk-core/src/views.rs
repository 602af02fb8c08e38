//! Per-route loading views.
//!
//! Each function is a pure producer: no input, no side effects, the same
//! tree on every call.

use crate::layout::{ContainerStyle, LayoutNode, SkeletonPrimitive};
use crate::shape;

/// Items shown by the joined-tournaments card list.
pub const JOINED_TOURNAMENTS_CARD_COUNT: usize = 6;
/// Rows shown by the series ranking table.
pub const SERIES_RANKING_ROWS: usize = 10;

/// Vertical gap between a heading and the content under it.
const HEADED_SPACING: u8 = 6;

fn page(primitive: SkeletonPrimitive) -> LayoutNode {
    LayoutNode::container(ContainerStyle::PAGE, vec![LayoutNode::primitive(primitive)])
}

fn headed_page(primitive: SkeletonPrimitive) -> LayoutNode {
    LayoutNode::container(
        ContainerStyle::PAGE.spaced(HEADED_SPACING),
        vec![
            LayoutNode::primitive(SkeletonPrimitive::Block(shape::HEADING)),
            LayoutNode::primitive(primitive),
        ],
    )
}

// ── Forms ──

pub fn profile_edit() -> LayoutNode {
    page(SkeletonPrimitive::Form)
}

pub fn series_edit() -> LayoutNode {
    page(SkeletonPrimitive::Form)
}

pub fn series_new() -> LayoutNode {
    page(SkeletonPrimitive::Form)
}

pub fn team_edit() -> LayoutNode {
    page(SkeletonPrimitive::Form)
}

pub fn team_new() -> LayoutNode {
    page(SkeletonPrimitive::Form)
}

pub fn tournament_edit() -> LayoutNode {
    page(SkeletonPrimitive::Form)
}

pub fn tournament_new() -> LayoutNode {
    page(SkeletonPrimitive::Form)
}

pub fn tournament_entry() -> LayoutNode {
    page(SkeletonPrimitive::Form)
}

// ── Lists ──

pub fn joined_tournaments() -> LayoutNode {
    headed_page(SkeletonPrimitive::CardList {
        count: JOINED_TOURNAMENTS_CARD_COUNT,
    })
}

// ── Detail pages ──

pub fn series_detail() -> LayoutNode {
    page(SkeletonPrimitive::DetailPage)
}

pub fn team_detail() -> LayoutNode {
    page(SkeletonPrimitive::DetailPage)
}

// ── Rankings ──

pub fn series_ranking() -> LayoutNode {
    headed_page(SkeletonPrimitive::Table {
        rows: SERIES_RANKING_ROWS,
    })
}
