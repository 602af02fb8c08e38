//! Fixed anatomy of the compound skeleton primitives.
//!
//! Both the HTML preview and the Leptos components draw from these, so a
//! `FormSkeleton` has the same bars wherever it is rendered.

use crate::layout::{BlockSize, Dimension};

/// Heading placeholder above list and ranking pages.
pub const HEADING: BlockSize = BlockSize::new(Dimension::Scale(48), Dimension::Scale(8));

/// Base class of every placeholder bar.
pub const BAR_CLASS: &str = "skeleton rounded-md bg-muted";
/// Added to bars when animation is enabled.
pub const PULSE_CLASS: &str = "animate-pulse";

// Form: label + input per field, then a submit bar.
pub const FORM_FIELD_COUNT: usize = 4;
pub const FORM_LABEL: BlockSize = BlockSize::new(Dimension::Scale(24), Dimension::Scale(4));
pub const FORM_INPUT: BlockSize = BlockSize::new(Dimension::Full, Dimension::Scale(10));
pub const FORM_SUBMIT: BlockSize = BlockSize::new(Dimension::Scale(32), Dimension::Scale(10));

// Card: title, text, short text, a row of two badges.
pub const CARD_TITLE: BlockSize = BlockSize::new(Dimension::Scale(48), Dimension::Scale(6));
pub const CARD_TEXT: BlockSize = BlockSize::new(Dimension::Full, Dimension::Scale(4));
pub const CARD_TEXT_SHORT: BlockSize = BlockSize::new(Dimension::Scale(32), Dimension::Scale(4));
pub const CARD_BADGE: BlockSize = BlockSize::new(Dimension::Scale(16), Dimension::Scale(5));
pub const CARD_BADGE_COUNT: usize = 2;

// Table: one header row plus `rows` body rows, all with the same columns.
pub const TABLE_COLUMNS: usize = 4;
pub const TABLE_HEADER_CELL: BlockSize = BlockSize::new(Dimension::Full, Dimension::Scale(5));
pub const TABLE_CELL: BlockSize = BlockSize::new(Dimension::Full, Dimension::Scale(4));

// Detail page: title, subtitle, then sections of heading + body.
pub const DETAIL_TITLE: BlockSize = BlockSize::new(Dimension::Scale(64), Dimension::Scale(10));
pub const DETAIL_SUBTITLE: BlockSize = BlockSize::new(Dimension::Scale(40), Dimension::Scale(4));
pub const DETAIL_SECTION_COUNT: usize = 3;
pub const DETAIL_SECTION_HEADING: BlockSize =
    BlockSize::new(Dimension::Scale(32), Dimension::Scale(6));
pub const DETAIL_SECTION_BODY: BlockSize = BlockSize::new(Dimension::Full, Dimension::Scale(24));

// Wrapper classes.
pub const SR_ONLY_CLASS: &str = "sr-only";
pub const FORM_CLASS: &str = "skeleton-form space-y-4";
pub const FIELD_CLASS: &str = "skeleton-field space-y-2";
pub const CARD_LIST_CLASS: &str = "skeleton-card-list grid gap-4 sm:grid-cols-2 lg:grid-cols-3";
pub const CARD_CLASS: &str = "skeleton-card rounded-lg border p-4 space-y-3";
pub const CARD_BADGE_ROW_CLASS: &str = "skeleton-row flex gap-2";
pub const TABLE_CLASS: &str = "skeleton-table w-full space-y-2";
pub const TABLE_HEADER_CLASS: &str = "skeleton-table-header grid grid-cols-4 gap-4";
pub const TABLE_ROW_CLASS: &str = "skeleton-table-row grid grid-cols-4 gap-4";
pub const DETAIL_CLASS: &str = "skeleton-detail space-y-6";
pub const DETAIL_HEADER_CLASS: &str = "skeleton-detail-header space-y-2";
pub const DETAIL_SECTION_CLASS: &str = "skeleton-detail-section space-y-3";

/// Classes for one placeholder bar of the given size.
pub fn bar_classes(size: BlockSize, animate: bool) -> String {
    let mut class = format!("{BAR_CLASS} {}", size.classes());
    if animate {
        class.push(' ');
        class.push_str(PULSE_CLASS);
    }
    class
}
