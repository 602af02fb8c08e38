use bk_core::layout::{BlockSize, Dimension};
use bk_core::shape;
use leptos::prelude::*;

/// Generic placeholder bar.
#[component]
pub fn Skeleton(
    width: Dimension,
    height: Dimension,
    #[prop(default = true)] animate: bool,
) -> impl IntoView {
    let class = shape::bar_classes(BlockSize::new(width, height), animate);
    view! { <div class=class aria-hidden="true"></div> }
}

fn bar(size: BlockSize, animate: bool) -> impl IntoView {
    view! { <Skeleton width=size.width height=size.height animate=animate /> }
}

/// Labelled inputs followed by a submit button.
#[component]
pub fn FormSkeleton(#[prop(default = true)] animate: bool) -> impl IntoView {
    view! {
        <div class=shape::FORM_CLASS>
            {(0..shape::FORM_FIELD_COUNT)
                .map(|_| view! {
                    <div class=shape::FIELD_CLASS>
                        {bar(shape::FORM_LABEL, animate)}
                        {bar(shape::FORM_INPUT, animate)}
                    </div>
                })
                .collect_view()}
            {bar(shape::FORM_SUBMIT, animate)}
        </div>
    }
}

/// Skeleton loading placeholder for one card
#[component]
pub fn SkeletonCard(#[prop(default = true)] animate: bool) -> impl IntoView {
    view! {
        <div class=shape::CARD_CLASS>
            {bar(shape::CARD_TITLE, animate)}
            {bar(shape::CARD_TEXT, animate)}
            {bar(shape::CARD_TEXT_SHORT, animate)}
            <div class=shape::CARD_BADGE_ROW_CLASS>
                {(0..shape::CARD_BADGE_COUNT)
                    .map(|_| bar(shape::CARD_BADGE, animate))
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn CardListSkeleton(count: usize, #[prop(default = true)] animate: bool) -> impl IntoView {
    view! {
        <div class=shape::CARD_LIST_CLASS>
            {(0..count)
                .map(|_| view! { <SkeletonCard animate=animate /> })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn SkeletonRow(
    #[prop(default = false)] header: bool,
    #[prop(default = true)] animate: bool,
) -> impl IntoView {
    let (class, cell) = if header {
        (shape::TABLE_HEADER_CLASS, shape::TABLE_HEADER_CELL)
    } else {
        (shape::TABLE_ROW_CLASS, shape::TABLE_CELL)
    };
    view! {
        <div class=class>
            {(0..shape::TABLE_COLUMNS).map(|_| bar(cell, animate)).collect_view()}
        </div>
    }
}

/// Header row plus `rows` body rows.
#[component]
pub fn TableSkeleton(rows: usize, #[prop(default = true)] animate: bool) -> impl IntoView {
    view! {
        <div class=shape::TABLE_CLASS>
            <SkeletonRow header=true animate=animate />
            {(0..rows)
                .map(|_| view! { <SkeletonRow animate=animate /> })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn DetailPageSkeleton(#[prop(default = true)] animate: bool) -> impl IntoView {
    view! {
        <div class=shape::DETAIL_CLASS>
            <div class=shape::DETAIL_HEADER_CLASS>
                {bar(shape::DETAIL_TITLE, animate)}
                {bar(shape::DETAIL_SUBTITLE, animate)}
            </div>
            {(0..shape::DETAIL_SECTION_COUNT)
                .map(|_| view! {
                    <div class=shape::DETAIL_SECTION_CLASS>
                        {bar(shape::DETAIL_SECTION_HEADING, animate)}
                        {bar(shape::DETAIL_SECTION_BODY, animate)}
                    </div>
                })
                .collect_view()}
        </div>
    }
}
