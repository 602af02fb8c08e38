use bk_core::layout::{LayoutNode, SkeletonPrimitive};
use bk_core::shape;
use leptos::prelude::*;

use super::skeleton::{CardListSkeleton, DetailPageSkeleton, FormSkeleton, Skeleton, TableSkeleton};
use crate::state::skeleton_settings;

/// Renders a loading-view tree.
///
/// The outermost container is announced as a busy status region with the
/// configured screen-reader label; nested containers are plain wrappers.
#[component]
pub fn LayoutView(node: LayoutNode) -> impl IntoView {
    let settings = skeleton_settings();
    let animate = settings.animate;

    match node {
        LayoutNode::Container { style, children } => view! {
            <div class=style.classes() role="status" aria-busy="true">
                <span class=shape::SR_ONLY_CLASS>{settings.label.clone()}</span>
                {children
                    .into_iter()
                    .map(|child| render_node(child, animate))
                    .collect_view()}
            </div>
        }
        .into_any(),
        LayoutNode::Primitive(p) => render_primitive(p, animate),
    }
}

fn render_node(node: LayoutNode, animate: bool) -> AnyView {
    match node {
        LayoutNode::Container { style, children } => view! {
            <div class=style.classes()>
                {children
                    .into_iter()
                    .map(|child| render_node(child, animate))
                    .collect_view()}
            </div>
        }
        .into_any(),
        LayoutNode::Primitive(p) => render_primitive(p, animate),
    }
}

fn render_primitive(primitive: SkeletonPrimitive, animate: bool) -> AnyView {
    match primitive {
        SkeletonPrimitive::Form => view! { <FormSkeleton animate=animate /> }.into_any(),
        SkeletonPrimitive::DetailPage => view! { <DetailPageSkeleton animate=animate /> }.into_any(),
        SkeletonPrimitive::CardList { count } => {
            view! { <CardListSkeleton count=count animate=animate /> }.into_any()
        }
        SkeletonPrimitive::Table { rows } => {
            view! { <TableSkeleton rows=rows animate=animate /> }.into_any()
        }
        SkeletonPrimitive::Block(size) => {
            view! { <Skeleton width=size.width height=size.height animate=animate /> }.into_any()
        }
    }
}
