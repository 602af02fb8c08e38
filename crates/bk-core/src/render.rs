//! Static HTML preview of a layout tree.
//!
//! Produces the same markup the Leptos components mount, which makes it
//! usable for server-rendered fallbacks and for eyeballing a view from the CLI.

use std::fmt::Write;

use crate::config::SkeletonConfig;
use crate::layout::{BlockSize, LayoutNode, SkeletonPrimitive};
use crate::shape;

pub fn render_html(node: &LayoutNode, config: &SkeletonConfig) -> String {
    let mut out = String::new();
    write_node(&mut out, node, config, true);
    out
}

fn write_node(out: &mut String, node: &LayoutNode, config: &SkeletonConfig, root: bool) {
    match node {
        LayoutNode::Container { style, children } => {
            if root {
                let _ = write!(
                    out,
                    r#"<div class="{}" role="status" aria-busy="true"><span class="{}">{}</span>"#,
                    style.classes(),
                    shape::SR_ONLY_CLASS,
                    escape(&config.label)
                );
            } else {
                let _ = write!(out, r#"<div class="{}">"#, style.classes());
            }
            for child in children {
                write_node(out, child, config, false);
            }
            out.push_str("</div>");
        }
        LayoutNode::Primitive(p) => write_primitive(out, *p, config.animate),
    }
}

fn write_primitive(out: &mut String, primitive: SkeletonPrimitive, animate: bool) {
    match primitive {
        SkeletonPrimitive::Block(size) => bar(out, size, animate),
        SkeletonPrimitive::Form => {
            open(out, shape::FORM_CLASS);
            for _ in 0..shape::FORM_FIELD_COUNT {
                open(out, shape::FIELD_CLASS);
                bar(out, shape::FORM_LABEL, animate);
                bar(out, shape::FORM_INPUT, animate);
                close(out);
            }
            bar(out, shape::FORM_SUBMIT, animate);
            close(out);
        }
        SkeletonPrimitive::CardList { count } => {
            open(out, shape::CARD_LIST_CLASS);
            for _ in 0..count {
                card(out, animate);
            }
            close(out);
        }
        SkeletonPrimitive::Table { rows } => {
            open(out, shape::TABLE_CLASS);
            table_row(out, shape::TABLE_HEADER_CLASS, shape::TABLE_HEADER_CELL, animate);
            for _ in 0..rows {
                table_row(out, shape::TABLE_ROW_CLASS, shape::TABLE_CELL, animate);
            }
            close(out);
        }
        SkeletonPrimitive::DetailPage => {
            open(out, shape::DETAIL_CLASS);
            open(out, shape::DETAIL_HEADER_CLASS);
            bar(out, shape::DETAIL_TITLE, animate);
            bar(out, shape::DETAIL_SUBTITLE, animate);
            close(out);
            for _ in 0..shape::DETAIL_SECTION_COUNT {
                open(out, shape::DETAIL_SECTION_CLASS);
                bar(out, shape::DETAIL_SECTION_HEADING, animate);
                bar(out, shape::DETAIL_SECTION_BODY, animate);
                close(out);
            }
            close(out);
        }
    }
}

fn card(out: &mut String, animate: bool) {
    open(out, shape::CARD_CLASS);
    bar(out, shape::CARD_TITLE, animate);
    bar(out, shape::CARD_TEXT, animate);
    bar(out, shape::CARD_TEXT_SHORT, animate);
    open(out, shape::CARD_BADGE_ROW_CLASS);
    for _ in 0..shape::CARD_BADGE_COUNT {
        bar(out, shape::CARD_BADGE, animate);
    }
    close(out);
    close(out);
}

fn table_row(out: &mut String, class: &str, cell: BlockSize, animate: bool) {
    open(out, class);
    for _ in 0..shape::TABLE_COLUMNS {
        bar(out, cell, animate);
    }
    close(out);
}

fn bar(out: &mut String, size: BlockSize, animate: bool) {
    let _ = write!(
        out,
        r#"<div class="{}" aria-hidden="true"></div>"#,
        shape::bar_classes(size, animate)
    );
}

fn open(out: &mut String, class: &str) {
    let _ = write!(out, r#"<div class="{class}">"#);
}

fn close(out: &mut String) {
    out.push_str("</div>");
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
