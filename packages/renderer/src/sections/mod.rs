//! Per-type section renderers and the shared building blocks they use.

pub mod commerce;
pub mod content;
pub mod layout;
pub mod marketing;

use crate::context::RenderContext;
use crate::styles::{button_styles, card_styles, container_styles, heading_styles};
use crate::vdom::VNode;
use shelf_model::{Product, Section};

/// Outer `<section>` box carrying the resolved container styles
pub(crate) fn shell(section: &Section, ctx: &RenderContext) -> VNode {
    VNode::element("section")
        .with_key(section.id.clone())
        .with_attr("data-section-id", section.id.clone())
        .with_attr("data-section-type", section.section_type.as_str())
        .with_styles(container_styles(&section.styles, ctx.global_styles))
}

/// Centered content column inside a shell
pub(crate) fn inner() -> VNode {
    VNode::element("div")
        .with_class("container")
        .with_style("margin", "0 auto")
}

pub(crate) fn heading(tag: &str, text: &str, ctx: &RenderContext) -> VNode {
    VNode::element(tag)
        .with_styles(heading_styles(ctx.global_styles))
        .with_child(VNode::text(text))
}

/// Heading element for a non-empty string setting
pub(crate) fn heading_setting(
    section: &Section,
    key: &str,
    tag: &str,
    ctx: &RenderContext,
) -> Option<VNode> {
    non_empty(section, key).map(|text| heading(tag, text, ctx))
}

pub(crate) fn paragraph(text: &str) -> VNode {
    VNode::element("p").with_child(VNode::text(text))
}

pub(crate) fn non_empty<'s>(section: &'s Section, key: &str) -> Option<&'s str> {
    section
        .setting_str(key)
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

/// Themed call-to-action. Inert in preview: no href, disabled.
pub(crate) fn button(label: &str, href: Option<&str>, ctx: &RenderContext) -> VNode {
    let styles = button_styles(ctx.global_styles);
    match href.filter(|_| !ctx.is_preview) {
        Some(href) => VNode::element("a")
            .with_class("button")
            .with_attr("href", href)
            .with_styles(styles)
            .with_child(VNode::text(label)),
        None => {
            let node = VNode::element("button")
                .with_attr("type", "button")
                .with_styles(styles)
                .with_child(VNode::text(label));
            if ctx.is_preview {
                node.with_attr("disabled", "true")
            } else {
                node
            }
        }
    }
}

/// Link that becomes plain text in preview so the canvas never navigates
pub(crate) fn link(label: &str, href: &str, ctx: &RenderContext) -> VNode {
    if ctx.is_preview {
        VNode::element("span")
            .with_attr("data-href", href)
            .with_child(VNode::text(label))
    } else {
        VNode::element("a")
            .with_attr("href", href)
            .with_child(VNode::text(label))
    }
}

pub(crate) struct CardOptions {
    pub show_price: bool,
    pub show_add_to_cart: bool,
}

pub(crate) fn product_card(product: &Product, options: &CardOptions, ctx: &RenderContext) -> VNode {
    let media = match &product.image {
        Some(image) if !image.is_empty() => VNode::element("img")
            .with_attr("src", image.clone())
            .with_attr("alt", product.name.clone())
            .with_style("aspect-ratio", "1 / 1")
            .with_style("object-fit", "cover")
            .with_style("width", "100%"),
        _ => VNode::element("div")
            .with_class("image-placeholder")
            .with_style("aspect-ratio", "1 / 1")
            .with_style("background-color", "#f3f4f6"),
    };

    let mut card = VNode::element("div")
        .with_class("product-card")
        .with_key(product.id.clone())
        .with_attr("data-product-id", product.id.clone())
        .with_styles(card_styles(ctx.global_styles))
        .with_child(media)
        .with_child(VNode::element("h3").with_child(VNode::text(product.name.clone())));

    if options.show_price {
        card = card.with_child(
            VNode::element("p")
                .with_class("price")
                .with_child(VNode::text(product.display_price())),
        );
    }

    if options.show_add_to_cart {
        card = card.with_child(
            button("Add to Cart", None, ctx).with_attr("data-add-to-cart", product.id.clone()),
        );
    }

    match ctx.product_href(product) {
        Some(href) => VNode::element("a")
            .with_key(product.id.clone())
            .with_attr("href", href)
            .with_child(card),
        None => card,
    }
}

/// Clamp a numeric setting into `min..=max`, `default` when missing
pub(crate) fn clamped(section: &Section, key: &str, default: i64, min: i64, max: i64) -> usize {
    section.setting_i64(key).unwrap_or(default).clamp(min, max) as usize
}

pub(crate) fn flag(section: &Section, key: &str, default: bool) -> bool {
    section.setting_bool(key).unwrap_or(default)
}

/// Shown in place of a list whose source data is empty
pub(crate) fn empty_state(message: &str) -> VNode {
    VNode::element("p")
        .with_class("empty-state")
        .with_style("opacity", "0.6")
        .with_child(VNode::text(message))
}
