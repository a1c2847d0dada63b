use super::{button, heading, heading_setting, inner, non_empty, paragraph, shell};
use crate::context::RenderContext;
use crate::styles::{card_styles, grid_styles, resolve_alignment};
use crate::vdom::VNode;
use serde_json::Value;
use shelf_model::{Section, TextAlign};

pub fn render_newsletter(section: &Section, ctx: &RenderContext) -> VNode {
    let align = resolve_alignment(section, TextAlign::Center);

    let mut input = VNode::element("input")
        .with_attr("type", "email")
        .with_attr("name", "email")
        .with_attr("placeholder", non_empty(section, "placeholder").unwrap_or("Enter your email"));
    let mut form = VNode::element("form")
        .with_class("newsletter-form")
        .with_style("display", "flex")
        .with_style("gap", "8px")
        .with_style("justify-content", "center");

    if ctx.is_preview {
        input = input.with_attr("disabled", "true");
    } else {
        form = form
            .with_attr("method", "post")
            .with_attr("data-success-message", section.setting_str("successMessage").unwrap_or(""));
    }

    let label = non_empty(section, "buttonText").unwrap_or("Subscribe");
    let submit = button(label, None, ctx).with_attr("type", "submit");
    form = form.with_child(input).with_child(submit);

    let body = inner()
        .with_style("text-align", align.as_str())
        .with_optional_child(heading_setting(section, "heading", "h2", ctx))
        .with_optional_child(non_empty(section, "description").map(paragraph))
        .with_child(form);

    shell(section, ctx).with_child(body)
}

/// Ratings are whole stars in `0..=5`
fn stars(rating: i64) -> String {
    let filled = rating.clamp(0, 5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

fn testimonial_card(index: usize, entry: &Value, ctx: &RenderContext) -> Option<VNode> {
    let text = entry.get("text").and_then(Value::as_str)?;
    let name = entry
        .get("name")
        .and_then(Value::as_str)
        .filter(|n| !n.is_empty())
        .unwrap_or("Anonymous");
    let rating = entry.get("rating").and_then(Value::as_i64).unwrap_or(5);

    let avatar = entry
        .get("avatar")
        .and_then(Value::as_str)
        .filter(|a| !a.is_empty())
        .map(|src| {
            VNode::element("img")
                .with_attr("src", src)
                .with_attr("alt", name)
                .with_style("border-radius", "9999px")
                .with_style("height", "48px")
                .with_style("width", "48px")
        });

    Some(
        VNode::element("blockquote")
            .with_class("testimonial")
            .with_key(format!("{}-{}", index, name))
            .with_styles(card_styles(ctx.global_styles))
            .with_style("margin", "0")
            .with_child(
                VNode::element("div")
                    .with_class("stars")
                    .with_attr("aria-label", format!("{} out of 5 stars", rating.clamp(0, 5)))
                    .with_style("color", ctx.global_styles.accent_color.clone())
                    .with_child(VNode::text(stars(rating))),
            )
            .with_child(paragraph(text))
            .with_child(
                VNode::element("footer")
                    .with_optional_child(avatar)
                    .with_child(VNode::element("cite").with_child(VNode::text(name))),
            ),
    )
}

pub fn render_testimonials(section: &Section, ctx: &RenderContext) -> VNode {
    let cards: Vec<VNode> = section
        .setting_array("testimonials")
        .iter()
        .enumerate()
        .filter_map(|(i, entry)| testimonial_card(i, entry, ctx))
        .collect();

    let list = match section.setting_str("layout") {
        Some("grid") => VNode::element("div")
            .with_class("testimonials-grid")
            .with_styles(grid_styles(cards.len().clamp(1, 3), ctx.global_styles))
            .with_children(cards),
        _ => VNode::element("div")
            .with_class("testimonials-carousel")
            .with_style("display", "flex")
            .with_style("gap", ctx.global_styles.spacing.gap())
            .with_style("overflow-x", "auto")
            .with_children(cards),
    };

    let body = inner()
        .with_optional_child(
            non_empty(section, "heading")
                .map(|h| heading("h2", h, ctx).with_style("text-align", "center")),
        )
        .with_child(list);

    shell(section, ctx).with_child(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars_clamp() {
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(stars(9), "★★★★★");
        assert_eq!(stars(-1), "☆☆☆☆☆");
    }
}
