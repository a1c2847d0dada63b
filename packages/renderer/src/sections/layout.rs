use super::{flag, inner, link, non_empty, paragraph, shell};
use crate::context::RenderContext;
use crate::styles::resolve_alignment;
use crate::vdom::VNode;
use serde_json::Value;
use shelf_model::{Section, TextAlign};

fn str_field<'v>(value: &'v Value, key: &str) -> Option<&'v str> {
    value.get(key).and_then(Value::as_str)
}

pub fn render_header(section: &Section, ctx: &RenderContext) -> VNode {
    let store_name = non_empty(section, "storeName").unwrap_or("My Store");

    let brand = match non_empty(section, "logo") {
        Some(logo) => VNode::element("img")
            .with_attr("src", logo)
            .with_attr("alt", store_name)
            .with_style("height", "40px"),
        None => VNode::element("h1")
            .with_style("font-family", ctx.global_styles.heading_font.clone())
            .with_style("margin", "0")
            .with_child(VNode::text(store_name)),
    };

    let menu: Vec<VNode> = section
        .setting_array("menuItems")
        .iter()
        .filter_map(|item| {
            let label = str_field(item, "label")?;
            let href = str_field(item, "link").unwrap_or("#");
            Some(VNode::element("li").with_key(label).with_child(link(label, href, ctx)))
        })
        .collect();

    let mut bar = inner()
        .with_style("display", "flex")
        .with_style("align-items", "center")
        .with_style("justify-content", "space-between")
        .with_child(brand)
        .with_child(
            VNode::element("nav").with_child(
                VNode::element("ul")
                    .with_style("display", "flex")
                    .with_style("gap", ctx.global_styles.spacing.gap())
                    .with_style("list-style", "none")
                    .with_children(menu),
            ),
        );

    if flag(section, "showSearch", true) {
        let mut search = VNode::element("input")
            .with_attr("type", "search")
            .with_attr("placeholder", "Search products");
        if ctx.is_preview {
            search = search.with_attr("disabled", "true");
        }
        bar = bar.with_child(search);
    }

    shell(section, ctx)
        .with_style("border-bottom", "1px solid #e5e7eb")
        .with_child(bar)
}

pub fn render_announcement_bar(section: &Section, ctx: &RenderContext) -> VNode {
    let align = resolve_alignment(section, TextAlign::Center);

    let mut row = VNode::element("div")
        .with_class("announcement")
        .with_style("text-align", align.as_str())
        .with_optional_child(
            non_empty(section, "message")
                .map(|m| VNode::element("span").with_child(VNode::text(m))),
        );

    let target = (non_empty(section, "linkLabel"), non_empty(section, "linkUrl"));
    if let (Some(label), Some(url)) = target {
        row = row.with_child(link(label, url, ctx).with_style("margin-left", "8px"));
    }

    if flag(section, "showClose", true) {
        row = row.with_child(
            VNode::element("button")
                .with_attr("type", "button")
                .with_attr("aria-label", "Dismiss announcement")
                .with_child(VNode::text("×")),
        );
    }

    shell(section, ctx)
        .with_style("text-align", align.as_str())
        .with_child(row)
}

pub fn render_footer(section: &Section, ctx: &RenderContext) -> VNode {
    let columns: Vec<VNode> = section
        .setting_array("sections")
        .iter()
        .filter_map(|column| {
            let title = str_field(column, "title")?;
            let links: Vec<VNode> = column
                .get("links")
                .and_then(Value::as_array)
                .map(Vec::as_slice)
                .unwrap_or(&[])
                .iter()
                .filter_map(|entry| {
                    let label = str_field(entry, "label")?;
                    let url = str_field(entry, "url").unwrap_or("#");
                    Some(VNode::element("li").with_key(label).with_child(link(label, url, ctx)))
                })
                .collect();

            Some(
                VNode::element("div")
                    .with_key(title)
                    .with_child(VNode::element("h4").with_child(VNode::text(title)))
                    .with_child(
                        VNode::element("ul")
                            .with_style("list-style", "none")
                            .with_children(links),
                    ),
            )
        })
        .collect();

    let social: Vec<VNode> = section
        .setting_array("socialLinks")
        .iter()
        .filter_map(|entry| {
            let platform = str_field(entry, "platform")?;
            let url = str_field(entry, "url").unwrap_or("#");
            Some(link(platform, url, ctx).with_key(platform))
        })
        .collect();

    let mut body = inner();
    if !columns.is_empty() {
        body = body.with_child(
            VNode::element("div")
                .with_class("footer-columns")
                .with_style("display", "flex")
                .with_style("gap", ctx.global_styles.spacing.gap())
                .with_children(columns),
        );
    }
    if !social.is_empty() {
        body = body.with_child(
            VNode::element("div")
                .with_class("social-links")
                .with_children(social),
        );
    }
    body = body.with_optional_child(
        non_empty(section, "copyright")
            .map(|text| paragraph(text).with_style("text-align", "center")),
    );

    shell(section, ctx).with_child(body)
}
