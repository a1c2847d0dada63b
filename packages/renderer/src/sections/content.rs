use super::{
    button, clamped, empty_state, flag, heading, heading_setting, inner, non_empty, paragraph,
    shell,
};
use crate::context::RenderContext;
use crate::styles::{grid_styles, resolve_alignment};
use crate::vdom::VNode;
use serde_json::Value;
use shelf_model::{Section, TextAlign};

pub fn render_hero(section: &Section, ctx: &RenderContext) -> VNode {
    let align = resolve_alignment(section, TextAlign::Center);

    let mut body = inner()
        .with_style("text-align", align.as_str())
        .with_optional_child(non_empty(section, "heading").map(|text| {
            heading("h1", text, ctx).with_style("font-size", "3rem")
        }))
        .with_optional_child(
            non_empty(section, "subheading")
                .map(|text| paragraph(text).with_style("font-size", "1.25rem")),
        );

    if let Some(label) = non_empty(section, "buttonText") {
        body = body.with_child(button(label, non_empty(section, "buttonLink"), ctx));
    }

    let mut node = shell(section, ctx).with_style("text-align", align.as_str());
    // the setting only fills in for an unset style image
    let styled_image = section.styles.background_image.as_ref().is_some_and(|i| !i.is_empty());
    if let Some(image) = non_empty(section, "backgroundImage").filter(|_| !styled_image) {
        node = node
            .with_style("background-image", format!("url({})", image))
            .with_style("background-size", "cover")
            .with_style("background-position", "center");
    }
    node.with_child(body)
}

pub fn render_text(section: &Section, ctx: &RenderContext) -> VNode {
    let align = resolve_alignment(section, TextAlign::Left);

    let body = inner()
        .with_style("text-align", align.as_str())
        .with_optional_child(heading_setting(section, "heading", "h2", ctx))
        .with_optional_child(
            non_empty(section, "content").map(|html| {
                VNode::element("div")
                    .with_class("rich-text")
                    .with_child(VNode::raw_html(html))
            }),
        );

    shell(section, ctx).with_child(body)
}

/// One entry of an `images` setting: either a bare URL or `{url, caption}`
struct GalleryImage<'s> {
    url: &'s str,
    caption: Option<&'s str>,
}

fn gallery_images(section: &Section) -> Vec<GalleryImage<'_>> {
    section
        .setting_array("images")
        .iter()
        .filter_map(|entry| match entry {
            Value::String(url) => Some(GalleryImage { url, caption: None }),
            Value::Object(map) => Some(GalleryImage {
                url: map.get("url").and_then(Value::as_str)?,
                caption: map
                    .get("caption")
                    .and_then(Value::as_str)
                    .filter(|c| !c.is_empty()),
            }),
            _ => None,
        })
        .filter(|image| !image.url.is_empty())
        .collect()
}

/// `"16:9"` -> `"16 / 9"`; anything unparsable falls back to 16:9
pub(crate) fn css_aspect_ratio(ratio: Option<&str>) -> String {
    ratio
        .and_then(|r| r.split_once(':'))
        .and_then(|(w, h)| {
            let w: u32 = w.trim().parse().ok()?;
            let h: u32 = h.trim().parse().ok()?;
            (w > 0 && h > 0).then(|| format!("{} / {}", w, h))
        })
        .unwrap_or_else(|| "16 / 9".to_string())
}

fn figure(image: &GalleryImage, index: usize, aspect: &str) -> VNode {
    VNode::element("figure")
        .with_key(format!("{}-{}", index, image.url))
        .with_style("margin", "0")
        .with_child(
            VNode::element("img")
                .with_attr("src", image.url)
                .with_attr("alt", image.caption.unwrap_or(""))
                .with_style("aspect-ratio", aspect)
                .with_style("object-fit", "cover")
                .with_style("width", "100%"),
        )
        .with_optional_child(
            image
                .caption
                .map(|c| VNode::element("figcaption").with_child(VNode::text(c))),
        )
}

pub fn render_image(section: &Section, ctx: &RenderContext) -> VNode {
    let images = gallery_images(section);
    let aspect = css_aspect_ratio(section.setting_str("aspectRatio"));

    let gallery = if images.is_empty() {
        empty_state("Add images to this section")
    } else {
        match section.setting_str("layout").unwrap_or("single") {
            "grid" => {
                let columns = clamped(section, "gridColumns", 3, 1, 6);
                VNode::element("div")
                    .with_class("image-grid")
                    .with_styles(grid_styles(columns, ctx.global_styles))
                    .with_children(
                        images
                            .iter()
                            .enumerate()
                            .map(|(i, image)| figure(image, i, &aspect))
                            .collect(),
                    )
            }
            "carousel" => VNode::element("div")
                .with_class("image-carousel")
                .with_style("display", "flex")
                .with_style("overflow-x", "auto")
                .with_style("scroll-snap-type", "x mandatory")
                .with_style("gap", ctx.global_styles.spacing.gap())
                .with_children(
                    images
                        .iter()
                        .enumerate()
                        .map(|(i, image)| {
                            figure(image, i, &aspect)
                                .with_style("flex", "0 0 100%")
                                .with_style("scroll-snap-align", "start")
                        })
                        .collect(),
                ),
            _ => figure(&images[0], 0, &aspect),
        }
    };

    let body = inner().with_child(gallery).with_optional_child(
        non_empty(section, "caption").map(|c| {
            paragraph(c)
                .with_class("caption")
                .with_style("text-align", "center")
        }),
    );

    shell(section, ctx).with_child(body)
}

/// Turn a watch/share URL into an embeddable player URL.
///
/// Recognises `youtube.com/watch?v=`, `youtu.be/` and `vimeo.com/<id>`;
/// other URLs are used as-is.
pub fn embed_url(url: &str) -> String {
    let url = url.trim();

    if let Some(rest) = url.split("youtube.com/watch?v=").nth(1) {
        let id = rest.split(['&', '#']).next().unwrap_or(rest);
        return format!("https://www.youtube.com/embed/{}", id);
    }
    if let Some(rest) = url.split("youtu.be/").nth(1) {
        let id = rest.split(['?', '&', '#']).next().unwrap_or(rest);
        return format!("https://www.youtube.com/embed/{}", id);
    }
    if !url.contains("player.vimeo.com") {
        if let Some(rest) = url.split("vimeo.com/").nth(1) {
            let id = rest.split(['?', '/', '#']).next().unwrap_or(rest);
            if !id.is_empty() && id.chars().all(|c| c.is_ascii_digit()) {
                return format!("https://player.vimeo.com/video/{}", id);
            }
        }
    }
    url.to_string()
}

pub fn render_video(section: &Section, ctx: &RenderContext) -> VNode {
    let player = match non_empty(section, "videoUrl") {
        None => empty_state("Add a video URL to this section"),
        Some(url) => {
            let mut params = Vec::new();
            // never autoplay inside the editor canvas
            if flag(section, "autoplay", false) && !ctx.is_preview {
                params.push("autoplay=1&mute=1");
            }
            if !flag(section, "controls", true) {
                params.push("controls=0");
            }

            let mut src = embed_url(url);
            if !params.is_empty() {
                src.push(if src.contains('?') { '&' } else { '?' });
                src.push_str(&params.join("&"));
            }

            VNode::element("div")
                .with_class("video-frame")
                .with_style("aspect-ratio", css_aspect_ratio(section.setting_str("aspectRatio")))
                .with_style("width", "100%")
                .with_child(
                    VNode::element("iframe")
                        .with_attr("src", src)
                        .with_attr("title", "Embedded video")
                        .with_attr("allow", "autoplay; fullscreen; picture-in-picture")
                        .with_attr("allowfullscreen", "true")
                        .with_style("border", "0")
                        .with_style("height", "100%")
                        .with_style("width", "100%"),
                )
        }
    };

    shell(section, ctx).with_child(inner().with_child(player))
}

pub fn render_custom_html(section: &Section, ctx: &RenderContext) -> VNode {
    let html = section.setting_str("html").unwrap_or("");
    shell(section, ctx).with_child(VNode::raw_html(html))
}
