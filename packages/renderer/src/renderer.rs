use crate::context::RenderContext;
use crate::sections::{commerce, content, layout, marketing, shell};
use crate::styles::theme_variables;
use crate::vdom::{VNode, VirtualDocument};
use shelf_model::{ComponentRegistry, Page, Section, SectionType};
use tracing::{debug, warn};

/// Render one section to a node tree.
///
/// Total over every `SectionType`: unrecognised tags produce a labelled
/// placeholder instead of failing.
pub fn render(section: &Section, ctx: &RenderContext) -> VNode {
    match &section.section_type {
        SectionType::Header => layout::render_header(section, ctx),
        SectionType::AnnouncementBar => layout::render_announcement_bar(section, ctx),
        SectionType::Footer => layout::render_footer(section, ctx),
        SectionType::Hero => content::render_hero(section, ctx),
        SectionType::Text => content::render_text(section, ctx),
        SectionType::Image => content::render_image(section, ctx),
        SectionType::Video => content::render_video(section, ctx),
        SectionType::CustomHtml => content::render_custom_html(section, ctx),
        SectionType::ProductGrid => commerce::render_product_grid(section, ctx),
        SectionType::ProductCollection => commerce::render_product_collection(section, ctx),
        SectionType::ProductDetails => commerce::render_product_details(section, ctx),
        SectionType::ProductRecommendations => {
            commerce::render_product_recommendations(section, ctx)
        }
        SectionType::Newsletter => marketing::render_newsletter(section, ctx),
        SectionType::Testimonials => marketing::render_testimonials(section, ctx),
        SectionType::Unknown(raw) => {
            warn!(
                section_id = %section.id,
                section_type = %raw,
                "Unknown section type, rendering fallback"
            );
            render_fallback(section, ctx)
        }
    }
}

/// Neutral box labelled with the raw type tag
pub fn render_fallback(section: &Section, ctx: &RenderContext) -> VNode {
    shell(section, ctx)
        .with_attr("data-fallback", "true")
        .with_child(
            VNode::element("div")
                .with_class("section-fallback")
                .with_style("border", "1px dashed #d1d5db")
                .with_style("padding", "16px")
                .with_style("text-align", "center")
                .with_style("color", "#6b7280")
                .with_child(VNode::text(format!(
                    "Section type: {}",
                    section.section_type.as_str()
                ))),
        )
}

/// Render the visible sections of `page` in `order`, plus the page-level
/// theme stylesheet
pub fn render_page(page: &Page, ctx: &RenderContext) -> VirtualDocument {
    render_page_with(page, ctx, None, render)
}

fn render_page_with(
    page: &Page,
    ctx: &RenderContext,
    custom_css: Option<&str>,
    render_one: impl Fn(&Section, &RenderContext) -> VNode,
) -> VirtualDocument {
    let mut doc = VirtualDocument::new();
    doc.add_style(":root", theme_variables(ctx.global_styles));

    let sections = page.visible_sections();
    debug!(page_id = %page.id, sections = sections.len(), "Rendering page");
    for section in sections {
        doc.add_node(render_one(section, ctx));
    }

    if let Some(css) = custom_css.map(str::trim).filter(|css| !css.is_empty()) {
        doc.add_raw_css(css);
    }
    doc
}

/// Renderer bound to a component registry. Types the registry does not
/// carry render as the fallback box.
#[derive(Debug, Clone, Copy)]
pub struct StorefrontRenderer<'r> {
    registry: &'r ComponentRegistry,
}

impl<'r> StorefrontRenderer<'r> {
    pub fn new(registry: &'r ComponentRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r ComponentRegistry {
        self.registry
    }

    pub fn render_section(&self, section: &Section, ctx: &RenderContext) -> VNode {
        if section.section_type.is_known() && !self.registry.contains(&section.section_type) {
            warn!(
                section_id = %section.id,
                section_type = %section.section_type,
                "Section type not in registry, rendering fallback"
            );
            return render_fallback(section, ctx);
        }
        render(section, ctx)
    }

    pub fn render_page(&self, page: &Page, ctx: &RenderContext) -> VirtualDocument {
        render_page_with(page, ctx, None, |section, ctx| self.render_section(section, ctx))
    }

    /// Page render including the document's custom stylesheet
    pub fn render_page_with_css(
        &self,
        page: &Page,
        ctx: &RenderContext,
        custom_css: Option<&str>,
    ) -> VirtualDocument {
        render_page_with(page, ctx, custom_css, |section, ctx| self.render_section(section, ctx))
    }
}
