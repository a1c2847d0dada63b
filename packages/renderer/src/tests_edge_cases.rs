/// Edge case tests for the renderer
/// Unknown types, empty settings, hidden sections and page assembly
use crate::*;
use serde_json::json;
use shelf_model::{
    ComponentRegistry, GlobalStyles, Page, Product, Section, SectionType, StyleProps,
};

#[cfg(test)]
mod edge_case_tests {
    use super::*;

    fn fallback_label(node: &VNode) -> Option<String> {
        node.find(&|n| n.attr("class") == Some("section-fallback"))
            .map(VNode::text_content)
    }

    #[test]
    fn test_unknown_type_renders_labelled_fallback() {
        let theme = GlobalStyles::default();
        let ctx = RenderContext::new(&[], &theme);
        let section = Section::new("s-x", SectionType::from("mega-menu"));

        let node = render(&section, &ctx);
        assert_eq!(node.attr("data-fallback"), Some("true"));
        assert_eq!(node.attr("data-section-type"), Some("mega-menu"));
        assert_eq!(fallback_label(&node).as_deref(), Some("Section type: mega-menu"));
    }

    #[test]
    fn test_render_is_total_over_arbitrary_tags() {
        let theme = GlobalStyles::default();
        let ctx = RenderContext::new(&[], &theme);

        for raw in ["", " ", "HERO", "hero ", "💥", "product-grid-v2", "<script>"] {
            let section = Section::new("s", SectionType::from(raw));
            let node = render(&section, &ctx);
            assert_eq!(node.tag(), Some("section"), "tag {:?}", raw);
        }
    }

    #[test]
    fn test_known_types_render_with_empty_settings() {
        let products = vec![Product::new("p1", "Tee", 19.5)];
        let theme = GlobalStyles::default();

        for preview in [false, true] {
            let ctx = RenderContext::new(&products, &theme).preview(preview);
            for section_type in SectionType::KNOWN.iter() {
                let section = Section::new("bare", section_type.clone());
                let node = render(&section, &ctx);
                assert_eq!(node.attr("data-section-type"), Some(section_type.as_str()));
                assert_eq!(node.attr("data-fallback"), None);
            }
        }
    }

    #[test]
    fn test_wrongly_typed_settings_fall_back_to_defaults() {
        let products: Vec<Product> = (0..5)
            .map(|i| Product::new(format!("p{}", i), "Item", 1.0))
            .collect();
        let theme = GlobalStyles::default();
        let ctx = RenderContext::new(&products, &theme);

        let mut section = Section::new("grid", SectionType::ProductGrid);
        section.settings.insert("columns".to_string(), json!({"not": "a number"}));
        section.settings.insert("maxProducts".to_string(), json!("lots"));
        section.settings.insert("showPrice".to_string(), json!("yes"));
        section.settings.insert("productIds".to_string(), json!("p1"));

        let node = render(&section, &ctx);
        let grid = node
            .find(&|n| n.attr("class") == Some("product-grid"))
            .expect("grid");
        assert_eq!(grid.style("grid-template-columns"), Some("repeat(4, minmax(0, 1fr))"));
        assert_eq!(grid.children().len(), 5);
    }

    #[test]
    fn test_product_sections_without_products() {
        let theme = GlobalStyles::default();
        let ctx = RenderContext::new(&[], &theme);
        let registry = ComponentRegistry::builtin();

        for section_type in [SectionType::ProductDetails, SectionType::ProductRecommendations] {
            let section = registry.stamp(&section_type, "s", 0).expect("built-in");
            let node = render(&section, &ctx);
            assert!(node
                .find(&|n| n.attr("class") == Some("empty-state"))
                .is_some());
        }
    }

    #[test]
    fn test_section_styles_override_theme_colour() {
        let theme = GlobalStyles::default();
        let ctx = RenderContext::new(&[], &theme);
        let mut section = Section::new("t", SectionType::Text);

        assert_eq!(render(&section, &ctx).style("color"), Some(theme.text_color.as_str()));

        section.styles = StyleProps::default().with_color("#123456");
        assert_eq!(render(&section, &ctx).style("color"), Some("#123456"));
    }

    #[test]
    fn test_render_page_skips_hidden_and_sorts_by_order() {
        let theme = GlobalStyles::default();
        let ctx = RenderContext::new(&[], &theme);

        let mut first = Section::new("a", SectionType::Text);
        first.order = 2;
        let mut hidden = Section::new("b", SectionType::Hero);
        hidden.order = 0;
        hidden.visible = false;
        let mut second = Section::new("c", SectionType::Newsletter);
        second.order = 1;

        let page = Page {
            sections: vec![first, hidden, second],
            ..Page::home()
        };

        let doc = render_page(&page, &ctx);
        let ids: Vec<&str> = doc
            .nodes
            .iter()
            .filter_map(|n| n.attr("data-section-id"))
            .collect();
        assert_eq!(ids, vec!["c", "a"]);
    }

    #[test]
    fn test_render_page_emits_theme_rule() {
        let theme = GlobalStyles::default();
        let ctx = RenderContext::new(&[], &theme);

        let doc = render_page(&Page::home(), &ctx);
        assert!(doc.nodes.is_empty());
        assert_eq!(doc.styles.len(), 1);
        assert_eq!(doc.styles[0].selector, ":root");
        assert_eq!(doc.styles[0].properties["--primary-color"], "#2563eb");
        assert_eq!(doc.custom_css, None);
    }

    #[test]
    fn test_registry_bound_renderer() {
        let theme = GlobalStyles::default();
        let ctx = RenderContext::new(&[], &theme);
        let builtin = ComponentRegistry::builtin();
        let trimmed = ComponentRegistry::new(
            builtin
                .list_all()
                .iter()
                .filter(|def| def.section_type != SectionType::Video)
                .cloned()
                .collect(),
        );

        let section = Section::new("v", SectionType::Video);
        let node = StorefrontRenderer::new(&builtin).render_section(&section, &ctx);
        assert_eq!(node.attr("data-fallback"), None);

        let node = StorefrontRenderer::new(&trimmed).render_section(&section, &ctx);
        assert_eq!(fallback_label(&node).as_deref(), Some("Section type: video"));
    }

    #[test]
    fn test_custom_css_is_appended() {
        let theme = GlobalStyles::default();
        let ctx = RenderContext::new(&[], &theme);
        let registry = ComponentRegistry::builtin();
        let renderer = StorefrontRenderer::new(&registry);

        let doc =
            renderer.render_page_with_css(&Page::home(), &ctx, Some("  .hero { color: red; }\n"));
        assert_eq!(doc.custom_css.as_deref(), Some(".hero { color: red; }"));

        let doc = renderer.render_page_with_css(&Page::home(), &ctx, Some("   "));
        assert_eq!(doc.custom_css, None);
    }
}
