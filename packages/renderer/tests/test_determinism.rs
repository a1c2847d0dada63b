/// Determinism tests - the editor canvas and the storefront must agree
///
/// These tests validate that:
/// - Same section and context produce identical trees across renders
/// - Serialized output is byte-for-byte identical
/// - Rendering a whole document never depends on call order

use serde_json::json;
use shelf_model::{ComponentRegistry, GlobalStyles, Page, Product, Section, SectionType};
use shelf_renderer::{
    render, render_page, RenderContext, StorefrontRenderer, VNode, VirtualDocument,
};

fn catalog() -> Vec<Product> {
    (1..=12)
        .map(|i| {
            let mut product =
                Product::new(format!("p{}", i), format!("Product {}", i), 4.5 * i as f64);
            product.category_id = Some(if i % 2 == 0 { "even" } else { "odd" }.to_string());
            product
        })
        .collect()
}

fn full_page() -> Page {
    let registry = ComponentRegistry::builtin();
    let sections: Vec<Section> = registry
        .list_all()
        .iter()
        .enumerate()
        .map(|(i, def)| def.stamp(format!("s{}", i), i))
        .chain(std::iter::once(Section::new("future", SectionType::from("countdown-timer"))))
        .collect();
    Page::home().with_sections(sections)
}

#[test]
fn test_section_render_determinism() {
    let products = catalog();
    let theme = GlobalStyles::default();
    let ctx = RenderContext::new(&products, &theme);

    for section in full_page().sections {
        let results: Vec<VNode> = (0..10).map(|_| render(&section, &ctx)).collect();
        for i in 1..results.len() {
            assert_eq!(
                results[0], results[i],
                "Render {} of {} differs from render 0",
                i, section.section_type
            );
        }
    }
}

#[test]
fn test_page_serialization_is_byte_stable() {
    let products = catalog();
    let theme = GlobalStyles::default();
    let ctx = RenderContext::new(&products, &theme);
    let page = full_page();

    let outputs: Vec<String> = (0..10)
        .map(|_| serde_json::to_string(&render_page(&page, &ctx)).expect("serialize"))
        .collect();
    for i in 1..outputs.len() {
        assert_eq!(outputs[0], outputs[i], "Serialization {} differs", i);
    }

    let parsed: VirtualDocument = serde_json::from_str(&outputs[0]).expect("deserialize");
    assert_eq!(parsed, render_page(&page, &ctx));
}

#[test]
fn test_render_order_does_not_leak_state() {
    let products = catalog();
    let theme = GlobalStyles::default();
    let ctx = RenderContext::new(&products, &theme);
    let page = full_page();

    let forward: Vec<VNode> = page.sections.iter().map(|s| render(s, &ctx)).collect();
    let mut backward: Vec<VNode> = page.sections.iter().rev().map(|s| render(s, &ctx)).collect();
    backward.reverse();

    assert_eq!(forward, backward);
}

#[test]
fn test_canvas_and_storefront_share_structure() {
    let products = catalog();
    let theme = GlobalStyles::default();
    let registry = ComponentRegistry::builtin();
    let renderer = StorefrontRenderer::new(&registry);
    let page = full_page();

    let storefront = renderer.render_page(&page, &RenderContext::new(&products, &theme));
    let canvas = renderer.render_page(&page, &RenderContext::new(&products, &theme).preview(true));

    assert_eq!(storefront.nodes.len(), canvas.nodes.len());
    for (live, preview) in storefront.nodes.iter().zip(canvas.nodes.iter()) {
        assert_eq!(live.attr("data-section-id"), preview.attr("data-section-id"));
        assert_eq!(live.attr("data-section-type"), preview.attr("data-section-type"));
        assert_eq!(live.text_content(), preview.text_content());
    }
}

#[test]
fn test_settings_key_order_does_not_matter() {
    let products = catalog();
    let theme = GlobalStyles::default();
    let ctx = RenderContext::new(&products, &theme);

    let a: Section = serde_json::from_value(json!({
        "id": "grid",
        "type": "product-grid",
        "order": 0,
        "settings": { "columns": 3, "maxProducts": 6, "heading": "Picks" }
    }))
    .expect("section");
    let b: Section = serde_json::from_value(json!({
        "settings": { "heading": "Picks", "maxProducts": 6, "columns": 3 },
        "order": 0,
        "type": "product-grid",
        "id": "grid"
    }))
    .expect("section");

    assert_eq!(render(&a, &ctx), render(&b, &ctx));
}
