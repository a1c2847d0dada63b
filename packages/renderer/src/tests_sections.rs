/// Per-section rendering tests
/// Each built-in section type rendered from its registry defaults and with
/// the settings merchants most often change
use crate::*;
use serde_json::json;
use shelf_model::{ComponentRegistry, GlobalStyles, Product, Section, SectionType};

#[cfg(test)]
mod section_tests {
    use super::*;

    fn catalog(count: usize) -> Vec<Product> {
        (1..=count)
            .map(|i| Product::new(format!("p{}", i), format!("Product {}", i), 10.0 * i as f64))
            .collect()
    }

    fn stamped(section_type: SectionType) -> Section {
        ComponentRegistry::builtin()
            .stamp(&section_type, "s1", 0)
            .expect("built-in type")
    }

    fn count(node: &VNode, predicate: &dyn Fn(&VNode) -> bool) -> usize {
        node.find_all(predicate).len()
    }

    fn has_class(class: &'static str) -> impl Fn(&VNode) -> bool {
        move |n: &VNode| n.attr("class") == Some(class)
    }

    #[test]
    fn test_section_shell_carries_identity_and_styles() {
        let theme = GlobalStyles::default();
        let ctx = RenderContext::new(&[], &theme);
        let node = render(&stamped(SectionType::Hero), &ctx);

        assert_eq!(node.tag(), Some("section"));
        assert_eq!(node.attr("data-section-id"), Some("s1"));
        assert_eq!(node.attr("data-section-type"), Some("hero"));
        assert_eq!(node.style("padding"), Some("80px 32px 80px 32px"));
        assert_eq!(node.style("background-color"), Some("#f3f4f6"));
    }

    #[test]
    fn test_hero_renders_heading_and_live_cta() {
        let theme = GlobalStyles::default();
        let ctx = RenderContext::new(&[], &theme);
        let node = render(&stamped(SectionType::Hero), &ctx);

        assert!(node.text_content().contains("Welcome to Our Store"));
        assert!(node.text_content().contains("Discover amazing products"));
        let cta = node.find(&has_class("button")).expect("cta");
        assert_eq!(cta.tag(), Some("a"));
        assert_eq!(cta.attr("href"), Some("#products"));
        assert_eq!(cta.style("background-color"), Some("#2563eb"));
    }

    #[test]
    fn test_hero_cta_is_inert_in_preview() {
        let theme = GlobalStyles::default();
        let ctx = RenderContext::new(&[], &theme).preview(true);
        let node = render(&stamped(SectionType::Hero), &ctx);

        let cta = node.find(&|n| n.tag() == Some("button")).expect("cta");
        assert_eq!(cta.attr("disabled"), Some("true"));
        assert!(node.find(&|n| n.attr("href").is_some()).is_none());
    }

    #[test]
    fn test_hero_background_image_setting() {
        let theme = GlobalStyles::default();
        let ctx = RenderContext::new(&[], &theme);
        let mut section = stamped(SectionType::Hero);
        section
            .settings
            .insert("backgroundImage".to_string(), json!("https://cdn.example.com/hero.jpg"));

        let node = render(&section, &ctx);
        assert_eq!(
            node.style("background-image"),
            Some("url(https://cdn.example.com/hero.jpg)")
        );
    }

    #[test]
    fn test_hero_style_image_wins_over_setting() {
        let theme = GlobalStyles::default();
        let ctx = RenderContext::new(&[], &theme);
        let mut section = stamped(SectionType::Hero);
        section.styles.background_image = Some("https://cdn.example.com/styles.jpg".to_string());
        section
            .settings
            .insert("backgroundImage".to_string(), json!("https://cdn.example.com/settings.jpg"));

        let node = render(&section, &ctx);
        assert_eq!(
            node.style("background-image"),
            Some("url(https://cdn.example.com/styles.jpg)")
        );

        section.styles.background_image = Some(String::new());
        let node = render(&section, &ctx);
        assert_eq!(
            node.style("background-image"),
            Some("url(https://cdn.example.com/settings.jpg)")
        );
    }

    #[test]
    fn test_product_grid_limits_and_columns() {
        let products = catalog(10);
        let theme = GlobalStyles::default();
        let ctx = RenderContext::new(&products, &theme);
        let node = render(&stamped(SectionType::ProductGrid), &ctx);

        assert_eq!(count(&node, &has_class("product-card")), 8);
        let grid = node.find(&has_class("product-grid")).expect("grid");
        assert_eq!(
            grid.style("grid-template-columns"),
            Some("repeat(4, minmax(0, 1fr))")
        );
    }

    #[test]
    fn test_product_grid_clamps_column_count() {
        let products = catalog(2);
        let theme = GlobalStyles::default();
        let ctx = RenderContext::new(&products, &theme);

        let cases = [(json!(99), 6), (json!(0), 1), (json!(-3), 1), (json!("3"), 3)];
        for (requested, expected) in cases {
            let mut section = stamped(SectionType::ProductGrid);
            section.settings.insert("columns".to_string(), requested);
            let node = render(&section, &ctx);
            let grid = node.find(&has_class("product-grid")).expect("grid");
            assert_eq!(
                grid.style("grid-template-columns"),
                Some(format!("repeat({}, minmax(0, 1fr))", expected).as_str())
            );
        }
    }

    #[test]
    fn test_product_grid_toggles() {
        let products = catalog(3);
        let theme = GlobalStyles::default();
        let ctx = RenderContext::new(&products, &theme);

        let node = render(&stamped(SectionType::ProductGrid), &ctx);
        assert_eq!(count(&node, &has_class("price")), 3);
        assert_eq!(count(&node, &|n| n.attr("data-add-to-cart").is_some()), 3);
        assert!(node.text_content().contains("$10.00"));

        let mut section = stamped(SectionType::ProductGrid);
        section.settings.insert("showPrice".to_string(), json!(false));
        section.settings.insert("showAddToCart".to_string(), json!(false));
        let node = render(&section, &ctx);
        assert_eq!(count(&node, &has_class("price")), 0);
        assert_eq!(count(&node, &|n| n.attr("data-add-to-cart").is_some()), 0);
    }

    #[test]
    fn test_product_grid_hand_picked_products() {
        let products = catalog(6);
        let theme = GlobalStyles::default();
        let ctx = RenderContext::new(&products, &theme);

        let mut section = stamped(SectionType::ProductGrid);
        section.settings.insert("showAll".to_string(), json!(false));
        section
            .settings
            .insert("productIds".to_string(), json!(["p5", "p2", "missing"]));

        let node = render(&section, &ctx);
        let ids: Vec<&str> = node
            .find_all(&has_class("product-card"))
            .iter()
            .filter_map(|card| card.attr("data-product-id"))
            .collect();
        assert_eq!(ids, vec!["p2", "p5"]);
    }

    #[test]
    fn test_product_grid_empty_catalog() {
        let theme = GlobalStyles::default();
        let ctx = RenderContext::new(&[], &theme);
        let node = render(&stamped(SectionType::ProductGrid), &ctx);

        assert!(node.find(&has_class("empty-state")).is_some());
        assert!(node.find(&has_class("product-grid")).is_none());
    }

    #[test]
    fn test_product_click_links_cards_outside_preview() {
        let products = catalog(2);
        let theme = GlobalStyles::default();
        let click = |product: &Product| format!("/products/{}", product.id);

        let live = RenderContext::new(&products, &theme).with_product_click(&click);
        let node = render(&stamped(SectionType::ProductGrid), &live);
        let hrefs: Vec<&str> = node
            .find_all(&|n| n.tag() == Some("a"))
            .iter()
            .filter_map(|a| a.attr("href"))
            .collect();
        assert_eq!(hrefs, vec!["/products/p1", "/products/p2"]);

        let canvas = live.preview(true);
        let node = render(&stamped(SectionType::ProductGrid), &canvas);
        assert!(node.find(&|n| n.tag() == Some("a")).is_none());
    }

    #[test]
    fn test_product_collection_filters() {
        let mut products = catalog(3);
        products[0].category_id = Some("shirts".to_string());
        products[1].category_id = Some("mugs".to_string());
        products[2].subcategory_ids = vec!["tees".to_string()];
        let theme = GlobalStyles::default();
        let ctx = RenderContext::new(&products, &theme);

        let mut section = stamped(SectionType::ProductCollection);
        section.settings.insert("filterBy".to_string(), json!("category"));
        section.settings.insert(
            "collections".to_string(),
            json!([{ "name": "Shirts", "categoryId": "shirts" }]),
        );
        let node = render(&section, &ctx);
        assert_eq!(count(&node, &has_class("collection")), 1);
        assert_eq!(count(&node, &has_class("product-card")), 1);
        assert!(node.text_content().contains("Shirts"));

        section.settings.insert("filterBy".to_string(), json!("subcategory"));
        section.settings.insert(
            "collections".to_string(),
            json!([
                { "name": "Tees", "subcategoryId": "tees" },
                { "name": "Empty", "subcategoryId": "hats" }
            ]),
        );
        let node = render(&section, &ctx);
        let cards = node.find_all(&has_class("product-card"));
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].attr("data-product-id"), Some("p3"));
        assert!(node.text_content().contains("No products in this collection"));
    }

    #[test]
    fn test_product_collection_without_collections() {
        let products = catalog(2);
        let theme = GlobalStyles::default();
        let ctx = RenderContext::new(&products, &theme);
        let node = render(&stamped(SectionType::ProductCollection), &ctx);

        assert!(node.find(&has_class("empty-state")).is_some());
        assert!(node.text_content().contains("Shop by Collection"));
    }

    #[test]
    fn test_product_details_uses_current_product() {
        let mut products = catalog(3);
        products[1].description = Some("Soft organic cotton".to_string());
        let theme = GlobalStyles::default();
        let ctx = RenderContext::new(&products, &theme).with_current_product(&products[1]);

        let node = render(&stamped(SectionType::ProductDetails), &ctx);
        let h1 = node.find(&|n| n.tag() == Some("h1")).expect("title");
        assert_eq!(h1.text_content(), "Product 2");
        assert!(node.text_content().contains("$20.00"));
        assert!(node.text_content().contains("Bestseller"));
        assert!(node.text_content().contains("★ 4.8 (120 reviews)"));
        assert!(node.text_content().contains("Soft organic cotton"));
        assert_eq!(count(&node, &|n| n.attr("data-icon").is_some()), 3);
    }

    #[test]
    fn test_product_details_respects_toggles() {
        let products = catalog(1);
        let theme = GlobalStyles::default();
        let ctx = RenderContext::new(&products, &theme);

        let mut section = stamped(SectionType::ProductDetails);
        section.settings.insert("showBadge".to_string(), json!(false));
        section.settings.insert("showRating".to_string(), json!(false));
        section.settings.insert("showTrustBadges".to_string(), json!(false));

        let node = render(&section, &ctx);
        assert!(node.find(&has_class("badge")).is_none());
        assert!(node.find(&has_class("rating")).is_none());
        assert!(node.find(&has_class("trust-badges")).is_none());
        assert!(node.text_content().contains("Product 1"));
    }

    #[test]
    fn test_product_recommendations_exclude_focus_product() {
        let products = catalog(6);
        let theme = GlobalStyles::default();
        let ctx = RenderContext::new(&products, &theme).with_current_product(&products[0]);

        let node = render(&stamped(SectionType::ProductRecommendations), &ctx);
        let ids: Vec<&str> = node
            .find_all(&has_class("product-card"))
            .iter()
            .filter_map(|card| card.attr("data-product-id"))
            .collect();
        assert_eq!(ids, vec!["p2", "p3", "p4", "p5"]);
    }

    #[test]
    fn test_header_menu_links() {
        let theme = GlobalStyles::default();
        let ctx = RenderContext::new(&[], &theme);
        let node = render(&stamped(SectionType::Header), &ctx);

        assert!(node.text_content().contains("My Store"));
        let hrefs: Vec<&str> = node
            .find_all(&|n| n.tag() == Some("a"))
            .iter()
            .filter_map(|a| a.attr("href"))
            .collect();
        assert_eq!(hrefs, vec!["/", "/products", "/about"]);
        assert!(node.find(&|n| n.attr("type") == Some("search")).is_some());
    }

    #[test]
    fn test_header_links_inert_in_preview() {
        let theme = GlobalStyles::default();
        let ctx = RenderContext::new(&[], &theme).preview(true);
        let node = render(&stamped(SectionType::Header), &ctx);

        assert!(node.find(&|n| n.tag() == Some("a")).is_none());
        assert_eq!(count(&node, &|n| n.attr("data-href").is_some()), 3);
    }

    #[test]
    fn test_header_logo_replaces_store_name() {
        let theme = GlobalStyles::default();
        let ctx = RenderContext::new(&[], &theme);
        let mut section = stamped(SectionType::Header);
        section
            .settings
            .insert("logo".to_string(), json!("https://cdn.example.com/logo.png"));

        let node = render(&section, &ctx);
        let img = node.find(&|n| n.tag() == Some("img")).expect("logo");
        assert_eq!(img.attr("alt"), Some("My Store"));
        assert!(node.find(&|n| n.tag() == Some("h1")).is_none());
    }

    #[test]
    fn test_announcement_bar() {
        let theme = GlobalStyles::default();
        let ctx = RenderContext::new(&[], &theme);
        let node = render(&stamped(SectionType::AnnouncementBar), &ctx);

        assert!(node.text_content().contains("Free shipping on orders over $50"));
        assert_eq!(node.style("text-align"), Some("center"));
        assert!(node.find(&|n| n.attr("aria-label") == Some("Dismiss announcement")).is_some());
    }

    #[test]
    fn test_footer_columns_and_copyright() {
        let theme = GlobalStyles::default();
        let ctx = RenderContext::new(&[], &theme);
        let node = render(&stamped(SectionType::Footer), &ctx);

        assert!(node.text_content().contains("All rights reserved"));
        assert_eq!(count(&node, &|n| n.tag() == Some("h4")), 2);
        assert_eq!(count(&node, &|n| n.tag() == Some("a")), 4);
        assert_eq!(node.style("color"), Some("#ffffff"));
    }

    #[test]
    fn test_text_section_inserts_raw_html() {
        let theme = GlobalStyles::default();
        let ctx = RenderContext::new(&[], &theme);
        let node = render(&stamped(SectionType::Text), &ctx);

        assert!(node.text_content().contains("About Us"));
        let raw = node
            .find(&|n| matches!(n, VNode::RawHtml { .. }))
            .expect("raw html");
        assert!(matches!(raw, VNode::RawHtml { html } if html.starts_with("<p>Tell your story")));
    }

    #[test]
    fn test_image_layouts() {
        let theme = GlobalStyles::default();
        let ctx = RenderContext::new(&[], &theme);

        let node = render(&stamped(SectionType::Image), &ctx);
        assert!(node.find(&has_class("empty-state")).is_some());

        let mut section = stamped(SectionType::Image);
        section.settings.insert(
            "images".to_string(),
            json!(["a.png", { "url": "b.png", "caption": "Second" }, { "caption": "no url" }]),
        );
        section.settings.insert("layout".to_string(), json!("grid"));
        section.settings.insert("gridColumns".to_string(), json!(2));

        let node = render(&section, &ctx);
        assert_eq!(count(&node, &|n| n.tag() == Some("figure")), 2);
        let grid = node.find(&has_class("image-grid")).expect("grid");
        assert_eq!(grid.style("grid-template-columns"), Some("repeat(2, minmax(0, 1fr))"));
        let caption = node.find(&|n| n.tag() == Some("figcaption")).expect("caption");
        assert_eq!(caption.text_content(), "Second");

        section.settings.insert("layout".to_string(), json!("single"));
        let node = render(&section, &ctx);
        assert_eq!(count(&node, &|n| n.tag() == Some("figure")), 1);
    }

    #[test]
    fn test_video_embed() {
        let theme = GlobalStyles::default();
        let ctx = RenderContext::new(&[], &theme);

        let node = render(&stamped(SectionType::Video), &ctx);
        assert!(node.find(&has_class("empty-state")).is_some());

        let mut section = stamped(SectionType::Video);
        section
            .settings
            .insert("videoUrl".to_string(), json!("https://youtu.be/abc123"));
        section.settings.insert("autoplay".to_string(), json!(true));
        section.settings.insert("controls".to_string(), json!(false));

        let node = render(&section, &ctx);
        let iframe = node.find(&|n| n.tag() == Some("iframe")).expect("iframe");
        assert_eq!(
            iframe.attr("src"),
            Some("https://www.youtube.com/embed/abc123?autoplay=1&mute=1&controls=0")
        );

        let canvas = ctx.preview(true);
        let node = render(&section, &canvas);
        let iframe = node.find(&|n| n.tag() == Some("iframe")).expect("iframe");
        assert_eq!(
            iframe.attr("src"),
            Some("https://www.youtube.com/embed/abc123?controls=0")
        );
    }

    #[test]
    fn test_newsletter_form_inert_in_preview() {
        let theme = GlobalStyles::default();

        let live = RenderContext::new(&[], &theme);
        let node = render(&stamped(SectionType::Newsletter), &live);
        let form = node.find(&|n| n.tag() == Some("form")).expect("form");
        assert_eq!(form.attr("method"), Some("post"));
        let input = node.find(&|n| n.tag() == Some("input")).expect("input");
        assert_eq!(input.attr("disabled"), None);
        assert_eq!(input.attr("placeholder"), Some("Enter your email"));

        let canvas = live.preview(true);
        let node = render(&stamped(SectionType::Newsletter), &canvas);
        let input = node.find(&|n| n.tag() == Some("input")).expect("input");
        assert_eq!(input.attr("disabled"), Some("true"));
        assert_eq!(
            node.find(&|n| n.tag() == Some("form")).and_then(|f| f.attr("method")),
            None
        );
    }

    #[test]
    fn test_testimonials() {
        let theme = GlobalStyles::default();
        let ctx = RenderContext::new(&[], &theme);
        let node = render(&stamped(SectionType::Testimonials), &ctx);

        assert_eq!(count(&node, &has_class("testimonial")), 1);
        assert!(node.text_content().contains("★★★★★"));
        assert!(node.text_content().contains("John Doe"));
        assert!(node.find(&has_class("testimonials-carousel")).is_some());
    }

    #[test]
    fn test_custom_html() {
        let theme = GlobalStyles::default();
        let ctx = RenderContext::new(&[], &theme);
        let node = render(&stamped(SectionType::CustomHtml), &ctx);

        assert_eq!(
            node.children(),
            &[VNode::raw_html("<div><p>Add your custom HTML here</p></div>")]
        );
    }
}
