use super::{
    button, clamped, empty_state, flag, heading, heading_setting, inner, non_empty, paragraph,
    product_card, shell, CardOptions,
};
use crate::context::RenderContext;
use crate::styles::grid_styles;
use crate::vdom::VNode;
use serde_json::Value;
use shelf_model::{Product, Section};

fn grid(columns: usize, cards: Vec<VNode>, ctx: &RenderContext) -> VNode {
    VNode::element("div")
        .with_class("product-grid")
        .with_styles(grid_styles(columns, ctx.global_styles))
        .with_children(cards)
}

/// Products the grid should show: the whole catalog, or the hand-picked
/// ids in catalog order
fn selected_products<'a>(section: &Section, ctx: &RenderContext<'a>) -> Vec<&'a Product> {
    if flag(section, "showAll", true) {
        return ctx.products.iter().collect();
    }
    let picked: Vec<&str> = section
        .setting_array("productIds")
        .iter()
        .filter_map(Value::as_str)
        .collect();
    ctx.products
        .iter()
        .filter(|product| picked.contains(&product.id.as_str()))
        .collect()
}

pub fn render_product_grid(section: &Section, ctx: &RenderContext) -> VNode {
    let columns = clamped(section, "columns", 4, 1, 6);
    let limit = clamped(section, "maxProducts", 8, 1, 100);
    let options = CardOptions {
        show_price: flag(section, "showPrice", true),
        show_add_to_cart: flag(section, "showAddToCart", true),
    };

    let products = selected_products(section, ctx);
    let content = if products.is_empty() {
        empty_state("No products to display yet")
    } else {
        grid(
            columns,
            products
                .into_iter()
                .take(limit)
                .map(|product| product_card(product, &options, ctx))
                .collect(),
            ctx,
        )
    };

    let body = inner()
        .with_optional_child(heading_setting(section, "heading", "h2", ctx))
        .with_child(content);
    shell(section, ctx).with_child(body)
}

/// How a collection picks its products
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CollectionFilter {
    Category,
    Subcategory,
}

impl CollectionFilter {
    fn from_setting(value: Option<&str>) -> Self {
        match value {
            Some("category") => CollectionFilter::Category,
            _ => CollectionFilter::Subcategory,
        }
    }

    fn matches(&self, collection: &Value, product: &Product) -> bool {
        let wanted = |key: &str| {
            collection
                .get(key)
                .and_then(Value::as_str)
                .filter(|id| !id.is_empty())
        };
        match self {
            CollectionFilter::Category => match wanted("categoryId") {
                Some(id) => product.category_id.as_deref() == Some(id),
                None => false,
            },
            CollectionFilter::Subcategory => match wanted("subcategoryId") {
                Some(id) => product.subcategory_ids.iter().any(|sub| sub == id),
                None => false,
            },
        }
    }
}

pub fn render_product_collection(section: &Section, ctx: &RenderContext) -> VNode {
    let filter = CollectionFilter::from_setting(section.setting_str("filterBy"));
    let per_collection = clamped(section, "maxProductsPerCollection", 4, 1, 24);
    let options = CardOptions {
        show_price: flag(section, "showPrice", true),
        show_add_to_cart: false,
    };

    let collections: Vec<VNode> = section
        .setting_array("collections")
        .iter()
        .enumerate()
        .map(|(index, collection)| {
            let name = collection
                .get("name")
                .and_then(Value::as_str)
                .filter(|n| !n.is_empty())
                .unwrap_or("Untitled collection");

            let cards: Vec<VNode> = ctx
                .products
                .iter()
                .filter(|product| filter.matches(collection, product))
                .take(per_collection)
                .map(|product| product_card(product, &options, ctx))
                .collect();

            let image = collection
                .get("imageUrl")
                .and_then(Value::as_str)
                .filter(|url| !url.is_empty())
                .map(|url| {
                    VNode::element("img")
                        .with_attr("src", url)
                        .with_attr("alt", name)
                        .with_style("width", "100%")
                });

            VNode::element("div")
                .with_class("collection")
                .with_key(format!("{}-{}", index, name))
                .with_optional_child(image)
                .with_child(heading("h3", name, ctx))
                .with_child(if cards.is_empty() {
                    empty_state("No products in this collection")
                } else {
                    grid(per_collection.min(4), cards, ctx)
                })
        })
        .collect();

    let mut body = inner()
        .with_optional_child(heading_setting(section, "heading", "h2", ctx))
        .with_optional_child(non_empty(section, "description").map(paragraph));

    body = if collections.is_empty() {
        body.with_child(empty_state("Add collections to group your products"))
    } else {
        body.with_children(collections)
    };

    shell(section, ctx).with_child(body)
}

fn rating_line(section: &Section) -> Option<VNode> {
    if !flag(section, "showRating", true) {
        return None;
    }
    let value = section.setting_f64("ratingValue")?;
    let count = section.setting_i64("ratingCount").unwrap_or(0);
    Some(
        VNode::element("div")
            .with_class("rating")
            .with_attr("aria-label", format!("Rated {:.1} out of 5", value))
            .with_child(VNode::text(format!("★ {:.1} ({} reviews)", value, count))),
    )
}

fn trust_badges(section: &Section) -> Option<VNode> {
    if !flag(section, "showTrustBadges", true) {
        return None;
    }
    let badges: Vec<VNode> = section
        .setting_array("trustBadges")
        .iter()
        .filter_map(|badge| {
            let text = badge.get("text").and_then(Value::as_str)?;
            let icon = badge.get("icon").and_then(Value::as_str).unwrap_or("check");
            Some(
                VNode::element("li")
                    .with_key(text)
                    .with_attr("data-icon", icon)
                    .with_child(VNode::text(text)),
            )
        })
        .collect();
    (!badges.is_empty()).then(|| {
        VNode::element("ul")
            .with_class("trust-badges")
            .with_style("list-style", "none")
            .with_children(badges)
    })
}

pub fn render_product_details(section: &Section, ctx: &RenderContext) -> VNode {
    let product = match ctx.focus_product() {
        Some(product) => product,
        None => {
            return shell(section, ctx)
                .with_child(
                    inner().with_child(empty_state("Add products to preview this section")),
                );
        }
    };

    let media = match product.image.as_deref().filter(|i| !i.is_empty()) {
        Some(image) => VNode::element("img")
            .with_attr("src", image)
            .with_attr("alt", product.name.clone())
            .with_style("width", "100%"),
        None => VNode::element("div")
            .with_class("image-placeholder")
            .with_style("aspect-ratio", "1 / 1")
            .with_style("background-color", "#f3f4f6"),
    };

    let badge = non_empty(section, "badgeText")
        .filter(|_| flag(section, "showBadge", true))
        .map(|text| {
            VNode::element("span")
                .with_class("badge")
                .with_style("background-color", ctx.global_styles.accent_color.clone())
                .with_child(VNode::text(text))
        });

    let info = VNode::element("div")
        .with_class("product-info")
        .with_optional_child(badge)
        .with_child(heading("h1", &product.name, ctx))
        .with_optional_child(non_empty(section, "tagline").map(paragraph))
        .with_optional_child(rating_line(section))
        .with_child(
            VNode::element("p")
                .with_class("price")
                .with_style("font-size", "1.5rem")
                .with_child(VNode::text(product.display_price())),
        )
        .with_child(
            button("Add to Cart", None, ctx).with_attr("data-add-to-cart", product.id.clone()),
        )
        .with_optional_child(trust_badges(section))
        .with_optional_child(
            product
                .description
                .as_deref()
                .filter(|d| !d.is_empty())
                .map(|d| paragraph(d).with_class("description")),
        );

    let body = inner()
        .with_attr("data-product-id", product.id.clone())
        .with_styles(grid_styles(2, ctx.global_styles))
        .with_child(media)
        .with_child(info);

    shell(section, ctx).with_child(body)
}

pub fn render_product_recommendations(section: &Section, ctx: &RenderContext) -> VNode {
    let limit = clamped(section, "maxItems", 4, 1, 12);
    let focus_id = ctx.focus_product().map(|p| p.id.as_str());
    let options = CardOptions {
        show_price: true,
        show_add_to_cart: false,
    };

    let cards: Vec<VNode> = ctx
        .products
        .iter()
        .filter(|product| Some(product.id.as_str()) != focus_id)
        .take(limit)
        .map(|product| product_card(product, &options, ctx))
        .collect();

    let content = if cards.is_empty() {
        empty_state("No other products to recommend yet")
    } else {
        grid(limit.min(4), cards, ctx)
    };

    let body = inner()
        .with_optional_child(heading_setting(section, "heading", "h2", ctx))
        .with_optional_child(non_empty(section, "subheading").map(paragraph))
        .with_child(content);
    shell(section, ctx).with_child(body)
}
