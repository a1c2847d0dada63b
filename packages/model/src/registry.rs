//! # Component Registry
//!
//! Static catalog of section types. Each [`ComponentDefinition`] carries the
//! default settings and styles used to stamp a brand-new [`Section`], plus the
//! category the palette groups it under.
//!
//! The registry is built once at startup (usually [`ComponentRegistry::builtin`])
//! and shared by reference; nothing mutates it afterwards.

use crate::document::{Section, Settings};
use crate::error::ModelError;
use crate::section_type::SectionType;
use crate::styles::{BoxSpacing, StyleProps, TextAlign};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Layout,
    Content,
    Commerce,
    Marketing,
}

impl FromStr for Category {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "layout" => Ok(Category::Layout),
            "content" => Ok(Category::Content),
            "commerce" => Ok(Category::Commerce),
            "marketing" => Ok(Category::Marketing),
            other => Err(ModelError::UnknownCategory(other.to_string())),
        }
    }
}

/// Kind of page a section may be placed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    Home,
    Product,
}

impl FromStr for PageKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(PageKind::Home),
            "product" => Ok(PageKind::Product),
            other => Err(ModelError::UnknownPageKind(other.to_string())),
        }
    }
}

/// Template for one section type
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDefinition {
    #[serde(rename = "type")]
    pub section_type: SectionType,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub category: Category,
    pub default_settings: Settings,
    pub default_styles: StyleProps,
    /// `None` means available on every page kind
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_on: Option<Vec<PageKind>>,
}

impl ComponentDefinition {
    pub fn is_available_on(&self, kind: PageKind) -> bool {
        match &self.available_on {
            Some(kinds) => kinds.contains(&kind),
            None => true,
        }
    }

    /// New visible section carrying copies of the defaults
    pub fn stamp(&self, id: impl Into<String>, order: usize) -> Section {
        Section {
            id: id.into(),
            section_type: self.section_type.clone(),
            order,
            visible: true,
            settings: self.default_settings.clone(),
            styles: self.default_styles.clone(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    definitions: Vec<ComponentDefinition>,
}

impl ComponentRegistry {
    pub fn new(definitions: Vec<ComponentDefinition>) -> Self {
        Self { definitions }
    }

    /// Registry seeded with every built-in section type
    pub fn builtin() -> Self {
        Self::new(builtin_definitions())
    }

    pub fn get(&self, section_type: &SectionType) -> Option<&ComponentDefinition> {
        self.definitions
            .iter()
            .find(|def| &def.section_type == section_type)
    }

    pub fn contains(&self, section_type: &SectionType) -> bool {
        self.get(section_type).is_some()
    }

    pub fn list_all(&self) -> &[ComponentDefinition] {
        &self.definitions
    }

    pub fn list_by_category(&self, category: Category) -> Vec<&ComponentDefinition> {
        self.definitions
            .iter()
            .filter(|def| def.category == category)
            .collect()
    }

    pub fn list_available_for(&self, kind: PageKind) -> Vec<&ComponentDefinition> {
        self.definitions
            .iter()
            .filter(|def| def.is_available_on(kind))
            .collect()
    }

    /// Stamp a new section of `section_type`, if registered
    pub fn stamp(
        &self,
        section_type: &SectionType,
        id: impl Into<String>,
        order: usize,
    ) -> Option<Section> {
        self.get(section_type).map(|def| def.stamp(id, order))
    }
}

fn settings(value: Value) -> Settings {
    match value {
        Value::Object(map) => map,
        _ => Settings::new(),
    }
}

fn define(
    section_type: SectionType,
    name: &str,
    description: &str,
    icon: &str,
    category: Category,
    default_settings: Value,
    default_styles: StyleProps,
) -> ComponentDefinition {
    ComponentDefinition {
        section_type,
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        category,
        default_settings: settings(default_settings),
        default_styles,
        available_on: None,
    }
}

fn only_on(mut def: ComponentDefinition, kinds: &[PageKind]) -> ComponentDefinition {
    def.available_on = Some(kinds.to_vec());
    def
}

fn block(background: &str, vertical: f64) -> StyleProps {
    StyleProps::default()
        .with_background(background)
        .with_padding(BoxSpacing::symmetric(vertical, 32.0))
}

fn builtin_definitions() -> Vec<ComponentDefinition> {
    vec![
        define(
            SectionType::Header,
            "Header",
            "Navigation bar with logo and menu",
            "LayoutHeader",
            Category::Layout,
            json!({
                "logo": "",
                "storeName": "My Store",
                "showSearch": true,
                "menuItems": [
                    { "label": "Home", "link": "/" },
                    { "label": "Products", "link": "/products" },
                    { "label": "About", "link": "/about" }
                ]
            }),
            block("#ffffff", 16.0),
        ),
        define(
            SectionType::AnnouncementBar,
            "Announcement Bar",
            "Thin banner for promotions and shipping notices",
            "Megaphone",
            Category::Marketing,
            json!({
                "message": "Free shipping on orders over $50",
                "linkLabel": "",
                "linkUrl": "",
                "alignment": "center",
                "showClose": true
            }),
            StyleProps::default()
                .with_background("#111827")
                .with_color("#ffffff")
                .with_padding(BoxSpacing::symmetric(8.0, 16.0))
                .with_text_align(TextAlign::Center),
        ),
        only_on(
            define(
                SectionType::Hero,
                "Hero Banner",
                "Large banner with heading and call-to-action",
                "Image",
                Category::Content,
                json!({
                    "heading": "Welcome to Our Store",
                    "subheading": "Discover amazing products",
                    "buttonText": "Shop Now",
                    "buttonLink": "#products",
                    "backgroundImage": "",
                    "alignment": "center"
                }),
                block("#f3f4f6", 80.0).with_text_align(TextAlign::Center),
            ),
            &[PageKind::Home],
        ),
        only_on(
            define(
                SectionType::ProductGrid,
                "Product Grid",
                "Display products in a grid layout",
                "Grid3x3",
                Category::Commerce,
                json!({
                    "heading": "Featured Products",
                    "columns": 4,
                    "maxProducts": 8,
                    "showAll": true,
                    "productIds": [],
                    "showPrice": true,
                    "showAddToCart": true
                }),
                block("#ffffff", 64.0),
            ),
            &[PageKind::Home],
        ),
        only_on(
            define(
                SectionType::ProductCollection,
                "Product Collection",
                "Curated collection of products",
                "LayoutGrid",
                Category::Commerce,
                json!({
                    "heading": "Shop by Collection",
                    "description": "Explore our curated collections",
                    "collections": [],
                    "layout": "grid",
                    "maxProductsPerCollection": 4,
                    "showPrice": true
                }),
                block("#ffffff", 64.0),
            ),
            &[PageKind::Home],
        ),
        define(
            SectionType::Text,
            "Text Block",
            "Rich text content with formatting",
            "Type",
            Category::Content,
            json!({
                "heading": "About Us",
                "content":
                    "<p>Tell your story here. Add your brand message and connect with customers.</p>",
                "alignment": "left"
            }),
            block("#ffffff", 48.0),
        ),
        define(
            SectionType::Image,
            "Image Gallery",
            "Single image or image gallery",
            "ImageIcon",
            Category::Content,
            json!({
                "images": [],
                "layout": "single",
                "gridColumns": 3,
                "aspectRatio": "16:9",
                "caption": ""
            }),
            block("#ffffff", 32.0),
        ),
        define(
            SectionType::Video,
            "Video Embed",
            "Embed YouTube, Vimeo, or custom video",
            "Video",
            Category::Content,
            json!({
                "videoUrl": "",
                "provider": "youtube",
                "autoplay": false,
                "controls": true,
                "aspectRatio": "16:9"
            }),
            block("#000000", 48.0),
        ),
        define(
            SectionType::Newsletter,
            "Newsletter Signup",
            "Email capture form",
            "Mail",
            Category::Marketing,
            json!({
                "heading": "Stay Updated",
                "description": "Subscribe to get special offers and updates",
                "buttonText": "Subscribe",
                "placeholder": "Enter your email",
                "successMessage": "Thanks for subscribing!"
            }),
            block("#f9fafb", 64.0).with_text_align(TextAlign::Center),
        ),
        define(
            SectionType::Testimonials,
            "Testimonials",
            "Customer reviews and testimonials",
            "MessageSquare",
            Category::Marketing,
            json!({
                "heading": "What Our Customers Say",
                "testimonials": [
                    {
                        "name": "John Doe",
                        "rating": 5,
                        "text": "Amazing products and great service!",
                        "avatar": ""
                    }
                ],
                "layout": "carousel"
            }),
            block("#ffffff", 64.0),
        ),
        only_on(
            define(
                SectionType::ProductDetails,
                "Product Details",
                "Gallery, pricing, rating and purchase panel for one product",
                "ShoppingBag",
                Category::Commerce,
                json!({
                    "showBadge": true,
                    "badgeText": "Bestseller",
                    "tagline": "",
                    "showRating": true,
                    "ratingValue": 4.8,
                    "ratingCount": 120,
                    "showTrustBadges": true,
                    "trustBadges": [
                        { "icon": "truck", "text": "Free shipping over $50" },
                        { "icon": "refresh", "text": "30-day returns" },
                        { "icon": "shield", "text": "Secure checkout" }
                    ],
                    "showReviews": true,
                    "showSizeChart": true
                }),
                block("#ffffff", 48.0),
            ),
            &[PageKind::Product],
        ),
        only_on(
            define(
                SectionType::ProductRecommendations,
                "Product Recommendations",
                "Similar products shown below a product",
                "Sparkles",
                Category::Commerce,
                json!({
                    "heading": "You may also like",
                    "subheading": "",
                    "maxItems": 4,
                    "layout": "grid"
                }),
                block("#ffffff", 48.0),
            ),
            &[PageKind::Product],
        ),
        define(
            SectionType::Footer,
            "Footer",
            "Footer with links and information",
            "LayoutFooter",
            Category::Layout,
            json!({
                "sections": [
                    {
                        "title": "Shop",
                        "links": [
                            { "label": "All Products", "url": "/products" },
                            { "label": "New Arrivals", "url": "/new" }
                        ]
                    },
                    {
                        "title": "Support",
                        "links": [
                            { "label": "Contact Us", "url": "/contact" },
                            { "label": "FAQ", "url": "/faq" }
                        ]
                    }
                ],
                "copyright": "© 2025 Your Store. All rights reserved.",
                "socialLinks": []
            }),
            StyleProps::default()
                .with_background("#1f2937")
                .with_color("#ffffff")
                .with_padding(BoxSpacing::new(48.0, 32.0, 32.0, 32.0)),
        ),
        define(
            SectionType::CustomHtml,
            "Custom HTML",
            "Add custom HTML code",
            "Code",
            Category::Content,
            json!({
                "html": "<div><p>Add your custom HTML here</p></div>"
            }),
            block("#ffffff", 32.0),
        ),
    ]
}
