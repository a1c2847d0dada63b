use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of content block a section renders as.
///
/// Serialized as its kebab-case tag (`"product-grid"`). Tags this build does
/// not know about are preserved verbatim in [`SectionType::Unknown`] so that
/// documents written by newer editors still load and round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SectionType {
    Header,
    AnnouncementBar,
    Hero,
    ProductGrid,
    ProductCollection,
    Text,
    Image,
    Video,
    Newsletter,
    Testimonials,
    ProductDetails,
    ProductRecommendations,
    Footer,
    CustomHtml,
    Unknown(String),
}

impl SectionType {
    /// Every known variant, in palette order
    pub const KNOWN: [SectionType; 14] = [
        SectionType::Header,
        SectionType::AnnouncementBar,
        SectionType::Hero,
        SectionType::ProductGrid,
        SectionType::ProductCollection,
        SectionType::Text,
        SectionType::Image,
        SectionType::Video,
        SectionType::Newsletter,
        SectionType::Testimonials,
        SectionType::ProductDetails,
        SectionType::ProductRecommendations,
        SectionType::Footer,
        SectionType::CustomHtml,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            SectionType::Header => "header",
            SectionType::AnnouncementBar => "announcement-bar",
            SectionType::Hero => "hero",
            SectionType::ProductGrid => "product-grid",
            SectionType::ProductCollection => "product-collection",
            SectionType::Text => "text",
            SectionType::Image => "image",
            SectionType::Video => "video",
            SectionType::Newsletter => "newsletter",
            SectionType::Testimonials => "testimonials",
            SectionType::ProductDetails => "product-details",
            SectionType::ProductRecommendations => "product-recommendations",
            SectionType::Footer => "footer",
            SectionType::CustomHtml => "custom-html",
            SectionType::Unknown(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, SectionType::Unknown(_))
    }
}

impl From<&str> for SectionType {
    fn from(tag: &str) -> Self {
        match tag {
            "header" => SectionType::Header,
            "announcement-bar" => SectionType::AnnouncementBar,
            "hero" => SectionType::Hero,
            "product-grid" => SectionType::ProductGrid,
            "product-collection" => SectionType::ProductCollection,
            "text" => SectionType::Text,
            "image" => SectionType::Image,
            "video" => SectionType::Video,
            "newsletter" => SectionType::Newsletter,
            "testimonials" => SectionType::Testimonials,
            "product-details" => SectionType::ProductDetails,
            "product-recommendations" => SectionType::ProductRecommendations,
            "footer" => SectionType::Footer,
            "custom-html" => SectionType::CustomHtml,
            other => SectionType::Unknown(other.to_string()),
        }
    }
}

impl From<String> for SectionType {
    fn from(tag: String) -> Self {
        match SectionType::from(tag.as_str()) {
            SectionType::Unknown(_) => SectionType::Unknown(tag),
            known => known,
        }
    }
}

impl From<SectionType> for String {
    fn from(section_type: SectionType) -> Self {
        match section_type {
            SectionType::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
