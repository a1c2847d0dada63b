//! Read models for the records the builder touches outside its own document:
//! the store that owns a published document and the catalog products a
//! storefront displays.

use crate::document::StoreBuilder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A merchant store as persisted by the document store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreRecord {
    pub id: String,
    pub user_id: String,
    pub store_name: String,
    /// Routing key the storefront host resolves (`<subdomain>.example.com`)
    pub subdomain: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default)]
    pub product_ids: Vec<String>,
    /// Serve the published builder document instead of the default layout
    #[serde(default)]
    pub use_builder: bool,
    /// Live, published document (never a draft)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub builder: Option<StoreBuilder>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl StoreRecord {
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        store_name: impl Into<String>,
        subdomain: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            store_name: store_name.into(),
            subdomain: subdomain.into(),
            description: None,
            logo: None,
            product_ids: Vec::new(),
            use_builder: false,
            builder: None,
            updated_at: None,
        }
    }

    /// Copy carrying `builder` as the live document
    pub fn published(&self, builder: StoreBuilder, at: DateTime<Utc>) -> StoreRecord {
        StoreRecord {
            use_builder: true,
            builder: Some(builder),
            updated_at: Some(at),
            ..self.clone()
        }
    }
}

/// The slice of a catalog product the storefront renderer reads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(default)]
    pub subcategory_ids: Vec<String>,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: None,
            description: None,
            category_id: None,
            subcategory_ids: Vec::new(),
        }
    }

    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price)
    }
}
