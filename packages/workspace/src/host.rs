//! # Storefront Host
//!
//! Read path for public storefronts: resolve a store by subdomain, pick the
//! published page whose slug matches the route, and render it with the same
//! renderer the editor canvas uses.
//!
//! Routes of the form `<slug>/<product-id>` (e.g. `/product/p1`) render the
//! page at `<slug>` focused on that product.
//!
//! Anything the builder cannot serve comes back as
//! [`StorefrontView::DefaultLayout`]; drawing that layout is the caller's job.

use crate::error::{WorkspaceError, WorkspaceResult};
use serde::Serialize;
use shelf_editor::BuilderStore;
use shelf_model::{ComponentRegistry, Page, Product, StoreBuilder};
use shelf_renderer::{RenderContext, StorefrontRenderer, VirtualDocument};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FallbackReason {
    BuilderDisabled,
    NoPublishedBuilder,
    PageNotFound,
    ProductNotFound,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum StorefrontView {
    Builder {
        page_id: String,
        document: VirtualDocument,
    },
    DefaultLayout {
        reason: FallbackReason,
    },
}

impl StorefrontView {
    pub fn document(&self) -> Option<&VirtualDocument> {
        match self {
            StorefrontView::Builder { document, .. } => Some(document),
            StorefrontView::DefaultLayout { .. } => None,
        }
    }
}

/// Link a product card on `subdomain`'s storefront navigates to
pub fn product_href(subdomain: &str, product: &Product) -> String {
    format!("/store/{}/product/{}", subdomain, product.id)
}

pub struct StorefrontHost {
    storage: Arc<dyn BuilderStore>,
    registry: Arc<ComponentRegistry>,
}

impl StorefrontHost {
    pub fn new(storage: Arc<dyn BuilderStore>, registry: Arc<ComponentRegistry>) -> Self {
        Self { storage, registry }
    }

    pub fn render(&self, subdomain: &str, route: &str) -> WorkspaceResult<StorefrontView> {
        let store = self
            .storage
            .find_store_by_subdomain(subdomain)?
            .ok_or_else(|| WorkspaceError::StoreNotFound(subdomain.to_string()))?;

        let builder = match (store.use_builder, store.builder.as_ref()) {
            (false, _) => return Ok(fallback(subdomain, FallbackReason::BuilderDisabled)),
            (true, None) => return Ok(fallback(subdomain, FallbackReason::NoPublishedBuilder)),
            (true, Some(builder)) => builder,
        };

        let route = normalize_route(route);
        let Some((page, product_id)) = resolve_page(builder, &route) else {
            return Ok(fallback(subdomain, FallbackReason::PageNotFound));
        };

        let products = self.storage.get_products(&store.product_ids)?;
        let current = match product_id {
            Some(id) => match products.iter().find(|p| p.id == id) {
                Some(product) => Some(product),
                None => return Ok(fallback(subdomain, FallbackReason::ProductNotFound)),
            },
            None => None,
        };

        let click = |product: &Product| product_href(&store.subdomain, product);
        let mut ctx =
            RenderContext::new(&products, &builder.global_styles).with_product_click(&click);
        if let Some(product) = current {
            ctx = ctx.with_current_product(product);
        }

        let document = StorefrontRenderer::new(&self.registry).render_page_with_css(
            page,
            &ctx,
            builder.custom_css.as_deref(),
        );

        info!(
            subdomain,
            route = %route,
            page_id = %page.id,
            sections = document.nodes.len(),
            "Rendered storefront page"
        );
        Ok(StorefrontView::Builder {
            page_id: page.id.clone(),
            document,
        })
    }
}

fn fallback(subdomain: &str, reason: FallbackReason) -> StorefrontView {
    debug!(subdomain, ?reason, "Serving default layout");
    StorefrontView::DefaultLayout { reason }
}

/// `""`, `"shop/"` and `" /shop "` become `"/"`, `"/shop"` and `"/shop"`
fn normalize_route(route: &str) -> String {
    let trimmed = route.trim().trim_matches('/');
    format!("/{}", trimmed)
}

fn resolve_page<'b, 'r>(
    builder: &'b StoreBuilder,
    route: &'r str,
) -> Option<(&'b Page, Option<&'r str>)> {
    if let Some(page) = builder.page_by_slug(route) {
        return Some((page, None));
    }

    let (parent, product_id) = route.rsplit_once('/')?;
    if parent.is_empty() || product_id.is_empty() {
        return None;
    }
    builder
        .page_by_slug(parent)
        .map(|page| (page, Some(product_id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_route() {
        assert_eq!(normalize_route(""), "/");
        assert_eq!(normalize_route("/"), "/");
        assert_eq!(normalize_route("shop/"), "/shop");
        assert_eq!(normalize_route(" /shop "), "/shop");
        assert_eq!(normalize_route("/product/p1"), "/product/p1");
    }

    #[test]
    fn test_resolve_product_route() {
        let mut builder = StoreBuilder::default_document();
        builder.pages.push(Page {
            id: "product".to_string(),
            name: "Product".to_string(),
            slug: "/product".to_string(),
            is_system_page: false,
            sections: Vec::new(),
        });

        let (page, id) = resolve_page(&builder, "/product/p9").unwrap();
        assert_eq!(page.id, "product");
        assert_eq!(id, Some("p9"));

        let (page, id) = resolve_page(&builder, "/").unwrap();
        assert_eq!(page.id, "home");
        assert_eq!(id, None);

        // "/x" splits into ("", "x") and the root page is not a product page
        assert!(resolve_page(&builder, "/about").is_none());
    }
}
