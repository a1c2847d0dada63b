use shelf_model::{GlobalStyles, Product};
use std::fmt;

/// Maps a clicked product to the href the storefront should navigate to
pub type ProductClick<'a> = &'a (dyn Fn(&Product) -> String + Sync);

/// Everything a section may read besides its own settings.
///
/// Contexts are cheap to copy; they only borrow their inputs.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub products: &'a [Product],
    pub global_styles: &'a GlobalStyles,
    /// Editor canvas: links, forms and buttons render inert
    pub is_preview: bool,
    pub on_product_click: Option<ProductClick<'a>>,
    /// Product a product page is showing; product sections fall back to the
    /// first catalog product when unset
    pub current_product: Option<&'a Product>,
}

impl<'a> RenderContext<'a> {
    pub fn new(products: &'a [Product], global_styles: &'a GlobalStyles) -> Self {
        Self {
            products,
            global_styles,
            is_preview: false,
            on_product_click: None,
            current_product: None,
        }
    }

    pub fn preview(mut self, is_preview: bool) -> Self {
        self.is_preview = is_preview;
        self
    }

    pub fn with_product_click(mut self, on_product_click: ProductClick<'a>) -> Self {
        self.on_product_click = Some(on_product_click);
        self
    }

    pub fn with_current_product(mut self, product: &'a Product) -> Self {
        self.current_product = Some(product);
        self
    }

    pub fn focus_product(&self) -> Option<&'a Product> {
        self.current_product.or_else(|| self.products.first())
    }

    /// Link target for a product card, if the host wired one up and links
    /// are live
    pub fn product_href(&self, product: &Product) -> Option<String> {
        if self.is_preview {
            return None;
        }
        self.on_product_click.map(|click| click(product))
    }
}

impl fmt::Debug for RenderContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderContext")
            .field("products", &self.products.len())
            .field("global_styles", self.global_styles)
            .field("is_preview", &self.is_preview)
            .field("on_product_click", &self.on_product_click.is_some())
            .field("current_product", &self.current_product.map(|p| &p.id))
            .finish()
    }
}
