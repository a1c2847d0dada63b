//! # Shelf Model
//!
//! Data shapes shared by the storefront builder: the [`StoreBuilder`]
//! document with its pages and sections, style payloads, the static
//! [`ComponentRegistry`] of section types, and read models for stores and
//! catalog products.
//!
//! ```text
//! StoreBuilder
//!  ├─ globalStyles        (theme)
//!  └─ pages[]             (routed by slug)
//!      └─ sections[]      (ordered 0..n, hidden ones kept)
//!          ├─ settings    (free-form, stamped from the registry)
//!          └─ styles      (optional overrides)
//! ```

pub mod document;
pub mod error;
pub mod id_generator;
pub mod registry;
pub mod section_type;
pub mod store;
pub mod styles;

pub use document::{
    renumber, NewPage, Page, PagePatch, Section, SectionPatch, Settings, StoreBuilder,
    DOCUMENT_VERSION, HOME_PAGE_ID,
};
pub use error::ModelError;
pub use id_generator::{derive_page_id, get_seed, IdGenerator};
pub use registry::{Category, ComponentDefinition, ComponentRegistry, PageKind};
pub use section_type::SectionType;
pub use store::{Product, StoreRecord};
pub use styles::{
    BoxSpacing, ButtonStyle, CardStyle, GlobalStyles, GlobalStylesPatch, SpacingScale, StyleProps,
    TextAlign,
};
