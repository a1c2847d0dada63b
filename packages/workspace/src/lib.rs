//! # Shelf Workspace
//!
//! Host-side wiring for the storefront builder: a JSON-file
//! [`BuilderStore`](shelf_editor::BuilderStore), a tokio broadcast channel
//! for publish events, and the storefront read path that turns a subdomain
//! and route into a rendered page.

pub mod broadcast;
pub mod error;
pub mod file_store;
pub mod host;
pub mod workspace;

pub use broadcast::ChangeChannel;
pub use error::{WorkspaceError, WorkspaceResult};
pub use file_store::FileStore;
pub use host::{product_href, FallbackReason, StorefrontHost, StorefrontView};
pub use workspace::Workspace;
