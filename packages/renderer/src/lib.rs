//! # Shelf Renderer
//!
//! Turns builder sections into a virtual node tree. The same functions back
//! the editor canvas and the public storefront, so both always agree on
//! what a document looks like.
//!
//! ## Determinism
//!
//! Rendering is a pure function of `(section, RenderContext)`:
//! - no clocks, randomness or global state are read
//! - attribute and style maps are ordered (`BTreeMap`), so serialized
//!   output is byte-stable
//! - every `SectionType`, including unrecognised tags, renders without error
//!
//! ```text
//! Page ──visible_sections()──► render(section, ctx) ──► VNode
//!   └──────────────── render_page ────────────────────► VirtualDocument
//! ```

pub mod context;
pub mod renderer;
pub mod sections;
pub mod styles;
pub mod vdom;

#[cfg(test)]
mod tests_sections;

#[cfg(test)]
mod tests_edge_cases;

pub use context::{ProductClick, RenderContext};
pub use renderer::{render, render_fallback, render_page, StorefrontRenderer};
pub use sections::content::embed_url;
pub use vdom::{CssRule, StyleMap, VNode, VirtualDocument};
