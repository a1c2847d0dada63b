use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ordered property map (deterministic iteration and serialization)
pub type StyleMap = BTreeMap<String, String>;

/// Virtual DOM node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VNode {
    /// HTML element
    Element {
        tag: String,
        attributes: BTreeMap<String, String>,
        styles: StyleMap,
        children: Vec<VNode>,
        /// Stable key for repeated items (products, links, testimonials)
        #[serde(skip_serializing_if = "Option::is_none")]
        key: Option<String>,
    },

    /// Text node
    Text { content: String },

    /// Merchant-authored markup inserted as-is (text blocks, custom HTML)
    RawHtml { html: String },
}

impl VNode {
    pub fn element(tag: impl Into<String>) -> Self {
        VNode::Element {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            styles: StyleMap::new(),
            children: Vec::new(),
            key: None,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        VNode::Text {
            content: content.into(),
        }
    }

    pub fn raw_html(html: impl Into<String>) -> Self {
        VNode::RawHtml { html: html.into() }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element {
            ref mut attributes, ..
        } = self
        {
            attributes.insert(key.into(), value.into());
        }
        self
    }

    pub fn with_class(self, class: impl Into<String>) -> Self {
        self.with_attr("class", class)
    }

    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element { ref mut styles, .. } = self {
            styles.insert(key.into(), value.into());
        }
        self
    }

    /// Layer `extra` over the current styles
    pub fn with_styles(mut self, extra: StyleMap) -> Self {
        if let VNode::Element { ref mut styles, .. } = self {
            styles.extend(extra);
        }
        self
    }

    pub fn with_child(mut self, child: VNode) -> Self {
        if let VNode::Element {
            ref mut children, ..
        } = self
        {
            children.push(child);
        }
        self
    }

    pub fn with_children(mut self, new_children: Vec<VNode>) -> Self {
        if let VNode::Element {
            ref mut children, ..
        } = self
        {
            children.extend(new_children);
        }
        self
    }

    /// Append `child` only when present
    pub fn with_optional_child(self, child: Option<VNode>) -> Self {
        match child {
            Some(child) => self.with_child(child),
            None => self,
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        if let VNode::Element {
            key: ref mut node_key,
            ..
        } = self
        {
            *node_key = Some(key.into());
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            VNode::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            VNode::Element { attributes, .. } => attributes.get(name).map(String::as_str),
            _ => None,
        }
    }

    pub fn style(&self, name: &str) -> Option<&str> {
        match self {
            VNode::Element { styles, .. } => styles.get(name).map(String::as_str),
            _ => None,
        }
    }

    pub fn children(&self) -> &[VNode] {
        match self {
            VNode::Element { children, .. } => children,
            _ => &[],
        }
    }

    /// Concatenated text of this node and its descendants
    pub fn text_content(&self) -> String {
        match self {
            VNode::Text { content } => content.clone(),
            VNode::RawHtml { .. } => String::new(),
            VNode::Element { children, .. } => {
                children.iter().map(VNode::text_content).collect()
            }
        }
    }

    /// Depth-first search for the first element matching `predicate`
    pub fn find(&self, predicate: &dyn Fn(&VNode) -> bool) -> Option<&VNode> {
        if predicate(self) {
            return Some(self);
        }
        self.children()
            .iter()
            .find_map(|child| child.find(predicate))
    }

    /// All elements (self included) matching `predicate`, depth-first
    pub fn find_all(&self, predicate: &dyn Fn(&VNode) -> bool) -> Vec<&VNode> {
        let mut found = Vec::new();
        self.collect_into(predicate, &mut found);
        found
    }

    fn collect_into<'a>(&'a self, predicate: &dyn Fn(&VNode) -> bool, found: &mut Vec<&'a VNode>) {
        if predicate(self) {
            found.push(self);
        }
        for child in self.children() {
            child.collect_into(predicate, found);
        }
    }
}

/// Rendered page: root nodes in display order plus page-level stylesheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VirtualDocument {
    pub nodes: Vec<VNode>,
    pub styles: Vec<CssRule>,
    /// Merchant stylesheet appended after the generated rules
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_css: Option<String>,
}

/// CSS Rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CssRule {
    pub selector: String,
    pub properties: StyleMap,
}

impl VirtualDocument {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            styles: Vec::new(),
            custom_css: None,
        }
    }

    pub fn add_node(&mut self, node: VNode) {
        self.nodes.push(node);
    }

    pub fn add_style(&mut self, selector: impl Into<String>, properties: StyleMap) {
        self.styles.push(CssRule {
            selector: selector.into(),
            properties,
        });
    }

    pub fn add_raw_css(&mut self, css: impl Into<String>) {
        let css = css.into();
        match &mut self.custom_css {
            Some(existing) => {
                existing.push('\n');
                existing.push_str(&css);
            }
            None => self.custom_css = Some(css),
        }
    }
}

impl Default for VirtualDocument {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_methods_ignore_text_nodes() {
        let node = VNode::text("hi").with_attr("id", "x").with_child(VNode::text("y"));
        assert_eq!(node, VNode::text("hi"));
    }

    #[test]
    fn test_find_and_text_content() {
        let tree = VNode::element("div")
            .with_child(VNode::element("h1").with_child(VNode::text("Title")))
            .with_child(
                VNode::element("p")
                    .with_attr("data-role", "body")
                    .with_child(VNode::text("Body")),
            );

        assert_eq!(tree.text_content(), "TitleBody");
        let p = tree.find(&|n| n.attr("data-role") == Some("body")).unwrap();
        assert_eq!(p.tag(), Some("p"));
        assert_eq!(tree.find_all(&|n| n.tag().is_some()).len(), 3);
    }
}
