//! Minimal HTML document tree for scraping semi-structured pages.
//!
//! The source site publishes markup, not an API, so this module parses HTML
//! into a small arena tree and exposes just enough querying for landmark
//! extraction: tag/class/id selectors with a descendant combinator, text
//! content, and sibling navigation. Extraction code depends only on the
//! [`DomNode`] trait, never on the parser itself.

mod parser;
mod selector;


pub use parser::parse;

use selector::Selector;

pub(crate) type NodeId = usize;

#[derive(Debug)]
pub(crate) enum NodeData {
    Element {
        tag: String,
        id: Option<String>,
        classes: Vec<String>,
    },
    Text(String),
}

#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) data: NodeData,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

/// A parsed HTML document. Node 0 is a synthetic root element.
#[derive(Debug)]
pub struct Document {
    pub(crate) nodes: Vec<Node>,
}

impl Document {
    /// Returns the synthetic root node wrapping the whole document.
    pub fn root(&self) -> NodeRef<'_> {
        NodeRef { doc: self, id: 0 }
    }

    /// Finds all descendants of the root matching the selector.
    pub fn select(&self, selector: &str) -> Vec<NodeRef<'_>> {
        self.root().select(selector)
    }
}

/// Capability surface the extraction core needs from a document tree.
///
/// Implemented by [`NodeRef`]; extractors stay decoupled from the concrete
/// parser and can be exercised against any tree adapter.
pub trait DomNode: Sized {
    /// Finds all descendant elements matching a selector
    /// (tag, `.class`, `#id`, descendant combinator), in document order.
    fn select(&self, selector: &str) -> Vec<Self>;

    /// Concatenated text content of the subtree.
    fn text(&self) -> String;

    /// Next sibling element, skipping text nodes.
    fn next_sibling(&self) -> Option<Self>;
}

/// A borrowed reference to one node of a [`Document`].
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    doc: &'a Document,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    fn node(&self) -> &'a Node {
        &self.doc.nodes[self.id]
    }

    /// Element tag name, lowercase. Empty for the synthetic root.
    pub fn tag(&self) -> &'a str {
        match &self.node().data {
            NodeData::Element { tag, .. } => tag,
            NodeData::Text(_) => "",
        }
    }

    /// Child elements, in document order.
    pub fn children(&self) -> Vec<NodeRef<'a>> {
        self.node()
            .children
            .iter()
            .filter(|&&id| matches!(self.doc.nodes[id].data, NodeData::Element { .. }))
            .map(|&id| NodeRef { doc: self.doc, id })
            .collect()
    }

    fn collect_text(&self, out: &mut String) {
        match &self.node().data {
            NodeData::Text(t) => out.push_str(t),
            NodeData::Element { .. } => {
                for &child in &self.node().children {
                    NodeRef { doc: self.doc, id: child }.collect_text(out);
                }
            }
        }
    }

    /// Walks the subtree in document order, collecting elements that match
    /// the full descendant chain of the selector.
    fn select_into(&self, sel: &Selector, out: &mut Vec<NodeRef<'a>>) {
        for &child in &self.node().children {
            let node = NodeRef { doc: self.doc, id: child };
            if let NodeData::Element { .. } = node.node().data {
                if sel.matches(self.doc, child) {
                    out.push(node);
                }
                node.select_into(sel, out);
            }
        }
    }
}

impl<'a> DomNode for NodeRef<'a> {
    fn select(&self, selector: &str) -> Vec<Self> {
        let mut out = Vec::new();
        match Selector::parse(selector) {
            Some(sel) => self.select_into(&sel, &mut out),
            None => tracing::warn!(selector, "unparsable selector"),
        }
        out
    }

    fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn next_sibling(&self) -> Option<Self> {
        let parent = self.node().parent?;
        let siblings = &self.doc.nodes[parent].children;
        let pos = siblings.iter().position(|&id| id == self.id)?;
        siblings[pos + 1..]
            .iter()
            .find(|&&id| matches!(self.doc.nodes[id].data, NodeData::Element { .. }))
            .map(|&id| NodeRef { doc: self.doc, id })
    }
}
