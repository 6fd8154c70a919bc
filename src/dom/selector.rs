//! Selector parsing and matching.
//!
//! Supports exactly the shapes the providers use: a whitespace-separated
//! descendant chain of simple parts, each part being an optional tag name
//! followed by any number of `#id` / `.class` qualifiers.

use super::{Document, NodeData, NodeId};

#[derive(Debug, Default)]
struct SimplePart {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl SimplePart {
    fn parse(token: &str) -> Option<SimplePart> {
        let mut part = SimplePart::default();
        let mut rest = token;

        // Leading tag name, if any.
        let tag_end = rest
            .find(|c| c == '.' || c == '#')
            .unwrap_or(rest.len());
        if tag_end > 0 {
            part.tag = Some(rest[..tag_end].to_ascii_lowercase());
            rest = &rest[tag_end..];
        }

        while !rest.is_empty() {
            let kind = rest.chars().next().unwrap();
            rest = &rest[1..];
            let end = rest
                .find(|c| c == '.' || c == '#')
                .unwrap_or(rest.len());
            let name = &rest[..end];
            if name.is_empty() {
                return None;
            }
            match kind {
                '.' => part.classes.push(name.to_string()),
                '#' => part.id = Some(name.to_string()),
                _ => return None,
            }
            rest = &rest[end..];
        }

        if part.tag.is_none() && part.id.is_none() && part.classes.is_empty() {
            return None;
        }
        Some(part)
    }

    fn matches(&self, data: &NodeData) -> bool {
        let NodeData::Element { tag, id, classes } = data else {
            return false;
        };
        if let Some(ref want) = self.tag {
            if want != tag {
                return false;
            }
        }
        if let Some(ref want) = self.id {
            if id.as_deref() != Some(want.as_str()) {
                return false;
            }
        }
        self.classes.iter().all(|c| classes.contains(c))
    }
}

#[derive(Debug)]
pub(crate) struct Selector {
    parts: Vec<SimplePart>,
}

impl Selector {
    pub(crate) fn parse(selector: &str) -> Option<Selector> {
        let parts: Option<Vec<_>> = selector
            .split_whitespace()
            .map(SimplePart::parse)
            .collect();
        let parts = parts?;
        if parts.is_empty() {
            return None;
        }
        Some(Selector { parts })
    }

    /// Returns true if the node matches the last part and has an ancestor
    /// chain matching the earlier parts, outermost first.
    pub(crate) fn matches(&self, doc: &Document, node: NodeId) -> bool {
        let (last, ancestors) = self.parts.split_last().expect("selector has parts");
        if !last.matches(&doc.nodes[node].data) {
            return false;
        }

        let mut current = doc.nodes[node].parent;
        for part in ancestors.iter().rev() {
            loop {
                let Some(id) = current else {
                    return false;
                };
                current = doc.nodes[id].parent;
                if part.matches(&doc.nodes[id].data) {
                    break;
                }
            }
        }
        true
    }
}
