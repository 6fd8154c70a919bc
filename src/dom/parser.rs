//! Best-effort HTML tree builder.
//!
//! Real-world report markup is not guaranteed to be well formed, so parsing
//! never fails: unknown constructs are skipped, stray close tags are ignored,
//! and common implicitly-closed elements (`li`, `td`, `th`, `tr`, `p`) are
//! closed when a new one opens.

use super::{Document, Node, NodeData, NodeId};

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Parses an HTML fragment or full page into a [`Document`].
pub fn parse(html: &str) -> Document {
    let mut parser = Parser {
        input: html,
        pos: 0,
        nodes: vec![Node {
            data: NodeData::Element {
                tag: String::new(),
                id: None,
                classes: Vec::new(),
            },
            parent: None,
            children: Vec::new(),
        }],
        stack: vec![0],
    };
    parser.run();
    Document { nodes: parser.nodes }
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
    nodes: Vec<Node>,
    stack: Vec<NodeId>,
}

impl<'a> Parser<'a> {
    fn run(&mut self) {
        while self.pos < self.input.len() {
            let rest = &self.input[self.pos..];
            match rest.find('<') {
                Some(0) => self.handle_tag(),
                Some(offset) => {
                    self.push_text(&self.input[self.pos..self.pos + offset]);
                    self.pos += offset;
                }
                None => {
                    self.push_text(rest);
                    self.pos = self.input.len();
                }
            }
        }
    }

    fn current(&self) -> NodeId {
        *self.stack.last().expect("root never popped")
    }

    fn push_text(&mut self, raw: &str) {
        if raw.is_empty() {
            return;
        }
        // Inter-tag whitespace runs collapse to a single separator so text
        // concatenation keeps word boundaries without the markup noise.
        let text = if raw.chars().all(char::is_whitespace) {
            " ".to_string()
        } else {
            decode_entities(raw)
        };
        let parent = self.current();
        let id = self.nodes.len();
        self.nodes.push(Node {
            data: NodeData::Text(text),
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent].children.push(id);
    }

    fn handle_tag(&mut self) {
        let rest = &self.input[self.pos..];

        if rest.starts_with("<!--") {
            self.pos += match rest.find("-->") {
                Some(end) => end + 3,
                None => rest.len(),
            };
            return;
        }
        if rest.starts_with("<!") || rest.starts_with("<?") {
            self.pos += match rest.find('>') {
                Some(end) => end + 1,
                None => rest.len(),
            };
            return;
        }
        if rest.starts_with("</") {
            let end = rest.find('>').map(|e| e + 1).unwrap_or(rest.len());
            let name: String = rest[2..]
                .chars()
                .take_while(|c| c.is_ascii_alphanumeric())
                .collect::<String>()
                .to_ascii_lowercase();
            self.close_element(&name);
            self.pos += end;
            return;
        }

        // Opening tag. A lone '<' that does not start a tag name is text.
        let after = &rest[1..];
        if !after.starts_with(|c: char| c.is_ascii_alphabetic()) {
            self.push_text("<");
            self.pos += 1;
            return;
        }

        let name: String = after
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();

        let attrs_start = 1 + name.len();
        let (id, classes, tag_len, self_closing) = parse_attrs(&rest[attrs_start..]);
        self.pos += attrs_start + tag_len;

        self.apply_implicit_closes(&name);

        let parent = self.current();
        let node_id = self.nodes.len();
        self.nodes.push(Node {
            data: NodeData::Element {
                tag: name.clone(),
                id,
                classes,
            },
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent].children.push(node_id);

        if self_closing || VOID_ELEMENTS.contains(&name.as_str()) {
            return;
        }

        if name == "script" || name == "style" {
            self.skip_raw_text(&name);
            return;
        }

        self.stack.push(node_id);
    }

    /// Closes the innermost open element with the given tag, if any.
    /// A close tag with no matching open element is ignored.
    fn close_element(&mut self, tag: &str) {
        if let Some(depth) = self
            .stack
            .iter()
            .rposition(|&id| self.tag_of(id) == Some(tag))
        {
            if depth > 0 {
                self.stack.truncate(depth);
            }
        }
    }

    /// Pops elements that a newly opened tag implicitly closes.
    fn apply_implicit_closes(&mut self, new_tag: &str) {
        while self.stack.len() > 1 {
            let top = self.tag_of(self.current()).unwrap_or("");
            let closes = matches!(
                (top, new_tag),
                ("li", "li")
                    | ("td", "td" | "th" | "tr")
                    | ("th", "td" | "th" | "tr")
                    | ("tr", "tr")
                    | ("p", "p")
                    | ("option", "option")
            );
            if !closes {
                break;
            }
            self.stack.pop();
        }
    }

    /// Consumes script/style content without building nodes for it.
    fn skip_raw_text(&mut self, tag: &str) {
        let close = format!("</{}", tag);
        let lower = self.input[self.pos..].to_ascii_lowercase();
        match lower.find(&close) {
            Some(offset) => {
                let after = self.pos + offset;
                let end = self.input[after..]
                    .find('>')
                    .map(|e| after + e + 1)
                    .unwrap_or(self.input.len());
                self.pos = end;
            }
            None => self.pos = self.input.len(),
        }
    }

    fn tag_of(&self, id: NodeId) -> Option<&str> {
        match &self.nodes[id].data {
            NodeData::Element { tag, .. } => Some(tag),
            NodeData::Text(_) => None,
        }
    }
}

/// Parses the attribute list of an opening tag.
///
/// Returns (id, classes, bytes consumed including the closing `>`,
/// self-closing flag). Only `id` and `class` are kept; nothing else is
/// selected on.
fn parse_attrs(input: &str) -> (Option<String>, Vec<String>, usize, bool) {
    let mut id = None;
    let mut classes = Vec::new();
    let mut self_closing = false;
    let bytes = input.as_bytes();
    let mut pos = 0;

    while pos < bytes.len() {
        match bytes[pos] {
            b'>' => {
                pos += 1;
                break;
            }
            b'/' => {
                self_closing = true;
                pos += 1;
            }
            c if c.is_ascii_whitespace() => pos += 1,
            _ => {
                let name_start = pos;
                while pos < bytes.len()
                    && !bytes[pos].is_ascii_whitespace()
                    && !matches!(bytes[pos], b'=' | b'>' | b'/')
                {
                    pos += 1;
                }
                let name = input[name_start..pos].to_ascii_lowercase();

                let mut value = String::new();
                if pos < bytes.len() && bytes[pos] == b'=' {
                    pos += 1;
                    if pos < bytes.len() && (bytes[pos] == b'"' || bytes[pos] == b'\'') {
                        let quote = bytes[pos];
                        pos += 1;
                        let value_start = pos;
                        while pos < bytes.len() && bytes[pos] != quote {
                            pos += 1;
                        }
                        value = input[value_start..pos].to_string();
                        pos = (pos + 1).min(bytes.len());
                    } else {
                        let value_start = pos;
                        while pos < bytes.len()
                            && !bytes[pos].is_ascii_whitespace()
                            && bytes[pos] != b'>'
                        {
                            pos += 1;
                        }
                        value = input[value_start..pos].to_string();
                    }
                }

                match name.as_str() {
                    "id" => id = Some(value),
                    "class" => {
                        classes.extend(value.split_whitespace().map(str::to_string));
                    }
                    _ => {}
                }
            }
        }
    }

    (id, classes, pos, self_closing)
}

/// Decodes the handful of entities that appear in the source markup.
fn decode_entities(raw: &str) -> String {
    if !raw.contains('&') {
        return raw.to_string();
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];

        let end = match rest.find(';') {
            Some(end) if end <= 10 => end,
            _ => {
                out.push('&');
                rest = &rest[1..];
                continue;
            }
        };
        let entity = &rest[1..end];
        let decoded = match entity {
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            "nbsp" => Some(' '),
            _ => entity
                .strip_prefix('#')
                .and_then(|digits| {
                    if let Some(hex) = digits.strip_prefix('x').or(digits.strip_prefix('X')) {
                        u32::from_str_radix(hex, 16).ok()
                    } else {
                        digits.parse::<u32>().ok()
                    }
                })
                .and_then(char::from_u32),
        };
        match decoded {
            Some(c) => {
                out.push(c);
                rest = &rest[end + 1..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
