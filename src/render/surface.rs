use indexmap::IndexMap;

/// Handle to one element inside a [`Surface`].
///
/// Handles are only meaningful for the render that produced them; clearing
/// the surface invalidates every previously issued id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq)]
struct Node {
    tag: String,
    attrs: IndexMap<String, String>,
    styles: IndexMap<String, String>,
    text: Option<String>,
    children: Vec<NodeId>,
}

impl Node {
    fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: IndexMap::new(),
            styles: IndexMap::new(),
            text: None,
            children: Vec::new(),
        }
    }
}

/// Caller-owned mutable SVG element tree: the drawing surface the engine
/// populates and the interaction handle mutates.
///
/// Attribute and style maps keep insertion order, so serialization is
/// deterministic and snapshot-friendly. The arena is only compacted by
/// [`Surface::clear`]; detached subtrees stay allocated until the next
/// render, which is bounded by the lifetime of one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    nodes: Vec<Node>,
    root: NodeId,
    generation: u64,
}

impl Default for Surface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface {
    /// Creates an empty `<svg>` surface.
    #[must_use]
    pub fn new() -> Self {
        let mut root = Node::new("svg");
        root.attrs
            .insert("xmlns".to_owned(), "http://www.w3.org/2000/svg".to_owned());
        Self {
            nodes: vec![root],
            root: NodeId(0),
            generation: 0,
        }
    }

    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Monotonic counter bumped by every [`Surface::clear`]; interaction
    /// handles record it to detect that their node ids went stale.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Drops every element except the root; root attributes and styles are
    /// kept so a re-render starts from the same surface identity.
    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        self.nodes[0].children.clear();
        self.generation += 1;
    }

    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    pub fn create_element(&mut self, tag: impl Into<String>) -> NodeId {
        self.nodes.push(Node::new(tag));
        NodeId(self.nodes.len() - 1)
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if let Some(node) = self.nodes.get_mut(parent.0) {
            node.children.push(child);
        }
    }

    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) {
        if let Some(node) = self.nodes.get_mut(parent.0) {
            node.children.retain(|existing| *existing != child);
        }
    }

    pub fn set_attr(&mut self, id: NodeId, name: impl Into<String>, value: impl Into<String>) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.attrs.insert(name.into(), value.into());
        }
    }

    pub fn remove_attr(&mut self, id: NodeId, name: &str) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.attrs.shift_remove(name);
        }
    }

    #[must_use]
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.nodes
            .get(id.0)
            .and_then(|node| node.attrs.get(name))
            .map(String::as_str)
    }

    pub fn set_style(&mut self, id: NodeId, name: impl Into<String>, value: impl Into<String>) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.styles.insert(name.into(), value.into());
        }
    }

    #[must_use]
    pub fn style(&self, id: NodeId, name: &str) -> Option<&str> {
        self.nodes
            .get(id.0)
            .and_then(|node| node.styles.get(name))
            .map(String::as_str)
    }

    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.text = Some(text.into());
        }
    }

    #[must_use]
    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.nodes
            .get(id.0)
            .and_then(|node| node.text.as_deref())
    }

    #[must_use]
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id.0).map(|node| node.tag.as_str())
    }

    /// The root `width` attribute parsed as pixels, when it is numeric.
    ///
    /// Percentage widths (the responsive browser case) report `None` and the
    /// layout falls back to the configured or default width.
    #[must_use]
    pub fn width_attr(&self) -> Option<f64> {
        self.attr(self.root, "width")
            .and_then(|value| value.parse::<f64>().ok())
    }

    /// Elements whose `class` attribute contains the given class name, in
    /// document order.
    #[must_use]
    pub fn elements_by_class(&self, class: &str) -> Vec<NodeId> {
        let mut found = Vec::new();
        self.collect_by_class(self.root, class, &mut found);
        found
    }

    fn collect_by_class(&self, id: NodeId, class: &str, found: &mut Vec<NodeId>) {
        let Some(node) = self.nodes.get(id.0) else {
            return;
        };
        if let Some(classes) = node.attrs.get("class") {
            if classes.split_whitespace().any(|entry| entry == class) {
                found.push(id);
            }
        }
        for child in &node.children {
            self.collect_by_class(*child, class, found);
        }
    }

    /// Serializes the tree to SVG markup.
    #[must_use]
    pub fn to_svg_string(&self) -> String {
        let mut out = String::new();
        self.write_node(self.root, &mut out);
        out
    }

    fn write_node(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.nodes.get(id.0) else {
            return;
        };

        out.push('<');
        out.push_str(&node.tag);
        for (name, value) in &node.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }
        if !node.styles.is_empty() {
            let style: Vec<String> = node
                .styles
                .iter()
                .map(|(name, value)| format!("{name}:{value}"))
                .collect();
            out.push_str(" style=\"");
            out.push_str(&escape_attr(&style.join(";")));
            out.push('"');
        }

        if node.children.is_empty() && node.text.is_none() {
            out.push_str("/>");
            return;
        }

        out.push('>');
        if let Some(text) = &node.text {
            out.push_str(&escape_text(text));
        }
        for child in &node.children {
            self.write_node(*child, out);
        }
        out.push_str("</");
        out.push_str(&node.tag);
        out.push('>');
    }
}

fn escape_text(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(raw: &str) -> String {
    escape_text(raw).replace('"', "&quot;")
}
