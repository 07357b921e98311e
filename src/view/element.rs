//! Virtual element tree and its HTML serialization.
//!
//! Components return `Element` values instead of touching a DOM. A click
//! handler is a message value (`on_click`), so a tree can be compared,
//! inspected in tests, and serialized with the message encoded into a
//! `data-action` attribute for the browser binding to route.

use super::classes::ClassList;

/// Attribute carrying an element's click message in serialized HTML.
pub const ACTION_ATTR: &str = "data-action";

/// A node of the tree: an element or a run of text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node<M> {
    Element(Element<M>),
    Text(String),
}

impl<M> From<Element<M>> for Node<M> {
    fn from(element: Element<M>) -> Self {
        Node::Element(element)
    }
}

/// One element with its styling hooks, attributes, click message and
/// children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element<M> {
    pub tag: &'static str,
    pub classes: ClassList,
    /// Pass-through attributes, serialized in insertion order.
    pub attrs: Vec<(String, String)>,
    pub disabled: bool,
    pub on_click: Option<M>,
    pub children: Vec<Node<M>>,
}

impl<M> Element<M> {
    /// Create an empty element.
    #[must_use]
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: ClassList::default(),
            attrs: Vec::new(),
            disabled: false,
            on_click: None,
            children: Vec::new(),
        }
    }

    /// A `div` with the given classes.
    #[must_use]
    pub fn div(classes: ClassList) -> Self {
        Self::new("div").with_classes(classes)
    }

    #[must_use]
    pub fn with_classes(mut self, classes: ClassList) -> Self {
        self.classes = classes;
        self
    }

    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn with_attrs<I>(mut self, attrs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.attrs.extend(attrs);
        self
    }

    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn on_click(mut self, msg: M) -> Self {
        self.on_click = Some(msg);
        self
    }

    #[must_use]
    pub fn with_on_click(mut self, msg: Option<M>) -> Self {
        self.on_click = msg;
        self
    }

    #[must_use]
    pub fn child(mut self, child: impl Into<Node<M>>) -> Self {
        self.children.push(child.into());
        self
    }

    #[must_use]
    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = Node<M>>,
    {
        self.children.extend(children);
        self
    }

    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    /// Look up a pass-through attribute.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Direct child elements, skipping text.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element<M>> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// All elements in the subtree (this one included) carrying `class`,
    /// in document order.
    #[must_use]
    pub fn find_all(&self, class: &str) -> Vec<&Element<M>> {
        let mut found = Vec::new();
        self.collect(class, &mut found);
        found
    }

    fn collect<'a>(&'a self, class: &str, found: &mut Vec<&'a Element<M>>) {
        if self.classes.contains(class) {
            found.push(self);
        }
        for child in self.child_elements() {
            child.collect(class, found);
        }
    }

    /// First element in the subtree carrying `class`.
    #[must_use]
    pub fn find(&self, class: &str) -> Option<&Element<M>> {
        self.find_all(class).into_iter().next()
    }

    /// Concatenated text of the subtree.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for node in &self.children {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Element(element) => out.push_str(&element.text_content()),
            }
        }
        out
    }
}

impl<M: std::fmt::Display> Element<M> {
    /// Serialize the subtree to HTML.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        if !self.classes.is_empty() {
            push_attr(out, "class", &self.classes.to_string());
        }
        for (name, value) in &self.attrs {
            push_attr(out, name, value);
        }
        if let Some(msg) = &self.on_click {
            push_attr(out, ACTION_ATTR, &msg.to_string());
        }
        if self.disabled {
            out.push_str(" disabled");
        }
        out.push('>');
        for node in &self.children {
            match node {
                Node::Text(text) => escape_into(out, text),
                Node::Element(element) => element.write_html(out),
            }
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    escape_into(out, value);
    out.push('"');
}

fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
