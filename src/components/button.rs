//! Reusable buttons: the styled `NiceButton` and its circle and link
//! siblings.
//!
//! Buttons are stateless. Each is a small builder that renders to an
//! `Element`; the click message and any pass-through attributes land on
//! the interactive element unchanged.

use serde::{Deserialize, Serialize};

use crate::core::TrackerError;
use crate::view::{ClassList, Element, Node};

/// Visual style of a `NiceButton`.
///
/// Primary and secondary are exclusive by construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ButtonStyle {
    #[default]
    Plain,
    Primary,
    Secondary,
}

/// Main button: `div.nice-button-container > button.nice-button`.
///
/// ```
/// use crew_tracker::components::NiceButton;
/// use crew_tracker::core::Msg;
///
/// let button = NiceButton::<Msg>::new().primary().disabled(true).label("Go").render();
/// assert_eq!(
///     button.to_html(),
///     r#"<div class="nice-button-container"><button class="nice-button primary-button" disabled>Go</button></div>"#
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NiceButton<M> {
    class_name: Option<String>,
    style: ButtonStyle,
    is_disabled: bool,
    is_loading: bool,
    attrs: Vec<(String, String)>,
    on_click: Option<M>,
    children: Vec<Node<M>>,
}

impl<M> Default for NiceButton<M> {
    fn default() -> Self {
        Self {
            class_name: None,
            style: ButtonStyle::Plain,
            is_disabled: false,
            is_loading: false,
            attrs: Vec::new(),
            on_click: None,
            children: Vec::new(),
        }
    }
}

impl<M> NiceButton<M> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Extra styling hook.
    #[must_use]
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    #[must_use]
    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn primary(self) -> Self {
        self.style(ButtonStyle::Primary)
    }

    #[must_use]
    pub fn secondary(self) -> Self {
        self.style(ButtonStyle::Secondary)
    }

    #[must_use]
    pub fn disabled(mut self, is_disabled: bool) -> Self {
        self.is_disabled = is_disabled;
        self
    }

    /// Show the loading overlay. A loading button is also not clickable.
    #[must_use]
    pub fn loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }

    /// Pass-through attribute for the `button` element.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn on_click(mut self, msg: M) -> Self {
        self.on_click = Some(msg);
        self
    }

    #[must_use]
    pub fn child(mut self, child: impl Into<Node<M>>) -> Self {
        self.children.push(child.into());
        self
    }

    #[must_use]
    pub fn label(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    #[must_use]
    pub fn render(self) -> Element<M> {
        let classes = ClassList::new("nice-button")
            .with_opt(self.class_name)
            .with_if("primary-button", self.style == ButtonStyle::Primary)
            .with_if("secondary-button", self.style == ButtonStyle::Secondary);

        let mut button = Element::new("button")
            .with_classes(classes)
            .with_attrs(self.attrs)
            .with_disabled(self.is_disabled || self.is_loading)
            .with_on_click(self.on_click)
            .children(self.children);
        if self.is_loading {
            button = button.child(Element::div(ClassList::new("button-loading")));
        }

        Element::div(ClassList::new("nice-button-container")).child(button)
    }
}

/// Color of a `CircleButton`. Gray is the unstyled default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CircleColor {
    Red,
    Blue,
    Green,
    Yellow,
    Orange,
    Dark,
    #[default]
    Gray,
}

impl CircleColor {
    pub const fn all() -> [CircleColor; 7] {
        [
            CircleColor::Red,
            CircleColor::Blue,
            CircleColor::Green,
            CircleColor::Yellow,
            CircleColor::Orange,
            CircleColor::Dark,
            CircleColor::Gray,
        ]
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CircleColor::Red => "red",
            CircleColor::Blue => "blue",
            CircleColor::Green => "green",
            CircleColor::Yellow => "yellow",
            CircleColor::Orange => "orange",
            CircleColor::Dark => "dark",
            CircleColor::Gray => "gray",
        }
    }

    /// Styling hook for the color; gray has none.
    #[must_use]
    pub const fn class_name(self) -> Option<&'static str> {
        match self {
            CircleColor::Red => Some("red-circle"),
            CircleColor::Blue => Some("blue-circle"),
            CircleColor::Green => Some("green-circle"),
            CircleColor::Yellow => Some("yellow-circle"),
            CircleColor::Orange => Some("orange-circle"),
            CircleColor::Dark => Some("dark-circle"),
            CircleColor::Gray => None,
        }
    }
}

impl std::fmt::Display for CircleColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for CircleColor {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CircleColor::all()
            .into_iter()
            .find(|color| color.name() == s)
            .ok_or_else(|| TrackerError::UnknownColor(s.to_string()))
    }
}

/// Round button: `div.circle-button`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CircleButton<M> {
    class_name: Option<String>,
    color: CircleColor,
    is_small: bool,
    attrs: Vec<(String, String)>,
    on_click: Option<M>,
    children: Vec<Node<M>>,
}

impl<M> Default for CircleButton<M> {
    fn default() -> Self {
        Self {
            class_name: None,
            color: CircleColor::Gray,
            is_small: false,
            attrs: Vec::new(),
            on_click: None,
            children: Vec::new(),
        }
    }
}

impl<M> CircleButton<M> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    #[must_use]
    pub fn color(mut self, color: CircleColor) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn small(mut self, is_small: bool) -> Self {
        self.is_small = is_small;
        self
    }

    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn on_click(mut self, msg: M) -> Self {
        self.on_click = Some(msg);
        self
    }

    #[must_use]
    pub fn child(mut self, child: impl Into<Node<M>>) -> Self {
        self.children.push(child.into());
        self
    }

    #[must_use]
    pub fn label(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    #[must_use]
    pub fn render(self) -> Element<M> {
        let classes = ClassList::new("circle-button")
            .with_opt(self.class_name)
            .with_opt(self.color.class_name())
            .with_if("small-circle-button", self.is_small);

        Element::div(classes)
            .with_attrs(self.attrs)
            .with_on_click(self.on_click)
            .children(self.children)
    }
}

/// Text-style button: `div.link-button`.
///
/// An extra class set with `class_name` is applied to the element
/// (`div.link-button.<class>`), as on the other button kinds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkButton<M> {
    class_name: Option<String>,
    attrs: Vec<(String, String)>,
    on_click: Option<M>,
    children: Vec<Node<M>>,
}

impl<M> Default for LinkButton<M> {
    fn default() -> Self {
        Self {
            class_name: None,
            attrs: Vec::new(),
            on_click: None,
            children: Vec::new(),
        }
    }
}

impl<M> LinkButton<M> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn on_click(mut self, msg: M) -> Self {
        self.on_click = Some(msg);
        self
    }

    #[must_use]
    pub fn child(mut self, child: impl Into<Node<M>>) -> Self {
        self.children.push(child.into());
        self
    }

    #[must_use]
    pub fn label(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    #[must_use]
    pub fn render(self) -> Element<M> {
        Element::div(ClassList::new("link-button").with_opt(self.class_name))
            .with_attrs(self.attrs)
            .with_on_click(self.on_click)
            .children(self.children)
    }
}
