// SPDX-License-Identifier: MPL-2.0
//! Owned element tree.
//!
//! Nodes are addressed by [`NodePath`], the child indices leading from the
//! element a query started on down to the node.

use super::Selector;
use std::collections::BTreeMap;
use std::fmt;

/// Elements rendered without a closing tag.
const VOID_ELEMENTS: &[&str] = &["input", "br", "img", "source", "track"];

/// Child-index path from a root element to one of its descendants.
///
/// The empty path addresses the root itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    /// Path addressing the root element.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Path to the `index`-th child of the node this path addresses.
    #[must_use]
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    /// Child indices from the root down.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Prefixes this path with `parent`, making it relative to an outer root.
    #[must_use]
    pub fn under(&self, parent: &NodePath) -> Self {
        Self(parent.0.iter().chain(self.0.iter()).copied().collect())
    }
}

impl From<Vec<usize>> for NodePath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

/// An element with ordered classes, attributes, text and children.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    text: String,
    children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.add_class(&class.into());
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Adds a class unless already present. Returns true if it was added.
    pub fn add_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            return false;
        }
        self.classes.push(class.to_string());
        true
    }

    /// Removes a class. Returns true if it was present.
    pub fn remove_class(&mut self, class: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != class);
        self.classes.len() != before
    }

    /// Adds or removes `class` so that its presence equals `present`.
    pub fn toggle_class(&mut self, class: &str, present: bool) -> bool {
        if present {
            self.add_class(class)
        } else {
            self.remove_class(class)
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        self.attributes.insert(name.to_string(), value.into());
    }

    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        self.attributes.remove(name)
    }

    /// Returns true if the element carries the `disabled` attribute.
    pub fn is_disabled(&self) -> bool {
        self.attributes.contains_key("disabled")
    }

    pub fn text_content(&self) -> &str {
        &self.text
    }

    pub fn set_text_content(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Element at `path`, relative to `self`.
    pub fn get(&self, path: &NodePath) -> Option<&Element> {
        path.indices()
            .iter()
            .try_fold(self, |node, &i| node.children.get(i))
    }

    /// Mutable element at `path`, relative to `self`.
    pub fn get_mut(&mut self, path: &NodePath) -> Option<&mut Element> {
        path.indices()
            .iter()
            .try_fold(self, |node, &i| node.children.get_mut(i))
    }

    /// The element at `path` followed by each of its ancestors, ending with `self`.
    pub fn ancestry(&self, path: &NodePath) -> Option<Vec<&Element>> {
        let mut chain = Vec::with_capacity(path.indices().len() + 1);
        chain.push(self);
        let mut node = self;
        for &i in path.indices() {
            node = node.children.get(i)?;
            chain.push(node);
        }
        chain.reverse();
        Some(chain)
    }

    /// First descendant (not `self`) matching `selector`, in document order.
    pub fn query_selector(&self, selector: &Selector) -> Option<NodePath> {
        let mut found = None;
        self.walk(&NodePath::root(), &mut |path, element| {
            if found.is_none() && !path.indices().is_empty() && selector.matches(element) {
                found = Some(path.clone());
            }
        });
        found
    }

    /// Every descendant (not `self`) matching `selector`, in document order.
    pub fn query_selector_all(&self, selector: &Selector) -> Vec<NodePath> {
        let mut found = Vec::new();
        self.walk(&NodePath::root(), &mut |path, element| {
            if !path.indices().is_empty() && selector.matches(element) {
                found.push(path.clone());
            }
        });
        found
    }

    fn walk(&self, path: &NodePath, visit: &mut impl FnMut(&NodePath, &Element)) {
        visit(path, self);
        for (i, child) in self.children.iter().enumerate() {
            child.walk(&path.child(i), visit);
        }
    }
}

/// Writes `text` with the characters that would break markup replaced by entities.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.0;
        while let Some(at) = rest.find(['&', '<', '>', '"']) {
            f.write_str(&rest[..at])?;
            f.write_str(match rest.as_bytes()[at] {
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                _ => "&quot;",
            })?;
            rest = &rest[at + 1..];
        }
        f.write_str(rest)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        if !self.classes.is_empty() {
            write!(f, " class=\"{}\"", Escaped(&self.classes.join(" ")))?;
        }
        for (name, value) in &self.attributes {
            if value.is_empty() {
                write!(f, " {name}")?;
            } else {
                write!(f, " {name}=\"{}\"", Escaped(value))?;
            }
        }
        write!(f, ">")?;

        if VOID_ELEMENTS.contains(&self.tag.as_str()) {
            return Ok(());
        }

        write!(f, "{}", Escaped(&self.text))?;
        for child in &self.children {
            write!(f, "{child}")?;
        }
        write!(f, "</{}>", self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sel(s: &str) -> Selector {
        Selector::parse(s).unwrap()
    }

    fn sample() -> Element {
        Element::new("div")
            .with_class("video-block")
            .with_child(Element::new("video"))
            .with_child(
                Element::new("div")
                    .with_class("controls")
                    .with_child(Element::new("button").with_class("btn-play"))
                    .with_child(
                        Element::new("button")
                            .with_class("btn-mute")
                            .with_child(Element::new("span").with_class("icon")),
                    ),
            )
    }

    #[test]
    fn classes_are_unique_and_ordered() {
        let mut el = Element::new("div").with_class("a");
        assert!(el.add_class("b"));
        assert!(!el.add_class("a"));
        assert_eq!(el.classes(), ["a", "b"]);
        assert!(el.remove_class("a"));
        assert!(!el.remove_class("a"));
        assert_eq!(el.classes(), ["b"]);
    }

    #[test]
    fn toggle_class_sets_presence() {
        let mut el = Element::new("div");
        el.toggle_class("muted", true);
        assert!(el.has_class("muted"));
        el.toggle_class("muted", false);
        assert!(!el.has_class("muted"));
    }

    #[test]
    fn query_selector_returns_first_in_document_order() {
        let tree = sample();
        assert_eq!(tree.query_selector(&sel("button")), Some(NodePath::from(vec![1, 0])));
        assert_eq!(tree.query_selector(&sel("video")), Some(NodePath::from(vec![0])));
        assert_eq!(tree.query_selector(&sel(".missing")), None);
    }

    #[test]
    fn query_selector_skips_the_root() {
        let tree = sample();
        assert_eq!(tree.query_selector(&sel(".video-block")), None);
    }

    #[test]
    fn query_selector_all_collects_matches() {
        let tree = sample();
        let paths = tree.query_selector_all(&sel("button, span"));
        let expected: Vec<NodePath> =
            vec![vec![1, 0].into(), vec![1, 1].into(), vec![1, 1, 0].into()];
        assert_eq!(paths, expected);
    }

    #[test]
    fn ancestry_runs_from_target_to_root() {
        let tree = sample();
        let chain = tree.ancestry(&vec![1, 1, 0].into()).unwrap();
        let tags: Vec<_> = chain.iter().map(|e| e.tag()).collect();
        assert_eq!(tags, ["span", "button", "div", "div"]);
        assert!(chain[1].has_class("btn-mute"));
    }

    #[test]
    fn ancestry_of_unknown_path_is_none() {
        assert!(sample().ancestry(&vec![5].into()).is_none());
        assert!(sample().get(&vec![0, 0].into()).is_none());
    }

    #[test]
    fn get_mut_edits_in_place() {
        let mut tree = sample();
        let path: NodePath = vec![1, 0].into();
        tree.get_mut(&path).unwrap().set_attribute("disabled", "");
        assert!(tree.get(&path).unwrap().is_disabled());
    }

    #[test]
    fn node_path_under_prefixes_parent() {
        let inner: NodePath = vec![2, 1].into();
        assert_eq!(inner.under(&vec![0].into()), NodePath::from(vec![0, 2, 1]));
        assert_eq!(NodePath::root().child(3), NodePath::from(vec![3]));
    }

    #[test]
    fn display_renders_markup() {
        let el = Element::new("div")
            .with_class("video-block")
            .with_child(
                Element::new("input")
                    .with_attribute("type", "range")
                    .with_attribute("disabled", ""),
            )
            .with_child(Element::new("span").with_text("00:00:00"));
        assert_eq!(
            el.to_string(),
            "<div class=\"video-block\"><input disabled type=\"range\"><span>00:00:00</span></div>"
        );
    }

    #[test]
    fn display_escapes_text_and_attribute_values() {
        let el = Element::new("button")
            .with_attribute("aria-label", "Say \"hi\"")
            .with_text("a < b & c > d");
        assert_eq!(
            el.to_string(),
            "<button aria-label=\"Say &quot;hi&quot;\">a &lt; b &amp; c &gt; d</button>"
        );
    }
}
