// SPDX-License-Identifier: MPL-2.0
//! A small subset of CSS selectors.
//!
//! Supported: a selector list (`a, b`) of compound selectors made of an
//! optional tag name, any number of `.class` parts and `[name]` or
//! `[name="value"]` attribute parts. Combinators are not supported.

use super::Element;
use crate::error::MarkupError;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
struct AttributeMatch {
    name: String,
    value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Compound {
    tag: Option<String>,
    classes: Vec<String>,
    attributes: Vec<AttributeMatch>,
}

impl Compound {
    fn is_empty(&self) -> bool {
        self.tag.is_none() && self.classes.is_empty() && self.attributes.is_empty()
    }

    fn matches(&self, element: &Element) -> bool {
        if let Some(tag) = &self.tag {
            if !element.tag().eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        self.classes.iter().all(|class| element.has_class(class))
            && self.attributes.iter().all(|attr| {
                match (element.attribute(&attr.name), &attr.value) {
                    (Some(actual), Some(expected)) => actual == expected,
                    (Some(_), None) => true,
                    (None, _) => false,
                }
            })
    }
}

/// Parsed selector list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    source: String,
    alternatives: Vec<Compound>,
}

impl Selector {
    /// Parses a selector list.
    pub fn parse(source: &str) -> Result<Self, MarkupError> {
        let invalid = || MarkupError::InvalidSelector(source.to_string());
        let alternatives = source
            .split(',')
            .map(|part| parse_compound(part.trim()).ok_or_else(invalid))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            source: source.to_string(),
            alternatives,
        })
    }

    /// Returns true if the element matches any selector in the list.
    #[must_use]
    pub fn matches(&self, element: &Element) -> bool {
        self.alternatives.iter().any(|c| c.matches(element))
    }

    /// The text this selector was parsed from.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl FromStr for Selector {
    type Err = MarkupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn take_ident(rest: &str) -> (&str, &str) {
    let end = rest
        .char_indices()
        .find(|&(_, c)| !is_ident_char(c))
        .map_or(rest.len(), |(i, _)| i);
    rest.split_at(end)
}

fn parse_compound(part: &str) -> Option<Compound> {
    let mut compound = Compound::default();

    let (tag, mut rest) = take_ident(part);
    if !tag.is_empty() {
        compound.tag = Some(tag.to_ascii_lowercase());
    }

    while let Some(c) = rest.chars().next() {
        match c {
            '.' => {
                let (class, tail) = take_ident(&rest[1..]);
                if class.is_empty() {
                    return None;
                }
                compound.classes.push(class.to_string());
                rest = tail;
            }
            '[' => {
                let close = rest.find(']')?;
                compound.attributes.push(parse_attribute(&rest[1..close])?);
                rest = &rest[close + 1..];
            }
            _ => return None,
        }
    }

    (!compound.is_empty()).then_some(compound)
}

fn parse_attribute(body: &str) -> Option<AttributeMatch> {
    let (name, rest) = take_ident(body.trim());
    if name.is_empty() {
        return None;
    }

    let rest = rest.trim();
    if rest.is_empty() {
        return Some(AttributeMatch {
            name: name.to_string(),
            value: None,
        });
    }

    let value = rest.strip_prefix('=')?.trim();
    let unquoted = ['"', '\'']
        .iter()
        .find_map(|q| value.strip_prefix(*q).and_then(|v| v.strip_suffix(*q)))
        .unwrap_or(value);

    if unquoted.is_empty() && value.is_empty() {
        return None;
    }

    Some(AttributeMatch {
        name: name.to_string(),
        value: Some(unquoted.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range_input() -> Element {
        Element::new("input")
            .with_attribute("type", "range")
            .with_class("seek")
    }

    #[test]
    fn tag_selector_matches_case_insensitively() {
        let selector = Selector::parse("VIDEO").unwrap();
        assert!(selector.matches(&Element::new("video")));
        assert!(!selector.matches(&Element::new("audio")));
    }

    #[test]
    fn class_selector_requires_every_class() {
        let button = Element::new("button").with_class("btn").with_class("btn-play");
        assert!(Selector::parse(".btn-play").unwrap().matches(&button));
        assert!(Selector::parse("button.btn.btn-play").unwrap().matches(&button));
        assert!(!Selector::parse(".btn.btn-pause").unwrap().matches(&button));
    }

    #[test]
    fn attribute_selector_with_quoted_value() {
        let selector = Selector::parse("input[type=\"range\"]").unwrap();
        assert!(selector.matches(&range_input()));
        assert!(!selector.matches(&Element::new("input").with_attribute("type", "text")));
    }

    #[test]
    fn attribute_presence_selector() {
        let selector = Selector::parse("button[disabled]").unwrap();
        assert!(selector.matches(&Element::new("button").with_attribute("disabled", "")));
        assert!(!selector.matches(&Element::new("button")));
    }

    #[test]
    fn selector_list_matches_any_alternative() {
        let selector = Selector::parse("button, input").unwrap();
        assert!(selector.matches(&Element::new("button")));
        assert!(selector.matches(&range_input()));
        assert!(!selector.matches(&Element::new("span")));
    }

    #[test]
    fn rejects_unsupported_syntax() {
        for source in ["", ".", "div span", "a,,b", "[=x]", "input[type=\"range\"", "#id"] {
            assert_eq!(
                Selector::parse(source),
                Err(MarkupError::InvalidSelector(source.to_string())),
                "{source:?} should be rejected"
            );
        }
    }

    #[test]
    fn from_str_keeps_source_text() {
        let selector: Selector = ".video-block".parse().unwrap();
        assert_eq!(selector.as_str(), ".video-block");
    }
}
