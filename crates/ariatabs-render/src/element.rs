//! Element tree
//!
//! A minimal DOM: enough to carry roles, ARIA references and roving
//! tabindex, and to locate elements by id the way focus and click
//! dispatch need to.

use std::fmt::{self, Write};

use crate::html::{escape_attr, escape_text};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    /// `None` for boolean attributes such as `hidden`
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Text, escaped on output
    Text(String),
    /// Trusted markup, written as-is
    Raw(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: Vec<Attribute>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing any previous value
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, Some(value.into()));
        self
    }

    /// Set a boolean attribute
    pub fn flag(mut self, name: &str) -> Self {
        self.set(name, None);
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children_from<I>(mut self, nodes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    fn set(&mut self, name: &str, value: Option<String>) {
        match self.attributes.iter_mut().find(|a| a.name == name) {
            Some(existing) => existing.value = value,
            None => self.attributes.push(Attribute {
                name: name.to_string(),
                value,
            }),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Attribute value; boolean attributes read as `""`
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_deref().unwrap_or(""))
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.iter().any(|a| a.name == name)
    }

    pub fn id(&self) -> Option<&str> {
        self.get_attr("id")
    }

    pub fn role(&self) -> Option<&str> {
        self.get_attr("role")
    }

    /// Concatenated text of this element and its descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Element(el) => el.collect_text(out),
                Node::Text(text) => out.push_str(text),
                Node::Raw(_) => {}
            }
        }
    }

    /// This element and every descendant element, depth-first
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        self.collect_elements(&mut out);
        out
    }

    fn collect_elements<'a>(&'a self, out: &mut Vec<&'a Element>) {
        out.push(self);
        for child in &self.children {
            if let Node::Element(el) = child {
                el.collect_elements(out);
            }
        }
    }

    /// First element (self included) with the given id
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.descendants().into_iter().find(|el| el.id() == Some(id))
    }

    pub fn find_all_by_role(&self, role: &str) -> Vec<&Element> {
        self.descendants()
            .into_iter()
            .filter(|el| el.role() == Some(role))
            .collect()
    }

    /// Serialise to HTML
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail
        let _ = self.write_html(&mut out);
        out
    }

    fn write_html<W: Write>(&self, out: &mut W) -> fmt::Result {
        write!(out, "<{}", self.tag)?;
        for attr in &self.attributes {
            match &attr.value {
                Some(value) => write!(out, " {}=\"{}\"", attr.name, escape_attr(value))?,
                None => write!(out, " {}", attr.name)?,
            }
        }
        out.write_char('>')?;
        for child in &self.children {
            match child {
                Node::Element(el) => el.write_html(out)?,
                Node::Text(text) => out.write_str(&escape_text(text))?,
                Node::Raw(raw) => out.write_str(raw)?,
            }
        }
        write!(out, "</{}>", self.tag)
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_html(f)
    }
}
