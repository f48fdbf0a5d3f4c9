//! Document tree capabilities consumed by the table of contents machinery

mod document;

pub use document::{Document, NodeId, NodeKind};

use std::fmt::Debug;

/// Inline content carried by a heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Code(String),
}

impl Inline {
    pub fn as_str(&self) -> &str {
        match self {
            Inline::Text(text) | Inline::Code(text) => text,
        }
    }
}

/// A heading encountered while walking a document, in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingEvent {
    pub level: u8,
    pub anchor_id: String,
    pub title: Vec<Inline>,
}

impl HeadingEvent {
    pub fn new(level: u8, anchor_id: impl Into<String>, title: &str) -> Self {
        Self {
            level,
            anchor_id: anchor_id.into(),
            title: vec![Inline::Text(title.to_string())],
        }
    }

    /// Plain text of the heading title
    pub fn title_text(&self) -> String {
        self.title.iter().map(Inline::as_str).collect()
    }
}

/// Anything that can yield the heading events of a parsed document
pub trait HeadingSource {
    fn heading_events(&self) -> Vec<HeadingEvent>;
}

impl HeadingSource for [HeadingEvent] {
    fn heading_events(&self) -> Vec<HeadingEvent> {
        self.to_vec()
    }
}

impl HeadingSource for Vec<HeadingEvent> {
    fn heading_events(&self) -> Vec<HeadingEvent> {
        self.clone()
    }
}

/// Structural primitives a host tree must provide.
///
/// Factory methods create detached nodes; only `insert_before` and
/// `append_child` attach them.
pub trait DocumentTree {
    type Node: Copy + Eq + Debug;

    fn root(&self) -> Self::Node;

    fn first_child(&self, parent: Self::Node) -> Option<Self::Node>;

    /// Insert `node` under `parent` before `before`, or at the end when `before` is `None`
    fn insert_before(&mut self, parent: Self::Node, before: Option<Self::Node>, node: Self::Node);

    fn append_child(&mut self, parent: Self::Node, node: Self::Node);

    fn new_heading(&mut self, level: u8, text: &str) -> Self::Node;

    fn new_list(&mut self) -> Self::Node;

    fn new_list_item(&mut self) -> Self::Node;

    fn new_link(&mut self, url: &str, text: &str) -> Self::Node;

    fn new_container(&mut self, id: &str, classes: &[&str]) -> Self::Node;
}
