use log::warn;

use super::{DocumentTree, HeadingEvent, HeadingSource, Inline};

/// Handle to a node stored in a [`Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// The kinds of node a document can hold
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Heading { level: u8, id: Option<String> },
    Paragraph,
    Text(String),
    Code(String),
    CodeBlock { info: String, literal: String },
    Emph,
    Strong,
    Strikethrough,
    Superscript,
    Link { url: String, title: String },
    Image { url: String, title: String },
    List { ordered: bool, start: usize, tight: bool },
    Item,
    TaskItem { checked: bool },
    BlockQuote,
    ThematicBreak,
    SoftBreak,
    LineBreak,
    HtmlBlock(String),
    HtmlInline(String),
    /// Generic block wrapper with an id and class list (rendered as a `div`)
    Container { id: String, classes: Vec<String> },
    /// Pre-rendered HTML for constructs the tree does not model
    Raw(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// An arena-backed document tree.
///
/// Node 0 is always the `Document` root. Nodes created through the factory
/// methods stay detached until they are inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    nodes: Vec<NodeData>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeData {
                kind: NodeKind::Document,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// Create a detached node
    pub fn create(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            kind,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Create a node and append it to `parent`
    pub fn push(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = self.create(kind);
        self.append_child(parent, id);
        id
    }

    pub fn kind(&self, node: NodeId) -> &NodeKind {
        &self.nodes[node.0].kind
    }

    pub fn kind_mut(&mut self, node: NodeId) -> &mut NodeKind {
        &mut self.nodes[node.0].kind
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    /// Concatenated text of every text-bearing descendant of `node`
    pub fn text_content(&self, node: NodeId) -> String {
        self.inline_content(node).iter().map(Inline::as_str).collect()
    }

    /// Flatten the inline descendants of `node` into text and code runs
    pub fn inline_content(&self, node: NodeId) -> Vec<Inline> {
        let mut inlines = Vec::new();
        let mut stack: Vec<NodeId> = self.children(node).iter().rev().copied().collect();

        while let Some(current) = stack.pop() {
            match self.kind(current) {
                NodeKind::Text(text) => inlines.push(Inline::Text(text.clone())),
                NodeKind::Code(code) => inlines.push(Inline::Code(code.clone())),
                NodeKind::SoftBreak | NodeKind::LineBreak => {
                    inlines.push(Inline::Text(" ".to_string()))
                }
                _ => stack.extend(self.children(current).iter().rev().copied()),
            }
        }

        inlines
    }

    /// All nodes reachable from the root, in document order
    pub fn descendants(&self) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack = vec![self.root()];

        while let Some(current) = stack.pop() {
            order.push(current);
            stack.extend(self.children(current).iter().rev().copied());
        }

        order
    }

    fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.nodes[node.0].parent.take() {
            self.nodes[parent.0].children.retain(|child| *child != node);
        }
    }
}

impl DocumentTree for Document {
    type Node = NodeId;

    fn root(&self) -> NodeId {
        NodeId(0)
    }

    fn first_child(&self, parent: NodeId) -> Option<NodeId> {
        self.children(parent).first().copied()
    }

    fn insert_before(&mut self, parent: NodeId, before: Option<NodeId>, node: NodeId) {
        self.detach(node);

        let siblings = &mut self.nodes[parent.0].children;
        let position = match before {
            Some(before) => match siblings.iter().position(|child| *child == before) {
                Some(position) => position,
                None => {
                    warn!(
                        "Insertion point {:?} is not a child of {:?}, appending",
                        before, parent
                    );
                    siblings.len()
                }
            },
            None => siblings.len(),
        };

        siblings.insert(position, node);
        self.nodes[node.0].parent = Some(parent);
    }

    fn append_child(&mut self, parent: NodeId, node: NodeId) {
        self.insert_before(parent, None, node);
    }

    fn new_heading(&mut self, level: u8, text: &str) -> NodeId {
        let heading = self.create(NodeKind::Heading { level, id: None });
        self.push(heading, NodeKind::Text(text.to_string()));
        heading
    }

    fn new_list(&mut self) -> NodeId {
        self.create(NodeKind::List {
            ordered: false,
            start: 1,
            tight: true,
        })
    }

    fn new_list_item(&mut self) -> NodeId {
        self.create(NodeKind::Item)
    }

    fn new_link(&mut self, url: &str, text: &str) -> NodeId {
        let link = self.create(NodeKind::Link {
            url: url.to_string(),
            title: String::new(),
        });
        self.push(link, NodeKind::Text(text.to_string()));
        link
    }

    fn new_container(&mut self, id: &str, classes: &[&str]) -> NodeId {
        self.create(NodeKind::Container {
            id: id.to_string(),
            classes: classes.iter().map(|class| class.to_string()).collect(),
        })
    }
}

impl HeadingSource for Document {
    fn heading_events(&self) -> Vec<HeadingEvent> {
        self.descendants()
            .into_iter()
            .filter_map(|node| match self.kind(node) {
                NodeKind::Heading { level, id } => Some(HeadingEvent {
                    level: *level,
                    anchor_id: id.clone().unwrap_or_default(),
                    title: self.inline_content(node),
                }),
                _ => None,
            })
            .collect()
    }
}
