use serde::Serialize;

/// A single entry in the table of contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocItem {
    pub level: u8,
    pub anchor_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TocItem>,
    /// Set on the empty wrappers emitted for levels above the shallowest heading
    #[serde(skip_serializing_if = "is_false")]
    pub placeholder: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl TocItem {
    pub fn new(level: u8, anchor_id: String, title: String) -> Self {
        Self {
            level,
            anchor_id,
            title,
            children: Vec::new(),
            placeholder: false,
        }
    }

    /// An empty wrapper standing in for a heading level with no heading
    pub fn placeholder(level: u8) -> Self {
        Self {
            placeholder: true,
            ..Self::new(level, String::new(), String::new())
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    /// Number of real headings in this subtree, this item included
    pub fn heading_count(&self) -> usize {
        let own = usize::from(!self.is_placeholder());
        own + self.children.iter().map(TocItem::heading_count).sum::<usize>()
    }
}

/// Table of contents tree built from a document's headings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Toc {
    pub items: Vec<TocItem>,
}

impl Toc {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of real headings across the whole tree.
    ///
    /// Placeholder wrappers are not headings and are not counted, so this always
    /// equals the number of heading events the tree was built from. Without
    /// pruning, the raw item count can be larger by the number of wrappers.
    pub fn heading_count(&self) -> usize {
        self.items.iter().map(TocItem::heading_count).sum()
    }

    /// Shallowest level among the root items
    pub fn min_level(&self) -> Option<u8> {
        self.items.iter().map(|item| item.level).min()
    }
}
