use crate::markdown::toc::types::{Toc, TocItem};
use crate::markdown::tree::DocumentTree;

/// Title used when none is configured
pub const DEFAULT_TITLE: &str = "Table of Contents";

/// Identifier of the wrapping container when none is configured
pub const DEFAULT_WRAPPER_ID: &str = "toc-container";

/// Class markers carried by the wrapping container
pub const WRAPPER_CLASSES: [&str; 3] = ["toc", "nav", "elem-nav"];

/// Presentation options for a rendered table of contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposeOptions {
    pub title: String,
    pub wrap: bool,
    pub wrapper_id: String,
}

impl ComposeOptions {
    pub fn title(&self) -> &str {
        if self.title.is_empty() {
            DEFAULT_TITLE
        } else {
            &self.title
        }
    }

    pub fn wrapper_id(&self) -> &str {
        if self.wrapper_id.is_empty() {
            DEFAULT_WRAPPER_ID
        } else {
            &self.wrapper_id
        }
    }
}

/// Detached nodes ready to be spliced into a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposedToc<N> {
    /// Title heading and list, to be placed at the front of the document
    Unwrapped { title: N, list: N },
    /// A container already holding the title and the list
    Wrapped { container: N },
}

impl<N: Copy> ComposedToc<N> {
    /// Nodes to insert, in document order
    pub fn nodes(&self) -> Vec<N> {
        match *self {
            ComposedToc::Unwrapped { title, list } => vec![title, list],
            ComposedToc::Wrapped { container } => vec![container],
        }
    }
}

/// Render `toc` into detached nodes of `tree`.
///
/// Returns `None` for an empty table of contents, in which case no node is
/// created at all.
pub fn compose<T: DocumentTree>(
    tree: &mut T,
    toc: &Toc,
    options: &ComposeOptions,
) -> Option<ComposedToc<T::Node>> {
    if toc.is_empty() {
        return None;
    }

    let title = tree.new_heading(1, options.title());
    let list = render_list(tree, &toc.items);

    if !options.wrap {
        return Some(ComposedToc::Unwrapped { title, list });
    }

    let container = tree.new_container(options.wrapper_id(), &WRAPPER_CLASSES);
    tree.append_child(container, title);
    tree.append_child(container, list);
    Some(ComposedToc::Wrapped { container })
}

/// Render a forest of items as a nested, unordered list
pub fn render_list<T: DocumentTree>(tree: &mut T, items: &[TocItem]) -> T::Node {
    let list = tree.new_list();

    for item in items {
        let entry = tree.new_list_item();

        if !item.is_placeholder() {
            let link = tree.new_link(&format!("#{}", item.anchor_id), &item.title);
            tree.append_child(entry, link);
        }

        if !item.children.is_empty() {
            let sublist = render_list(tree, &item.children);
            tree.append_child(entry, sublist);
        }

        tree.append_child(list, entry);
    }

    list
}
