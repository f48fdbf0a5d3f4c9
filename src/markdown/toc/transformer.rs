use log::debug;

use crate::markdown::toc::composer::{compose, ComposeOptions, ComposedToc};
use crate::markdown::toc::inspector::{inspect, InspectOptions};
use crate::markdown::tree::{DocumentTree, HeadingSource};

/// Options for inserting a table of contents into a document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TocOptions {
    /// Title of the table of contents section, "Table of Contents" when empty
    pub title: String,
    /// Wrap the title and list in a container node
    pub wrap: bool,
    /// Identifier of the wrapping container, "toc-container" when empty
    pub wrapper_id: String,
    /// Skip empty list levels above the shallowest heading
    pub prune_empty_top_levels: bool,
}

impl TocOptions {
    pub fn inspect_options(&self) -> InspectOptions {
        InspectOptions {
            prune_empty_top_levels: self.prune_empty_top_levels,
        }
    }

    pub fn compose_options(&self) -> ComposeOptions {
        ComposeOptions {
            title: self.title.clone(),
            wrap: self.wrap,
            wrapper_id: self.wrapper_id.clone(),
        }
    }
}

/// Adds a table of contents to the top of a document.
///
/// Errors raised while inspecting headings are ignored and leave the document
/// untouched. Use [`inspect`] directly when failures must be visible.
#[derive(Debug, Clone, Default)]
pub struct TocTransformer {
    pub options: TocOptions,
}

impl TocTransformer {
    pub fn new(options: TocOptions) -> Self {
        Self { options }
    }

    pub fn transform<T, S>(&self, tree: &mut T, headings: &S)
    where
        T: DocumentTree,
        S: HeadingSource + ?Sized,
    {
        let toc = match inspect(headings.heading_events(), &self.options.inspect_options()) {
            Ok(toc) => toc,
            Err(e) => {
                debug!("Skipping table of contents: {}", e);
                return;
            }
        };

        // Documents without headings get nothing
        let Some(composed) = compose(tree, &toc, &self.options.compose_options()) else {
            return;
        };

        let root = tree.root();
        match composed {
            ComposedToc::Unwrapped { title, list } => {
                let first = tree.first_child(root);
                tree.insert_before(root, first, list);
                tree.insert_before(root, Some(list), title);
            }
            ComposedToc::Wrapped { container } => {
                let first = tree.first_child(root);
                tree.insert_before(root, first, container);
            }
        }

        debug!("Inserted table of contents with {} headings", toc.heading_count());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::toc::composer::{DEFAULT_TITLE, DEFAULT_WRAPPER_ID};
    use crate::markdown::tree::{Document, HeadingEvent, NodeId, NodeKind};

    fn document_with_headings(headings: &[(u8, &str, &str)]) -> Document {
        let mut doc = Document::new();
        let root = doc.root();
        for (level, id, text) in headings {
            let heading = doc.push(
                root,
                NodeKind::Heading {
                    level: *level,
                    id: Some(id.to_string()),
                },
            );
            doc.push(heading, NodeKind::Text(text.to_string()));
            let paragraph = doc.push(root, NodeKind::Paragraph);
            doc.push(paragraph, NodeKind::Text(format!("About {}", text)));
        }
        doc
    }

    fn transform(doc: &mut Document, options: TocOptions) {
        let source = doc.clone();
        TocTransformer::new(options).transform(doc, &source);
    }

    #[test]
    fn test_unwrapped_insertion_order() {
        let mut doc = document_with_headings(&[(1, "a", "A"), (2, "a-1", "A.1"), (1, "b", "B")]);
        let root = doc.root();
        let previous_first = doc.first_child(root).unwrap();

        transform(&mut doc, TocOptions::default());

        let children = doc.children(root);
        assert_eq!(doc.kind(children[0]), &NodeKind::Heading { level: 1, id: None });
        assert_eq!(doc.text_content(children[0]), DEFAULT_TITLE);
        assert!(matches!(doc.kind(children[1]), NodeKind::List { .. }));
        assert_eq!(children[2], previous_first);
        assert_eq!(doc.children(children[1]).len(), 2);
    }

    #[test]
    fn test_wrapped_insertion() {
        let mut doc = document_with_headings(&[(2, "setup", "Setup")]);
        let root = doc.root();
        let before = doc.children(root).len();

        transform(
            &mut doc,
            TocOptions {
                wrap: true,
                wrapper_id: "md-toc".to_string(),
                ..TocOptions::default()
            },
        );

        let children = doc.children(root);
        assert_eq!(children.len(), before + 1);
        let container = children[0];
        match doc.kind(container) {
            NodeKind::Container { id, classes } => {
                assert_eq!(id, "md-toc");
                assert_eq!(classes, &["toc", "nav", "elem-nav"]);
            }
            other => panic!("expected container, got {:?}", other),
        }
        let inner = doc.children(container);
        assert_eq!(inner.len(), 2);
        assert!(matches!(doc.kind(inner[0]), NodeKind::Heading { .. }));
        assert!(matches!(doc.kind(inner[1]), NodeKind::List { .. }));
    }

    #[test]
    fn test_wrapped_default_identifier() {
        let mut doc = document_with_headings(&[(1, "a", "A")]);
        transform(
            &mut doc,
            TocOptions {
                wrap: true,
                ..TocOptions::default()
            },
        );

        let first = doc.first_child(doc.root()).unwrap();
        assert!(matches!(
            doc.kind(first),
            NodeKind::Container { id, .. } if id == DEFAULT_WRAPPER_ID
        ));
    }

    #[test]
    fn test_no_headings_leaves_document_unchanged() {
        let mut doc = Document::new();
        let root = doc.root();
        let paragraph = doc.push(root, NodeKind::Paragraph);
        doc.push(paragraph, NodeKind::Text("Just prose.".to_string()));
        let original = doc.clone();

        transform(&mut doc, TocOptions::default());
        transform(
            &mut doc,
            TocOptions {
                wrap: true,
                ..TocOptions::default()
            },
        );

        assert_eq!(doc, original);
    }

    #[test]
    fn test_inspection_error_leaves_document_unchanged() {
        let mut doc = document_with_headings(&[(1, "a", "A")]);
        let original = doc.clone();
        let broken = vec![HeadingEvent::new(1, "a", "A"), HeadingEvent::new(0, "bad", "Bad")];

        TocTransformer::default().transform(&mut doc, &broken);

        assert_eq!(doc, original);
    }

    #[test]
    fn test_custom_title_and_pruning() {
        let mut doc = document_with_headings(&[(3, "x", "X")]);
        transform(
            &mut doc,
            TocOptions {
                title: "On this page".to_string(),
                prune_empty_top_levels: true,
                ..TocOptions::default()
            },
        );

        let children: Vec<NodeId> = doc.children(doc.root()).to_vec();
        assert_eq!(doc.text_content(children[0]), "On this page");
        let entry = doc.children(children[1])[0];
        assert_eq!(doc.children(entry).len(), 1);
        assert_eq!(doc.text_content(entry), "X");
    }

    #[test]
    fn test_unpruned_emits_wrapper_levels() {
        let mut doc = document_with_headings(&[(3, "x", "X")]);
        transform(&mut doc, TocOptions::default());

        let list = doc.children(doc.root())[1];
        let level_one = doc.children(list)[0];
        let level_two_list = doc.children(level_one)[0];
        let level_two = doc.children(level_two_list)[0];
        let level_three_list = doc.children(level_two)[0];
        let entry = doc.children(level_three_list)[0];
        assert_eq!(doc.text_content(entry), "X");
    }
}
