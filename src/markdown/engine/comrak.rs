use std::collections::{HashMap, HashSet};

use comrak::nodes::{AstNode, ListType, NodeValue};
use comrak::{parse_document, Arena, Options};
use log::warn;

use crate::markdown::tree::{Document, DocumentTree, NodeId, NodeKind};

/// Create default ComrakOptions with GitHub Flavored Markdown settings
pub fn create_comrak_options<'a>() -> Options<'a> {
    let mut options = Options::default();

    // Extension options - GitHub Flavored Markdown
    options.extension.strikethrough = true;
    options.extension.tagfilter = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.superscript = true;
    options.extension.footnotes = true;
    options.extension.description_lists = true;

    // Render options
    options.render.hardbreaks = false;
    options.render.github_pre_lang = true;
    options.render.unsafe_ = true;

    // Parse options
    options.parse.smart = true;

    options
}

/// Parse Markdown source into a [`Document`], assigning anchor ids to headings
pub fn parse_markdown(content: &str, options: &Options) -> Document {
    let arena = Arena::new();
    let root = parse_document(&arena, content, options);

    let mut document = Document::new();
    let mut anchors = Anchors::default();
    let target = document.root();

    for child in root.children() {
        convert(child, &mut document, target, options, &mut anchors);
    }

    document
}

fn convert<'a>(
    node: &'a AstNode<'a>,
    document: &mut Document,
    parent: NodeId,
    options: &Options,
    anchors: &mut Anchors,
) {
    let kind = match &node.data.borrow().value {
        NodeValue::Heading(heading) => NodeKind::Heading {
            level: heading.level,
            id: None,
        },
        NodeValue::Paragraph => NodeKind::Paragraph,
        NodeValue::Text(text) => NodeKind::Text(text.to_string()),
        NodeValue::Code(code) => NodeKind::Code(code.literal.to_string()),
        NodeValue::CodeBlock(block) => NodeKind::CodeBlock {
            info: block.info.to_string(),
            literal: block.literal.to_string(),
        },
        NodeValue::Emph => NodeKind::Emph,
        NodeValue::Strong => NodeKind::Strong,
        NodeValue::Strikethrough => NodeKind::Strikethrough,
        NodeValue::Superscript => NodeKind::Superscript,
        NodeValue::Link(link) => NodeKind::Link {
            url: link.url.to_string(),
            title: link.title.to_string(),
        },
        NodeValue::Image(link) => NodeKind::Image {
            url: link.url.to_string(),
            title: link.title.to_string(),
        },
        NodeValue::List(list) => NodeKind::List {
            ordered: list.list_type == ListType::Ordered,
            start: list.start,
            tight: list.tight,
        },
        NodeValue::Item(_) => NodeKind::Item,
        NodeValue::TaskItem(symbol) => NodeKind::TaskItem {
            checked: symbol.is_some(),
        },
        NodeValue::BlockQuote => NodeKind::BlockQuote,
        NodeValue::ThematicBreak => NodeKind::ThematicBreak,
        NodeValue::SoftBreak => NodeKind::SoftBreak,
        NodeValue::LineBreak => NodeKind::LineBreak,
        NodeValue::HtmlBlock(block) => NodeKind::HtmlBlock(block.literal.to_string()),
        NodeValue::HtmlInline(html) => NodeKind::HtmlInline(html.to_string()),
        _ => NodeKind::Raw(render_fallback(node, options)),
    };

    let is_raw = matches!(kind, NodeKind::Raw(_));
    let converted = document.create(kind);
    document.append_child(parent, converted);

    // Raw nodes already carry their rendered children
    if is_raw {
        return;
    }

    for child in node.children() {
        convert(child, document, converted, options, anchors);
    }

    if let NodeKind::Heading { level, .. } = *document.kind(converted) {
        let id = anchors.anchorize(&document.text_content(converted));
        *document.kind_mut(converted) = NodeKind::Heading {
            level,
            id: Some(id),
        };
    }
}

/// Render a construct the document tree does not model directly
fn render_fallback<'a>(node: &'a AstNode<'a>, options: &Options) -> String {
    let mut html = Vec::new();
    if let Err(e) = comrak::format_html(node, options, &mut html) {
        warn!("Failed to render markdown fragment: {}", e);
        return String::new();
    }
    String::from_utf8_lossy(&html).into_owned()
}

/// Slug-based heading anchors, unique within a document.
///
/// A repeated slug gets the first free `-N` suffix, so a generated suffix never
/// collides with a heading whose own slug already ends in one.
#[derive(Debug, Default)]
struct Anchors {
    issued: HashSet<String>,
    next_suffix: HashMap<String, usize>,
}

impl Anchors {
    fn anchorize(&mut self, text: &str) -> String {
        let mut base = slug::slugify(text);
        if base.is_empty() {
            base = "section".to_string();
        }

        let mut anchor = base.clone();
        if self.issued.contains(&anchor) {
            let suffix = self.next_suffix.entry(base.clone()).or_insert(1);
            loop {
                anchor = format!("{}-{}", base, suffix);
                *suffix += 1;
                if !self.issued.contains(&anchor) {
                    break;
                }
            }
        }

        self.issued.insert(anchor.clone());
        anchor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::tree::HeadingSource;

    #[test]
    fn test_headings_receive_anchors() {
        let options = create_comrak_options();
        let document = parse_markdown(
            "# Hello, World!\n\nText\n\n## Getting *Started*\n",
            &options,
        );

        let events = document.heading_events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].level, 1);
        assert_eq!(events[0].anchor_id, "hello-world");
        assert_eq!(events[1].anchor_id, "getting-started");
        assert_eq!(events[1].title_text(), "Getting Started");
    }

    #[test]
    fn test_duplicate_headings_get_unique_anchors() {
        let options = create_comrak_options();
        let document = parse_markdown("## Notes\n\n## Notes\n\n## Notes\n", &options);

        let anchors: Vec<String> = document
            .heading_events()
            .into_iter()
            .map(|event| event.anchor_id)
            .collect();
        assert_eq!(anchors, vec!["notes", "notes-1", "notes-2"]);
    }

    #[test]
    fn test_generated_suffix_does_not_collide() {
        let options = create_comrak_options();
        let document = parse_markdown("## Notes\n\n## Notes\n\n## Notes 1\n\n## Notes\n", &options);

        let anchors: Vec<String> = document
            .heading_events()
            .into_iter()
            .map(|event| event.anchor_id)
            .collect();
        assert_eq!(anchors, vec!["notes", "notes-1", "notes-1-1", "notes-2"]);
    }

    #[test]
    fn test_strikethrough_and_superscript_keep_their_text() {
        let options = create_comrak_options();
        let document = parse_markdown("## ~~Old~~ Setup\n\n## H^2^O\n", &options);

        let titles: Vec<(String, String)> = document
            .heading_events()
            .into_iter()
            .map(|event| (event.title_text(), event.anchor_id))
            .collect();
        assert_eq!(
            titles,
            vec![
                ("Old Setup".to_string(), "old-setup".to_string()),
                ("H2O".to_string(), "h2o".to_string()),
            ]
        );
    }

    #[test]
    fn test_headings_inside_task_items_are_found() {
        let options = create_comrak_options();
        let document = parse_markdown("- [x] Done\n\n  ## Details\n\n- [ ] Open\n", &options);

        let events = document.heading_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].anchor_id, "details");

        let list = document.first_child(document.root()).unwrap();
        let items = document.children(list);
        assert_eq!(document.kind(items[0]), &NodeKind::TaskItem { checked: true });
        assert_eq!(document.kind(items[1]), &NodeKind::TaskItem { checked: false });
    }

    #[test]
    fn test_block_structure_is_preserved() {
        let options = create_comrak_options();
        let document = parse_markdown("Intro paragraph.\n\n- one\n- two\n", &options);

        let root = document.root();
        let children = document.children(root);
        assert_eq!(children.len(), 2);
        assert_eq!(document.kind(children[0]), &NodeKind::Paragraph);
        assert!(matches!(
            document.kind(children[1]),
            NodeKind::List {
                ordered: false,
                tight: true,
                ..
            }
        ));
        assert_eq!(document.children(children[1]).len(), 2);
    }

    #[test]
    fn test_tables_fall_back_to_html() {
        let options = create_comrak_options();
        let document = parse_markdown("| a | b |\n|---|---|\n| 1 | 2 |\n", &options);

        let first = document.first_child(document.root()).unwrap();
        match document.kind(first) {
            NodeKind::Raw(html) => assert!(html.contains("<table>")),
            other => panic!("expected raw html, got {:?}", other),
        }
    }
}
