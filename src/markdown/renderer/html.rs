use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::markdown::tree::{Document, DocumentTree, NodeId, NodeKind};

/// Render a document tree to HTML
pub fn render_html(document: &Document) -> String {
    let mut html = String::new();
    for child in document.children(document.root()) {
        render_node(document, *child, &mut html);
    }
    html
}

fn render_children(document: &Document, node: NodeId, html: &mut String) {
    for child in document.children(node) {
        render_node(document, *child, html);
    }
}

fn render_node(document: &Document, node: NodeId, html: &mut String) {
    match document.kind(node) {
        NodeKind::Document => render_children(document, node, html),
        NodeKind::Heading { level, id } => {
            match id {
                Some(id) => html.push_str(&format!(
                    "<h{} id=\"{}\">",
                    level,
                    encode_double_quoted_attribute(id)
                )),
                None => html.push_str(&format!("<h{}>", level)),
            }
            render_children(document, node, html);
            html.push_str(&format!("</h{}>\n", level));
        }
        NodeKind::Paragraph => {
            if in_tight_list(document, node) {
                render_children(document, node, html);
            } else {
                html.push_str("<p>");
                render_children(document, node, html);
                html.push_str("</p>\n");
            }
        }
        NodeKind::Text(text) => html.push_str(&encode_text(text)),
        NodeKind::Code(code) => {
            html.push_str("<code>");
            html.push_str(&encode_text(code));
            html.push_str("</code>");
        }
        NodeKind::CodeBlock { info, literal } => {
            let lang = info.split_whitespace().next().unwrap_or("");
            if lang.is_empty() {
                html.push_str("<pre><code>");
            } else {
                html.push_str(&format!(
                    "<pre lang=\"{}\"><code>",
                    encode_double_quoted_attribute(lang)
                ));
            }
            html.push_str(&encode_text(literal));
            html.push_str("</code></pre>\n");
        }
        NodeKind::Emph => wrap_inline(document, node, "em", html),
        NodeKind::Strong => wrap_inline(document, node, "strong", html),
        NodeKind::Strikethrough => wrap_inline(document, node, "del", html),
        NodeKind::Superscript => wrap_inline(document, node, "sup", html),
        NodeKind::Link { url, title } => {
            html.push_str(&format!("<a href=\"{}\"", encode_double_quoted_attribute(url)));
            if !title.is_empty() {
                html.push_str(&format!(" title=\"{}\"", encode_double_quoted_attribute(title)));
            }
            html.push('>');
            render_children(document, node, html);
            html.push_str("</a>");
        }
        NodeKind::Image { url, title } => {
            html.push_str(&format!(
                "<img src=\"{}\" alt=\"{}\"",
                encode_double_quoted_attribute(url),
                encode_double_quoted_attribute(&document.text_content(node))
            ));
            if !title.is_empty() {
                html.push_str(&format!(" title=\"{}\"", encode_double_quoted_attribute(title)));
            }
            html.push_str(" />");
        }
        NodeKind::List { ordered, start, .. } => {
            if !*ordered {
                html.push_str("<ul>\n");
            } else if *start == 1 {
                html.push_str("<ol>\n");
            } else {
                html.push_str(&format!("<ol start=\"{}\">\n", start));
            }
            render_children(document, node, html);
            html.push_str(if *ordered { "</ol>\n" } else { "</ul>\n" });
        }
        NodeKind::Item => {
            html.push_str("<li>");
            render_children(document, node, html);
            html.push_str("</li>\n");
        }
        NodeKind::TaskItem { checked } => {
            html.push_str("<li><input type=\"checkbox\"");
            if *checked {
                html.push_str(" checked=\"\"");
            }
            html.push_str(" disabled=\"\" /> ");
            render_children(document, node, html);
            html.push_str("</li>\n");
        }
        NodeKind::BlockQuote => {
            html.push_str("<blockquote>\n");
            render_children(document, node, html);
            html.push_str("</blockquote>\n");
        }
        NodeKind::ThematicBreak => html.push_str("<hr />\n"),
        NodeKind::SoftBreak => html.push('\n'),
        NodeKind::LineBreak => html.push_str("<br />\n"),
        NodeKind::HtmlBlock(raw) | NodeKind::HtmlInline(raw) | NodeKind::Raw(raw) => {
            html.push_str(raw)
        }
        NodeKind::Container { id, classes } => {
            html.push_str(&format!("<div id=\"{}\"", encode_double_quoted_attribute(id)));
            if !classes.is_empty() {
                html.push_str(&format!(
                    " class=\"{}\"",
                    encode_double_quoted_attribute(&classes.join(" "))
                ));
            }
            html.push_str(">\n");
            render_children(document, node, html);
            html.push_str("</div>\n");
        }
    }
}

fn wrap_inline(document: &Document, node: NodeId, tag: &str, html: &mut String) {
    html.push_str(&format!("<{}>", tag));
    render_children(document, node, html);
    html.push_str(&format!("</{}>", tag));
}

/// Paragraphs directly inside items of a tight list are rendered without `<p>`
fn in_tight_list(document: &Document, paragraph: NodeId) -> bool {
    let Some(item) = document.parent(paragraph) else {
        return false;
    };
    if !matches!(document.kind(item), NodeKind::Item | NodeKind::TaskItem { .. }) {
        return false;
    }
    document
        .parent(item)
        .map(|list| matches!(document.kind(list), NodeKind::List { tight: true, .. }))
        .unwrap_or(false)
}
