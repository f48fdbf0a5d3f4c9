//! Markdown processing pipeline with pluggable document transformers

use log::{debug, info};

use crate::markdown::engine::{create_comrak_options, parse_markdown};
use crate::markdown::renderer::render_html;
use crate::markdown::toc::{TocOptions, TocTransformer};
use crate::markdown::tree::{Document, HeadingSource};

/// Priority the table of contents transformer is installed with
pub const TOC_PRIORITY: i32 = 100;

/// A pass that rewrites a parsed document before it is rendered
pub trait DocumentTransformer {
    fn name(&self) -> &str;

    fn apply(&self, document: &mut Document);
}

/// Installs transformers into a pipeline
pub trait Extension {
    fn extend(&self, pipeline: &mut MarkdownPipeline<'_>);
}

struct Registered {
    priority: i32,
    transformer: Box<dyn DocumentTransformer>,
}

/// Parses Markdown, runs registered transformers and renders HTML
pub struct MarkdownPipeline<'a> {
    options: comrak::Options<'a>,
    transformers: Vec<Registered>,
}

impl<'a> Default for MarkdownPipeline<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> MarkdownPipeline<'a> {
    /// Create a pipeline with GitHub Flavored Markdown options and no transformers
    pub fn new() -> Self {
        Self::with_options(create_comrak_options())
    }

    pub fn with_options(options: comrak::Options<'a>) -> Self {
        Self {
            options,
            transformers: Vec::new(),
        }
    }

    /// Register a transformer; higher priorities run first, ties in registration order
    pub fn add_transformer(&mut self, priority: i32, transformer: Box<dyn DocumentTransformer>) {
        debug!(
            "Registering transformer '{}' with priority {}",
            transformer.name(),
            priority
        );
        let position = self
            .transformers
            .iter()
            .position(|registered| registered.priority < priority)
            .unwrap_or(self.transformers.len());
        self.transformers.insert(
            position,
            Registered {
                priority,
                transformer,
            },
        );
    }

    pub fn extend<E: Extension + ?Sized>(&mut self, extension: &E) -> &mut Self {
        extension.extend(self);
        self
    }

    /// Names of the registered transformers in execution order
    pub fn transformer_names(&self) -> Vec<&str> {
        self.transformers
            .iter()
            .map(|registered| registered.transformer.name())
            .collect()
    }

    /// Parse `content` and apply every transformer
    pub fn parse(&self, content: &str) -> Document {
        let mut document = parse_markdown(content, &self.options);
        for registered in &self.transformers {
            registered.transformer.apply(&mut document);
        }
        document
    }

    /// Render Markdown content to HTML
    pub fn render(&self, content: &str) -> String {
        let document = self.parse(content);
        info!("Rendered document with {} transformers", self.transformers.len());
        render_html(&document)
    }
}

impl DocumentTransformer for TocTransformer {
    fn name(&self) -> &str {
        "toc"
    }

    fn apply(&self, document: &mut Document) {
        let headings = document.heading_events();
        self.transform(document, &headings);
    }
}

/// Extension that always adds a table of contents to rendered documents
#[derive(Debug, Clone, Default)]
pub struct TocExtension {
    pub options: TocOptions,
}

impl TocExtension {
    pub fn new(options: TocOptions) -> Self {
        Self { options }
    }
}

impl Extension for TocExtension {
    fn extend(&self, pipeline: &mut MarkdownPipeline<'_>) {
        pipeline.add_transformer(
            TOC_PRIORITY,
            Box::new(TocTransformer::new(self.options.clone())),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Marker(&'static str);

    impl DocumentTransformer for Marker {
        fn name(&self) -> &str {
            self.0
        }

        fn apply(&self, _document: &mut Document) {}
    }

    #[test]
    fn test_transformers_run_by_descending_priority() {
        let mut pipeline = MarkdownPipeline::new();
        pipeline.add_transformer(10, Box::new(Marker("low")));
        pipeline.add_transformer(200, Box::new(Marker("high")));
        pipeline.add_transformer(10, Box::new(Marker("low-second")));
        pipeline.extend(&TocExtension::default());

        assert_eq!(
            pipeline.transformer_names(),
            vec!["high", "toc", "low", "low-second"]
        );
    }

    #[test]
    fn test_render_with_toc() {
        let mut pipeline = MarkdownPipeline::new();
        pipeline.extend(&TocExtension::default());

        let html = pipeline.render(concat!(
            "# Main Title\n\n",
            "## Section 1\n\nContent\n\n",
            "## Section 2\n\nMore content\n"
        ));

        assert!(html.starts_with("<h1>Table of Contents</h1>\n<ul>\n"));
        assert!(html.contains("<a href=\"#main-title\">Main Title</a>"));
        assert!(html.contains("<li><a href=\"#section-1\">Section 1</a></li>"));
        assert!(html.contains("<h2 id=\"section-2\">Section 2</h2>"));
        assert!(html.find("<h1 id=\"main-title\">") > html.find("</ul>"));
    }

    #[test]
    fn test_render_wrapped_toc() {
        let mut pipeline = MarkdownPipeline::new();
        pipeline.extend(&TocExtension::new(TocOptions {
            title: "Contents".to_string(),
            wrap: true,
            wrapper_id: "md-toc".to_string(),
            prune_empty_top_levels: true,
        }));

        let html = pipeline.render("## Only\n\nBody\n");

        assert!(html.starts_with(concat!(
            "<div id=\"md-toc\" class=\"toc nav elem-nav\">\n",
            "<h1>Contents</h1>\n",
            "<ul>\n<li><a href=\"#only\">Only</a></li>\n</ul>\n",
            "</div>\n"
        )));
    }

    #[test]
    fn test_render_without_headings_is_untouched() {
        let mut pipeline = MarkdownPipeline::new();
        pipeline.extend(&TocExtension::default());
        let plain = MarkdownPipeline::new();

        let content = "Just a paragraph.\n\n> and a quote\n";
        assert_eq!(pipeline.parse(content), plain.parse(content));
        assert_eq!(pipeline.render(content), plain.render(content));
    }
}
