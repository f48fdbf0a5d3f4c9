pub mod engine;
pub mod pipeline;
pub mod renderer;
pub mod toc;
pub mod tree;

pub use engine::{create_comrak_options, parse_markdown};
pub use pipeline::{DocumentTransformer, Extension, MarkdownPipeline, TocExtension};
pub use renderer::render_html;
pub use toc::{inspect, Toc, TocItem, TocOptions, TocTransformer};
