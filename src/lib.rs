//! Table of contents synthesis for Markdown documents.
//!
//! Headings are collected from a parsed document, arranged into a nested
//! [`Toc`](markdown::toc::Toc) by the inspector, rendered into list nodes by
//! the composer and spliced in front of the existing content.

pub mod cli;
pub mod config;
pub mod markdown;
pub mod utils;

pub use markdown::toc::{
    compose, inspect, ComposeOptions, ComposedToc, InspectOptions, InspectionError, Toc, TocItem,
    TocOptions, TocTransformer,
};
pub use markdown::tree::{Document, DocumentTree, HeadingEvent, HeadingSource};
pub use markdown::{MarkdownPipeline, TocExtension};
