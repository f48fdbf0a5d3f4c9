mod composer;
mod inspector;
mod transformer;
mod types;

pub use composer::{
    compose, render_list, ComposeOptions, ComposedToc, DEFAULT_TITLE, DEFAULT_WRAPPER_ID,
    WRAPPER_CLASSES,
};
pub use inspector::{inspect, InspectOptions, InspectionError};
pub use transformer::{TocOptions, TocTransformer};
pub use types::{Toc, TocItem};
