use crate::config::defaults;
use crate::markdown::toc::TocOptions;

/// Table of contents configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocConfig {
    /// Title of the generated section
    pub title: String,

    /// Wrap the title and list in a container element
    pub wrap: bool,

    /// Identifier of the wrapping container
    pub wrapper_id: String,

    /// Drop empty list levels above the shallowest heading
    pub prune_empty_top_levels: bool,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            title: defaults::default_title(),
            wrap: false,
            wrapper_id: defaults::default_wrapper_id(),
            prune_empty_top_levels: false,
        }
    }
}

impl TocConfig {
    pub fn to_options(&self) -> TocOptions {
        TocOptions {
            title: self.title.clone(),
            wrap: self.wrap,
            wrapper_id: self.wrapper_id.clone(),
            prune_empty_top_levels: self.prune_empty_top_levels,
        }
    }
}
