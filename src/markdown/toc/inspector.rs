use std::error::Error;
use std::fmt;

use log::debug;

use crate::markdown::toc::types::{Toc, TocItem};
use crate::markdown::tree::HeadingEvent;

/// Options controlling how headings are turned into a [`Toc`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InspectOptions {
    /// Treat the shallowest heading present as the top level instead of
    /// wrapping it in empty items for the levels above it
    pub prune_empty_top_levels: bool,
}

/// Raised when the heading source breaks its contract
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InspectionError {
    /// Heading levels start at 1
    InvalidLevel { level: u8, anchor_id: String },
}

impl fmt::Display for InspectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InspectionError::InvalidLevel { level, anchor_id } => write!(
                f,
                "Invalid heading level {} for heading '{}'",
                level, anchor_id
            ),
        }
    }
}

impl Error for InspectionError {}

/// Build a table of contents from headings in document order.
///
/// Each heading nests under the nearest preceding heading with a strictly
/// smaller level, so skipped levels never produce intermediate entries. When
/// pruning is off and the shallowest heading is deeper than level 1, the tree
/// is wrapped in placeholder items for the missing top levels.
pub fn inspect<I>(events: I, options: &InspectOptions) -> Result<Toc, InspectionError>
where
    I: IntoIterator<Item = HeadingEvent>,
{
    let mut roots: Vec<TocItem> = Vec::new();
    let mut open: Vec<TocItem> = Vec::new();
    let mut min_level: Option<u8> = None;

    for event in events {
        if event.level == 0 {
            return Err(InspectionError::InvalidLevel {
                level: event.level,
                anchor_id: event.anchor_id,
            });
        }

        while open.last().is_some_and(|item| item.level >= event.level) {
            close_item(&mut open, &mut roots);
        }

        min_level = Some(min_level.map_or(event.level, |min| min.min(event.level)));
        let title = event.title_text();
        open.push(TocItem::new(event.level, event.anchor_id, title));
    }

    while !open.is_empty() {
        close_item(&mut open, &mut roots);
    }

    if let Some(min_level) = min_level {
        if !options.prune_empty_top_levels {
            roots = wrap_missing_levels(roots, min_level);
        }
    }

    let toc = Toc { items: roots };
    debug!(
        "Inspected {} headings into {} top-level entries",
        toc.heading_count(),
        toc.items.len()
    );
    Ok(toc)
}

/// Pop the innermost open item and attach it to its parent, or to the roots
fn close_item(open: &mut Vec<TocItem>, roots: &mut Vec<TocItem>) {
    if let Some(item) = open.pop() {
        match open.last_mut() {
            Some(parent) => parent.children.push(item),
            None => roots.push(item),
        }
    }
}

fn wrap_missing_levels(mut items: Vec<TocItem>, min_level: u8) -> Vec<TocItem> {
    for level in (1..min_level).rev() {
        let mut wrapper = TocItem::placeholder(level);
        wrapper.children = items;
        items = vec![wrapper];
    }
    items
}
