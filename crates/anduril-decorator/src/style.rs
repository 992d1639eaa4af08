//! Presentation classes for tables and blockquotes.

use web_sys::Document;

use crate::{
    config::DecoratorConfig,
    dom,
    error::{DomResultExt, Result},
};

/// Number of elements touched by one style pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StyleCounts {
    pub tables: usize,
    pub blockquotes: usize,
}

/// Overwrite the `class` of every `table` and `blockquote` in `document`.
///
/// Running it again assigns the same classes, so the pass is idempotent.
pub fn apply_styles(document: &Document, config: &DecoratorConfig) -> Result<StyleCounts> {
    let tables = set_class_all(document, "table", &config.table_class)?;
    let blockquotes = set_class_all(document, "blockquote", &config.blockquote_class)?;

    log::debug!("styled {tables} tables and {blockquotes} blockquotes");
    Ok(StyleCounts {
        tables,
        blockquotes,
    })
}

fn set_class_all(document: &Document, selector: &str, class: &str) -> Result<usize> {
    let elements = dom::query_all(document, selector)?;
    for element in &elements {
        element.set_attribute("class", class).dom_op("set_attribute")?;
    }
    Ok(elements.len())
}
