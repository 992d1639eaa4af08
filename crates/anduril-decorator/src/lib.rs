//! Anduril Page Decorator
//!
//! Post-processes the server-rendered HTML of an Anduril blog page in the
//! browser, once the document has been parsed.
//!
//! # Passes
//!
//! - [`apply_styles`] - Presentation classes for tables and blockquotes
//! - [`register_shortcut`] - `/` focuses the search box
//! - [`append_copy_buttons`] - "Copy" button on every code block
//! - [`wire_scroll_button`] - Scroll-to-top button
//!
//! The passes are independent of each other. [`decorate`] runs all of them.
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { postProcessHtml } from 'anduril-decorator';
//!
//! await init();
//! const report = postProcessHtml({ pre_class: 'd-flex' });
//! console.log(report.code_blocks);
//! ```

pub mod clipboard;
pub mod config;
pub mod copy;
pub mod dom;
pub mod error;
pub mod scroll;
pub mod shortcut;
pub mod style;

use std::{cell::Cell, rc::Rc};

pub use clipboard::{
    Clipboard, NavigatorClipboard, ScratchClipboard, SelectionSnapshot, SystemClipboard,
};
pub use config::{DecoratorConfig, ScrollConfig};
pub use copy::{append_copy_buttons, code_text};
pub use error::{DecorateError, Result};
pub use scroll::wire_scroll_button;
use serde::{Deserialize, Serialize};
pub use shortcut::register_shortcut;
pub use style::{StyleCounts, apply_styles};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

/// What one decoration run touched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decoration {
    /// Tables given the table class.
    pub tables: usize,

    /// Blockquotes given the blockquote class.
    pub blockquotes: usize,

    /// Code blocks that received a copy button.
    pub code_blocks: usize,

    /// Whether a scroll-to-top button was found and wired.
    pub scroll_button: bool,
}

/// Run every pass over `document`.
///
/// Call once per page load: the shortcut and copy-button passes are not
/// idempotent.
pub fn decorate(
    window: &Window,
    document: &Document,
    config: &DecoratorConfig,
    clipboard: Rc<dyn Clipboard>,
) -> Result<Decoration> {
    config.validate()?;

    let StyleCounts {
        tables,
        blockquotes,
    } = apply_styles(document, config)?;
    register_shortcut(document, config)?;
    let code_blocks = append_copy_buttons(document, config, clipboard)?;
    let scroll_button = wire_scroll_button(document, window, &config.scroll)?;

    let decoration = Decoration {
        tables,
        blockquotes,
        code_blocks,
        scroll_button,
    };
    log::info!(
        "decorated page: {} tables, {} blockquotes, {} code blocks",
        decoration.tables,
        decoration.blockquotes,
        decoration.code_blocks
    );
    Ok(decoration)
}

thread_local! {
    static PAGE_DECORATED: Cell<bool> = const { Cell::new(false) };
}

/// Decorate the global document with the system clipboard.
///
/// Only the first successful call decorates; later calls return
/// [`DecorateError::AlreadyDecorated`] without touching the page.
pub fn decorate_page(config: &DecoratorConfig) -> Result<Decoration> {
    if PAGE_DECORATED.with(Cell::get) {
        return Err(DecorateError::AlreadyDecorated);
    }

    let window = dom::window()?;
    let document = dom::document()?;
    let clipboard = Rc::new(SystemClipboard::from_globals()?);
    let decoration = decorate(&window, &document, config, clipboard)?;
    PAGE_DECORATED.with(|done| done.set(true));
    Ok(decoration)
}

/// Decorate the current page.
///
/// `config` is an optional object overriding [`DecoratorConfig`] fields.
/// Returns the [`Decoration`] report.
///
/// Pages that load the `frontend` module are already decorated on load and
/// must not call this; a second call on the same page is rejected.
#[wasm_bindgen(js_name = postProcessHtml)]
pub fn post_process_html(config: JsValue) -> std::result::Result<JsValue, JsValue> {
    let config = DecoratorConfig::from_js(config)?;
    let decoration = decorate_page(&config)?;
    serde_wasm_bindgen::to_value(&decoration)
        .map_err(|e| DecorateError::Dom {
            operation: "serialize report",
            message: e.to_string(),
        })
        .map_err(JsValue::from)
}

/// Get the version of the decorator library.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
