//! Clipboard writes.
//!
//! [`SystemClipboard`] prefers the asynchronous `navigator.clipboard`
//! capability and falls back to [`ScratchClipboard`], which copies through an
//! off-screen `textarea` and the `copy` command while preserving the user's
//! selection.

use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Document, HtmlDocument, HtmlTextAreaElement, Range, Window};

use crate::{
    dom,
    error::{DecorateError, DomResultExt, Result, js_message},
};

/// Something that can place text on the system clipboard.
pub trait Clipboard {
    /// Copy `text` to the clipboard.
    ///
    /// Implementations may complete asynchronously; an `Ok` only means the
    /// write was started.
    fn write_text(&self, text: &str) -> Result<()>;
}

/// The user's text selection at one point in time.
#[derive(Debug, Clone, Default)]
pub struct SelectionSnapshot {
    range: Option<Range>,
}

impl SelectionSnapshot {
    /// Capture the first range of the current selection, if there is one.
    pub fn capture(document: &Document) -> Result<Self> {
        let range = match document.get_selection().dom_op("get_selection")? {
            Some(selection) if selection.range_count() > 0 => Some(
                selection
                    .get_range_at(0)
                    .dom_op("get_range_at")?
                    .clone_range(),
            ),
            _ => None,
        };
        Ok(Self { range })
    }

    /// Whether a range was captured.
    pub fn is_empty(&self) -> bool {
        self.range.is_none()
    }

    /// Replace the current selection with the captured range.
    ///
    /// Does nothing when no range was captured.
    pub fn restore(&self, document: &Document) -> Result<()> {
        let Some(range) = &self.range else {
            return Ok(());
        };
        let Some(selection) = document.get_selection().dom_op("get_selection")? else {
            return Ok(());
        };
        selection.remove_all_ranges().dom_op("remove_all_ranges")?;
        selection.add_range(range).dom_op("add_range")
    }
}

/// Copies through a temporary off-screen `textarea` and the `copy` command.
#[derive(Debug, Clone)]
pub struct ScratchClipboard {
    document: Document,
}

impl ScratchClipboard {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn scratch_area(&self, text: &str) -> Result<HtmlTextAreaElement> {
        let area: HtmlTextAreaElement = self
            .document
            .create_element("textarea")
            .dom_op("create_element")?
            .dyn_into()
            .map_err(|_| DecorateError::clipboard("textarea is not an HTMLTextAreaElement"))?;

        area.set_value(text);
        area.set_attribute("readonly", "").dom_op("set_attribute")?;
        let style = area.style();
        style
            .set_property("position", "absolute")
            .dom_op("set_property")?;
        style.set_property("left", "-9999px").dom_op("set_property")?;
        Ok(area)
    }

    fn exec_copy(&self) -> Result<()> {
        let html = self
            .document
            .dyn_ref::<HtmlDocument>()
            .ok_or_else(|| DecorateError::clipboard("document is not an HTML document"))?;
        if html.exec_command("copy").dom_op("exec_command")? {
            Ok(())
        } else {
            Err(DecorateError::clipboard("copy command was rejected"))
        }
    }
}

impl Clipboard for ScratchClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let body = dom::body(&self.document)?;
        let area = self.scratch_area(text)?;
        body.append_child(&area).dom_op("append_child")?;

        let snapshot = SelectionSnapshot::capture(&self.document).unwrap_or_else(|err| {
            log::debug!("could not capture selection: {err}");
            SelectionSnapshot::default()
        });

        area.select();
        let copied = self.exec_copy();
        area.remove();

        let restored = snapshot.restore(&self.document);
        copied.and(restored)
    }
}

/// Copies with `navigator.clipboard.writeText`.
///
/// The capability is looked up at call time since it only exists in secure
/// contexts.
#[derive(Debug, Clone)]
pub struct NavigatorClipboard {
    window: Window,
}

impl NavigatorClipboard {
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    /// Whether `navigator.clipboard.writeText` exists on this page.
    pub fn is_available(&self) -> bool {
        self.write_text_fn().is_ok()
    }

    fn write_text_fn(&self) -> Result<(JsValue, Function)> {
        let navigator = self.window.navigator();
        let clipboard =
            Reflect::get(&navigator, &JsValue::from_str("clipboard")).dom_op("navigator.clipboard")?;
        if clipboard.is_undefined() || clipboard.is_null() {
            return Err(DecorateError::clipboard("navigator.clipboard is unavailable"));
        }

        let write_text = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
            .dom_op("clipboard.writeText")?
            .dyn_into::<Function>()
            .map_err(|_| DecorateError::clipboard("clipboard.writeText is not a function"))?;
        Ok((clipboard, write_text))
    }

    /// Start a write and return its promise.
    pub fn write_text_promise(&self, text: &str) -> Result<Promise> {
        let (clipboard, write_text) = self.write_text_fn()?;
        let result = write_text
            .call1(&clipboard, &JsValue::from_str(text))
            .dom_op("clipboard.writeText")?;
        Ok(Promise::resolve(&result))
    }
}

impl Clipboard for NavigatorClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let promise = self.write_text_promise(text)?;
        spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                log::debug!("clipboard.writeText rejected: {}", js_message(&err));
            }
        });
        Ok(())
    }
}

/// The default clipboard: `navigator.clipboard` when usable, the scratch
/// `textarea` otherwise or when the asynchronous write is rejected.
///
/// A missing capability falls back synchronously, inside the click handler.
/// A rejected write falls back only once the promise settles, after the
/// handler has returned; browsers that restrict the `copy` command to user
/// activation may refuse that late fallback, in which case nothing is copied.
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    navigator: NavigatorClipboard,
    fallback: ScratchClipboard,
}

impl SystemClipboard {
    pub fn new(window: Window, document: Document) -> Self {
        Self {
            navigator: NavigatorClipboard::new(window),
            fallback: ScratchClipboard::new(document),
        }
    }

    /// Build from the global `window` and its document.
    pub fn from_globals() -> Result<Self> {
        Ok(Self::new(dom::window()?, dom::document()?))
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let promise = match self.navigator.write_text_promise(text) {
            Ok(promise) => promise,
            Err(err) => {
                log::debug!("{err}; using copy command");
                return self.fallback.write_text(text);
            }
        };

        let fallback = self.fallback.clone();
        let text = text.to_owned();
        spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                log::debug!(
                    "clipboard.writeText rejected ({}); using copy command",
                    js_message(&err)
                );
                if let Err(err) = fallback.write_text(&text) {
                    log::debug!("copy command failed: {err}");
                }
            }
        });
        Ok(())
    }
}
