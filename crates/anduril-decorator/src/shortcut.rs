//! Keyboard shortcut that focuses the site search box.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlElement, KeyboardEvent};

use crate::{config::DecoratorConfig, dom, error::Result};

/// Register the `keyup` listener that focuses the search input.
///
/// Each call adds another listener, so call it once per page load.
pub fn register_shortcut(document: &Document, config: &DecoratorConfig) -> Result<()> {
    let key = config.shortcut_key.clone();
    let search_input_id = config.search_input_id.clone();
    let doc = document.clone();

    dom::listen(document, "keyup", move |ev: KeyboardEvent| {
        let in_text_entry = ev.target().as_ref().is_some_and(is_text_entry_target);
        if !should_focus(&ev.key(), &key, in_text_entry) {
            return;
        }
        focus_search(&doc, &search_input_id);
    })?;

    log::debug!("registered search shortcut {:?}", config.shortcut_key);
    Ok(())
}

/// Focus the element with id `search_input_id`, if it exists.
pub fn focus_search(document: &Document, search_input_id: &str) {
    let Some(input) = document
        .get_element_by_id(search_input_id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        log::debug!("no #{search_input_id} on this page");
        return;
    };

    if let Err(err) = input.focus() {
        log::debug!("focusing #{search_input_id} failed: {err:?}");
    }
}

/// Whether a key-up of `key` should move focus to the search input.
pub fn should_focus(key: &str, shortcut: &str, in_text_entry: bool) -> bool {
    key == shortcut && !in_text_entry
}

/// Whether an element with this tag name accepts typed text.
///
/// `tag_name` is compared case-insensitively since HTML documents report
/// upper-case names.
pub fn is_text_entry(tag_name: &str, content_editable: bool) -> bool {
    content_editable
        || ["input", "textarea", "select"]
            .iter()
            .any(|tag| tag_name.eq_ignore_ascii_case(tag))
}

fn is_text_entry_target(target: &EventTarget) -> bool {
    let Some(element) = target.dyn_ref::<Element>() else {
        return false;
    };
    let content_editable = element
        .dyn_ref::<HtmlElement>()
        .is_some_and(HtmlElement::is_content_editable);
    is_text_entry(&element.tag_name(), content_editable)
}
