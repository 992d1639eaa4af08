//! DOM access helpers shared by the decoration passes.

use wasm_bindgen::{JsCast, convert::FromWasmAbi, prelude::*};
use web_sys::{Document, Element, EventTarget, HtmlElement, NodeList, Window};

use crate::error::{DecorateError, DomResultExt, Result};

/// The global `window`.
pub fn window() -> Result<Window> {
    web_sys::window().ok_or(DecorateError::MissingGlobal("window"))
}

/// The document of the global `window`.
pub fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or(DecorateError::MissingGlobal("document"))
}

/// The `body` element of `document`.
pub fn body(document: &Document) -> Result<HtmlElement> {
    document.body().ok_or(DecorateError::MissingGlobal("body"))
}

/// All elements under `document` matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    let nodes = document
        .query_selector_all(selector)
        .dom_op("query_selector_all")?;
    Ok(elements(&nodes))
}

/// All descendants of `root` matching `selector`, in document order.
pub fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>> {
    let nodes = root
        .query_selector_all(selector)
        .dom_op("query_selector_all")?;
    Ok(elements(&nodes))
}

fn elements(nodes: &NodeList) -> Vec<Element> {
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Visible text of an element: `innerText` for HTML elements, `textContent`
/// otherwise.
pub fn visible_text(element: &Element) -> String {
    match element.dyn_ref::<HtmlElement>() {
        Some(html) => html.inner_text(),
        None => element.text_content().unwrap_or_default(),
    }
}

/// Wrap `handler` into a JS function that stays alive for the rest of the
/// page's lifetime.
///
/// The closure is leaked; listeners built from it are never removed.
pub fn callback<E, F>(handler: F) -> js_sys::Function
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    Closure::<dyn FnMut(E)>::new(handler)
        .into_js_value()
        .unchecked_into()
}

/// Register `handler` for `event` on `target` for the rest of the page's
/// lifetime.
pub fn listen<E, F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    target
        .add_event_listener_with_callback(event, &callback(handler))
        .dom_op("add_event_listener")
}
