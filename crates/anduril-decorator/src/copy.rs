//! "Copy" buttons for preformatted code blocks.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, Node};

use crate::{
    clipboard::Clipboard,
    config::DecoratorConfig,
    dom,
    error::{DomResultExt, Result},
};

/// Style every `pre` block in `document` and append a copy button to each.
///
/// Returns the number of blocks decorated. Every call appends another button
/// per block, so call it once per page load.
pub fn append_copy_buttons(
    document: &Document,
    config: &DecoratorConfig,
    clipboard: Rc<dyn Clipboard>,
) -> Result<usize> {
    let blocks = dom::query_all(document, "pre")?;
    if blocks.is_empty() {
        return Ok(0);
    }

    // One listener shared by every button.
    let on_click = dom::callback(move |ev: Event| handle_copy_click(&ev, clipboard.as_ref()));

    for block in &blocks {
        block
            .set_attribute("class", &config.pre_class)
            .dom_op("set_attribute")?;

        if let Some(code_class) = &config.code_class {
            for code in dom::query_all_in(block, "code")? {
                code.set_attribute("class", code_class)
                    .dom_op("set_attribute")?;
            }
        }

        let button = copy_button(document, config)?;
        button
            .add_event_listener_with_callback("click", &on_click)
            .dom_op("add_event_listener")?;
        block.append_child(&button).dom_op("append_child")?;
    }

    log::debug!("added copy buttons to {} code blocks", blocks.len());
    Ok(blocks.len())
}

fn copy_button(document: &Document, config: &DecoratorConfig) -> Result<Element> {
    let button = document
        .create_element("button")
        .dom_op("create_element")?;
    button.set_attribute("type", "button").dom_op("set_attribute")?;
    button
        .set_attribute("class", &config.button_class)
        .dom_op("set_attribute")?;
    button.set_text_content(Some(config.button_label.as_str()));
    Ok(button)
}

fn handle_copy_click(ev: &Event, clipboard: &dyn Clipboard) {
    let Some(button) = ev
        .current_target()
        .and_then(|target| target.dyn_into::<Element>().ok())
    else {
        return;
    };

    let Some(text) = code_text(&button) else {
        log::debug!("copy button has no parent block");
        return;
    };

    if let Err(err) = clipboard.write_text(&text) {
        log::debug!("copy failed: {err}");
    }
}

/// The text a copy button copies: the visible text of its block's first
/// child element.
///
/// A block without child elements of its own (`<pre>text</pre>`) yields its
/// text nodes instead, so the button never copies its own label.
pub fn code_text(button: &Element) -> Option<String> {
    let block = button.parent_element()?;
    let button: &Node = button;

    match block.first_element_child() {
        Some(first) if !first.is_same_node(Some(button)) => Some(dom::visible_text(&first)),
        _ => Some(text_without(&block, button)),
    }
}

fn text_without(block: &Element, skip: &Node) -> String {
    let children = block.child_nodes();
    (0..children.length())
        .filter_map(|i| children.get(i))
        .filter(|node| !node.is_same_node(Some(skip)))
        .filter_map(|node| node.text_content())
        .collect()
}
