//! WASM entry point for Anduril pages.
//!
//! Installs the panic hook and console logger, then decorates the page as
//! soon as its content has been parsed.

use anduril_decorator::{DecoratorConfig, dom};
use cfg_if::cfg_if;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event};

/// Id of an optional `<script type="application/json">` element holding
/// decorator overrides.
pub const CONFIG_SCRIPT_ID: &str = "anduril-config";

cfg_if! {
    if #[cfg(debug_assertions)] {
        const LOG_LEVEL: log::Level = log::Level::Debug;
    } else {
        const LOG_LEVEL: log::Level = log::Level::Warn;
    }
}

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    // A second instantiation of the module finds the logger already set.
    let _ = console_log::init_with_level(LOG_LEVEL);

    if let Err(err) = run() {
        log::warn!("page decoration not scheduled: {err}");
    }
}

fn run() -> anduril_decorator::Result<()> {
    let document = dom::document()?;

    if document.ready_state() == "loading" {
        let doc = document.clone();
        dom::listen(&document, "DOMContentLoaded", move |_: Event| {
            decorate_now(&doc)
        })?;
    } else {
        decorate_now(&document);
    }
    Ok(())
}

fn decorate_now(document: &Document) {
    let config = page_config(document);
    if let Err(err) = anduril_decorator::decorate_page(&config) {
        log::warn!("page decoration failed: {err}");
    }
}

/// Decorator settings for this page: the JSON in `#anduril-config` when
/// present and valid, the defaults otherwise.
pub fn page_config(document: &Document) -> DecoratorConfig {
    let Some(json) = document
        .get_element_by_id(CONFIG_SCRIPT_ID)
        .and_then(|script| script.text_content())
    else {
        return DecoratorConfig::default();
    };

    DecoratorConfig::from_json(&json).unwrap_or_else(|err| {
        log::warn!("ignoring #{CONFIG_SCRIPT_ID}: {err}");
        DecoratorConfig::default()
    })
}
