#![cfg(target_arch = "wasm32")]

use anduril_decorator::{DecoratorConfig, dom};
use frontend::page_config;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn page(html: &str) -> web_sys::Document {
    let document = dom::document().expect("document");
    dom::body(&document).expect("body").set_inner_html(html);
    document
}

#[wasm_bindgen_test]
fn test_defaults_without_config_script() {
    let document = page("<p>no config</p>");
    assert_eq!(page_config(&document), DecoratorConfig::default());
}

#[wasm_bindgen_test]
fn test_reads_config_script() {
    let document = page(
        r#"<script id="anduril-config" type="application/json">
             { "pre_class": "d-flex", "search_input_id": "q" }
           </script>"#,
    );

    let config = page_config(&document);
    assert_eq!(config.pre_class, "d-flex");
    assert_eq!(config.search_input_id, "q");
    assert_eq!(config.table_class, "table");
}

#[wasm_bindgen_test]
fn test_invalid_config_script_falls_back() {
    let document = page(
        r#"<script id="anduril-config" type="application/json">{ "button_label": "" }</script>"#,
    );
    assert_eq!(page_config(&document), DecoratorConfig::default());
}
