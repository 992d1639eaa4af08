//! Scroll-to-top button.

use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::{
    config::ScrollConfig,
    dom,
    error::{DomResultExt, Result},
};

/// Wire the scroll-to-top button, if the page has one.
///
/// The button is shown once the window has scrolled past
/// `config.threshold` and scrolls smoothly back to the top when clicked.
/// Returns whether a button was found.
pub fn wire_scroll_button(
    document: &Document,
    window: &Window,
    config: &ScrollConfig,
) -> Result<bool> {
    let Some(button) = document
        .get_element_by_id(&config.button_id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        log::debug!("no #{} on this page", config.button_id);
        return Ok(false);
    };

    // Scripts are running, so the no-script fallback styling no longer applies.
    button
        .class_list()
        .remove_1("no-js")
        .dom_op("class_list.remove")?;

    let threshold = config.threshold;
    set_visible(&button, should_show(scroll_offset(window), threshold))?;

    let (win, btn) = (window.clone(), button.clone());
    dom::listen(window, "scroll", move |_: Event| {
        if let Err(err) = set_visible(&btn, should_show(scroll_offset(&win), threshold)) {
            log::debug!("toggling scroll button failed: {err}");
        }
    })?;

    let win = window.clone();
    dom::listen(&button, "click", move |ev: Event| {
        ev.prevent_default();
        scroll_to_top(&win);
    })?;

    log::debug!("wired #{}", config.button_id);
    Ok(true)
}

/// Whether the button is visible at vertical offset `scroll_y`.
pub fn should_show(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Smoothly scroll `window` back to the top of the page.
pub fn scroll_to_top(window: &Window) {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

fn scroll_offset(window: &Window) -> f64 {
    window.scroll_y().unwrap_or_default()
}

fn set_visible(button: &HtmlElement, visible: bool) -> Result<()> {
    let style = button.style();
    if visible {
        style
            .remove_property("display")
            .dom_op("remove_property")?;
    } else {
        style
            .set_property("display", "none")
            .dom_op("set_property")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_at_top() {
        assert!(!should_show(0.0, 150.0));
    }

    #[test]
    fn test_hidden_at_threshold() {
        assert!(!should_show(150.0, 150.0));
    }

    #[test]
    fn test_shown_past_threshold() {
        assert!(should_show(150.5, 150.0));
        assert!(should_show(4000.0, 150.0));
    }

    #[test]
    fn test_zero_threshold_shows_after_any_scroll() {
        assert!(!should_show(0.0, 0.0));
        assert!(should_show(1.0, 0.0));
    }
}
