use log::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window};

use super::{EnhanceError, Listener};

const SAME_PAGE_LINKS: &str = r##"a[href^="#"]"##;

/// The element id a same-document href points at, if any.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn fragment_target(document: &Document, href: &str) -> Option<Element> {
    fragment_id(href).and_then(|id| document.get_element_by_id(id))
}

/// Smoothly scrolls to the element named by `href` and swaps the URL
/// fragment in place. Returns `false` without touching anything when no
/// element carries that id.
pub fn navigate_to_fragment(window: &Window, document: &Document, href: &str) -> Result<bool, EnhanceError> {
    let Some(target) = fragment_target(document, href) else {
        return Ok(false);
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);

    window
        .history()?
        .replace_state_with_url(&JsValue::NULL, "", Some(href))?;
    Ok(true)
}

pub(crate) fn install(window: &Window, document: &Document) -> Result<Vec<Listener>, EnhanceError> {
    let links = document.query_selector_all(SAME_PAGE_LINKS)?;
    let mut listeners = Vec::with_capacity(links.length() as usize);

    for index in 0..links.length() {
        let Some(anchor) = links.item(index).and_then(|node| node.dyn_into::<Element>().ok()) else {
            continue;
        };

        let window = window.clone();
        let document = document.clone();
        let link = anchor.clone();
        let listener = Listener::new(&anchor, "click", move |event: Event| {
            // Read at click time: the href may have changed since install.
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            match navigate_to_fragment(&window, &document, &href) {
                Ok(true) => event.prevent_default(),
                Ok(false) => {}
                Err(err) => {
                    // The scroll already started, keep the browser from jumping.
                    event.prevent_default();
                    warn!("Could not update fragment for {}: {}", href, err);
                }
            }
        })?;
        listeners.push(listener);
    }

    Ok(listeners)
}
