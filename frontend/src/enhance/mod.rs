//! Progressive enhancement for the rendered landing page.
//!
//! Four independent behaviors are wired against the DOM after the first
//! render: smooth in-page anchors, the mobile menu toggle, one-shot section
//! reveals and the back-to-top button. None of them is required for the page
//! to work, so a component that cannot be installed is logged and skipped.

pub mod anchors;
pub mod back_to_top;
pub mod menu;
pub mod reveal;

use log::{debug, info, warn};
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::config::EnhancerConfig;
use back_to_top::BackToTop;
use reveal::RevealObserver;

#[derive(Debug, Error)]
pub enum EnhanceError {
    #[error("no window available")]
    NoWindow,
    #[error("no document available")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("DOM call failed: {0}")]
    Dom(String),
}

impl From<JsValue> for EnhanceError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| value.dyn_ref::<js_sys::Error>().map(|e| String::from(e.message())))
            .unwrap_or_else(|| format!("{:?}", value));
        EnhanceError::Dom(message)
    }
}

pub(crate) fn as_html(element: Element) -> Result<HtmlElement, EnhanceError> {
    element
        .dyn_into::<HtmlElement>()
        .map_err(|element| EnhanceError::Dom(format!("<{}> is not an HTML element", element.tag_name())))
}

/// An event listener that is removed from its target when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, EnhanceError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Everything installed on the page. Dropping it detaches all of it.
#[derive(Default)]
pub struct Enhancements {
    anchors: Vec<Listener>,
    menu: Vec<Listener>,
    reveal: Option<RevealObserver>,
    back_to_top: Option<BackToTop>,
}

impl Enhancements {
    pub fn anchor_count(&self) -> usize {
        self.anchors.len()
    }

    pub fn menu_installed(&self) -> bool {
        !self.menu.is_empty()
    }

    pub fn reveal_installed(&self) -> bool {
        self.reveal.is_some()
    }

    pub fn back_to_top(&self) -> Option<&BackToTop> {
        self.back_to_top.as_ref()
    }
}

fn contained<T: Default>(component: &str, result: Result<T, EnhanceError>) -> T {
    result.unwrap_or_else(|err| {
        warn!("{} enhancement skipped: {}", component, err);
        T::default()
    })
}

/// Wires every enhancement against `document`, in a fixed order.
pub fn install(window: &Window, document: &Document, config: &EnhancerConfig) -> Enhancements {
    let anchors = contained("anchor", anchors::install(window, document));
    debug!("Smooth scrolling wired for {} anchors", anchors.len());

    let menu = contained("menu", menu::install(document, config));
    let reveal = contained("reveal", reveal::install(window, document, config));
    let back_to_top = contained("back-to-top", back_to_top::install(window, document, config).map(Some));

    info!("LewisCloud Innovations: page initialized.");
    Enhancements {
        anchors,
        menu,
        reveal,
        back_to_top,
    }
}

/// Same as [`install`], resolving the global window and document first.
pub fn install_on_page(config: &EnhancerConfig) -> Result<Enhancements, EnhanceError> {
    let window = web_sys::window().ok_or(EnhanceError::NoWindow)?;
    let document = window.document().ok_or(EnhanceError::NoDocument)?;
    Ok(install(&window, &document, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contained_falls_back_to_default() {
        let skipped: Vec<u8> = contained("test", Err(EnhanceError::NoBody));
        assert!(skipped.is_empty());

        let kept = contained("test", Ok(vec![1u8, 2]));
        assert_eq!(kept, vec![1, 2]);
    }

    #[test]
    fn errors_render_readable_messages() {
        assert_eq!(EnhanceError::NoWindow.to_string(), "no window available");
        assert_eq!(
            EnhanceError::Dom("boom".to_string()).to_string(),
            "DOM call failed: boom"
        );
    }

    #[test]
    fn empty_enhancements_report_nothing_installed() {
        let enhancements = Enhancements::default();
        assert_eq!(enhancements.anchor_count(), 0);
        assert!(!enhancements.menu_installed());
        assert!(!enhancements.reveal_installed());
        assert!(enhancements.back_to_top().is_none());
    }
}
