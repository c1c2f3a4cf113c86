#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use lewiscloud_site::content::{NAV_LINKS, SECTION_IDS};
use lewiscloud_site::pages::landing::Landing;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn landing_renders_and_enhances_the_page() {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();

    let _app = yew::Renderer::<Landing>::with_root(root.clone()).render();
    // Let the scheduler run the first render and the mount effect.
    TimeoutFuture::new(100).await;

    for id in SECTION_IDS {
        assert!(document.get_element_by_id(id).is_some(), "missing section #{}", id);
    }
    assert_eq!(root.query_selector_all("section").unwrap().length(), 10);

    // Desktop nav and mobile panel both carry every link.
    let links = root
        .query_selector_all(&format!(r#"a[href="{}"]"#, NAV_LINKS[0].href))
        .unwrap();
    assert!(links.length() >= 2);

    // Enhancer ran: sections tagged, button synthesized.
    assert!(document.get_element_by_id("services").unwrap().class_list().contains("pre-reveal"));
    assert_eq!(document.query_selector_all("#backToTop").unwrap().length(), 1);

    let toggle: HtmlElement = document.get_element_by_id("menuToggle").unwrap().dyn_into().unwrap();
    toggle.click();
    assert!(document.get_element_by_id("mobileMenu").unwrap().class_list().contains("open"));
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("true"));
}
