use yew::prelude::*;

use super::cards::IconGlyph;
use crate::content::{Icon, COMPANY, NAV_LINKS};

/// Sticky top bar. The burger button and its panel are plain markup, the
/// page enhancer wires the toggling once everything is mounted.
#[function_component(SiteHeader)]
pub fn site_header() -> Html {
    let nav_links = || {
        NAV_LINKS.iter().map(|link| {
            html! { <a href={link.href} class="nav-link">{link.label}</a> }
        })
    };

    html! {
        <header class="top-nav">
            <div class="nav-content">
                <a href="#top" class="nav-logo">
                    <span class="logo-mark"><IconGlyph icon={Icon::Cloud} /></span>
                    <span class="logo-text">{COMPANY}</span>
                </a>

                <nav class="nav-links" aria-label="Primary">
                    { for nav_links() }
                </nav>

                <div class="nav-actions">
                    <a href="#contact" class="button nav-quote">{"Get a Quote"}</a>
                    <button
                        id="menuToggle"
                        class="burger-menu"
                        type="button"
                        aria-label="Toggle navigation"
                        aria-controls="mobileMenu"
                        aria-expanded="false"
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </div>
            <nav id="mobileMenu" class="mobile-menu" aria-label="Mobile">
                { for nav_links() }
                <a href="#contact" class="button">{"Get a Quote"}</a>
            </nav>
        </header>
    }
}
