use chrono::Datelike;
use log::warn;
use yew::prelude::*;

use crate::components::cards::{CheckList, FeatureCard, IconGlyph, SectionHeading, StatBlock, TierCard};
use crate::components::header::SiteHeader;
use crate::config::EnhancerConfig;
use crate::content::{self, Icon};
use crate::enhance;

#[function_component(Landing)]
pub fn landing() -> Html {
    // Enhance once the sections are in the DOM, detach on unmount.
    use_effect_with_deps(
        |_| {
            let enhancements = match enhance::install_on_page(&EnhancerConfig::default()) {
                Ok(enhancements) => Some(enhancements),
                Err(err) => {
                    warn!("Page enhancements unavailable: {}", err);
                    None
                }
            };
            move || drop(enhancements)
        },
        (),
    );

    html! {
        <div id="top" class="landing-page">
            <SiteHeader />
            <main>
                <Hero />
                <Services />
                <IotSection />
                <Packages />
                <Industries />
                <WhyUs />
                <Training />
                <About />
                <CallToAction />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="container hero-grid">
                <div class="hero-copy rise-in">
                    <p class="eyebrow">{"Cloud • Cybersecurity • IoT • Automation"}</p>
                    <h1>
                        {"Secure, Scalable Cloud & IoT for Africa's "}
                        <span class="highlight">{"Growing Businesses"}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"We help SMEs, NGOs, schools, healthcare and finance teams migrate, secure, automate, and grow, without overspending."}
                    </p>
                    <div class="hero-cta-group">
                        <a href="#contact" class="button">{"Start a Free Assessment"}</a>
                        <a href="#services" class="button button-outline">{"Download Service Catalog"}</a>
                    </div>
                    <div class="stats-grid">
                        { for content::HERO_STATS.iter().map(|stat| html! { <StatBlock stat={*stat} /> }) }
                    </div>
                </div>
                <div class="card hero-card rise-in rise-in-delayed">
                    <div class="hero-highlights">
                        { for content::HERO_HIGHLIGHTS.iter().map(|service| html! { <FeatureCard service={*service} /> }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Services)]
fn services() -> Html {
    html! {
        <section id="services" class="band band-muted">
            <div class="container">
                <SectionHeading
                    eyebrow="What we do"
                    title="Cloud computing, cybersecurity, IoT & automation"
                    sub="Start lean. Scale fast. Stay secure. Our bundles are designed for small teams up to large orgs."
                />
                <div class="grid grid-3">
                    { for content::SERVICES.iter().map(|service| html! { <FeatureCard service={*service} /> }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(IotSection)]
fn iot_section() -> Html {
    html! {
        <section id="iot" class="band">
            <div class="container">
                <SectionHeading
                    eyebrow="Connected solutions"
                    title="IoT & Automation"
                    sub="Secure device fleets, stream data, and automate actions from edge to cloud."
                />
                <div class="grid grid-2">
                    <div class="card">
                        <h4>{"What we deliver"}</h4>
                        <CheckList items={content::IOT_DELIVERABLES} />
                        <a href="#contact" class="button button-outline">
                            {"Request IoT Demo "}<IconGlyph icon={Icon::ArrowRight} />
                        </a>
                    </div>
                    <div class="card">
                        <h4>{"Use cases"}</h4>
                        <CheckList items={content::IOT_USE_CASES} icon={Icon::Wifi} />
                        <a href="#contact" class="button">
                            {"Get a Solution Plan "}<IconGlyph icon={Icon::ArrowRight} />
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Packages)]
fn packages() -> Html {
    html! {
        <section id="packages" class="band">
            <div class="container">
                <SectionHeading
                    eyebrow="Pricing"
                    title="Simple packages that grow with you"
                    sub="Transparent tiers; custom quotes for enterprises and regulated sectors."
                />
                <div class="grid grid-3">
                    { for content::TIERS.iter().map(|tier| html! { <TierCard tier={*tier} /> }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Industries)]
fn industries() -> Html {
    html! {
        <section id="industries" class="band band-muted">
            <div class="container">
                <SectionHeading
                    title="Where we make the biggest impact"
                    sub="We focus on data-sensitive and connected industries."
                />
                <div class="grid grid-5">
                    { for content::INDUSTRIES.iter().map(|service| html! { <FeatureCard service={*service} /> }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(WhyUs)]
fn why_us() -> Html {
    html! {
        <section class="band">
            <div class="container">
                <SectionHeading
                    title="Why LewisCloud"
                    sub="Secure by default, cost-optimized by design, and human support when you need it."
                />
                <div class="grid grid-3">
                    <div class="card">
                        <h4>{"Mission"}</h4>
                        <p>{content::MISSION}</p>
                    </div>
                    <div class="card">
                        <h4>{"Vision"}</h4>
                        <p>{content::VISION}</p>
                    </div>
                    <div class="card">
                        <h4>{"Principles"}</h4>
                        <CheckList items={content::PRINCIPLES} />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Training)]
fn training() -> Html {
    html! {
        <section id="training" class="band band-muted">
            <div class="container">
                <SectionHeading
                    eyebrow="Upskill fast"
                    title="Training & workshops"
                    sub="From staff awareness to admin-level cloud security clinics."
                />
                <div class="grid grid-3">
                    { for content::TRAININGS.iter().map(|service| html! { <FeatureCard service={*service} /> }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(About)]
fn about() -> Html {
    html! {
        <section id="about" class="band">
            <div class="container">
                <SectionHeading
                    title={format!("About {}", content::COMPANY_LEGAL)}
                    sub="Founded by Lewis to make modern cloud security and automation accessible to every organization, big or small."
                />
                <div class="grid grid-2">
                    <div class="card">
                        <h4>{"What we believe"}</h4>
                        <p>{content::BELIEF}</p>
                    </div>
                    <div class="card">
                        <h4>{"How we work"}</h4>
                        <CheckList items={content::WORKING_STYLE} />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(CallToAction)]
fn call_to_action() -> Html {
    html! {
        <section class="band band-tight">
            <div class="container">
                <div class="card card-dark cta-card">
                    <h3>{"Ready to secure, connect and automate?"}</h3>
                    <p>{"Book a free discovery call. We'll map your quick wins and a 90-day action plan."}</p>
                    <a href="#contact" class="button button-light">
                        {"Book a Call "}<IconGlyph icon={Icon::ArrowRight} />
                    </a>
                </div>
            </div>
        </section>
    }
}

#[function_component(Contact)]
fn contact() -> Html {
    // The form is not wired to anything yet, keep the page from reloading.
    let onsubmit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        log::debug!("Contact form submitted, no handler configured");
    });

    html! {
        <section id="contact" class="band band-muted">
            <div class="container">
                <SectionHeading
                    title="Contact us"
                    sub="Tell us a little about your goals (migration, automation, cost savings, or a security upgrade) and we'll respond within 24 hours."
                />
                <div class="grid grid-2">
                    <div class="card">
                        <form class="contact-form" onsubmit={onsubmit}>
                            <input name="name" placeholder="Name" />
                            <input name="email" type="email" placeholder="Work email" />
                            <input name="company" placeholder="Company" />
                            <select name="service">
                                <option>{"Service of interest"}</option>
                                { for content::SERVICES_OF_INTEREST.iter().map(|s| html! { <option>{*s}</option> }) }
                            </select>
                            <textarea name="goals" placeholder="What do you want to achieve in the next 90 days?" />
                            <button type="submit" class="button">
                                {"Send enquiry "}<IconGlyph icon={Icon::Rocket} />
                            </button>
                        </form>
                    </div>
                    <div class="card">
                        <div class="contact-details">
                            { for content::CONTACT_DETAILS.iter().map(|(icon, text)| html! {
                                <div class="contact-line"><IconGlyph icon={*icon} />{" "}{*text}</div>
                            }) }
                        </div>
                        <p class="fine-print">
                            {"By submitting this form you agree to our privacy policy and consent to be contacted about our services."}
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}

pub fn copyright_line(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, content::COMPANY_LEGAL)
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = chrono::Local::now().year();
    html! {
        <footer class="site-footer">
            <div class="container footer-content">
                <div class="footer-brand">
                    <span class="logo-mark logo-mark-small"><IconGlyph icon={Icon::Cloud} /></span>
                    <span>{content::COMPANY}</span>
                </div>
                <div class="fine-print">{copyright_line(year)}</div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_the_legal_entity_and_year() {
        assert_eq!(
            copyright_line(2026),
            "© 2026 LewisCloud Innovations Limited. All rights reserved."
        );
    }
}
