use yew::prelude::*;

use crate::content::{Icon, Service, Stat, Tier};

#[derive(Properties, PartialEq)]
pub struct IconGlyphProps {
    pub icon: Icon,
}

#[function_component(IconGlyph)]
pub fn icon_glyph(props: &IconGlyphProps) -> Html {
    html! {
        <i class={classes!("icon", format!("icon-{}", props.icon.slug()))} aria-hidden="true">
            {props.icon.glyph()}
        </i>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    #[prop_or_default]
    pub eyebrow: Option<AttrValue>,
    pub title: AttrValue,
    #[prop_or_default]
    pub sub: Option<AttrValue>,
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <div class="section-heading">
            if let Some(eyebrow) = &props.eyebrow {
                <p class="eyebrow">{eyebrow}</p>
            }
            <h2>{&props.title}</h2>
            if let Some(sub) = &props.sub {
                <p class="section-sub">{sub}</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatBlockProps {
    pub stat: Stat,
}

#[function_component(StatBlock)]
pub fn stat_block(props: &StatBlockProps) -> Html {
    html! {
        <div class="stat">
            <div class="stat-value">{props.stat.value}</div>
            <div class="stat-label">{props.stat.label}</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub service: Service,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    let Service { icon, title, desc } = props.service;
    html! {
        <div class="card feature-card">
            <div class="feature-icon"><IconGlyph icon={icon} /></div>
            <div>
                <h4>{title}</h4>
                <p>{desc}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CheckListProps {
    pub items: &'static [&'static str],
    #[prop_or(Icon::CheckCircle)]
    pub icon: Icon,
}

#[function_component(CheckList)]
pub fn check_list(props: &CheckListProps) -> Html {
    let icon = props.icon;
    html! {
        <ul class="check-list">
            { for props.items.iter().map(|item| html! {
                <li><IconGlyph icon={icon} />{" "}{*item}</li>
            }) }
        </ul>
    }
}

#[derive(Properties, PartialEq)]
pub struct TierCardProps {
    pub tier: Tier,
}

#[function_component(TierCard)]
pub fn tier_card(props: &TierCardProps) -> Html {
    let tier = &props.tier;
    html! {
        <div class="card tier-card">
            <div class="tier-header">
                <h4>{tier.name}</h4>
                <div class="tier-price">
                    {tier.price}
                    if tier.is_monthly() {
                        <span class="tier-period">{"/mo"}</span>
                    }
                </div>
            </div>
            <p class="tier-tagline">{tier.tagline}</p>
            <CheckList items={tier.items} />
            <a href="#contact" class="button button-block">{tier.cta}</a>
        </div>
    }
}
