use portfolio_shared::Profile;
use yew::prelude::*;

use crate::{
    components::icons::{Icon, IconName},
    i18n::current::hero as t,
};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub profile: Profile,
}

#[function_component(HeroSection)]
pub fn hero_section(props: &HeroProps) -> Html {
    let profile = &props.profile;

    html! {
        <section id="home" class="hero section">
            <p class="hero__greeting">{ t::GREETING }</p>
            <h1 class="hero__name">{ &profile.name }</h1>
            <h2 class="hero__role">{ &profile.role }</h2>
            <p class="hero__tagline">{ &profile.tagline }</p>

            <div class="hero__socials">
                { for profile.socials.iter().map(|social| {
                    html! {
                        <a
                            class="hero__social-link"
                            href={social.href.clone()}
                            target="_blank"
                            rel="noreferrer"
                            aria-label={social.label.clone()}
                            title={social.label.clone()}
                        >
                            {
                                match IconName::from_slug(&social.icon) {
                                    Some(icon) => html! { <Icon name={icon} /> },
                                    None => html! { <span>{ &social.label }</span> },
                                }
                            }
                        </a>
                    }
                }) }
            </div>

            <div class="hero__actions">
                <a class="btn btn--primary" href="#contact">{ t::CTA_CONTACT }</a>
                <a class="btn btn--ghost" href="#projects">{ t::CTA_PROJECTS }</a>
            </div>
        </section>
    }
}
