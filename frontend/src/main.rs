//! WASM entry point for the portfolio frontend.
//!
//! Wires the top-level [`App`] component — header, content sections, footer,
//! and scroll-to-top button — and mounts it with the Yew client-side renderer.

mod components;
mod config;
mod content;
mod hooks;
mod i18n;
mod sections;
mod theme;

use yew::prelude::*;

use crate::{
    components::{footer::Footer, header::Header, scroll_to_top_button::ScrollToTopButton},
    sections::{
        about::AboutSection, contact::ContactSection, hero::HeroSection,
        projects::ProjectsSection, skills::SkillsSection,
    },
};

#[function_component(App)]
fn app() -> Html {
    // Apply the persisted theme before the first paint settles.
    use_effect_with((), |_| {
        theme::init_theme();
        || ()
    });

    let profile = content::profile();

    html! {
        <>
            <Header />
            <main>
                <HeroSection profile={profile.clone()} />
                <AboutSection profile={profile.clone()} />
                <SkillsSection skills={profile.skills.clone()} tools={profile.tools.clone()} />
                <ProjectsSection projects={profile.projects.clone()} />
                <ContactSection profile={profile.clone()} />
            </main>
            <Footer profile={profile} />
            <ScrollToTopButton />
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
