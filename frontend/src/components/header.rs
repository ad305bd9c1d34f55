use yew::prelude::*;

use crate::{
    components::theme_toggle::ThemeToggle,
    config,
    hooks::{use_scroll_past, use_scroll_spy},
    i18n::current::header as t,
};

#[function_component(Header)]
pub fn header() -> Html {
    let scrolled = use_scroll_past(config::HEADER_SCROLL_THRESHOLD);
    let active_section = use_scroll_spy(&config::SECTION_IDS, config::SCROLL_SPY_THRESHOLD);

    let nav_items = [
        (t::NAV_HOME, "home"),
        (t::NAV_ABOUT, "about"),
        (t::NAV_SKILLS, "skills"),
        (t::NAV_PROJECTS, "projects"),
        (t::NAV_CONTACT, "contact"),
    ];

    html! {
        <header class={classes!("header", scrolled.then_some("scrolled"))}>
            <a class="header__logo" href="#home">{ t::BRAND_NAME }</a>

            <nav class="header__nav" aria-label={t::NAV_MAIN_ARIA}>
                { for nav_items.iter().map(|(label, id)| {
                    let is_active = active_section.as_deref() == Some(*id);
                    html! {
                        <a
                            class={classes!(is_active.then_some("active-link"))}
                            href={format!("#{id}")}
                        >
                            { *label }
                        </a>
                    }
                }) }
            </nav>

            <ThemeToggle />
        </header>
    }
}
