use web_sys::window;
use yew::prelude::*;

use crate::{
    components::icons::{Icon, IconName},
    config,
    hooks::use_scroll_past,
    i18n::current::scroll_to_top as t,
};

#[function_component(ScrollToTopButton)]
pub fn scroll_to_top_button() -> Html {
    let visible = use_scroll_past(config::SCROLL_TOP_THRESHOLD);

    let onclick = Callback::from(|e: MouseEvent| {
        e.prevent_default();

        if let Some(window) = window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            options.set_top(0.0);
            options.set_left(0.0);

            let _ = window.scroll_with_scroll_to_options(&options);
        }
    });

    html! {
        <button
            type="button"
            id="scroll-top-btn"
            class={classes!("scroll-top", visible.then_some("visible"))}
            onclick={onclick}
            aria-label={t::TOOLTIP}
            title={t::TOOLTIP}
        >
            <Icon name={IconName::ArrowUp} />
        </button>
    }
}
